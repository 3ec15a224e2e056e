use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::{error, trace};

/// Failure of a single HTTP JSON fetch.
///
/// `target` is a loggable label for the request (e.g. `FRED GDPC1`); it never carries the query
/// string, so API keys stay out of logs and user-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{target} responded with status {status}")]
    Status { target: String, status: StatusCode },

    #[error("failed to deserialize response from {target}: {source}")]
    Decode {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Build the shared [`reqwest::Client`]; every request made through it is bounded by `timeout`.
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
pub fn build_client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
    reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

pub trait ClientExt {
    /// GET `url` and deserialize the JSON body into `D`.
    ///
    /// Non-2xx responses are errors, as are bodies that do not match `D`.
    fn fetch_json<D>(
        &self,
        url: &str,
        target: &str,
    ) -> impl Future<Output = Result<D, FetchError>> + Send
    where
        D: DeserializeOwned + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientExt for Client {
    async fn fetch_json<D>(&self, url: &str, target: &str) -> Result<D, FetchError>
    where
        D: DeserializeOwned + Send,
    {
        trace!("fetching {target}");
        let response = self.get(url).send().await.map_err(|e| {
            let source = e.without_url();
            error!("{target} request error: {source}");
            FetchError::Transport {
                target: target.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("{target} responded with {status}");
            return Err(FetchError::Status {
                target: target.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            let source = e.without_url();
            error!("{target} body error: {source}");
            FetchError::Transport {
                target: target.to_string(),
                source,
            }
        })?;

        trace!("deserializing {target}");
        serde_json::from_slice::<D>(&body).map_err(|source| {
            error!("{target} deserialization error: {source}");
            FetchError::Decode {
                target: target.to_string(),
                source,
            }
        })
    }
}
