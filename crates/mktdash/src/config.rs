use mktdash_warehouse::config::{FRED_URL, NYFED_URL, YAHOO_URL};
use mktdash_warehouse::Endpoints;
use tracing::{debug, warn};

/// Everything read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoints: Endpoints,
    pub user_agent: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    /// `FRED_API` and `USER_AGENT`, plus optional `FRED_URL`, `NYFED_URL` and `YAHOO_URL`
    /// overrides.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fred_api_key = lookup("FRED_API").unwrap_or_else(|| {
            warn!("FRED_API is not set; economic categories will be unavailable");
            String::new()
        });
        let user_agent = lookup("USER_AGENT")
            .unwrap_or_else(|| format!("mktdash/{}", env!("CARGO_PKG_VERSION")));

        let endpoints = Endpoints::new(fred_api_key)
            .with_fred(&lookup("FRED_URL").unwrap_or_else(|| FRED_URL.to_string()))
            .with_nyfed(&lookup("NYFED_URL").unwrap_or_else(|| NYFED_URL.to_string()))
            .with_yahoo(&lookup("YAHOO_URL").unwrap_or_else(|| YAHOO_URL.to_string()));
        debug!(
            "endpoints: fred = {}, nyfed = {}, yahoo = {}",
            endpoints.fred, endpoints.nyfed, endpoints.yahoo
        );

        Self {
            endpoints,
            user_agent,
        }
    }
}
