use crate::api::SeriesSource;
use crate::config::Endpoints;
use crate::error::{Error, Result};
use mktdash_util::ClientExt;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, trace};

/// FRED series observations, fetched newest first.
pub struct Fred<'a> {
    http_client: &'a HttpClient,
    endpoints: &'a Endpoints,
}

impl<'a> Fred<'a> {
    pub fn new(http_client: &'a HttpClient, endpoints: &'a Endpoints) -> Self {
        Self {
            http_client,
            endpoints,
        }
    }

    fn url(&self, code: &str) -> String {
        format!(
            "{}/fred/series/observations?series_id={code}&api_key={}&sort_order=desc&file_type=json&limit=2",
            self.endpoints.fred, self.endpoints.fred_api_key
        )
    }
}

impl SeriesSource for Fred<'_> {
    async fn latest_pair(&self, code: &str) -> Result<ObservationPair> {
        let target = format!("FRED {code}");
        trace!("fetching latest observations for {code}");
        let data: Observations = self.http_client.fetch_json(&self.url(code), &target).await?;
        let pair = ObservationPair::from_desc(data.inner)
            .ok_or_else(|| Error::malformed(&target, "fewer than two observations"))?;
        debug!(
            "{code}: {} = {}, {} = {}",
            pair.latest.dated, pair.latest.value, pair.penultimate.dated, pair.penultimate.value
        );
        Ok(pair)
    }
}

/// The two most recent observations of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationPair {
    pub latest: Observation,
    pub penultimate: Observation,
}

impl ObservationPair {
    /// Take the first two entries of a newest-first list; `None` if there are fewer.
    pub fn from_desc(observations: Vec<Observation>) -> Option<Self> {
        let mut iter = observations.into_iter();
        Some(Self {
            latest: iter.next()?,
            penultimate: iter.next()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Observations {
    #[serde(rename = "observations")]
    pub inner: Vec<Observation>,
}

/// Date and value exactly as FRED sends them; both are strings upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Observation {
    #[serde(rename = "date")]
    pub dated: String,
    pub value: String,
}
