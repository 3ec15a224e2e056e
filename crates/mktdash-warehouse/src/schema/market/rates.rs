use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::table::{Row, Table};
use mktdash_util::ClientExt;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, warn};

pub const UNAVAILABLE: &str = "Reference rate data is currently unavailable";

const FEED: &str = "NY Fed reference rates";

/// Latest published reference rates, or a placeholder if the feed cannot be used.
pub async fn fetch(http_client: &HttpClient, endpoints: &Endpoints) -> Table<RefRate> {
    let url = format!("{}/api/rates/all/latest.json", endpoints.nyfed);
    let rows = match http_client.fetch_json::<RefRates>(&url, FEED).await {
        Ok(data) => reshape(data),
        Err(e) => Err(e.into()),
    };

    match rows {
        Ok(rows) => {
            debug!("{} reference rates collected", rows.len());
            Table::Rows(rows)
        }
        Err(e) => {
            warn!("{FEED} unavailable, substituting placeholder: {e}");
            Table::placeholder(UNAVAILABLE)
        }
    }
}

/// Drop the first entry (the feed leads with an index row that is not a rate), then keep every
/// entry that carries a percent rate.
pub fn reshape(data: RefRates) -> Result<Vec<RefRate>> {
    let rows: Vec<RefRate> = data
        .inner
        .into_iter()
        .skip(1)
        .filter_map(|entry| match entry.percent_rate {
            Some(rate) => Some(RefRate {
                dated: entry.effective_date,
                rate_type: entry.rate_type,
                rate,
            }),
            None => {
                warn!(
                    "{} on {} has no percent rate; skipping",
                    entry.rate_type, entry.effective_date
                );
                None
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(Error::absent(FEED, "rates"));
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefRate {
    pub dated: String,
    pub rate_type: String,
    pub rate: f64,
}

impl Row for RefRate {
    const COLUMNS: &'static [&'static str] = &["Date", "Rate Type", "Rate (%)"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.dated.clone(),
            self.rate_type.clone(),
            self.rate.to_string(),
        ]
    }
}

// Input: NY Fed
#[derive(Debug, Deserialize)]
pub struct RefRates {
    #[serde(rename = "refRates")]
    pub inner: Vec<RefRateEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefRateEntry {
    pub effective_date: String,
    #[serde(rename = "type")]
    pub rate_type: String,
    pub percent_rate: Option<f64>,
}
