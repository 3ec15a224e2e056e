use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::table::{Row, Table};
use mktdash_util::ClientExt;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, trace, warn};

pub const UNAVAILABLE: &str = "Repo and reverse repo operation data is currently unavailable";

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Repo & Reverse Repo operations from the NY Fed, latest of each kind
//
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Two-week window first, then the latest-only endpoint; a placeholder if neither can be used.
///
/// Whatever is returned comes from a single payload.
pub async fn fetch(http_client: &HttpClient, endpoints: &Endpoints) -> Table<RepoOperation> {
    let windows = [
        ("lastTwoWeeks", "NY Fed repo operations (two weeks)"),
        ("latest", "NY Fed repo operations (latest)"),
    ];

    for (window, feed) in windows {
        let url = format!("{}/api/rp/all/all/results/{window}.json", endpoints.nyfed);
        let rows = match http_client.fetch_json::<RepoResults>(&url, feed).await {
            Ok(data) => reshape(data, feed),
            Err(e) => Err(e.into()),
        };

        match rows {
            Ok(rows) => {
                debug!("repo operations collected from {feed}");
                return Table::Rows(rows);
            }
            Err(e) => warn!("{feed} unusable: {e}"),
        }
    }

    warn!("every repo operations source failed, substituting placeholder");
    Table::placeholder(UNAVAILABLE)
}

/// Flatten the most recent repo and reverse repo operation into `[repo, reverse repo]`.
pub fn reshape(data: RepoResults, feed: &str) -> Result<Vec<RepoOperation>> {
    let mut repo = None;
    let mut reverse = None;

    for operation in data.repo.operations {
        match operation {
            Operation::Repo(record) if repo.is_none() => {
                repo = Some(record.flatten(feed, OperationKind::Repo, |d| {
                    (d.security_type.clone(), d.minimum_bid_rate)
                })?)
            }
            Operation::ReverseRepo(record) if reverse.is_none() => {
                reverse = Some(record.flatten(feed, OperationKind::ReverseRepo, |d| {
                    (d.security_type.clone(), d.percent_offering_rate)
                })?)
            }
            Operation::Other => trace!("skipping operation of unknown type"),
            _ => {}
        }
        if repo.is_some() && reverse.is_some() {
            break;
        }
    }

    match (repo, reverse) {
        (Some(repo), Some(reverse)) => Ok(vec![repo, reverse]),
        (None, _) => Err(Error::absent(feed, "repo operation")),
        (_, None) => Err(Error::absent(feed, "reverse repo operation")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Repo,
    ReverseRepo,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Repo => f.write_str("Repo"),
            OperationKind::ReverseRepo => f.write_str("Reverse Repo"),
        }
    }
}

/// One operation in uniform columns, whatever its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoOperation {
    pub kind: OperationKind,
    pub operation_date: String,
    pub maturity_date: String,
    pub security_type: String,
    pub rate: f64,
}

impl Row for RepoOperation {
    const COLUMNS: &'static [&'static str] = &[
        "Operation Type",
        "Operation Date",
        "Maturity Date",
        "Type",
        "Rate",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.operation_date.clone(),
            self.maturity_date.clone(),
            self.security_type.clone(),
            self.rate.to_string(),
        ]
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Deserialization
//
///////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
pub struct RepoResults {
    pub repo: RepoBook,
}

#[derive(Debug, Deserialize)]
pub struct RepoBook {
    pub operations: Vec<Operation>,
}

/// Operations are told apart by `operationType`; each kind has its own detail record.
#[derive(Debug, Deserialize)]
#[serde(tag = "operationType")]
pub enum Operation {
    #[serde(rename = "Repo")]
    Repo(OperationRecord<RepoDetail>),

    #[serde(rename = "Reverse Repo")]
    ReverseRepo(OperationRecord<ReverseRepoDetail>),

    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord<D> {
    pub operation_date: String,
    pub maturity_date: String,
    pub details: Vec<D>,
}

impl<D> OperationRecord<D> {
    /// Read security type and rate off the first detail entry.
    fn flatten(
        self,
        feed: &str,
        kind: OperationKind,
        pick: impl Fn(&D) -> (String, Option<f64>),
    ) -> Result<RepoOperation> {
        let detail = self
            .details
            .first()
            .ok_or_else(|| Error::malformed(feed, format!("{kind} operation has no details")))?;
        let (security_type, rate) = pick(detail);
        let rate =
            rate.ok_or_else(|| Error::malformed(feed, format!("{kind} operation has no rate")))?;

        Ok(RepoOperation {
            kind,
            operation_date: self.operation_date,
            maturity_date: self.maturity_date,
            security_type,
            rate,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDetail {
    pub security_type: String,
    pub minimum_bid_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRepoDetail {
    pub security_type: String,
    pub percent_offering_rate: Option<f64>,
}
