pub mod equity;
pub mod rates;
pub mod repo;

use crate::config::Endpoints;
use crate::table::{Frame, Table};
use equity::{EquityBar, INDEX_FUNDS};
use rates::RefRate;
use reqwest::Client as HttpClient;
use repo::RepoOperation;
use tracing::debug;

/// The three market tables, each either real rows or its own placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub rates: Table<RefRate>,
    pub repo: Table<RepoOperation>,
    pub equity: Table<EquityBar>,
}

impl MarketSnapshot {
    /// Reference rates, then repo operations, then each index fund in turn.
    ///
    /// Never fails: an outage in one feed only replaces that feed's table.
    pub async fn build(http_client: &HttpClient, endpoints: &Endpoints) -> Self {
        let time = std::time::Instant::now();
        let rates = rates::fetch(http_client, endpoints).await;
        let repo = repo::fetch(http_client, endpoints).await;
        let equity = equity::fetch(http_client, endpoints, INDEX_FUNDS).await;
        debug!(
            "market snapshot built. Elapsed time: {} ms",
            time.elapsed().as_millis()
        );

        Self {
            rates,
            repo,
            equity,
        }
    }

    /// Every table a placeholder, for when the market is not worth fetching.
    pub fn unavailable() -> Self {
        Self {
            rates: Table::placeholder(rates::UNAVAILABLE),
            repo: Table::placeholder(repo::UNAVAILABLE),
            equity: Table::placeholder(equity::UNAVAILABLE),
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        vec![
            self.rates.frame("Reference Rates"),
            self.repo.frame("Repo & Reverse Repo Operations"),
            self.equity.frame("Equity Indices"),
        ]
    }

    /// Every table stacked into one, for flat-file export.
    pub fn union(&self) -> Frame {
        Frame::concat("Market Snapshot", &self.frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unavailable_snapshot_is_all_placeholders() {
        let snapshot = MarketSnapshot::unavailable();
        assert!(snapshot.rates.is_placeholder());
        assert!(snapshot.repo.is_placeholder());
        assert!(snapshot.equity.is_placeholder());
        assert_eq!(snapshot.union().rows.len(), 3);
    }
}
