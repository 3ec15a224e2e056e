use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::table::{Row, Table};
use chrono::DateTime;
use mktdash_util::ClientExt;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, trace, warn};

pub const UNAVAILABLE: &str = "Equity index data is currently unavailable";

/// An index-tracking fund and the index it is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFund {
    pub ticker: &'static str,
    pub name: &'static str,
}

/// Statically defined index funds; rows are reported in this order.
pub const INDEX_FUNDS: &[IndexFund] = &[
    IndexFund {
        ticker: "IVV",
        name: "S&P 500 (ETF)",
    },
    IndexFund {
        ticker: "QQQ",
        name: "NASDAQ 100 (ETF)",
    },
    IndexFund {
        ticker: "DIA",
        name: "DJIA (ETF)",
    },
];

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Latest daily bar from Yahoo Finance, per fund
//
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Most recent bar of every fund, fetched in order.
///
/// The first fund that fails turns the whole snapshot into a placeholder; the remaining funds are
/// not fetched.
pub async fn fetch(
    http_client: &HttpClient,
    endpoints: &Endpoints,
    funds: &[IndexFund],
) -> Table<EquityBar> {
    let mut bars = Vec::with_capacity(funds.len());

    for fund in funds {
        match fetch_one(http_client, endpoints, fund).await {
            Ok(bar) => {
                trace!(
                    "[{}] {} closed at {} on {}",
                    fund.ticker, fund.name, bar.close, bar.dated
                );
                bars.push(bar);
            }
            Err(e) => {
                warn!(
                    "[{}] {} unavailable, substituting placeholder for every index: {e}",
                    fund.ticker, fund.name
                );
                return Table::placeholder(UNAVAILABLE);
            }
        }
    }

    debug!("{} equity bars collected", bars.len());
    Table::Rows(bars)
}

fn url(base: &str, ticker: &str, interval: &str, range: &str) -> String {
    let tckr = ticker.to_uppercase();
    format!("{base}/v8/finance/chart/{tckr}?symbol={tckr}&interval={interval}&range={range}")
}

async fn fetch_one(
    http_client: &HttpClient,
    endpoints: &Endpoints,
    fund: &IndexFund,
) -> Result<EquityBar> {
    let feed = format!("Yahoo Finance {}", fund.ticker);
    let url = url(&endpoints.yahoo, fund.ticker, "1d", "5d");
    let history: PriceHistory = http_client.fetch_json(&url, &feed).await?;
    latest_bar(fund, history, &feed)
}

/// The newest bar with open, close and volume all present.
pub fn latest_bar(fund: &IndexFund, history: PriceHistory, feed: &str) -> Result<EquityBar> {
    let base = history
        .chart
        .result
        .and_then(|result| result.into_iter().next())
        .ok_or_else(|| Error::malformed(feed, "contained no \"chart.result\" object"))?;
    let quote = base
        .indicators
        .quote
        .first()
        .ok_or_else(|| Error::malformed(feed, "contained no quote"))?;

    for (i, timestamp) in base.timestamp.iter().enumerate().rev() {
        let open = quote.open.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        if let (Some(open), Some(close), Some(volume)) = (open, close, volume) {
            let dated = DateTime::from_timestamp(*timestamp, 0)
                .ok_or_else(|| Error::malformed(feed, format!("invalid timestamp {timestamp}")))?
                .date_naive()
                .to_string();
            return Ok(EquityBar {
                index: fund.name.to_string(),
                dated,
                ticker: fund.ticker.to_string(),
                open,
                close,
                volume,
            });
        }
        trace!("{feed} bar {i} is incomplete; looking further back");
    }

    Err(Error::absent(feed, "complete daily bar"))
}

/// Latest session of one fund, labelled by its index name.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityBar {
    pub index: String,
    pub dated: String,
    pub ticker: String,
    pub open: f64,
    pub close: f64,
    pub volume: i64,
}

impl Row for EquityBar {
    const COLUMNS: &'static [&'static str] = &["Index", "Date", "Ticker", "Open", "Close", "Volume"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.index.clone(),
            self.dated.clone(),
            self.ticker.clone(),
            format!("{:.2}", self.open),
            format!("{:.2}", self.close),
            self.volume.to_string(),
        ]
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Deserialization
//
///////////////////////////////////////////////////////////////////////////////////////////////////

// Input: Yahoo Finance; high, low and adjclose are not carried
#[derive(Deserialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
}

#[derive(Deserialize, Debug)]
pub struct PriceCategories {
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

/// Yahoo leaves `null` holes for sessions still in progress.
#[derive(Deserialize, Debug)]
pub struct Quote {
    pub open: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<i64>>,
}
