pub const FRED_URL: &str = "https://api.stlouisfed.org";
pub const NYFED_URL: &str = "https://markets.newyorkfed.org";
pub const YAHOO_URL: &str = "https://query1.finance.yahoo.com";

/// Base URLs of the upstream APIs, plus the FRED key.
///
/// Built by the caller and handed to every fetch; nothing in this crate reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub fred: String,
    pub nyfed: String,
    pub yahoo: String,
    pub fred_api_key: String,
}

impl Endpoints {
    pub fn new(fred_api_key: impl Into<String>) -> Self {
        Self {
            fred: FRED_URL.to_string(),
            nyfed: NYFED_URL.to_string(),
            yahoo: YAHOO_URL.to_string(),
            fred_api_key: fred_api_key.into(),
        }
    }

    /// Point every API at the same host; used against mock servers.
    pub fn all_at(base: &str, fred_api_key: impl Into<String>) -> Self {
        Self::new(fred_api_key)
            .with_fred(base)
            .with_nyfed(base)
            .with_yahoo(base)
    }

    pub fn with_fred(mut self, base: &str) -> Self {
        self.fred = trim(base);
        self
    }

    pub fn with_nyfed(mut self, base: &str) -> Self {
        self.nyfed = trim(base);
        self
    }

    pub fn with_yahoo(mut self, base: &str) -> Self {
        self.yahoo = trim(base);
        self
    }
}

fn trim(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
