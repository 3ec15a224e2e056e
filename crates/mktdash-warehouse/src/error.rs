use mktdash_util::FetchError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Timeout, refused connection, non-2xx status or an undecodable body.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The payload decoded but lacks something the reshaping needs.
    #[error("malformed payload from {feed}: {detail}")]
    Malformed { feed: String, detail: String },

    /// The upstream answered legitimately with nothing to report.
    #[error("{feed} returned no {what}")]
    Absent { feed: String, what: String },

    /// A consumer asked a table for a row or shape it does not hold.
    #[error("lookup failed: {0}")]
    Lookup(String),
}

impl Error {
    pub(crate) fn malformed(feed: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Malformed {
            feed: feed.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn absent(feed: impl Into<String>, what: impl Into<String>) -> Self {
        Error::Absent {
            feed: feed.into(),
            what: what.into(),
        }
    }
}
