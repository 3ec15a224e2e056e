use crate::error::Result;
use crate::schema::econ::fred::ObservationPair;
use std::future::Future;

/// Where indicator observations come from.
///
/// The category aggregator only needs the two most recent observations of a series; keeping
/// that behind a trait lets it run against FRED in production and against canned data in tests.
pub trait SeriesSource {
    /// Latest and penultimate observation of the series `code`.
    ///
    /// Transport and payload errors are returned as-is; the caller decides what a failure means.
    fn latest_pair(&self, code: &str) -> impl Future<Output = Result<ObservationPair>> + Send;
}
