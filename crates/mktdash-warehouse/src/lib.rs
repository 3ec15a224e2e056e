//! Fetches US macro indicators and market data, and turns them into tables and a narrative
//! report.
//!
//! Economic categories come from FRED and fail as a unit. Market tables come from the NY Fed and
//! Yahoo Finance; each degrades to a placeholder of its own instead of failing.

pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod schema;
pub mod table;

pub use api::SeriesSource;
pub use config::Endpoints;
pub use error::{Error, Result};
pub use schema::econ::catalog::{Catalog, CategoryId};
pub use schema::econ::fred::Fred;
pub use schema::econ::{aggregate, aggregate_all, CategoryTable};
pub use schema::market::MarketSnapshot;
pub use table::{Frame, Table};
