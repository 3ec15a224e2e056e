pub mod catalog;
pub mod fred;

use crate::api::SeriesSource;
use crate::error::{Error, Result};
use crate::table::{Frame, Row};
use catalog::{Cadence, Catalog, Category, CategoryId, Indicator};
use fred::{Observation, ObservationPair};
use tracing::{debug, error, trace};

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Period-over-period change
//
///////////////////////////////////////////////////////////////////////////////////////////////////

/// `(latest - penultimate) / penultimate * 100`.
///
/// `None` when the penultimate value is zero, or the result is otherwise not a finite number.
pub fn percent_change(latest: f64, penultimate: f64) -> Option<f64> {
    if penultimate == 0.0 {
        return None;
    }
    let change = (latest - penultimate) / penultimate * 100.0;
    change.is_finite().then_some(change)
}

/// Two decimal places and a trailing `%`; `undefined` when there is no change to report.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(change) => format!("{change:.2}%"),
        None => "undefined".to_string(),
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Category tables
//
///////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub name: &'static str,
    pub unit: &'static str,
    pub cadence: Cadence,
    pub latest: Observation,
    pub penultimate: Observation,
    pub change: Option<f64>,
}

impl IndicatorRow {
    /// Parse both observation values and derive the percent change.
    pub fn new(indicator: &Indicator, pair: ObservationPair) -> Result<Self> {
        let latest = parse_value(indicator, &pair.latest)?;
        let penultimate = parse_value(indicator, &pair.penultimate)?;
        let change = percent_change(latest, penultimate);
        if change.is_none() {
            debug!(
                "{} penultimate value is {}; percent change is undefined",
                indicator.code, pair.penultimate.value
            );
        }

        Ok(Self {
            name: indicator.name,
            unit: indicator.unit,
            cadence: indicator.cadence,
            latest: pair.latest,
            penultimate: pair.penultimate,
            change,
        })
    }
}

fn parse_value(indicator: &Indicator, obs: &Observation) -> Result<f64> {
    obs.value.trim().parse::<f64>().map_err(|_| {
        Error::malformed(
            format!("FRED {}", indicator.code),
            format!("unparseable value {:?} dated {}", obs.value, obs.dated),
        )
    })
}

impl Row for IndicatorRow {
    const COLUMNS: &'static [&'static str] = &[
        "Indicator",
        "Units",
        "Release Interval",
        "Latest Release Date",
        "Latest Release Value",
        "Penultimate Release Date",
        "Penultimate Release Value",
        "Percent Change between Periods",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.to_string(),
            self.unit.to_string(),
            self.cadence.label().to_string(),
            self.latest.dated.clone(),
            self.latest.value.clone(),
            self.penultimate.dated.clone(),
            self.penultimate.value.clone(),
            format_change(self.change),
        ]
    }
}

/// Rows of one category, in catalog order, keyed by indicator display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub id: CategoryId,
    pub rows: Vec<IndicatorRow>,
}

impl CategoryTable {
    pub fn get(&self, name: &str) -> Result<&IndicatorRow> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .ok_or_else(|| Error::Lookup(format!("{name} in {}", self.id)))
    }

    pub fn frame(&self) -> Frame {
        Frame::from_rows(self.id.title(), &self.rows)
    }
}

/// Fetch every indicator of `category`, one after another, into a table.
///
/// A single failed indicator fails the whole category; no partial table is returned.
pub async fn aggregate<S: SeriesSource>(source: &S, category: &Category) -> Result<CategoryTable> {
    let time = std::time::Instant::now();
    let mut rows = Vec::with_capacity(category.indicators.len());

    for indicator in category.indicators {
        trace!("[{}] {} aggregating", indicator.code, indicator.name);
        let row = source
            .latest_pair(indicator.code)
            .await
            .and_then(|pair| IndicatorRow::new(indicator, pair))
            .map_err(|e| {
                error!(
                    "[{}] {} failed; dropping {}: {e}",
                    indicator.code, indicator.name, category.id
                );
                e
            })?;
        rows.push(row);
    }

    debug!(
        "{} aggregated ({} rows). Elapsed time: {} ms",
        category.id,
        rows.len(),
        time.elapsed().as_millis()
    );

    Ok(CategoryTable {
        id: category.id,
        rows,
    })
}

/// [`aggregate`] every category of `catalog`, in order, stopping at the first that fails.
///
/// Tables built before the failure are returned next to its error; later categories are not
/// fetched.
pub async fn aggregate_all<S: SeriesSource>(
    source: &S,
    catalog: &Catalog,
) -> (Vec<CategoryTable>, Option<Error>) {
    let mut tables = Vec::with_capacity(catalog.categories().len());
    for category in catalog.categories() {
        match aggregate(source, category).await {
            Ok(table) => tables.push(table),
            Err(e) => return (tables, Some(e)),
        }
    }
    (tables, None)
}
