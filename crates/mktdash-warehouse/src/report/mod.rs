//! Narrative report over the category and market tables.
//!
//! Sentences are fixed templates; only the direction words, the percentages and the cadence
//! abbreviations change from one run to the next. A missing row or a placeholder market table
//! stops the report where it is and closes it with [`APOLOGY`].

pub mod econ;
pub mod market;

use crate::error::{Error, Result};
use crate::schema::econ::catalog::CategoryId;
use crate::schema::econ::{format_change, CategoryTable, IndicatorRow};
use crate::schema::market::MarketSnapshot;
use chrono::NaiveDate;
use tracing::{debug, warn};

pub const DISCLAIMER: &str = "***Disclaimer: The following indicators are updated at different intervals, and, for those release at the same interval, release dates may vary. This report serves to give a general economic outlook in a range of three to six months of the U.S. economy. If you would like specific dates for the indicators used, please view the appendix.***";

pub const APOLOGY: &str = "We apologize, the rest of this report could not be prepared because some of its data is currently unavailable. Please try again later.";

/// Sign of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

/// Which set of direction words a sentence uses for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// expansion / contraction / stagnation
    Growth,
    /// increase / decrease / flatline
    Level,
}

impl Vocabulary {
    pub fn word(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (Vocabulary::Growth, Direction::Up) => "expansion",
            (Vocabulary::Growth, Direction::Down) => "contraction",
            (Vocabulary::Growth, Direction::Flat) => "stagnation",
            (Vocabulary::Level, Direction::Up) => "increase",
            (Vocabulary::Level, Direction::Down) => "decrease",
            (Vocabulary::Level, Direction::Flat) => "flatline",
        }
    }
}

/// Render the whole report, one paragraph per line.
///
/// `prepared` is the date printed in the header.
pub fn render(
    categories: &[CategoryTable],
    market: &MarketSnapshot,
    prepared: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![DISCLAIMER.to_string(), format!("Prepared on {prepared}")];

    match body(&mut lines, categories, market) {
        Ok(()) => debug!("report rendered ({} lines)", lines.len()),
        Err(e) => {
            warn!("report stopped after {} lines: {e}", lines.len());
            lines.push(APOLOGY.to_string());
        }
    }

    lines
}

fn body(lines: &mut Vec<String>, categories: &[CategoryTable], market: &MarketSnapshot) -> Result<()> {
    for id in CategoryId::ALL {
        let table = categories
            .iter()
            .find(|table| table.id == id)
            .ok_or_else(|| Error::Lookup(format!("{id} table")))?;
        lines.push(econ::paragraph(table)?);
    }

    lines.push(market::rate_range(market.rates.rows()?)?);
    lines.push(market::rate_spread(market.repo.rows()?)?);
    lines.push(market::equity_close(market.equity.rows()?)?);
    Ok(())
}

/// e.g. `a 0.35% expansion (q/q)`, or `an undefined change (m/m)` when there is no percentage.
///
/// The percentage keeps its sign (`a -0.35% contraction`).
pub fn movement(row: &IndicatorRow, vocabulary: Vocabulary) -> String {
    let c = row.cadence.abbrev();
    let phrase = match row.change {
        Some(change) => format!(
            "{} {}",
            format_change(row.change),
            vocabulary.word(Direction::of(change))
        ),
        None => "undefined change".to_string(),
    };
    format!("{} {phrase} ({c}/{c})", article(&phrase))
}

/// Indefinite article for `phrase`, reading leading digits the way they are spoken
/// ("an 8.00%", "an 11.20%", "a 1.10%").
pub fn article(phrase: &str) -> &'static str {
    let digits: String = phrase.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() {
        let eighty = digits.starts_with('8');
        let eleven = (digits.starts_with("11") || digits.starts_with("18")) && digits.len() % 3 == 2;
        return if eighty || eleven { "an" } else { "a" };
    }

    match phrase.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// `a`, `a and b`, `a, b, and c`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", init.join(", "), last.as_ref())
        }
    }
}
