use super::{movement, Vocabulary};
use crate::error::Result;
use crate::schema::econ::catalog::CategoryId;
use crate::schema::econ::CategoryTable;

/// Indicators reported with expansion / contraction wording; everything else is a level.
const GROWTH_WORDED: &[&str] = &[
    "Real GDP",
    "Real Disposable Income",
    "Retail Sales",
    "Consumer Credit",
    "Corporate Profits after Taxes",
    "Employment Level",
    "Private Job Openings",
    "Non-Farm Labor Productivity",
    "Industrial Production Index",
    "Manufacturers New Orders",
    "Housing Starts",
    "Existing Home Sales",
    "New Single Family Residential Home Sales",
    "Bank Loans",
    "Government Expenditures",
];

pub fn vocabulary(name: &str) -> Vocabulary {
    if GROWTH_WORDED.contains(&name) {
        Vocabulary::Growth
    } else {
        Vocabulary::Level
    }
}

/// Movement phrase of the row called `name`.
fn of(table: &CategoryTable, name: &str) -> Result<String> {
    Ok(movement(table.get(name)?, vocabulary(name)))
}

/// The paragraph for one category table.
pub fn paragraph(table: &CategoryTable) -> Result<String> {
    match table.id {
        CategoryId::Growth => growth(table),
        CategoryId::Household => household(table),
        CategoryId::Business => business(table),
        CategoryId::Labor => labor(table),
        CategoryId::Inflation => inflation(table),
        CategoryId::Production => production(table),
        CategoryId::Housing => housing(table),
        CategoryId::Finance => finance(table),
        CategoryId::Government => government(table),
        CategoryId::WellBeing => well_being(table),
        CategoryId::International => international(table),
    }
}

fn growth(t: &CategoryTable) -> Result<String> {
    let gdp = t.get("Real GDP")?;
    Ok(format!(
        "Beginning with economic growth, there has been {} in Real GDP over the last recorded {}.",
        movement(gdp, vocabulary(gdp.name)),
        gdp.cadence.period()
    ))
}

fn household(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "Turning to household income and expenditures, the Personal Savings Rate saw {}, while Real Disposable Income recorded {} and Retail Sales recorded {}. Consumer Credit registered {}, the Consumer Credit Delinquency Rate showed {} and Consumer Sentiment (UMich) posted {}.",
        of(t, "Personal Savings Rate")?,
        of(t, "Real Disposable Income")?,
        of(t, "Retail Sales")?,
        of(t, "Consumer Credit")?,
        of(t, "Consumer Credit Delinquency Rate")?,
        of(t, "Consumer Sentiment (UMich)")?,
    ))
}

fn business(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "For business profits and investment, Corporate Profits after Taxes saw {}.",
        of(t, "Corporate Profits after Taxes")?,
    ))
}

fn labor(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "In the labor market, the Employment Level saw {} and Private Job Openings saw {}, while the Unemployment Rate recorded {}. Average Total Private Work Hours showed {} and Average Total Private Work Earnings showed {}; the Private Employment Cost Index recorded {}. Non-Farm Labor Productivity saw {}, against {} in Non-Farm Unit Labor Costs.",
        of(t, "Employment Level")?,
        of(t, "Private Job Openings")?,
        of(t, "Unemployment Rate")?,
        of(t, "Average Total Private Work Hours")?,
        of(t, "Average Total Private Work Earnings")?,
        of(t, "Private Employment Cost Index")?,
        of(t, "Non-Farm Labor Productivity")?,
        of(t, "Non-Farm Unit Labor Costs")?,
    ))
}

fn inflation(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "On inflation and deflation, Median CPI recorded {} and PPI (All Commodities) recorded {}. The Import Price Index saw {}, and the Export Price Index saw {}.",
        of(t, "Median CPI")?,
        of(t, "PPI (All Commodities)")?,
        of(t, "Import Price Index")?,
        of(t, "Export Price Index")?,
    ))
}

fn production(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "In production, the Industrial Production Index saw {} and Manufacturers New Orders saw {}, while the Capacity Utilization Index recorded {} and the Inventory-to-Sales Ratio recorded {}.",
        of(t, "Industrial Production Index")?,
        of(t, "Manufacturers New Orders")?,
        of(t, "Capacity Utilization Index")?,
        of(t, "Inventory-to-Sales Ratio")?,
    ))
}

fn housing(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "In housing, the Housing Price Index recorded {}. Housing Starts saw {}, Existing Home Sales saw {} and New Single Family Residential Home Sales saw {}. The Home Vacancy Rate showed {}, the Housing Affordability Index showed {} and the Single Family Residential Mortgage Delinquency Rate showed {}.",
        of(t, "Housing Price Index")?,
        of(t, "Housing Starts")?,
        of(t, "Existing Home Sales")?,
        of(t, "New Single Family Residential Home Sales")?,
        of(t, "Home Vacancy Rate")?,
        of(t, "Housing Affordability Index")?,
        of(t, "Single Family Residential Mortgage Delinquency Rate")?,
    ))
}

fn finance(t: &CategoryTable) -> Result<String> {
    Ok(format!("In finance, Bank Loans saw {}.", of(t, "Bank Loans")?))
}

fn government(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "On the government side, Government Expenditures saw {}.",
        of(t, "Government Expenditures")?
    ))
}

fn well_being(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "As for economic well-being, the Share of Wealth (top 1%) recorded {} and the Poverty Rate recorded {}.",
        of(t, "Share of Wealth (top 1%)")?,
        of(t, "Poverty Rate")?,
    ))
}

fn international(t: &CategoryTable) -> Result<String> {
    Ok(format!(
        "Internationally, the Balance of Trade recorded {} and the International Investment Position recorded {}.",
        of(t, "Balance of Trade")?,
        of(t, "International Investment Position")?,
    ))
}
