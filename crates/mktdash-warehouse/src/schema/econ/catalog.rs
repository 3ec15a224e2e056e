//! Statically defined US indicator catalog.
//!
//! This is currently maintained manually; display names must stay unique within a category,
//! since category tables are keyed by them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Cadence {
    pub fn label(self) -> &'static str {
        match self {
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
            Cadence::Quarterly => "Quarterly",
            Cadence::Annual => "Annual",
        }
    }

    /// `w`, `m`, `q` or `a`.
    pub fn abbrev(self) -> char {
        match self {
            Cadence::Weekly => 'w',
            Cadence::Monthly => 'm',
            Cadence::Quarterly => 'q',
            Cadence::Annual => 'a',
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            Cadence::Weekly => "week",
            Cadence::Monthly => "month",
            Cadence::Quarterly => "quarter",
            Cadence::Annual => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub name: &'static str,
    pub code: &'static str,
    pub unit: &'static str,
    pub cadence: Cadence,
}

const fn ind(name: &'static str, code: &'static str, unit: &'static str, cadence: Cadence) -> Indicator {
    Indicator {
        name,
        code,
        unit,
        cadence,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    Growth,
    Household,
    Business,
    Labor,
    Inflation,
    Production,
    Housing,
    Finance,
    Government,
    WellBeing,
    International,
}

impl CategoryId {
    pub const ALL: [CategoryId; 11] = [
        CategoryId::Growth,
        CategoryId::Household,
        CategoryId::Business,
        CategoryId::Labor,
        CategoryId::Inflation,
        CategoryId::Production,
        CategoryId::Housing,
        CategoryId::Finance,
        CategoryId::Government,
        CategoryId::WellBeing,
        CategoryId::International,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CategoryId::Growth => "Economic Growth",
            CategoryId::Household => "Household Income and Expenditures",
            CategoryId::Business => "Business Profits and Investment",
            CategoryId::Labor => "Labor",
            CategoryId::Inflation => "Inflation and Deflation",
            CategoryId::Production => "Production",
            CategoryId::Housing => "Housing",
            CategoryId::Finance => "Finance",
            CategoryId::Government => "Government",
            CategoryId::WellBeing => "Economic Well-Being",
            CategoryId::International => "International",
        }
    }

    /// File-name friendly identifier, e.g. `well_being`.
    pub fn slug(self) -> &'static str {
        match self {
            CategoryId::Growth => "growth",
            CategoryId::Household => "household",
            CategoryId::Business => "business",
            CategoryId::Labor => "labor",
            CategoryId::Inflation => "inflation",
            CategoryId::Production => "production",
            CategoryId::Housing => "housing",
            CategoryId::Finance => "finance",
            CategoryId::Government => "government",
            CategoryId::WellBeing => "well_being",
            CategoryId::International => "international",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

use Cadence::*;

const GROWTH: &[Indicator] = &[ind("Real GDP", "GDPC1", "Billions of Chained 2017 Dollars", Quarterly)];

const HOUSEHOLD: &[Indicator] = &[
    ind("Personal Savings Rate", "PSAVERT", "Percent", Monthly),
    ind("Real Disposable Income", "DSPIC96", "Billions of Chained 2017 Dollars", Monthly),
    ind("Retail Sales", "MRTSSM44000USS", "Millions of Dollars", Monthly),
    ind("Consumer Credit", "TOTALSL", "Billions of Dollars", Monthly),
    ind("Consumer Credit Delinquency Rate", "DRCCLACBS", "Percent", Quarterly),
    ind("Consumer Sentiment (UMich)", "UMCSENT", "Index 1966:Q1=100", Monthly),
];

const BUSINESS: &[Indicator] = &[ind("Corporate Profits after Taxes", "CP", "Billions of Dollars", Quarterly)];

const LABOR: &[Indicator] = &[
    ind("Employment Level", "CE16OV", "Thousands of Persons", Monthly),
    ind("Average Total Private Work Hours", "AWHAETP", "Hours", Monthly),
    ind("Average Total Private Work Earnings", "CES0500000011", "Dollars per Week", Monthly),
    ind("Private Employment Cost Index", "ECIWAG", "Index Dec 2005=100", Quarterly),
    ind("Private Job Openings", "JTS1000JOL", "Level in Thousands", Monthly),
    ind("Unemployment Rate", "UNRATE", "Percent", Monthly),
    ind("Non-Farm Labor Productivity", "OPHNFB", "Index 2017=100", Quarterly),
    ind("Non-Farm Unit Labor Costs", "ULCNFB", "Index 2017=100", Quarterly),
];

const INFLATION: &[Indicator] = &[
    ind("Median CPI", "MEDCPIM158SFRBCLE", "Percent Change at Annual Rate", Monthly),
    ind("PPI (All Commodities)", "PPIACO", "Index 1982=100", Monthly),
    ind("Import Price Index", "IR", "Index 2000=100", Monthly),
    ind("Export Price Index", "IQ", "Index 2000=100", Monthly),
];

const PRODUCTION: &[Indicator] = &[
    ind("Industrial Production Index", "INDPRO", "Index 2017=100", Monthly),
    ind("Capacity Utilization Index", "TCU", "Percent of Capacity", Monthly),
    ind("Manufacturers New Orders", "AMTMNO", "Millions of Dollars", Monthly),
    ind("Inventory-to-Sales Ratio", "ISRATIO", "Ratio", Monthly),
];

const HOUSING: &[Indicator] = &[
    ind("Housing Price Index", "USSTHPI", "Index 1980:Q1=100", Quarterly),
    ind("Housing Starts", "HOUST", "Thousands of Units", Monthly),
    ind("Existing Home Sales", "EXHOSLUSM495S", "Number of Units", Monthly),
    ind("New Single Family Residential Home Sales", "HSN1F", "Thousands", Monthly),
    ind("Home Vacancy Rate", "USHVAC", "Percent", Annual),
    ind("Housing Affordability Index", "FIXHAI", "Index", Monthly),
    ind("Single Family Residential Mortgage Delinquency Rate", "DRSFRMACBS", "Percent", Quarterly),
];

const FINANCE: &[Indicator] = &[ind("Bank Loans", "TOTLL", "Billions of U.S. Dollars", Weekly)];

const GOVERNMENT: &[Indicator] = &[ind("Government Expenditures", "FGEXPND", "Billions of Dollars", Quarterly)];

const WELL_BEING: &[Indicator] = &[
    ind("Share of Wealth (top 1%)", "WFRBST01134", "Percent of Aggregate", Quarterly),
    ind("Poverty Rate", "PPAAUS00000A156NCEN", "Percent", Annual),
];

const INTERNATIONAL: &[Indicator] = &[
    ind("Balance of Trade", "BOPGSTB", "Millions of Dollars", Monthly),
    ind("International Investment Position", "IIPUSNETIQ", "Millions of Dollars", Quarterly),
];

/// A named group of indicators, in the order their rows are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub indicators: &'static [Indicator],
}

/// The full set of categories, built once at start-up and passed around by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn standard() -> Self {
        let categories = CategoryId::ALL
            .into_iter()
            .map(|id| Category {
                id,
                indicators: match id {
                    CategoryId::Growth => GROWTH,
                    CategoryId::Household => HOUSEHOLD,
                    CategoryId::Business => BUSINESS,
                    CategoryId::Labor => LABOR,
                    CategoryId::Inflation => INFLATION,
                    CategoryId::Production => PRODUCTION,
                    CategoryId::Housing => HOUSING,
                    CategoryId::Finance => FINANCE,
                    CategoryId::Government => GOVERNMENT,
                    CategoryId::WellBeing => WELL_BEING,
                    CategoryId::International => INTERNATIONAL,
                },
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}
