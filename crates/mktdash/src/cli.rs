use clap::{Parser, Subcommand, ValueEnum};
use mktdash_warehouse::CategoryId;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Sets the level of tracing
    #[arg(long, value_enum, ignore_case = true, default_value_t = TraceLevel::WARN)]
    pub trace: TraceLevel,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Directory that `csv_files/` and `sheets/` are written under
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu.
    Menu,

    /// Reference rates, repo operations and equity indices.
    Market {
        #[arg(long, value_enum, default_value_t = Output::Terminal)]
        output: Output,
    },

    /// One economic category.
    Category {
        name: Category,

        #[arg(long, value_enum, default_value_t = Output::Terminal)]
        output: Output,
    },

    /// Narrative report over every category and the market snapshot.
    Report,

    /// Delete stored exports.
    Rm {
        #[arg(required = true)]
        files: Vec<RmArgs>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Terminal,
    /// Bar chart of percent changes; categories and equity indices only.
    Chart,
    Csv,
    /// Tab-delimited copy of the csv, for spreadsheet applications.
    Sheet,
}

impl Output {
    pub fn label(self) -> &'static str {
        match self {
            Output::Terminal => "Terminal",
            Output::Chart => "Chart",
            Output::Csv => "CSV",
            Output::Sheet => "Spreadsheet",
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
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

impl From<Category> for CategoryId {
    fn from(category: Category) -> Self {
        match category {
            Category::Growth => CategoryId::Growth,
            Category::Household => CategoryId::Household,
            Category::Business => CategoryId::Business,
            Category::Labor => CategoryId::Labor,
            Category::Inflation => CategoryId::Inflation,
            Category::Production => CategoryId::Production,
            Category::Housing => CategoryId::Housing,
            Category::Finance => CategoryId::Finance,
            Category::Government => CategoryId::Government,
            Category::WellBeing => CategoryId::WellBeing,
            Category::International => CategoryId::International,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RmArgs {
    /// Remove the stored csv files.
    Csv,
    /// Remove the stored spreadsheets.
    Sheet,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<TraceLevel> for Level {
    fn from(trace: TraceLevel) -> Self {
        match trace {
            TraceLevel::DEBUG => Level::DEBUG,
            TraceLevel::INFO => Level::INFO,
            TraceLevel::WARN => Level::WARN,
            TraceLevel::ERROR => Level::ERROR,
        }
    }
}
