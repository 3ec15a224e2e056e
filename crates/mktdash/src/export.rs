use crate::cli::RmArgs;
use mktdash_util::{csv_to_sheet, remove, write_csv, ExportError};
use mktdash_warehouse::{CategoryId, Frame};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MARKET_CSV: &str = "mkt_data";
pub const MARKET_SHEET: &str = "raw_market_data";

pub fn csv_path(out_dir: &Path, stem: &str) -> PathBuf {
    out_dir.join("csv_files").join(format!("{stem}.csv"))
}

pub fn sheet_path(out_dir: &Path, stem: &str) -> PathBuf {
    out_dir.join("sheets").join(format!("{stem}.tsv"))
}

pub fn csv(frame: &Frame, path: &Path) -> Result<(), ExportError> {
    write_csv(path, &frame.columns, &frame.rows)
}

/// Write the csv, then its tab-delimited copy.
pub fn sheet(frame: &Frame, csv_path: &Path, sheet_path: &Path) -> Result<(), ExportError> {
    csv(frame, csv_path)?;
    let copied = csv_to_sheet(csv_path, sheet_path)?;
    debug!("{} sheet holds {copied} records", frame.title);
    Ok(())
}

/// Every file an export of `kind` could have written under `out_dir`.
pub fn stored(out_dir: &Path, kind: RmArgs) -> Vec<PathBuf> {
    let categories = CategoryId::ALL.into_iter().map(CategoryId::slug);
    match kind {
        RmArgs::Csv => std::iter::once(MARKET_CSV)
            .chain(categories)
            .map(|stem| csv_path(out_dir, stem))
            .collect(),
        RmArgs::Sheet => std::iter::once(MARKET_SHEET)
            .chain(categories)
            .map(|stem| sheet_path(out_dir, stem))
            .collect(),
    }
}

/// Remove every stored file of `kind`; returns how many were there.
pub fn clear(out_dir: &Path, kind: RmArgs) -> Result<usize, ExportError> {
    let mut removed = 0;
    for path in stored(out_dir, kind) {
        if remove(&path)? {
            removed += 1;
        }
    }
    Ok(removed)
}
