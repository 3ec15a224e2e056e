use std::io;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("file system error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write `headers` followed by `rows` to a comma-separated file at `path`.
///
/// Parent directories are created as necessary.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read the csv at `csv_path` back and re-serialize it, tab-delimited, to `sheet_path`.
///
/// Spreadsheet applications open the output directly. Returns the number of records copied,
/// header included.
pub fn csv_to_sheet<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    sheet_path: Q,
) -> Result<usize, ExportError> {
    let (csv_path, sheet_path) = (csv_path.as_ref(), sheet_path.as_ref());
    ensure_parent(sheet_path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(sheet_path)?;

    let mut copied = 0;
    for record in reader.records() {
        writer.write_record(&record?)?;
        copied += 1;
    }
    writer.flush()?;

    debug!(
        "copied {copied} records from {} to {}",
        csv_path.display(),
        sheet_path.display()
    );
    Ok(copied)
}

/// Remove the file at `path`; `Ok(false)` when there was nothing to remove.
pub fn remove<P: AsRef<Path>>(path: P) -> Result<bool, ExportError> {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => {
            trace!("removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csv_files/out.csv");

        write_csv(
            &path,
            &strings(&["Date", "Rate Type", "Rate (%)"]),
            &[strings(&["2024-05-01", "EFFR", "5.33"])],
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Date,Rate Type,Rate (%)\n2024-05-01,EFFR,5.33\n");
    }

    #[test]
    fn single_cell_table_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(
            &path,
            &strings(&["Status"]),
            &[strings(&["Reference rates are unavailable, please try again later"])],
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Status\n\"Reference rates are unavailable, please try again later\"\n"
        );
    }

    #[test]
    fn sheet_is_a_tab_delimited_copy() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let sheet_path = dir.path().join("sheets/out.tsv");

        write_csv(
            &csv_path,
            &strings(&["Index", "Close"]),
            &[strings(&["DJIA (ETF)", "389.1"]), strings(&["QQQ", "440"])],
        )
        .unwrap();

        let copied = csv_to_sheet(&csv_path, &sheet_path).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(
            std::fs::read_to_string(&sheet_path).unwrap(),
            "Index\tClose\nDJIA (ETF)\t389.1\nQQQ\t440\n"
        );
    }

    #[test]
    fn removing_a_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.csv");
        assert!(!remove(&path).unwrap());

        std::fs::write(&path, "x").unwrap();
        assert!(remove(&path).unwrap());
        assert!(!path.exists());
    }
}
