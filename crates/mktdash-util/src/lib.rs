pub mod client_ext;
pub mod fs;

pub use crate::client_ext::{build_client, ClientExt, FetchError};
pub use crate::fs::{csv_to_sheet, remove, write_csv, ExportError};
