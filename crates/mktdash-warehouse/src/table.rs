use crate::error::{Error, Result};

/// Header of the single column a placeholder table carries.
pub const PLACEHOLDER_COLUMN: &str = "Status";

/// A typed row that knows how to lay itself out as text cells.
pub trait Row {
    const COLUMNS: &'static [&'static str];

    /// One cell per entry of [`Row::COLUMNS`], in the same order.
    fn cells(&self) -> Vec<String>;
}

/// Market table as handed to consumers: real rows, or a one-cell explanation of why there are
/// none.
#[derive(Debug, Clone, PartialEq)]
pub enum Table<R> {
    Rows(Vec<R>),
    Placeholder(String),
}

impl<R> Table<R> {
    pub fn placeholder(message: impl Into<String>) -> Self {
        Table::Placeholder(message.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Table::Placeholder(_))
    }

    /// The rows, or a lookup error when only a placeholder is present.
    pub fn rows(&self) -> Result<&[R]> {
        match self {
            Table::Rows(rows) => Ok(rows),
            Table::Placeholder(message) => Err(Error::Lookup(message.clone())),
        }
    }
}

impl<R: Row> Table<R> {
    pub fn frame(&self, title: &str) -> Frame {
        match self {
            Table::Rows(rows) => Frame::from_rows(title, rows),
            Table::Placeholder(message) => Frame::placeholder(title, message),
        }
    }
}

/// Untyped, string-celled view of a table; what rendering and export work with.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn from_rows<R: Row>(title: &str, rows: &[R]) -> Self {
        Self {
            title: title.to_string(),
            columns: R::COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(R::cells).collect(),
        }
    }

    pub fn placeholder(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            columns: vec![PLACEHOLDER_COLUMN.to_string()],
            rows: vec![vec![message.to_string()]],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.columns.len() == 1 && self.columns[0] == PLACEHOLDER_COLUMN && self.rows.len() == 1
    }

    /// Stack `frames` on top of each other.
    ///
    /// Columns are the ordered superset of every frame's columns (first appearance wins); a row
    /// gets an empty cell for each column its own frame lacks.
    pub fn concat(title: &str, frames: &[Frame]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for frame in frames {
            for column in &frame.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for frame in frames {
            let positions: Vec<Option<usize>> = columns
                .iter()
                .map(|column| frame.columns.iter().position(|c| c == column))
                .collect();
            for row in &frame.rows {
                rows.push(
                    positions
                        .iter()
                        .map(|pos| pos.and_then(|i| row.get(i).cloned()).unwrap_or_default())
                        .collect(),
                );
            }
        }

        Self {
            title: title.to_string(),
            columns,
            rows,
        }
    }
}
