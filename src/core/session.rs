//! The edit model: a header row plus an ordered set of body rows.
//!
//! Rows are addressed by their current position. Deleting a row shifts every
//! later row one position up, so indices held across a deletion may address
//! a different row afterwards.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// An in-memory table under edit.
///
/// The header fixes the column count. Every body row has exactly that many
/// fields; the mutators below are the only way to change the table, and
/// read access only hands out shared slices.
///
/// # Examples
///
/// ```
/// use csv_edit_session::core::session::Session;
///
/// let mut session = Session::new(vec!["name".into(), "age".into()], vec![]).unwrap();
/// session.add_row();
/// session.set_cell(0, 0, "Alice").unwrap();
///
/// assert_eq!(session.cell(0, 0), Some("Alice"));
/// assert_eq!(session.cell(0, 1), Some(""));
/// assert!(session.delete_row(5).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct Session {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct SessionParts {
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl TryFrom<SessionParts> for Session {
    type Error = EditError;

    fn try_from(parts: SessionParts) -> Result<Self, Self::Error> {
        Session::new(parts.headers, parts.rows)
    }
}

impl Session {
    /// Builds a session, checking that every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, EditError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(EditError::RowWidthMismatch {
                row: index,
                expected: headers.len(),
                found: row.len(),
            });
        }

        Ok(Self { headers, rows })
    }

    // Callers are responsible for I1; the ingest adapter normalizes first.
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when there is neither a header nor any row.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Replaces the value at (`row`, `col`) verbatim.
    ///
    /// # Errors
    ///
    /// `EditError::IndexOutOfRange` when either index is outside the table;
    /// the session is left untouched.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let row_count = self.rows.len();
        let column_count = self.headers.len();

        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| EditError::row_out_of_range(row, row_count))?;
        let cell = cells
            .get_mut(col)
            .ok_or_else(|| EditError::column_out_of_range(col, column_count))?;

        *cell = value.into();
        debug!("Cell ({}, {}) updated", row, col);
        Ok(())
    }

    /// Appends a row of empty fields, one per column.
    ///
    /// Returns the index of the new row.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(vec![String::new(); self.headers.len()]);
        let index = self.rows.len() - 1;
        debug!("Row {} added", index);
        index
    }

    /// Removes the row at `row`; later rows move one position up.
    ///
    /// Returns the removed row.
    ///
    /// # Errors
    ///
    /// `EditError::IndexOutOfRange` when `row` is not a current row index.
    pub fn delete_row(&mut self, row: usize) -> Result<Vec<String>, EditError> {
        if row >= self.rows.len() {
            return Err(EditError::row_out_of_range(row, self.rows.len()));
        }

        let removed = self.rows.remove(row);
        debug!("Row {} deleted, {} rows left", row, self.rows.len());
        Ok(removed)
    }

    /// The header followed by every row, in export order.
    pub(crate) fn to_records(&self) -> Vec<Vec<String>> {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .cloned()
            .collect()
    }
}
