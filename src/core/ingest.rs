use std::{fs, path::Path};

use log::{info, warn};

use crate::{
    config::RaggedRowPolicy,
    core::{codec::RowDecoder, session::Session},
    error::EditError,
};

/// Loads raw file content into a fresh [`Session`].
///
/// The first decoded record becomes the header, verbatim; the others become
/// the body rows. Body rows whose width differs from the header are handled
/// according to the [`RaggedRowPolicy`].
pub struct IngestAdapter<D> {
    decoder: D,
    ragged_rows: RaggedRowPolicy,
}

impl<D: RowDecoder> IngestAdapter<D> {
    pub fn new(decoder: D, ragged_rows: RaggedRowPolicy) -> Self {
        Self {
            decoder,
            ragged_rows,
        }
    }

    /// Decodes `raw` into a session.
    ///
    /// Empty input gives an empty session, not an error.
    ///
    /// # Errors
    ///
    /// - `EditError::Decode` when the decoder rejects the input
    /// - `EditError::RowWidthMismatch` for a ragged row under
    ///   `RaggedRowPolicy::Reject`
    pub fn load(&self, raw: &[u8]) -> Result<Session, EditError> {
        let mut records = self.decoder.decode(raw)?.into_iter();

        let Some(headers) = records.next() else {
            info!("Loaded empty input");
            return Ok(Session::default());
        };

        let width = headers.len();
        let mut rows = Vec::with_capacity(records.len());

        for (index, mut row) in records.enumerate() {
            if row.len() != width {
                match self.ragged_rows {
                    RaggedRowPolicy::Reject => {
                        return Err(EditError::RowWidthMismatch {
                            row: index,
                            expected: width,
                            found: row.len(),
                        });
                    }
                    RaggedRowPolicy::Normalize => {
                        warn!(
                            "Row {} has {} fields, header has {}: resized",
                            index,
                            row.len(),
                            width
                        );
                        row.resize(width, String::new());
                    }
                }
            }
            rows.push(row);
        }

        info!("Loaded {} columns and {} rows", width, rows.len());
        Ok(Session::from_parts(headers, rows))
    }

    /// Reads the file at `path` and loads it.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Session, EditError> {
        let raw = fs::read(path.as_ref())?;
        self.load(&raw)
    }
}
