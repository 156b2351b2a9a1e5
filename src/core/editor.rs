//! Orchestration around a single [`Session`].
//!
//! An [`Editor`] owns at most one session at a time. Loading new content
//! replaces the session wholesale, but only once decoding has succeeded:
//! a failed load leaves the previous session in place.
//!
//! ```
//! use csv_edit_session::core::editor::EditorBuilder;
//!
//! let mut editor = EditorBuilder::new().build().unwrap();
//! assert!(!editor.has_data());
//!
//! editor.ingest(b"name,age\nAlice,30\n").unwrap();
//! editor.set_cell(0, 1, "31").unwrap();
//! editor.add_row();
//!
//! let exported = editor.export().unwrap();
//! assert_eq!(exported.bytes(), b"name,age\r\nAlice,31\r\n,\r\n");
//! assert_eq!(exported.file_name(), "edited_data.csv");
//! ```

use std::{
    cell::Cell,
    path::{Path, PathBuf},
    rc::Rc,
};

use log::{debug, error, info};

use crate::{
    adapter::csv::{
        csv_reader::{CsvRowDecoder, CsvRowDecoderBuilder},
        csv_writer::{CsvRowEncoder, CsvRowEncoderBuilder},
    },
    config::EditorOptions,
    core::{
        codec::{RowDecoder, RowEncoder},
        export::{ExportAdapter, ExportedFile},
        ingest::IngestAdapter,
        session::Session,
    },
    error::EditError,
};

/// Proof that an ingest is pending on an [`Editor`].
///
/// Only one ticket per editor can be alive. Dropping a ticket without
/// handing it to [`Editor::complete_ingest`] cancels the ingest.
#[derive(Debug)]
pub struct IngestTicket {
    pending: Rc<Cell<bool>>,
}

impl Drop for IngestTicket {
    fn drop(&mut self) {
        self.pending.set(false);
    }
}

/// Holds the current session and routes every edit to it.
pub struct Editor<D = CsvRowDecoder, E = CsvRowEncoder> {
    ingest: IngestAdapter<D>,
    export: ExportAdapter<E>,
    session: Option<Session>,
    pending: Rc<Cell<bool>>,
}

impl<D: RowDecoder, E: RowEncoder> Editor<D, E> {
    pub fn new(ingest: IngestAdapter<D>, export: ExportAdapter<E>) -> Self {
        Self {
            ingest,
            export,
            session: None,
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Drops the current session, if any.
    pub fn close(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// Headers of the current session, empty when nothing is loaded.
    pub fn headers(&self) -> &[String] {
        self.session
            .as_ref()
            .map(Session::headers)
            .unwrap_or_default()
    }

    /// Rows of the current session, empty when nothing is loaded.
    pub fn rows(&self) -> &[Vec<String>] {
        self.session.as_ref().map(Session::rows).unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Whether there are rows to display.
    pub fn has_data(&self) -> bool {
        self.row_count() > 0
    }

    /// Marks an ingest as started.
    ///
    /// # Errors
    ///
    /// `EditError::IngestInProgress` while another ticket is alive.
    pub fn begin_ingest(&self) -> Result<IngestTicket, EditError> {
        if self.pending.replace(true) {
            return Err(EditError::IngestInProgress);
        }
        debug!("Ingest started");
        Ok(IngestTicket {
            pending: Rc::clone(&self.pending),
        })
    }

    /// Finishes the ingest `ticket` stands for with the decoded `raw` content.
    ///
    /// On success the new session replaces the current one. On failure the
    /// current session is kept. Either way the ticket is released.
    pub fn complete_ingest(&mut self, ticket: IngestTicket, raw: &[u8]) -> Result<(), EditError> {
        if !Rc::ptr_eq(&ticket.pending, &self.pending) {
            return Err(EditError::IngestInProgress);
        }

        let result = self.ingest.load(raw);
        self.replace_session(ticket, result)
    }

    fn replace_session(
        &mut self,
        ticket: IngestTicket,
        result: Result<Session, EditError>,
    ) -> Result<(), EditError> {
        drop(ticket);

        match result {
            Ok(session) => {
                info!(
                    "Session replaced: {} columns, {} rows",
                    session.column_count(),
                    session.row_count()
                );
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                error!("Ingest failed, previous session kept: {}", err);
                Err(err)
            }
        }
    }

    /// Loads `raw`, replacing the current session on success.
    pub fn ingest(&mut self, raw: &[u8]) -> Result<(), EditError> {
        let ticket = self.begin_ingest()?;
        self.complete_ingest(ticket, raw)
    }

    /// Reads the file at `path` and loads it.
    pub fn ingest_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EditError> {
        let ticket = self.begin_ingest()?;
        let result = self.ingest.load_path(path);
        self.replace_session(ticket, result)
    }

    // Without a session every row index is out of range.
    fn loaded_mut(&mut self, row: usize) -> Result<&mut Session, EditError> {
        self.session
            .as_mut()
            .ok_or_else(|| EditError::row_out_of_range(row, 0))
    }

    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        self.loaded_mut(row)?.set_cell(row, col, value)
    }

    /// Appends an empty row, starting an empty session when none is loaded.
    pub fn add_row(&mut self) -> usize {
        self.session.get_or_insert_with(Session::default).add_row()
    }

    pub fn delete_row(&mut self, row: usize) -> Result<Vec<String>, EditError> {
        self.loaded_mut(row)?.delete_row(row)
    }

    /// Encodes the current session; nothing loaded exports as empty.
    pub fn export(&self) -> Result<ExportedFile, EditError> {
        match &self.session {
            Some(session) => self.export.export(session),
            None => self.export.export(&Session::default()),
        }
    }

    /// Exports and saves the result in `dir` under the export filename.
    pub fn save_export_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, EditError> {
        self.export()?.save_in(dir)
    }
}

/// A builder for configuring an [`Editor`] backed by the CSV codec.
///
/// # Examples
///
/// ```
/// use csv_edit_session::config::{EditorOptions, LineEnding};
/// use csv_edit_session::core::editor::EditorBuilder;
///
/// let mut editor = EditorBuilder::new()
///     .options(EditorOptions {
///         delimiter: ';',
///         line_ending: LineEnding::Lf,
///         ..EditorOptions::default()
///     })
///     .build()
///     .unwrap();
///
/// editor.ingest(b"a;b\n1;2\n").unwrap();
/// assert_eq!(editor.export().unwrap().bytes(), b"a;b\n1;2\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditorBuilder {
    options: EditorOptions,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the editor.
    ///
    /// # Errors
    ///
    /// `EditError::Config` when the options are invalid.
    pub fn build(self) -> Result<Editor, EditError> {
        self.options.validate()?;
        let delimiter = self.options.delimiter_byte()?;

        let decoder = CsvRowDecoderBuilder::new().delimiter(delimiter).build();
        let encoder = CsvRowEncoderBuilder::new()
            .delimiter(delimiter)
            .terminator(self.options.line_ending.into())
            .build();

        Ok(Editor::new(
            IngestAdapter::new(decoder, self.options.ragged_rows),
            ExportAdapter::with_file_name(encoder, self.options.file_name),
        ))
    }
}
