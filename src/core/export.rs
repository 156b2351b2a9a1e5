use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    config::{DEFAULT_EXPORT_FILE_NAME, EXPORT_MEDIA_TYPE},
    core::{codec::RowEncoder, session::Session},
    error::EditError,
};

/// An encoded table, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    bytes: Vec<u8>,
    file_name: String,
}

impl ExportedFile {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn media_type(&self) -> &'static str {
        EXPORT_MEDIA_TYPE
    }

    /// Suggested filename, `edited_data.csv` unless configured otherwise.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), EditError> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Saves the bytes as `dir/<file_name>`, overwriting any existing file.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, EditError> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!("Exported {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// Encodes a [`Session`] as the header followed by every row.
pub struct ExportAdapter<E> {
    encoder: E,
    file_name: String,
}

impl<E: RowEncoder> ExportAdapter<E> {
    pub fn new(encoder: E) -> Self {
        Self::with_file_name(encoder, DEFAULT_EXPORT_FILE_NAME)
    }

    pub fn with_file_name(encoder: E, file_name: impl Into<String>) -> Self {
        Self {
            encoder,
            file_name: file_name.into(),
        }
    }

    /// Encodes the current state of `session`.
    ///
    /// The output depends on nothing but the session, so exporting an
    /// unchanged session twice yields identical bytes. A session without
    /// columns exports no bytes at all, whatever its row count: CSV has no
    /// zero-width record.
    pub fn export(&self, session: &Session) -> Result<ExportedFile, EditError> {
        let bytes = if session.column_count() == 0 {
            Vec::new()
        } else {
            self.encoder.encode(&session.to_records())?
        };

        Ok(ExportedFile {
            bytes,
            file_name: self.file_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::{
        adapter::csv::csv_writer::CsvRowEncoder,
        config::{DEFAULT_EXPORT_FILE_NAME, EXPORT_MEDIA_TYPE},
        core::session::Session,
    };

    use super::ExportAdapter;

    fn session() -> Session {
        Session::new(
            vec!["name".into(), "motto".into()],
            vec![vec!["Ada".into(), "count, then compute".into()]],
        )
        .unwrap()
    }

    #[test]
    fn export_carries_download_metadata() -> Result<(), Box<dyn Error>> {
        let exported = ExportAdapter::new(CsvRowEncoder::default()).export(&session())?;

        assert_eq!(exported.file_name(), DEFAULT_EXPORT_FILE_NAME);
        assert_eq!(exported.media_type(), EXPORT_MEDIA_TYPE);
        assert_eq!(
            String::from_utf8(exported.into_bytes())?,
            "name,motto\r\nAda,\"count, then compute\"\r\n"
        );

        Ok(())
    }

    #[test]
    fn export_is_deterministic() -> Result<(), Box<dyn Error>> {
        let adapter = ExportAdapter::new(CsvRowEncoder::default());
        let session = session();

        assert_eq!(adapter.export(&session)?, adapter.export(&session)?);

        Ok(())
    }

    #[test]
    fn empty_session_exports_nothing() -> Result<(), Box<dyn Error>> {
        let exported = ExportAdapter::new(CsvRowEncoder::default()).export(&Session::default())?;

        assert!(exported.bytes().is_empty());

        Ok(())
    }

    #[test]
    fn zero_column_rows_export_nothing() -> Result<(), Box<dyn Error>> {
        let mut session = Session::default();
        session.add_row();
        session.add_row();

        let exported = ExportAdapter::new(CsvRowEncoder::default()).export(&session)?;

        assert!(exported.bytes().is_empty());

        Ok(())
    }

    #[test]
    fn header_only_session_exports_header() -> Result<(), Box<dyn Error>> {
        let session = Session::new(vec!["a".into(), "b".into()], vec![])?;

        let exported = ExportAdapter::with_file_name(CsvRowEncoder::default(), "out.csv")
            .export(&session)?;

        assert_eq!(exported.bytes(), b"a,b\r\n");
        assert_eq!(exported.file_name(), "out.csv");

        Ok(())
    }

    #[test]
    fn write_to_streams_bytes() -> Result<(), Box<dyn Error>> {
        let exported = ExportAdapter::new(CsvRowEncoder::default()).export(&session())?;
        let mut buffer = Vec::new();

        exported.write_to(&mut buffer)?;

        assert_eq!(buffer, exported.bytes());

        Ok(())
    }
}
