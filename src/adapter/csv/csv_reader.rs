use csv::{ReaderBuilder, Terminator, Trim};
use log::debug;

use crate::{
    core::codec::{DecodeResult, RowDecoder},
    error::EditError,
};

/// A CSV row decoder that implements the `RowDecoder` trait.
///
/// Every record, the first one included, comes back as a plain row of
/// fields: header detection is left to the ingest adapter. Records may have
/// differing widths; reconciling them with the header is also the ingest
/// adapter's job.
///
/// Blank lines are skipped wherever they appear. In a single-column file a
/// blank line would otherwise stand for a row with one empty cell; such rows
/// are lost. Write them as `""` to keep them.
///
/// # Examples
///
/// ```
/// use csv_edit_session::adapter::csv::csv_reader::CsvRowDecoderBuilder;
/// use csv_edit_session::core::codec::RowDecoder;
///
/// let decoder = CsvRowDecoderBuilder::new().build();
///
/// let rows = decoder.decode(b"name,value\nfoo,\"1,5\"\n").unwrap();
///
/// assert_eq!(rows, vec![vec!["name", "value"], vec!["foo", "1,5"]]);
/// ```
#[derive(Debug, Clone)]
pub struct CsvRowDecoder {
    delimiter: u8,
    terminator: Terminator,
    trim: Trim,
}

impl Default for CsvRowDecoder {
    fn default() -> Self {
        CsvRowDecoderBuilder::new().build()
    }
}

impl RowDecoder for CsvRowDecoder {
    /// Decodes every record of `raw`.
    ///
    /// # Errors
    ///
    /// `EditError::Decode` on malformed input or invalid UTF-8, with the
    /// 1-based number of the offending record when the parser reports it.
    fn decode(&self, raw: &[u8]) -> DecodeResult {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .trim(self.trim)
            .has_headers(false)
            .flexible(true)
            .from_reader(raw);

        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|error| EditError::Decode {
                record: error.position().map(|position| position.record() + 1),
                message: error.to_string(),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("Decoded {} records from {} bytes", rows.len(), raw.len());
        Ok(rows)
    }
}

/// A builder for configuring CSV decoding.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Terminator: CRLF, which accepts `\r\n`, `\n` and `\r`
/// - Trimming: none, fields are kept verbatim
///
/// # Examples
///
/// ```
/// use csv_edit_session::adapter::csv::csv_reader::CsvRowDecoderBuilder;
/// use csv_edit_session::core::codec::RowDecoder;
///
/// let decoder = CsvRowDecoderBuilder::new().delimiter(b';').build();
///
/// let rows = decoder.decode(b"name;age\nAlice;30").unwrap();
/// assert_eq!(rows[1], vec!["Alice", "30"]);
/// ```
#[derive(Debug, Clone)]
pub struct CsvRowDecoderBuilder {
    delimiter: u8,
    terminator: Terminator,
    trim: Trim,
}

impl Default for CsvRowDecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRowDecoderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            terminator: Terminator::CRLF,
            trim: Trim::None,
        }
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the record terminator.
    ///
    /// - `Terminator::CRLF`: any of `\r\n`, `\n`, `\r` (default)
    /// - `Terminator::Any(byte)`: exactly that byte
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets whitespace trimming. Trimming breaks the verbatim round-trip of
    /// cells with leading or trailing spaces.
    pub fn trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    pub fn build(self) -> CsvRowDecoder {
        CsvRowDecoder {
            delimiter: self.delimiter,
            terminator: self.terminator,
            trim: self.trim,
        }
    }
}
