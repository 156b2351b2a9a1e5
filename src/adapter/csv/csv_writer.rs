use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::{
    core::codec::{EncodeResult, RowEncoder},
    error::EditError,
};

/// A CSV row encoder that implements the `RowEncoder` trait.
///
/// Fields containing the delimiter, the quote character or a line break are
/// quoted, embedded quotes are doubled. Every record, the last one included,
/// is followed by the terminator.
///
/// # Examples
///
/// ```
/// use csv_edit_session::adapter::csv::csv_writer::CsvRowEncoderBuilder;
/// use csv_edit_session::core::codec::RowEncoder;
/// use csv_edit_session::config::LineEnding;
///
/// let encoder = CsvRowEncoderBuilder::new()
///     .terminator(LineEnding::Lf.into())
///     .build();
///
/// let rows = vec![
///     vec!["city".to_string(), "note".to_string()],
///     vec!["Boston".to_string(), "cold, windy".to_string()],
/// ];
///
/// let bytes = encoder.encode(&rows).unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "city,note\nBoston,\"cold, windy\"\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvRowEncoder {
    delimiter: u8,
    terminator: Terminator,
    quote_style: QuoteStyle,
}

impl Default for CsvRowEncoder {
    fn default() -> Self {
        CsvRowEncoderBuilder::new().build()
    }
}

impl RowEncoder for CsvRowEncoder {
    fn encode(&self, rows: &[Vec<String>]) -> EncodeResult {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .quote_style(self.quote_style)
            .has_headers(false)
            .flexible(false)
            .from_writer(Vec::new());

        for row in rows {
            writer
                .write_record(row)
                .map_err(|error| EditError::Encode(error.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|error| EditError::Encode(error.to_string()))?;

        debug!("Encoded {} records into {} bytes", rows.len(), bytes.len());
        Ok(bytes)
    }
}

/// A builder for configuring CSV encoding.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Terminator: CRLF (`\r\n`)
/// - Quoting: only fields that need it
#[derive(Debug, Clone)]
pub struct CsvRowEncoderBuilder {
    delimiter: u8,
    terminator: Terminator,
    quote_style: QuoteStyle,
}

impl Default for CsvRowEncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRowEncoderBuilder {
    pub fn new() -> CsvRowEncoderBuilder {
        CsvRowEncoderBuilder {
            delimiter: b',',
            terminator: Terminator::CRLF,
            quote_style: QuoteStyle::Necessary,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvRowEncoderBuilder {
        self.delimiter = delimiter;
        self
    }

    pub fn terminator(mut self, terminator: Terminator) -> CsvRowEncoderBuilder {
        self.terminator = terminator;
        self
    }

    pub fn quote_style(mut self, quote_style: QuoteStyle) -> CsvRowEncoderBuilder {
        self.quote_style = quote_style;
        self
    }

    pub fn build(self) -> CsvRowEncoder {
        CsvRowEncoder {
            delimiter: self.delimiter,
            terminator: self.terminator,
            quote_style: self.quote_style,
        }
    }
}
