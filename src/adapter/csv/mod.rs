/// CSV support for decoding and encoding tabular data.
///
/// This module provides the default codec of an editor:
///
/// 1. **CsvRowDecoder**: turns CSV bytes into rows of fields, without
///    treating the first record specially and without requiring every
///    record to have the same width.
///
/// 2. **CsvRowEncoder**: turns rows of fields back into CSV bytes, quoting
///    fields only where needed.
///
/// Both are configured through builders and implement the `RowDecoder` and
/// `RowEncoder` traits of `core::codec`.
///
/// # Examples
///
/// ```
/// use csv_edit_session::adapter::csv::csv_reader::CsvRowDecoderBuilder;
/// use csv_edit_session::adapter::csv::csv_writer::CsvRowEncoderBuilder;
/// use csv_edit_session::core::codec::{RowDecoder, RowEncoder};
///
/// let decoder = CsvRowDecoderBuilder::new().build();
/// let encoder = CsvRowEncoderBuilder::new().build();
///
/// let rows = decoder.decode(b"name,quote\nAda,\"\"\"Hello\"\", she said\"\n").unwrap();
/// assert_eq!(rows[1][1], "\"Hello\", she said");
///
/// let bytes = encoder.encode(&rows).unwrap();
/// assert_eq!(decoder.decode(&bytes).unwrap(), rows);
/// ```

/// A module providing facilities for decoding CSV records.
pub mod csv_reader;

/// A module providing facilities for encoding CSV records.
pub mod csv_writer;
