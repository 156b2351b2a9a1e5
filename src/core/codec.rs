use crate::error::EditError;

/// A decoded table: every record as a row of fields, first record included.
pub type Rows = Vec<Vec<String>>;

pub type DecodeResult = Result<Rows, EditError>;

pub type EncodeResult = Result<Vec<u8>, EditError>;

/// Turns raw file content into rows of fields.
///
/// Implementations must not treat the first record specially: the header
/// split is done by the ingest adapter.
pub trait RowDecoder {
    fn decode(&self, raw: &[u8]) -> DecodeResult;
}

/// Turns rows of fields back into file content.
///
/// Quoting of fields that contain the delimiter, the quote character or a
/// line break is the implementation's responsibility.
pub trait RowEncoder {
    fn encode(&self, rows: &[Vec<String>]) -> EncodeResult;
}

impl<T: RowDecoder + ?Sized> RowDecoder for &T {
    fn decode(&self, raw: &[u8]) -> DecodeResult {
        (**self).decode(raw)
    }
}

impl<T: RowEncoder + ?Sized> RowEncoder for &T {
    fn encode(&self, rows: &[Vec<String>]) -> EncodeResult {
        (**self).encode(rows)
    }
}
