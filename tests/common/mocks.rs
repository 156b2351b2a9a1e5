//! Mock versions of std::fs::File and of the codec traits.
use mockall::mock;

use csv_edit_session::core::codec::{DecodeResult, EncodeResult, RowDecoder, RowEncoder};
use std::io::{self, Write};

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

mock! {
    pub Decoder {}
    impl RowDecoder for Decoder {
        fn decode(&self, raw: &[u8]) -> DecodeResult;
    }
}

mock! {
    pub Encoder {}
    impl RowEncoder for Encoder {
        fn encode(&self, rows: &[Vec<String>]) -> EncodeResult;
    }
}
