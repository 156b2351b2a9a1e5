#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # CSV edit session

 Load a CSV file into an editable grid, change cells, add or remove rows, and
 export the result back to CSV.

 ## Core Concepts

- **Session:** the table under edit. The first record of the loaded file is
  its header and fixes the number of columns; every other record is a body
  row of exactly that width.
- **IngestAdapter:** turns raw file content into a `Session` through a
  `RowDecoder`.
- **ExportAdapter:** turns a `Session` back into bytes through a
  `RowEncoder`, with the suggested filename `edited_data.csv` and the media
  type `text/csv;charset=utf-8`.
- **Editor:** owns the current session. A new file replaces it only once
  decoding has succeeded.

 Rows are addressed by position: deleting a row moves every later row one
 position up.

 ## Getting Started

```rust
# use csv_edit_session::{core::editor::EditorBuilder, error::EditError};
fn main() -> Result<(), EditError> {
    let mut editor = EditorBuilder::new().build()?;

    editor.ingest(b"year,make,model
1948,Porsche,356
1995,Peugeot,205
")?;

    editor.set_cell(1, 2, "205 GTI")?;
    let row = editor.add_row();
    editor.set_cell(row, 1, "Mazda")?;
    editor.delete_row(0)?;

    let exported = editor.export()?;
    assert_eq!(exported.file_name(), "edited_data.csv");
    assert_eq!(
        exported.bytes(),
        b"year,make,model\r\n1995,Peugeot,205 GTI\r\n,Mazda,\r\n"
    );

    Ok(())
}
```

 ## Ragged files

 A body row with fewer fields than the header is padded with empty fields; a
 longer one is truncated. Set `RaggedRowPolicy::Reject` in `EditorOptions` to
 refuse such files instead.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Configuration of an editor
pub mod config;

/// Core module: the edit model and its adapters
pub mod core;

/// Error types for edit sessions
pub mod error;

#[doc(inline)]
pub use error::*;

/// Codec implementations (for example: csv decoder and encoder)
pub mod adapter;
