mod common;

use std::io::{self, ErrorKind};

use common::{strings, MockDecoder, MockEncoder, MockFile};

use csv_edit_session::{
    adapter::csv::{csv_reader::CsvRowDecoder, csv_writer::CsvRowEncoder},
    config::RaggedRowPolicy,
    core::{
        editor::{Editor, EditorBuilder},
        export::ExportAdapter,
        ingest::IngestAdapter,
    },
    error::{Axis, EditError},
};

fn loaded_editor() -> Editor {
    let mut editor = EditorBuilder::new().build().unwrap();
    editor
        .ingest(b"year,make,model\n1948,Porsche,356\n1995,Peugeot,205\n")
        .unwrap();
    editor
}

#[test]
fn decoder_failure_keeps_the_loaded_session() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().returning(|raw| {
        if raw.starts_with(b"bad") {
            Err(EditError::Decode {
                message: "unterminated quote".to_string(),
                record: Some(3),
            })
        } else {
            Ok(vec![strings(&["a", "b"]), strings(&["1", "2"])])
        }
    });

    let mut editor = Editor::new(
        IngestAdapter::new(decoder, RaggedRowPolicy::Normalize),
        ExportAdapter::new(CsvRowEncoder::default()),
    );

    editor.ingest(b"good").unwrap();
    editor.set_cell(0, 1, "edited").unwrap();
    let before = editor.session().cloned();

    let result = editor.ingest(b"bad");

    match result {
        Err(EditError::Decode { message, record }) => {
            assert_eq!(message, "unterminated quote");
            assert_eq!(record, Some(3));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
    assert_eq!(editor.session().cloned(), before);
    assert_eq!(editor.rows()[0][1], "edited");
}

#[test]
fn encoder_failure_is_reported() {
    let mut encoder = MockEncoder::new();
    encoder.expect_encode().times(1).returning(|rows| {
        assert_eq!(rows[0], strings(&["a", "b"]));
        Err(EditError::Encode("encoder gave up".to_string()))
    });

    let mut editor = Editor::new(
        IngestAdapter::new(CsvRowDecoder::default(), RaggedRowPolicy::Normalize),
        ExportAdapter::new(encoder),
    );
    editor.ingest(b"a,b\n1,2\n").unwrap();

    let result = editor.export();

    assert!(matches!(result, Err(EditError::Encode(_))));
    assert_eq!(editor.row_count(), 1);
}

#[test]
fn write_failure_surfaces_as_io_error() {
    let mut file = MockFile::new();
    file.expect_write()
        .returning(|_| Err(io::Error::new(ErrorKind::BrokenPipe, "pipe closed")));
    file.expect_flush().returning(|| Ok(()));

    let exported = loaded_editor().export().unwrap();
    let result = exported.write_to(&mut file);

    match result {
        Err(EditError::Io(error)) => assert_eq!(error.kind(), ErrorKind::BrokenPipe),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn out_of_range_edits_leave_the_session_unchanged() {
    let mut editor = loaded_editor();
    let before = editor.session().cloned();

    assert!(matches!(
        editor.set_cell(usize::MAX, 0, "x"),
        Err(EditError::IndexOutOfRange {
            axis: Axis::Row,
            ..
        })
    ));
    assert!(matches!(
        editor.set_cell(0, 3, "x"),
        Err(EditError::IndexOutOfRange {
            axis: Axis::Column,
            index: 3,
            len: 3
        })
    ));
    assert!(matches!(
        editor.delete_row(1000),
        Err(EditError::IndexOutOfRange {
            axis: Axis::Row,
            index: 1000,
            len: 2
        })
    ));

    assert_eq!(editor.session().cloned(), before);
}

#[test]
fn stale_index_after_deletion_is_rejected() {
    let mut editor = loaded_editor();

    editor.delete_row(0).unwrap();

    assert!(editor.set_cell(1, 0, "1996").is_err());
    assert!(editor.delete_row(1).is_err());
    assert_eq!(editor.row_count(), 1);
}

#[test]
fn malformed_utf8_file_is_a_decode_error() {
    let mut editor = loaded_editor();

    let result = editor.ingest(b"year,make\n19\xe948,Porsche\n");

    assert!(matches!(result, Err(EditError::Decode { .. })));
    assert_eq!(editor.headers(), &["year", "make", "model"]);
}

#[test]
fn saving_into_missing_directory_fails() {
    let editor = loaded_editor();
    let dir = tempfile::tempdir().unwrap();

    let result = editor.save_export_in(dir.path().join("missing"));

    assert!(matches!(result, Err(EditError::Io(_))));
}

#[test]
fn reject_policy_names_the_offending_row() {
    let mut editor = EditorBuilder::new()
        .options(csv_edit_session::config::EditorOptions {
            ragged_rows: RaggedRowPolicy::Reject,
            ..Default::default()
        })
        .build()
        .unwrap();

    let result = editor.ingest(b"a,b\n1,2\n3,4\n5\n");

    assert!(matches!(
        result,
        Err(EditError::RowWidthMismatch {
            row: 2,
            expected: 2,
            found: 1
        })
    ));
    assert!(!editor.has_data());
}
