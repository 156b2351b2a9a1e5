use std::{env, env::temp_dir};

use anyhow::{Context, Result};
use csv_edit_session::core::editor::EditorBuilder;
use log::info;

const SAMPLE: &str = "year,make,model,description
1948,Porsche,356,Luxury sports car
1995,Peugeot,205,City car
2021,Mazda,CX-30,SUV Compact
1967,Ford,Mustang fastback 1967,American car";

/// Loads a CSV file (or a built-in sample), upper-cases its second column,
/// drops the first row, appends an empty row and saves the result as
/// `edited_data.csv` in the given directory (the temp dir by default).
///
/// cargo run --example edit_csv_file -- [input.csv] [output_dir]
fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next();
    let output_dir = args.next().map(Into::into).unwrap_or_else(temp_dir);

    let mut editor = EditorBuilder::new().build()?;

    match &input {
        Some(path) => editor
            .ingest_path(path)
            .with_context(|| format!("unable to load {}", path))?,
        None => editor.ingest(SAMPLE.as_bytes())?,
    }

    if !editor.has_data() {
        info!("Nothing to edit");
        return Ok(());
    }

    for row in 0..editor.row_count() {
        if let Some(value) = editor.rows()[row].get(1).map(|v| v.to_uppercase()) {
            editor.set_cell(row, 1, value)?;
        }
    }

    editor.delete_row(0)?;
    editor.add_row();

    let path = editor.save_export_in(&output_dir)?;
    println!(
        "{} rows x {} columns written to {}",
        editor.row_count(),
        editor.headers().len(),
        path.display()
    );

    Ok(())
}
