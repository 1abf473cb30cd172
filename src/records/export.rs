use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Context, Result};

use super::{Column, Record};

/// How field values are written into the exported document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Fields joined verbatim. A comma or newline inside a value breaks the row.
    #[default]
    Raw,
    /// Quote fields that contain delimiters, quotes or line breaks.
    Quoted,
}

impl CsvQuoting {
    fn quote_style(self) -> csv::QuoteStyle {
        match self {
            CsvQuoting::Raw => csv::QuoteStyle::Never,
            CsvQuoting::Quoted => csv::QuoteStyle::Necessary,
        }
    }
}

/// Serialize the row set: header line, one line per record, `\n` separated,
/// no trailing newline.
pub fn render_csv(rows: &[Record], quoting: CsvQuoting) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(quoting.quote_style())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(Column::ALL.iter().map(|column| column.csv_header()))?;
    for row in rows {
        writer.write_record(Column::ALL.iter().map(|column| column.value(row)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| err.into_error())
        .context("Failed to flush CSV buffer")?;
    let mut document = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;
    if document.ends_with('\n') {
        document.pop();
    }
    Ok(document)
}

/// Write the rendered document to `path`, replacing any existing file.
pub fn export_to_file(rows: &[Record], quoting: CsvQuoting, path: &Path) -> Result<()> {
    let document = render_csv(rows, quoting)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, document)
        .with_context(|| format!("Failed to write CSV export to {}", path.display()))?;
    log::info!("Exported {} records to {}", rows.len(), path.display());
    Ok(())
}
