use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::extract::{ExamAliases, aggregate_workbook};
use crate::io::excel_read;
use crate::io::preview::render_preview;
use crate::model::FinalDocument;

/// Reads a workbook and builds the chapter document.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn build_document(input: &Path, aliases: &ExamAliases) -> Result<FinalDocument> {
    let sheets = excel_read::read_workbook(input)?;
    info!(sheet_count = sheets.len(), "read sheets from workbook");
    Ok(aggregate_workbook(&sheets, aliases))
}

/// Serializes the chapter document of `input` as indented JSON.
pub fn extract_to_string(input: &Path, aliases: &ExamAliases) -> Result<String> {
    let document = build_document(input, aliases)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Writes the chapter document of `input` to `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn extract_chapters(input: &Path, output: &Path, aliases: &ExamAliases) -> Result<()> {
    let json_string = extract_to_string(input, aliases)?;
    fs::write(output, json_string)?;
    info!("saved chapter document");
    Ok(())
}

/// Loads exam alias overrides from a JSON object of sheet name → exam name.
pub fn load_aliases(path: &Path) -> Result<ExamAliases> {
    let data = fs::read_to_string(path)?;
    let overrides: HashMap<String, String> = serde_json::from_str(&data)?;
    Ok(ExamAliases::default().with_overrides(overrides))
}

/// Renders the first `rows` rows of every sheet; also writes them to
/// `output` when given.
#[instrument(level = "info", skip_all, fields(input = %input.display(), rows = rows))]
pub fn preview_workbook(input: &Path, rows: usize, output: Option<&Path>) -> Result<String> {
    let sheets = excel_read::read_workbook(input)?;
    let preview = render_preview(&sheets, rows);
    if let Some(path) = output {
        fs::write(path, &preview)?;
        info!(output = %path.display(), "dumped sheet headers");
    }
    Ok(preview)
}
