//! Reading record files and writing the citations output file.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::CitemapError;
use crate::models::ProcessedItem;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "citations_output.json";

/// Renders processed items as JSON pretty-printed with 2-space indentation.
pub fn render_json(items: &[ProcessedItem]) -> Result<String, CitemapError> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Writes processed items to `path`, replacing any existing content.
///
/// Returns the rendered JSON so callers can echo it without re-serializing.
pub fn write_output(path: impl AsRef<Path>, items: &[ProcessedItem]) -> Result<String, CitemapError> {
    let path = path.as_ref();
    let json = render_json(items)?;
    fs::write(path, &json)?;
    debug!(path = %path.display(), items = items.len(), "wrote citations output");
    Ok(json)
}

/// Reads a JSON file holding an array of ResponseItem-shaped records.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Value>, CitemapError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
