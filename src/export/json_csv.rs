// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::models::HEADERS;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, entries.len());
    Ok(())
}

/// Export CSV, UTF-8, header row always present (even for an empty log).
pub(crate) fn export_csv(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    for item in entries {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, entries.len());
    Ok(())
}
