// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::LogId;
use crate::store::LogStore;
use std::path::Path;

/// High-level export of the primary log.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole primary log, unfiltered and newest first.
    ///
    /// Unlike the views, a read failure aborts the export: an empty file
    /// would look like a valid export of an empty log.
    ///
    /// Returns the number of exported entries.
    pub fn export<S: LogStore + ?Sized>(
        store: &mut S,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let entries: Vec<EntryExport> = store
            .fetch_all(LogId::Primary)?
            .iter()
            .map(EntryExport::from)
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(entries.len())
    }
}
