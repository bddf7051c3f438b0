use std::path::{Path, PathBuf};

use chrono::Utc;
use quire_core::db::NotebookRepository;
use quire_core::export::{render_notebooks_export, suggested_export_file_name};

use crate::cli::ExportFormat;
use crate::commands::common::open_repository;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let repo = open_repository(data_dir)?;
    let notebooks = repo.list_notebooks()?;
    let rendered = render_notebooks_export(&notebooks, format.into())?;

    if let Some(path) = output_path {
        let path = export_target(path, format);
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

/// A directory target gets a generated file name inside it
fn export_target(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(suggested_export_file_name(
            format.into(),
            Utc::now().timestamp_millis(),
        ))
    } else {
        path.to_path_buf()
    }
}
