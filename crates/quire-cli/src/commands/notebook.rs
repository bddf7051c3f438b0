use std::path::Path;

use quire_core::db::NotebookRepository;

use crate::commands::common::{
    confirm, format_notebook_lines, notebook_to_list_item, open_repository, resolve_notebook,
    NotebookListItem,
};
use crate::error::CliError;

pub fn run_notebook_add(name_parts: &[String], data_dir: &Path) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let notebook = repo.create_notebook(&name_parts.join(" "))?;

    tracing::info!("Created notebook {:?}", notebook.name);
    println!("{}", notebook.id);
    Ok(())
}

pub fn run_notebook_list(as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let repo = open_repository(data_dir)?;
    let notebooks = repo.list_notebooks()?;

    if as_json {
        let items = notebooks
            .iter()
            .map(notebook_to_list_item)
            .collect::<Vec<NotebookListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_notebook_lines(&notebooks) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_notebook_rename(
    notebook_query: &str,
    name_parts: &[String],
    data_dir: &Path,
) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let id = resolve_notebook(repo.notebooks(), notebook_query)?.id.clone();
    let renamed = repo.rename_notebook(&id, &name_parts.join(" "))?;

    println!("{}", renamed.id);
    Ok(())
}

pub fn run_notebook_delete(
    notebook_query: &str,
    skip_confirmation: bool,
    data_dir: &Path,
) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let notebook = resolve_notebook(repo.notebooks(), notebook_query)?;
    let id = notebook.id.clone();

    if !skip_confirmation {
        let prompt = format!(
            "Delete notebook \"{}\" and its {} note(s)?",
            notebook.name,
            notebook.notes.len()
        );
        if !confirm(&prompt)? {
            return Err(CliError::Cancelled);
        }
    }

    repo.delete_notebook(&id)?;
    println!("{id}");
    Ok(())
}
