use std::path::Path;

use quire_core::db::NotebookRepository;

use crate::commands::common::{
    capture_editor_input_with_initial, editor_buffer, format_note_lines, note_to_list_item,
    open_repository, resolve_note_ids, resolve_note_text, resolve_notebook, split_editor_buffer,
    NoteListItem,
};
use crate::error::CliError;

pub fn run_note_add(
    notebook_query: &str,
    title: Option<&str>,
    text_parts: &[String],
    data_dir: &Path,
) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let notebook_id = resolve_notebook(repo.notebooks(), notebook_query)?.id.clone();

    let (title, text) = match resolve_note_text(text_parts)? {
        Some(text) => (title.unwrap_or_default().to_string(), text),
        None => {
            let buffer = capture_editor_input_with_initial(&editor_buffer(
                title.unwrap_or_default(),
                "",
            ))?;
            split_editor_buffer(&buffer)
        }
    };

    let note = repo.create_note(&notebook_id, &title, &text)?;
    println!("{}", note.id);
    Ok(())
}

pub fn run_note_list(notebook_query: &str, as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let repo = open_repository(data_dir)?;
    let notebooks = repo.list_notebooks()?;
    let notebook = resolve_notebook(&notebooks, notebook_query)?;

    if as_json {
        let items = notebook
            .notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_note_lines(&notebook.notes) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_note_edit(
    notebook_query: &str,
    note_query: &str,
    title: Option<&str>,
    text: Option<&str>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let (notebook_id, note_id) = resolve_note_ids(repo.notebooks(), notebook_query, note_query)?;
    let Some(current) = repo.note(&notebook_id, &note_id) else {
        return Err(CliError::NoteNotFound(note_query.to_string()));
    };

    let (new_title, new_text) = if title.is_none() && text.is_none() {
        let initial = editor_buffer(&current.title, &current.text);
        split_editor_buffer(&capture_editor_input_with_initial(&initial)?)
    } else {
        (
            title.unwrap_or(&current.title).to_string(),
            text.unwrap_or(&current.text).to_string(),
        )
    };

    if new_title == current.title && new_text == current.text {
        println!("{note_id}");
        return Ok(());
    }

    let updated = repo.update_note(&notebook_id, &note_id, &new_title, &new_text)?;
    println!("{}", updated.id);
    Ok(())
}

pub fn run_note_delete(
    notebook_query: &str,
    note_query: &str,
    data_dir: &Path,
) -> Result<(), CliError> {
    let mut repo = open_repository(data_dir)?;
    let (notebook_id, note_id) = resolve_note_ids(repo.notebooks(), notebook_query, note_query)?;

    repo.delete_note(&notebook_id, &note_id)?;
    println!("{note_id}");
    Ok(())
}
