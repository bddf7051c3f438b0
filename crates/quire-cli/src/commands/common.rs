use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use quire_core::config::AppConfig;
use quire_core::db::{FileNotebookRepository, FileSlot, JsonNotebookRepository};
use quire_core::util::{normalize_text_option, snippet};
use quire_core::{Note, NoteId, Notebook, NotebookId};
use serde::Serialize;

use crate::error::CliError;

const SHORT_ID_CHARS: usize = 13;

#[derive(Debug, Serialize)]
pub struct NotebookListItem {
    pub id: String,
    pub name: String,
    pub note_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub text: String,
    pub posted_on: String,
    pub updated_on: String,
}

/// Resolve the store directory from the flag, environment and config file
pub fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let config = AppConfig::load()?;
    Ok(config.resolve_data_dir(cli_data_dir)?)
}

pub fn open_repository(data_dir: &Path) -> Result<FileNotebookRepository, CliError> {
    let repo = JsonNotebookRepository::open(FileSlot::new(data_dir))?;
    tracing::debug!("Opened store in {}", data_dir.display());
    Ok(repo)
}

pub fn normalize_identifier(id: &str, kind: &'static str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyId(kind))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Find a notebook by exact id, exact name, or unique id prefix
pub fn resolve_notebook<'a>(
    notebooks: &'a [Notebook],
    query: &str,
) -> Result<&'a Notebook, CliError> {
    let query = normalize_identifier(query, "Notebook")?;

    if let Some(notebook) = notebooks.iter().find(|nb| nb.id.as_str() == query) {
        return Ok(notebook);
    }

    let by_name = notebooks
        .iter()
        .filter(|nb| nb.name.eq_ignore_ascii_case(&query))
        .collect::<Vec<_>>();
    if !by_name.is_empty() {
        return pick_unique(by_name, &query, |nb| nb.id.as_str());
    }

    let by_prefix = notebooks
        .iter()
        .filter(|nb| nb.id.as_str().starts_with(&query))
        .collect::<Vec<_>>();
    if by_prefix.is_empty() {
        return Err(CliError::NotebookNotFound(query));
    }
    pick_unique(by_prefix, &query, |nb| nb.id.as_str())
}

/// Find a note in `notebook` by exact id or unique id prefix
pub fn resolve_note<'a>(notebook: &'a Notebook, query: &str) -> Result<&'a Note, CliError> {
    let query = normalize_identifier(query, "Note")?;

    if let Ok(note_id) = query.parse::<NoteId>() {
        if let Some(note) = notebook.note(&note_id) {
            return Ok(note);
        }
    }

    let matches = notebook
        .notes
        .iter()
        .filter(|note| note.id.as_str().starts_with(&query))
        .collect::<Vec<_>>();
    if matches.is_empty() {
        return Err(CliError::NoteNotFound(query));
    }
    pick_unique(matches, &query, |note| note.id.as_str())
}

fn pick_unique<'a, T>(
    mut matches: Vec<&'a T>,
    query: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<&'a T, CliError> {
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    let options = matches
        .iter()
        .take(3)
        .map(|&item| id_of(item))
        .collect::<Vec<_>>()
        .join(", ");

    Err(CliError::AmbiguousId(format!(
        "'{query}' is ambiguous; matches: {options}"
    )))
}

/// Resolve notebook and note ids in one go
pub fn resolve_note_ids(
    notebooks: &[Notebook],
    notebook_query: &str,
    note_query: &str,
) -> Result<(NotebookId, NoteId), CliError> {
    let notebook = resolve_notebook(notebooks, notebook_query)?;
    let note = resolve_note(notebook, note_query)?;
    Ok((notebook.id.clone(), note.id.clone()))
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_CHARS).collect()
}

pub fn format_notebook_lines(notebooks: &[Notebook]) -> Vec<String> {
    notebooks
        .iter()
        .map(|notebook| {
            let notes = match notebook.notes.len() {
                1 => "1 note".to_string(),
                count => format!("{count} notes"),
            };
            format!(
                "{:<13}  {:<30}  {notes}",
                short_id(notebook.id.as_str()),
                notebook.name
            )
        })
        .collect()
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let title = snippet(&note.title, 24);
            let preview = note.snippet(40);
            format!(
                "{:<13}  {title:<24}  {preview:<40}  {}",
                short_id(note.id.as_str()),
                note.updated_on
            )
        })
        .collect()
}

pub fn notebook_to_list_item(notebook: &Notebook) -> NotebookListItem {
    NotebookListItem {
        id: notebook.id.to_string(),
        name: notebook.name.clone(),
        note_count: notebook.notes.len(),
    }
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        preview: note.snippet(80),
        text: note.text.clone(),
        posted_on: note.posted_on.clone(),
        updated_on: note.updated_on.clone(),
    }
}

/// Note text from arguments, then piped stdin; `None` means ask the editor
pub fn resolve_note_text(text_parts: &[String]) -> Result<Option<String>, CliError> {
    if let Some(text) = normalize_text_option(Some(text_parts.join(" "))) {
        return Ok(Some(text));
    }
    read_piped_stdin()
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_text_option(Some(buffer)))
}

/// Editor buffer layout: title on the first line, text after it
pub fn editor_buffer(title: &str, text: &str) -> String {
    format!("{title}\n\n{text}\n")
}

/// Split an editor buffer back into title and text; the first line is always the title
pub fn split_editor_buffer(buffer: &str) -> (String, String) {
    let (title, text) = buffer.split_once('\n').unwrap_or((buffer, ""));
    (title.trim().to_string(), text.trim().to_string())
}

pub fn capture_editor_input_with_initial(initial_content: &str) -> Result<String, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let edited = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(edited)
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    let status = match Command::new(editor).arg(file_path).status() {
        Ok(status) => status,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // EDITOR may carry arguments, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };
            Command::new(program).args(parts).arg(file_path).status()?
        }
        Err(err) => return Err(CliError::Io(err)),
    };

    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        )))
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("quire-note-{}-{now}.md", std::process::id()))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question on the terminal; anything but yes declines
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
