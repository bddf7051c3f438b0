//! Shared notebook export helpers for CLI/Desktop parity.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::db::StoreDocument;
use crate::Notebook;

/// Export output format shared by all clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render notebooks as pretty-printed JSON in the store document layout.
pub fn render_json_export(notebooks: &[Notebook]) -> serde_json::Result<String> {
    let doc = StoreDocument {
        notebooks: notebooks.to_vec(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Render notebooks in Markdown, one heading per notebook and a
/// frontmatter block per note.
#[must_use]
pub fn render_markdown_export(notebooks: &[Notebook]) -> String {
    let mut output = String::new();

    for (index, notebook) in notebooks.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "# {}", notebook.name);
        let _ = writeln!(output);
        let _ = writeln!(output, "<!-- notebook: {} -->", notebook.id);

        for note in &notebook.notes {
            let _ = writeln!(output);
            let _ = writeln!(output, "---");
            let _ = writeln!(output, "id: {}", note.id);
            let _ = writeln!(output, "title: {}", note.title);
            let _ = writeln!(output, "posted_on: {}", note.posted_on);
            let _ = writeln!(output, "updated_on: {}", note.updated_on);
            let _ = writeln!(output, "---");
            let _ = writeln!(output);
            output.push_str(&note.text);
            output.push('\n');
        }
    }

    output
}

/// Render notebooks based on selected export format.
pub fn render_notebooks_export(
    notebooks: &[Notebook],
    format: ExportFormat,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notebooks),
        ExportFormat::Markdown => Ok(render_markdown_export(notebooks)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("quire-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, NoteId};

    fn sample() -> Notebook {
        let mut notebook = Notebook::new("Groceries");
        notebook.notes.push(Note {
            id: "cccccccc-cccc-7ccc-8ccc-111111111111".parse::<NoteId>().unwrap(),
            title: "Milk".to_string(),
            text: "2% please".to_string(),
            posted_on: "Fri, Oct 16 2026 09:00".to_string(),
            updated_on: "Fri, Oct 16 2026 10:30".to_string(),
        });
        notebook
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_text() {
        let rendered = render_markdown_export(&[sample()]);
        assert!(rendered.starts_with("# Groceries\n"));
        assert!(rendered.contains("id: cccccccc-cccc-7ccc-8ccc-111111111111"));
        assert!(rendered.contains("title: Milk"));
        assert!(rendered.contains("posted_on: Fri, Oct 16 2026 09:00"));
        assert!(rendered.contains("updated_on: Fri, Oct 16 2026 10:30"));
        assert!(rendered.contains("---\n\n2% please\n"));
    }

    #[test]
    fn render_json_export_uses_store_layout() {
        let rendered = render_json_export(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["notebooks"][0]["name"], "Groceries");
        assert_eq!(value["notebooks"][0]["notes"][0]["postedOn"], "Fri, Oct 16 2026 09:00");
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "quire-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "quire-export-456.md"
        );
    }
}
