use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "Keep notebooks of notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notebook store
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage notebooks
    #[command(alias = "nb")]
    Notebook {
        #[command(subcommand)]
        command: NotebookCommands,
    },
    /// Manage notes inside a notebook
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Export all notebooks
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum NotebookCommands {
    /// Create a notebook
    #[command(alias = "new")]
    Add {
        /// Notebook name ("Untitled" when omitted)
        name: Vec<String>,
    },
    /// List notebooks
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename a notebook
    Rename {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// New name
        name: Vec<String>,
    },
    /// Delete a notebook and every note in it
    #[command(alias = "rm")]
    Delete {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a note at the top of a notebook
    #[command(alias = "new")]
    Add {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// Note title
        #[arg(short, long)]
        title: Option<String>,
        /// Note text (read from stdin or $EDITOR when omitted)
        text: Vec<String>,
    },
    /// List the notes of a notebook, newest first
    #[command(alias = "ls")]
    List {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a note (opens $EDITOR when no field is given)
    Edit {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// Note ID or unique ID prefix
        note: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New text
        #[arg(long)]
        text: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Notebook ID, unique ID prefix or name
        notebook: String,
        /// Note ID or unique ID prefix
        note: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for quire_core::export::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
