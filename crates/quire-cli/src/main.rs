//! Quire CLI - notebooks of notes from the terminal
//!
//! Shares the notebook store with the desktop app.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands, NoteCommands, NotebookCommands};
use crate::commands::common::resolve_data_dir;
use crate::commands::completions::run_completions;
use crate::commands::export::run_export;
use crate::commands::note::{run_note_add, run_note_delete, run_note_edit, run_note_list};
use crate::commands::notebook::{
    run_notebook_add, run_notebook_delete, run_notebook_list, run_notebook_rename,
};
use crate::commands::overview::run_overview;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quire=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let data_dir = resolve_data_dir(cli.data_dir)?;
    tracing::debug!("Using data directory {}", data_dir.display());

    match cli.command {
        None => run_overview(&data_dir)?,
        Some(Commands::Notebook { command }) => match command {
            NotebookCommands::Add { name } => run_notebook_add(&name, &data_dir)?,
            NotebookCommands::List { json } => run_notebook_list(json, &data_dir)?,
            NotebookCommands::Rename { notebook, name } => {
                run_notebook_rename(&notebook, &name, &data_dir)?;
            }
            NotebookCommands::Delete { notebook, yes } => {
                run_notebook_delete(&notebook, yes, &data_dir)?;
            }
        },
        Some(Commands::Note { command }) => match command {
            NoteCommands::Add {
                notebook,
                title,
                text,
            } => run_note_add(&notebook, title.as_deref(), &text, &data_dir)?,
            NoteCommands::List { notebook, json } => run_note_list(&notebook, json, &data_dir)?,
            NoteCommands::Edit {
                notebook,
                note,
                title,
                text,
            } => run_note_edit(
                &notebook,
                &note,
                title.as_deref(),
                text.as_deref(),
                &data_dir,
            )?,
            NoteCommands::Delete { notebook, note } => {
                run_note_delete(&notebook, &note, &data_dir)?;
            }
        },
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &data_dir)?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
