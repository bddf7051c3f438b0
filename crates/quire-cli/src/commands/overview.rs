use std::path::Path;

use chrono::{Local, Timelike};
use quire_core::db::NotebookRepository;
use quire_core::util::{display_date, greeting_for_hour};

use crate::commands::common::{format_notebook_lines, open_repository};
use crate::error::CliError;

/// Greeting, today's date and the notebook list
pub fn run_overview(data_dir: &Path) -> Result<(), CliError> {
    let repo = open_repository(data_dir)?;
    let now = Local::now();

    println!("{}", greeting_for_hour(now.hour()));
    println!("{}", display_date(&now));
    println!();

    if repo.notebooks().is_empty() {
        println!("No notebooks yet. Create one with `quire notebook add <NAME>`.");
    } else {
        for line in format_notebook_lines(repo.notebooks()) {
            println!("{line}");
        }
    }

    Ok(())
}
