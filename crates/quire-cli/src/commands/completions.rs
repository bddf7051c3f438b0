use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::aot::Generator;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "quire";

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    if let Some(path) = output_path {
        std::fs::write(path, &script)?;
        println!("{}", path.display());
    } else {
        io::stdout().write_all(&script)?;
    }

    Ok(())
}

pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut command = Cli::command();
    match shell {
        CompletionShell::Bash => render_for(shells::Bash, &mut command),
        CompletionShell::Zsh => render_for(shells::Zsh, &mut command),
        CompletionShell::Fish => render_for(shells::Fish, &mut command),
    }
}

fn render_for<G: Generator>(generator: G, command: &mut clap::Command) -> Vec<u8> {
    let mut buffer = Vec::new();
    generate(generator, command, BIN_NAME, &mut buffer);
    buffer
}
