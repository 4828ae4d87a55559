//! Shell completion scripts for the CLI.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

pub fn generate_completion(shell: Shell) {
    let mut app = crate::Cli::command();
    generate(shell, &mut app, "holocron", &mut io::stdout());
}
