//! `todoctl completions` command.

use crate::cli::args::Cli;
use crate::error::TodoError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

pub fn run(shell_name: &str) -> Result<String, TodoError> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => {
            return Err(TodoError::InvalidArgument(format!(
                "Unsupported shell: {shell_name}. Supported: bash, zsh, fish"
            )));
        }
    };

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "todoctl", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TodoError::InvalidArgument(format!("Failed to generate completions: {e}")))
}
