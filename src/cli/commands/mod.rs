pub mod add;
pub mod clear;
pub mod completions;
pub mod deadlines;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod status;
pub mod transfer;

use crate::error::TodoError;
use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y` is a no.
fn confirm(question: &str) -> Result<bool, TodoError> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
