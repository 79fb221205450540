//! Completions command implementation
//!
//! Handles `heating-advisor completions`, which prints a shell completion
//! script for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a completion script for `cli` into `out`
///
/// The caller passes its own clap command so the script always matches the
/// real argument definitions.
///
/// # Examples
///
/// ```bash
/// # Bash
/// heating-advisor completions bash > /etc/bash_completion.d/heating-advisor
///
/// # Zsh
/// heating-advisor completions zsh > ~/.zfunc/_heating-advisor
///
/// # Fish
/// heating-advisor completions fish > ~/.config/fish/completions/heating-advisor.fish
/// ```
pub fn cmd_completions(shell: Shell, cli: &mut Command, out: &mut dyn Write) {
    let bin_name = cli.get_name().to_string();
    generate(shell, cli, bin_name, out);
}
