//! Shared helper functions for CLI commands

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Password};
use miette::{IntoDiagnostic, Result};

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Make a value safe for one TSV cell
pub fn escape_tsv(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

/// Ask for confirmation on the terminal; refuses when stdin isn't interactive
pub fn confirm(prompt: &str) -> Result<bool> {
    if !Term::stderr().is_term() {
        return Err(miette::miette!(
            "Refusing to prompt without a terminal; pass --yes to confirm"
        ));
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .into_diagnostic()
}

/// Prompt for a password without echo
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()
        .into_diagnostic()
}

/// Print a success line unless `quiet`
pub fn success(message: &str, quiet: bool) {
    if !quiet {
        println!("{} {}", style("✓").green(), message);
    }
}
