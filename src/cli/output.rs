//! Output formatting utilities

use console::Term;

use crate::cli::OutputFormat;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    resolve(format, is_list, Term::stdout().is_term())
}

fn resolve(format: OutputFormat, is_list: bool, is_term: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if !is_list {
                OutputFormat::Yaml
            } else if is_term {
                OutputFormat::Table
            } else {
                OutputFormat::Tsv
            }
        }
        other => other,
    }
}
