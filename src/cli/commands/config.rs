//! `stockroom config` command - inspect and edit the config file

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::session::Session;
use crate::cli::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the backend base URL
    SetServer {
        /// Base URL, e.g. http://localhost:8080/api/v1
        url: String,
    },

    /// Set the page size used for one resource's lists
    SetPageSize {
        /// Resource path, e.g. products or product_details
        resource: String,

        /// Rows per page
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
    },
}

pub fn run(cmd: ConfigCommands, session: &Session) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(session),
        ConfigCommands::Path => {
            println!("{}", session.config_path.display());
            Ok(())
        }
        ConfigCommands::SetServer { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(miette::miette!("Server URL cannot be empty"));
            }
            session.save_file(|config| config.server = url.clone())?;
            if !session.global.quiet {
                println!("{} Server set to {}", style("✓").green(), style(&url).cyan());
            }
            Ok(())
        }
        ConfigCommands::SetPageSize { resource, size } => {
            session.save_file(|config| {
                config.page_sizes.insert(resource.clone(), size);
            })?;
            if !session.global.quiet {
                println!("{} {} lists show {} rows per page", style("✓").green(), resource, size);
            }
            Ok(())
        }
    }
}

fn run_show(session: &Session) -> Result<()> {
    // Never print the token itself
    let mut shown = session.config.clone();
    if !shown.token.is_empty() {
        shown.token = "<set>".to_string();
    }

    match session.global.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown).into_diagnostic()?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(&shown).into_diagnostic()?),
        _ => {
            println!("{} {}", style("config:").dim(), session.config_path.display());
            print!("{}", toml::to_string_pretty(&shown).into_diagnostic()?);
        }
    }
    Ok(())
}
