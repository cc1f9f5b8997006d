use clap::Parser;
use miette::Result;
use stockroom::cli::{Cli, GlobalOpts};
use tracing_subscriber::EnvFilter;

/// Log level from `-q`/`-v`, unless RUST_LOG says otherwise
fn default_filter(global: &GlobalOpts) -> &'static str {
    if global.quiet {
        return "error";
    }
    match global.verbose {
        0 => "warn",
        1 => "stockroom=info,warn",
        _ => "stockroom=debug,info",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(&cli.global))),
        )
        .with_writer(std::io::stderr)
        .init();

    stockroom::cli::run(cli).await
}
