//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod entity_cmd;
pub mod filters;
pub mod helpers;
pub mod output;
pub mod session;
pub mod table;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
pub use session::Session;

use miette::Result;

use crate::entities::{Category, Color, Size};
use commands::{
    browse, catalog, completions, config, detail, inventory, login, order, price, product,
    purchase_order, supplier, user,
};

/// Run one parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    // Completions never touch the config file
    let command = match cli.command {
        Commands::Completions(args) => return completions::run(args),
        command => command,
    };

    let session = Session::open(&cli.global)?;
    match command {
        Commands::Login(args) => login::run_login(args, &session).await,
        Commands::Logout => login::run_logout(&session),
        Commands::Config(cmd) => config::run(cmd, &session),
        Commands::Product(cmd) => product::run(cmd, &session).await,
        Commands::Detail(cmd) => detail::run(cmd, &session).await,
        Commands::Category(cmd) => catalog::run::<Category>(cmd, &session).await,
        Commands::Color(cmd) => catalog::run::<Color>(cmd, &session).await,
        Commands::Size(cmd) => catalog::run::<Size>(cmd, &session).await,
        Commands::Price(cmd) => price::run(cmd, &session).await,
        Commands::Supplier(cmd) => supplier::run(cmd, &session).await,
        Commands::Po(cmd) => purchase_order::run(cmd, &session).await,
        Commands::PoDetail(cmd) => purchase_order::run_detail(cmd, &session).await,
        Commands::Order(cmd) => order::run(cmd, &session).await,
        Commands::OrderDetail(cmd) => order::run_detail(cmd, &session).await,
        Commands::Inventory(cmd) => inventory::run(cmd, &session).await,
        Commands::User(cmd) => user::run(cmd, &session).await,
        Commands::Browse(args) => browse::run(args, &session).await,
        Commands::Completions(args) => completions::run(args),
    }
}
