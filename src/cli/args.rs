//! Command-line argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    browse::BrowseArgs,
    catalog::NameCommands,
    completions::CompletionsArgs,
    config::ConfigCommands,
    detail::DetailCommands,
    inventory::InventoryCommands,
    login::LoginArgs,
    order::{OrderCommands, OrderDetailCommands},
    price::PriceCommands,
    product::ProductCommands,
    purchase_order::{PoCommands, PoDetailCommands},
    supplier::SupplierCommands,
    user::UserCommands,
};

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    version,
    about = "Stockroom - manage a clothing shop's catalog, stock and orders from the terminal",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Backend base URL (e.g. http://localhost:8080/api/v1)
    #[arg(long, global = true, env = "STOCKROOM_SERVER")]
    pub server: Option<String>,

    /// Bearer token, overriding the one saved by `login`
    #[arg(long, global = true, env = "STOCKROOM_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table on a terminal, TSV when piped (YAML for single records)
    #[default]
    Auto,
    /// Boxed table
    Table,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON records
    Json,
    /// YAML records
    Yaml,
    /// Record IDs only, one per line
    Id,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and save the session token
    Login(LoginArgs),

    /// Forget the saved session token
    Logout,

    /// Show or change client configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Product details (size/color variants)
    #[command(subcommand)]
    Detail(DetailCommands),

    /// Product categories
    #[command(subcommand)]
    Category(NameCommands),

    /// Colors
    #[command(subcommand)]
    Color(NameCommands),

    /// Sizes
    #[command(subcommand)]
    Size(NameCommands),

    /// Prices
    #[command(subcommand)]
    Price(PriceCommands),

    /// Suppliers
    #[command(subcommand)]
    Supplier(SupplierCommands),

    /// Purchase orders
    #[command(subcommand)]
    Po(PoCommands),

    /// Purchase order lines
    #[command(subcommand)]
    PoDetail(PoDetailCommands),

    /// Customer orders
    #[command(subcommand)]
    Order(OrderCommands),

    /// Customer order lines
    #[command(subcommand)]
    OrderDetail(OrderDetailCommands),

    /// Inventory
    #[command(subcommand)]
    Inventory(InventoryCommands),

    /// User accounts
    #[command(subcommand)]
    User(UserCommands),

    /// Page through a resource interactively
    Browse(BrowseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
