//! `stockroom inventory` command - stock on hand

use clap::Subcommand;
use miette::Result;

use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::entities::Inventory;

#[derive(Subcommand, Debug)]
pub enum InventoryCommands {
    /// List inventory, optionally searching by version name
    List(ListArgs),

    /// Show an inventory record
    Show(IdArgs),

    /// Delete an inventory record
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Search by product detail version name
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

pub async fn run(cmd: InventoryCommands, session: &Session) -> Result<()> {
    let api = session.api::<Inventory>()?;
    match cmd {
        InventoryCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(Inventory::PATH, Inventory::PAGE_SIZE),
                args.search.as_deref(),
                &[],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        InventoryCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        InventoryCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
