//! `stockroom order` and `stockroom order-detail` commands - customer orders

use clap::Subcommand;
use miette::Result;

use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::core::FilterField;
use crate::entities::{Order, OrderDetail};

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List customer orders
    List(OrderListArgs),

    /// Show an order
    Show(IdArgs),

    /// Confirm an order
    Confirm(ActionArgs),

    /// Delete an order
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct OrderListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only orders placed on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum OrderDetailCommands {
    /// List order lines, optionally of one order
    List(OrderDetailListArgs),

    /// Show an order line
    Show(IdArgs),

    /// Delete an order line
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct OrderDetailListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only lines of this order
    #[arg(long)]
    pub order: Option<String>,
}

pub async fn run(cmd: OrderCommands, session: &Session) -> Result<()> {
    let api = session.api::<Order>()?;
    match cmd {
        OrderCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(Order::PATH, Order::PAGE_SIZE),
                None,
                &[(FilterField::Date, args.date.as_deref())],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        OrderCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        OrderCommands::Confirm(args) => entity_cmd::run_action(api, RowAction::Confirm, &args, session).await,
        OrderCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}

pub async fn run_detail(cmd: OrderDetailCommands, session: &Session) -> Result<()> {
    let api = session.api::<OrderDetail>()?;
    match cmd {
        OrderDetailCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(OrderDetail::PATH, OrderDetail::PAGE_SIZE),
                None,
                &[(FilterField::Order, args.order.as_deref())],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        OrderDetailCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        OrderDetailCommands::Delete(args) => {
            entity_cmd::run_action(api, RowAction::Delete, &args, session).await
        }
    }
}
