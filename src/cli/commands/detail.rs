//! `stockroom detail` command - product details (size/color variants)

use clap::Subcommand;
use miette::Result;

use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::core::FilterField;
use crate::entities::ProductDetail;

#[derive(Subcommand, Debug)]
pub enum DetailCommands {
    /// List product details by name search, size, color or product
    List(ListArgs),

    /// Show a product detail
    Show(IdArgs),

    /// Delete a product detail
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Search by version name
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only this size
    #[arg(long)]
    pub size: Option<String>,

    /// Only this color
    #[arg(long)]
    pub color: Option<String>,

    /// Only variants of this product
    #[arg(long)]
    pub product: Option<String>,
}

pub async fn run(cmd: DetailCommands, session: &Session) -> Result<()> {
    let api = session.api::<ProductDetail>()?;
    match cmd {
        DetailCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(ProductDetail::PATH, ProductDetail::PAGE_SIZE),
                args.search.as_deref(),
                &[
                    (FilterField::Size, args.size.as_deref()),
                    (FilterField::Color, args.color.as_deref()),
                    (FilterField::Product, args.product.as_deref()),
                ],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        DetailCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        DetailCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
