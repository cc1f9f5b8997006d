//! `stockroom product` command - product management

use clap::Subcommand;
use miette::Result;

use crate::api::products::ProductForm;
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::core::{FilterField, RecordId};
use crate::entities::Product;
use crate::schema::Form;

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products, optionally by name search or category
    List(ListArgs),

    /// Show a product
    Show(IdArgs),

    /// Create a product (one detail per size/color pair)
    New(ProductArgs),

    /// Replace a product's fields
    Update(UpdateArgs),

    /// Delete a product
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Search by product name
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only products in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub struct ProductArgs {
    /// Product name (required)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Category ID (required)
    #[arg(long, short = 'c')]
    pub category: Option<RecordId>,

    /// Size IDs (repeat or comma-separate; at least one)
    #[arg(long, value_delimiter = ',')]
    pub size: Vec<RecordId>,

    /// Color IDs (repeat or comma-separate; at least one)
    #[arg(long, value_delimiter = ',')]
    pub color: Vec<RecordId>,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl ProductArgs {
    fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            category_id: self.category.clone().unwrap_or_default(),
            sizes: self.size.clone(),
            colors: self.color.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Product ID
    pub id: RecordId,

    #[command(flatten)]
    pub fields: ProductArgs,
}

pub async fn run(cmd: ProductCommands, session: &Session) -> Result<()> {
    let api = session.api::<Product>()?;
    match cmd {
        ProductCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(Product::PATH, Product::PAGE_SIZE),
                args.search.as_deref(),
                &[(FilterField::Category, args.category.as_deref())],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        ProductCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        ProductCommands::New(args) => {
            entity_cmd::run_create(&api, Form::Product, &args.to_form(), session).await
        }
        ProductCommands::Update(args) => {
            entity_cmd::run_update(&api, &args.id, Form::Product, &args.fields.to_form(), session).await
        }
        ProductCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
