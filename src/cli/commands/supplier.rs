//! `stockroom supplier` command - supplier management

use clap::Subcommand;
use miette::Result;

use crate::api::catalog::SupplierForm;
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::core::RecordId;
use crate::entities::Supplier;
use crate::schema::Form;

#[derive(Subcommand, Debug)]
pub enum SupplierCommands {
    /// List suppliers
    List(ListArgs),

    /// Show a supplier's details
    Show(IdArgs),

    /// Create a new supplier
    New(SupplierArgs),

    /// Update a supplier
    Update(UpdateArgs),

    /// Delete a supplier
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(clap::Args, Debug, Default)]
pub struct SupplierArgs {
    /// Supplier name (required)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Phone number (required)
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Postal address
    #[arg(long, short = 'a')]
    pub address: Option<String>,
}

impl SupplierArgs {
    fn to_form(&self) -> SupplierForm {
        SupplierForm {
            name: self.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            phone_number: self.phone.as_deref().map(str::trim).unwrap_or_default().to_string(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Supplier ID
    pub id: RecordId,

    #[command(flatten)]
    pub fields: SupplierArgs,
}

pub async fn run(cmd: SupplierCommands, session: &Session) -> Result<()> {
    let api = session.api::<Supplier>()?;
    match cmd {
        SupplierCommands::List(args) => {
            let state = args
                .page
                .to_state(session.config.page_size(Supplier::PATH, Supplier::PAGE_SIZE), None, &[])?;
            entity_cmd::run_list(api, state, session).await
        }
        SupplierCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        SupplierCommands::New(args) => {
            entity_cmd::run_create(&api, Form::Supplier, &args.to_form(), session).await
        }
        SupplierCommands::Update(args) => {
            entity_cmd::run_update(&api, &args.id, Form::Supplier, &args.fields.to_form(), session).await
        }
        SupplierCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
