//! `stockroom category|color|size` commands - name/value lookup tables

use clap::Subcommand;
use miette::Result;

use crate::api::catalog::NameForm;
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::session::Session;
use crate::core::RecordId;
use crate::schema::Form;

#[derive(Subcommand, Debug)]
pub enum NameCommands {
    /// List entries page by page
    List(ListArgs),

    /// Show one entry
    Show(IdArgs),

    /// Create an entry
    New(NameArgs),

    /// Rename an entry or change its value
    Update(UpdateArgs),

    /// Delete an entry
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(clap::Args, Debug, Default)]
pub struct NameArgs {
    /// Display name (required)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Swatch or size value (colors and sizes)
    #[arg(long)]
    pub value: Option<String>,
}

impl NameArgs {
    fn to_form(&self) -> NameForm {
        NameForm {
            name: self.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            value: self.value.clone(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Record ID
    pub id: RecordId,

    #[command(flatten)]
    pub fields: NameArgs,
}

/// Run a name-table subcommand for resource `T`
pub async fn run<T: Resource>(cmd: NameCommands, session: &Session) -> Result<()> {
    let api = session.api::<T>()?;
    match cmd {
        NameCommands::List(args) => {
            let state = args.page.to_state(session.config.page_size(T::PATH, T::PAGE_SIZE), None, &[])?;
            entity_cmd::run_list(api, state, session).await
        }
        NameCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        NameCommands::New(args) => entity_cmd::run_create(&api, Form::Name, &args.to_form(), session).await,
        NameCommands::Update(args) => {
            entity_cmd::run_update(&api, &args.id, Form::Name, &args.fields.to_form(), session).await
        }
        NameCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
