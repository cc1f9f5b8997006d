//! `stockroom user` command - staff accounts

use clap::Subcommand;
use miette::Result;

use crate::api::users::RegisterForm;
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::helpers::{prompt_password, success};
use crate::cli::session::Session;
use crate::entities::User;
use crate::schema::Form;

/// Role assigned to accounts created from the command line
pub const DEFAULT_ROLE: &str = "2";

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users, optionally searching by full name
    List(ListArgs),

    /// Show a user
    Show(IdArgs),

    /// Register a new account
    New(RegisterArgs),

    /// Lock an account
    Lock(ActionArgs),

    /// Delete an account
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Search by full name
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub struct RegisterArgs {
    /// Full name (required)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Phone number, 10 digits (required)
    #[arg(long)]
    pub phone: Option<String>,

    /// Password, at least 6 characters (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Password again (prompted when omitted)
    #[arg(long)]
    pub retype_password: Option<String>,

    /// Role ID
    #[arg(long, default_value = DEFAULT_ROLE)]
    pub role: String,
}

impl RegisterArgs {
    fn to_form(&self, password: String, retype_password: String) -> RegisterForm {
        RegisterForm {
            fullname: self.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            phone_number: self.phone.as_deref().map(str::trim).unwrap_or_default().to_string(),
            password,
            retype_password,
            role_id: self.role.trim().to_string(),
        }
    }
}

pub async fn run(cmd: UserCommands, session: &Session) -> Result<()> {
    let api = session.api::<User>()?;
    match cmd {
        UserCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(User::PATH, User::PAGE_SIZE),
                args.search.as_deref(),
                &[],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        UserCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        UserCommands::New(args) => {
            let password = match &args.password {
                Some(p) => p.clone(),
                None => prompt_password("Password")?,
            };
            let retype = match &args.retype_password {
                Some(p) => p.clone(),
                None if args.password.is_some() => password.clone(),
                None => prompt_password("Retype password")?,
            };
            let form = args.to_form(password, retype);

            session.validator()?.check(Form::Register, &form)?;
            let ack = api
                .register(&form)
                .await
                .map_err(|e| miette::miette!("{}", e.user_message()))?;
            let message = ack
                .message
                .unwrap_or_else(|| format!("Registered {}", form.fullname));
            success(&message, session.global.quiet);
            Ok(())
        }
        UserCommands::Lock(args) => entity_cmd::run_action(api, RowAction::Lock, &args, session).await,
        UserCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}
