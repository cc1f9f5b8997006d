//! `stockroom login` / `stockroom logout` - session token management

use console::style;
use miette::Result;

use crate::api::users::{login, LoginForm};
use crate::api::HttpClient;
use crate::cli::helpers::prompt_password;
use crate::cli::session::Session;
use crate::schema::Form;

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Phone number of the account
    #[arg(long)]
    pub phone: String,

    /// Password (prompted when omitted)
    #[arg(long, env = "STOCKROOM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Exchange credentials for a token and save it to the config file
pub async fn run_login(args: LoginArgs, session: &Session) -> Result<()> {
    let password = match args.password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };
    let form = LoginForm {
        phone_number: args.phone.trim().to_string(),
        password,
    };
    session.validator()?.check(Form::Login, &form)?;

    // Login must not carry a stale token from an earlier session
    let client = HttpClient::new(&session.config.server, None, session.config.timeout())
        .map_err(|e| miette::miette!("{}", e))?;
    let token = login(&client, &form)
        .await
        .map_err(|e| miette::miette!("Login failed: {}", e.user_message()))?;

    session.save_file(|config| config.token = token)?;

    if !session.global.quiet {
        println!("{} Logged in as {}.", style("✓").green(), style(&form.phone_number).cyan());
        println!("   Token saved to {}", style(session.config_path.display()).dim());
    }
    Ok(())
}

pub fn run_logout(session: &Session) -> Result<()> {
    session.save_file(|config| config.token.clear())?;
    if !session.global.quiet {
        println!("{} Logged out.", style("✓").green());
    }
    Ok(())
}
