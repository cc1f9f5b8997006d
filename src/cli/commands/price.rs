//! `stockroom price` command - selling and promotion prices

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::api::prices::{all_prices, PriceForm};
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::helpers::success;
use crate::cli::session::Session;
use crate::core::RecordId;
use crate::entities::Price;
use crate::schema::Form;

#[derive(Subcommand, Debug)]
pub enum PriceCommands {
    /// List current prices (one per product detail), or every price with --all
    List(ListArgs),

    /// Show a price
    Show(IdArgs),

    /// Set a price for one or more product details
    New(NewArgs),

    /// Delete a price
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Include superseded prices
    #[arg(long)]
    pub all: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct NewArgs {
    /// Product detail IDs to price (repeat or comma-separate)
    #[arg(long = "detail", short = 'd', value_delimiter = ',')]
    pub details: Vec<RecordId>,

    /// Selling price in VND
    #[arg(long)]
    pub selling: Option<f64>,

    /// Promotion price in VND
    #[arg(long)]
    pub promotion: Option<f64>,

    /// First day the price applies (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day the price applies (open-ended when omitted)
    #[arg(long)]
    pub end: Option<String>,
}

impl NewArgs {
    fn to_forms(&self) -> Vec<PriceForm> {
        self.details
            .iter()
            .map(|id| PriceForm {
                product_detail_id: id.clone(),
                price_selling: self.selling,
                promotion_price: self.promotion,
                start_date: self.start.clone(),
                end_date: self.end.clone(),
            })
            .collect()
    }
}

pub async fn run(cmd: PriceCommands, session: &Session) -> Result<()> {
    match cmd {
        PriceCommands::List(args) => {
            let api = if args.all {
                all_prices(session.client()?)
            } else {
                session.api::<Price>()?
            };
            let state = args.page.to_state(session.config.page_size(Price::PATH, Price::PAGE_SIZE), None, &[])?;
            entity_cmd::run_list(api, state, session).await
        }
        PriceCommands::Show(args) => entity_cmd::run_show(&session.api::<Price>()?, &args.id, session).await,
        PriceCommands::New(args) => run_new(args, session).await,
        PriceCommands::Delete(args) => {
            entity_cmd::run_action(session.api::<Price>()?, RowAction::Delete, &args, session).await
        }
    }
}

async fn run_new(args: NewArgs, session: &Session) -> Result<()> {
    let forms = args.to_forms();
    if forms.is_empty() {
        return Err(miette::miette!(
            help = "pass --detail <ID> once per product detail",
            "Select at least one product detail to price"
        ));
    }

    let validator = session.validator()?;
    for form in &forms {
        validator.check(Form::Price, form)?;
    }

    let outcome = session.api::<Price>()?.create_batch(&forms).await;
    for (id, err) in &outcome.failed {
        eprintln!("{} detail {}: {}", style("✗").red(), id, err.user_message());
    }
    if !outcome.is_success() {
        return Err(miette::miette!("No prices were created"));
    }
    success(
        &format!("Created {} of {} price(s)", outcome.created.len(), forms.len()),
        session.global.quiet,
    );
    Ok(())
}
