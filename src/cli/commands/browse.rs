//! `stockroom browse` command - interactive list view
//!
//! Keeps one list controller alive and lets the user page, search, clear the
//! filter and run row actions. Errors show as a banner above the table until
//! it expires.

use clap::ValueEnum;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::api::prices::all_prices;
use crate::api::{Resource, ResourceApi, RowAction};
use crate::cli::entity_cmd::{capitalize, print_page};
use crate::cli::session::Session;
use crate::cli::OutputFormat;
use crate::core::{Commit, ListController, Mutation, ViewSnapshot, ViewState};
use crate::entities::{
    Category, Color, Inventory, Order, OrderDetail, Price, Product, ProductDetail, PurchaseOrder,
    PurchaseOrderDetail, Size, Supplier, User,
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BrowseTarget {
    Products,
    Details,
    Categories,
    Colors,
    Sizes,
    Prices,
    Suppliers,
    PurchaseOrders,
    PoDetails,
    Orders,
    OrderDetails,
    Inventories,
    Users,
}

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    /// What to browse
    #[arg(value_enum)]
    pub resource: BrowseTarget,

    /// Start from a saved view (e.g. "page=2&search=ao")
    #[arg(long)]
    pub view: Option<String>,

    /// Prices: include superseded prices
    #[arg(long)]
    pub all: bool,
}

/// One entry of the action menu
#[derive(Debug, Clone, PartialEq)]
enum MenuItem {
    Next,
    Previous,
    GoTo,
    Search,
    ClearFilter,
    Row(RowAction),
    Refresh,
    Quit,
}

impl MenuItem {
    fn label(&self) -> String {
        match self {
            MenuItem::Next => "Next page".to_string(),
            MenuItem::Previous => "Previous page".to_string(),
            MenuItem::GoTo => "Go to page...".to_string(),
            MenuItem::Search => "Search...".to_string(),
            MenuItem::ClearFilter => "Clear filter".to_string(),
            MenuItem::Row(action) => format!("{} a row...", capitalize(action.verb())),
            MenuItem::Refresh => "Refresh".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries that apply to the current view
fn menu_for<T: Resource>(snapshot: &ViewSnapshot<T>) -> Vec<MenuItem> {
    let mut items = Vec::new();
    if snapshot.state.page < snapshot.total_pages {
        items.push(MenuItem::Next);
    }
    if snapshot.state.page > 1 {
        items.push(MenuItem::Previous);
    }
    if snapshot.total_pages > 1 {
        items.push(MenuItem::GoTo);
    }
    if T::SEARCH_PARAM.is_some() {
        items.push(MenuItem::Search);
    }
    if snapshot.state.is_filtered() {
        items.push(MenuItem::ClearFilter);
    }
    if !snapshot.items.is_empty() {
        items.extend(T::ACTIONS.iter().copied().map(MenuItem::Row));
    }
    items.push(MenuItem::Refresh);
    items.push(MenuItem::Quit);
    items
}

pub async fn run(args: BrowseArgs, session: &Session) -> Result<()> {
    if !Term::stdout().is_term() {
        return Err(miette::miette!(
            help = "use `stockroom <resource> list --page N` in scripts",
            "browse needs an interactive terminal"
        ));
    }

    match args.resource {
        BrowseTarget::Products => browse(session.api::<Product>()?, &args, session).await,
        BrowseTarget::Details => browse(session.api::<ProductDetail>()?, &args, session).await,
        BrowseTarget::Categories => browse(session.api::<Category>()?, &args, session).await,
        BrowseTarget::Colors => browse(session.api::<Color>()?, &args, session).await,
        BrowseTarget::Sizes => browse(session.api::<Size>()?, &args, session).await,
        BrowseTarget::Prices if args.all => browse(all_prices(session.client()?), &args, session).await,
        BrowseTarget::Prices => browse(session.api::<Price>()?, &args, session).await,
        BrowseTarget::Suppliers => browse(session.api::<Supplier>()?, &args, session).await,
        BrowseTarget::PurchaseOrders => browse(session.api::<PurchaseOrder>()?, &args, session).await,
        BrowseTarget::PoDetails => browse(session.api::<PurchaseOrderDetail>()?, &args, session).await,
        BrowseTarget::Orders => browse(session.api::<Order>()?, &args, session).await,
        BrowseTarget::OrderDetails => browse(session.api::<OrderDetail>()?, &args, session).await,
        BrowseTarget::Inventories => browse(session.api::<Inventory>()?, &args, session).await,
        BrowseTarget::Users => browse(session.api::<User>()?, &args, session).await,
    }
}

async fn browse<T: Resource>(api: ResourceApi<T>, args: &BrowseArgs, session: &Session) -> Result<()> {
    let state = match &args.view {
        Some(query) => ViewState::from_query(query, session.config.page_size(T::PATH, T::PAGE_SIZE)),
        None => session.view_state::<T>(),
    };
    let controller = ListController::new(api, state, session.config.banner_duration());
    let theme = ColorfulTheme::default();
    let term = Term::stdout();

    controller.load().await;

    loop {
        let snapshot = controller.snapshot().await;
        term.clear_screen().into_diagnostic()?;
        println!("{}", style(capitalize(T::NAME_PLURAL)).bold());
        if let Some(banner) = &snapshot.banner {
            println!("{}", style(banner).red().bold());
        }
        print_page(&snapshot, OutputFormat::Table, false)?;

        let menu = menu_for(&snapshot);
        let labels: Vec<String> = menu.iter().map(MenuItem::label).collect();
        let Some(choice) = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .into_diagnostic()?
        else {
            return Ok(());
        };

        match &menu[choice] {
            MenuItem::Next => {
                controller.next_page().await;
            }
            MenuItem::Previous => {
                controller.prev_page().await;
            }
            MenuItem::GoTo => {
                let page: u32 = Input::with_theme(&theme)
                    .with_prompt(format!("Page (1-{})", snapshot.total_pages))
                    .interact_text()
                    .into_diagnostic()?;
                controller.goto_page(page).await;
            }
            MenuItem::Search => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Search")
                    .allow_empty(true)
                    .interact_text()
                    .into_diagnostic()?;
                controller.search(&text).await;
            }
            MenuItem::ClearFilter => {
                controller.clear_filter().await;
            }
            MenuItem::Row(action) => {
                run_row_action(&controller, *action, &snapshot, &theme).await?;
            }
            MenuItem::Refresh => {
                controller.load().await;
            }
            MenuItem::Quit => return Ok(()),
        }
    }
}

/// Pick a row, stage the action, and run it only after confirmation
async fn run_row_action<T: Resource>(
    controller: &ListController<ResourceApi<T>>,
    action: RowAction,
    snapshot: &ViewSnapshot<T>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let rows: Vec<String> = snapshot
        .items
        .iter()
        .map(|item| format!("{}  {}", item.id(), item.label()))
        .collect();
    let Some(index) = Select::with_theme(theme)
        .with_prompt(format!("{} which {}?", capitalize(action.verb()), T::NAME))
        .items(&rows)
        .interact_opt()
        .into_diagnostic()?
    else {
        return Ok(());
    };

    let item = &snapshot.items[index];
    if !controller.request(action, item.id().clone()).await {
        return Ok(());
    }

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("{} {} {}?", capitalize(action.verb()), T::NAME, item.label()))
        .default(false)
        .interact()
        .into_diagnostic()?;
    if !confirmed {
        controller.cancel().await;
        return Ok(());
    }

    if let Mutation::Applied { message: Some(message), reload: Commit::Applied } = controller.confirm().await {
        println!("{} {}", style("✓").green(), message);
    }
    Ok(())
}
