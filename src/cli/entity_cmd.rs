//! Shared entity command infrastructure
//!
//! Common list/show/create/row-action flows, generic over [`Resource`], so
//! each resource command file only declares its arguments and forms.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::api::{Resource, ResourceApi, RowAction};
use crate::cli::helpers::{confirm, success};
use crate::cli::output::effective_format;
use crate::cli::session::Session;
use crate::cli::table::{render_record, TableFormatter};
use crate::cli::OutputFormat;
use crate::core::{Commit, Entity, ListController, ListSource, Mutation, RecordId, ViewSnapshot, ViewState};
use crate::schema::Form;

/// Arguments for commands that take one record ID
#[derive(clap::Args, Debug)]
pub struct IdArgs {
    /// Record ID
    pub id: RecordId,
}

/// Arguments for confirm-gated row actions
#[derive(clap::Args, Debug)]
pub struct ActionArgs {
    /// Record ID
    pub id: RecordId,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// List view to refresh afterwards (default: first page)
    #[arg(long)]
    pub view: Option<String>,
}

// =========================================================================
// List
// =========================================================================

/// Fetch the page described by `state` and print it
pub async fn run_list<T: Resource>(api: ResourceApi<T>, state: ViewState, session: &Session) -> Result<()> {
    let controller = ListController::new(api, state, session.config.banner_duration());
    let commit = controller.load().await;
    let snapshot = controller.snapshot().await;
    if commit != Commit::Applied {
        return Err(banner_error(&snapshot));
    }
    print_page(&snapshot, session.global.output, session.global.quiet)
}

/// Print a fetched page with its paging footer
pub fn print_page<T: Entity>(snapshot: &ViewSnapshot<T>, format: OutputFormat, quiet: bool) -> Result<()> {
    let format = effective_format(format, true);

    if snapshot.items.is_empty() && matches!(format, OutputFormat::Table | OutputFormat::Tsv) {
        if !quiet {
            println!("No {} found.", T::NAME_PLURAL);
        }
        return Ok(());
    }

    TableFormatter::new(format).output(&snapshot.items)?;

    if format == OutputFormat::Table && !quiet {
        print_list_footer(snapshot);
    }
    Ok(())
}

/// Print "page N of M" and the view line that reproduces this page
pub fn print_list_footer<T>(snapshot: &ViewSnapshot<T>) {
    println!(
        "Page {} of {} ({} shown)",
        style(snapshot.state.page).cyan(),
        style(snapshot.total_pages).cyan(),
        snapshot.items.len()
    );
    let query = snapshot.state.to_query();
    if !query.is_empty() {
        println!("{} {}", style("view:").dim(), query);
    }
}

fn banner_error<T>(snapshot: &ViewSnapshot<T>) -> miette::Report {
    let message = snapshot
        .banner
        .clone()
        .unwrap_or_else(|| crate::api::FALLBACK_MESSAGE.to_string());
    miette::miette!("{}", message)
}

// =========================================================================
// Show
// =========================================================================

pub async fn run_show<T: Resource>(api: &ResourceApi<T>, id: &RecordId, session: &Session) -> Result<()> {
    let record = api.get(id).await.map_err(|e| miette::miette!("{}", e.user_message()))?;

    match effective_format(session.global.output, false) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&record).into_diagnostic()?);
        }
        OutputFormat::Table | OutputFormat::Auto => {
            print!("{}", render_record(&record));
        }
        format => {
            TableFormatter::new(format).output(std::slice::from_ref(&record))?;
        }
    }
    Ok(())
}

// =========================================================================
// Create / update
// =========================================================================

/// Validate `payload` against `form`, then POST it
///
/// An invalid form is reported without any request being sent.
pub async fn run_create<T, F>(api: &ResourceApi<T>, form: Form, payload: &F, session: &Session) -> Result<()>
where
    T: Resource,
    F: Serialize + Sync,
{
    session.validator()?.check(form, payload)?;
    let ack = api
        .create(payload)
        .await
        .map_err(|e| miette::miette!("{}", e.user_message()))?;
    let message = ack.message.unwrap_or_else(|| format!("Created {}", T::NAME));
    success(&message, session.global.quiet);
    Ok(())
}

/// Validate `payload` against `form`, then PUT it to record `id`
pub async fn run_update<T, F>(
    api: &ResourceApi<T>,
    id: &RecordId,
    form: Form,
    payload: &F,
    session: &Session,
) -> Result<()>
where
    T: Resource,
    F: Serialize + Sync,
{
    session.validator()?.check(form, payload)?;
    let ack = api
        .update(id, payload)
        .await
        .map_err(|e| miette::miette!("{}", e.user_message()))?;
    let message = ack.message.unwrap_or_else(|| format!("Updated {} {}", T::NAME, id));
    success(&message, session.global.quiet);
    Ok(())
}

// =========================================================================
// Row actions
// =========================================================================

/// Confirm and run a row action through a list controller
///
/// On success the list view is fetched again (exactly once) and shown when
/// output goes to a terminal; on failure nothing is refetched.
pub async fn run_action<T: Resource>(
    api: ResourceApi<T>,
    action: RowAction,
    args: &ActionArgs,
    session: &Session,
) -> Result<()> {
    if !api.supports(action) {
        return Err(miette::miette!("{} cannot be {}ed here", T::NAME_PLURAL, action.verb().trim_end_matches('e')));
    }

    if !args.yes {
        let prompt = format!("{} {} {}?", capitalize(action.verb()), T::NAME, args.id);
        if !confirm(&prompt)? {
            if !session.global.quiet {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    let state = match &args.view {
        Some(query) => ViewState::from_query(query, session.config.page_size(T::PATH, T::PAGE_SIZE)),
        None => session.view_state::<T>(),
    };
    let controller = ListController::new(api, state, session.config.banner_duration());

    let outcome = match action {
        RowAction::Delete => controller.delete(args.id.clone()).await,
        status => controller.update_status(args.id.clone(), status).await,
    };
    match outcome {
        Mutation::Applied { message, reload } => {
            let message = message.unwrap_or_else(|| format!("{} {} {}", past_tense(action), T::NAME, args.id));
            success(&message, session.global.quiet);

            let snapshot = controller.snapshot().await;
            if reload == Commit::Applied {
                if effective_format(session.global.output, true) == OutputFormat::Table && !session.global.quiet {
                    println!();
                    print_page(&snapshot, OutputFormat::Table, false)?;
                }
            } else if let Some(banner) = &snapshot.banner {
                eprintln!("{} could not refresh list: {}", style("!").yellow(), banner);
            }
            Ok(())
        }
        Mutation::Failed => Err(banner_error(&controller.snapshot().await)),
        Mutation::NothingPending => Err(miette::miette!("No action was pending")),
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn past_tense(action: RowAction) -> &'static str {
    match action {
        RowAction::Delete => "Deleted",
        RowAction::Lock => "Locked",
        RowAction::Confirm => "Confirmed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("delete"), "Delete");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_banner_error_falls_back() {
        let snapshot: ViewSnapshot<u32> = ViewSnapshot {
            state: ViewState::new(5),
            items: Vec::new(),
            total_pages: 1,
            loading: false,
            banner: None,
            pending: None,
        };
        assert_eq!(banner_error(&snapshot).to_string(), crate::api::FALLBACK_MESSAGE);
    }
}
