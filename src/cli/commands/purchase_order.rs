//! `stockroom po` and `stockroom po-detail` commands - purchase orders

use std::str::FromStr;

use clap::Subcommand;
use miette::Result;

use crate::api::purchase_orders::{PurchaseOrderForm, PurchaseOrderLine, DEFAULT_LINE_QUANTITY};
use crate::api::{Resource, RowAction};
use crate::cli::entity_cmd::{self, ActionArgs, IdArgs};
use crate::cli::filters::PageArgs;
use crate::cli::helpers::success;
use crate::cli::session::Session;
use crate::core::{FilterField, RecordId};
use crate::entities::{PurchaseOrder, PurchaseOrderDetail};
use crate::schema::Form;

#[derive(Subcommand, Debug)]
pub enum PoCommands {
    /// List purchase orders
    List(PoListArgs),

    /// Show a purchase order
    Show(IdArgs),

    /// Place a purchase order with a supplier
    New(PoNewArgs),

    /// Delete a purchase order
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct PoListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only orders placed on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// `PRODUCT_ID` or `PRODUCT_ID:QUANTITY`
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub product_id: RecordId,
    pub quantity: u32,
}

impl FromStr for LineSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, qty)) => {
                let qty = qty
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| format!("invalid quantity in '{}'", s))?;
                (id, qty)
            }
            None => (s, DEFAULT_LINE_QUANTITY),
        };
        let product_id = RecordId::from_str(id)?;
        Ok(Self { product_id, quantity })
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct PoNewArgs {
    /// Supplier ID (required)
    #[arg(long, short = 's')]
    pub supplier: Option<RecordId>,

    /// Product detail to order as ID or ID:QTY (quantity defaults to 1; repeatable)
    #[arg(long = "line", short = 'l')]
    pub lines: Vec<LineSpec>,
}

impl PoNewArgs {
    fn to_form(&self) -> PurchaseOrderForm {
        PurchaseOrderForm {
            supplier_id: self.supplier.clone().unwrap_or_default(),
            products: self
                .lines
                .iter()
                .map(|line| PurchaseOrderLine {
                    quantity: line.quantity,
                    ..PurchaseOrderLine::new(line.product_id.clone())
                })
                .collect(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum PoDetailCommands {
    /// List purchase order lines, optionally of one order
    List(PoDetailListArgs),

    /// Show a purchase order line
    Show(IdArgs),

    /// Change the ordered quantity of a line
    SetQuantity(SetQuantityArgs),

    /// Delete a purchase order line
    Delete(ActionArgs),
}

#[derive(clap::Args, Debug)]
pub struct PoDetailListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only lines of this purchase order
    #[arg(long)]
    pub po: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetQuantityArgs {
    /// Line ID
    pub id: RecordId,

    /// New quantity (at least 1)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
}

pub async fn run(cmd: PoCommands, session: &Session) -> Result<()> {
    let api = session.api::<PurchaseOrder>()?;
    match cmd {
        PoCommands::List(args) => {
            let state = args.page.to_state(
                session.config.page_size(PurchaseOrder::PATH, PurchaseOrder::PAGE_SIZE),
                None,
                &[(FilterField::Date, args.date.as_deref())],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        PoCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        PoCommands::New(args) => {
            entity_cmd::run_create(&api, Form::PurchaseOrder, &args.to_form(), session).await
        }
        PoCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}

pub async fn run_detail(cmd: PoDetailCommands, session: &Session) -> Result<()> {
    let api = session.api::<PurchaseOrderDetail>()?;
    match cmd {
        PoDetailCommands::List(args) => {
            let state = args.page.to_state(
                session
                    .config
                    .page_size(PurchaseOrderDetail::PATH, PurchaseOrderDetail::PAGE_SIZE),
                None,
                &[(FilterField::PurchaseOrder, args.po.as_deref())],
            )?;
            entity_cmd::run_list(api, state, session).await
        }
        PoDetailCommands::Show(args) => entity_cmd::run_show(&api, &args.id, session).await,
        PoDetailCommands::SetQuantity(args) => {
            let ack = api
                .set_quantity(&args.id, args.quantity)
                .await
                .map_err(|e| miette::miette!("{}", e.user_message()))?;
            let message = ack
                .message
                .unwrap_or_else(|| format!("Line {} quantity set to {}", args.id, args.quantity));
            success(&message, session.global.quiet);
            Ok(())
        }
        PoDetailCommands::Delete(args) => entity_cmd::run_action(api, RowAction::Delete, &args, session).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spec_parsing() {
        let line: LineSpec = "12".parse().unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.product_id.as_str(), "12");

        let line: LineSpec = "12:5".parse().unwrap();
        assert_eq!(line.quantity, 5);

        assert!("12:x".parse::<LineSpec>().is_err());
        assert!(":3".parse::<LineSpec>().is_err());
    }

    #[test]
    fn test_form_without_lines_fails_validation() {
        let args = PoNewArgs {
            supplier: Some(RecordId::from(1u64)),
            lines: Vec::new(),
        };
        let validator =
            crate::schema::FormValidator::new(&crate::schema::SchemaRegistry::default()).unwrap();
        let err = validator.check(Form::PurchaseOrder, &args.to_form()).unwrap_err();
        assert!(err.has_field("products"));
    }
}
