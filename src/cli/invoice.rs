//! Invoice CLI commands
//!
//! Builds an invoice from repeated `--item` arguments, totals it for
//! preview, and forwards it to the backend.

use clap::Subcommand;

use super::entry_date;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{format_invoice_preview, format_receipt};
use crate::error::{TallyError, TallyResult};
use crate::models::period::parse_date;
use crate::models::{Invoice, InvoiceItem, Money};
use crate::services::InvoiceService;

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Post a sales invoice
    Post {
        /// Customer being billed
        customer: String,
        /// Line item as DESCRIPTION:QTY:UNIT_PRICE (e.g. "Widget:3:25.00")
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,
        /// Tax rate percentage applied to the subtotal
        #[arg(short, long, default_value_t = 0.0)]
        tax_rate: f64,
        /// Invoice date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Payment due date
        #[arg(long)]
        due: Option<String>,
        /// Free-text notes
        #[arg(short, long, default_value = "")]
        notes: String,
        /// Validate and preview without posting
        #[arg(long)]
        dry_run: bool,
    },
}

/// Handle an invoice command
pub fn handle_invoice_command(
    api: &ApiClient,
    settings: &Settings,
    cmd: InvoiceCommands,
) -> TallyResult<()> {
    let service = InvoiceService::new(api);

    match cmd {
        InvoiceCommands::Post {
            customer,
            items,
            tax_rate,
            date,
            due,
            notes,
            dry_run,
        } => {
            let date = entry_date(date.as_deref(), settings)?;
            let mut invoice = Invoice::new(date, customer).with_tax_rate(tax_rate);
            invoice.notes = notes;

            if let Some(due) = due {
                let due = parse_date(&due, &settings.date_format)
                    .map_err(|e| TallyError::Validation(e.to_string()))?;
                invoice = invoice.with_due_date(due);
            }

            for spec in &items {
                invoice.push_item(parse_item_spec(spec)?);
            }

            service.validate(&invoice)?;
            print!("{}", format_invoice_preview(&invoice, &settings.currency_symbol));

            if dry_run {
                println!("\nDry run: nothing posted.");
            } else {
                let receipt = service.submit(&invoice)?;
                println!("\n{}", format_receipt(&receipt));
            }
        }
    }

    Ok(())
}

/// Parse an `--item` argument of the form DESCRIPTION:QTY:UNIT_PRICE
fn parse_item_spec(spec: &str) -> TallyResult<InvoiceItem> {
    // Split from the right so descriptions may contain colons
    let mut parts = spec.rsplitn(3, ':');
    let price = parts.next();
    let quantity = parts.next();
    let description = parts.next().unwrap_or("").trim();

    let (quantity, price) = match (quantity, price) {
        (Some(q), Some(p)) => (q.trim(), p.trim()),
        _ => {
            return Err(TallyError::Validation(format!(
                "Item '{}': expected DESCRIPTION:QTY:UNIT_PRICE",
                spec
            )))
        }
    };

    let quantity: u32 = quantity.parse().map_err(|_| {
        TallyError::Validation(format!("Item '{}': bad quantity '{}'", spec, quantity))
    })?;
    let unit_price = Money::parse(price).map_err(|_| {
        TallyError::Validation(format!("Item '{}': bad unit price '{}'", spec, price))
    })?;

    Ok(InvoiceItem::new(description, quantity, unit_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item_spec("Widget:3:25.00").unwrap();
        assert_eq!(item.description, "Widget");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.unit_price.cents(), 2500);
    }

    #[test]
    fn test_description_may_contain_colons() {
        let item = parse_item_spec("Support: on-site:2:150").unwrap();
        assert_eq!(item.description, "Support: on-site");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price.cents(), 15000);
    }

    #[test]
    fn test_malformed_items_rejected() {
        assert!(parse_item_spec("Widget:3").unwrap_err().is_validation());
        assert!(parse_item_spec("Widget:three:25").unwrap_err().is_validation());
        assert!(parse_item_spec("Widget:3:cheap").unwrap_err().is_validation());
    }
}
