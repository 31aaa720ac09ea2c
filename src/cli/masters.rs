//! Inventory CLI commands
//!
//! Listing plus create/update/delete. Updates are read-modify-write: the
//! current record is fetched, the given fields are applied, and the full
//! item is sent back.

use clap::Subcommand;

use super::parse_amount;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{format_inventory_list, format_receipt};
use crate::error::{TallyError, TallyResult};
use crate::services::MastersService;

/// Inventory subcommands
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List inventory items
    List,
    /// Add an inventory item
    Add {
        /// Stock-keeping unit, unique per item
        sku: String,
        /// Item name
        name: String,
        /// Selling price per unit
        #[arg(short, long)]
        price: String,
        /// Units on hand
        #[arg(short, long, default_value_t = 0)]
        quantity: i64,
        /// Reorder threshold
        #[arg(short, long, default_value_t = 0)]
        reorder_level: i64,
    },
    /// Update an inventory item
    Update {
        /// SKU of the item to update
        sku: String,
        /// New item name
        #[arg(long)]
        name: Option<String>,
        /// New unit price
        #[arg(short, long)]
        price: Option<String>,
        /// New quantity on hand
        #[arg(short, long)]
        quantity: Option<i64>,
        /// New reorder threshold
        #[arg(short, long)]
        reorder_level: Option<i64>,
    },
    /// Delete an inventory item
    Delete {
        /// SKU of the item to delete
        sku: String,
    },
}

/// Handle an inventory command
pub fn handle_inventory_command(
    api: &ApiClient,
    settings: &Settings,
    cmd: InventoryCommands,
) -> TallyResult<()> {
    let service = MastersService::new(api);

    match cmd {
        InventoryCommands::List => {
            let items = service.inventory()?;
            println!("{}", format_inventory_list(&items, &settings.currency_symbol));
        }

        InventoryCommands::Add {
            sku,
            name,
            price,
            quantity,
            reorder_level,
        } => {
            let mut item = crate::models::InventoryItem::new(sku, name, parse_amount(&price)?);
            item.quantity = quantity;
            item.reorder_level = reorder_level;

            let receipt = service.create_item(&item)?;
            println!("{}", format_receipt(&receipt));
        }

        InventoryCommands::Update {
            sku,
            name,
            price,
            quantity,
            reorder_level,
        } => {
            if name.is_none() && price.is_none() && quantity.is_none() && reorder_level.is_none() {
                println!("No changes specified. Use --name, --price, --quantity, or --reorder-level.");
                return Ok(());
            }

            let mut item = service
                .inventory()?
                .into_iter()
                .find(|i| i.sku == sku)
                .ok_or_else(|| TallyError::item_not_found(&sku))?;

            if let Some(name) = name {
                item.name = name;
            }
            if let Some(price) = price {
                item.unit_price = parse_amount(&price)?;
            }
            if let Some(quantity) = quantity {
                item.quantity = quantity;
            }
            if let Some(reorder_level) = reorder_level {
                item.reorder_level = reorder_level;
            }

            let receipt = service.update_item(&sku, &item)?;
            println!("{}", format_receipt(&receipt));
        }

        InventoryCommands::Delete { sku } => {
            let receipt = service.delete_item(&sku)?;
            println!("{}", format_receipt(&receipt));
        }
    }

    Ok(())
}
