use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tallybook::api::ApiClient;
use tallybook::cli::{
    handle_inventory_command, handle_invoice_command, handle_journal_command,
    handle_report_command, handle_voucher_command,
};
use tallybook::config::{paths::TallyPaths, settings::Settings};
use tallybook::display::{format_chart, format_customer_list, format_supplier_list};
use tallybook::models::{AccountClass, ChartOfAccounts};
use tallybook::services::MastersService;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal front end for a double-entry accounting backend",
    long_about = "tallybook is a terminal front end for a double-entry accounting \
                  backend. It handles data entry (journal entries, payment vouchers, \
                  invoices), report views, and master-data listings; all posting and \
                  persistence happen on the backend."
)]
struct Cli {
    /// Backend base URL, overriding the configured one
    #[arg(long, global = true, env = "TALLYBOOK_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Journal entry commands
    #[command(subcommand, alias = "jv")]
    Journal(tallybook::cli::JournalCommands),

    /// Payment voucher commands
    #[command(subcommand, alias = "pv")]
    Voucher(tallybook::cli::VoucherCommands),

    /// Invoice commands
    #[command(subcommand, alias = "inv")]
    Invoice(tallybook::cli::InvoiceCommands),

    /// Report views
    #[command(subcommand)]
    Report(tallybook::cli::ReportCommands),

    /// Inventory management commands
    #[command(subcommand)]
    Inventory(tallybook::cli::InventoryCommands),

    /// List customers
    Customers,

    /// List suppliers
    Suppliers,

    /// Show the chart of accounts
    Chart {
        /// Only show one class (asset, liability, equity, revenue, expense)
        #[arg(long)]
        class: Option<String>,
    },

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = api_url;
    }

    let chart = ChartOfAccounts::standard();
    let api = ApiClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.timeout_secs),
    )?;

    match cli.command {
        Some(Commands::Journal(cmd)) => {
            handle_journal_command(&api, &chart, &settings, cmd)?;
        }
        Some(Commands::Voucher(cmd)) => {
            handle_voucher_command(&api, &chart, &settings, cmd)?;
        }
        Some(Commands::Invoice(cmd)) => {
            handle_invoice_command(&api, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&api, &chart, &settings, cmd)?;
        }
        Some(Commands::Inventory(cmd)) => {
            handle_inventory_command(&api, &settings, cmd)?;
        }
        Some(Commands::Customers) => {
            let customers = MastersService::new(&api).customers()?;
            println!("{}", format_customer_list(&customers, &settings.currency_symbol));
        }
        Some(Commands::Suppliers) => {
            let suppliers = MastersService::new(&api).suppliers()?;
            println!("{}", format_supplier_list(&suppliers, &settings.currency_symbol));
        }
        Some(Commands::Chart { class }) => {
            let class = class
                .map(|s| {
                    AccountClass::parse(&s).ok_or_else(|| {
                        tallybook::TallyError::Validation(format!("Unknown account class '{}'", s))
                    })
                })
                .transpose()?;
            println!("{}", format_chart(&chart, class));
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("tallybook Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Backend URL:     {}", settings.api_base_url);
            println!("  Timeout:         {}s", settings.timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("tallybook - accounting front end");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally init' to write a configuration file.");
        }
    }

    Ok(())
}
