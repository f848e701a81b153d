//! # Location Runtime CLI
//!
//! Drives the delivery-location core against the configured API.
//!
//! ```text
//! location-runtime status
//! location-runtime search "123 Mar"
//! location-runtime set-address --street "123 Market St" --city "San Francisco" --state CA --zip 94102
//! location-runtime locate
//! location-runtime browse
//! location-runtime clear
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gl_01_address_search::AddressSuggestionSource;
use gl_02_address_validation::{AddressDraft, ValidationOutcome};
use gl_05_location_sync::{LocationState, LocationSyncApi};
use gl_06_address_entry::{AddressEntryApi, EntryStep};
use location_runtime::{LocationContainer, RuntimeConfig};
use location_telemetry::{init_telemetry, record_command, render_metrics, TelemetryConfig};

/// Delivery-location runtime
#[derive(Parser, Debug)]
#[command(name = "location-runtime", version)]
#[command(about = "Set and inspect the delivery location")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "GL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current delivery location
    Status {
        /// Cart subtotal used for the fee label
        #[arg(long)]
        subtotal: Option<f64>,
    },
    /// Search addresses
    Search {
        /// Free-text query
        query: String,
    },
    /// Validate an address and make it the delivery address
    SetAddress {
        #[arg(long)]
        street: String,
        /// Apartment, suite or unit
        #[arg(long)]
        secondary: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: String,
        /// Notes for the courier
        #[arg(long)]
        instructions: Option<String>,
        /// Also save the address to the signed-in account
        #[arg(long)]
        save: bool,
    },
    /// Prefill an address from the device position
    Locate,
    /// Browse without delivery
    Browse,
    /// Forget the delivery location
    Clear,
    /// Print metrics in the Prometheus text format
    Metrics,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::Search { .. } => "search",
            Self::SetAddress { .. } => "set_address",
            Self::Locate => "locate",
            Self::Browse => "browse",
            Self::Clear => "clear",
            Self::Metrics => "metrics",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let config = RuntimeConfig::load(args.config.as_deref()).context("Failed to load config")?;
    let name = args.command.name();
    let result = run(args.command, config).await;
    record_command(name, result.is_ok());
    result
}

async fn run(command: Command, config: RuntimeConfig) -> Result<()> {
    if let Command::Metrics = command {
        print!("{}", render_metrics()?);
        return Ok(());
    }

    let container = LocationContainer::build(config).context("Failed to start runtime")?;
    let state = container.start().await;

    match command {
        Command::Status { subtotal } => {
            print_state(&state);
            if let Some(time) = container.coordinator.delivery_time_label() {
                println!("Delivery:  {}", time);
            }
            if let Some(fee) = container.coordinator.delivery_fee_label(subtotal) {
                println!("Fee:       {}", fee);
            }
        }
        Command::Search { query } => {
            let results = container.search.search(&query).await;
            if results.is_empty() {
                println!("No addresses found for '{}'", query);
            }
            for suggestion in results {
                println!(
                    "{}  {}, {}, {} {}",
                    suggestion.id,
                    suggestion.street,
                    suggestion.city,
                    suggestion.state,
                    suggestion.postal_code
                );
            }
        }
        Command::SetAddress {
            street,
            secondary,
            city,
            state,
            zip,
            instructions,
            save,
        } => {
            let draft = AddressDraft {
                street,
                secondary,
                city,
                state,
                postal_code: zip,
                delivery_instructions: instructions,
                ..AddressDraft::default()
            };
            container.entry.enter_manually();
            container.entry.edit_details(draft)?;

            match container.entry.submit_details().await? {
                ValidationOutcome::Valid(address) => {
                    info!("[runtime] Verified {}", address.one_line());
                }
                outcome => bail!(
                    "{}",
                    outcome
                        .user_message()
                        .unwrap_or_else(|| outcome.label().to_string())
                ),
            }

            let address = container.entry.confirm().await?;
            if save {
                container
                    .coordinator
                    .save_address_to_account(address)
                    .await
                    .context("Failed to save address to account")?;
            }
            print_state(&container.coordinator.snapshot());
        }
        Command::Locate => {
            let step = container.entry.use_current_location().await?;
            let view = container.entry.view();
            if step == EntryStep::Details {
                println!("Street:    {}", view.draft.street);
                println!("City:      {}", view.draft.city);
                println!("State:     {}", view.draft.state);
                println!("ZIP:       {}", view.draft.postal_code);
            }
            if let Some(prompt) = view.prompt {
                println!("{}", prompt.message());
            }
        }
        Command::Browse => print_state(&container.coordinator.enter_browse_mode().await),
        Command::Clear => print_state(&container.coordinator.clear_location().await),
        Command::Metrics => {}
    }

    Ok(())
}

fn print_state(state: &LocationState) {
    println!("Mode:      {}", state.mode().label());
    match state.address() {
        Some(address) => println!("Address:   {}", address.one_line()),
        None => println!("Address:   (none)"),
    }
    if let Some(zone) = state.zone() {
        println!("Zone:      {} ({})", zone.name, zone.zone_id);
    }
    println!(
        "Cart:      {}",
        if state.can_add_to_cart() {
            "open"
        } else {
            "browse only"
        }
    );
}
