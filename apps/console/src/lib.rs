//! # Comanda Console Library
//!
//! Wires the catalog, the order and the console together.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Build the house menu catalog
//! 4. Open an order with the configured or a random number
//! 5. Run the ordering session over stdin/stdout
//! 6. Print the receipt and the line recap

pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io::{self, BufRead, Write};

use comanda_core::{MenuCatalog, Order};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;
use crate::render::{write_receipt, write_recap};
use crate::session::Session;

pub use crate::error::ConsoleError;

/// Runs the console application against the process's stdin and stdout.
pub fn run() -> ConsoleResult<()> {
    init_tracing();

    let config = ConsoleConfig::load()?;
    info!(receipt_format = ?config.receipt_format, "Configuration loaded");

    let catalog = MenuCatalog::house_menu();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_with(&config, &catalog, stdin.lock(), stdout.lock())
}

/// Runs one full ordering session over the given input and output.
pub fn run_with<R, W>(
    config: &ConsoleConfig,
    catalog: &MenuCatalog,
    input: R,
    output: W,
) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
{
    let order = Order::new(config.order_number());
    info!(
        order_number = order.number().value(),
        items = catalog.len(),
        "Order opened"
    );

    let (order, mut output) = Session::new(catalog, order, input, output).run()?;

    write_receipt(&mut output, &order.summary(), config.receipt_format)?;
    write_recap(&mut output, &order)?;
    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Show order events
/// - `RUST_LOG=comanda_console=debug` - Also show rejected input
/// - Default: WARN level, so the interactive screen stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
