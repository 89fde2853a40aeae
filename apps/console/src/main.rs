//! # Comanda Console Entry Point
//!
//! Interactive restaurant ordering at the terminal.
//!
//! ## Usage
//! ```bash
//! cargo run -p comanda-console
//!
//! # JSON receipt, fixed order number, verbose logs on stderr
//! COMANDA_RECEIPT_FORMAT=json COMANDA_ORDER_NUMBER=1234 RUST_LOG=debug \
//!     cargo run -p comanda-console
//! ```

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    comanda_console::run().context("ordering session failed")
}
