//! # comanda-core: Pure Business Logic for Comanda
//!
//! This crate is the **heart** of Comanda. It contains the menu, pricing
//! and order rules as pure functions with no console I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Comanda Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console                                 │   │
//! │  │    Menu listing ──► Selection ──► Quantity ──► Receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ comanda-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │  catalog  │  │   order   │  │ validation│  │   │
//! │  │   │ MenuItem  │  │ listing   │  │ subtotal  │  │  parsing  │  │   │
//! │  │   │ pricing   │  │ lookup    │  │ discount  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rates and the cosmetic order number
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - Menu items, kinds and pricing rules
//! - [`catalog`] - The menu catalog and position lookup
//! - [`order`] - Orders, discount tiers and receipts
//! - [`error`] - Domain error types
//! - [`validation`] - Console input parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use comanda_core::{MenuCatalog, Order, OrderNumber};
//!
//! let catalog = MenuCatalog::house_menu();
//! let list = catalog.list_all();
//!
//! let mut order = Order::new(OrderNumber::new(1234));
//! order.add(list[0], 1); // CocaCola
//! order.add(list[8], 2); // Spaghetti
//!
//! assert_eq!(order.discounted_total().to_string(), "$39,425.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{item_at_position, MenuCatalog, MenuEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Category, MenuItem, MenuItemKind};
pub use money::Money;
pub use order::{Order, OrderLine, OrderSummary, SummaryLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Surcharge added to beverage prices (10%).
pub const BEVERAGE_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Maximum quantity accepted for a single order line.
///
/// Keeps line and order totals far inside `i64` cents.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Order discount brackets, highest threshold first.
///
/// A subtotal gets the rate of the first threshold it strictly exceeds,
/// or no discount if it exceeds none. Brackets do not stack.
pub const DISCOUNT_TIERS: [(Money, DiscountRate); 3] = [
    (Money::from_units(100_000), DiscountRate::from_bps(1500)),
    (Money::from_units(50_000), DiscountRate::from_bps(1000)),
    (Money::from_units(30_000), DiscountRate::from_bps(500)),
];
