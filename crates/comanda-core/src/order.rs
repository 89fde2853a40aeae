//! # Order
//!
//! An order accumulates (item, quantity) lines and prices them.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Order::new() ──► add() ──► add() ──► ... ──► summary() / lines()      │
//! │                    └──────── mutable ───────┘   └──── read only ────┘   │
//! │                                                                         │
//! │  Lines are append-only. Adding the same item twice yields two lines.    │
//! │  Items are borrowed from the MenuCatalog; the order owns only the       │
//! │  quantities.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Tiers
//! One tier applies, chosen by the highest threshold the subtotal strictly
//! exceeds. See [`crate::DISCOUNT_TIERS`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::menu::MenuItem;
use crate::money::Money;
use crate::types::{DiscountRate, OrderNumber};
use crate::DISCOUNT_TIERS;

// =============================================================================
// Order Line
// =============================================================================

/// One (item, quantity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine<'c> {
    pub item: &'c MenuItem,
    pub quantity: u32,
}

impl OrderLine<'_> {
    /// Price of this line, per the item's pricing rule.
    pub fn total(&self) -> Money {
        self.item.price_for(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order.
#[derive(Debug, Clone)]
pub struct Order<'c> {
    number: OrderNumber,
    opened_at: DateTime<Utc>,
    lines: Vec<OrderLine<'c>>,
}

impl<'c> Order<'c> {
    /// Opens an empty order with the given number.
    pub fn new(number: OrderNumber) -> Self {
        Order {
            number,
            opened_at: Utc::now(),
            lines: Vec::new(),
        }
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    /// Appends a line.
    ///
    /// ## Precondition
    /// `quantity > 0`. Not checked here; the console parses and rejects
    /// bad quantities before calling this.
    pub fn add(&mut self, item: &'c MenuItem, quantity: u32) {
        self.lines.push(OrderLine { item, quantity });
    }

    /// Lines in insertion order.
    ///
    /// Every call starts a fresh traversal from the first line.
    pub fn lines(&self) -> impl Iterator<Item = OrderLine<'c>> + '_ {
        self.lines.iter().copied()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line's price. Zero for an empty order.
    pub fn subtotal(&self) -> Money {
        self.lines().map(|line| line.total()).sum()
    }

    /// Discount tier the current subtotal falls into.
    pub fn discount_rate(&self) -> DiscountRate {
        discount_rate_for(self.subtotal())
    }

    /// Amount taken off the subtotal.
    pub fn discount(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal.discount_amount(discount_rate_for(subtotal))
    }

    /// Subtotal minus the tier discount.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::{MenuItem, Money, Order, OrderNumber};
    ///
    /// let cola = MenuItem::beverage("CocaCola", Money::from_units(5_000), 350);
    /// let pasta = MenuItem::main_course("Spaghetti", Money::from_units(18_000), "Italian");
    ///
    /// let mut order = Order::new(OrderNumber::new(1234));
    /// order.add(&cola, 1);
    /// order.add(&pasta, 2);
    ///
    /// assert_eq!(order.subtotal(), Money::from_units(41_500));
    /// assert_eq!(order.discounted_total(), Money::from_units(39_425));
    /// ```
    pub fn discounted_total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal.apply_discount(discount_rate_for(subtotal))
    }

    /// Read-only snapshot for receipts.
    pub fn summary(&self) -> OrderSummary {
        let lines: Vec<SummaryLine> = self
            .lines()
            .map(|line| SummaryLine {
                name: line.item.name().to_string(),
                kind: line.item.kind_label(),
                quantity: line.quantity,
                unit_price: line.item.unit_price(),
                total: line.total(),
            })
            .collect();

        let subtotal: Money = lines.iter().map(|line| line.total).sum();
        let discount_rate = discount_rate_for(subtotal);
        let discount = subtotal.discount_amount(discount_rate);

        OrderSummary {
            order_number: self.number,
            opened_at: self.opened_at,
            lines,
            subtotal,
            discount_rate,
            discount,
            total: subtotal - discount,
        }
    }
}

impl<'a, 'c> IntoIterator for &'a Order<'c> {
    type Item = OrderLine<'c>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, OrderLine<'c>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().copied()
    }
}

/// Picks the discount tier for a subtotal.
///
/// Thresholds are exclusive: a subtotal exactly on a threshold gets the
/// tier below it.
pub fn discount_rate_for(subtotal: Money) -> DiscountRate {
    DISCOUNT_TIERS
        .iter()
        .find(|(threshold, _)| subtotal > *threshold)
        .map(|(_, rate)| *rate)
        .unwrap_or_default()
}

// =============================================================================
// Summary
// =============================================================================

/// A priced line on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub kind: &'static str,
    pub quantity: u32,
    pub unit_price: Money,
    pub total: Money,
}

/// Receipt data for a finished order.
///
/// `Display` renders the text receipt; `Serialize` gives the JSON one.
/// Money fields serialize as integer cents.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub order_number: OrderNumber,
    pub opened_at: DateTime<Utc>,
    pub lines: Vec<SummaryLine>,
    pub subtotal: Money,
    pub discount_rate: DiscountRate,
    pub discount: Money,
    pub total: Money,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order {}", self.order_number)?;
        writeln!(f, "Order summary:")?;
        for line in &self.lines {
            writeln!(f, " - {} x{} = {}", line.name, line.quantity, line.total)?;
        }
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        if !self.discount_rate.is_zero() {
            writeln!(f, "Discount ({}): -{}", self.discount_rate, self.discount)?;
        }
        write!(f, "Total with discount: {}", self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
