//! # Menu Items
//!
//! A menu item is a name, a unit price, and one of three kinds. The kind
//! carries the category-specific metadata and decides the pricing rule.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind         Metadata        price_for(q)                              │
//! │  ──────────   ─────────────   ───────────────────────────────────────   │
//! │  Beverage     volume_ml       unit_price × q + 10% surcharge            │
//! │  Appetizer    fried           unit_price × q                            │
//! │  MainCourse   origin          unit_price × q                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

use crate::money::Money;
use crate::types::TaxRate;
use crate::BEVERAGE_TAX_RATE;

// =============================================================================
// Category
// =============================================================================

/// Menu section an item is listed under.
///
/// Variant order is listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Beverages,
    Appetizers,
    MainCourses,
}

impl Category {
    /// All categories in listing order.
    pub const ALL: [Category; 3] = [
        Category::Beverages,
        Category::Appetizers,
        Category::MainCourses,
    ];

    /// Section header shown above the category's items.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Beverages => "BEVERAGES",
            Category::Appetizers => "APPETIZERS",
            Category::MainCourses => "MAIN COURSES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Menu Item Kind
// =============================================================================

/// The closed set of item kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItemKind {
    Beverage { volume_ml: u32 },
    Appetizer { fried: bool },
    MainCourse { origin: String },
}

impl MenuItemKind {
    /// Surcharge added on top of the linear price, if any.
    fn surcharge(&self) -> Option<TaxRate> {
        match self {
            MenuItemKind::Beverage { .. } => Some(BEVERAGE_TAX_RATE),
            MenuItemKind::Appetizer { .. } | MenuItemKind::MainCourse { .. } => None,
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    name: String,
    unit_price: Money,
    #[serde(flatten)]
    kind: MenuItemKind,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, unit_price: Money, kind: MenuItemKind) -> Self {
        MenuItem {
            name: name.into(),
            unit_price,
            kind,
        }
    }

    pub fn beverage(name: impl Into<String>, unit_price: Money, volume_ml: u32) -> Self {
        Self::new(name, unit_price, MenuItemKind::Beverage { volume_ml })
    }

    pub fn appetizer(name: impl Into<String>, unit_price: Money, fried: bool) -> Self {
        Self::new(name, unit_price, MenuItemKind::Appetizer { fried })
    }

    pub fn main_course(
        name: impl Into<String>,
        unit_price: Money,
        origin: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            unit_price,
            MenuItemKind::MainCourse {
                origin: origin.into(),
            },
        )
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Price of `quantity` units of this item.
    ///
    /// Every kind shares the linear rule `unit_price × quantity`; beverages
    /// add the surcharge on top. Pure and non-decreasing in `quantity`.
    ///
    /// ## Precondition
    /// `quantity > 0`. Zero is not rejected here and prices to zero.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::{MenuItem, Money};
    ///
    /// let cola = MenuItem::beverage("CocaCola", Money::from_units(5_000), 350);
    /// assert_eq!(cola.price_for(1), Money::from_units(5_500));
    ///
    /// let pasta = MenuItem::main_course("Spaghetti", Money::from_units(18_000), "Italian");
    /// assert_eq!(pasta.price_for(2), Money::from_units(36_000));
    /// ```
    pub fn price_for(&self, quantity: u32) -> Money {
        let base = self.unit_price.multiply_quantity(quantity);
        match self.kind.surcharge() {
            Some(rate) => base + base.calculate_tax(rate),
            None => base,
        }
    }

    /// Section this item is listed under.
    pub fn category(&self) -> Category {
        match self.kind {
            MenuItemKind::Beverage { .. } => Category::Beverages,
            MenuItemKind::Appetizer { .. } => Category::Appetizers,
            MenuItemKind::MainCourse { .. } => Category::MainCourses,
        }
    }

    /// Short kind name shown in brackets on listings and the recap.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            MenuItemKind::Beverage { .. } => "Beverage",
            MenuItemKind::Appetizer { .. } => "Appetizer",
            MenuItemKind::MainCourse { .. } => "MainCourse",
        }
    }

    /// Kind-specific detail shown next to the price on the menu.
    pub fn annotation(&self) -> String {
        match &self.kind {
            MenuItemKind::Beverage { volume_ml } => format!("({volume_ml}ml)"),
            MenuItemKind::Appetizer { fried: true } => "(Fried)".to_string(),
            MenuItemKind::Appetizer { fried: false } => "(Not fried)".to_string(),
            MenuItemKind::MainCourse { origin } => format!("(Origin: {origin})"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beverage_adds_ten_percent() {
        let beer = MenuItem::beverage("Beer", Money::from_units(7_000), 330);
        assert_eq!(beer.price_for(1), Money::from_units(7_700));
        assert_eq!(beer.price_for(3), Money::from_units(23_100));
    }

    #[test]
    fn test_beverage_surcharge_rounds_to_cent() {
        // 0.15 × 1.10 = 0.165 → 0.17
        let sample = MenuItem::beverage("Sample", Money::from_cents(15), 10);
        assert_eq!(sample.price_for(1), Money::from_cents(17));
    }

    #[test]
    fn test_appetizer_and_main_course_are_linear() {
        let nachos = MenuItem::appetizer("Nachos", Money::from_units(5_500), false);
        let burger = MenuItem::main_course("Hamburger", Money::from_units(20_000), "American");

        assert_eq!(nachos.price_for(4), Money::from_units(22_000));
        assert_eq!(burger.price_for(2), Money::from_units(40_000));
    }

    #[test]
    fn test_zero_quantity_prices_to_zero() {
        let water = MenuItem::beverage("Water", Money::from_units(2_000), 500);
        assert!(water.price_for(0).is_zero());
    }

    #[test]
    fn test_category_and_labels() {
        let cola = MenuItem::beverage("CocaCola", Money::from_units(5_000), 350);
        let arepa = MenuItem::appetizer("Stuffed Arepa", Money::from_units(6_000), true);
        let nachos = MenuItem::appetizer("Nachos", Money::from_units(5_500), false);
        let paisa = MenuItem::main_course("Bandeja Paisa", Money::from_units(30_000), "Colombian");

        assert_eq!(cola.category(), Category::Beverages);
        assert_eq!(arepa.category(), Category::Appetizers);
        assert_eq!(paisa.category(), Category::MainCourses);

        assert_eq!(cola.kind_label(), "Beverage");
        assert_eq!(arepa.kind_label(), "Appetizer");
        assert_eq!(paisa.kind_label(), "MainCourse");

        assert_eq!(cola.annotation(), "(350ml)");
        assert_eq!(arepa.annotation(), "(Fried)");
        assert_eq!(nachos.annotation(), "(Not fried)");
        assert_eq!(paisa.annotation(), "(Origin: Colombian)");
    }

    #[test]
    fn test_category_order_matches_listing() {
        let mut shuffled = vec![Category::MainCourses, Category::Beverages, Category::Appetizers];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }

    #[test]
    fn test_serializes_kind_inline() {
        let cola = MenuItem::beverage("CocaCola", Money::from_units(5_000), 350);
        let json = serde_json::to_value(&cola).unwrap();

        assert_eq!(json["name"], "CocaCola");
        assert_eq!(json["unit_price"], 500_000);
        assert_eq!(json["kind"], "beverage");
        assert_eq!(json["volume_ml"], 350);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
