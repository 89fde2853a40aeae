//! # Menu Catalog
//!
//! Immutable registry of menu items grouped by category.
//!
//! ## Addressing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEVERAGES        1. CocaCola   2. Lemonade   3. Beer   4. Water        │
//! │  APPETIZERS       5. Arepa      6. Empanada   7. Patacon  8. Nachos     │
//! │  MAIN COURSES     9. Spaghetti ... 13. Bandeja Paisa                    │
//! │                                                                         │
//! │  Positions run 1..N across categories and never reset per category.     │
//! │  They are the only way the console refers to an item.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once at startup and passed to whoever needs it.
//! Orders borrow its items, so it must outlive every order.

use std::collections::BTreeMap;

use crate::menu::{Category, MenuItem};
use crate::money::Money;

/// One numbered line of the flattened menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry<'c> {
    /// 1-based position, continuous across categories.
    pub position: usize,
    pub category: Category,
    pub item: &'c MenuItem,
}

/// Menu items keyed by category, in listing order.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    sections: BTreeMap<Category, Vec<MenuItem>>,
}

impl MenuCatalog {
    pub fn builder() -> MenuCatalogBuilder {
        MenuCatalogBuilder::default()
    }

    /// The house menu: 4 beverages, 4 appetizers and 5 main courses.
    pub fn house_menu() -> Self {
        Self::builder()
            .item(MenuItem::beverage("CocaCola", Money::from_units(5_000), 350))
            .item(MenuItem::beverage("Lemonade", Money::from_units(4_000), 300))
            .item(MenuItem::beverage("Beer", Money::from_units(7_000), 330))
            .item(MenuItem::beverage("Water", Money::from_units(2_000), 500))
            .item(MenuItem::appetizer("Stuffed Arepa", Money::from_units(6_000), true))
            .item(MenuItem::appetizer("Empanada", Money::from_units(2_500), true))
            .item(MenuItem::appetizer("Patacon", Money::from_units(3_000), true))
            .item(MenuItem::appetizer("Nachos", Money::from_units(5_500), false))
            .item(MenuItem::main_course("Spaghetti", Money::from_units(18_000), "Italian"))
            .item(MenuItem::main_course("Grilled Beef", Money::from_units(25_000), "Colombian"))
            .item(MenuItem::main_course("Pork Loin", Money::from_units(23_000), "International"))
            .item(MenuItem::main_course("Hamburger", Money::from_units(20_000), "American"))
            .item(MenuItem::main_course("Bandeja Paisa", Money::from_units(30_000), "Colombian"))
            .build()
    }

    /// Items of one category, in insertion order.
    pub fn section(&self, category: Category) -> &[MenuItem] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories that have at least one item, in listing order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections.keys().copied()
    }

    /// Numbered entries across all categories.
    pub fn entries(&self) -> impl Iterator<Item = MenuEntry<'_>> {
        self.sections
            .iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (*category, item)))
            .enumerate()
            .map(|(i, (category, item))| MenuEntry {
                position: i + 1,
                category,
                item,
            })
    }

    /// Flattened listing; `list[i]` is the item at position `i + 1`.
    pub fn list_all(&self) -> Vec<&MenuItem> {
        self.entries().map(|entry| entry.item).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Looks up a 1-based menu position in a flattened listing.
///
/// Zero, negative and past-the-end positions yield `None`.
///
/// ## Example
/// ```rust
/// use comanda_core::catalog::{item_at_position, MenuCatalog};
///
/// let catalog = MenuCatalog::house_menu();
/// let list = catalog.list_all();
/// assert_eq!(item_at_position(&list, 1).map(|i| i.name()), Some("CocaCola"));
/// assert!(item_at_position(&list, 0).is_none());
/// ```
pub fn item_at_position<'c>(list: &[&'c MenuItem], index: i64) -> Option<&'c MenuItem> {
    let position = usize::try_from(index).ok()?;
    if position == 0 {
        return None;
    }
    list.get(position - 1).copied()
}

/// Collects items and files each under its own category.
#[derive(Debug, Default)]
pub struct MenuCatalogBuilder {
    sections: BTreeMap<Category, Vec<MenuItem>>,
}

impl MenuCatalogBuilder {
    pub fn item(mut self, item: MenuItem) -> Self {
        self.sections.entry(item.category()).or_default().push(item);
        self
    }

    pub fn build(self) -> MenuCatalog {
        MenuCatalog {
            sections: self.sections,
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
    fn test_house_menu_has_thirteen_items() {
        let catalog = MenuCatalog::house_menu();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.section(Category::Beverages).len(), 4);
        assert_eq!(catalog.section(Category::Appetizers).len(), 4);
        assert_eq!(catalog.section(Category::MainCourses).len(), 5);
    }

    #[test]
    fn test_numbering_is_continuous_across_categories() {
        let catalog = MenuCatalog::house_menu();
        let entries: Vec<_> = catalog.entries().collect();

        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, (1..=13).collect::<Vec<_>>());

        for entry in &entries {
            let expected = match entry.position {
                1..=4 => Category::Beverages,
                5..=8 => Category::Appetizers,
                _ => Category::MainCourses,
            };
            assert_eq!(entry.category, expected, "position {}", entry.position);
        }
    }

    #[test]
    fn test_builder_groups_out_of_order_items() {
        let catalog = MenuCatalog::builder()
            .item(MenuItem::main_course("Plate", Money::from_units(10), "Here"))
            .item(MenuItem::beverage("Drink", Money::from_units(1), 200))
            .item(MenuItem::main_course("Other Plate", Money::from_units(12), "There"))
            .build();

        let list = catalog.list_all();
        let names: Vec<_> = list.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["Drink", "Plate", "Other Plate"]);

        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories, [Category::Beverages, Category::MainCourses]);
        assert!(catalog.section(Category::Appetizers).is_empty());
    }

    #[test]
    fn test_item_at_position_bounds() {
        let catalog = MenuCatalog::house_menu();
        let list = catalog.list_all();

        assert!(item_at_position(&list, 0).is_none());
        assert!(item_at_position(&list, -1).is_none());
        assert!(item_at_position(&list, i64::MIN).is_none());
        assert!(item_at_position(&list, 14).is_none());
        assert!(item_at_position(&list, i64::MAX).is_none());

        assert_eq!(item_at_position(&list, 1).unwrap().name(), "CocaCola");
        assert_eq!(item_at_position(&list, 5).unwrap().name(), "Stuffed Arepa");
        assert_eq!(item_at_position(&list, 13).unwrap().name(), "Bandeja Paisa");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MenuCatalog::builder().build();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(item_at_position(&catalog.list_all(), 1).is_none());
    }
}
