//! # Validation Module
//!
//! Parses the text typed at the console prompts.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "3\n" ──► parse_selection ──► item_at_position ──► &MenuItem           │
//! │                 │                     │                                 │
//! │           NotANumber            ItemNotFound                            │
//! │                                                                         │
//! │  "2\n" ──► parse_quantity ──► Order::add                                │
//! │                 │                                                       │
//! │     NotANumber / MustBePositive / ExceedsMaximum                        │
//! │                                                                         │
//! │  Order::add itself never validates; this module is the only gate.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use comanda_core::validation::{parse_quantity, parse_selection};
//!
//! assert_eq!(parse_selection(" 7 ").unwrap(), 7);
//! assert_eq!(parse_quantity("2").unwrap(), 2);
//! assert!(parse_quantity("two").is_err());
//! ```

use crate::catalog::item_at_position;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::MenuItem;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a menu selection.
///
/// Any integer is accepted, including the `0` sentinel and negatives; range
/// checks belong to [`resolve_selection`].
pub fn parse_selection(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    input.parse().map_err(|_| ValidationError::NotANumber {
        field: "selection".to_string(),
        input: input.to_string(),
    })
}

/// Parses a line quantity. Must be between 1 and [`MAX_ITEM_QUANTITY`].
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    let quantity: i64 = input.parse().map_err(|_| ValidationError::NotANumber {
        field: "quantity".to_string(),
        input: input.to_string(),
    })?;

    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > i64::from(MAX_ITEM_QUANTITY) {
        return Err(ValidationError::ExceedsMaximum {
            field: "quantity".to_string(),
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    Ok(quantity as u32)
}

/// Resolves a parsed selection against a flattened menu listing.
pub fn resolve_selection<'c>(list: &[&'c MenuItem], position: i64) -> CoreResult<&'c MenuItem> {
    item_at_position(list, position).ok_or(CoreError::ItemNotFound { position })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("13", 13)]
    #[case("  4\n", 4)]
    #[case("-2", -2)]
    #[case("+5", 5)]
    fn test_parse_selection_accepts_integers(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_selection(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.5")]
    #[case("3 4")]
    #[case("99999999999999999999999")]
    fn test_parse_selection_rejects_text(#[case] input: &str) {
        assert!(matches!(
            parse_selection(input),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 25 ", 25)]
    #[case("999", 999)]
    fn test_parse_quantity_accepts_positive(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_quantity(input).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    fn test_parse_quantity_rejects_non_positive(#[case] input: &str) {
        assert_eq!(
            parse_quantity(input),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
    }

    #[rstest]
    #[case("1000")]
    #[case("4294967295")]
    #[case("9223372036854775807")]
    fn test_parse_quantity_rejects_above_maximum(#[case] input: &str) {
        assert_eq!(
            parse_quantity(input),
            Err(ValidationError::ExceedsMaximum {
                field: "quantity".to_string(),
                max: 999
            })
        );
    }

    #[rstest]
    #[case("two")]
    #[case("")]
    #[case("2.5")]
    #[case("99999999999999999999")]
    fn test_parse_quantity_rejects_text(#[case] input: &str) {
        assert!(matches!(
            parse_quantity(input),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_resolve_selection() {
        let catalog = MenuCatalog::house_menu();
        let list = catalog.list_all();

        assert_eq!(resolve_selection(&list, 9).unwrap().name(), "Spaghetti");
        assert_eq!(
            resolve_selection(&list, 14),
            Err(CoreError::ItemNotFound { position: 14 })
        );
        assert_eq!(
            resolve_selection(&list, -1),
            Err(CoreError::ItemNotFound { position: -1 })
        );
    }
}
