//! # Ordering Session
//!
//! The read-eval loop that turns console input into order lines.
//!
//! ## Turn Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  print menu ──► read selection ──┬── not a number ──► "Invalid input"   │
//! │       ▲                          ├── 0 / EOF ───────► finish            │
//! │       │                          ├── out of range ──► "Invalid selection"│
//! │       │                          └── item                              │
//! │       │                                │                                │
//! │       │                          read quantity ──┬── bad ──► message    │
//! │       │                                          └── ok ───► add line   │
//! │       └────────────────────────────────────────────────────────┘        │
//! │                                                                         │
//! │  A failed step never touches the order. Only I/O errors end the loop   │
//! │  early.                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use comanda_core::validation::{parse_quantity, parse_selection, resolve_selection};
use comanda_core::{MenuCatalog, MenuItem, Order, ValidationError};
use tracing::{debug, info, warn};

use crate::error::ConsoleResult;
use crate::render::write_menu;

/// Selection that ends the loop.
pub const SENTINEL: i64 = 0;

pub const SELECTION_PROMPT: &str = "Select an item by number (0 to finish): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
pub const INVALID_SELECTION: &str = "Invalid selection.";
pub const INVALID_QUANTITY: &str = "Invalid quantity. Please enter a number from 1 to 999.";

/// What a single turn decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Continue,
    Finish,
}

/// Drives one order over a line-oriented input and a text output.
pub struct Session<'c, R, W> {
    catalog: &'c MenuCatalog,
    listing: Vec<&'c MenuItem>,
    order: Order<'c>,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(catalog: &'c MenuCatalog, order: Order<'c>, input: R, output: W) -> Self {
        Session {
            catalog,
            listing: catalog.list_all(),
            order,
            input,
            output,
        }
    }

    /// Runs turns until the sentinel or end of input, then hands back the
    /// order and the output.
    pub fn run(mut self) -> ConsoleResult<(Order<'c>, W)> {
        while self.turn()? == Turn::Continue {}

        info!(
            order_number = self.order.number().value(),
            lines = self.order.line_count(),
            "Ordering finished"
        );
        Ok((self.order, self.output))
    }

    fn turn(&mut self) -> ConsoleResult<Turn> {
        write_menu(&mut self.output, self.catalog)?;

        let Some(text) = self.prompt(&format!("\n{SELECTION_PROMPT}"))? else {
            warn!("Input closed before the sentinel; finishing order");
            return Ok(Turn::Finish);
        };

        let position = match parse_selection(&text) {
            Ok(position) => position,
            Err(err) => {
                debug!(error = %err, "Rejected selection");
                writeln!(self.output, "{INVALID_INPUT}")?;
                return Ok(Turn::Continue);
            }
        };

        if position == SENTINEL {
            return Ok(Turn::Finish);
        }

        let item = match resolve_selection(&self.listing, position) {
            Ok(item) => item,
            Err(err) => {
                debug!(error = %err, "Selection out of range");
                writeln!(self.output, "{INVALID_SELECTION}")?;
                return Ok(Turn::Continue);
            }
        };

        let Some(text) = self.prompt(&format!("Enter the quantity of {}: ", item.name()))? else {
            warn!("Input closed before the sentinel; finishing order");
            return Ok(Turn::Finish);
        };

        match parse_quantity(&text) {
            Ok(quantity) => {
                self.order.add(item, quantity);
                info!(position, item = item.name(), quantity, "Line added");
                writeln!(self.output, "{} x {} added to the order.", quantity, item.name())?;
            }
            Err(err) => {
                debug!(error = %err, "Rejected quantity");
                let message = match err {
                    ValidationError::NotANumber { .. } => INVALID_INPUT,
                    ValidationError::MustBePositive { .. }
                    | ValidationError::ExceedsMaximum { .. } => INVALID_QUANTITY,
                };
                writeln!(self.output, "{message}")?;
            }
        }

        Ok(Turn::Continue)
    }

    /// Prints a prompt and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::{Money, OrderNumber};
    use std::io::Cursor;

    fn run_script<'c>(catalog: &'c MenuCatalog, script: &str) -> (Order<'c>, String) {
        let order = Order::new(OrderNumber::new(4821));
        let session = Session::new(catalog, order, Cursor::new(script.to_string()), Vec::new());
        let (order, output) = session.run().unwrap();
        (order, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_sentinel_ends_with_empty_order() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "0\n");

        assert!(order.is_empty());
        assert_eq!(output.matches("-- MENU --").count(), 1);
    }

    #[test]
    fn test_adds_lines_in_order() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "1\n1\n9\n2\n0\n");

        let lines: Vec<_> = order.lines().map(|l| (l.item.name(), l.quantity)).collect();
        assert_eq!(lines, [("CocaCola", 1), ("Spaghetti", 2)]);
        assert_eq!(order.subtotal(), Money::from_units(41_500));
        assert_eq!(order.discounted_total(), Money::from_units(39_425));

        assert!(output.contains("Enter the quantity of CocaCola: "));
        assert!(output.contains("1 x CocaCola added to the order."));
        assert!(output.contains("2 x Spaghetti added to the order."));
        assert_eq!(output.matches("-- MENU --").count(), 3);
    }

    #[test]
    fn test_non_numeric_selection_keeps_order_and_reprints_menu() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "3\n1\nbeer\n0\n");

        assert_eq!(order.line_count(), 1);
        assert!(output.contains(INVALID_INPUT));

        let after_error = output.split(INVALID_INPUT).nth(1).unwrap();
        assert!(after_error.contains("-- MENU --"));
    }

    #[test]
    fn test_out_of_range_selection() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "14\n-1\n0\n");

        assert!(order.is_empty());
        assert_eq!(output.matches(INVALID_SELECTION).count(), 2);
        assert!(!output.contains("Enter the quantity"));
    }

    #[test]
    fn test_bad_quantity_discards_selection() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "5\nlots\n5\n0\n5\n-2\n5\n3\n0\n");

        let lines: Vec<_> = order.lines().map(|l| (l.item.name(), l.quantity)).collect();
        assert_eq!(lines, [("Stuffed Arepa", 3)]);
        assert_eq!(output.matches(INVALID_INPUT).count(), 1);
        assert_eq!(output.matches(INVALID_QUANTITY).count(), 2);
    }

    #[test]
    fn test_oversized_quantity_discards_selection() {
        let catalog = MenuCatalog::house_menu();
        let (order, output) = run_script(&catalog, "13\n1000\n13\n4294967295\n13\n999\n0\n");

        let lines: Vec<_> = order.lines().map(|l| (l.item.name(), l.quantity)).collect();
        assert_eq!(lines, [("Bandeja Paisa", 999)]);
        assert_eq!(output.matches(INVALID_QUANTITY).count(), 2);
    }

    #[test]
    fn test_many_maximal_lines_price_without_overflow() {
        let catalog = MenuCatalog::house_menu();
        let mut script = String::new();
        for _ in 0..720 {
            script.push_str("13\n4294967295\n13\n999\n");
        }
        script.push_str("0\n");

        let (order, output) = run_script(&catalog, &script);
        assert_eq!(order.line_count(), 720);
        assert_eq!(output.matches(INVALID_QUANTITY).count(), 720);
        assert_eq!(order.subtotal(), Money::from_units(30_000 * 999 * 720));
    }

    #[test]
    fn test_same_item_twice_is_two_lines() {
        let catalog = MenuCatalog::house_menu();
        let (order, _) = run_script(&catalog, "6\n1\n6\n1\n0\n");
        assert_eq!(order.line_count(), 2);
    }

    #[test]
    fn test_end_of_input_finishes_and_keeps_lines() {
        let catalog = MenuCatalog::house_menu();
        let (order, _) = run_script(&catalog, "2\n2\n");
        assert_eq!(order.line_count(), 1);

        let (order, _) = run_script(&catalog, "2\n2\n4");
        assert_eq!(order.line_count(), 1);
    }

    #[test]
    fn test_repeated_bad_input_does_not_lose_lines() {
        let catalog = MenuCatalog::house_menu();
        let mut script = String::from("13\n1\n");
        for _ in 0..50 {
            script.push_str("x\n99\n");
        }
        script.push_str("0\n");

        let (order, output) = run_script(&catalog, &script);
        assert_eq!(order.line_count(), 1);
        assert_eq!(output.matches(INVALID_INPUT).count(), 50);
        assert_eq!(output.matches(INVALID_SELECTION).count(), 50);
    }
}
