//! Text rendering for the menu, the receipt and the line recap.

use std::io::{self, Write};

use comanda_core::{MenuCatalog, Order, OrderSummary};

use crate::config::ReceiptFormat;
use crate::error::ConsoleResult;

/// Prints the numbered menu, one section per category.
///
/// ```text
/// -- MENU --
///
/// BEVERAGES:
/// 1. CocaCola - $5,000.00 (350ml) [Beverage]
/// ```
pub fn write_menu<W: Write>(out: &mut W, catalog: &MenuCatalog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "-- MENU --")?;

    let mut current = None;
    for entry in catalog.entries() {
        if current != Some(entry.category) {
            writeln!(out)?;
            writeln!(out, "{}:", entry.category.label())?;
            current = Some(entry.category);
        }
        writeln!(
            out,
            "{}. {} - {} {} [{}]",
            entry.position,
            entry.item.name(),
            entry.item.unit_price(),
            entry.item.annotation(),
            entry.item.kind_label()
        )?;
    }
    Ok(())
}

/// Prints the order summary in the configured format.
pub fn write_receipt<W: Write>(
    out: &mut W,
    summary: &OrderSummary,
    format: ReceiptFormat,
) -> ConsoleResult<()> {
    writeln!(out)?;
    match format {
        ReceiptFormat::Text => writeln!(out, "{summary}")?,
        ReceiptFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?,
    }
    Ok(())
}

/// Walks the order's lines and prints each with its computed total.
pub fn write_recap<W: Write>(out: &mut W, order: &Order<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Order lines:")?;
    for line in order {
        writeln!(
            out,
            "{} x {} ({}) - Total: {}",
            line.quantity,
            line.item.name(),
            line.item.kind_label(),
            line.total()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::OrderNumber;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_lists_every_item_with_annotation() {
        let catalog = MenuCatalog::house_menu();
        let text = render(|out| write_menu(out, &catalog).unwrap());

        assert!(text.contains("-- MENU --"));
        assert!(text.contains("\nBEVERAGES:\n1. CocaCola - $5,000.00 (350ml) [Beverage]\n"));
        assert!(text.contains("4. Water - $2,000.00 (500ml) [Beverage]\n\nAPPETIZERS:\n"));
        assert!(text.contains("5. Stuffed Arepa - $6,000.00 (Fried) [Appetizer]"));
        assert!(text.contains("8. Nachos - $5,500.00 (Not fried) [Appetizer]"));
        assert!(text.contains("\nMAIN COURSES:\n9. Spaghetti - $18,000.00 (Origin: Italian) [MainCourse]"));
        assert!(text.contains("13. Bandeja Paisa - $30,000.00 (Origin: Colombian) [MainCourse]"));
        assert!(!text.contains("14."));
    }

    #[test]
    fn test_recap_lines() {
        let catalog = MenuCatalog::house_menu();
        let list = catalog.list_all();
        let mut order = Order::new(OrderNumber::new(1000));
        order.add(list[2], 2);
        order.add(list[6], 1);

        let text = render(|out| write_recap(out, &order).unwrap());
        assert_eq!(
            text,
            "\nOrder lines:\n\
             2 x Beer (Beverage) - Total: $15,400.00\n\
             1 x Patacon (Appetizer) - Total: $3,000.00\n"
        );
    }

    #[test]
    fn test_json_receipt() {
        let catalog = MenuCatalog::house_menu();
        let list = catalog.list_all();
        let mut order = Order::new(OrderNumber::new(2024));
        order.add(list[12], 4);

        let text = render(|out| write_receipt(out, &order.summary(), ReceiptFormat::Json).unwrap());
        let json: serde_json::Value = serde_json::from_str(text.trim()).unwrap();

        assert_eq!(json["order_number"], 2024);
        assert_eq!(json["subtotal"], 12_000_000);
        assert_eq!(json["discount_rate"], 1500);
        assert_eq!(json["total"], 10_200_000);
    }
}
