//! Receipt rendering
//!
//! Renders a frozen order into a typed line list the printing surface
//! lays out. Character-width and ESC/POS concerns stay with the printer.

use serde::Serialize;

use shared::models::{Order, OrderItem};
use shared::util::format_currency;

const SEPARATOR: &str = "------------------------------";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptLineKind {
    Text,
    Total,
    Separator,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReceiptLine {
    pub kind: ReceiptLineKind,
    pub value: String,
}

impl ReceiptLine {
    fn text(value: impl Into<String>) -> Self {
        Self {
            kind: ReceiptLineKind::Text,
            value: value.into(),
        }
    }

    fn separator() -> Self {
        Self {
            kind: ReceiptLineKind::Separator,
            value: SEPARATOR.to_string(),
        }
    }
}

/// Build the customer receipt for a frozen order
pub fn build_receipt_lines(order: &Order, store_name: &str) -> Vec<ReceiptLine> {
    let mut lines = vec![
        ReceiptLine::text(store_name),
        ReceiptLine::text(format!("Ticket {}", order.order_number)),
        ReceiptLine::text(order.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ReceiptLine::separator(),
    ];

    for item in &order.items {
        lines.push(ReceiptLine::text(format!(
            "{} x {}  {}",
            item.quantity,
            item.name,
            format_currency(item.base_price)
        )));
    }

    lines.push(ReceiptLine::separator());
    lines.push(ReceiptLine::text(format!(
        "Subtotal: {}",
        format_currency(order.totals.subtotal)
    )));
    if order.discount > 0.0 {
        lines.push(ReceiptLine::text(format!(
            "Discount: -{}",
            format_currency(order.discount)
        )));
    }
    lines.push(ReceiptLine::text(format!(
        "GST: {}",
        format_currency(order.totals.tax)
    )));
    lines.push(ReceiptLine {
        kind: ReceiptLineKind::Total,
        value: format!("TOTAL: {}", format_currency(order.totals.total)),
    });

    lines
}

/// Label for a line on the kitchen display: quantity, name, and the
/// selected modifier names in parentheses
pub fn kitchen_item_label(item: &OrderItem) -> String {
    if item.modifiers.is_empty() {
        return format!("{} x {}", item.quantity, item.name);
    }
    let modifier_names: Vec<&str> = item
        .modifiers
        .iter()
        .map(|modifier| modifier.name.as_str())
        .collect();
    format!(
        "{} x {} ({})",
        item.quantity,
        item.name,
        modifier_names.join(", ")
    )
}
