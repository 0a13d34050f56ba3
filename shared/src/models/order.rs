//! Order Model
//!
//! The frozen, persisted order record. Totals and kitchen timing are
//! computed exactly once when the order is created and are never
//! recomputed afterward, even if catalog or settings change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::modifier::ModifierPolarity;
use crate::order::SelectionMode;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Completed,
    Cancelled,
    Refunded,
}

/// Kitchen ticket status. `Done` is terminal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenStatus {
    #[default]
    Open,
    Done,
}

/// Modifier frozen onto an order line: catalog snapshot plus the selected mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedModifier {
    pub modifier_id: i64,
    pub name: String,
    /// Price magnitude in currency units; polarity decides the sign
    pub price: f64,
    pub polarity: ModifierPolarity,
    pub mode: SelectionMode,
}

/// Frozen order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub name: String,
    /// Unit base price in currency units
    pub base_price: f64,
    pub quantity: i32,
    /// Category reference (used by kitchen timing)
    pub category_id: i64,
    #[serde(default)]
    pub modifiers: Vec<AppliedModifier>,
    /// Line total in currency units, derived from integer cents
    pub line_total: f64,
}

/// Frozen order totals
///
/// Two-decimal currency values derived from integer-cent arithmetic;
/// `subtotal + tax == total` holds exactly in cents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderTotals {
    /// Post-discount subtotal (ex-tax under inclusive pricing)
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Kitchen timing frozen at order creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitchenTiming {
    /// Per-category estimate, kept for display
    pub estimated_prep_minutes: u32,
    /// Due timestamp driving the countdown; never recomputed
    pub kitchen_due_at: DateTime<Utc>,
}

/// Persisted order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    /// Per-day sequential ticket shown to kitchen staff
    pub ticket_number: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub kitchen_status: KitchenStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen_completed_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
    pub totals: OrderTotals,
    pub tax_free: bool,
    /// Discount actually applied, in currency units
    pub discount: f64,
    pub timing: KitchenTiming,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Order {
    /// Transition the kitchen ticket to `Done`. Terminal: repeated calls
    /// keep the first completion timestamp.
    pub fn mark_kitchen_done(&mut self, at: DateTime<Utc>) {
        if self.kitchen_status == KitchenStatus::Done {
            return;
        }
        self.kitchen_status = KitchenStatus::Done;
        self.kitchen_completed_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn empty_order() -> Order {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        Order {
            order_number: "2025-06-01-0001".to_string(),
            ticket_number: Some(1),
            created_at,
            status: OrderStatus::Open,
            kitchen_status: KitchenStatus::Open,
            kitchen_completed_at: None,
            items: vec![],
            totals: OrderTotals::default(),
            tax_free: false,
            discount: 0.0,
            timing: KitchenTiming {
                estimated_prep_minutes: 7,
                kitchen_due_at: created_at + chrono::Duration::minutes(7),
            },
            note: None,
        }
    }

    #[test]
    fn test_mark_kitchen_done_is_terminal() {
        let mut order = empty_order();
        let first = order.created_at + chrono::Duration::minutes(5);
        let second = order.created_at + chrono::Duration::minutes(9);

        order.mark_kitchen_done(first);
        assert_eq!(order.kitchen_status, KitchenStatus::Done);
        assert_eq!(order.kitchen_completed_at, Some(first));

        order.mark_kitchen_done(second);
        assert_eq!(order.kitchen_completed_at, Some(first));
    }

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Refunded).unwrap();
        assert_eq!(json, "\"REFUNDED\"");
        let json = serde_json::to_string(&KitchenStatus::Done).unwrap();
        assert_eq!(json, "\"DONE\"");
    }
}
