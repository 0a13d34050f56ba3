//! Draft line and selection types

use serde::{Deserialize, Serialize};

/// Selection mode of a modifier on a draft line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Not selected; zero effect. Never persisted on a line; a selection
    /// reaching this mode is removed instead.
    #[default]
    Default,
    /// Full magnitude, signed by the modifier's polarity
    Added,
    /// Full magnitude, signed by the modifier's polarity
    Removed,
    /// Half magnitude, signed by the modifier's polarity
    Light,
}

/// Association between a draft line and a modifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifierSelection {
    pub modifier_id: i64,
    pub mode: SelectionMode,
}

/// One line of an order being built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftLineItem {
    /// Cart-local instance id
    pub line_id: i64,
    pub product_id: i64,
    pub name: String,
    /// Unit base price in currency units
    pub base_price: f64,
    pub quantity: i32,
    /// Category reference (used by kitchen timing)
    pub category_id: i64,
    #[serde(default)]
    pub modifiers: Vec<ModifierSelection>,
}

/// Discount applied to the pre-tax subtotal at checkout
///
/// The applied amount is clamped so it never exceeds the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountSpec {
    #[default]
    None,
    /// Percentage off, 0–100
    Percent { value: f64 },
    /// Flat currency amount off
    Flat { amount: f64 },
}

/// Order draft handed to the builder at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub items: Vec<DraftLineItem>,
    #[serde(default)]
    pub tax_free: bool,
    #[serde(default)]
    pub discount: DiscountSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
