//! Modifier Model

use serde::{Deserialize, Serialize};

/// Price polarity of a modifier
///
/// `Add` charges the price when selected, `Remove` credits it. The stored
/// price is always a non-negative magnitude; polarity decides the sign at
/// application time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierPolarity {
    #[default]
    Add,
    Remove,
}

/// Modifier entity: a named price adjustment attachable to an order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub id: i64,
    pub name: String,
    /// Price magnitude in currency units; non-negative
    pub price: f64,
    pub polarity: ModifierPolarity,
    pub is_active: bool,
}

/// Create modifier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierCreate {
    pub name: String,
    pub price: f64,
    pub polarity: ModifierPolarity,
}

/// Update modifier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub polarity: Option<ModifierPolarity>,
    pub is_active: Option<bool>,
}
