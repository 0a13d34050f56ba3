//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in currency units
    pub price: f64,
    /// Category reference
    pub category_id: i64,
    /// Modifiers offered for this product; empty means every active modifier
    #[serde(default)]
    pub modifier_ids: Vec<i64>,
    /// Per-product prep minutes (informational; kitchen timing resolves
    /// from category overrides and the global knob)
    pub prep_minutes: Option<u32>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    #[serde(default)]
    pub modifier_ids: Vec<i64>,
    pub prep_minutes: Option<u32>,
    pub sort_order: Option<i32>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    pub modifier_ids: Option<Vec<i64>>,
    pub prep_minutes: Option<u32>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
