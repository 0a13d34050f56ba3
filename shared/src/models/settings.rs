//! Settings Model
//!
//! Store-level configuration (singleton). Callers read it from wherever
//! they persist it and pass it to the engines as an explicit parameter;
//! nothing in the core looks settings up ambiently.

use serde::{Deserialize, Serialize};

/// Safe prep minutes used when the settings store is unusable
pub const FALLBACK_PREP_MINUTES: u32 = 7;
/// Safe GST rate (percent, tax-exclusive) used when the settings store is unusable
pub const FALLBACK_GST_RATE_PERCENT: f64 = 15.0;
/// Lower bound for the global kitchen prep-minutes knob
pub const MIN_PREP_MINUTES: u32 = 1;
/// Upper bound for the global kitchen prep-minutes knob
pub const MAX_PREP_MINUTES: u32 = 60;

/// Tax configuration for totals computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxConfig {
    /// Bypass tax entirely
    #[serde(default)]
    pub tax_free: bool,
    /// Inclusive arithmetic (prices already contain tax) vs exclusive
    /// (tax added on top, the default for counter sales)
    #[serde(default)]
    pub prices_include_tax: bool,
    /// GST rate in percent (e.g. 15 for 15%)
    pub gst_rate_percent: f64,
}

impl TaxConfig {
    /// Tax-exclusive configuration at the given rate
    pub fn exclusive(gst_rate_percent: f64) -> Self {
        Self {
            tax_free: false,
            prices_include_tax: false,
            gst_rate_percent,
        }
    }

    /// Safe default: 15% exclusive GST
    pub fn fallback() -> Self {
        Self::exclusive(FALLBACK_GST_RATE_PERCENT)
    }
}

/// Per-category prep-time override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPrepTime {
    pub category_id: i64,
    pub minutes: u32,
}

/// Kitchen prep-time configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitchenSettings {
    /// Used when no category override applies; must be positive
    pub default_minutes: u32,
    #[serde(default)]
    pub categories: Vec<CategoryPrepTime>,
}

impl KitchenSettings {
    /// Safe default: 7 minutes, no overrides
    pub fn fallback() -> Self {
        Self {
            default_minutes: FALLBACK_PREP_MINUTES,
            categories: Vec::new(),
        }
    }

    /// Override minutes for a category, if configured
    pub fn category_minutes(&self, category_id: i64) -> Option<u32> {
        self.categories
            .iter()
            .find(|entry| entry.category_id == category_id)
            .map(|entry| entry.minutes)
    }
}

/// Store settings (singleton)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosSettings {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub prices_include_tax: bool,
    pub gst_rate_percent: f64,
    /// Global prep-minutes knob driving kitchen countdowns; clamped to
    /// [`MIN_PREP_MINUTES`]..=[`MAX_PREP_MINUTES`] by [`PosSettings::normalize`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen_prep_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<KitchenSettings>,
    /// Deprecated: older payloads carried the GST rate under this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_percent: Option<f64>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl PosSettings {
    /// Clamp the global prep knob and migrate the legacy rate field
    pub fn normalize(mut self) -> Self {
        if let Some(minutes) = self.kitchen_prep_minutes {
            self.kitchen_prep_minutes = Some(minutes.clamp(MIN_PREP_MINUTES, MAX_PREP_MINUTES));
        }
        if self.gst_rate_percent <= 0.0 {
            if let Some(legacy) = self.tax_rate_percent.take() {
                if legacy > 0.0 {
                    self.gst_rate_percent = legacy;
                }
            }
        }
        self
    }

    /// Tax configuration view (order-level tax_free is decided per order)
    pub fn tax_config(&self) -> TaxConfig {
        TaxConfig {
            tax_free: false,
            prices_include_tax: self.prices_include_tax,
            gst_rate_percent: self.gst_rate_percent,
        }
    }

    /// Safe defaults used when the settings store is unusable
    pub fn fallback() -> Self {
        Self {
            currency: default_currency(),
            prices_include_tax: false,
            gst_rate_percent: FALLBACK_GST_RATE_PERCENT,
            kitchen_prep_minutes: None,
            kitchen: Some(KitchenSettings::fallback()),
            tax_rate_percent: None,
        }
    }
}
