//! Counter POS computation core
//!
//! Pure pricing and kitchen-timing engines plus the order workflow that
//! freezes their results into persisted records. No I/O: the surrounding
//! application feeds in catalog data, settings, and the current time, and
//! persists what comes back.

pub mod orders;

// Re-exports
pub use orders::{
    BuildContext, CartManager, KitchenEval, OrderError, OrderResult, PrepResolution,
    create_order_from_draft,
};
