//! Shared types for the counter POS core
//!
//! Common types used across the workspace: catalog and settings models,
//! frozen order records, draft/cart types, and small utilities.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
