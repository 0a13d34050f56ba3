//! Draft order types
//!
//! The live cart the order-entry workflow mutates before freezing it into
//! a persisted [`Order`](crate::models::Order).

mod draft;

pub use draft::*;
