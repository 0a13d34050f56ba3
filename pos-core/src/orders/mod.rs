//! Order computation module
//!
//! - **money**: line totals, order totals, tax, and discount arithmetic
//! - **kitchen**: prep estimates, due times, and auto-complete evaluation
//! - **cart**: draft cart manager used while an order is being built
//! - **builder**: freezes a draft into a persisted order record
//! - **receipt**: renders a frozen order into printable receipt lines
//!
//! # Data flow
//!
//! ```text
//! Catalog → CartManager → OrderDraft → builder ─┬─ money::order_totals
//!                                               └─ kitchen::compute_timing
//!                                                        ↓
//!                                     frozen Order (persisted by caller)
//!                                                        ↓
//!                                kitchen::evaluate(order, now) each poll
//! ```
//!
//! Both engines are pure and stateless; repeated evaluation with the same
//! inputs returns identical results, so uncoordinated polling is safe.

pub mod builder;
pub mod cart;
pub mod error;
pub mod kitchen;
pub mod money;
pub mod receipt;

#[cfg(test)]
mod tests;

// Re-exports
pub use builder::{BuildContext, create_order_from_draft};
pub use cart::CartManager;
pub use error::{OrderError, OrderResult};
pub use kitchen::{KitchenEval, PrepResolution};
pub use money::Cents;
