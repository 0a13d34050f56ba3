//! Engine errors
//!
//! All variants are local, recoverable-by-caller conditions; the core
//! never panics on bad input. A failed totals computation returns no
//! partial result. `InvalidConfiguration` is the one case where callers
//! are expected to degrade to safe defaults rather than reject the order
//! (a broken settings store must never prevent taking payment).

use thiserror::Error;

/// Order computation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A line's quantity is not a positive integer
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),

    /// A line references a product or modifier the catalog cannot resolve
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// Settings-integrity fault (negative tax rate, non-positive default
    /// prep minutes)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type OrderResult<T> = Result<T, OrderError>;
