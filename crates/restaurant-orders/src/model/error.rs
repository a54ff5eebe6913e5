use thiserror::Error;

/// Errors raised by the domain types themselves, before any actor is involved.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// The order type string is not one of `regular`, `bulk` or `express`.
    #[error("Invalid order type: {0}")]
    InvalidOrderType(String),

    /// The status string does not name an order status.
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("Order total does not fit in a price")]
    PriceOverflow,
}
