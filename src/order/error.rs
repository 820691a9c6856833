//! Error types for the order pipeline.

use thiserror::Error;

/// Faults raised while moving items from producers into the order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The selection does not fit any order item variant.
    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    /// The selection asks for fewer than one item.
    #[error("Invalid quantity for {name}: {quantity}")]
    InvalidQuantity { name: String, quantity: u32 },

    /// The kitchen stopped receiving before the item was handed off.
    #[error("Kitchen closed before receiving {0}")]
    KitchenClosed(String),

    /// The kitchen dropped the handoff without acknowledging it.
    #[error("Kitchen dropped handoff for {0}")]
    KitchenDropped(String),

    /// A pipeline task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}
