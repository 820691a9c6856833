//! The accumulating order record shared between the kitchen and the session.

use crate::order::OrderItem;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Separator placed between item metadata strings before encoding.
pub const SIGNATURE_SEPARATOR: &str = " | ";

/// Computes the order signature for a sequence of items.
///
/// Base64 (standard alphabet) of every item's metadata joined by
/// [`SIGNATURE_SEPARATOR`]. An empty sequence yields an empty string.
pub fn compute_signature(items: &[OrderItem]) -> String {
    let joined = items
        .iter()
        .map(OrderItem::metadata)
        .collect::<Vec<_>>()
        .join(SIGNATURE_SEPARATOR);
    STANDARD.encode(joined.as_bytes())
}

fn sum_totals(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::total).sum()
}

#[derive(Debug, Default)]
struct OrderState {
    items: Vec<OrderItem>,
    signature: String,
}

/// A consistent view of an order taken under a single lock acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub number: String,
    pub items: Vec<OrderItem>,
    pub signature: String,
    pub total: Decimal,
}

/// Concurrency-safe collection of the items of one order.
///
/// Items are kept in arrival order. [`add_item`](Self::add_item) is the only
/// way to mutate the sequence; it appends and recomputes the signature under
/// one lock so readers never see the two out of step.
#[derive(Debug)]
pub struct OrderAccumulator {
    number: String,
    state: Mutex<OrderState>,
}

impl OrderAccumulator {
    /// Creates an empty order with a fixed order number.
    ///
    /// # Arguments
    /// * `number` - The order number shown to the customer and attached to logs
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            state: Mutex::new(OrderState::default()),
        }
    }

    // Nothing under the lock panics, so a poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, OrderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The order number given at creation.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Appends `item` and recomputes the signature atomically.
    pub fn add_item(&self, item: OrderItem) {
        let mut state = self.lock();
        state.items.push(item);
        let signature = compute_signature(&state.items);
        state.signature = signature;
        debug!(order = %self.number, size = state.items.len(), "Item added");
    }

    /// Sum of the current line totals.
    pub fn total(&self) -> Decimal {
        sum_totals(&self.lock().items)
    }

    /// The signature as of the last insertion. Always matches
    /// [`compute_signature`] over [`items`](Self::items).
    pub fn signature(&self) -> String {
        self.lock().signature.clone()
    }

    /// Copy of the current items in arrival order.
    pub fn items(&self) -> Vec<OrderItem> {
        self.lock().items.clone()
    }

    /// Number of items received so far.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Reads number, items, signature and total under one lock, so the
    /// four always agree with each other.
    ///
    /// Use this instead of separate getters when the values are shown
    /// together, e.g. in the order summary.
    pub fn snapshot(&self) -> OrderSnapshot {
        let state = self.lock();
        OrderSnapshot {
            number: self.number.clone(),
            items: state.items.clone(),
            signature: state.signature.clone(),
            total: sum_totals(&state.items),
        }
    }
}
