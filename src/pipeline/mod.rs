//! Producer/consumer pipeline feeding one order.
//!
//! # Shape
//!
//! ```text
//!  submit() ──spawn──▶ producer ─┐
//!  submit() ──spawn──▶ producer ─┼─▶ handoff channel ─▶ Kitchen ─▶ OrderAccumulator
//!  submit() ──spawn──▶ producer ─┘                         │
//!                                                          └─▶ ReceiptSink
//! ```
//!
//! - The [`Kitchen`] is spawned before any producer.
//! - Each producer classifies one [`Selection`], hands the resulting item off
//!   and waits for the kitchen's acknowledgement.
//! - [`OrderPipeline::finish`] waits for every producer, then closes the
//!   channel, then waits for the kitchen to drain it. Closing first would drop
//!   in-flight items.
//!
//! Producers race each other, so arrival order is not submission order.

pub mod kitchen;
pub mod sink;

pub use kitchen::*;
pub use sink::*;

use crate::menu::{Category, MenuEntry};
use crate::order::{OrderAccumulator, OrderError, OrderItem};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info, instrument, warn};

// tokio channels need a capacity of at least one; the acknowledgement in
// `Handoff` provides the rendezvous.
const HANDOFF_CAPACITY: usize = 1;

/// A customer's choice as captured by the console: not yet an order item.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub entry: MenuEntry,
    pub quantity: u32,
    /// Only drinks carry refills.
    pub refills: Option<u32>,
}

impl Selection {
    /// A food selection. Food never carries refills.
    pub fn food(entry: MenuEntry, quantity: u32) -> Self {
        Self {
            entry,
            quantity,
            refills: None,
        }
    }

    /// A drink selection with its refill count (zero allowed).
    pub fn drink(entry: MenuEntry, quantity: u32, refills: u32) -> Self {
        Self {
            entry,
            quantity,
            refills: Some(refills),
        }
    }

    /// Picks the order item variant for this selection.
    pub fn classify(self) -> Result<OrderItem, OrderError> {
        if self.quantity < 1 {
            return Err(OrderError::InvalidQuantity {
                name: self.entry.name,
                quantity: self.quantity,
            });
        }
        match (self.entry.category, self.refills) {
            (Category::Food, None) => Ok(OrderItem::food(self.entry, self.quantity)),
            (Category::Drink, Some(refills)) => {
                Ok(OrderItem::drink(self.entry, self.quantity, refills))
            }
            (Category::Food, Some(_)) => Err(OrderError::InvalidItemType(format!(
                "{} is food but has refills",
                self.entry.name
            ))),
            (Category::Drink, None) => Err(OrderError::InvalidItemType(format!(
                "{} is a drink without refills",
                self.entry.name
            ))),
        }
    }
}

/// Classifies one selection and hands it to the kitchen.
async fn produce(selection: Selection, handoff: mpsc::Sender<Handoff>) -> Result<(), OrderError> {
    let item = selection.classify()?;
    let name = item.name().to_string();
    let (received, ack) = oneshot::channel();

    handoff
        .send(Handoff { item, received })
        .await
        .map_err(|_| OrderError::KitchenClosed(name.clone()))?;
    ack.await.map_err(|_| OrderError::KitchenDropped(name.clone()))?;

    debug!(item = %name, "Handed off");
    Ok(())
}

/// Outcome of a drained pipeline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PipelineReport {
    /// Producers spawned over the pipeline's lifetime.
    pub submitted: usize,
    /// Items the kitchen accepted into the order.
    pub received: usize,
    /// Producers that failed, in completion order.
    pub faults: Vec<OrderError>,
}

impl PipelineReport {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Runs producers and the kitchen for a single order.
///
/// # Lifecycle
///
/// 1. [`start`](Self::start) spawns the kitchen.
/// 2. [`submit`](Self::submit) spawns one producer per selection.
/// 3. [`finish`](Self::finish) waits on the producers (the completion
///    barrier), drops the last sender and awaits the kitchen.
///
/// # Example
///
/// ```ignore
/// let order = Arc::new(OrderAccumulator::new("1"));
/// let mut pipeline = OrderPipeline::start(Arc::clone(&order), Arc::new(MemorySink::new()));
/// pipeline.submit(Selection::food(burger, 2));
/// let report = pipeline.finish().await?;
/// assert_eq!(report.received, 1);
/// ```
pub struct OrderPipeline {
    handoff: mpsc::Sender<Handoff>,
    producers: JoinSet<Result<(), OrderError>>,
    kitchen: JoinHandle<usize>,
    order: Arc<OrderAccumulator>,
    submitted: usize,
}

impl OrderPipeline {
    /// Spawns the kitchen for `order`. Must be called inside a Tokio runtime.
    pub fn start(order: Arc<OrderAccumulator>, sink: Arc<dyn ReceiptSink>) -> Self {
        let (handoff, receiver) = mpsc::channel(HANDOFF_CAPACITY);
        let kitchen = Kitchen::new(receiver, Arc::clone(&order), sink);
        let kitchen = tokio::spawn(kitchen.run());

        Self {
            handoff,
            producers: JoinSet::new(),
            kitchen,
            order,
            submitted: 0,
        }
    }

    /// The order the kitchen fills. Read it only after [`finish`](Self::finish)
    /// for a final total or signature.
    pub fn order(&self) -> &Arc<OrderAccumulator> {
        &self.order
    }

    /// Spawns one producer for `selection`. Returns immediately.
    pub fn submit(&mut self, selection: Selection) {
        debug!(item = %selection.entry.name, quantity = selection.quantity, "Submit");
        self.submitted += 1;
        self.producers.spawn(produce(selection, self.handoff.clone()));
    }

    /// Producers spawned so far.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// Waits for all producers, closes the handoff channel and drains the
    /// kitchen.
    ///
    /// Producer faults do not abort the pipeline; they are logged and
    /// returned in the report. Only a failed kitchen task is an error.
    #[instrument(skip(self), fields(order = %self.order.number()))]
    pub async fn finish(mut self) -> Result<PipelineReport, OrderError> {
        info!(pending = self.producers.len(), "Waiting for producers");

        let mut faults = Vec::new();
        while let Some(joined) = self.producers.join_next().await {
            let fault = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(e) => OrderError::TaskFailed(e.to_string()),
            };
            error!(error = %fault, "Producer failed");
            faults.push(fault);
        }

        // Every producer is done; closing now cannot lose an item.
        drop(self.handoff);

        let received = self.kitchen.await.map_err(|e| {
            error!(error = %e, "Kitchen task failed");
            OrderError::TaskFailed(e.to_string())
        })?;

        if received + faults.len() != self.submitted {
            warn!(submitted = self.submitted, received, faults = faults.len(), "Item count mismatch");
        }
        info!(received, faults = faults.len(), "Pipeline drained");

        Ok(PipelineReport {
            submitted: self.submitted,
            received,
            faults,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn burger() -> MenuEntry {
        MenuEntry::food("Burger", Decimal::new(599, 2))
    }

    fn pepsi() -> MenuEntry {
        MenuEntry::drink("Pepsi", Decimal::new(299, 2))
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Selection::food(burger(), 2).classify(),
            Ok(OrderItem::food(burger(), 2))
        );
        assert_eq!(
            Selection::drink(pepsi(), 1, 3).classify(),
            Ok(OrderItem::drink(pepsi(), 1, 3))
        );
    }

    #[test]
    fn test_classify_rejects_mismatched_selections() {
        let food_with_refills = Selection {
            entry: burger(),
            quantity: 1,
            refills: Some(1),
        };
        assert!(matches!(
            food_with_refills.classify(),
            Err(OrderError::InvalidItemType(_))
        ));

        let drink_without_refills = Selection {
            entry: pepsi(),
            quantity: 1,
            refills: None,
        };
        assert!(matches!(
            drink_without_refills.classify(),
            Err(OrderError::InvalidItemType(_))
        ));

        assert_eq!(
            Selection::food(burger(), 0).classify(),
            Err(OrderError::InvalidQuantity {
                name: "Burger".into(),
                quantity: 0
            })
        );
    }

    #[tokio::test]
    async fn test_produce_fails_when_kitchen_is_gone() {
        let (handoff, receiver) = mpsc::channel(HANDOFF_CAPACITY);
        drop(receiver);

        let result = produce(Selection::food(burger(), 1), handoff).await;
        assert_eq!(result, Err(OrderError::KitchenClosed("Burger".into())));
    }

    #[tokio::test]
    async fn test_produce_waits_for_acknowledgement() {
        let (handoff, mut receiver) = mpsc::channel(HANDOFF_CAPACITY);
        let producer = tokio::spawn(produce(Selection::drink(pepsi(), 2, 1), handoff));

        let Handoff { item, received } = receiver.recv().await.unwrap();
        assert_eq!(item, OrderItem::drink(pepsi(), 2, 1));
        assert!(!producer.is_finished());

        received.send(()).unwrap();
        assert_eq!(producer.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_produce_reports_dropped_acknowledgement() {
        let (handoff, mut receiver) = mpsc::channel(HANDOFF_CAPACITY);
        let producer = tokio::spawn(produce(Selection::food(burger(), 1), handoff));

        let handoff = receiver.recv().await.unwrap();
        drop(handoff);

        assert_eq!(
            producer.await.unwrap(),
            Err(OrderError::KitchenDropped("Burger".into()))
        );
    }
}
