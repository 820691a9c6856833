//! The consumer half of the pipeline.
//!
//! A single [`Kitchen`] task owns the receiving end of the handoff channel.
//! Every [`Handoff`] is added to the shared order, reported to the
//! [`ReceiptSink`], then acknowledged so the producer can finish.

use crate::order::{OrderAccumulator, OrderItem};
use crate::pipeline::ReceiptSink;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// One item travelling from a producer to the kitchen.
///
/// `received` is completed by the kitchen once the item is in the order,
/// which turns the channel send into a rendezvous.
#[derive(Debug)]
pub struct Handoff {
    pub item: OrderItem,
    pub received: oneshot::Sender<()>,
}

/// The single consumer of the handoff channel.
///
/// # Concurrency Model
///
/// Exactly one `Kitchen` runs per order. It is the only task that calls
/// [`OrderAccumulator::add_item`], so insertions arrive in the order the
/// channel delivers them. The accumulator's own lock still guards readers
/// such as the session or tests taking snapshots mid-run.
///
/// The loop ends when every [`mpsc::Sender`] is dropped and the buffer is
/// empty, never earlier.
pub struct Kitchen {
    receiver: mpsc::Receiver<Handoff>,
    order: Arc<OrderAccumulator>,
    sink: Arc<dyn ReceiptSink>,
}

impl Kitchen {
    /// Creates a kitchen feeding `order` and notifying `sink`. Spawn [`run`](Self::run) to start it.
    pub fn new(
        receiver: mpsc::Receiver<Handoff>,
        order: Arc<OrderAccumulator>,
        sink: Arc<dyn ReceiptSink>,
    ) -> Self {
        Self {
            receiver,
            order,
            sink,
        }
    }

    /// Drains the channel until it is closed and empty.
    ///
    /// Returns the number of items received.
    pub async fn run(mut self) -> usize {
        let order = self.order.number().to_string();
        info!(%order, "Kitchen started");

        let mut received = 0;
        while let Some(Handoff { item, received: ack }) = self.receiver.recv().await {
            debug!(%order, item = %item, "Handoff");
            self.sink.received(&item).await;
            self.order.add_item(item);
            received += 1;
            // The producer may have been aborted; the item is kept either way.
            let _ = ack.send(());
        }

        info!(%order, received, size = self.order.len(), "Kitchen closed");
        received
    }
}
