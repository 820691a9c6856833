//! Where the kitchen reports received items.

use crate::order::OrderItem;
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::io::{self, AsyncWriteExt};

/// Output sink notified once per item the kitchen accepts.
#[async_trait]
pub trait ReceiptSink: Send + Sync + 'static {
    async fn received(&self, item: &OrderItem);
}

/// Renders the notification line written by [`StdoutSink`].
pub fn receipt_line(item: &OrderItem) -> String {
    format!("\n[RESTAURANT] Received order ({})\n", item.metadata())
}

/// Writes notifications to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[async_trait]
impl ReceiptSink for StdoutSink {
    async fn received(&self, item: &OrderItem) {
        let mut stdout = io::stdout();
        let line = receipt_line(item);
        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            tracing::warn!(error = %e, "Failed to write receipt");
            return;
        }
        let _ = stdout.flush().await;
    }
}

/// Collects notifications in memory. Used by tests and quiet runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata strings of every received item, in arrival order.
    pub fn received_items(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ReceiptSink for MemorySink {
    async fn received(&self, item: &OrderItem) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(item.metadata());
    }
}
