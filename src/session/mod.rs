//! The interactive ordering session.
//!
//! [`SessionController`] drives the customer through three phases:
//!
//! 1. **Selection** - read a menu key, a quantity and (for drinks) a refill
//!    count until `done`; each valid selection is submitted to the
//!    [`OrderPipeline`] as its own producer.
//! 2. **Drain** - [`OrderPipeline::finish`] waits for every producer and the
//!    kitchen. The order is only read after this returns.
//! 3. **Payment** - read tendered amounts until one covers the total, then
//!    print the change.
//!
//! End of input in any phase ends the session early with
//! [`SessionOutcome::Abandoned`]. The pipeline is drained either way, and its
//! [`PipelineReport`] is returned alongside the outcome in a [`SessionReport`].

pub mod console;
pub mod error;

pub use console::*;
pub use error::*;

use crate::menu::{Category, Menu};
use crate::money::Cents;
use crate::pipeline::{OrderPipeline, PipelineReport, Selection};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The order was completed and paid for.
    Paid {
        signature: String,
        total: Decimal,
        tendered: Decimal,
        change: Decimal,
    },
    /// Input ended before payment.
    Abandoned,
}

/// Everything a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// What the pipeline did: producers spawned, items received, faults.
    pub pipeline: PipelineReport,
}

enum Selecting {
    Done,
    Closed,
}

/// Drives one customer through selection, drain and payment.
///
/// Generic over the input reader and output writer so the same dialogue runs
/// against the terminal in `main` and against byte buffers in tests.
///
/// # Example
///
/// ```ignore
/// let order = Arc::new(OrderAccumulator::new("1"));
/// let pipeline = OrderPipeline::start(order, Arc::new(StdoutSink));
/// let mut session = SessionController::new(Menu::default(), reader, writer);
/// let report = session.run(pipeline).await?;
/// ```
pub struct SessionController<R, W> {
    menu: Menu,
    console: Console<R>,
    output: W,
}

impl<R, W> SessionController<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a controller serving `menu`, reading `reader` and writing prompts to `output`.
    pub fn new(menu: Menu, reader: R, output: W) -> Self {
        Self {
            menu,
            console: Console::new(reader),
            output,
        }
    }

    /// Gives back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    /// Runs one full session against `pipeline`.
    ///
    /// The pipeline is always finished before this returns, even when input
    /// ends during selection.
    #[instrument(skip_all, fields(order = %pipeline.order().number()))]
    pub async fn run(&mut self, mut pipeline: OrderPipeline) -> Result<SessionReport, SessionError> {
        let selecting = self.select_items(&mut pipeline).await?;

        self.say("\nWaiting for order to be processed...\n").await?;
        let order = Arc::clone(pipeline.order());
        let report = pipeline.finish().await?;
        debug!(?report, "Order drained");

        if let Selecting::Closed = selecting {
            info!("Input closed during selection");
            return Ok(SessionReport {
                outcome: SessionOutcome::Abandoned,
                pipeline: report,
            });
        }

        let snapshot = order.snapshot();
        self.say(&format!(
            "\nOrder Completed. Signature: {}\nTotal: ${}\n",
            snapshot.signature,
            Cents(snapshot.total)
        ))
        .await?;

        let outcome = match self.take_payment(snapshot.total).await? {
            Some((tendered, change)) => {
                info!(total = %snapshot.total, %change, "Order paid");
                SessionOutcome::Paid {
                    signature: snapshot.signature,
                    total: snapshot.total,
                    tendered,
                    change,
                }
            }
            None => {
                info!("Input closed during payment");
                SessionOutcome::Abandoned
            }
        };
        Ok(SessionReport {
            outcome,
            pipeline: report,
        })
    }

    async fn show_menu(&mut self) -> std::io::Result<()> {
        let mut listing = String::from("Menu List\n");
        for entry in self.menu.entries() {
            listing.push_str(&format!("{entry}\n"));
        }
        listing.push_str("Enter your choice (type 'done' to complete order): ");
        self.say(&listing).await
    }

    async fn select_items(&mut self, pipeline: &mut OrderPipeline) -> Result<Selecting, SessionError> {
        loop {
            self.show_menu().await?;

            let Some(choice) = self.console.read_line().await? else {
                return Ok(Selecting::Closed);
            };
            if choice.eq_ignore_ascii_case("done") {
                return Ok(Selecting::Done);
            }
            let Some(entry) = self.menu.lookup(&choice).cloned() else {
                debug!(%choice, "Unknown menu key");
                self.say("Invalid choice. Please try again.\n").await?;
                continue;
            };

            self.say("Enter quantity: ").await?;
            let quantity = match self.console.read_parsed::<i64>().await? {
                Reply::Closed => return Ok(Selecting::Closed),
                Reply::Value(n) => u32::try_from(n).ok().filter(|n| *n >= 1),
                Reply::Malformed(text) => {
                    debug!(%text, "Malformed quantity");
                    None
                }
            };
            let Some(quantity) = quantity else {
                self.say("Please enter a valid quantity.\n").await?;
                continue;
            };

            let selection = match entry.category {
                Category::Food => Selection::food(entry, quantity),
                Category::Drink => {
                    self.say("Enter refills: ").await?;
                    let refills = match self.console.read_parsed::<i64>().await? {
                        Reply::Closed => return Ok(Selecting::Closed),
                        Reply::Value(n) => u32::try_from(n).ok(),
                        Reply::Malformed(text) => {
                            debug!(%text, "Malformed refills");
                            None
                        }
                    };
                    let Some(refills) = refills else {
                        self.say("Please enter a valid number of refills.\n").await?;
                        continue;
                    };
                    Selection::drink(entry, quantity, refills)
                }
            };
            pipeline.submit(selection);
        }
    }

    /// Returns `(tendered, change)`, or `None` if input ends first.
    async fn take_payment(&mut self, total: Decimal) -> Result<Option<(Decimal, Decimal)>, SessionError> {
        loop {
            self.say("Enter your amount: ").await?;
            match self.console.read_parsed::<Decimal>().await? {
                Reply::Closed => return Ok(None),
                Reply::Malformed(text) => {
                    debug!(%text, "Malformed amount");
                    self.say("Please enter a valid amount.\n").await?;
                }
                Reply::Value(tendered) if tendered >= total => {
                    let change = tendered - total;
                    self.say(&format!("Change: ${}\n", Cents(change))).await?;
                    return Ok(Some((tendered, change)));
                }
                Reply::Value(tendered) => {
                    debug!(%tendered, %total, "Insufficient amount");
                    self.say("Insufficient amount. Please try again.\n").await?;
                }
            }
        }
    }
}
