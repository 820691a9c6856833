//! # Restaurant Console
//!
//! > **An interactive ordering counter with a concurrent kitchen.**
//!
//! A customer picks items from the menu; every pick is handed to the kitchen
//! by its own Tokio task, the kitchen accumulates them into one order, and
//! once the customer is done the order total is collected and change given.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Catalog ([`menu`])
//! - **Role**: what can be ordered, at what price, food or drink.
//! - **Key items**: [`Menu`](menu::Menu), [`MenuEntry`](menu::MenuEntry).
//!
//! ### 2. The Order ([`order`])
//! - **Role**: immutable line items and the shared accumulating record.
//! - **Key items**: [`OrderItem`](order::OrderItem),
//!   [`OrderAccumulator`](order::OrderAccumulator).
//!
//! The accumulator is the only owner of the item sequence. Its single
//! mutation, [`add_item`](order::OrderAccumulator::add_item), appends and
//! recomputes the order signature under one lock.
//!
//! ### 3. The Pipeline ([`pipeline`])
//! - **Role**: one producer task per selection, one rendezvous handoff
//!   channel, one kitchen task draining into the order.
//! - **Key items**: [`OrderPipeline`](pipeline::OrderPipeline),
//!   [`Kitchen`](pipeline::Kitchen), [`ReceiptSink`](pipeline::ReceiptSink).
//!
//! Shutdown is always *wait for producers, then close, then drain*.
//!
//! ### 4. The Counter ([`session`])
//! - **Role**: console prompts for selection and payment.
//! - **Key items**: [`SessionController`](session::SessionController).
//!
//! Amounts are shown through [`Cents`](money::Cents), two decimals rounded
//! half away from zero.
//!
//! ### 5. Plumbing ([`lifecycle`])
//! - **Role**: tracing, environment configuration, interrupt reporting.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//!
//! # Custom menu and order number, with logs on stderr
//! RESTAURANT_MENU_FILE=menu.json RESTAURANT_ORDER_NUMBER=12 RUST_LOG=info cargo run
//! ```

pub mod lifecycle;
pub mod menu;
pub mod money;
pub mod order;
pub mod pipeline;
pub mod session;
