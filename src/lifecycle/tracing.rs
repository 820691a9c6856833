//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the binary.
//!
//! Logs go to **stderr** so they never interleave with the prompts and
//! receipts the session writes to stdout. Without `RUST_LOG` only errors
//! are shown, such as a producer that could not classify its selection.
//!
//! ```bash
//! # Pipeline milestones: kitchen start/close, drain summary, payment
//! RUST_LOG=info cargo run
//!
//! # Every submit, handoff and insertion
//! RUST_LOG=debug cargo run
//!
//! # Only the pipeline
//! RUST_LOG=restaurant_console::pipeline=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a two-item order looks like:
//!
//! ```text
//! DEBUG run: Submit item="Burger" quantity=2
//! DEBUG run: Submit item="Pepsi" quantity=1
//! DEBUG Handoff order="1" item=Name: Pepsi, Price: 2.99, Quantity: 1, Refills: 0
//! DEBUG Item added order=1 size=1
//! DEBUG Handed off item="Pepsi"
//! DEBUG Handoff order="1" item=Name: Burger, Price: 5.99, Quantity: 2
//! DEBUG Item added order=1 size=2
//!  INFO run:finish: Pipeline drained received=2 faults=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
