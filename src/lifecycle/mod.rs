//! Process-level plumbing around a session.
//!
//! - [`setup_tracing`] - logging
//! - [`AppConfig`] - environment configuration and menu selection
//! - [`InterruptWatch`] - signal observation, reported at exit

pub mod config;
pub mod signal;
pub mod tracing;

pub use config::*;
pub use signal::*;
pub use self::tracing::*;
