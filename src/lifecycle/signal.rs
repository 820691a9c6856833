//! Interrupt observation.
//!
//! Once [`InterruptWatch::spawn`] runs, SIGINT (and SIGTERM on unix) no
//! longer terminate the process. The first signal is remembered and reported
//! when the session ends; in-flight work is never cancelled.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct InterruptWatch {
    received: watch::Receiver<Option<&'static str>>,
    handle: JoinHandle<()>,
}

impl InterruptWatch {
    /// Starts listening. Must be called inside a Tokio runtime.
    pub fn spawn() -> Self {
        let (sender, received) = watch::channel(None);
        let handle = tokio::spawn(async move {
            match wait_for_signal().await {
                Ok(name) => {
                    info!(signal = name, "Interrupt received");
                    let _ = sender.send(Some(name));
                }
                Err(e) => warn!(error = %e, "Failed to listen for signals"),
            }
        });
        Self { received, handle }
    }

    /// Name of the first signal seen so far.
    pub fn received(&self) -> Option<&'static str> {
        *self.received.borrow()
    }

    /// Stops listening and returns the signal seen, if any.
    pub fn stop(self) -> Option<&'static str> {
        self.handle.abort();
        self.received()
    }
}

/// Line printed before the farewell.
///
/// An observed signal is always reported, whether or not the session
/// succeeded. Without one, only a successful session says so.
pub fn exit_message(signal: Option<&str>, session_ok: bool) -> Option<String> {
    match signal {
        Some(name) => Some(format!("Received signal: {name}")),
        None if session_ok => Some("Program completed successfully.".to_string()),
        None => None,
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|_| "interrupt"),
        _ = terminate.recv() => Ok("terminated"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "interrupt")
}
