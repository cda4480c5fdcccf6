//! Opt-in structured logging.
//!
//! The widgets trace state transitions (`tracing::debug!`/`trace!`) but
//! install no subscriber themselves. Hosts that want the output call
//! [`setup_logging`] once at startup; [`disable_logging`] silences it again
//! without tearing the subscriber down.

use anyhow::{Context, Result};
use std::io;
use std::sync::OnceLock;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Install a stderr fmt subscriber. The filter honors `RUST_LOG` when set;
/// otherwise `verbose` selects debug- or info-level output for this crate.
///
/// Fails if a global subscriber is already installed.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "filelink=debug"
    } else {
        "filelink=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("logging already initialized")?;

    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

/// Raise the filter to OFF. A no-op if [`setup_logging`] was never called.
pub fn disable_logging() {
    if let Some(handle) = FILTER_HANDLE.get() {
        let _ = handle.modify(|filter| *filter = EnvFilter::new("off"));
    }
}
