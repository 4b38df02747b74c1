//! # progressive-client
//!
//! Application layer of the Progressive workout tracker: the workout
//! repository, the metrics engine behind the dashboard and progress views,
//! profile and session services, and display formatting.

pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod profile;
pub mod repository;
pub mod session;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use state::AppState;

/// Install the global `tracing` subscriber.  `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("progressive_client=debug,progressive_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
