//! ponto
//!
//! Interactive terminal front end for the Ponto time clock: punch-in/out with
//! a PIN, admin corrections, day-off adjustments, weekly schedules, and CSV
//! export of the worked-vs-expected balance.

pub mod cli;
pub mod errors;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("ponto=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
