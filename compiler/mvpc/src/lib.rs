//! Driver for the unification engine.
//!
//! Builds the example program's type trees by hand, runs each
//! unification request, and renders the outcome.

mod program;
mod render;

use std::sync::Once;

pub use program::{check_example, ProgramReport, Step};
pub use render::{Render, RenderOptions};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber based on `RUST_LOG` environment variable.
///
/// Call this early in the driver to enable tracing output.
/// Example: `RUST_LOG=mvp_types=debug mvpc`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
