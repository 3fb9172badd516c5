//! hrank command-line driver.
//!
//! Command handlers return their output as a `String` so that they can be
//! tested without a process; the binary only parses arguments and prints.

pub mod commands;
mod error;
mod options;

pub use error::CliError;
pub use options::{parse_infer_options, InferOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// `HRANK_LOG_TREE=1` selects an indented tree layout, which follows nested
/// unification more easily than flat lines. Both write to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("HRANK_LOG_TREE").is_ok_and(|value| value == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
