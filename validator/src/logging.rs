//! Logging setup.
//!
//! Binaries install a global `tracing-subscriber` formatter writing to
//! stderr; library callers that want validation logs routed elsewhere build
//! a [`Dispatch`] with [`logger`] and hand it to
//! [`OntologyValidator::with_logger`](crate::OntologyValidator::with_logger).

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity level: negative is quieter,
/// `0` is warnings and above for dependencies plus info for owlet.
#[must_use]
pub fn filter_directive(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn,owlet_validator=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbosity`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: i8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

/// Builds a logger that writes formatted events to `writer`, without ANSI
/// colors, filtered by `directive`.
pub fn logger<W>(writer: W, directive: &str) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        );
    Dispatch::new(subscriber)
}
