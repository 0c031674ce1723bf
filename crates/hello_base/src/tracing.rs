use crate::{HelloError, HelloResult};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// Output goes to stderr so stdout only ever carries program output.
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> HelloResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            Box::new(HelloError::message(format!(
                "failed to install tracing subscriber: {err}"
            )))
        })
}
