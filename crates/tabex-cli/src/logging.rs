//! Log setup for the CLI.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count
/// (none = WARN, one = INFO, more = DEBUG).
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
