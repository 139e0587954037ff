//! Diagnostics on stderr.
//!
//! Single-file mode writes Markdown to stdout, so log lines always go to
//! stderr and carry neither timestamps nor targets.

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogLevel};

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from(level).into())
}

/// Install the process-wide subscriber for `config`.
///
/// Only the first call in a process takes effect.
pub fn init_logging(config: &CliConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config.log_level))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
    if installed.is_err() {
        debug!("a log subscriber is already installed");
    }
}
