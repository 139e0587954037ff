//! Command line front end for `gherkin-markdown`.
//!
//! The `g2md` binary converts a single feature file to stdout, or a whole
//! directory tree of feature files into Markdown files:
//!
//! ```text
//! g2md <file> [--ignoretags=<tags>]
//! g2md <srcdir> <destdir> [--ignoretags=<tags>]
//! ```
//!
//! # Configuration
//!
//! - `G2MD_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error),
//!   overridden by `--log-level`. Logs go to stderr.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
