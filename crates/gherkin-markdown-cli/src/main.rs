//! Gherkin to Markdown converter binary.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use gherkin_markdown_cli::cli::{Args, run};
use gherkin_markdown_cli::config::CliConfig;
use gherkin_markdown_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::load(args.log_level) {
        Ok(config) => config,
        Err(e) => {
            report(&eyre::Report::new(e));
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    debug!(version = env!("CARGO_PKG_VERSION"), "starting g2md");

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &eyre::Report) {
    // Nothing sensible remains to be done if stderr is gone.
    let _ = writeln!(io::stderr(), "{error:#}");
}
