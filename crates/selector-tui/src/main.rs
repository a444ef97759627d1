//! selector binary.
//!
//! # Usage
//!
//! ```bash
//! # Options from the command line
//! selector -t="please input the right title" -o="aaa\nbbb"
//!
//! # Options from a pipe
//! git branch --format='%(refname:short)' | selector -t=branch
//! ```

use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use selector_tui::{
    App, Config, Outcome, Runtime, Signals, TerminalDriver, TerminalMode, exit, logging,
    reader, source,
};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();

    let code = match run(config).await {
        Ok(outcome) => exit::finish(&mut io::stdout().lock(), &outcome).unwrap_or_else(|e| {
            report(&e);
            exit::FAILURE
        }),
        Err(e) => {
            report(e.as_ref());
            exit::FAILURE
        },
    };
    ExitCode::from(code)
}

async fn run(config: Config) -> Result<Outcome, Box<dyn Error>> {
    logging::init(&config.log_level, config.log_file.as_deref())?;

    let options = source::read_options(config.options.as_deref())?;
    tracing::info!(count = options.len(), "options loaded");

    let signals = Signals::new()?;
    let mode = TerminalMode::enter()?;

    let (tx, rx) = mpsc::channel(1);
    reader::spawn(io::stdin(), tx)?;

    let driver = TerminalDriver::new(io::stdout(), rx, signals, mode);
    tracing::debug!(interactive = driver.is_interactive(), "session starting");
    let app = App::new(config.title().to_owned(), options);

    let outcome = Runtime::new(driver, app).run().await?;
    Ok(outcome)
}

fn report(e: &dyn Error) {
    let _ = writeln!(io::stderr().lock(), "error: {e}");
}
