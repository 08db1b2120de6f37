//! The `utilkit` command-line tool

use std::io::Write;

use clap::Parser;
use tracing::{debug, error};

use crate::args::Args;

mod args;
mod commands;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] data_encoding::DecodeError),

    #[error("{0}")]
    Time(#[from] utilkit_time::TimeError),

    #[error("{0}")]
    Crypto(#[from] utilkit_crypto::CryptoError),

    #[error("{0}")]
    Http(#[from] utilkit_http::HttpError),

    #[error("server returned status {0}: {1}")]
    Status(u16, String),
}

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    let output = commands::run(&args.command).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(&output).and_then(|()| stdout.flush()) {
        error!("writing output: {e}");
        std::process::exit(1);
    }
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}
