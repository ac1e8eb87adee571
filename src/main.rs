#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod error;
mod prelude;
mod quantity;
mod render;
mod report;

use clap::{CommandFactory, Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();

    let Some(command) = Args::parse().command else {
        Args::command().print_help()?;
        return Ok(());
    };
    info!(version = crate_version!(), "starting…");

    match command {
        Command::Report(args) => {
            args.run()?;
        }
    }

    info!("done!");
    Ok(())
}
