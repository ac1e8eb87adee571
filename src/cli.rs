mod controller;
mod report;

use clap::{Parser, Subcommand};

pub use self::report::ReportArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a water usage report.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_ok() {
        let args = Args::try_parse_from(["h2no"]).unwrap();
        assert!(args.command.is_none());
    }
}
