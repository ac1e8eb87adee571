use std::{
    fs,
    io::{Write, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{cli::controller::ControllerArgs, prelude::*, render::Format, report::Report};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub controller: ControllerArgs,

    /// Number of days to report on.
    #[clap(
        long = "days",
        env = "REPORT_DAYS",
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub days: u32,

    /// Report file path, the report is printed to stdout when omitted.
    #[clap(long = "output-path", env = "REPORT_OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    #[clap(long = "format", env = "REPORT_FORMAT", value_enum, default_value_t)]
    pub format: Format,
}

impl ReportArgs {
    #[instrument(skip_all, fields(days = self.days, format = ?self.format))]
    pub fn run(&self) -> Result {
        let client = self.controller.new_client()?;
        let report = Report::try_build(&client, self.days).context("failed to build the report")?;
        let document = report.render(&self.format)?;
        match &self.output_path {
            Some(path) => {
                fs::write(path, &document)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                info!(path = %path.display(), n_bytes = document.len(), "saved");
            }
            None => {
                stdout().write_all(&document).context("failed to print the report")?;
            }
        }
        Ok(())
    }
}
