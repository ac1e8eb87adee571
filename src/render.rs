mod json;
mod text;

use serde::Serialize;

pub use self::{json::JsonRenderer, text::TextRenderer};
use crate::{core::table::Table, error::ReportError};

/// Turns the summary tables into a document.
pub trait Render {
    fn render(
        &self,
        daily_rate: &Table,
        daily_volume: &Table,
        weekly_volume: &Table,
    ) -> Result<Vec<u8>, ReportError>;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Format {
    /// Plain-text tables.
    #[default]
    Table,

    /// Pretty-printed JSON.
    Json,
}

impl Render for Format {
    fn render(
        &self,
        daily_rate: &Table,
        daily_volume: &Table,
        weekly_volume: &Table,
    ) -> Result<Vec<u8>, ReportError> {
        match self {
            Self::Table => TextRenderer.render(daily_rate, daily_volume, weekly_volume),
            Self::Json => JsonRenderer.render(daily_rate, daily_volume, weekly_volume),
        }
    }
}

#[derive(Serialize)]
struct Section<'a> {
    title: &'static str,
    unit: &'static str,

    #[serde(flatten)]
    table: &'a Table,
}

impl<'a> Section<'a> {
    const fn all(
        daily_rate: &'a Table,
        daily_volume: &'a Table,
        weekly_volume: &'a Table,
    ) -> [Self; 3] {
        [
            Self { title: "Rate over Time", unit: "Liters/Min", table: daily_rate },
            Self { title: "Volume over Time", unit: "Liters", table: daily_volume },
            Self { title: "Weekly Summary", unit: "Liters", table: weekly_volume },
        ]
    }
}
