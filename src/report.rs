use crate::{
    core::{
        aggregator::{pivot_daily, pivot_weekly},
        fetch::Fetch,
        normalizer::normalize,
        record::Value,
        table::Table,
    },
    error::ReportError,
    prelude::*,
    render::Render,
};

/// Water usage summaries of a single report run.
#[must_use]
#[derive(Debug)]
pub struct Report {
    /// Liters per minute, summed per day.
    pub daily_rate: Table,

    /// Liters per day.
    pub daily_volume: Table,

    /// Liters per week, with the weekly totals.
    pub weekly_volume: Table,
}

impl Report {
    /// Fetch the last `days` of the controller log and summarize it.
    #[instrument(skip_all, fields(days = days))]
    pub fn try_build(fetcher: &impl Fetch, days: u32) -> Result<Self, ReportError> {
        let station_names = fetcher.get_station_names()?;
        let events = fetcher.get_logs(days)?;
        let records = normalize(&events, &station_names)?;
        info!(n_events = events.len(), n_records = records.len(), "summarizing…");
        let this = Self {
            daily_rate: pivot_daily(&records, Value::LitersPerMinute)?,
            daily_volume: pivot_daily(&records, Value::Liters)?,
            weekly_volume: pivot_weekly(&records, Value::Liters)?,
        };
        info!(
            n_days = this.daily_volume.rows.len(),
            n_weeks = this.weekly_volume.rows.len(),
            n_stations = this.daily_volume.columns.len(),
            "summarized",
        );
        Ok(this)
    }

    pub fn render(&self, renderer: &impl Render) -> Result<Vec<u8>, ReportError> {
        renderer.render(&self.daily_rate, &self.daily_volume, &self.weekly_volume)
    }
}
