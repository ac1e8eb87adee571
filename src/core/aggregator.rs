use std::{
    collections::{BTreeMap, BTreeSet},
    iter::successors,
};

use chrono::{Days, NaiveDate};
use itertools::Itertools;

use crate::{
    core::{
        bucket,
        record::{UsageRecord, Value},
        table::Table,
    },
    error::ReportError,
    prelude::*,
};

/// Sum the value per station and local start date.
#[instrument(skip_all, fields(n_records = records.len(), value = ?value))]
pub fn pivot_daily(records: &[UsageRecord], value: Value) -> Result<Table, ReportError> {
    let sums = Sums::try_collect(records, value, |record| Ok(bucket::day(&record.start_time)))?;
    let rows = sums.buckets.iter().copied().collect();
    let table = Table::from_sums(rows, &sums.by_station).sanitized();
    debug!(
        n_rows = table.rows.len(),
        n_columns = table.columns.len(),
        n_dropped = sums.by_station.len() - table.columns.len(),
        "pivoted",
    );
    Ok(table)
}

/// Sum the value per station and Sunday–Saturday week, with the row totals.
///
/// Rows are labelled by the closing Saturday. Weeks without any runs in between still get
/// their (empty) row.
#[instrument(skip_all, fields(n_records = records.len(), value = ?value))]
pub fn pivot_weekly(records: &[UsageRecord], value: Value) -> Result<Table, ReportError> {
    let sums = Sums::try_collect(records, value, |record| {
        bucket::week_ending_saturday(bucket::day(&record.start_time)).ok_or_else(|| {
            ReportError::InvalidRecord(format!("no week bucket for {}", record.start_time))
        })
    })?;
    let rows = match (sums.buckets.first(), sums.buckets.last()) {
        (Some(first), Some(last)) => {
            successors(Some(*first), |week| week.checked_add_days(Days::new(7)))
                .take_while(|week| week <= last)
                .collect()
        }
        _ => Vec::new(),
    };
    let table = Table::from_sums(rows, &sums.by_station).with_total().rounded().sanitized();
    debug!(
        n_rows = table.rows.len(),
        n_columns = table.columns.len(),
        n_stations = sums.by_station.len(),
        "pivoted",
    );
    Ok(table)
}

#[derive(Default)]
struct Sums {
    buckets: BTreeSet<NaiveDate>,
    by_station: BTreeMap<String, BTreeMap<NaiveDate, f64>>,
}

impl Sums {
    /// Records are summed in chronological order, identical keys add up.
    fn try_collect<F>(
        records: &[UsageRecord],
        value: Value,
        bucket_of: F,
    ) -> Result<Self, ReportError>
    where
        F: Fn(&UsageRecord) -> Result<NaiveDate, ReportError>,
    {
        let mut this = Self::default();
        for record in records.iter().sorted_by_key(|record| record.start_time) {
            let bucket = bucket_of(record)?;
            this.buckets.insert(bucket);
            *this
                .by_station
                .entry(record.station_name.clone())
                .or_default()
                .entry(bucket)
                .or_default() += value.of(record);
        }
        Ok(this)
    }
}
