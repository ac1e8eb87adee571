use chrono::{Local, TimeDelta, TimeZone};

use crate::{
    core::{
        event::{RawEvent, StationNames},
        record::UsageRecord,
    },
    error::ReportError,
    prelude::*,
    quantity::flow::LitersPerMinute,
};

/// Convert the raw controller log into usage records.
///
/// Ad hoc runs are dropped, the remaining events keep their relative order.
#[instrument(skip_all, fields(n_events = events.len(), n_stations = station_names.len()))]
pub fn normalize(
    events: &[RawEvent],
    station_names: &StationNames,
) -> Result<Vec<UsageRecord>, ReportError> {
    let records = events
        .iter()
        .filter(|event| !event.is_ad_hoc())
        .map(|event| try_normalize_event(event, station_names))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(n_records = records.len(), n_ad_hoc = events.len() - records.len(), "normalized");
    Ok(records)
}

fn try_normalize_event(
    event: &RawEvent,
    station_names: &StationNames,
) -> Result<UsageRecord, ReportError> {
    let station_name =
        station_names.get(event.station_index).ok_or(ReportError::InvalidStationIndex {
            index: event.station_index,
            n_stations: station_names.len(),
        })?;
    if event.duration_seconds < 0 {
        return Err(ReportError::InvalidRecord(format!(
            "negative duration of {} seconds in {event:?}",
            event.duration_seconds,
        )));
    }
    let end_time = Local.timestamp_opt(event.end_unix_time, 0).single().ok_or_else(|| {
        ReportError::InvalidRecord(format!("end time is out of range in {event:?}"))
    })?;
    let duration = TimeDelta::try_seconds(event.duration_seconds).ok_or_else(|| {
        ReportError::InvalidRecord(format!("duration is out of range in {event:?}"))
    })?;
    let start_time = end_time.checked_sub_signed(duration).ok_or_else(|| {
        ReportError::InvalidRecord(format!("start time is out of range in {event:?}"))
    })?;
    let liters_per_minute = LitersPerMinute::from_flow_ticks(event.flow_ticks_per_minute);
    Ok(UsageRecord {
        station_name: station_name.to_owned(),
        liters: liters_per_minute * duration,
        liters_per_minute,
        duration_seconds: event.duration_seconds,
        start_time,
        end_time,
    })
}
