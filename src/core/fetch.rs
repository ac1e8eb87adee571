use crate::{
    core::event::{RawEvent, StationNames},
    error::ReportError,
};

/// Read-only access to the controller log.
pub trait Fetch {
    fn get_station_names(&self) -> Result<StationNames, ReportError>;

    /// Raw log entries of the last `days` days, boundaries as defined by the controller.
    fn get_logs(&self, days: u32) -> Result<Vec<RawEvent>, ReportError>;
}
