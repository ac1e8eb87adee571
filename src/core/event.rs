use serde::Deserialize;

/// Raw controller log entry: `[kind, station, duration, end, flow]`.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "Row")]
pub struct RawEvent {
    /// Program that triggered the run.
    pub kind: i64,

    /// Zero-based offset into [`StationNames`].
    pub station_index: i64,

    pub duration_seconds: i64,

    /// Unix timestamp at which the run ended.
    pub end_unix_time: i64,

    pub flow_ticks_per_minute: i64,
}

impl RawEvent {
    /// Program kind of manually triggered runs.
    pub const AD_HOC_KIND: i64 = 99;

    pub const fn new(
        kind: i64,
        station_index: i64,
        duration_seconds: i64,
        end_unix_time: i64,
        flow_ticks_per_minute: i64,
    ) -> Self {
        Self { kind, station_index, duration_seconds, end_unix_time, flow_ticks_per_minute }
    }

    #[must_use]
    pub const fn is_ad_hoc(&self) -> bool {
        self.kind == Self::AD_HOC_KIND
    }
}

/// Controllers without a flow sensor omit the trailing flow element.
#[derive(Deserialize)]
#[serde(untagged)]
enum Row {
    WithFlow(i64, i64, i64, i64, i64),
    WithoutFlow(i64, i64, i64, i64),
}

impl From<Row> for RawEvent {
    fn from(row: Row) -> Self {
        match row {
            Row::WithFlow(kind, station_index, duration_seconds, end_unix_time, flow) => {
                Self::new(kind, station_index, duration_seconds, end_unix_time, flow)
            }
            Row::WithoutFlow(kind, station_index, duration_seconds, end_unix_time) => {
                Self::new(kind, station_index, duration_seconds, end_unix_time, 0)
            }
        }
    }
}

/// Station display names, indexed by station position.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, derive_more::From)]
pub struct StationNames(Vec<String>);

impl StationNames {
    pub fn get(&self, index: i64) -> Option<&str> {
        usize::try_from(index).ok().and_then(|index| self.0.get(index)).map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
