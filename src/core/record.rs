use chrono::{DateTime, Local};

use crate::quantity::{flow::LitersPerMinute, volume::Liters};

/// Single station run with its water usage.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageRecord {
    pub station_name: String,
    pub liters: Liters,
    pub liters_per_minute: LitersPerMinute,
    pub duration_seconds: i64,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
}

/// Record value to aggregate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Liters,
    LitersPerMinute,
}

impl Value {
    #[must_use]
    pub const fn of(self, record: &UsageRecord) -> f64 {
        match self {
            Self::Liters => record.liters.0,
            Self::LitersPerMinute => record.liters_per_minute.0,
        }
    }
}
