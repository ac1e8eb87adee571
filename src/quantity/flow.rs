use std::ops::Mul;

use chrono::TimeDelta;

use crate::quantity::volume::Liters;

quantity!(LitersPerMinute, "L/min");

impl LitersPerMinute {
    /// Flow sensor calibration: liters per minute reported for each tick per minute.
    pub const PER_FLOW_TICK: f64 = 10.0;

    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn from_flow_ticks(ticks_per_minute: i64) -> Self {
        Self(Self::PER_FLOW_TICK * ticks_per_minute as f64)
    }
}

impl Mul<TimeDelta> for LitersPerMinute {
    type Output = Liters;

    /// Volume pumped at this rate over the whole seconds of `rhs`.
    #[expect(clippy::cast_precision_loss)]
    fn mul(self, rhs: TimeDelta) -> Self::Output {
        Liters(self.0 * rhs.num_seconds() as f64 / 60.0)
    }
}
