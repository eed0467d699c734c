use ufmt_macros::uDebug;

/// Range status reported by the sensor with each measurement.
///
/// The values follow the VL53L0X API: `0` is a valid range and other values
/// describe why the range may not be trustworthy.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct RangeStatus(u8);
impl RangeStatus {
    /// Range is valid.
    pub const VALID: RangeStatus = RangeStatus(0);
    /// Sigma (standard deviation) check failed.
    pub const SIGMA_FAIL: RangeStatus = RangeStatus(1);
    /// Signal rate check failed.
    pub const SIGNAL_FAIL: RangeStatus = RangeStatus(2);
    /// Target is below the minimum range.
    pub const MIN_RANGE_FAIL: RangeStatus = RangeStatus(3);
    /// Phase check failed; no target within measurable range.
    pub const OUT_OF_RANGE: RangeStatus = RangeStatus(4);
    /// Hardware failure.
    pub const HARDWARE_FAIL: RangeStatus = RangeStatus(5);
    /// No update.
    pub const NONE: RangeStatus = RangeStatus(255);

    /// Creates a new `RangeStatus`.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Checks if this status means nothing was detected in range.
    pub fn is_out_of_range(&self) -> bool {
        *self == Self::OUT_OF_RANGE
    }
}

/// A measurement exactly as the sensor reports it.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct RawMeasurement {
    pub range_status: RangeStatus,
    pub range_millimeters: u16,
}

/// Outcome of asking for a distance.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum DistanceReading {
    /// Distance to the target, in millimeters.
    Millimeters(u16),
    /// Nothing was detected within measurable range.
    OutOfRange,
    /// The sensor was never initialized, so no measurement was attempted.
    Unavailable,
    /// The measurement could not be completed.
    Failed,
}
impl From<RawMeasurement> for DistanceReading {
    fn from(measurement: RawMeasurement) -> Self {
        if measurement.range_status.is_out_of_range() {
            DistanceReading::OutOfRange
        } else {
            DistanceReading::Millimeters(measurement.range_millimeters)
        }
    }
}
