use crate::ranging::RawMeasurement;

/// Abstraction for a time-of-flight ranging sensor.
pub trait RangingDevice {
    /// Error produced when talking to the device fails.
    type Error;

    /// Brings the device up, ready to take measurements.
    ///
    /// This may be called again after it fails.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Performs one blocking measurement.
    ///
    /// Only meaningful after [RangingDevice::begin] has succeeded.
    fn ranging_test(&mut self) -> Result<RawMeasurement, Self::Error>;
}
