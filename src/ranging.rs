mod adapter;
mod device;
mod measurement;
pub mod vl53l0x;

pub use adapter::InitEvent;
pub use adapter::RangingAdapter;
pub use adapter::SensorState;
pub use adapter::INIT_RETRY_DELAY;
pub use adapter::MAX_INIT_ATTEMPTS;
pub use device::RangingDevice;
pub use measurement::DistanceReading;
pub use measurement::RangeStatus;
pub use measurement::RawMeasurement;

#[cfg(test)]
pub use device::test::TestRangingDevice;
