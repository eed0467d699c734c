use crate::ranging::{DistanceReading, RangingDevice};
use crate::Millis;
use embedded_hal::delay::DelayNs;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};
use ufmt_macros::uDebug;

/// Maximum number of attempts to bring the sensor up.
pub const MAX_INIT_ATTEMPTS: u8 = 30;
/// Wait after each failed attempt to bring the sensor up.
pub const INIT_RETRY_DELAY: Millis = Millis::new(100);

/// Lifecycle state of the ranging sensor.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum SensorState {
    /// Bring-up never succeeded. No measurements are taken.
    Uninitialized,
    /// Bring-up succeeded.
    Ready,
}

/// Progress of sensor initialization, reported as it happens.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum InitEvent {
    /// One attempt failed; numbered from 1.
    AttemptFailed { attempt: u8 },
    /// The sensor came up on the given attempt.
    Initialized { attempt: u8 },
    /// Every attempt failed.
    GaveUp { attempts: u8 },
}
impl uDisplay for InitEvent {
    fn fmt<W: uWrite + ?Sized>(
        &self,
        f: &mut Formatter<'_, W>,
    ) -> Result<(), W::Error> {
        match *self {
            InitEvent::AttemptFailed { attempt } => {
                uwrite!(
                    f,
                    "VL53L0X initialization failed (Attempt {})",
                    attempt
                )
            }
            InitEvent::Initialized { .. } => f.write_str("VL53L0X initialized"),
            InitEvent::GaveUp { .. } => {
                f.write_str(
                    "Failed to initialize VL53L0X after multiple attempts",
                )
            }
        }
    }
}

/// Owns a ranging device and its lifecycle.
///
/// The only way to obtain a `RangingAdapter` is [RangingAdapter::initialize],
/// so initialization happens exactly once per adapter. There is no way to
/// retry a failed initialization later.
pub struct RangingAdapter<S> {
    device: S,
    state: SensorState,
}
impl<S: RangingDevice> RangingAdapter<S> {
    /// Brings up a ranging device, retrying on failure.
    ///
    /// Up to [MAX_INIT_ATTEMPTS] attempts are made, waiting [INIT_RETRY_DELAY]
    /// after each one that fails. Running out of attempts is not an error: the
    /// adapter is returned in [SensorState::Uninitialized] and reports every
    /// distance as unavailable.
    ///
    /// # Parameters
    ///
    /// - `device`: The device to bring up.
    /// - `delay`: Provides the wait between attempts.
    /// - `on_event`: Called as initialization progresses.
    pub fn initialize<D, F>(
        mut device: S,
        delay: &mut D,
        mut on_event: F,
    ) -> Self
    where
        D: DelayNs,
        F: FnMut(InitEvent),
    {
        for attempt in 1..=MAX_INIT_ATTEMPTS {
            match device.begin() {
                Ok(()) => {
                    on_event(InitEvent::Initialized { attempt });
                    return Self {
                        device,
                        state: SensorState::Ready,
                    };
                }
                Err(_) => {
                    on_event(InitEvent::AttemptFailed { attempt });
                    delay.delay_ms(INIT_RETRY_DELAY.get_value());
                }
            }
        }

        on_event(InitEvent::GaveUp {
            attempts: MAX_INIT_ATTEMPTS,
        });
        Self {
            device,
            state: SensorState::Uninitialized,
        }
    }

    /// Returns the state of the sensor.
    pub fn state(&self) -> SensorState {
        self.state
    }

    /// Takes a single distance measurement.
    ///
    /// The device is only touched when it is [SensorState::Ready].
    pub fn measure_once(&mut self) -> DistanceReading {
        match self.state {
            SensorState::Uninitialized => DistanceReading::Unavailable,
            SensorState::Ready => match self.device.ranging_test() {
                Ok(measurement) => DistanceReading::from(measurement),
                Err(_) => DistanceReading::Failed,
            },
        }
    }
}
