use crate::{command, DistanceReading};
use ufmt::{uDisplay, uWrite, uwrite, uwriteln, Formatter};
use ufmt_macros::uDebug;

/// What the controller has to say in response to one line of input.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Reply {
    /// Nothing; actions succeed silently.
    Silent,
    /// A measured distance, in millimeters.
    Distance(u16),
    /// The sensor saw nothing within range.
    OutOfRange,
    /// Something went wrong.
    Error(Error),
}
impl Reply {
    /// Writes the reply as one line, or writes nothing for [Reply::Silent].
    pub fn write_to<W: uWrite + ?Sized>(
        &self,
        w: &mut W,
    ) -> Result<(), W::Error> {
        match self {
            Reply::Silent => Ok(()),
            _ => uwriteln!(w, "{}", *self),
        }
    }
}
impl uDisplay for Reply {
    fn fmt<W: uWrite + ?Sized>(
        &self,
        f: &mut Formatter<'_, W>,
    ) -> Result<(), W::Error> {
        match self {
            Reply::Silent => Ok(()),
            Reply::Distance(mm) => uwrite!(f, "Distance (mm): {}", *mm),
            Reply::OutOfRange => f.write_str("Distance: Out of range"),
            Reply::Error(error) => uwrite!(f, "Error: {}", *error),
        }
    }
}
impl From<DistanceReading> for Reply {
    fn from(reading: DistanceReading) -> Self {
        match reading {
            DistanceReading::Millimeters(mm) => Reply::Distance(mm),
            DistanceReading::OutOfRange => Reply::OutOfRange,
            DistanceReading::Unavailable => {
                Reply::Error(Error::SensorNotInitialized)
            }
            DistanceReading::Failed => Reply::Error(Error::MeasurementFailed),
        }
    }
}

/// Errors reported back over the serial link.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A single word which is not `distance`.
    InvalidCommandFormat,
    /// A verb which is not one of the actions.
    UnknownCommand,
    /// Distance was requested but the sensor never came up.
    SensorNotInitialized,
    /// The sensor did not complete a measurement.
    MeasurementFailed,
    /// The input line did not fit in the line buffer.
    LineTooLong,
}
impl uDisplay for Error {
    fn fmt<W: uWrite + ?Sized>(
        &self,
        f: &mut Formatter<'_, W>,
    ) -> Result<(), W::Error> {
        f.write_str(match self {
            Error::InvalidCommandFormat => "Invalid command format.",
            Error::UnknownCommand => "Unknown command received.",
            Error::SensorNotInitialized => "VL53L0X sensor not initialized",
            Error::MeasurementFailed => "VL53L0X measurement failed",
            Error::LineTooLong => "Input line too long.",
        })
    }
}
impl From<command::Error> for Error {
    fn from(error: command::Error) -> Self {
        match error {
            command::Error::InvalidFormat => Error::InvalidCommandFormat,
            command::Error::UnknownCommand => Error::UnknownCommand,
        }
    }
}
