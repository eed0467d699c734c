use crate::{
    actuator::{Actuator, ChannelSet},
    command::{self, Command},
    ranging::{InitEvent, RangingAdapter, RangingDevice, SensorState},
    readln::{self, readln},
    reply::{self, Reply},
};
use embedded_hal::delay::DelayNs;
use heapless::String;

/// Number of characters in the input line buffer.
pub const LINE_CAPACITY: usize = 64;

/// Command loop of the robot.
///
/// The controller owns the actuator, the ranging sensor and the delay used
/// for blocking waits. Each call to [Controller::next_reply] handles one line
/// of input to completion before returning.
///
/// # Type Parameters
///
/// - `C`: motor channels
/// - `S`: ranging sensor
/// - `D`: delay
pub struct Controller<C, S, D> {
    actuator: Actuator<C>,
    ranging: RangingAdapter<S>,
    delay: D,
    line: String<LINE_CAPACITY>,
}
impl<C: ChannelSet, S: RangingDevice, D: DelayNs> Controller<C, S, D> {
    /// Brings up the robot.
    ///
    /// Every motor channel is stopped first. The ranging sensor is then
    /// initialized, which may take a few seconds if it does not respond.
    /// Failing to initialize the sensor does not stop the robot from booting.
    ///
    /// # Parameters
    ///
    /// - `channels`: Motor channels.
    /// - `sensor`: Ranging sensor.
    /// - `delay`: Used for all blocking waits.
    /// - `on_event`: Receives progress of sensor initialization.
    pub fn boot<F>(channels: C, sensor: S, mut delay: D, on_event: F) -> Self
    where
        F: FnMut(InitEvent),
    {
        let actuator = Actuator::new(channels);
        let ranging = RangingAdapter::initialize(sensor, &mut delay, on_event);
        Self {
            actuator,
            ranging,
            delay,
            line: String::new(),
        }
    }

    /// Returns the state of the ranging sensor.
    pub fn sensor_state(&self) -> SensorState {
        self.ranging.state()
    }

    /// Reads one line of input, and handles it.
    ///
    /// # Parameters
    ///
    /// - `read_byte`: Blocks until the next input byte is available.
    pub fn next_reply(&mut self, read_byte: impl FnMut() -> u8) -> Reply {
        match readln(read_byte, &mut self.line) {
            Err(readln::Error::BufferOverflow) => {
                Reply::Error(reply::Error::LineTooLong)
            }
            Ok(()) => {
                let parsed = Command::parse(self.line.as_str());
                self.respond(parsed)
            }
        }
    }

    /// Handles one line of input, which should not include the newline.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.respond(Command::parse(line))
    }

    /// Executes a command.
    ///
    /// Actions block for their whole duration and reply with nothing.
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Act { action, duration } => {
                self.actuator.perform(action, duration, &mut self.delay);
                Reply::Silent
            }
            Command::Distance => Reply::from(self.ranging.measure_once()),
        }
    }

    fn respond(&mut self, parsed: Result<Command, command::Error>) -> Reply {
        match parsed {
            Ok(command) => self.execute(command),
            Err(error) => Reply::Error(error.into()),
        }
    }
}
