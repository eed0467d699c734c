use crate::actuator::{Action, ChannelId, ChannelSet};
use crate::Millis;
use embedded_hal::delay::DelayNs;

/// Drives the channels of the robot.
///
/// An `Actuator` performs one [Action] at a time. Performing an action blocks
/// for its whole duration and always ends with the action's channels stopped.
pub struct Actuator<C> {
    channels: C,
}
impl<C: ChannelSet> Actuator<C> {
    /// Creates a new actuator.
    ///
    /// All channels are stopped, so the robot is idle no matter what state the
    /// outputs were left in.
    ///
    /// # Parameters
    ///
    /// - `channels`: The channels to drive.
    pub fn new(channels: C) -> Self {
        let mut actuator = Self { channels };
        actuator.stop_all();
        actuator
    }

    /// Performs an action.
    ///
    /// This drives every channel of the action, holds for `duration`, then
    /// stops those same channels. Channels not belonging to the action are not
    /// touched.
    ///
    /// # Parameters
    ///
    /// - `action`: The action to perform.
    /// - `duration`: How long to hold power.
    /// - `delay`: Provides the blocking wait.
    pub fn perform<D: DelayNs>(
        &mut self,
        action: Action,
        duration: Millis,
        delay: &mut D,
    ) {
        let drives = action.drives();
        for drive in drives {
            self.channels
                .channel(drive.channel)
                .drive(drive.direction, drive.power);
        }
        delay.delay_ms(duration.get_value());
        for drive in drives {
            self.channels.channel(drive.channel).stop();
        }
    }

    /// Stops every channel.
    pub fn stop_all(&mut self) {
        for id in ChannelId::ALL {
            self.channels.channel(id).stop();
        }
    }
}
