use crate::actuator::{Direction, Power};
use ufmt_macros::uDebug;

/// One motor channel: a direction output and a power output.
pub trait Channel {
    /// Sets the direction output, then applies power.
    ///
    /// # Parameters
    ///
    /// - `direction`: Direction in which to drive the channel.
    /// - `power`: Power to apply.
    fn drive(&mut self, direction: Direction, power: Power);

    /// Removes power from the channel.
    ///
    /// The direction output is left as it is.
    fn stop(&mut self);
}

/// Identifies one of the four channels of the robot.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum ChannelId {
    /// Left wheel of the base.
    BaseLeft,
    /// Right wheel of the base.
    BaseRight,
    /// Claw opening and closing.
    ClawGrip,
    /// Claw raising and lowering.
    ClawLift,
}
impl ChannelId {
    /// All channels.
    pub const ALL: [ChannelId; 4] = [
        ChannelId::BaseLeft,
        ChannelId::BaseRight,
        ChannelId::ClawGrip,
        ChannelId::ClawLift,
    ];
}

/// A set of channels which can be looked up by [ChannelId].
pub trait ChannelSet {
    /// Returns the channel with the given id.
    fn channel(&mut self, id: ChannelId) -> &mut dyn Channel;
}

/// The four channels of the robot.
///
/// # Type Parameters
///
/// - `BL`: base-left channel
/// - `BR`: base-right channel
/// - `CG`: claw-grip channel
/// - `CL`: claw-lift channel
pub struct Channels<BL, BR, CG, CL> {
    pub base_left: BL,
    pub base_right: BR,
    pub claw_grip: CG,
    pub claw_lift: CL,
}

impl<BL, BR, CG, CL> ChannelSet for Channels<BL, BR, CG, CL>
where
    BL: Channel,
    BR: Channel,
    CG: Channel,
    CL: Channel,
{
    fn channel(&mut self, id: ChannelId) -> &mut dyn Channel {
        match id {
            ChannelId::BaseLeft => &mut self.base_left,
            ChannelId::BaseRight => &mut self.base_right,
            ChannelId::ClawGrip => &mut self.claw_grip,
            ChannelId::ClawLift => &mut self.claw_lift,
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::actuator::direction::test::direction;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    /// Something that happened to a [TestChannel].
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub enum ChannelEvent {
        Drive {
            channel: ChannelId,
            direction: Direction,
            power: Power,
        },
        Stop {
            channel: ChannelId,
        },
    }
    impl ChannelEvent {
        /// Returns the channel to which the event happened.
        pub fn channel(&self) -> ChannelId {
            match *self {
                ChannelEvent::Drive { channel, .. } => channel,
                ChannelEvent::Stop { channel } => channel,
            }
        }
    }

    /// Log of channel events, shared between several channels.
    #[derive(Clone, Default)]
    pub struct ChannelLog {
        events: Arc<Mutex<Vec<ChannelEvent>>>,
    }
    impl ChannelLog {
        /// Returns a copy of all events so far.
        pub fn events(&self) -> Vec<ChannelEvent> {
            self.events.lock().unwrap().clone()
        }

        /// Forgets all events so far.
        pub fn clear(&self) {
            self.events.lock().unwrap().clear();
        }

        /// Returns the power that was last applied to a channel.
        ///
        /// A channel which was never touched is reported as having no power.
        pub fn power(&self, channel: ChannelId) -> Power {
            self.events()
                .iter()
                .rev()
                .find(|event| event.channel() == channel)
                .map(|event| match *event {
                    ChannelEvent::Drive { power, .. } => power,
                    ChannelEvent::Stop { .. } => Power::OFF,
                })
                .unwrap_or(Power::OFF)
        }

        fn push(&self, event: ChannelEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Channel to use for testing purposes.
    ///
    /// Everything done to the channel is appended to a [ChannelLog].
    pub struct TestChannel {
        id: ChannelId,
        log: ChannelLog,
    }
    impl TestChannel {
        /// Creates a new test channel.
        pub fn new(id: ChannelId, log: ChannelLog) -> Self {
            Self { id, log }
        }
    }
    impl Channel for TestChannel {
        fn drive(&mut self, direction: Direction, power: Power) {
            self.log.push(ChannelEvent::Drive {
                channel: self.id,
                direction,
                power,
            });
        }

        fn stop(&mut self) {
            self.log.push(ChannelEvent::Stop { channel: self.id });
        }
    }

    /// The four channels of the robot, all for testing purposes.
    pub type TestChannels =
        Channels<TestChannel, TestChannel, TestChannel, TestChannel>;

    /// Creates four test channels sharing one log.
    pub fn test_channels() -> (TestChannels, ChannelLog) {
        let log = ChannelLog::default();
        let channels = Channels {
            base_left: TestChannel::new(ChannelId::BaseLeft, log.clone()),
            base_right: TestChannel::new(ChannelId::BaseRight, log.clone()),
            claw_grip: TestChannel::new(ChannelId::ClawGrip, log.clone()),
            claw_lift: TestChannel::new(ChannelId::ClawLift, log.clone()),
        };
        (channels, log)
    }

    #[test]
    fn test_channel_lookup() {
        let (mut channels, log) = test_channels();
        for id in ChannelId::ALL {
            channels.channel(id).drive(Direction::Forward, Power::new(7));
        }
        let touched: Vec<ChannelId> =
            log.events().iter().map(ChannelEvent::channel).collect();
        assert_eq!(ChannelId::ALL.to_vec(), touched);
    }

    #[test]
    fn test_log_power() {
        let (mut channels, log) = test_channels();
        assert_eq!(Power::OFF, log.power(ChannelId::ClawLift));
        channels.claw_lift.drive(Direction::Reverse, Power::FULL);
        assert_eq!(Power::FULL, log.power(ChannelId::ClawLift));
        channels.claw_lift.stop();
        assert_eq!(Power::OFF, log.power(ChannelId::ClawLift));
    }

    proptest! {
        #[test]
        fn test_drive_is_logged_against_its_channel(
            index in 0usize..4,
            dir in direction(),
            duty in any::<u8>()
        ) {
            let (mut channels, log) = test_channels();
            let id = ChannelId::ALL[index];
            channels.channel(id).drive(dir, Power::new(duty));
            assert_eq!(
                vec![ChannelEvent::Drive {
                    channel: id,
                    direction: dir,
                    power: Power::new(duty),
                }],
                log.events()
            );
        }
    }
}
