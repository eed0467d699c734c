use crate::actuator::{ChannelId, Direction, Power};
use ufmt_macros::uDebug;

/// Actions which the robot can perform for a duration.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Drive the base forward.
    Forward,
    /// Drive the base backward.
    Backward,
    /// Rotate the base counterclockwise.
    Left,
    /// Rotate the base clockwise.
    Right,
    /// Close the claw.
    Catch,
    /// Open the claw.
    Release,
    /// Raise the claw.
    Up,
    /// Lower the claw.
    Down,
}

/// Power for the slower wheel when driving straight.
const BASE_STRAIGHT_SLOW: Power = Power::new(160);
/// Power for the faster wheel when driving straight, and for rotations.
const BASE_FAST: Power = Power::new(200);

static FORWARD: [Drive; 2] = [
    Drive::new(ChannelId::BaseLeft, Direction::Forward, BASE_STRAIGHT_SLOW),
    Drive::new(ChannelId::BaseRight, Direction::Reverse, BASE_FAST),
];
static BACKWARD: [Drive; 2] = [
    Drive::new(ChannelId::BaseLeft, Direction::Reverse, BASE_FAST),
    Drive::new(ChannelId::BaseRight, Direction::Forward, BASE_STRAIGHT_SLOW),
];
static LEFT: [Drive; 2] = [
    Drive::new(ChannelId::BaseLeft, Direction::Forward, BASE_FAST),
    Drive::new(ChannelId::BaseRight, Direction::Forward, BASE_FAST),
];
static RIGHT: [Drive; 2] = [
    Drive::new(ChannelId::BaseLeft, Direction::Reverse, BASE_FAST),
    Drive::new(ChannelId::BaseRight, Direction::Reverse, BASE_FAST),
];
static CATCH: [Drive; 1] =
    [Drive::new(ChannelId::ClawGrip, Direction::Forward, Power::FULL)];
static RELEASE: [Drive; 1] =
    [Drive::new(ChannelId::ClawGrip, Direction::Reverse, Power::FULL)];
static UP: [Drive; 1] =
    [Drive::new(ChannelId::ClawLift, Direction::Reverse, Power::FULL)];
static DOWN: [Drive; 1] =
    [Drive::new(ChannelId::ClawLift, Direction::Forward, Power::FULL)];

impl Action {
    /// All actions.
    pub const ALL: [Action; 8] = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Catch,
        Action::Release,
        Action::Up,
        Action::Down,
    ];

    /// Returns the outputs which perform this action.
    ///
    /// Each channel appears at most once.
    pub fn drives(self) -> &'static [Drive] {
        match self {
            Action::Forward => &FORWARD,
            Action::Backward => &BACKWARD,
            Action::Left => &LEFT,
            Action::Right => &RIGHT,
            Action::Catch => &CATCH,
            Action::Release => &RELEASE,
            Action::Up => &UP,
            Action::Down => &DOWN,
        }
    }
}

/// One channel output of an action.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct Drive {
    pub channel: ChannelId,
    pub direction: Direction,
    pub power: Power,
}
impl Drive {
    const fn new(
        channel: ChannelId,
        direction: Direction,
        power: Power,
    ) -> Self {
        Self {
            channel,
            direction,
            power,
        }
    }
}
