mod action;
mod channel;
mod direction;
mod driver;
mod power;

pub use action::Action;
pub use action::Drive;
pub use channel::Channel;
pub use channel::ChannelId;
pub use channel::ChannelSet;
pub use channel::Channels;
pub use direction::Direction;
pub use driver::Actuator;
pub use power::Power;

#[cfg(test)]
pub use action::test::action as arb_action;
#[cfg(test)]
pub use channel::test::{test_channels, ChannelEvent, ChannelLog, TestChannel};
