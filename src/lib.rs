#![cfg_attr(not(test), no_std)]

mod actuator;
mod command;
mod controller;
mod millis;
mod ranging;
mod readln;
mod reply;

pub use actuator::Action;
pub use actuator::Actuator;
pub use actuator::Channel;
pub use actuator::ChannelId;
pub use actuator::ChannelSet;
pub use actuator::Channels;
pub use actuator::Direction;
pub use actuator::Drive;
pub use actuator::Power;
pub use command::Command;
pub use command::Error as CommandError;
pub use controller::Controller;
pub use controller::LINE_CAPACITY;
pub use millis::Millis;
pub use ranging::vl53l0x;
pub use ranging::DistanceReading;
pub use ranging::InitEvent;
pub use ranging::RangeStatus;
pub use ranging::RangingAdapter;
pub use ranging::RangingDevice;
pub use ranging::RawMeasurement;
pub use ranging::SensorState;
pub use ranging::INIT_RETRY_DELAY;
pub use ranging::MAX_INIT_ATTEMPTS;
pub use reply::Error;
pub use reply::Reply;
