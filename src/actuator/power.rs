use ufmt_macros::uDebug;

/// Power applied to a channel, as an 8-bit PWM duty cycle.
#[derive(Debug, uDebug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Power(u8);
impl Power {
    /// No power; the channel is stopped.
    pub const OFF: Power = Power(0);
    /// Full power.
    pub const FULL: Power = Power(u8::MAX);

    /// Creates a new `Power`.
    pub const fn new(duty: u8) -> Self {
        Self(duty)
    }

    /// Returns the duty cycle.
    pub fn get_value(&self) -> u8 {
        self.0
    }
}
