use ufmt_macros::uDebug;

/// Time in milliseconds.
#[derive(Debug, uDebug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct Millis(u32);
impl Millis {
    /// Creates a new `Millis`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Zero milliseconds.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Creates a `Millis` from a signed value, clamping negative values to
    /// zero.
    pub fn clamped(value: i32) -> Self {
        Self(u32::try_from(value).unwrap_or(0))
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }
}
