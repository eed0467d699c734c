use ufmt_macros::uDebug;

/// Describes the direction in which a channel is driven.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Forward direction is associated with a "high" direction signal.
    Forward,
    /// Reverse direction is associated with a "low" direction signal.
    Reverse,
}
