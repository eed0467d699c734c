mod parse_duration;

use crate::{Action, Millis};
use parse_duration::parse_duration;
use ufmt_macros::uDebug;
use winnow::{
    ascii::Caseless,
    combinator::{alt, eof},
    token::literal,
    Parser, Result,
};

/// A command parsed from one line of input.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Perform an action, holding it for a duration.
    Act { action: Action, duration: Millis },
    /// Measure the distance with the ranging sensor.
    Distance,
}
impl Command {
    /// Parses a line of input.
    ///
    /// Surrounding ASCII whitespace is ignored. A line without a space must
    /// be the word `distance`, in any case. Otherwise the line is a verb, a
    /// space, and a duration in milliseconds. The verb is case-sensitive. The
    /// duration is parsed leniently and never causes an error; see
    /// [parse_duration].
    pub fn parse(line: &str) -> core::result::Result<Command, Error> {
        let line = line.trim_matches(is_space);
        match line.split_once(' ') {
            None => {
                let mut input = line;
                Self::parse_distance
                    .parse_next(&mut input)
                    .map_err(|_| Error::InvalidFormat)
            }
            Some((verb, remainder)) => {
                let mut input = verb;
                let action = Self::parse_action
                    .parse_next(&mut input)
                    .map_err(|_| Error::UnknownCommand)?;
                let duration = parse_duration(remainder);
                Ok(Command::Act { action, duration })
            }
        }
    }

    fn parse_distance<'a>(input: &mut &'a str) -> Result<Command> {
        (literal(Caseless("distance")), eof)
            .parse_next(input)
            .map(|_| Command::Distance)
    }

    fn parse_action<'a>(input: &mut &'a str) -> Result<Action> {
        let action = alt((
            literal("forward").value(Action::Forward),
            literal("backward").value(Action::Backward),
            literal("left").value(Action::Left),
            literal("right").value(Action::Right),
            literal("catch").value(Action::Catch),
            literal("release").value(Action::Release),
            literal("up").value(Action::Up),
            literal("down").value(Action::Down),
        ))
        .parse_next(input)?;
        eof.parse_next(input)?;
        Ok(action)
    }
}

/// Checks for the ASCII whitespace characters: space, tab, newline,
/// vertical tab, form feed and carriage return.
///
/// Bytes read from the serial port are widened to `char`, so Unicode
/// whitespace such as U+00A0 must not count.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Reasons why a line is not a command.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A single word which is not `distance`.
    InvalidFormat,
    /// A verb which is not one of the actions.
    UnknownCommand,
}
