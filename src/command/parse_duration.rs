use super::is_space;
use crate::Millis;
use winnow::ascii::digit0;
use winnow::combinator::{alt, opt};
use winnow::token::{literal, take_while};
use winnow::{Parser, Result};

/// Parses a duration in milliseconds, leniently.
///
/// Parsing never fails. Leading ASCII whitespace is skipped, then an optional
/// sign and as many decimal digits as are present are read; anything after
/// them is ignored. Consequently:
///
/// - `"500"` and `"  500ms"` are 500 ms.
/// - `"abc"` and `""` are 0 ms.
/// - Negative values are clamped to 0 ms.
/// - Values too large for an `i32` saturate.
pub fn parse_duration(input: &str) -> Millis {
    let mut input_ref = input;
    parse_lenient_i32
        .parse_next(&mut input_ref)
        .map(Millis::clamped)
        .unwrap_or(Millis::zero())
}

/// Represents a sign when parsing numbers.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Sign {
    Plus,
    Minus,
}

/// Parse a sign indicator ("+" or "-").
fn parse_sign<'s>(input: &mut &'s str) -> Result<Sign> {
    alt((
        literal("+").map(|_| Sign::Plus),
        literal("-").map(|_| Sign::Minus),
    ))
    .parse_next(input)
}

/// Parse an optionally-signed integer prefix, saturating at the limits of
/// `i32`. No digits at all parses as zero.
fn parse_lenient_i32<'s>(input: &mut &'s str) -> Result<i32> {
    take_while(0.., is_space).parse_next(input)?;
    let sign = opt(parse_sign).parse_next(input)?.unwrap_or(Sign::Plus);
    let digits = digit0.parse_next(input)?;
    let value = digits.bytes().fold(0i32, |acc, digit| {
        let digit = i32::from(digit - b'0');
        match sign {
            Sign::Plus => acc.saturating_mul(10).saturating_add(digit),
            Sign::Minus => acc.saturating_mul(10).saturating_sub(digit),
        }
    });
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_duration_examples() {
        assert_eq!(Millis::new(500), parse_duration("500"));
        assert_eq!(Millis::new(500), parse_duration("  500"));
        assert_eq!(Millis::new(500), parse_duration("+500"));
        assert_eq!(Millis::new(12), parse_duration("12abc"));
        assert_eq!(Millis::new(0), parse_duration("0"));
    }

    #[test]
    fn test_parse_duration_non_numeric() {
        assert_eq!(Millis::zero(), parse_duration("abc"));
        assert_eq!(Millis::zero(), parse_duration(""));
        assert_eq!(Millis::zero(), parse_duration("-"));
        assert_eq!(Millis::zero(), parse_duration("- 5"));
    }

    #[test]
    fn test_parse_duration_negative_clamps() {
        assert_eq!(Millis::zero(), parse_duration("-1"));
        assert_eq!(Millis::zero(), parse_duration("-99999999999999"));
    }

    #[test]
    fn test_parse_duration_skips_only_ascii_whitespace() {
        assert_eq!(Millis::new(7), parse_duration("\t\x0b 7"));
        assert_eq!(Millis::zero(), parse_duration("\u{a0}7"));
    }

    #[test]
    fn test_parse_duration_saturates() {
        assert_eq!(
            Millis::new(i32::MAX as u32),
            parse_duration("99999999999999999999")
        );
    }

    proptest! {
        #[test]
        fn test_parse_duration_non_negative(value in 0..i32::MAX) {
            let parsed = parse_duration(&format!("{}", value));
            assert_eq!(value as u32, parsed.get_value());
        }
    }

    proptest! {
        #[test]
        fn test_parse_lenient_i32_roundtrip(value: i32) {
            let input = format!("{}", value);
            let mut input_ref: &str = &input;
            assert_eq!(Ok(value), parse_lenient_i32.parse_next(&mut input_ref));
            assert!(input_ref.is_empty());
        }
    }
}
