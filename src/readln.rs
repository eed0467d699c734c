use heapless::String;

/// Read an ASCII line, one byte at a time.
///
/// Bytes are read until `\n`, which is not stored. `buffer` is cleared first.
///
/// If the line does not fit in `buffer`, the rest of the line is still read
/// and discarded before returning an error, so that the next call starts at
/// the beginning of the following line.
///
/// # Parameters
///
/// - `read_byte`: Blocks until the next byte is available, and returns it.
/// - `buffer`: Receives the line.
pub fn readln<const N: usize>(
    mut read_byte: impl FnMut() -> u8,
    buffer: &mut String<N>,
) -> Result<(), Error> {
    buffer.clear();
    let mut overflowed = false;
    loop {
        let c = read_byte();
        if c == b'\n' {
            break;
        }
        if !overflowed && buffer.push(c as char).is_err() {
            overflowed = true;
        }
    }

    if overflowed {
        Err(Error::BufferOverflow)
    } else {
        Ok(())
    }
}

/// Errors that might occur when reading.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The line was longer than the buffer.
    BufferOverflow,
}

#[cfg(test)]
pub mod test {
    use super::*;

    /// Returns a byte source which yields `input`, then panics.
    pub fn bytes(input: &str) -> impl FnMut() -> u8 + '_ {
        let mut iter = input.bytes();
        move || iter.next().expect("read past the end of the input!")
    }

    #[test]
    fn test_readln_lines() {
        let mut read_byte = bytes("forward 500\ndistance\n");
        let mut buffer: String<16> = String::new();

        assert_eq!(Ok(()), readln(&mut read_byte, &mut buffer));
        assert_eq!("forward 500", buffer.as_str());
        assert_eq!(Ok(()), readln(&mut read_byte, &mut buffer));
        assert_eq!("distance", buffer.as_str());
    }

    #[test]
    fn test_readln_keeps_carriage_return() {
        let mut buffer: String<16> = String::new();
        assert_eq!(Ok(()), readln(bytes("up 5\r\n"), &mut buffer));
        assert_eq!("up 5\r", buffer.as_str());
    }

    #[test]
    fn test_readln_exactly_full() {
        let mut buffer: String<4> = String::new();
        assert_eq!(Ok(()), readln(bytes("abcd\n"), &mut buffer));
        assert_eq!("abcd", buffer.as_str());
    }

    #[test]
    fn test_readln_overflow_discards_line() {
        let mut read_byte = bytes("abcdefgh\nup 1\n");
        let mut buffer: String<4> = String::new();

        assert_eq!(
            Err(Error::BufferOverflow),
            readln(&mut read_byte, &mut buffer)
        );
        assert_eq!(Ok(()), readln(&mut read_byte, &mut buffer));
        assert_eq!("up 1", buffer.as_str());
    }
}
