//! Program text parsing.
//!
//! Program text is a sequence of decimal integers, optionally negative, separated by
//! any delimiter byte other than digits, `-` and carriage return (commas and newlines
//! by convention). The loader trusts well-formed input and performs no validation.

use nom::IResult;
use nom::bytes::complete::{take, take_till};
use nom::combinator::map;
use nom::multi::fold_many0;
use nom::sequence::terminated;
use crate::{Program, Word};

/// Parses program text into a program image.
///
/// A numeral at the very end of the input with no trailing delimiter is silently
/// dropped; callers must ensure program text ends with a delimiter, typically a
/// trailing newline.
pub fn parse(source: &[ u8 ]) -> Program {
    let parsed: IResult<&[ u8 ], Vec<Word>> = fold_many0(numeral, Vec::new, |mut code, value| {
        if let Some(value) = value {
            code.push(value);
        }
        code
    })(source);
    match parsed {
        Ok((_, code)) => Program::from(code),
        Err(_) => unreachable!("Numeral parser cannot fail"),
    }
}

/// Parses one numeral and its trailing delimiter. Yields None for tokens that contain
/// no numeral characters at all (e.g. between consecutive delimiters).
fn numeral(input: &[ u8 ]) -> IResult<&[ u8 ], Option<Word>> {
    map(terminated(take_till(is_delimiter), take(1usize)), accumulate)(input)
}

/// Accumulates the decimal value of a token. A `-` anywhere in the token sets a pending
/// negation, carriage returns are skipped, a lone `-` yields a negated zero.
fn accumulate(token: &[ u8 ]) -> Option<Word> {
    let mut value: Word = 0;
    let mut negative = false;
    let mut empty = true;
    for &byte in token {
        if byte.is_ascii_digit() {
            value = 10 * value + (byte - b'0') as Word;
            empty = false;
        } else if byte == b'-' {
            negative = true;
            empty = false;
        }
        // remaining possibility is '\r', which is ignored
    }
    if empty {
        None
    } else {
        Some(if negative { -value } else { value })
    }
}

/// Returns whether the byte separates numerals. Digits and `-` belong to the numeral
/// being accumulated, carriage returns are ignored entirely.
fn is_delimiter(byte: u8) -> bool {
    !byte.is_ascii_digit() && byte != b'-' && byte != b'\r'
}
