//! Bounded native integer parsing.
//!
//! The wide integer types only ever need to parse text in windows that fit a
//! native [`u64`], so this module provides that building block with the same
//! error reporting as the rest of the crate.

//	Every multiplication and addition below is guarded by the cutoff and
//	maximum checks that precede it.
#![allow(clippy::arithmetic_side_effects, reason = "Overflow is checked explicitly")]



//		Modules

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;



//		Packages

use crate::errors::{ErrorKind, ParseError};



//		Enums

//		Seen
/// The class of the last character seen when validating digit separators.
#[derive(Clone, Copy, Eq, PartialEq)]
enum Seen {
	/// Nothing yet.
	Start,

	/// A digit or a base prefix.
	Digit,

	/// An underscore.
	Underscore,

	/// Anything else.
	Other,
}



//		Functions

//		parse_uint
/// Parses an unsigned integer in the given base, bounded to `bit_size` bits.
///
/// A sign is not permitted. When `base` is `0`, the base is inferred from the
/// prefix (`0b` binary, `0o` or a bare leading `0` octal, `0x` hex, otherwise
/// decimal), and underscores are allowed as digit separators, but only
/// between digits or between the prefix and a digit.
///
/// # Parameters
///
/// * `s`        - The text to parse.
/// * `base`     - The base, `2..=36`, or `0` to infer it from the prefix.
/// * `bit_size` - The number of bits the result must fit in, `1..=64`, or `0`
///                for `64`.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyString`] for empty input,
/// [`ErrorKind::InvalidBase`] or [`ErrorKind::InvalidBitSize`] for unsupported
/// arguments (with the argument as the error input),
/// [`ErrorKind::Syntax`] for characters outside the base, and
/// [`ErrorKind::Range`] if the value does not fit in `bit_size` bits.
///
pub fn parse_uint(s: &str, base: u32, bit_size: u32) -> Result<u64, ParseError> {
	const FUNC: &str = "parse_uint";

	if s.is_empty() {
		return Err(ParseError::new(FUNC, s, ErrorKind::EmptyString));
	}

	let inferred = base == 0;
	let (digits, base) = match base {
		2..=36 => (s, base),
		0      => split_prefix(s),
		_      => return Err(ParseError::new(FUNC, base.to_string(), ErrorKind::InvalidBase)),
	};

	let bit_size = match bit_size {
		0      => 64,
		1..=64 => bit_size,
		_      => return Err(ParseError::new(FUNC, bit_size.to_string(), ErrorKind::InvalidBitSize)),
	};

	//	Smallest number such that cutoff * base > u64::MAX
	#[expect(clippy::integer_division, reason = "Intentional")]
	let cutoff  = u64::MAX / u64::from(base) + 1;
	let max_val = u64::MAX >> (64 - bit_size);

	let mut underscores = false;
	let mut n           = 0_u64;

	for c in digits.bytes() {
		let digit = match c {
			b'_' if inferred                  => {
				underscores = true;
				continue;
			},
			b'0'..=b'9'                       => c - b'0',
			_ if lower(c).is_ascii_lowercase() => lower(c) - b'a' + 10,
			_                                 => return Err(ParseError::new(FUNC, s, ErrorKind::Syntax)),
		};

		if u32::from(digit) >= base {
			return Err(ParseError::new(FUNC, s, ErrorKind::Syntax));
		}

		if n >= cutoff {
			return Err(ParseError::new(FUNC, s, ErrorKind::Range));
		}
		n *= u64::from(base);

		match n.checked_add(u64::from(digit)) {
			Some(next) if next <= max_val => n = next,
			_                             => return Err(ParseError::new(FUNC, s, ErrorKind::Range)),
		}
	}

	if underscores && !underscores_ok(s) {
		return Err(ParseError::new(FUNC, s, ErrorKind::Syntax));
	}

	Ok(n)
}

//		lower
/// Folds an ASCII letter to lower case.
///
/// Non-letters may come out as other non-letters, which is fine for range
/// checks against letters.
///
const fn lower(c: u8) -> u8 {
	c | (b'x' - b'X')
}

//		split_prefix
/// Infers the base from the prefix, returning the remaining digits and base.
fn split_prefix(s: &str) -> (&str, u32) {
	match s.as_bytes() {
		[b'0', p, _, ..] if lower(*p) == b'b' => (s.get(2..).unwrap_or_default(), 2),
		[b'0', p, _, ..] if lower(*p) == b'o' => (s.get(2..).unwrap_or_default(), 8),
		[b'0', p, _, ..] if lower(*p) == b'x' => (s.get(2..).unwrap_or_default(), 16),
		[b'0', ..]                            => (s.get(1..).unwrap_or_default(), 8),
		_                                     => (s, 10),
	}
}

//		underscores_ok
/// Determines whether the underscores in `s` are all digit separators.
fn underscores_ok(s: &str) -> bool {
	let mut bytes = s.as_bytes();
	if let [b'-' | b'+', rest @ ..] = bytes {
		bytes = rest;
	}

	let mut seen = Seen::Start;
	let mut hex  = false;
	if let [b'0', p, rest @ ..] = bytes {
		if matches!(lower(*p), b'b' | b'o' | b'x') {
			//	The prefix counts as a digit for separator purposes
			seen  = Seen::Digit;
			hex   = lower(*p) == b'x';
			bytes = rest;
		}
	}

	for &c in bytes {
		if c.is_ascii_digit() || (hex && matches!(lower(c), b'a'..=b'f')) {
			seen = Seen::Digit;
			continue;
		}
		if c == b'_' {
			if seen != Seen::Digit {
				return false;
			}
			seen = Seen::Underscore;
			continue;
		}
		if seen == Seen::Underscore {
			return false;
		}
		seen = Seen::Other;
	}
	seen != Seen::Underscore
}
