//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ErrorKind
/// The category of a text parsing failure.
///
/// Callers are expected to branch on this, rather than on the message text of
/// the surrounding [`ParseError`].
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The input is empty.
	#[error("empty string")]
	EmptyString,

	/// The input contains a character that is not valid for the base.
	#[error("invalid syntax")]
	Syntax,

	/// The number does not fit in the requested native bit size.
	#[error("number out of range")]
	Range,

	/// A hex string does not start with `0x` or `0X`.
	#[error("hex string without 0x prefix")]
	MissingPrefix,

	/// A hex string consists of the `0x` prefix and nothing else.
	#[error("hex string \"0x\"")]
	EmptyNumber,

	/// A hex string has a redundant leading zero digit.
	#[error("hex number with leading zero digits")]
	LeadingZero,

	/// The number needs more than 256 bits.
	#[error("number > 256 bits")]
	Big256Range,

	/// The requested base is not supported.
	#[error("invalid base")]
	InvalidBase,

	/// The requested bit size is not supported.
	#[error("invalid bit size")]
	InvalidBitSize,
}

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming text could not be parsed.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}



//		Structs

//		ParseError
/// A failure to parse text into a number.
///
/// Carries the name of the operation that failed and the offending input, so
/// that the message is self-explanatory, while the [`ErrorKind`] remains
/// available for matching.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{func}: {input}: {kind}")]
pub struct ParseError {
	/// The name of the operation that failed.
	func:  &'static str,

	/// The offending input, or the offending argument for base and bit size
	/// errors.
	input: String,

	/// The category of the failure.
	#[source]
	kind:  ErrorKind,
}

//󰭅		ParseError
impl ParseError {
	//		new
	/// Creates a new [`ParseError`].
	///
	/// # Parameters
	///
	/// * `func`  - The name of the operation that failed.
	/// * `input` - The offending input.
	/// * `kind`  - The category of the failure.
	///
	#[must_use]
	pub fn new(func: &'static str, input: impl Into<String>, kind: ErrorKind) -> Self {
		Self { func, input: input.into(), kind }
	}

	//		func
	/// The name of the operation that failed.
	#[must_use]
	pub const fn func(&self) -> &'static str {
		self.func
	}

	//		input
	/// The offending input.
	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	//		kind
	/// The category of the failure.
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		self.kind
	}
}
