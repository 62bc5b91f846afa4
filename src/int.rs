//! Two's-complement signed 256-bit integer type.

//	Sign bookkeeping only ever adds or subtracts one, or negates a magnitude
//	that has already been range-checked, and those steps use the explicit
//	wrapping forms of the unsigned type.
#![allow(clippy::arithmetic_side_effects, reason = "Handled by the unsigned wrapping forms")]
#![allow(clippy::indexing_slicing,        reason = "Limb arrays have a fixed size")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ConversionError, ErrorKind, ParseError},
	uint::U256,
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, LowerHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// Bit 255 alone, i.e. `2^255`, the magnitude of [`I256::MIN`].
const SIGN_BIT: U256 = U256::from_limbs([0, 0, 0, 1 << 63]);



//		Structs

//		I256
/// A 256-bit signed integer.
///
/// The value is a single [`U256`] interpreted as two's complement, so bit 255
/// is the sign and there is no separate sign field. The range is `-2^255`
/// to `2^255 - 1`.
///
/// # Negation
///
/// Negation is bitwise NOT plus one. As with all two's-complement types, the
/// most negative value has no positive counterpart, so [`Neg`] on
/// [`I256::MIN`] gives [`I256::MIN`] back. Use
/// [`checked_neg()`](I256::checked_neg()) to detect this. The magnitude
/// returned by [`abs()`](I256::abs()) is a [`U256`] for the same reason.
///
/// # Division
///
/// Three division families are provided, all built on the unsigned division
/// engine plus sign bookkeeping, and all panicking on a zero divisor:
///
///   1. Truncated: [`Div`] and [`Rem`]. The quotient rounds toward zero and
///      the remainder takes the sign of the dividend.
///   2. Floored: [`quo()`](I256::quo()), paired with
///      [`modulo()`](I256::modulo()). The quotient rounds toward negative
///      infinity.
///   3. Euclidean: [`div_euclid()`](I256::div_euclid()) and
///      [`rem_euclid()`](I256::rem_euclid()). The remainder is always in
///      `0..|divisor|`.
///
/// The remainder paired with the floored quotient is the Euclidean one, so
/// [`modulo()`](I256::modulo()) and [`rem_euclid()`](I256::rem_euclid())
/// are identical.
///
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct I256(U256);

//󰭅		I256
impl I256 {
	//		Public constants
	/// Number of bits used for storage.
	pub const BITS:      u32  = 256;

	/// The value `0`.
	pub const ZERO:      Self = Self(U256::ZERO);

	/// The value `1`.
	pub const ONE:       Self = Self(U256::ONE);

	/// The value `-1`.
	pub const MINUS_ONE: Self = Self(U256::MAX);

	/// The largest value, `2^255 - 1`.
	pub const MAX:       Self = Self(U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, (1 << 63) - 1]));

	/// The smallest value, `-2^255`.
	pub const MIN:       Self = Self(SIGN_BIT);

	//		Constructors

	//		from_i64
	/// Creates an [`I256`] from an [`i64`], sign-extending it.
	#[expect(clippy::cast_sign_loss, reason = "Two's-complement reinterpretation")]
	#[must_use]
	pub const fn from_i64(value: i64) -> Self {
		let fill = if value < 0 { u64::MAX } else { 0 };
		Self(U256::from_limbs([value as u64, fill, fill, fill]))
	}

	//		from_raw
	/// Creates an [`I256`] from its two's-complement bits.
	///
	/// # Parameters
	///
	/// * `raw` - The bits to interpret as two's complement.
	///
	#[must_use]
	pub const fn from_raw(raw: U256) -> Self {
		Self(raw)
	}

	//		Public methods

	//		abs
	/// The magnitude of the value.
	///
	/// This is a [`U256`], because the magnitude of [`I256::MIN`] is `2^255`,
	/// which does not fit in an [`I256`].
	///
	#[must_use]
	pub const fn abs(&self) -> U256 {
		if self.is_negative() {
			U256::ZERO.wrapping_sub(self.0)
		} else {
			self.0
		}
	}

	//		as_raw
	/// The two's-complement bits of the value.
	#[must_use]
	pub const fn as_raw(&self) -> &U256 {
		&self.0
	}

	//		checked_add
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning [`None`] if the result is outside the
	/// signed range.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn checked_add(self, rhs: Self) -> Option<Self> {
		match self.overflowing_add(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_div
	/// Checked truncated division.
	///
	/// Returns [`None`] if `rhs` is zero. As with [`Div`], `MIN / -1` wraps to
	/// [`I256::MIN`].
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem_truncated(rhs).0)
	}

	//		checked_mul
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning [`None`] if the result is outside the
	/// signed range.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_neg
	/// Checked negation, returning [`None`] for [`I256::MIN`].
	#[must_use]
	pub const fn checked_neg(self) -> Option<Self> {
		if self.is_min() { None } else { Some(self.wrapping_neg()) }
	}

	//		checked_rem
	/// Checked truncated remainder, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem_truncated(rhs).1)
	}

	//		checked_sub
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning [`None`] if the result is outside the
	/// signed range.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.overflowing_sub(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		div_euclid
	/// Euclidean division.
	///
	/// The quotient is chosen so that the matching
	/// [`rem_euclid()`](I256::rem_euclid()) is never negative. This is the
	/// truncated quotient, moved one step away from zero in the direction of
	/// the divisor's sign whenever the truncated remainder is negative.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn div_euclid(self, rhs: Self) -> Self {
		let (quot, rem) = self.div_rem_truncated(rhs);
		if !rem.is_negative() {
			quot
		} else if rhs.is_positive() {
			quot.wrapping_sub(Self::ONE)
		} else {
			quot.wrapping_add(Self::ONE)
		}
	}

	//		from_dec_str
	/// Parses a decimal string with an optional leading `-` or `+`.
	///
	/// Leading zeros are accepted. The magnitude may be up to `2^255` when
	/// negative, and up to `2^255 - 1` otherwise.
	///
	/// # Parameters
	///
	/// * `s` - The decimal string to parse.
	///
	/// # Errors
	///
	/// Returns [`ErrorKind::EmptyString`] if there are no digits,
	/// [`ErrorKind::Syntax`] for a non-digit character (including a second
	/// sign), and [`ErrorKind::Big256Range`] if the value is outside the signed
	/// range.
	///
	pub fn from_dec_str(s: &str) -> Result<Self, ParseError> {
		const FUNC: &str = "from_dec_str";

		let (negative, digits) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None       => (false, s.strip_prefix('+').unwrap_or(s)),
		};
		if digits.starts_with(['+', '-']) {
			return Err(ParseError::new(FUNC, s, ErrorKind::Syntax));
		}

		let magnitude = U256::from_dec_str(digits).map_err(|err| ParseError::new(FUNC, s, err.kind()))?;
		let in_range  = if negative { magnitude <= SIGN_BIT } else { magnitude < SIGN_BIT };
		if !in_range {
			return Err(ParseError::new(FUNC, s, ErrorKind::Big256Range));
		}

		Ok(Self::with_sign(negative, magnitude))
	}

	//		from_json
	/// Deserialises a JSON string into an [`I256`].
	///
	/// A quoted string holds decimal with an optional sign. An unquoted numeral
	/// is read as signed decimal text, so it is not limited to the range of a
	/// JSON number.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		let trimmed = json.trim();
		if trimmed.starts_with('"') {
			serde_json::from_str(trimmed)
		} else {
			//	Unquoted numerals are not limited to the 64-bit range
			Self::from_dec_str(trimmed).map_err(JsonError::custom)
		}
	}

	//		into_raw
	/// Consumes the value, returning its two's-complement bits.
	#[must_use]
	pub const fn into_raw(self) -> U256 {
		self.0
	}

	//		is_negative
	/// Determines if the value is negative, i.e. bit 255 is set.
	#[must_use]
	pub const fn is_negative(&self) -> bool {
		self.0.bit(255)
	}

	//		is_positive
	/// Determines if the value is strictly positive.
	#[must_use]
	pub const fn is_positive(&self) -> bool {
		!self.is_negative() && !self.0.is_zero()
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	//		modulo
	/// The remainder paired with [`quo()`](I256::quo()).
	///
	/// This is the Euclidean remainder, and so is identical to
	/// [`rem_euclid()`](I256::rem_euclid()).
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn modulo(self, rhs: Self) -> Self {
		self.rem_euclid(rhs)
	}

	//		overflowing_add
	/// Overflowing addition.
	///
	/// Returns the result modulo `2^256` and whether it left the signed range,
	/// which happens only when both operands have the same sign and the result
	/// does not.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let result = Self(self.0.wrapping_add(rhs.0));
		let sign   = self.is_negative();
		(result, sign == rhs.is_negative() && sign != result.is_negative())
	}

	//		overflowing_mul
	/// Overflowing multiplication.
	///
	/// Multiplies the magnitudes, then checks the product against the signed
	/// range for the sign of the result: up to `2^255` when negative, and below
	/// `2^255` otherwise.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let negative           = self.is_negative() != rhs.is_negative();
		let (magnitude, carry) = self.abs().overflowing_mul(rhs.abs());
		let in_range           = if negative { magnitude <= SIGN_BIT } else { magnitude < SIGN_BIT };
		(Self::with_sign(negative, magnitude), carry || !in_range)
	}

	//		overflowing_sub
	/// Overflowing subtraction.
	///
	/// Returns the result modulo `2^256` and whether it left the signed range,
	/// which happens only when the operands have different signs and the
	/// result's sign differs from `self`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let result = Self(self.0.wrapping_sub(rhs.0));
		let sign   = self.is_negative();
		(result, sign != rhs.is_negative() && sign != result.is_negative())
	}

	//		overflowing_add_u256
	/// Overflowing addition of an unsigned value.
	///
	/// # Parameters
	///
	/// * `rhs` - The unsigned value to add to `self`.
	///
	#[must_use]
	pub const fn overflowing_add_u256(self, rhs: U256) -> (Self, bool) {
		let (result, carry) = self.0.overflowing_add(rhs);
		let result_negative = result.bit(255);
		let overflow        = if self.is_negative() {
			carry && result_negative
		} else {
			carry || result_negative
		};
		(Self(result), overflow)
	}

	//		overflowing_sub_u256
	/// Overflowing subtraction of an unsigned value.
	///
	/// # Parameters
	///
	/// * `rhs` - The unsigned value to subtract from `self`.
	///
	#[must_use]
	pub const fn overflowing_sub_u256(self, rhs: U256) -> (Self, bool) {
		let (result, borrow) = self.0.overflowing_sub(rhs);
		let result_negative  = result.bit(255);
		let overflow         = if self.is_negative() {
			borrow || !result_negative
		} else {
			borrow && !result_negative
		};
		(Self(result), overflow)
	}

	//		add_u256
	/// Adds an unsigned value.
	///
	/// # Parameters
	///
	/// * `rhs` - The unsigned value to add to `self`.
	///
	/// # Panics
	///
	/// Panics if the result is outside the signed range.
	///
	#[must_use]
	pub const fn add_u256(self, rhs: U256) -> Self {
		let (result, overflow) = self.overflowing_add_u256(rhs);
		assert!(!overflow, "Attempt to add overflowed");
		result
	}

	//		quo
	/// Floored division.
	///
	/// The quotient rounds toward negative infinity: when the operands have
	/// different signs and the division is inexact, the magnitude of the
	/// quotient is one more than for truncated division.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn quo(self, rhs: Self) -> Self {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let negative    = self.is_negative() != rhs.is_negative();
		let (quot, rem) = self.abs().div_rem(rhs.abs());
		let quot        = if negative && !rem.is_zero() { quot.wrapping_add(U256::ONE) } else { quot };
		Self::with_sign(negative, quot)
	}

	//		rem_euclid
	/// Euclidean remainder, always in `0..|rhs|`.
	///
	/// This is the truncated remainder, moved up by `|rhs|` when negative.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn rem_euclid(self, rhs: Self) -> Self {
		let rem = self.div_rem_truncated(rhs).1;
		if !rem.is_negative() {
			rem
		} else if rhs.is_positive() {
			rem.wrapping_add(rhs)
		} else {
			rem.wrapping_sub(rhs)
		}
	}

	//		sign
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	#[must_use]
	pub const fn sign(&self) -> i32 {
		if self.is_negative() {
			-1
		} else if self.0.is_zero() {
			0
		} else {
			1
		}
	}

	//		sub_u256
	/// Subtracts an unsigned value.
	///
	/// # Parameters
	///
	/// * `rhs` - The unsigned value to subtract from `self`.
	///
	/// # Panics
	///
	/// Panics if the result is outside the signed range.
	///
	#[must_use]
	pub const fn sub_u256(self, rhs: U256) -> Self {
		let (result, overflow) = self.overflowing_sub_u256(rhs);
		assert!(!overflow, "Attempt to subtract underflowed");
		result
	}

	//		to_i64
	/// Converts the value to an [`i64`].
	///
	/// # Panics
	///
	/// Panics if the value is outside the [`i64`] range.
	///
	#[expect(clippy::cast_possible_wrap, reason = "Range is checked first")]
	#[must_use]
	pub const fn to_i64(&self) -> i64 {
		let limbs = self.0.as_limbs();
		let fill  = if (limbs[0] as i64) < 0 { u64::MAX } else { 0 };
		assert!(limbs[1] == fill && limbs[2] == fill && limbs[3] == fill, "Value does not fit in i64");
		limbs[0] as i64
	}

	//		to_json
	/// Serialises the value to a JSON string.
	///
	/// # Errors
	///
	/// Serialisation of this type cannot fail, but the signature follows
	/// [`serde_json`].
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_u256
	/// Converts the value to a [`U256`].
	///
	/// # Panics
	///
	/// Panics if the value is negative.
	///
	#[must_use]
	pub const fn to_u256(&self) -> U256 {
		assert!(!self.is_negative(), "Value is negative");
		self.0
	}

	//		to_u64
	/// Converts the value to a [`u64`].
	///
	/// # Panics
	///
	/// Panics if the value is negative or does not fit in a [`u64`].
	///
	#[must_use]
	pub const fn to_u64(&self) -> u64 {
		assert!(!self.is_negative() && self.0.is_u64(), "Value does not fit in u64");
		self.0.low_u64()
	}

	//		wrapping_add
	/// Wrapping addition, i.e. `self + rhs` modulo `2^256`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn wrapping_add(self, rhs: Self) -> Self {
		Self(self.0.wrapping_add(rhs.0))
	}

	//		wrapping_mul
	/// Wrapping multiplication, i.e. the low 256 bits of `self * rhs`.
	///
	/// Two's-complement multiplication modulo `2^256` is the same operation as
	/// unsigned multiplication, so this does not need the magnitudes.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub const fn wrapping_mul(self, rhs: Self) -> Self {
		Self(self.0.wrapping_mul(rhs.0))
	}

	//		wrapping_neg
	/// Wrapping negation, computed as `0 - self`. [`I256::MIN`] negates to
	/// itself.
	#[must_use]
	pub const fn wrapping_neg(self) -> Self {
		Self(U256::ZERO.wrapping_sub(self.0))
	}

	//		wrapping_sub
	/// Wrapping subtraction, i.e. `self - rhs` modulo `2^256`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn wrapping_sub(self, rhs: Self) -> Self {
		Self(self.0.wrapping_sub(rhs.0))
	}

	//		Private methods

	//		div_rem_truncated
	/// Truncated quotient and remainder.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	fn div_rem_truncated(self, rhs: Self) -> (Self, Self) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let dividend_negative = self.is_negative();
		let (quot, rem)       = self.abs().div_rem(rhs.abs());
		(
			Self::with_sign(dividend_negative != rhs.is_negative(), quot),
			Self::with_sign(dividend_negative, rem),
		)
	}

	//		is_min
	/// Determines if the value is [`I256::MIN`].
	const fn is_min(&self) -> bool {
		let limbs = self.0.as_limbs();
		limbs[0] == 0 && limbs[1] == 0 && limbs[2] == 0 && limbs[3] == 1 << 63
	}

	//		with_sign
	/// Applies a sign to a magnitude, wrapping modulo `2^256`.
	const fn with_sign(negative: bool, magnitude: U256) -> Self {
		if negative {
			Self(U256::ZERO.wrapping_sub(magnitude))
		} else {
			Self(magnitude)
		}
	}
}

//󰭅		Add
impl Add for I256 {
	type Output = Self;

	//		add
	#[expect(clippy::expect_used, reason = "Overflow is a contract violation")]
	fn add(self, rhs: Self) -> Self::Output {
		self.checked_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign
impl AddAssign for I256 {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd
impl BitAnd for I256 {
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(self.0 & rhs.0)
	}
}

//󰭅		BitAndAssign
impl BitAndAssign for I256 {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		self.0 &= rhs.0;
	}
}

//󰭅		BitOr
impl BitOr for I256 {
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(self.0 | rhs.0)
	}
}

//󰭅		BitOrAssign
impl BitOrAssign for I256 {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}

//󰭅		BitXor
impl BitXor for I256 {
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

//󰭅		BitXorAssign
impl BitXorAssign for I256 {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		self.0 ^= rhs.0;
	}
}

//󰭅		Debug
impl Debug for I256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "I256({self})")?;

		//	For alternate formatting (#), also show the two's-complement limbs
		if f.alternate() {
			let limbs = self.0.as_limbs();
			write!(f, " [0x{:016x}, 0x{:016x}, 0x{:016x}, 0x{:016x}]", limbs[0], limbs[1], limbs[2], limbs[3])?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for I256 {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			deserializer.deserialize_any(I256Visitor)
		} else {
			deserializer.deserialize_bytes(I256Visitor)
		}
	}
}

//󰭅		Display
impl Display for I256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.abs().to_string())
	}
}

//󰭅		Div
impl Div for I256 {
	type Output = Self;

	//		div
	/// Truncated division.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	fn div(self, rhs: Self) -> Self::Output {
		self.div_rem_truncated(rhs).0
	}
}

//󰭅		DivAssign
impl DivAssign for I256 {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		From: i8 -> I256
impl From<i8> for I256 {
	//		from
	fn from(v: i8) -> Self {
		Self::from_i64(i64::from(v))
	}
}

//󰭅		From: i16 -> I256
impl From<i16> for I256 {
	//		from
	fn from(v: i16) -> Self {
		Self::from_i64(i64::from(v))
	}
}

//󰭅		From: i32 -> I256
impl From<i32> for I256 {
	//		from
	fn from(v: i32) -> Self {
		Self::from_i64(i64::from(v))
	}
}

//󰭅		From: i64 -> I256
impl From<i64> for I256 {
	//		from
	fn from(v: i64) -> Self {
		Self::from_i64(v)
	}
}

//󰭅		From: i128 -> I256
impl From<i128> for I256 {
	//		from
	#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Splitting into limbs")]
	fn from(v: i128) -> Self {
		let fill = if v < 0 { u64::MAX } else { 0 };
		Self(U256::from_limbs([v as u64, (v >> 64) as u64, fill, fill]))
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for I256 {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2                 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			Type::INT4                 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			Type::INT8                 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			Type::TEXT | Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			_                          => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for I256: {ty}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr
impl FromStr for I256 {
	type Err = ParseError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_dec_str(s)
	}
}

//󰭅		LowerHex
impl LowerHex for I256 {
	//		fmt
	/// Formats the two's-complement bits, as the native signed types do.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.0, f)
	}
}

//󰭅		Mul
impl Mul for I256 {
	type Output = Self;

	//		mul
	#[expect(clippy::expect_used, reason = "Overflow is a contract violation")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.checked_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign
impl MulAssign for I256 {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl Neg for I256 {
	type Output = Self;

	//		neg
	/// Two's-complement negation. [`I256::MIN`] negates to itself.
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not
impl Not for I256 {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		Self(!self.0)
	}
}

//󰭅		Ord
impl Ord for I256 {
	//		cmp
	/// Flipping the sign bit maps the signed order onto the unsigned one.
	fn cmp(&self, other: &Self) -> Ordering {
		(self.0 ^ SIGN_BIT).cmp(&(other.0 ^ SIGN_BIT))
	}
}

//󰭅		PartialOrd
impl PartialOrd for I256 {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for I256 {
	//		product
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

//󰭅		Rem
impl Rem for I256 {
	type Output = Self;

	//		rem
	/// Truncated remainder, with the sign of the dividend.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	fn rem(self, rhs: Self) -> Self::Output {
		self.div_rem_truncated(rhs).1
	}
}

//󰭅		RemAssign
impl RemAssign for I256 {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize
impl Serialize for I256 {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_str(&self.to_string())
		} else {
			serializer.serialize_bytes(&self.0.to_le_bytes())
		}
	}
}

//󰭅		Shl
impl Shl<u32> for I256 {
	type Output = Self;

	//		shl
	/// Logical left shift. Shifts of 256 bits or more give zero.
	fn shl(self, rhs: u32) -> Self::Output {
		Self(self.0.lsh(rhs))
	}
}

//󰭅		ShlAssign
impl ShlAssign<u32> for I256 {
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr
impl Shr<u32> for I256 {
	type Output = Self;

	//		shr
	/// Arithmetic right shift. Shifts of 256 bits or more give `0` or `-1`
	/// depending on the sign.
	fn shr(self, rhs: u32) -> Self::Output {
		Self(self.0.sar(rhs))
	}
}

//󰭅		ShrAssign
impl ShrAssign<u32> for I256 {
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub
impl Sub for I256 {
	type Output = Self;

	//		sub
	#[expect(clippy::expect_used, reason = "Overflow is a contract violation")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract underflowed")
	}
}

//󰭅		SubAssign
impl SubAssign for I256 {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl Sum for I256 {
	//		sum
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

//󰭅		ToSql
impl ToSql for I256 {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT8 => i64::try_from(*self)?.to_sql(ty, out),
			_          => self.to_string().to_sql(ty, out),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT8 | Type::TEXT | Type::VARCHAR)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: &str -> I256
impl TryFrom<&str> for I256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Ok(value.parse::<Self>()?)
	}
}

//󰭅		TryFrom: String -> I256
impl TryFrom<String> for I256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::try_from(value.as_str())
	}
}

//󰭅		TryFrom: I256 -> i64
impl TryFrom<I256> for i64 {
	type Error = ConversionError;

	//		try_from
	#[expect(clippy::cast_possible_wrap, reason = "Range is checked first")]
	fn try_from(v: I256) -> Result<Self, Self::Error> {
		let limbs = v.0.as_limbs();
		let fill  = if (limbs[0] as Self) < 0 { u64::MAX } else { 0 };
		if limbs[1] == fill && limbs[2] == fill && limbs[3] == fill {
			Ok(limbs[0] as Self)
		} else {
			Err(ConversionError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom: I256 -> u64
impl TryFrom<I256> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: I256) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.0)
	}
}

//󰭅		TryFrom: I256 -> U256
impl TryFrom<I256> for U256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: I256) -> Result<Self, Self::Error> {
		if v.is_negative() {
			Err(ConversionError::ValueIsNegative)
		} else {
			Ok(v.0)
		}
	}
}

//󰭅		TryFrom: U256 -> I256
impl TryFrom<U256> for I256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: U256) -> Result<Self, Self::Error> {
		if v.bit(255) {
			Err(ConversionError::ValueTooLarge)
		} else {
			Ok(Self(v))
		}
	}
}

//󰭅		U256
impl U256 {
	//		add_delta
	/// Adds a signed delta to an unsigned value.
	///
	/// A non-negative delta is added, and a negative one has its magnitude
	/// subtracted.
	///
	/// # Parameters
	///
	/// * `delta` - The signed amount to apply.
	///
	/// # Panics
	///
	/// Panics if the result is above [`U256::MAX`] or below zero.
	///
	#[must_use]
	pub fn add_delta(self, delta: I256) -> Self {
		if delta.is_negative() {
			self - delta.abs()
		} else {
			self + delta.0
		}
	}

	//		checked_add_delta
	/// Checked version of [`add_delta()`](U256::add_delta()), returning
	/// [`None`] if the result is out of range.
	///
	/// # Parameters
	///
	/// * `delta` - The signed amount to apply.
	///
	#[must_use]
	pub const fn checked_add_delta(self, delta: I256) -> Option<Self> {
		match self.overflowing_add_delta(delta) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		overflowing_add_delta
	/// Overflowing version of [`add_delta()`](U256::add_delta()).
	///
	/// Returns the result modulo `2^256`, and whether the addition carried or
	/// the subtraction borrowed.
	///
	/// # Parameters
	///
	/// * `delta` - The signed amount to apply.
	///
	#[must_use]
	pub const fn overflowing_add_delta(self, delta: I256) -> (Self, bool) {
		if delta.is_negative() {
			self.overflowing_sub(delta.abs())
		} else {
			self.overflowing_add(delta.0)
		}
	}

	//		to_i256
	/// Reinterprets the value as an [`I256`].
	///
	/// # Panics
	///
	/// Panics if bit 255 is set, since the value would then be read as
	/// negative.
	///
	#[must_use]
	pub const fn to_i256(&self) -> I256 {
		assert!(!self.bit(255), "Value does not fit in I256");
		I256(*self)
	}
}



//		Visitors

//		I256Visitor
/// A visitor for parsing an [`I256`] from numbers, strings, or bytes.
struct I256Visitor;

//󰭅		Visitor
impl Visitor<'_> for I256Visitor {
	type Value = I256;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a signed 256-bit integer")
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		<[u8; 32]>::try_from(v)
			.map(|bytes| I256(U256::from_le_bytes(bytes)))
			.map_err(|_| E::invalid_length(v.len(), &self))
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(I256::from_i64(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(I256(U256::from_u64(v)))
	}
}
