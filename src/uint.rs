//! Fixed-width 256-bit unsigned integer type.

//	These lint checks are unnecessary in this module because:
//	  1. The storage is a fixed array of four limbs, and almost all indexing
//	     uses constant positions.
//	  2. The remaining indices come from loops bounded by that same length.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	Shift amounts and limb positions are derived with plain arithmetic on
//	values that are range-checked first, so the standard library operators are
//	exactly what we want here.
#![allow(clippy::arithmetic_side_effects, reason = "Operands are range-checked beforehand")]
#![allow(clippy::integer_division,        reason = "Used for limb positions only")]



//		Modules

#[cfg(test)]
#[path = "tests/uint.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ConversionError, ErrorKind, ParseError},
	limbs::{self, LIMBS},
	parse::parse_uint,
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, LowerHex, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign},
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

/// Decimal representation of `2^256 - 1`, the largest value.
const MAX_DECIMAL: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Largest number of decimal digits that always fits in a [`u64`].
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// `10^19`, the divisor used when formatting in decimal.
const DECIMAL_CHUNK: U256 = U256::from_u64(10_000_000_000_000_000_000);

/// Powers of `10^19` applied to successive decimal windows, least-significant
/// window first.
const POWERS_OF_TEN: [U256; 5] = [
	U256::ONE,
	U256([10_000_000_000_000_000_000, 0, 0, 0]),
	U256([687_399_551_400_673_280, 5_421_010_862_427_522_170, 0, 0]),
	U256([5_332_261_958_806_667_264, 17_004_971_331_911_604_867, 2_938_735_877_055_718_769, 0]),
	U256([0, 8_607_968_719_199_866_880, 532_749_306_367_912_313, 1_593_091_911_132_452_277]),
];

/// Maximum number of hex digits after the `0x` prefix.
const HEX_DIGITS: usize = 64;

/// Number of hex digits per limb.
const HEX_DIGITS_PER_LIMB: usize = 16;

/// Marker for bytes that are not hex digits in [`NIBBLES`].
const BAD_NIBBLE: u8 = 0xFF;

/// Value of every ASCII hex digit, indexed by byte.
const NIBBLES: [u8; 256] = nibble_table();



//		Structs

//		U256
/// A 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs in little-endian order, so that
/// limb 0 is the least significant and limb 3 the most significant, and the
/// value is `Σ limb[i] · 2^(64i)`. There is no other canonical form: all-zero
/// limbs are `0`, and all-one limbs are `2^256 - 1`.
///
/// # Arithmetic
///
/// Every arithmetic primitive is offered in explicit forms, so that the call
/// site decides what happens at the boundary:
///
///   1. The operator traits ([`Add`], [`Sub`], [`Mul`]) panic on overflow or
///      underflow, regardless of build profile. An out-of-range result is a
///      contract violation, never something to silently wrap.
///   2. The `overflowing_*` methods return the wrapped result along with a
///      flag, and the `checked_*` methods return [`None`].
///   3. The `wrapping_*` methods return the result modulo `2^256`, for callers
///      that have already established the result is in range.
///
/// Division by zero does *not* panic: [`Div`] and [`Rem`] return zero. Callers
/// that need to fail on a zero divisor must check first, or use
/// [`checked_div()`](U256::checked_div()).
///
/// # Text
///
/// Decimal is the canonical text form, both for [`Display`] and for
/// serialisation. Parsing accepts decimal, with an optional `+` and leading
/// zeros, or strict `0x`-prefixed hex.
///
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct U256([u64; LIMBS]);

//󰭅		U256
impl U256 {
	//		Public constants
	/// Number of bits used for storage.
	pub const BITS: u32 = 256;

	/// The value `0`.
	pub const ZERO: Self = Self([0; LIMBS]);

	/// The value `1`.
	pub const ONE:  Self = Self([1, 0, 0, 0]);

	/// The largest value, `2^256 - 1`.
	pub const MAX:  Self = Self([u64::MAX; LIMBS]);

	//		Constructors

	//		from_limbs
	/// Creates a [`U256`] from little-endian limbs.
	#[must_use]
	pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
		Self(limbs)
	}

	//		from_u64
	/// Creates a [`U256`] from a [`u64`].
	#[must_use]
	pub const fn from_u64(value: u64) -> Self {
		Self([value, 0, 0, 0])
	}

	//		one
	/// The value of `1` as a [`U256`].
	#[must_use]
	pub const fn one() -> Self {
		Self::ONE
	}

	//		zero
	/// The value of `0` as a [`U256`].
	#[must_use]
	pub const fn zero() -> Self {
		Self::ZERO
	}

	//		Public methods

	//		as_limbs
	/// Represents the internal value as little-endian limbs.
	#[must_use]
	pub const fn as_limbs(&self) -> &[u64; LIMBS] {
		&self.0
	}

	//		bit
	/// Gets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub const fn bit(&self, pos: u32) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		(self.0[(pos / 64) as usize] >> (pos % 64)) & 1 == 1
	}

	//		bit_len
	/// The number of bits needed to represent the value, i.e. the position of
	/// the highest set bit plus one. Zero needs no bits.
	#[must_use]
	pub const fn bit_len(&self) -> u32 {
		Self::BITS - self.leading_zeros()
	}

	//		checked_add
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
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
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem(rhs).0)
	}

	//		checked_mul
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem(rhs).1)
	}

	//		checked_sub
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning [`None`] if underflow occurred.
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

	//		div_rem
	/// Computes the quotient and remainder of `self / rhs` together.
	///
	/// A zero divisor produces a zero quotient and a zero remainder, rather
	/// than a panic.
	///
	/// In order of applicability:
	///
	///   1. A divisor greater than the dividend gives `(0, self)`.
	///   2. A divisor equal to the dividend gives `(1, 0)`.
	///   3. A dividend that fits in one limb is divided natively.
	///   4. Anything else goes through normalised Knuth division.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn div_rem(self, rhs: Self) -> (Self, Self) {
		if rhs.is_zero() {
			return (Self::ZERO, Self::ZERO);
		}
		match rhs.cmp(&self) {
			Ordering::Greater => return (Self::ZERO, self),
			Ordering::Equal   => return (Self::ONE,  Self::ZERO),
			Ordering::Less    => {},
		}
		if self.is_u64() {
			//	The divisor is smaller than the dividend, so it fits too
			return (Self::from_u64(self.0[0] / rhs.0[0]), Self::from_u64(self.0[0] % rhs.0[0]));
		}

		let mut quot = [0; LIMBS];
		let rem      = limbs::udivrem(&mut quot, &self.0, &rhs.0);
		(Self(quot), Self(rem))
	}

	//		from_be_bytes
	/// Creates a [`U256`] from big-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`U256`] from.
	///
	#[must_use]
	pub fn from_be_bytes(mut bytes: [u8; 32]) -> Self {
		bytes.reverse();
		Self::from_le_bytes(bytes)
	}

	//		from_dec_str
	/// Parses a decimal string.
	///
	/// One leading `+` and any number of leading zeros are accepted. The digits
	/// are processed in windows of up to 19, from the least significant end,
	/// each of which fits in a [`u64`] and is scaled by the matching power of
	/// `10^19` before being accumulated.
	///
	/// # Parameters
	///
	/// * `s` - The decimal string to parse.
	///
	/// # Errors
	///
	/// Returns [`ErrorKind::EmptyString`] if there are no digits,
	/// [`ErrorKind::Syntax`] for a non-digit character, and
	/// [`ErrorKind::Big256Range`] if the value exceeds `2^256 - 1`.
	///
	pub fn from_dec_str(s: &str) -> Result<Self, ParseError> {
		const FUNC: &str = "from_dec_str";

		let unsigned = s.strip_prefix('+').unwrap_or(s);
		let trimmed  = unsigned.trim_start_matches('0');
		let digits   = if trimmed.is_empty() && !unsigned.is_empty() { "0" } else { trimmed };

		if digits.is_empty() {
			return Err(ParseError::new(FUNC, s, ErrorKind::EmptyString));
		}
		if !digits.bytes().all(|b| b.is_ascii_digit()) {
			return Err(ParseError::new(FUNC, s, ErrorKind::Syntax));
		}
		match digits.len().cmp(&MAX_DECIMAL.len()) {
			Ordering::Greater                        => return Err(ParseError::new(FUNC, s, ErrorKind::Big256Range)),
			Ordering::Equal if digits > MAX_DECIMAL  => return Err(ParseError::new(FUNC, s, ErrorKind::Big256Range)),
			Ordering::Equal | Ordering::Less         => {},
		}

		//	All ASCII from here, so byte windows are character windows
		let mut result = Self::ZERO;
		let mut end    = digits.len();
		for (index, power) in POWERS_OF_TEN.iter().enumerate() {
			if end == 0 {
				break;
			}
			let start  = end.saturating_sub(DECIMAL_CHUNK_DIGITS);
			let window = digits.get(start..end).unwrap_or_default();
			let chunk  = Self::from_u64(parse_uint(window, 10, 64).map_err(|err| ParseError::new(FUNC, s, err.kind()))?);
			result     = if index == 0 {
				chunk
			} else {
				chunk.checked_mul(*power)
					.and_then(|scaled| result.checked_add(scaled))
					.ok_or_else(|| ParseError::new(FUNC, s, ErrorKind::Big256Range))?
			};
			end = start;
		}

		Ok(result)
	}

	//		from_hex_str
	/// Parses a `0x`-prefixed hex string.
	///
	/// Parsing is strict: the prefix is mandatory, and a redundant leading zero
	/// digit is rejected rather than skipped, so `"0x0"` is valid but `"0x00"`
	/// is not. Upper- and lower-case digits are both accepted.
	///
	/// # Parameters
	///
	/// * `s` - The hex string to parse.
	///
	/// # Errors
	///
	/// Returns [`ErrorKind::EmptyString`] for empty input,
	/// [`ErrorKind::MissingPrefix`] without `0x` or `0X`,
	/// [`ErrorKind::EmptyNumber`] if nothing follows the prefix,
	/// [`ErrorKind::LeadingZero`] for a redundant leading zero,
	/// [`ErrorKind::Big256Range`] for more than 64 digits, and
	/// [`ErrorKind::Syntax`] for a non-hex character.
	///
	pub fn from_hex_str(s: &str) -> Result<Self, ParseError> {
		const FUNC: &str = "from_hex_str";

		if s.is_empty() {
			return Err(ParseError::new(FUNC, s, ErrorKind::EmptyString));
		}
		let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
			return Err(ParseError::new(FUNC, s, ErrorKind::MissingPrefix));
		};
		if digits.is_empty() {
			return Err(ParseError::new(FUNC, s, ErrorKind::EmptyNumber));
		}
		if digits.len() > 1 && digits.starts_with('0') {
			return Err(ParseError::new(FUNC, s, ErrorKind::LeadingZero));
		}
		if digits.len() > HEX_DIGITS {
			return Err(ParseError::new(FUNC, s, ErrorKind::Big256Range));
		}

		let mut result = [0_u64; LIMBS];
		for (limb, window) in result.iter_mut().zip(digits.as_bytes().rchunks(HEX_DIGITS_PER_LIMB)) {
			for &byte in window {
				let nibble = NIBBLES[byte as usize];
				if nibble == BAD_NIBBLE {
					return Err(ParseError::new(FUNC, s, ErrorKind::Syntax));
				}
				*limb = (*limb << 4) | u64::from(nibble);
			}
		}

		Ok(Self(result))
	}

	//		from_json
	/// Deserialises a JSON string into a [`U256`].
	///
	/// A quoted string may be decimal, or hex with a `0x` prefix. An unquoted numeral is read as
	/// decimal text, so it is not limited to the range of a JSON number.
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

	//		from_le_bytes
	/// Creates a [`U256`] from little-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`U256`] from.
	///
	#[must_use]
	pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
		let mut result = [0_u64; LIMBS];
		for (limb, chunk) in result.iter_mut().zip(bytes.chunks_exact(8)) {
			let mut word = [0_u8; 8];
			word.copy_from_slice(chunk);
			*limb = u64::from_le_bytes(word);
		}
		Self(result)
	}

	//		into_limbs
	/// Consumes the value, returning its little-endian limbs.
	#[must_use]
	pub const fn into_limbs(self) -> [u64; LIMBS] {
		self.0
	}

	//		is_u64
	/// Determines if the value can be represented as a [`u64`].
	#[must_use]
	pub const fn is_u64(&self) -> bool {
		(self.0[1] | self.0[2] | self.0[3]) == 0
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		(self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
	}

	//		leading_zeros
	/// Counts the number of leading zeros in the binary representation.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[must_use]
	pub const fn leading_zeros(&self) -> u32 {
		let mut i = LIMBS;
		while i > 0 {
			i -= 1;
			if self.0[i] != 0 {
				return (LIMBS - 1 - i) as u32 * 64 + self.0[i].leading_zeros();
			}
		}
		Self::BITS
	}

	//		low_u64
	/// The lower 64 bits of the value, discarding the rest.
	#[must_use]
	pub const fn low_u64(&self) -> u64 {
		self.0[0]
	}

	//		lsh
	/// Logical left shift.
	///
	/// Shifts of 256 bits or more clear the value. The shift is performed as a
	/// whole-limb move followed by a single residual shift of less than 64 bits
	/// across adjacent limbs.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to shift by.
	///
	#[must_use]
	pub const fn lsh(self, n: u32) -> Self {
		if n >= Self::BITS {
			return Self::ZERO;
		}
		let x     = self.0;
		let mut z = match n / 64 {
			0 => x,
			1 => [0, x[0], x[1], x[2]],
			2 => [0, 0, x[0], x[1]],
			_ => [0, 0, 0, x[0]],
		};
		let r = n % 64;
		if r != 0 {
			z[3] = (z[3] << r) | (z[2] >> (64 - r));
			z[2] = (z[2] << r) | (z[1] >> (64 - r));
			z[1] = (z[1] << r) | (z[0] >> (64 - r));
			z[0] <<= r;
		}
		Self(z)
	}

	//		overflowing_add
	/// Overflowing addition.
	///
	/// Computes `self + rhs`, returning a tuple of the result modulo `2^256`
	/// and a boolean indicating whether the carry left the top limb.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let (r0, carry) = limbs::add_carry(self.0[0], rhs.0[0], 0);
		let (r1, carry) = limbs::add_carry(self.0[1], rhs.0[1], carry);
		let (r2, carry) = limbs::add_carry(self.0[2], rhs.0[2], carry);
		let (r3, carry) = limbs::add_carry(self.0[3], rhs.0[3], carry);
		(Self([r0, r1, r2, r3]), carry != 0)
	}

	//		overflowing_mul
	/// Overflowing multiplication.
	///
	/// Computes the full 512-bit product, returning the low 256 bits and a
	/// boolean indicating whether any of the high 256 bits are set.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub const fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let p = limbs::mul_full(&self.0, &rhs.0);
		(Self([p[0], p[1], p[2], p[3]]), (p[4] | p[5] | p[6] | p[7]) != 0)
	}

	//		overflowing_sub
	/// Overflowing subtraction.
	///
	/// Computes `self - rhs`, returning a tuple of the result modulo `2^256`
	/// and a boolean indicating whether the borrow left the top limb.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let (r0, borrow) = limbs::sub_borrow(self.0[0], rhs.0[0], 0);
		let (r1, borrow) = limbs::sub_borrow(self.0[1], rhs.0[1], borrow);
		let (r2, borrow) = limbs::sub_borrow(self.0[2], rhs.0[2], borrow);
		let (r3, borrow) = limbs::sub_borrow(self.0[3], rhs.0[3], borrow);
		(Self([r0, r1, r2, r3]), borrow != 0)
	}

	//		rsh
	/// Logical right shift.
	///
	/// Shifts of 256 bits or more clear the value.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to shift by.
	///
	#[must_use]
	pub const fn rsh(self, n: u32) -> Self {
		if n >= Self::BITS {
			return Self::ZERO;
		}
		let x     = self.0;
		let mut z = match n / 64 {
			0 => x,
			1 => [x[1], x[2], x[3], 0],
			2 => [x[2], x[3], 0, 0],
			_ => [x[3], 0, 0, 0],
		};
		let r = n % 64;
		if r != 0 {
			z[0] = (z[0] >> r) | (z[1] << (64 - r));
			z[1] = (z[1] >> r) | (z[2] << (64 - r));
			z[2] = (z[2] >> r) | (z[3] << (64 - r));
			z[3] >>= r;
		}
		Self(z)
	}

	//		sar
	/// Arithmetic (sign-extending) right shift.
	///
	/// Treats bit 255 as a sign bit. When it is clear this is the same as
	/// [`rsh()`](U256::rsh()). When it is set, the vacated high bits are filled
	/// with ones, and shifts of 256 bits or more give all ones.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to shift by.
	///
	#[must_use]
	pub const fn sar(self, n: u32) -> Self {
		if !self.bit(255) {
			return self.rsh(n);
		}
		if n >= Self::BITS {
			return Self::MAX;
		}
		let x     = self.0;
		let fill  = u64::MAX;
		let mut z = match n / 64 {
			0 => x,
			1 => [x[1], x[2], x[3], fill],
			2 => [x[2], x[3], fill, fill],
			_ => [x[3], fill, fill, fill],
		};
		let r = n % 64;
		if r != 0 {
			z[0] = (z[0] >> r) | (z[1] << (64 - r));
			z[1] = (z[1] >> r) | (z[2] << (64 - r));
			z[2] = (z[2] >> r) | (z[3] << (64 - r));
			z[3] = (z[3] >> r) | (fill << (64 - r));
		}
		Self(z)
	}

	//		to_be_bytes
	/// Returns the value as big-endian bytes.
	#[must_use]
	pub fn to_be_bytes(&self) -> [u8; 32] {
		let mut bytes = self.to_le_bytes();
		bytes.reverse();
		bytes
	}

	//		to_hex
	/// Returns the canonical hex form: lowercase, `0x`-prefixed, and without
	/// leading zeros.
	#[must_use]
	pub fn to_hex(&self) -> String {
		format!("{self:#x}")
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

	//		to_le_bytes
	/// Returns the value as little-endian bytes.
	#[must_use]
	pub fn to_le_bytes(&self) -> [u8; 32] {
		let mut bytes = [0_u8; 32];
		for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0) {
			chunk.copy_from_slice(&limb.to_le_bytes());
		}
		bytes
	}

	//		to_u64
	/// Converts the value to a [`u64`].
	///
	/// # Panics
	///
	/// Panics if the value does not fit in a [`u64`]. Use
	/// [`low_u64()`](U256::low_u64()) to truncate instead, or [`TryFrom`] for
	/// a recoverable conversion.
	///
	#[must_use]
	pub const fn to_u64(&self) -> u64 {
		assert!(self.is_u64(), "Value does not fit in u64");
		self.0[0]
	}

	//		widening_mul
	/// Computes the full 512-bit product, returning the low and high halves.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
		let p = limbs::mul_full(&self.0, &rhs.0);
		(Self([p[0], p[1], p[2], p[3]]), Self([p[4], p[5], p[6], p[7]]))
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
		self.overflowing_add(rhs).0
	}

	//		wrapping_mul
	/// Wrapping multiplication, i.e. the low 256 bits of `self * rhs`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub const fn wrapping_mul(self, rhs: Self) -> Self {
		Self(limbs::mul_low(&self.0, &rhs.0))
	}

	//		wrapping_sub
	/// Wrapping subtraction, i.e. `self - rhs` modulo `2^256`.
	///
	/// This never fails, and is meant for callers that have already
	/// established that the result is not negative, or that want two's
	/// complement behaviour.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn wrapping_sub(self, rhs: Self) -> Self {
		self.overflowing_sub(rhs).0
	}

	//		Private methods

	//		to_dec_string
	/// Formats the value in decimal.
	///
	/// Repeatedly divides by `10^19`, so that each remainder is a chunk of up to
	/// 19 digits. All chunks other than the most significant are zero-padded.
	///
	fn to_dec_string(self) -> String {
		if self.is_u64() {
			return self.0[0].to_string();
		}

		let mut chunks    = Vec::with_capacity(POWERS_OF_TEN.len());
		let mut remaining = self;
		while !remaining.is_zero() {
			let (quot, rem) = remaining.div_rem(DECIMAL_CHUNK);
			chunks.push(rem.0[0]);
			remaining       = quot;
		}

		let mut out = String::with_capacity(MAX_DECIMAL.len());
		for (i, chunk) in chunks.iter().rev().enumerate() {
			if i == 0 {
				out.push_str(&chunk.to_string());
			} else {
				out.push_str(&format!("{chunk:0DECIMAL_CHUNK_DIGITS$}"));
			}
		}
		out
	}

	//		to_hex_digits
	/// Formats the value as hex digits, without a prefix or leading zeros.
	fn to_hex_digits(self, upper: bool) -> String {
		let top      = limbs::significant_len(&self.0);
		let mut out  = String::with_capacity(HEX_DIGITS);
		if top == 0 {
			out.push('0');
			return out;
		}
		for i in (0..top).rev() {
			let limb = self.0[i];
			let text = match (i == top - 1, upper) {
				(true,  false) => format!("{limb:x}"),
				(true,  true)  => format!("{limb:X}"),
				(false, false) => format!("{limb:016x}"),
				(false, true)  => format!("{limb:016X}"),
			};
			out.push_str(&text);
		}
		out
	}
}

//󰭅		Add
impl Add for U256 {
	type Output = Self;

	//		add
	#[expect(clippy::expect_used, reason = "Overflow is a contract violation")]
	fn add(self, rhs: Self) -> Self::Output {
		self.checked_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign
impl AddAssign for U256 {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd
impl BitAnd for U256 {
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		Self([self.0[0] & rhs.0[0], self.0[1] & rhs.0[1], self.0[2] & rhs.0[2], self.0[3] & rhs.0[3]])
	}
}

//󰭅		BitAndAssign
impl BitAndAssign for U256 {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr
impl BitOr for U256 {
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		Self([self.0[0] | rhs.0[0], self.0[1] | rhs.0[1], self.0[2] | rhs.0[2], self.0[3] | rhs.0[3]])
	}
}

//󰭅		BitOrAssign
impl BitOrAssign for U256 {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor
impl BitXor for U256 {
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self([self.0[0] ^ rhs.0[0], self.0[1] ^ rhs.0[1], self.0[2] ^ rhs.0[2], self.0[3] ^ rhs.0[3]])
	}
}

//󰭅		BitXorAssign
impl BitXorAssign for U256 {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Debug
impl Debug for U256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "U256({self})")?;

		//	For alternate formatting (#), also show the limbs
		if f.alternate() {
			write!(f, " [")?;
			for (i, limb) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{limb:016x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for U256 {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(U256Visitor)
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(U256Visitor)
		}
	}
}

//󰭅		Display
impl Display for U256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "", &self.to_dec_string())
	}
}

//󰭅		Div
impl Div for U256 {
	type Output = Self;

	//		div
	/// Divides, giving zero for a zero divisor.
	fn div(self, rhs: Self) -> Self::Output {
		self.div_rem(rhs).0
	}
}

//󰭅		DivAssign
impl DivAssign for U256 {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		From: u8 -> U256
impl From<u8> for U256 {
	//		from
	fn from(v: u8) -> Self {
		Self::from_u64(u64::from(v))
	}
}

//󰭅		From: u16 -> U256
impl From<u16> for U256 {
	//		from
	fn from(v: u16) -> Self {
		Self::from_u64(u64::from(v))
	}
}

//󰭅		From: u32 -> U256
impl From<u32> for U256 {
	//		from
	fn from(v: u32) -> Self {
		Self::from_u64(u64::from(v))
	}
}

//󰭅		From: u64 -> U256
impl From<u64> for U256 {
	//		from
	fn from(v: u64) -> Self {
		Self::from_u64(v)
	}
}

//󰭅		From: u128 -> U256
impl From<u128> for U256 {
	//		from
	#[expect(clippy::cast_possible_truncation, reason = "Splitting into limbs")]
	fn from(v: u128) -> Self {
		Self([v as u64, (v >> 64) as u64, 0, 0])
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for U256 {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2                => Ok(Self::try_from(i64::from(i16::from_sql(ty, raw)?))?),
			Type::INT4                => Ok(Self::try_from(i64::from(i32::from_sql(ty, raw)?))?),
			Type::INT8                => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			Type::TEXT | Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			_                         => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for U256: {ty}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr
impl FromStr for U256 {
	type Err = ParseError;

	//		from_str
	/// Parses hex when the input starts with `0x` or `0X`, and decimal
	/// otherwise.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.starts_with("0x") || s.starts_with("0X") {
			Self::from_hex_str(s)
		} else {
			Self::from_dec_str(s)
		}
	}
}

//󰭅		LowerHex
impl LowerHex for U256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_hex_digits(false))
	}
}

//󰭅		Mul
impl Mul for U256 {
	type Output = Self;

	//		mul
	#[expect(clippy::expect_used, reason = "Overflow is a contract violation")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.checked_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign
impl MulAssign for U256 {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Not
impl Not for U256 {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
	}
}

//󰭅		Ord
impl Ord for U256 {
	//		cmp
	/// Compares by subtraction: a borrow out of the top limb means less, and a
	/// zero difference means equal.
	fn cmp(&self, other: &Self) -> Ordering {
		let (diff, borrow) = self.overflowing_sub(*other);
		if borrow {
			Ordering::Less
		} else if diff.is_zero() {
			Ordering::Equal
		} else {
			Ordering::Greater
		}
	}
}

//󰭅		PartialOrd
impl PartialOrd for U256 {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for U256 {
	//		product
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a U256> for U256 {
	//		product
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * *x)
	}
}

//󰭅		Rem
impl Rem for U256 {
	type Output = Self;

	//		rem
	/// Takes the remainder, giving zero for a zero divisor.
	fn rem(self, rhs: Self) -> Self::Output {
		self.div_rem(rhs).1
	}
}

//󰭅		RemAssign
impl RemAssign for U256 {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize
impl Serialize for U256 {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	Decimal string, never a JSON number
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(&self.to_le_bytes())
		}
	}
}

//󰭅		Shl
impl Shl<u32> for U256 {
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		self.lsh(rhs)
	}
}

//󰭅		ShlAssign
impl ShlAssign<u32> for U256 {
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = self.lsh(rhs);
	}
}

//󰭅		Shr
impl Shr<u32> for U256 {
	type Output = Self;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		self.rsh(rhs)
	}
}

//󰭅		ShrAssign
impl ShrAssign<u32> for U256 {
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = self.rsh(rhs);
	}
}

//󰭅		Sub
impl Sub for U256 {
	type Output = Self;

	//		sub
	#[expect(clippy::expect_used, reason = "Underflow is a contract violation")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract underflowed")
	}
}

//󰭅		SubAssign
impl SubAssign for U256 {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl Sum for U256 {
	//		sum
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a U256> for U256 {
	//		sum
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + *x)
	}
}

//󰭅		ToSql
impl ToSql for U256 {
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

//󰭅		TryFrom: &str -> U256
impl TryFrom<&str> for U256 {
	type Error = ConversionError;

	//		try_from
	/// Parses decimal, or hex when `0x`-prefixed, as [`FromStr`] does.
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Ok(value.parse::<Self>()?)
	}
}

//󰭅		TryFrom: String -> U256
impl TryFrom<String> for U256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::try_from(value.as_str())
	}
}

//󰭅		TryFrom: i64 -> U256
impl TryFrom<i64> for U256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		u64::try_from(v).map(Self::from_u64).map_err(|_| ConversionError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i128 -> U256
impl TryFrom<i128> for U256 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		u128::try_from(v).map(Self::from).map_err(|_| ConversionError::ValueIsNegative)
	}
}

//󰭅		TryFrom: U256 -> i64
impl TryFrom<U256> for i64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: U256) -> Result<Self, Self::Error> {
		if v.is_u64() {
			Self::try_from(v.0[0]).map_err(|_| ConversionError::ValueTooLarge)
		} else {
			Err(ConversionError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom: U256 -> u64
impl TryFrom<U256> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: U256) -> Result<Self, Self::Error> {
		v.is_u64().then_some(v.0[0]).ok_or(ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: U256 -> u128
impl TryFrom<U256> for u128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: U256) -> Result<Self, Self::Error> {
		((v.0[2] | v.0[3]) == 0)
			.then(|| Self::from(v.0[0]) | (Self::from(v.0[1]) << 64))
			.ok_or(ConversionError::ValueTooLarge)
	}
}

//󰭅		UpperHex
impl UpperHex for U256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_hex_digits(true))
	}
}



//		Functions

//		nibble_table
/// Builds the lookup table of hex digit values.
const fn nibble_table() -> [u8; 256] {
	let mut table = [BAD_NIBBLE; 256];
	let mut i     = 0_u8;
	while i < 10 {
		table[(b'0' + i) as usize] = i;
		i += 1;
	}
	let mut i = 0_u8;
	while i < 6 {
		table[(b'a' + i) as usize] = 10 + i;
		table[(b'A' + i) as usize] = 10 + i;
		i += 1;
	}
	table
}



//		Visitors

//		U256Visitor
/// A visitor for parsing a [`U256`] from numbers, strings, or bytes.
struct U256Visitor;

//󰭅		Visitor
impl Visitor<'_> for U256Visitor {
	type Value = U256;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned 256-bit integer")
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		<[u8; 32]>::try_from(v)
			.map(U256::from_le_bytes)
			.map_err(|_| E::invalid_length(v.len(), &self))
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		U256::try_from(v).map_err(E::custom)
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
		Ok(U256::from_u64(v))
	}
}
