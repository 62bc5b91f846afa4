//		Packages

use super::*;
use bytes::BytesMut;
use claims::{assert_err, assert_err_eq, assert_none, assert_ok, assert_ok_eq, assert_some_eq};
use core::cmp::Ordering;
use rubedo::sugar::s;
use std::collections::HashSet;
use tokio_postgres::types::{IsNull, Type};



//		Common

const TOP: u64 = 1 << 63;

const TWO_POW_64:  &str = "18446744073709551616";
const TWO_POW_128: &str = "340282366920938463463374607431768211456";
const TWO_POW_255: &str = "57896044618658097711785492504343953926634992332820282019728792003956564819968";
const MAX_PLUS_1:  &str = "115792089237316195423570985008687907853269984665640564039457584007913129639936";

fn u(s: &str) -> U256 {
	s.parse().unwrap()
}

fn n(v: u64) -> U256 {
	U256::from_u64(v)
}

fn boundaries() -> Vec<U256> {
	vec![
		U256::ZERO,
		U256::ONE,
		n(2),
		n(10),
		n(u64::MAX),
		u(TWO_POW_64),
		U256::from(u128::MAX),
		u(TWO_POW_128),
		U256::from_limbs([0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 0x0F0F_0F0F_0F0F_0F0F, 0x00F0_F0F0_F0F0_F0F0]),
		u(TWO_POW_255),
		U256::MAX - U256::ONE,
		U256::MAX,
	]
}



//		Tests

mod constructors {
	use super::*;

	//		from_limbs
	#[test]
	fn from_limbs__round_trip() {
		let limbs = [1, 2, 3, 4];
		let value = U256::from_limbs(limbs);
		assert_eq!(value.as_limbs(),   &limbs);
		assert_eq!(value.into_limbs(), limbs);
	}

	//		from_u64
	#[test]
	fn from_u64__values() {
		assert_eq!(U256::from_u64(0),        U256::ZERO);
		assert_eq!(U256::from_u64(1),        U256::ONE);
		assert_eq!(U256::from_u64(u64::MAX).as_limbs(), &[u64::MAX, 0, 0, 0]);
	}

	//		one
	#[test]
	fn one() {
		assert_eq!(U256::one(), U256::ONE);
	}

	//		zero
	#[test]
	fn zero() {
		assert_eq!(U256::zero(), U256::ZERO);
	}

	//		from_le_bytes
	#[test]
	fn from_le_bytes__values() {
		let mut bytes = [0_u8; 32];
		bytes[0]      = 1;
		bytes[8]      = 2;
		assert_eq!(U256::from_le_bytes(bytes), U256::from_limbs([1, 2, 0, 0]));
		assert_eq!(U256::from_le_bytes([0xFF; 32]), U256::MAX);
	}

	//		from_be_bytes
	#[test]
	fn from_be_bytes__values() {
		let mut bytes = [0_u8; 32];
		bytes[31]     = 1;
		bytes[0]      = 0x80;
		assert_eq!(U256::from_be_bytes(bytes), U256::from_limbs([1, 0, 0, TOP]));
	}
}

mod public_methods {
	use super::*;

	//		bit
	#[test]
	fn bit__positions() {
		assert!( U256::ONE.bit(0));
		assert!(!U256::ONE.bit(1));
		assert!( u(TWO_POW_64).bit(64));
		assert!( U256::MAX.bit(255));
		assert!(!U256::MAX.bit(256));
	}

	//		bit_len
	#[test]
	fn bit_len__values() {
		assert_eq!(U256::ZERO.bit_len(),      0);
		assert_eq!(U256::ONE.bit_len(),       1);
		assert_eq!(u(TWO_POW_64).bit_len(),   65);
		assert_eq!(u(TWO_POW_255).bit_len(),  256);
		assert_eq!(U256::MAX.bit_len(),       256);
	}

	//		checked_add
	#[test]
	fn checked_add__normal() {
		assert_some_eq!(n(5).checked_add(n(3)), n(8));
	}
	#[test]
	fn checked_add__carry_across_limbs() {
		assert_some_eq!(n(u64::MAX).checked_add(U256::ONE), u(TWO_POW_64));
		assert_some_eq!(U256::from(u128::MAX).checked_add(U256::ONE), u(TWO_POW_128));
	}
	#[test]
	fn checked_add__at_max() {
		assert_some_eq!((U256::MAX - U256::ONE).checked_add(U256::ONE), U256::MAX);
	}
	#[test]
	fn checked_add__overflow() {
		assert_none!(U256::MAX.checked_add(U256::ONE));
		assert_none!(U256::MAX.checked_add(U256::MAX));
	}

	//		checked_div
	#[test]
	fn checked_div__normal() {
		assert_some_eq!(n(7).checked_div(n(2)), n(3));
	}
	#[test]
	fn checked_div__by_zero() {
		assert_none!(n(7).checked_div(U256::ZERO));
	}

	//		checked_mul
	#[test]
	fn checked_mul__normal() {
		assert_some_eq!(n(6).checked_mul(n(7)), n(42));
	}
	#[test]
	fn checked_mul__wide() {
		//	(2^128 - 1)^2 == 2^256 - 2^129 + 1
		let x = U256::from(u128::MAX);
		assert_some_eq!(x.checked_mul(x), U256::from_limbs([1, 0, u64::MAX - 1, u64::MAX]));
	}
	#[test]
	fn checked_mul__at_limit() {
		assert_some_eq!(u(TWO_POW_128).checked_mul(U256::from(1_u128 << 127)), u(TWO_POW_255));
	}
	#[test]
	fn checked_mul__overflow() {
		assert_none!(u(TWO_POW_128).checked_mul(u(TWO_POW_128)));
		assert_none!(u(TWO_POW_255).checked_mul(n(2)));
	}

	//		checked_rem
	#[test]
	fn checked_rem__normal() {
		assert_some_eq!(n(7).checked_rem(n(4)), n(3));
	}
	#[test]
	fn checked_rem__by_zero() {
		assert_none!(n(7).checked_rem(U256::ZERO));
	}

	//		checked_sub
	#[test]
	fn checked_sub__normal() {
		assert_some_eq!(n(5).checked_sub(n(3)), n(2));
	}
	#[test]
	fn checked_sub__borrow_across_limbs() {
		assert_some_eq!(u(TWO_POW_64).checked_sub(U256::ONE), n(u64::MAX));
	}
	#[test]
	fn checked_sub__underflow() {
		assert_none!(U256::ZERO.checked_sub(U256::ONE));
		assert_none!(n(3).checked_sub(n(5)));
	}

	//		div_rem
	#[test]
	fn div_rem__by_zero() {
		assert_eq!(n(42).div_rem(U256::ZERO),      (U256::ZERO, U256::ZERO));
		assert_eq!(U256::MAX.div_rem(U256::ZERO),  (U256::ZERO, U256::ZERO));
	}
	#[test]
	fn div_rem__divisor_larger() {
		assert_eq!(n(42).div_rem(n(43)),           (U256::ZERO, n(42)));
		assert_eq!(n(42).div_rem(U256::MAX),       (U256::ZERO, n(42)));
	}
	#[test]
	fn div_rem__equal() {
		assert_eq!(U256::MAX.div_rem(U256::MAX),   (U256::ONE, U256::ZERO));
	}
	#[test]
	fn div_rem__single_limb() {
		assert_eq!(n(100).div_rem(n(7)),           (n(14), n(2)));
	}
	#[test]
	fn div_rem__wide() {
		let low = U256::from(u128::MAX);
		assert_eq!(U256::MAX.div_rem(u(TWO_POW_128)), (low, low));
		assert_eq!(
			U256::MAX.div_rem(n(10)),
			(u("11579208923731619542357098500868790785326998466564056403945758400791312963993"), n(5)),
		);
	}
	#[test]
	fn div_rem__identity() {
		let values = boundaries();
		for &x in &values {
			for &y in values.iter().filter(|y| !y.is_zero()) {
				let (q, r) = x.div_rem(y);
				assert!(r < y, "{x} % {y}");
				assert_eq!(q.checked_mul(y).and_then(|p| p.checked_add(r)), Some(x), "{x} / {y}");
			}
		}
	}

	//		from_dec_str
	#[test]
	fn from_dec_str__valid() {
		assert_ok_eq!(U256::from_dec_str("0"),                    U256::ZERO);
		assert_ok_eq!(U256::from_dec_str("42"),                   n(42));
		assert_ok_eq!(U256::from_dec_str("+42"),                  n(42));
		assert_ok_eq!(U256::from_dec_str("000042"),               n(42));
		assert_ok_eq!(U256::from_dec_str("0000"),                 U256::ZERO);
		assert_ok_eq!(U256::from_dec_str("+0"),                   U256::ZERO);
		assert_ok_eq!(U256::from_dec_str("18446744073709551615"), n(u64::MAX));
		assert_ok_eq!(U256::from_dec_str(TWO_POW_64),             U256::from_limbs([0, 1, 0, 0]));
		assert_ok_eq!(U256::from_dec_str(TWO_POW_255),            U256::from_limbs([0, 0, 0, TOP]));
		assert_ok_eq!(U256::from_dec_str(MAX_DECIMAL),            U256::MAX);
	}
	#[test]
	fn from_dec_str__window_boundaries() {
		assert_ok_eq!(U256::from_dec_str("10000000000000000000"), n(10_000_000_000_000_000_000));
		for (i, power) in POWERS_OF_TEN.iter().enumerate() {
			let text = format!("1{}", "0".repeat(i * DECIMAL_CHUNK_DIGITS));
			assert_ok_eq!(U256::from_dec_str(&text), *power);
		}
	}
	#[test]
	fn from_dec_str__many_leading_zeros() {
		let text = format!("{}{MAX_DECIMAL}", "0".repeat(100));
		assert_ok_eq!(U256::from_dec_str(&text), U256::MAX);
	}
	#[test]
	fn from_dec_str__empty() {
		let err = assert_err!(U256::from_dec_str(""));
		assert_eq!(err.kind(), ErrorKind::EmptyString);
		assert_eq!(assert_err!(U256::from_dec_str("+")).kind(), ErrorKind::EmptyString);
	}
	#[test]
	fn from_dec_str__syntax() {
		for text in ["12a", "-1", "++1", " 1", "1 ", "1_000", "0x10", "١"] {
			let err = assert_err!(U256::from_dec_str(text));
			assert_eq!(err.kind(),  ErrorKind::Syntax, "{text}");
			assert_eq!(err.func(),  "from_dec_str");
			assert_eq!(err.input(), text);
		}
	}
	#[test]
	fn from_dec_str__too_big() {
		assert_eq!(assert_err!(U256::from_dec_str(MAX_PLUS_1)).kind(), ErrorKind::Big256Range);
		let long = format!("1{}", "0".repeat(78));
		assert_eq!(assert_err!(U256::from_dec_str(&long)).kind(),      ErrorKind::Big256Range);
	}
	#[test]
	fn from_dec_str__error_message() {
		let err = assert_err!(U256::from_dec_str(MAX_PLUS_1));
		assert_eq!(err.to_string(), format!("from_dec_str: {MAX_PLUS_1}: number > 256 bits"));
	}

	//		from_hex_str
	#[test]
	fn from_hex_str__valid() {
		assert_ok_eq!(U256::from_hex_str("0x0"),   U256::ZERO);
		assert_ok_eq!(U256::from_hex_str("0x10"),  n(16));
		assert_ok_eq!(U256::from_hex_str("0XFF"),  n(255));
		assert_ok_eq!(U256::from_hex_str("0xAbC"), n(0xABC));
		assert_ok_eq!(U256::from_hex_str("0x10000000000000000"), u(TWO_POW_64));
		assert_ok_eq!(U256::from_hex_str(&format!("0x{}", "f".repeat(64))), U256::MAX);
		assert_ok_eq!(U256::from_hex_str(&format!("0x8{}", "0".repeat(63))), u(TWO_POW_255));
	}
	#[test]
	fn from_hex_str__errors() {
		let cases = [
			("",                                    ErrorKind::EmptyString),
			("10",                                  ErrorKind::MissingPrefix),
			("x10",                                 ErrorKind::MissingPrefix),
			("0x",                                  ErrorKind::EmptyNumber),
			("0x00",                                ErrorKind::LeadingZero),
			("0x01",                                ErrorKind::LeadingZero),
			("0xg",                                 ErrorKind::Syntax),
			("0x1 ",                                ErrorKind::Syntax),
			("0x-1",                                ErrorKind::Syntax),
		];
		for (text, kind) in cases {
			let err = assert_err!(U256::from_hex_str(text));
			assert_eq!(err.kind(),  kind, "{text}");
			assert_eq!(err.func(),  "from_hex_str");
			assert_eq!(err.input(), text);
		}
	}
	#[test]
	fn from_hex_str__too_long() {
		let text = format!("0x1{}", "0".repeat(64));
		assert_eq!(assert_err!(U256::from_hex_str(&text)).kind(), ErrorKind::Big256Range);
	}

	//		is_u64
	#[test]
	fn is_u64__values() {
		assert!( U256::ZERO.is_u64());
		assert!( n(u64::MAX).is_u64());
		assert!(!u(TWO_POW_64).is_u64());
		assert!(!U256::from_limbs([0, 0, 0, 1]).is_u64());
	}

	//		is_zero
	#[test]
	fn is_zero__values() {
		assert!( U256::ZERO.is_zero());
		assert!(!U256::ONE.is_zero());
		assert!(!U256::from_limbs([0, 0, 0, 1]).is_zero());
	}

	//		leading_zeros
	#[test]
	fn leading_zeros__values() {
		assert_eq!(U256::ZERO.leading_zeros(),     256);
		assert_eq!(U256::ONE.leading_zeros(),      255);
		assert_eq!(u(TWO_POW_128).leading_zeros(), 127);
		assert_eq!(U256::MAX.leading_zeros(),      0);
	}

	//		low_u64
	#[test]
	fn low_u64__truncates() {
		assert_eq!(U256::from_limbs([7, 8, 9, 10]).low_u64(), 7);
		assert_eq!(U256::MAX.low_u64(),                       u64::MAX);
	}

	//		lsh
	#[test]
	fn lsh__small() {
		assert_eq!(n(5).lsh(2),  n(20));
		assert_eq!(n(42).lsh(5), n(1344));
		assert_eq!(n(42).lsh(0), n(42));
	}
	#[test]
	fn lsh__across_limbs() {
		assert_eq!(U256::ONE.lsh(64),  u(TWO_POW_64));
		assert_eq!(U256::ONE.lsh(100), U256::from_limbs([0, 1 << 36, 0, 0]));
		assert_eq!(U256::ONE.lsh(255), u(TWO_POW_255));
		assert_eq!(U256::MAX.lsh(1),   U256::from_limbs([u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]));
		assert_eq!(U256::MAX.lsh(192), U256::from_limbs([0, 0, 0, u64::MAX]));
	}
	#[test]
	fn lsh__out_of_range() {
		assert_eq!(U256::MAX.lsh(256),      U256::ZERO);
		assert_eq!(U256::MAX.lsh(u32::MAX), U256::ZERO);
	}

	//		rsh
	#[test]
	fn rsh__small() {
		assert_eq!(n(42).rsh(3), n(5));
		assert_eq!(n(42).rsh(0), n(42));
	}
	#[test]
	fn rsh__across_limbs() {
		assert_eq!(u(TWO_POW_64).rsh(1), n(TOP));
		assert_eq!(U256::MAX.rsh(130),   U256::from_limbs([u64::MAX, u64::MAX >> 2, 0, 0]));
		assert_eq!(U256::MAX.rsh(255),   U256::ONE);
	}
	#[test]
	fn rsh__out_of_range() {
		assert_eq!(U256::MAX.rsh(256), U256::ZERO);
	}
	#[test]
	fn rsh__inverts_lsh() {
		for x in boundaries() {
			for shift in 0..256 {
				let kept = x & U256::MAX.rsh(shift);
				assert_eq!(kept.lsh(shift).rsh(shift), kept,            "{x} by {shift}");
				assert_eq!(x.lsh(shift).rsh(shift),    kept,            "{x} by {shift}");
				assert_eq!(x.rsh(shift).lsh(shift).rsh(shift), x.rsh(shift), "{x} by {shift}");
			}
		}
	}

	//		sar
	#[test]
	fn sar__non_negative_matches_rsh() {
		for shift in [0, 1, 63, 64, 65, 128, 200, 255, 256] {
			let x = U256::MAX.rsh(1);
			assert_eq!(x.sar(shift), x.rsh(shift), "{shift}");
		}
	}
	#[test]
	fn sar__fills_with_ones() {
		let min = U256::from_limbs([0, 0, 0, TOP]);
		assert_eq!(min.sar(1),   U256::from_limbs([0, 0, 0, TOP | (TOP >> 1)]));
		assert_eq!(min.sar(64),  U256::from_limbs([0, 0, TOP, u64::MAX]));
		assert_eq!(min.sar(255), U256::MAX);
		assert_eq!(U256::MAX.sar(100), U256::MAX);
	}
	#[test]
	fn sar__out_of_range() {
		assert_eq!(U256::from_limbs([0, 0, 0, TOP]).sar(256), U256::MAX);
		assert_eq!(U256::from_limbs([0, 0, 0, TOP]).sar(999), U256::MAX);
	}

	//		to_be_bytes
	#[test]
	fn to_be_bytes__layout() {
		let bytes = n(0x0102).to_be_bytes();
		assert_eq!(&bytes[30..], &[0x01, 0x02]);
		assert_eq!(&bytes[..30], &[0; 30]);
	}

	//		to_hex
	#[test]
	fn to_hex__canonical() {
		assert_eq!(U256::ZERO.to_hex(),     s!("0x0"));
		assert_eq!(n(255).to_hex(),         s!("0xff"));
		assert_eq!(u(TWO_POW_64).to_hex(),  s!("0x10000000000000000"));
		assert_eq!(U256::MAX.to_hex(),      format!("0x{}", "f".repeat(64)));
	}

	//		to_le_bytes
	#[test]
	fn to_le_bytes__layout() {
		let bytes = U256::from_limbs([1, 0, 0, TOP]).to_le_bytes();
		assert_eq!(bytes[0],  1);
		assert_eq!(bytes[31], 0x80);
		assert_eq!(U256::from_le_bytes(bytes), U256::from_limbs([1, 0, 0, TOP]));
	}

	//		to_u64
	#[test]
	fn to_u64__valid() {
		assert_eq!(U256::ZERO.to_u64(),  0);
		assert_eq!(n(u64::MAX).to_u64(), u64::MAX);
	}
	#[test]
	#[should_panic(expected = "Value does not fit in u64")]
	fn to_u64__too_large() {
		_ = u(TWO_POW_64).to_u64();
	}

	//		overflowing_add
	#[test]
	fn overflowing_add__values() {
		assert_eq!(n(1).overflowing_add(n(2)),             (n(3),       false));
		assert_eq!(U256::MAX.overflowing_add(U256::ONE),   (U256::ZERO, true));
		assert_eq!(U256::MAX.overflowing_add(U256::MAX),   (U256::MAX - U256::ONE, true));
	}

	//		overflowing_mul
	#[test]
	fn overflowing_mul__values() {
		assert_eq!(n(6).overflowing_mul(n(7)),             (n(42),      false));
		assert_eq!(U256::MAX.overflowing_mul(U256::MAX),   (U256::ONE,  true));
		assert_eq!(u(TWO_POW_255).overflowing_mul(n(2)),   (U256::ZERO, true));
	}

	//		overflowing_sub
	#[test]
	fn overflowing_sub__values() {
		assert_eq!(n(3).overflowing_sub(n(2)),             (U256::ONE, false));
		assert_eq!(U256::ZERO.overflowing_sub(U256::ONE),  (U256::MAX, true));
	}

	//		widening_mul
	#[test]
	fn widening_mul__max_squared() {
		assert_eq!(U256::MAX.widening_mul(U256::MAX), (U256::ONE, U256::MAX - U256::ONE));
	}
	#[test]
	fn widening_mul__fits() {
		assert_eq!(n(6).widening_mul(n(7)), (n(42), U256::ZERO));
	}

	//		wrapping_add
	#[test]
	fn wrapping_add__values() {
		assert_eq!(n(1).wrapping_add(n(2)),           n(3));
		assert_eq!(U256::MAX.wrapping_add(U256::ONE), U256::ZERO);
	}

	#[test]
	fn wrapping_add__commutative_and_associative() {
		let values = boundaries();
		for &x in &values {
			for &y in &values {
				assert_eq!(x.wrapping_add(y), y.wrapping_add(x), "{x} + {y}");
				assert_eq!(x.overflowing_add(y).1, y.overflowing_add(x).1, "{x} + {y}");
				for &z in &values {
					assert_eq!(
						x.wrapping_add(y).wrapping_add(z),
						x.wrapping_add(y.wrapping_add(z)),
						"{x} + {y} + {z}",
					);
				}
			}
		}
	}

	//		wrapping_mul
	#[test]
	fn wrapping_mul__commutative_and_associative() {
		let values = boundaries();
		for &x in &values {
			for &y in &values {
				assert_eq!(x.wrapping_mul(y), y.wrapping_mul(x),     "{x} * {y}");
				assert_eq!(x.wrapping_mul(y), x.widening_mul(y).0,   "{x} * {y}");
				assert_eq!(x.widening_mul(y), y.widening_mul(x),     "{x} * {y}");
				for &z in &values {
					assert_eq!(
						x.wrapping_mul(y).wrapping_mul(z),
						x.wrapping_mul(y.wrapping_mul(z)),
						"{x} * {y} * {z}",
					);
				}
			}
		}
	}
	#[test]
	fn wrapping_mul__values() {
		assert_eq!(n(6).wrapping_mul(n(7)),           n(42));
		assert_eq!(U256::MAX.wrapping_mul(U256::MAX), U256::ONE);
		assert_eq!(U256::MAX.wrapping_mul(n(2)),      U256::MAX - U256::ONE);
	}

	//		wrapping_sub
	#[test]
	fn wrapping_sub__values() {
		assert_eq!(n(3).wrapping_sub(n(2)),            U256::ONE);
		assert_eq!(U256::ZERO.wrapping_sub(U256::ONE), U256::MAX);
		assert_eq!(n(1).wrapping_sub(n(3)),            U256::MAX - U256::ONE);
	}
}

mod derived_traits {
	use super::*;

	//		Copy
	#[test]
	fn copy__aliasing() {
		//	Using a value as both operands must not disturb either
		let mut x = n(21);
		x         = x + x;
		assert_eq!(x, n(42));
		x        *= x;
		assert_eq!(x, n(1764));
		let (q, r) = x.div_rem(x);
		assert_eq!((q, r), (U256::ONE, U256::ZERO));
	}

	//		Default
	#[test]
	fn default() {
		assert_eq!(U256::default(), U256::ZERO);
	}

	//		Eq
	#[test]
	fn eq() {
		assert_eq!(n(2), U256::from(2_u8));
		assert_ne!(n(2), n(3));
		assert_ne!(U256::from_limbs([1, 0, 0, 0]), U256::from_limbs([0, 0, 0, 1]));
	}

	//		Hash
	#[test]
	fn hash() {
		let mut set = HashSet::new();
		_ = set.insert(n(42));
		assert!( set.contains(&n(42)));
		assert!(!set.contains(&n(43)));
	}
}

mod traits {
	use super::*;

	//		Add
	#[test]
	fn add__normal() {
		assert_eq!(n(5) + n(3), n(8));
	}
	#[test]
	#[should_panic(expected = "Attempt to add overflowed")]
	fn add__overflow() {
		_ = U256::MAX + U256::ONE;
	}

	//		AddAssign
	#[test]
	fn add_assign__normal() {
		let mut x = n(5);
		x        += n(3);
		assert_eq!(x, n(8));
	}
	#[test]
	#[should_panic(expected = "Attempt to add overflowed")]
	fn add_assign__overflow() {
		let mut x = U256::MAX;
		x        += U256::ONE;
	}

	//		BitAnd, BitOr, BitXor, Not
	#[test]
	fn bitwise__values() {
		assert_eq!(n(0b1100) & n(0b1010), n(0b1000));
		assert_eq!(n(0b1100) | n(0b1010), n(0b1110));
		assert_eq!(n(0b1100) ^ n(0b1010), n(0b0110));
		assert_eq!(!U256::ZERO,           U256::MAX);
		assert_eq!(!U256::MAX,            U256::ZERO);
		assert_eq!(U256::MAX ^ U256::MAX, U256::ZERO);
	}
	#[test]
	fn bitwise__assign() {
		let mut x = n(0b1100);
		x        &= n(0b0110);
		assert_eq!(x, n(0b0100));
		x        |= n(0b0001);
		assert_eq!(x, n(0b0101));
		x        ^= n(0b0101);
		assert_eq!(x, U256::ZERO);
	}

	//		Debug
	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", n(42)),      s!("U256(42)"));
		assert_eq!(format!("{:?}", U256::MAX),  format!("U256({MAX_DECIMAL})"));
	}
	#[test]
	fn debug__alternate() {
		assert_eq!(
			format!("{:#?}", U256::from_limbs([1, 0, 0, TOP])),
			format!(
				"U256({}) [0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x8000000000000000]",
				u(TWO_POW_255) + U256::ONE,
			),
		);
	}

	//		Deserialize
	#[test]
	fn deserialize__string() {
		assert_ok_eq!(serde_json::from_str::<U256>(r#""42""#),   n(42));
		assert_ok_eq!(serde_json::from_str::<U256>(r#""0x2a""#), n(42));
		assert_ok_eq!(serde_json::from_str::<U256>(&format!(r#""{MAX_DECIMAL}""#)), U256::MAX);
	}
	#[test]
	fn deserialize__number() {
		assert_ok_eq!(serde_json::from_str::<U256>("42"),                   n(42));
		assert_ok_eq!(serde_json::from_str::<U256>("18446744073709551615"), n(u64::MAX));
	}
	#[test]
	fn deserialize__invalid() {
		assert_err!(serde_json::from_str::<U256>("-1"));
		assert_err!(serde_json::from_str::<U256>(r#""0x""#));
		assert_err!(serde_json::from_str::<U256>(&format!(r#""{MAX_PLUS_1}""#)));
		assert_err!(serde_json::from_str::<U256>("true"));
	}
	#[test]
	fn deserialize__bytes() {
		let bytes = U256::MAX.to_le_bytes();
		assert_ok_eq!(U256Visitor.visit_bytes::<JsonError>(&bytes), U256::MAX);
		assert_err!(U256Visitor.visit_bytes::<JsonError>(&bytes[..31]));
	}

	//		Display
	#[test]
	fn display__values() {
		assert_eq!(U256::ZERO.to_string(),            s!("0"));
		assert_eq!(n(42).to_string(),                 s!("42"));
		assert_eq!(n(u64::MAX).to_string(),           s!("18446744073709551615"));
		assert_eq!(u(TWO_POW_64).to_string(),         TWO_POW_64);
		assert_eq!(U256::from(u128::MAX).to_string(), s!("340282366920938463463374607431768211455"));
		assert_eq!(U256::MAX.to_string(),             MAX_DECIMAL);
	}
	#[test]
	fn display__zero_padded_chunks() {
		assert_eq!(POWERS_OF_TEN[2].to_string(), format!("1{}", "0".repeat(38)));
		assert_eq!(POWERS_OF_TEN[4].to_string(), format!("1{}", "0".repeat(76)));
	}
	#[test]
	fn display__padding() {
		assert_eq!(format!("{:>5}", n(42)),  s!("   42"));
		assert_eq!(format!("{:05}", n(42)),  s!("00042"));
		assert_eq!(format!("{:<4}|", n(7)),  s!("7   |"));
	}
	#[test]
	fn display__parses_back() {
		for value in boundaries() {
			assert_ok_eq!(U256::from_dec_str(&value.to_string()), value);
			assert_ok_eq!(U256::from_hex_str(&value.to_hex()),    value);
		}
	}

	//		Div
	#[test]
	fn div__normal() {
		assert_eq!(n(7) / n(2), n(3));
	}
	#[test]
	fn div__by_zero() {
		assert_eq!(n(7) / U256::ZERO, U256::ZERO);
	}

	//		DivAssign
	#[test]
	fn div_assign__normal() {
		let mut x = n(7);
		x        /= n(2);
		assert_eq!(x, n(3));
	}

	//		FromSql
	#[test]
	fn from_sql__int() {
		assert_ok_eq!(U256::from_sql(&Type::INT2, &42_i16.to_be_bytes()), n(42));
		assert_ok_eq!(U256::from_sql(&Type::INT4, &42_i32.to_be_bytes()), n(42));
		assert_ok_eq!(U256::from_sql(&Type::INT8, &42_i64.to_be_bytes()), n(42));
	}
	#[test]
	fn from_sql__text() {
		assert_ok_eq!(U256::from_sql(&Type::TEXT,    MAX_DECIMAL.as_bytes()), U256::MAX);
		assert_ok_eq!(U256::from_sql(&Type::VARCHAR, b"0x2a"),                n(42));
	}
	#[test]
	fn from_sql__negative() {
		let err = U256::from_sql(&Type::INT8, &(-1_i64).to_be_bytes());
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "Value is negative");
	}
	#[test]
	fn from_sql__invalid_text() {
		let err = U256::from_sql(&Type::TEXT, b"abc");
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "from_dec_str: abc: invalid syntax");
	}
	#[test]
	fn from_sql__invalid_type() {
		let err = U256::from_sql(&Type::FLOAT4, &[0_u8; 4]);
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "Invalid type for U256: float4");
	}
	#[test]
	fn from_sql__accepts() {
		assert!( <U256 as FromSql>::accepts(&Type::INT2));
		assert!( <U256 as FromSql>::accepts(&Type::INT8));
		assert!( <U256 as FromSql>::accepts(&Type::TEXT));
		assert!(!<U256 as FromSql>::accepts(&Type::FLOAT4));
	}

	//		FromStr
	#[test]
	fn from_str__dispatch() {
		assert_ok_eq!("16".parse::<U256>(),   n(16));
		assert_ok_eq!("+16".parse::<U256>(),  n(16));
		assert_ok_eq!("0x10".parse::<U256>(), n(16));
		assert_ok_eq!("0X10".parse::<U256>(), n(16));
	}
	#[test]
	fn from_str__errors() {
		assert_eq!(assert_err!("0x".parse::<U256>()).kind(),  ErrorKind::EmptyNumber);
		assert_eq!(assert_err!("0x0g".parse::<U256>()).kind(), ErrorKind::LeadingZero);
		assert_eq!(assert_err!("0g".parse::<U256>()).kind(),  ErrorKind::Syntax);
	}

	//		LowerHex
	#[test]
	fn lower_hex() {
		assert_eq!(format!("{:x}",  n(255)),    s!("ff"));
		assert_eq!(format!("{:#x}", n(255)),    s!("0xff"));
		assert_eq!(format!("{:x}",  U256::from_limbs([0xA, 0xB, 0, 0])), s!("b000000000000000a"));
		assert_eq!(format!("{:8x}", n(255)),    s!("      ff"));
	}

	//		Mul
	#[test]
	fn mul__normal() {
		assert_eq!(n(6) * n(7), n(42));
	}
	#[test]
	#[should_panic(expected = "Attempt to multiply overflowed")]
	fn mul__overflow() {
		_ = u(TWO_POW_128) * u(TWO_POW_128);
	}

	//		MulAssign
	#[test]
	#[should_panic(expected = "Attempt to multiply overflowed")]
	fn mul_assign__overflow() {
		let mut x = U256::MAX;
		x        *= n(2);
	}

	//		Ord
	#[test]
	fn ord() {
		assert!(U256::ONE < U256::MAX);
		assert!(u(TWO_POW_64) > n(u64::MAX));
		assert!(U256::from_limbs([0, 0, 0, 1]) > U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0]));
		assert!(n(2) >= n(2));
		assert!(n(2) <= n(2));
		assert_eq!(n(2).cmp(&n(2)), Ordering::Equal);
		assert_eq!(n(1).cmp(&n(2)), Ordering::Less);
		assert_eq!(U256::MAX.max(U256::ONE), U256::MAX);
		assert_eq!(U256::MAX.min(U256::ONE), U256::ONE);
	}

	//		Product
	#[test]
	fn product() {
		assert_eq!([n(2), n(3), n(7)].into_iter().product::<U256>(), n(42));
		assert_eq!([n(2), n(3), n(7)].iter().product::<U256>(),      n(42));
		assert_eq!(Vec::<U256>::new().into_iter().product::<U256>(), U256::ONE);
	}

	//		Rem
	#[test]
	fn rem__normal() {
		assert_eq!(n(7) % n(4), n(3));
	}
	#[test]
	fn rem__by_zero() {
		assert_eq!(n(7) % U256::ZERO, U256::ZERO);
	}

	//		RemAssign
	#[test]
	fn rem_assign__normal() {
		let mut x = n(7);
		x        %= n(4);
		assert_eq!(x, n(3));
	}

	//		Serialize
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&n(42)),   s!(r#""42""#));
		assert_ok_eq!(serde_json::to_string(&U256::MAX), format!(r#""{MAX_DECIMAL}""#));
	}

	//		Shl, Shr
	#[test]
	fn shift_operators() {
		assert_eq!(n(5) << 2,  n(20));
		assert_eq!(n(42) >> 3, n(5));
		let mut x = U256::ONE;
		x       <<= 255;
		assert_eq!(x, u(TWO_POW_255));
		x       >>= 255;
		assert_eq!(x, U256::ONE);
	}

	//		Sub
	#[test]
	fn sub__normal() {
		assert_eq!(n(5) - n(3), n(2));
	}
	#[test]
	#[should_panic(expected = "Attempt to subtract underflowed")]
	fn sub__underflow() {
		_ = U256::ZERO - U256::ONE;
	}

	//		SubAssign
	#[test]
	#[should_panic(expected = "Attempt to subtract underflowed")]
	fn sub_assign__underflow() {
		let mut x = n(1);
		x        -= n(2);
	}

	//		Sum
	#[test]
	fn sum() {
		assert_eq!([n(1), n(2), n(3)].into_iter().sum::<U256>(), n(6));
		assert_eq!([n(1), n(2), n(3)].iter().sum::<U256>(),      n(6));
	}
	#[test]
	#[should_panic(expected = "Attempt to add overflowed")]
	fn sum__overflow() {
		_ = [U256::MAX, U256::ONE].into_iter().sum::<U256>();
	}

	//		ToSql
	#[test]
	fn to_sql__int8() {
		let mut bytes = BytesMut::new();
		match n(42).to_sql(&Type::INT8, &mut bytes).unwrap() {
			IsNull::No  => (),
			IsNull::Yes => panic!("Unexpected NULL value"),
		}
		assert_eq!(i64::from_be_bytes(bytes.as_ref().try_into().unwrap()), 42_i64);
	}
	#[test]
	fn to_sql__int8_too_large() {
		let mut bytes = BytesMut::new();
		let Err(err)  = n(u64::MAX).to_sql(&Type::INT8, &mut bytes) else {
			panic!("Expected an error for a value above i64::MAX");
		};
		assert_eq!(err.to_string(), "Value too large");
	}
	#[test]
	fn to_sql__text() {
		let mut bytes = BytesMut::new();
		assert_ok!(U256::MAX.to_sql(&Type::TEXT, &mut bytes));
		assert_eq!(bytes.as_ref(), MAX_DECIMAL.as_bytes());
	}
	#[test]
	fn to_sql__accepts() {
		assert!( <U256 as ToSql>::accepts(&Type::INT8));
		assert!( <U256 as ToSql>::accepts(&Type::TEXT));
		assert!(!<U256 as ToSql>::accepts(&Type::INT4));
		assert!(!<U256 as ToSql>::accepts(&Type::FLOAT4));
	}

	//		UpperHex
	#[test]
	fn upper_hex() {
		assert_eq!(format!("{:X}",  n(255)),    s!("FF"));
		assert_eq!(format!("{:#X}", n(255)),    s!("0xFF"));
	}
}

mod conversions {
	use super::*;

	//		From: u8 / u16 / u32 / u64 -> U256
	#[test]
	fn from__small_unsigned() {
		assert_eq!(U256::from(u8::MAX),  n(255));
		assert_eq!(U256::from(u16::MAX), n(65_535));
		assert_eq!(U256::from(u32::MAX), n(4_294_967_295));
		assert_eq!(U256::from(u64::MAX), n(u64::MAX));
	}

	//		From: u128 -> U256
	#[test]
	fn from__u128() {
		assert_eq!(U256::from(u128::MAX),    U256::from_limbs([u64::MAX, u64::MAX, 0, 0]));
		assert_eq!(U256::from(1_u128 << 64), u(TWO_POW_64));
	}

	//		TryFrom: i64 -> U256
	#[test]
	fn try_from__i64() {
		assert_ok_eq!(U256::try_from(42_i64),   n(42));
		assert_ok_eq!(U256::try_from(i64::MAX), n(i64::MAX as u64));
		assert_err_eq!(U256::try_from(-1_i64),  ConversionError::ValueIsNegative);
	}

	//		TryFrom: i128 -> U256
	#[test]
	fn try_from__i128() {
		assert_ok_eq!(U256::try_from(i128::MAX),  U256::from(i128::MAX as u128));
		assert_err_eq!(U256::try_from(i128::MIN), ConversionError::ValueIsNegative);
	}

	//		TryFrom: U256 -> i64
	#[test]
	fn try_into__i64() {
		assert_ok_eq!(i64::try_from(n(42)),              42);
		assert_ok_eq!(i64::try_from(n(i64::MAX as u64)), i64::MAX);
		assert_err_eq!(i64::try_from(n(i64::MAX as u64 + 1)), ConversionError::ValueTooLarge);
		assert_err_eq!(i64::try_from(U256::MAX),              ConversionError::ValueTooLarge);
	}

	//		TryFrom: U256 -> u64
	#[test]
	fn try_into__u64() {
		assert_ok_eq!(u64::try_from(n(u64::MAX)),    u64::MAX);
		assert_err_eq!(u64::try_from(u(TWO_POW_64)), ConversionError::ValueTooLarge);
	}

	//		TryFrom: U256 -> u128
	#[test]
	fn try_into__u128() {
		assert_ok_eq!(u128::try_from(U256::from(u128::MAX)), u128::MAX);
		assert_err_eq!(u128::try_from(u(TWO_POW_128)),       ConversionError::ValueTooLarge);
	}

	//		TryFrom: &str / String -> U256
	#[test]
	fn try_from__str() {
		assert_ok_eq!(U256::try_from("1000"),            n(1000));
		assert_ok_eq!(U256::try_from("0x3e8"),           n(1000));
		assert_ok_eq!(U256::try_from(MAX_DECIMAL.to_owned()), U256::MAX);
	}
	#[test]
	fn try_from__str_invalid() {
		let err = assert_err!(U256::try_from("12a"));
		assert_eq!(err, ConversionError::Parse(ParseError::new("from_dec_str", "12a", ErrorKind::Syntax)));
		assert_eq!(err.to_string(), "from_dec_str: 12a: invalid syntax");
		let ConversionError::Parse(inner) = assert_err!(U256::try_from(MAX_PLUS_1)) else {
			panic!("Expected a parse error");
		};
		assert_eq!(inner.kind(), ErrorKind::Big256Range);
	}

	//		from_json / to_json
	#[test]
	fn json__helpers() {
		assert_ok_eq!(U256::from_json(r#""1000""#), n(1000));
		assert_ok_eq!(U256::from_json(r#""0x3e8""#), n(1000));
		assert_ok_eq!(n(1000).to_json(),            s!(r#""1000""#));
	}
	#[test]
	fn from_json__unquoted_beyond_u64() {
		assert_ok_eq!(U256::from_json("100000000000000000000"), u("100000000000000000000"));
		assert_ok_eq!(U256::from_json(MAX_DECIMAL),             U256::MAX);
		assert_ok_eq!(U256::from_json(" 42 "),                  n(42));
	}
	#[test]
	fn from_json__unquoted_invalid() {
		assert_err!(U256::from_json(MAX_PLUS_1));
		assert_err!(U256::from_json("-1"));
		assert_err!(U256::from_json("1.5"));
		assert_err!(U256::from_json("null"));
		assert_err!(U256::from_json(""));
	}
}
