//! The Wideword crate provides fixed-width 256-bit integers: an unsigned
//! [`U256`] stored as four 64-bit limbs, and a two's-complement signed
//! [`I256`] built on top of it.
//!
//! Every arithmetic primitive comes in explicit forms, so that the caller
//! decides at the call site what an out-of-range result means. The operator
//! traits panic, the `overflowing_*` methods report a flag, the `checked_*`
//! methods return [`Option`], and the `wrapping_*` methods reduce modulo
//! `2^256`.
//!
//! Text parsing is the only recoverable failure, and is reported through
//! [`ParseError`], which carries an [`ErrorKind`] to branch on.
//!
//! ```
//! use wideword::{I256, U256};
//!
//! let a: U256 = "340282366920938463463374607431768211456".parse().unwrap();
//! let b       = U256::from(3_u8);
//! assert_eq!((a / b).to_string(), "113427455640312821154458202477256070485");
//! assert_eq!(a.add_delta(I256::from(-1_i8)).to_hex(), "0xffffffffffffffffffffffffffffffff");
//!
//! let c = I256::from(-7_i8);
//! let d = I256::from(3_i8);
//! assert_eq!((c / d, c % d), (I256::from(-2_i8), I256::from(-1_i8)));
//! assert_eq!((c.quo(d), c.modulo(d)), (I256::from(-3_i8), I256::from(2_i8)));
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;
mod limbs;
mod parse;
mod uint;



//		Packages

pub use errors::{ConversionError, ErrorKind, ParseError};
pub use int::I256;
pub use parse::parse_uint;
pub use uint::U256;

//	Used only by the unit tests
#[cfg(test)]
use claims as _;
#[cfg(test)]
use rubedo as _;
