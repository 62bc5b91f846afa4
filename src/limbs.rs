//! Word-level primitives for multi-limb arithmetic.
//!
//! Everything here operates on little-endian slices or arrays of 64-bit limbs,
//! with index 0 being the least-significant word. The [`U256`](crate::U256)
//! type is a thin, typed layer over these functions.

//	Slice lengths in this module are fixed by the callers (at most five words),
//	and each function documents the length relationship it relies on, so
//	bounds-checked access would only add noise.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Lengths are fixed by the callers"
)]

//	Carry and borrow propagation is the whole point of this module, and all of
//	it is deliberately modular.
#![allow(clippy::arithmetic_side_effects, reason = "Limb arithmetic is modular by construction")]



//		Modules

#[cfg(test)]
#[path = "tests/limbs.rs"]
mod tests;



//		Constants

/// Number of limbs in a 256-bit value.
pub(crate) const LIMBS: usize = 4;



//		Functions

//		add_carry
/// Adds two words and an incoming carry, returning the sum and outgoing carry.
#[inline]
pub(crate) const fn add_carry(x: u64, y: u64, carry: u64) -> (u64, u64) {
	let (sum1, c1) = x.overflowing_add(y);
	let (sum2, c2) = sum1.overflowing_add(carry);
	(sum2, (c1 | c2) as u64)
}

//		sub_borrow
/// Subtracts a word and an incoming borrow, returning the difference and
/// outgoing borrow.
#[inline]
pub(crate) const fn sub_borrow(x: u64, y: u64, borrow: u64) -> (u64, u64) {
	let (diff1, b1) = x.overflowing_sub(y);
	let (diff2, b2) = diff1.overflowing_sub(borrow);
	(diff2, (b1 | b2) as u64)
}

//		mul_wide
/// Multiplies two words, returning the high and low words of the product.
#[inline]
#[expect(clippy::cast_possible_truncation, reason = "Splitting into halves")]
pub(crate) const fn mul_wide(x: u64, y: u64) -> (u64, u64) {
	let product = x as u128 * y as u128;
	((product >> 64) as u64, product as u64)
}

//		mul_hop
/// Computes `z + x * y`, returning the high and low words.
#[inline]
pub(crate) const fn mul_hop(z: u64, x: u64, y: u64) -> (u64, u64) {
	let (hi, lo)    = mul_wide(x, y);
	let (lo, carry) = add_carry(lo, z, 0);
	(hi + carry, lo)
}

//		mul_step
/// Computes `z + x * y + carry`, returning the high and low words.
#[inline]
pub(crate) const fn mul_step(z: u64, x: u64, y: u64, carry: u64) -> (u64, u64) {
	let (hi, lo) = mul_wide(x, y);
	let (lo, c1) = add_carry(lo, carry, 0);
	let (lo, c2) = add_carry(lo, z, 0);
	(hi + c1 + c2, lo)
}

//		mul_full
/// Multiplies two 256-bit values, producing the full 512-bit product.
///
/// The high word of each partial row can never overflow, as the largest
/// possible value of `z + x * y + carry` is `2^128 - 1`.
///
pub(crate) const fn mul_full(x: &[u64; LIMBS], y: &[u64; LIMBS]) -> [u64; 8] {
	let mut res = [0_u64; 8];

	let (carry,  r0) = mul_wide(x[0], y[0]);
	let (carry,  r1) = mul_hop(carry, x[1], y[0]);
	let (carry,  r2) = mul_hop(carry, x[2], y[0]);
	let (carry4, r3) = mul_hop(carry, x[3], y[0]);
	res[0] = r0;

	let (carry,  r1) = mul_hop(r1, x[0], y[1]);
	let (carry,  r2) = mul_step(r2, x[1], y[1], carry);
	let (carry,  r3) = mul_step(r3, x[2], y[1], carry);
	let (carry5, r4) = mul_step(carry4, x[3], y[1], carry);
	res[1] = r1;

	let (carry,  r2) = mul_hop(r2, x[0], y[2]);
	let (carry,  r3) = mul_step(r3, x[1], y[2], carry);
	let (carry,  r4) = mul_step(r4, x[2], y[2], carry);
	let (carry6, r5) = mul_step(carry5, x[3], y[2], carry);
	res[2] = r2;

	let (carry, r3) = mul_hop(r3, x[0], y[3]);
	let (carry, r4) = mul_step(r4, x[1], y[3], carry);
	let (carry, r5) = mul_step(r5, x[2], y[3], carry);
	let (r7,    r6) = mul_step(carry6, x[3], y[3], carry);
	res[3] = r3;
	res[4] = r4;
	res[5] = r5;
	res[6] = r6;
	res[7] = r7;

	res
}

//		mul_low
/// Multiplies two 256-bit values, keeping only the low 256 bits.
///
/// This is the schoolbook method with the partial products that can only
/// affect the discarded upper half skipped entirely.
///
pub(crate) const fn mul_low(x: &[u64; LIMBS], y: &[u64; LIMBS]) -> [u64; LIMBS] {
	let (carry, res0) = mul_wide(x[0], y[0]);
	let (carry, res1) = mul_hop(carry, x[1], y[0]);
	let (carry, res2) = mul_hop(carry, x[2], y[0]);
	let res3          = x[3].wrapping_mul(y[0]).wrapping_add(carry);

	let (carry, res1) = mul_hop(res1, x[0], y[1]);
	let (carry, res2) = mul_step(res2, x[1], y[1], carry);
	let res3          = res3.wrapping_add(x[2].wrapping_mul(y[1])).wrapping_add(carry);

	let (carry, res2) = mul_hop(res2, x[0], y[2]);
	let res3          = res3.wrapping_add(x[1].wrapping_mul(y[2])).wrapping_add(carry);

	let res3          = res3.wrapping_add(x[0].wrapping_mul(y[3]));

	[res0, res1, res2, res3]
}

//		reciprocal_2by1
/// Computes the reciprocal of a normalised divisor word.
///
/// The divisor must have its top bit set. The result is
/// `floor((2^128 - 1) / d) - 2^64`, i.e. the quotient of the two-word value
/// `<!d, !0>` by `d`, which always fits in a single word.
///
#[expect(clippy::cast_possible_truncation, reason = "Quotient fits in one word for a normalised divisor")]
#[expect(clippy::integer_division,         reason = "Intentional")]
pub(crate) const fn reciprocal_2by1(d: u64) -> u64 {
	let numerator = ((!d as u128) << 64) | u64::MAX as u128;
	(numerator / d as u128) as u64
}

//		udivrem_2by1
/// Divides the two-word value `<uh, ul>` by the normalised word `d`.
///
/// Uses the precomputed `reciprocal` of `d`, following "Improved division by
/// invariant integers" (Möller and Granlund), Algorithm 4. Requires `uh < d`.
/// Returns the quotient and the remainder.
///
pub(crate) const fn udivrem_2by1(uh: u64, ul: u64, d: u64, reciprocal: u64) -> (u64, u64) {
	let (qh, ql)    = mul_wide(reciprocal, uh);
	let (ql, carry) = add_carry(ql, ul, 0);
	let (qh, _)     = add_carry(qh, uh, carry);
	let mut qh      = qh.wrapping_add(1);

	let mut r = ul.wrapping_sub(qh.wrapping_mul(d));

	if r > ql {
		qh = qh.wrapping_sub(1);
		r  = r.wrapping_add(d);
	}

	if r >= d {
		qh = qh.wrapping_add(1);
		r  = r.wrapping_sub(d);
	}

	(qh, r)
}

//		udivrem_by1
/// Divides `u` by a single normalised word `d`.
///
/// The quotient is written to `quot`, which must hold at least `u.len() - 1`
/// words. The top word of `u` must already be less than `d`. Returns the
/// remainder.
///
pub(crate) fn udivrem_by1(quot: &mut [u64], u: &[u64], d: u64) -> u64 {
	let reciprocal = reciprocal_2by1(d);
	let mut rem    = u[u.len() - 1];
	for j in (0..u.len() - 1).rev() {
		(quot[j], rem) = udivrem_2by1(rem, u[j], d, reciprocal);
	}
	rem
}

//		add_to
/// Computes `x += y` over the length of `y`, returning the carry out.
///
/// Requires `x.len() >= y.len()`.
///
pub(crate) fn add_to(x: &mut [u64], y: &[u64]) -> u64 {
	let mut carry = 0;
	for (xi, &yi) in x.iter_mut().zip(y) {
		(*xi, carry) = add_carry(*xi, yi, carry);
	}
	carry
}

//		sub_mul_to
/// Computes `x -= y * multiplier` over the length of `y`, returning the word
/// that still has to be subtracted from the next word of `x`.
///
/// Requires `x.len() >= y.len()`.
///
pub(crate) fn sub_mul_to(x: &mut [u64], y: &[u64], multiplier: u64) -> u64 {
	let mut borrow = 0;
	for (xi, &yi) in x.iter_mut().zip(y) {
		let (s, carry1)  = sub_borrow(*xi, borrow, 0);
		let (ph, pl)     = mul_wide(yi, multiplier);
		let (t, carry2)  = sub_borrow(s, pl, 0);
		*xi              = t;
		//	ph is at most 2^64 - 2, so this cannot wrap
		borrow           = ph + carry1 + carry2;
	}
	borrow
}

//		udivrem_knuth
/// Divides `u` by the normalised multi-word divisor `d`, using Knuth's
/// Algorithm D (The Art of Computer Programming, Vol. 2, §4.3.1).
///
/// The quotient is written to `quot`, which must hold `u.len() - d.len()`
/// words. On return, the low `d.len()` words of `u` hold the (still
/// normalised) remainder. Requires `d.len() >= 2`, `u.len() > d.len()`, and
/// the top bit of the top word of `d` to be set.
///
pub(crate) fn udivrem_knuth(quot: &mut [u64], u: &mut [u64], d: &[u64]) {
	let d_len      = d.len();
	let dh         = d[d_len - 1];
	let dl         = d[d_len - 2];
	let reciprocal = reciprocal_2by1(dh);

	for j in (0..u.len() - d_len).rev() {
		let u2 = u[j + d_len];
		let u1 = u[j + d_len - 1];
		let u0 = u[j + d_len - 2];

		let mut qhat = if u2 >= dh {
			//	The estimate would not fit in a word
			u64::MAX
		} else {
			let (mut qhat, mut rhat) = udivrem_2by1(u2, u1, dh, reciprocal);

			//	The estimate is at most two too large; the second word of the
			//	divisor tells us whether to bring it down
			for _ in 0..2 {
				let (ph, pl) = mul_wide(qhat, dl);
				if ph < rhat || (ph == rhat && pl <= u0) {
					break;
				}
				qhat -= 1;
				let (sum, overflow) = rhat.overflowing_add(dh);
				if overflow {
					break;
				}
				rhat = sum;
			}
			qhat
		};

		//	Multiply and subtract
		let borrow      = sub_mul_to(&mut u[j..], d, qhat);
		u[j + d_len]    = u2.wrapping_sub(borrow);
		if u2 < borrow {
			//	Subtracted one divisor too many, so add it back
			qhat        -= 1;
			let carry    = add_to(&mut u[j..], d);
			u[j + d_len] = u[j + d_len].wrapping_add(carry);
		}

		quot[j] = qhat;
	}
}

//		significant_len
/// Number of words up to and including the most-significant non-zero word.
pub(crate) fn significant_len(x: &[u64]) -> usize {
	x.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

//		shl_carry
/// The bits shifted out of the top of `x` by a left shift of `shift`
/// (`0..64`) bits.
#[inline]
pub(crate) const fn shl_carry(x: u64, shift: u32) -> u64 {
	if shift == 0 { 0 } else { x >> (64 - shift) }
}

//		shr_carry
/// The bits shifted out of the bottom of `x` by a right shift of `shift`
/// (`0..64`) bits, positioned at the top of a word.
#[inline]
pub(crate) const fn shr_carry(x: u64, shift: u32) -> u64 {
	if shift == 0 { 0 } else { x << (64 - shift) }
}

//		udivrem
/// Divides `u` by `d`, writing the quotient to `quot` and returning the
/// remainder.
///
/// The divisor must not be zero. Both operands are normalised so that the top
/// word of the divisor has its high bit set, then either the single-word or
/// the Knuth loop is run, and the remainder is shifted back.
///
pub(crate) fn udivrem(quot: &mut [u64; LIMBS], u: &[u64; LIMBS], d: &[u64; LIMBS]) -> [u64; LIMBS] {
	let mut rem = [0_u64; LIMBS];
	let d_len   = significant_len(d);
	debug_assert!(d_len > 0, "Divisor must not be zero");

	let shift = d[d_len - 1].leading_zeros();

	let mut dn = [0_u64; LIMBS];
	for i in (1..d_len).rev() {
		dn[i] = (d[i] << shift) | shl_carry(d[i - 1], shift);
	}
	dn[0] = d[0] << shift;

	let u_len = significant_len(u);
	if u_len < d_len {
		rem.copy_from_slice(u);
		return rem;
	}

	let mut un = [0_u64; LIMBS + 1];
	un[u_len]  = shl_carry(u[u_len - 1], shift);
	for i in (1..u_len).rev() {
		un[i] = (u[i] << shift) | shl_carry(u[i - 1], shift);
	}
	un[0] = u[0] << shift;

	if d_len == 1 {
		let r  = udivrem_by1(quot, &un[..=u_len], dn[0]);
		rem[0] = r >> shift;
		return rem;
	}

	udivrem_knuth(quot, &mut un[..=u_len], &dn[..d_len]);

	for i in 0..d_len - 1 {
		rem[i] = (un[i] >> shift) | shr_carry(un[i + 1], shift);
	}
	rem[d_len - 1] = un[d_len - 1] >> shift;

	rem
}
