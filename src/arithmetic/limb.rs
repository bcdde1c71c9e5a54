//! Word-level primitives: add-with-carry, subtract-with-borrow and the
//! 64×64→128 widening multiply that the multi-word routines are built from.
//!
//! Every primitive that has a hardware-assisted variant also has a portable
//! one, and the two must agree bit-for-bit (see the tests at the bottom).

use num_traits::{ConstOne, ConstZero};

/// A single 64-bit storage word.
pub type Limb = u64;

/// Little-endian limb array backing an `N`-word integer.
pub type Limbs<const N: usize> = [Limb; N];

/// Double-width limb, holding the full result of a widening operation.
pub type WideLimb = u128;

/// Multiply two [`Limb`]s and return the full double-width product.
#[inline(always)]
#[must_use]
pub const fn widening_mul(a: Limb, b: Limb) -> WideLimb {
    #[cfg(not(target_family = "wasm"))]
    {
        a as WideLimb * b as WideLimb
    }
    #[cfg(target_family = "wasm")]
    {
        widening_mul_half_words(a, b)
    }
}

/// Widening multiply built from four 32-bit half-word products.
///
/// WebAssembly has no cheap 128-bit multiply, so the product is assembled
/// from `u64` half-word multiplications that cannot overflow.
#[inline(always)]
#[allow(dead_code)]
const fn widening_mul_half_words(a: Limb, b: Limb) -> WideLimb {
    let a_lo = a as u32 as Limb;
    let a_hi = a >> 32;
    let b_lo = b as u32 as Limb;
    let b_hi = b >> 32;

    let lolo = (a_lo * b_lo) as WideLimb;
    let lohi = ((a_lo * b_hi) as WideLimb) << 32;
    let hilo = ((a_hi * b_lo) as WideLimb) << 32;
    let hihi = ((a_hi * b_hi) as WideLimb) << 64;
    (lolo | hihi) + (lohi + hilo)
}

/// Calculate `acc + (a * b) + carry`, returning the least significant limb
/// and the new carry limb.
///
/// The inner step of schoolbook multiplication. Cannot overflow: the sum is
/// at most `(2^64 - 1)^2 + 2 * (2^64 - 1) < 2^128`.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(
    acc: Limb,
    a: Limb,
    b: Limb,
    carry: Limb,
) -> (Limb, Limb) {
    let tmp = acc as WideLimb + widening_mul(a, b) + carry as WideLimb;
    (tmp as Limb, (tmp >> Limb::BITS) as Limb)
}

/// Calculate `a + b + carry`, returning the sum limb and the new carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + b as WideLimb + carry as WideLimb;
    (tmp as Limb, (tmp >> Limb::BITS) as Limb)
}

/// Calculate `a - b - borrow`, returning the difference limb and the new
/// borrow.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp = (WideLimb::ONE << Limb::BITS) + a as WideLimb
        - b as WideLimb
        - borrow as WideLimb;
    let borrow = if tmp >> Limb::BITS == 0 { Limb::ONE } else { Limb::ZERO };
    (tmp as Limb, borrow)
}

/// Sets `a = a + b + carry` and returns the new carry.
#[inline(always)]
#[allow(unused_mut)]
pub fn adc_assign(a: &mut Limb, b: Limb, carry: bool) -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[allow(unsafe_code)]
    unsafe {
        use core::arch::x86_64::_addcarry_u64;
        _addcarry_u64(u8::from(carry), *a, b, a) != 0
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "asm")))]
    {
        let (sum, carry1) = a.overflowing_add(b);
        let (sum, carry2) = sum.overflowing_add(Limb::from(carry));
        *a = sum;
        carry1 | carry2
    }
}

/// Sets `a = a - b - borrow` and returns the new borrow.
#[inline(always)]
#[allow(unused_mut)]
pub fn sbb_assign(a: &mut Limb, b: Limb, borrow: bool) -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "asm"))]
    #[allow(unsafe_code)]
    unsafe {
        use core::arch::x86_64::_subborrow_u64;
        _subborrow_u64(u8::from(borrow), *a, b, a) != 0
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "asm")))]
    {
        let (diff, borrow1) = a.overflowing_sub(b);
        let (diff, borrow2) = diff.overflowing_sub(Limb::from(borrow));
        *a = diff;
        borrow1 | borrow2
    }
}
