//! Signed fixed-width integers: two's-complement [`Int`] over `N` 64-bit
//! limbs, together with the exact-width aliases [`I64`], [`I128`], [`I192`]
//! and [`I256`].
//!
//! Storage is identical to [`Uint`]; the sign is the top bit of the highest
//! limb. Addition, subtraction and same-width multiplication are
//! sign-agnostic limb operations; the remaining routines normalize through
//! [`Int::unsigned_abs`] and reuse the unsigned kernels.

use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, UpperHex},
    hash::{Hash, Hasher},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem,
        RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

use num_traits::ConstZero;

use crate::{
    arithmetic::{
        limb,
        limb::{Limb, Limbs},
        uint::{mul, Uint},
    },
    const_for,
};

/// Stack-allocated signed fixed-width integer over `N` 64-bit limbs.
///
/// Two's complement over the same little-endian storage as [`Uint`]; the
/// sign is the most significant bit of `limbs[N - 1]`. All arithmetic wraps
/// modulo `2^(64 * N)`, exactly like the native signed integer types.
#[derive(Copy, Clone)]
pub struct Int<const N: usize> {
    pub(crate) limbs: Limbs<N>,
}

impl<const N: usize> Default for Int<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declare an [`Int`] alias for an exact bit width.
macro_rules! declare_signed {
    ($name:ident, $bits:expr) => {
        #[doc = "Signed two's-complement integer with "]
        #[doc = stringify!($bits)]
        #[doc = " bits."]
        pub type $name = Int<{ $bits / Limb::BITS as usize }>;
    };
}

declare_signed!(I64, 64);
declare_signed!(I128, 128);
declare_signed!(I192, 192);
declare_signed!(I256, 256);

impl<const N: usize> Int<N> {
    /// Width of the integer in bits.
    pub const BITS: usize = N * Limb::BITS as usize;
    /// Largest representable value, `2^(64 * N - 1) - 1`.
    pub const MAX: Self = {
        let mut max = Self { limbs: [Limb::MAX; N] };
        max.limbs[N - 1] = Limb::MAX >> 1;
        max
    };
    /// Smallest representable value, `-2^(64 * N - 1)`.
    pub const MIN: Self = {
        let mut min = Self::ZERO;
        min.limbs[N - 1] = 1 << (Limb::BITS - 1);
        min
    };
    /// The value `1`.
    pub const ONE: Self = {
        let mut one = Self::ZERO;
        one.limbs[0] = 1;
        one
    };
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [Limb::ZERO; N] };

    /// Create a new [`Int`] from the provided `limbs` (constant).
    #[must_use]
    pub const fn new(limbs: [Limb; N]) -> Self {
        Self { limbs }
    }

    /// Returns a reference to the inner limb array (constant).
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        &self.limbs
    }

    /// Returns the least significant limb reinterpreted as `i64`
    /// (constant).
    ///
    /// For `N == 1` this is the whole value; wider values truncate.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn low_i64(&self) -> i64 {
        self.limbs[0] as i64
    }

    /// Checks whether `self` is zero (constant).
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        Uint::new(self.limbs).is_zero()
    }

    /// Checks whether `self` is negative, i.e. the sign bit is set
    /// (constant).
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.limbs[N - 1] >> (Limb::BITS - 1) != 0
    }

    /// Returns `-1`, `0` or `1` according to the sign of `self` (constant).
    #[must_use]
    pub const fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Reinterpret the limbs as an unsigned integer of the same width
    /// (constant).
    #[must_use]
    pub const fn cast_unsigned(self) -> Uint<N> {
        Uint::new(self.limbs)
    }

    /// The magnitude of `self` as an unsigned integer: bitwise NOT plus
    /// one for negative values (constant).
    ///
    /// The magnitude of [`Int::MIN`] does not fit the signed range but
    /// does fit [`Uint`].
    #[must_use]
    pub const fn unsigned_abs(self) -> Uint<N> {
        if self.is_negative() {
            Uint::new(self.limbs).wrapping_neg()
        } else {
            Uint::new(self.limbs)
        }
    }

    /// Convert to `M` limbs: sign-extend when widening, keep the low `M`
    /// limbs when narrowing (constant).
    #[must_use]
    pub const fn resize<const M: usize>(&self) -> Int<M> {
        let fill = if self.is_negative() { Limb::MAX } else { Limb::ZERO };
        let mut limbs = [fill; M];
        let overlap = if M < N { M } else { N };
        const_for!((i in 0..overlap) {
            limbs[i] = self.limbs[i];
        });
        Int { limbs }
    }

    /// Add `rhs` to `self`, wrapping on overflow; the limb chain is the
    /// same as the unsigned one (constant).
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, rhs: &Self) -> Self {
        Uint::new(self.limbs)
            .wrapping_add(&Uint::new(rhs.limbs))
            .cast_signed()
    }

    /// Subtract `rhs` from `self`, wrapping on overflow (constant).
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: &Self) -> Self {
        Uint::new(self.limbs)
            .wrapping_sub(&Uint::new(rhs.limbs))
            .cast_signed()
    }

    /// Two's-complement negation; [`Int::MIN`] negates to itself
    /// (constant).
    #[inline]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Uint::new(self.limbs).wrapping_neg().cast_signed()
    }

    /// Shift left by `shift` bits (constant).
    ///
    /// # Panics
    ///
    /// Panics unless `shift < 64 * N`.
    #[must_use]
    pub const fn shl(self, shift: u32) -> Self {
        Uint::new(self.limbs).shl(shift).cast_signed()
    }

    /// Arithmetic shift right by `shift` bits; vacated high bits replicate
    /// the sign bit (constant).
    ///
    /// # Panics
    ///
    /// Panics unless `shift < 64 * N`.
    #[must_use]
    pub const fn shr(self, shift: u32) -> Self {
        let fill = if self.is_negative() { Limb::MAX } else { Limb::ZERO };
        Uint::new(self.limbs).shr_with_fill(shift, fill).cast_signed()
    }

    /// Number of zero bits above the most significant one bit (constant).
    #[must_use]
    pub const fn leading_zeros(&self) -> u32 {
        Uint::new(self.limbs).leading_zeros()
    }

    /// Number of one bits above the most significant zero bit (constant).
    #[must_use]
    pub const fn leading_ones(&self) -> u32 {
        Uint::new(self.limbs).leading_ones()
    }

    /// Number of zero bits below the least significant one bit (constant).
    #[must_use]
    pub const fn trailing_zeros(&self) -> u32 {
        Uint::new(self.limbs).trailing_zeros()
    }

    /// Number of one bits below the least significant zero bit (constant).
    #[must_use]
    pub const fn trailing_ones(&self) -> u32 {
        Uint::new(self.limbs).trailing_ones()
    }

    /// Add `1` in place, rippling the carry across limbs.
    pub fn increment(&mut self) {
        for limb in &mut self.limbs {
            let (value, carry) = limb.overflowing_add(1);
            *limb = value;
            if !carry {
                break;
            }
        }
    }

    /// Subtract `1` in place, rippling the borrow across limbs.
    pub fn decrement(&mut self) {
        for limb in &mut self.limbs {
            let (value, borrow) = limb.overflowing_sub(1);
            *limb = value;
            if !borrow {
                break;
            }
        }
    }

    /// Quotient and remainder of `self / rhs`.
    ///
    /// The magnitudes divide through the unsigned routine; the quotient
    /// truncates toward zero and the remainder carries the dividend's sign,
    /// matching the native integer division convention.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "division by zero");
        let (q, r) = self.unsigned_abs().div_rem(&rhs.unsigned_abs());
        let mut quotient = q.cast_signed();
        if self.is_negative() != rhs.is_negative() {
            quotient = quotient.wrapping_neg();
        }
        let mut remainder = r.cast_signed();
        if self.is_negative() {
            remainder = remainder.wrapping_neg();
        }
        (quotient, remainder)
    }

    /// Lossy conversion to `f64`, magnitude and sign.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.unsigned_abs().to_f64();
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Low `R` limbs of the signed `A x B`-limb product, in two's complement.
///
/// Same-width products go straight through the unsigned kernel; for
/// heterogeneous widths the magnitudes multiply and the result is negated
/// when the operand signs differ. The 128-bit same-width case delegates to
/// the native `i128` multiply; the generic path computes the identical
/// bits (see the tests).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn imul<const R: usize, const A: usize, const B: usize>(
    lhs: &Int<A>,
    rhs: &Int<B>,
) -> Int<R> {
    if R == 2 && A == 2 && B == 2 {
        let l = (lhs.limbs[0] as u128 | (lhs.limbs[1] as u128) << 64) as i128;
        let r = (rhs.limbs[0] as u128 | (rhs.limbs[1] as u128) << 64) as i128;
        let product = l.wrapping_mul(r) as u128;
        let mut limbs = [Limb::ZERO; R];
        limbs[0] = product as Limb;
        limbs[1] = (product >> Limb::BITS) as Limb;
        return Int::new(limbs);
    }
    imul_schoolbook(lhs, rhs)
}

/// Generic schoolbook path of [`imul`].
const fn imul_schoolbook<const R: usize, const A: usize, const B: usize>(
    lhs: &Int<A>,
    rhs: &Int<B>,
) -> Int<R> {
    if A == R && B == R {
        // Truncated to the operand width, the two's-complement product is
        // bit-identical to the unsigned one.
        return mul::<R, A, B>(&Uint::new(lhs.limbs), &Uint::new(rhs.limbs))
            .cast_signed();
    }
    let negative = lhs.is_negative() != rhs.is_negative();
    let product = mul::<R, A, B>(&lhs.unsigned_abs(), &rhs.unsigned_abs());
    let product =
        if negative { product.wrapping_neg() } else { product };
    product.cast_signed()
}

// ----------- From Impls -----------

macro_rules! impl_int_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Int<N> {
            #[doc = "Create an [`Int`] from an `"]
            #[doc = stringify!($int)]
            #[doc = "`, sign-extending into the higher limbs (constant)."]
            #[must_use]
            #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
            pub const fn $func_name(val: $int) -> Self {
                assert!(N >= 1, "number of limbs must be greater than zero");
                let fill = if val < 0 { Limb::MAX } else { Limb::ZERO };
                let mut repr = Self { limbs: [fill; N] };
                repr.limbs[0] = val as i64 as u64;
                repr
            }
        }

        impl<const N: usize> From<$int> for Int<N> {
            #[inline]
            fn from(val: $int) -> Self {
                Self::$func_name(val)
            }
        }
    };
}

impl_int_from_primitive!(i8, from_i8);
impl_int_from_primitive!(i16, from_i16);
impl_int_from_primitive!(i32, from_i32);
impl_int_from_primitive!(i64, from_i64);
impl_int_from_primitive!(isize, from_isize);

// `i128` spans two limbs, so it does not fit the macro above.
impl<const N: usize> Int<N> {
    /// Create an [`Int`] from an `i128` (constant).
    ///
    /// # Panics
    ///
    /// Panics when the value does not fit in `N` limbs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_i128(val: i128) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        let fill = if val < 0 { Limb::MAX } else { Limb::ZERO };
        let mut repr = Self { limbs: [fill; N] };
        repr.limbs[0] = val as u64;
        if N >= 2 {
            repr.limbs[1] = (val >> Limb::BITS) as u64;
        } else {
            assert!(val as i64 as i128 == val, "i128 is too large to fit");
        }
        repr
    }
}

impl<const N: usize> From<i128> for Int<N> {
    #[inline]
    fn from(val: i128) -> Self {
        Self::from_i128(val)
    }
}

// ----------- Comparison -----------

const fn sign_fill<const N: usize>(limbs: &Limbs<N>) -> Limb {
    if limbs[N - 1] >> (Limb::BITS - 1) != 0 {
        Limb::MAX
    } else {
        Limb::ZERO
    }
}

/// Signed comparison of two limb patterns of possibly different widths,
/// reading missing high limbs as each operand's own sign extension.
fn cmp_sign_extended<const N: usize, const M: usize>(
    lhs: &Limbs<N>,
    rhs: &Limbs<M>,
) -> Ordering {
    let lhs_fill = sign_fill(lhs);
    let rhs_fill = sign_fill(rhs);
    // Differing signs decide immediately.
    match (lhs_fill != 0, rhs_fill != 0) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }
    // Same sign: the raw two's-complement patterns order like unsigned.
    let width = if N > M { N } else { M };
    for i in (0..width).rev() {
        let a = if i < N { lhs[i] } else { lhs_fill };
        let b = if i < M { rhs[i] } else { rhs_fill };
        match a.cmp(&b) {
            Ordering::Equal => {}
            order => return order,
        }
    }
    Ordering::Equal
}

impl<const N: usize, const M: usize> PartialEq<Int<M>> for Int<N> {
    fn eq(&self, rhs: &Int<M>) -> bool {
        cmp_sign_extended(&self.limbs, &rhs.limbs) == Ordering::Equal
    }
}

impl<const N: usize> Eq for Int<N> {}

impl<const N: usize, const M: usize> PartialOrd<Int<M>> for Int<N> {
    fn partial_cmp(&self, rhs: &Int<M>) -> Option<Ordering> {
        Some(cmp_sign_extended(&self.limbs, &rhs.limbs))
    }
}

impl<const N: usize> Ord for Int<N> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        cmp_sign_extended(&self.limbs, &rhs.limbs)
    }
}

impl<const N: usize> PartialEq<i64> for Int<N> {
    #[allow(clippy::cast_sign_loss)]
    fn eq(&self, rhs: &i64) -> bool {
        cmp_sign_extended(&self.limbs, &[*rhs as u64]) == Ordering::Equal
    }
}

impl<const N: usize> PartialEq<Int<N>> for i64 {
    fn eq(&self, rhs: &Int<N>) -> bool {
        rhs == self
    }
}

impl<const N: usize> PartialOrd<i64> for Int<N> {
    #[allow(clippy::cast_sign_loss)]
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        Some(cmp_sign_extended(&self.limbs, &[*rhs as u64]))
    }
}

impl<const N: usize> PartialOrd<Int<N>> for i64 {
    #[allow(clippy::cast_sign_loss)]
    fn partial_cmp(&self, rhs: &Int<N>) -> Option<Ordering> {
        Some(cmp_sign_extended(&[*self as u64], &rhs.limbs))
    }
}

impl<const N: usize> Hash for Int<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

// ----------- Arithmetic Operators -----------

impl<const N: usize> Add for Int<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }
}

impl<const N: usize> AddAssign for Int<N> {
    fn add_assign(&mut self, rhs: Self) {
        // Two's complement shares the unsigned carry chain.
        let mut carry = false;
        for i in 0..N {
            carry = limb::adc_assign(&mut self.limbs[i], rhs.limbs[i], carry);
        }
    }
}

impl<const N: usize> Sub for Int<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(&rhs)
    }
}

impl<const N: usize> SubAssign for Int<N> {
    fn sub_assign(&mut self, rhs: Self) {
        let mut borrow = false;
        for i in 0..N {
            borrow =
                limb::sbb_assign(&mut self.limbs[i], rhs.limbs[i], borrow);
        }
    }
}

impl<const N: usize> Neg for Int<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const N: usize> Mul for Int<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        imul::<N, N, N>(&self, &rhs)
    }
}

impl<const N: usize> MulAssign for Int<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = imul::<N, N, N>(self, &rhs);
    }
}

impl<const N: usize> Div for Int<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.div_rem(&rhs).0
    }
}

impl<const N: usize> DivAssign for Int<N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.div_rem(&rhs).0;
    }
}

impl<const N: usize> Rem for Int<N> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.div_rem(&rhs).1
    }
}

impl<const N: usize> RemAssign for Int<N> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.div_rem(&rhs).1;
    }
}

impl<const N: usize> Shl<u32> for Int<N> {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        Self::shl(self, shift)
    }
}

impl<const N: usize> ShlAssign<u32> for Int<N> {
    fn shl_assign(&mut self, shift: u32) {
        *self = Self::shl(*self, shift);
    }
}

impl<const N: usize> Shr<u32> for Int<N> {
    type Output = Self;

    fn shr(self, shift: u32) -> Self {
        Self::shr(self, shift)
    }
}

impl<const N: usize> ShrAssign<u32> for Int<N> {
    fn shr_assign(&mut self, shift: u32) {
        *self = Self::shr(*self, shift);
    }
}

// ----------- Bitwise Operators -----------

impl<B: Borrow<Self>, const N: usize> BitXorAssign<B> for Int<N> {
    fn bitxor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] ^= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitXor<B> for Int<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitAndAssign<B> for Int<N> {
    fn bitand_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] &= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitAnd<B> for Int<N> {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitOrAssign<B> for Int<N> {
    fn bitor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] |= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitOr<B> for Int<N> {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<const N: usize> Not for Int<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        let mut result = Self::ZERO;
        for i in 0..N {
            result.limbs[i] = !self.limbs[i];
        }
        result
    }
}

// ----------- Formatting -----------

impl<const N: usize> UpperHex for Int<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        // Raw two's-complement pattern, like the unsigned type.
        UpperHex::fmt(&Uint::new(self.limbs), f)
    }
}

impl<const N: usize> Display for Int<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:X}")
    }
}

impl<const N: usize> Debug for Int<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self}")
    }
}

impl<const N: usize> AsRef<[u64]> for Int<N> {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.limbs
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use proptest::prelude::*;

    use super::*;

    fn to_bigint<const N: usize>(value: &Int<N>) -> BigInt {
        let magnitude = value.unsigned_abs();
        let mut bytes = Vec::with_capacity(N * 8);
        for limb in magnitude.as_limbs() {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        let magnitude = BigInt::from(BigUint::from_bytes_le(&bytes));
        if value.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Reduces mod `2^(64 * N)` and reinterprets as two's complement.
    fn from_bigint<const N: usize>(value: &BigInt) -> Int<N> {
        let modulus = BigInt::from(1u8) << (64 * N);
        let reduced = ((value % &modulus) + &modulus) % &modulus;
        let bytes = reduced.to_biguint().unwrap().to_bytes_le();
        let mut limbs = [0u64; N];
        for (i, &byte) in bytes.iter().enumerate().take(N * 8) {
            limbs[i / 8] |= u64::from(byte) << (8 * (i % 8));
        }
        Int::new(limbs)
    }

    fn to_i128(value: &Int<2>) -> i128 {
        (u128::from(value.limbs[0]) | u128::from(value.limbs[1]) << 64)
            as i128
    }

    #[test]
    fn from_i64_sign_extends() {
        let minus_one = Int::<4>::from(-1i64);
        assert_eq!(minus_one.limbs, [u64::MAX; 4]);
        assert!(minus_one.is_negative());
        assert_eq!(minus_one.signum(), -1);

        let five = Int::<4>::from(5i64);
        assert_eq!(five.limbs, [5, 0, 0, 0]);
        assert_eq!(five.signum(), 1);
        assert_eq!(Int::<4>::ZERO.signum(), 0);
    }

    #[test]
    fn widening_imul_of_small_negatives() {
        let a = Int::<1>::from(-3i64);
        let b = Int::<1>::from(5i64);
        let product: Int<2> = imul(&a, &b);
        assert_eq!(product, Int::<2>::from(-15i64));
        assert_eq!(product.limbs, [(-15i64) as u64, u64::MAX]);
    }

    #[test]
    fn arithmetic_shift_keeps_sign() {
        let minus_one = Int::<1>::from(-1i64);
        assert_eq!(minus_one >> 1, minus_one);

        // The bit-identical unsigned value shifts in zeroes instead.
        let all_ones = minus_one.cast_unsigned();
        assert_eq!(all_ones >> 1, Uint::<1>::from(u64::MAX >> 1));
    }

    #[test]
    fn imul_fast_path_matches_schoolbook() {
        proptest!(|(a: [u64; 2], b: [u64; 2])| {
            let a = Int::new(a);
            let b = Int::new(b);
            let fast: Int<2> = imul(&a, &b);
            let generic: Int<2> = imul_schoolbook(&a, &b);
            prop_assert_eq!(fast.limbs, generic.limbs);
            prop_assert_eq!(
                to_i128(&fast),
                to_i128(&a).wrapping_mul(to_i128(&b))
            );
        });
    }

    #[test]
    fn heterogeneous_imul_matches_oracle() {
        proptest!(|(a: [u64; 2], b: i64)| {
            let a = Int::new(a);
            let b = Int::<1>::from(b);
            let exact = to_bigint(&a) * to_bigint(&b);
            prop_assert_eq!(imul::<4, 2, 1>(&a, &b), from_bigint::<4>(&exact));
            prop_assert_eq!(imul::<3, 2, 1>(&a, &b), from_bigint::<3>(&exact));
            prop_assert_eq!(imul::<2, 2, 1>(&a, &b), from_bigint::<2>(&exact));
        });
    }

    #[test]
    fn same_width_arithmetic_matches_i128() {
        proptest!(|(a: [u64; 2], b: [u64; 2])| {
            let a = Int::new(a);
            let b = Int::new(b);
            let (x, y) = (to_i128(&a), to_i128(&b));
            prop_assert_eq!(to_i128(&(a + b)), x.wrapping_add(y));
            prop_assert_eq!(to_i128(&(a - b)), x.wrapping_sub(y));
            prop_assert_eq!(to_i128(&(a * b)), x.wrapping_mul(y));
            prop_assert_eq!(to_i128(&(-a)), x.wrapping_neg());
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));

            let mut sum = a;
            sum += b;
            prop_assert_eq!(sum, a + b);
            let mut diff = a;
            diff -= b;
            prop_assert_eq!(diff, a - b);
        });
    }

    #[test]
    fn division_truncates_toward_zero() {
        proptest!(|(a: [u64; 2], b: [u64; 2])| {
            let a = Int::new(a);
            let b = Int::new(b);
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            let (x, y) = (to_i128(&a), to_i128(&b));
            prop_assert_eq!(to_i128(&q), x.wrapping_div(y));
            prop_assert_eq!(to_i128(&r), x.wrapping_rem(y));
            prop_assert_eq!(q * b + r, a);
        });
    }

    #[test]
    fn division_identity_holds_for_wide_values() {
        proptest!(|(a: [u64; 3], b: [u64; 3])| {
            let a = Int::new(a);
            let b = Int::new(b);
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q * b + r, a);
            // The remainder carries the dividend's sign.
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
            prop_assert!(r.unsigned_abs() < b.unsigned_abs());
        });
    }

    #[test]
    fn min_division_edge_cases() {
        let min = Int::<2>::MIN;
        let minus_one = Int::<2>::from(-1i64);
        let (q, r) = min.div_rem(&minus_one);
        assert_eq!(q, min);
        assert_eq!(r, Int::<2>::ZERO);
        assert_eq!(min.wrapping_neg(), min);
    }

    #[test]
    #[should_panic = "division by zero"]
    fn division_by_zero_panics() {
        let _ = Int::<2>::ONE.div_rem(&Int::ZERO);
    }

    #[test]
    fn shifts_match_i128() {
        proptest!(|(limbs: [u64; 2], shift in 0u32..128)| {
            let a = Int::new(limbs);
            let x = to_i128(&a);
            prop_assert_eq!(to_i128(&(a >> shift)), x >> shift);
            prop_assert_eq!(to_i128(&(a << shift)), x.wrapping_shl(shift));
        });
    }

    #[test]
    #[should_panic = "shift amount out of range"]
    fn shift_out_of_range_panics() {
        let _ = Int::<2>::ONE << 128;
    }

    #[test]
    fn heterogeneous_compare_agrees_with_resize() {
        proptest!(|(a: u64, b: [u64; 4])| {
            let a = Int::<1>::new([a]);
            let b = Int::new(b);
            prop_assert_eq!(
                a.partial_cmp(&b),
                Some(a.resize::<4>().cmp(&b))
            );
            prop_assert_eq!(a == b, a.resize::<4>() == b);
        });
    }

    #[test]
    fn compare_against_native_i64() {
        let a = Int::<3>::from(-7i64);
        assert!(a == -7i64);
        assert!(a < 0i64);
        assert!(a < 3i64);
        assert!(-8i64 < a);
        assert!(Int::<3>::MAX > 0i64);
    }

    #[test]
    fn resize_sign_extends_and_truncates() {
        let a = Int::<1>::from(-5i64);
        assert_eq!(a.resize::<3>(), Int::<3>::from(-5i64));
        assert_eq!(a.resize::<3>().resize::<1>(), a);

        let b = Int::<2>::from(7i64);
        assert_eq!(b.resize::<4>(), Int::<4>::from(7i64));
    }

    #[test]
    fn increment_crosses_the_sign_boundary() {
        let mut value = Int::<2>::from(-1i64);
        value.increment();
        assert_eq!(value, Int::<2>::ZERO);
        value.decrement();
        assert_eq!(value, Int::<2>::from(-1i64));

        let mut max = Int::<2>::MAX;
        max.increment();
        assert_eq!(max, Int::<2>::MIN);
    }

    #[test]
    fn counting_on_negative_values() {
        let minus_one = Int::<2>::from(-1i64);
        assert_eq!(minus_one.leading_ones(), 128);
        assert_eq!(minus_one.trailing_ones(), 128);
        assert_eq!(minus_one.leading_zeros(), 0);
        assert_eq!(Int::<2>::ZERO.leading_zeros(), 128);
    }

    #[test]
    fn unsigned_abs_of_extremes() {
        assert_eq!(
            Int::<2>::MIN.unsigned_abs(),
            Uint::<2>::new([0, 1 << 63])
        );
        assert_eq!(Int::<2>::from(-2i64).unsigned_abs(), Uint::<2>::from(2u64));
        assert_eq!(Int::<2>::from(2i64).unsigned_abs(), Uint::<2>::from(2u64));
    }

    #[test]
    fn casts_reinterpret_limbs() {
        let value = Int::<2>::from(-1i64);
        assert_eq!(value.cast_unsigned(), Uint::<2>::MAX);
        assert_eq!(value.cast_unsigned().cast_signed(), value);
        assert_eq!(value.low_i64(), -1);
    }

    #[test]
    fn to_f64_carries_the_sign() {
        assert_eq!(Int::<2>::from(-5i64).to_f64(), -5.0);
        assert_eq!(Int::<2>::from(5i64).to_f64(), 5.0);
        assert_eq!(Int::<2>::ZERO.to_f64(), 0.0);
    }

    #[test]
    fn from_i128_splits_limbs() {
        let value = Int::<3>::from(-1i128);
        assert_eq!(value, Int::<3>::from(-1i64));

        let value = Int::<2>::from(i128::MIN);
        assert_eq!(value, Int::<2>::MIN);

        proptest!(|(val: i128)| {
            let value = Int::<2>::from(val);
            prop_assert_eq!(to_i128(&value), val);
        });
    }
}
