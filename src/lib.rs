/*!
Fixed-width multi-word integer arithmetic.

Provides stack-allocated unsigned [`Uint`] and signed two's-complement
[`Int`] integers over `N` 64-bit limbs, with aliases for the supported
64/128/192/256-bit widths ([`U64`]..[`U256`], [`I64`]..[`I256`]).

All values are plain `Copy` data: `N` little-endian limbs, no heap, no
hidden state. Arithmetic wraps modulo `2^(64 * N)` exactly like the native
fixed-width integers; division by zero and out-of-range shift amounts are
contract violations and panic.

Width-heterogeneous multiplication is available through [`mul`] and
[`imul`], which accept any operand widths and truncate the exact product to
the requested number of result limbs. Comparisons between different widths
behave as if the narrower operand were extended with its own fill
(zeroes for [`Uint`], sign bits for [`Int`]).
*/

#![cfg_attr(not(feature = "std"), no_std)]

pub mod arithmetic;
pub mod const_helpers;

pub use arithmetic::{
    int::{imul, Int, I128, I192, I256, I64},
    limb::Limb,
    uint::{gcd, mul, Uint, U128, U192, U256, U64},
};
