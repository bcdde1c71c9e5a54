//! Multi-word integer arithmetic over fixed-width limb arrays.
//!
//! The unsigned [`Uint`] and signed [`Int`] types share the same storage:
//! `N` 64-bit limbs in little-endian order. [`limb`] holds the word-level
//! carry, borrow and widening-multiply primitives everything else is built
//! from.

pub mod int;
pub mod limb;
pub mod uint;

pub use int::Int;
pub use limb::Limb;
pub use uint::Uint;
