//! Deterministic random number generation
//!
//! Uses the 64-bit Mersenne Twister (MT19937-64) with reference constants.
//! The [`RandomSource`] trait exposes it through a general-purpose
//! random-number surface.

mod mt64;
mod source;

pub use mt64::{Engine, STATE_WORDS};
pub use source::{RandomError, RandomSource};
