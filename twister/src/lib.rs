//! Mersenne Twister RS - MT19937-64 Engine
//!
//! Deterministic, reproducible pseudo-random numbers from an integer seed.
//!
//! # Architecture
//!
//! - **rng**: The engine (seeding, twist, tempering) and the
//!   [`RandomSource`] surface it implements
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same stream, bit for bit
//! 2. Output matches the published MT19937-64 reference
//! 3. Unsupported operations return errors, never panic
//!
//! # Example
//!
//! ```rust
//! use mersenne_twister_rs::{Engine, RandomError, RandomSource};
//!
//! let mut rng = Engine::new(0);
//! assert_eq!(rng.next_long(), 2947667278772165694);
//!
//! let roll = rng.next_int_bounded(6).unwrap();
//! assert!((0..6).contains(&roll));
//!
//! assert!(matches!(
//!     rng.next_boolean(),
//!     Err(RandomError::UnsupportedOperation { .. })
//! ));
//! ```

pub mod rng;

// Re-exports for convenience
pub use rng::{Engine, RandomError, RandomSource, STATE_WORDS};
