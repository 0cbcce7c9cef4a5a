//! Core engine plumbing: deterministic random number generation.
//!
//! Kept separate from `game` so the vocabulary index can depend on the
//! RNG without pulling in the state machine.

pub mod rng;

pub use rng::{GameRng, GameRngState};
