//! Key-pair synthesis: random candidate draws, modular Gauss-Jordan
//! elimination, and the retry loop tying them together.

pub mod candidate;
pub mod elimination;
pub mod keys;

pub use candidate::Candidate;
pub use keys::{KeyPair, synthesize, synthesize_with_order};
