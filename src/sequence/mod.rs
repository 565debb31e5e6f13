//! Sequence generation.
//!
//! The sequence grows by exactly one uniformly drawn signal per cleared
//! round. Draws are independent, so repeats are allowed.

pub mod generator;

pub use generator::{draw_signal, extend};
