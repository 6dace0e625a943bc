//! Cooling model implementations.
//!
//! Models are implemented as small, pure functions so that the solver and the
//! plotting code can share them.

pub mod cooling;

pub use cooling::*;
