//! Special functions needed by the cylindrical solution.
//!
//! Only real, finite arguments are supported. All routines are pure and keep no
//! state, so they can be called concurrently from any number of threads.

mod bessel;

pub use bessel::{bessel_j0, bessel_j1};
