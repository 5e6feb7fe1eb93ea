//! # Workflows Module
//!
//! Top-level entry points of the library.
//!
//! - **Single Solve** ([`solve`]) - one request through the whole pipeline, returning
//!   every intermediate quantity in a [`solve::ConvectionReport`]
//! - **Sweep** ([`sweep`]) - many times or positions for the same body; the eigenvalues
//!   are solved once and the points are evaluated in parallel

pub mod solve;
pub mod sweep;
