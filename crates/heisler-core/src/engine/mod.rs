//! # Engine Module
//!
//! The numeric pipeline, one module per stage. Data flows strictly forward and
//! no stage keeps state between calls:
//!
//! - **Normalization** ([`params`]) - characteristic length, ξ, Fo, Bi and α
//! - **Energy Bound** ([`energy`]) - maximum transferable energy per geometry
//! - **Eigenvalues** ([`eigen`]) - fixed-length iteration for the first three roots
//! - **Series Terms** ([`series`]) - amplitude, decayed amplitude, local θ and flux per root
//! - **Aggregation** ([`aggregate`]) - componentwise three-term sum
//! - **Mapping** ([`result`]) - back to physical temperature and heat
//!
//! Supporting modules cover solver options ([`config`]), the error taxonomy
//! ([`error`]) and progress reporting for long workflows ([`progress`]).

pub mod aggregate;
pub mod config;
pub mod eigen;
pub mod energy;
pub mod error;
pub mod params;
pub mod progress;
pub mod result;
pub mod series;
