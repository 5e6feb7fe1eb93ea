//! # Heisler Core Library
//!
//! Transient one-dimensional heat conduction in a body suddenly exposed to a
//! convective environment, solved with the classical three-root series used to
//! build the Heisler charts. Three geometries are supported: the infinite slab
//! (plate), the long cylinder and the sphere.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable value types (`MaterialSample`,
//!   `DimensionlessState`, series terms), the Bessel functions needed by the
//!   cylinder, and file I/O for request files and sweep tables.
//!
//! - **[`engine`]: The Numeric Pipeline.** One module per pipeline stage:
//!   normalization into dimensionless groups, maximum transferable energy,
//!   eigenvalue iteration, per-root series terms, aggregation and the mapping
//!   back to physical units. Every stage is a pure function.
//!
//! - **[`workflows`]: The Public API.** `solve` runs the whole pipeline for one
//!   request; `sweep` evaluates many times or positions against a single
//!   eigenvalue set in parallel.

pub mod core;
pub mod engine;
pub mod workflows;
