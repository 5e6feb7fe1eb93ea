//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Value Types** ([`models`]) - geometry tags, validated samples, dimensionless
//!   state and the series/result value objects
//! - **Special Functions** ([`special`]) - Bessel functions of the first kind
//! - **File I/O** ([`io`]) - TOML request files and CSV sweep tables

pub mod io;
pub mod models;
pub mod special;
