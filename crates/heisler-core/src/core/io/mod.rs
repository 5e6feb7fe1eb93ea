//! File formats: TOML request documents in, CSV sweep tables out.

pub mod csv;
pub mod request;
