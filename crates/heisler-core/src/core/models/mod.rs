pub mod geometry;
pub mod sample;
pub mod series;
pub mod state;
