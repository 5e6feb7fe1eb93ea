use heisler::core::models::sample::MaterialSample;
use heisler::engine::config::SolverConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub sample: MaterialSample,
    pub solver: SolverConfig,
}
