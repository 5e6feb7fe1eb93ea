use crate::cli::ReportFormat;

pub struct DefaultsConfig {
    pub iterations: usize,
    pub distance: f64,
    pub time: f64,
    pub format: ReportFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            distance: 0.0,
            time: 0.0,
            format: ReportFormat::Json,
        }
    }
}
