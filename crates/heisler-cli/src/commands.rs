pub mod solve;
pub mod sweep;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const REQUEST: &str = r#"
thickness = 0.1
conductivity_coefficient = 10.0
convection_coefficient = 200.0
initial_temperature = 300.0
ambient_temperature = 20.0
density = 8000.0
specific_heat = 500.0
distance = 0.025
time = 500.0
geometry = "plate"
"#;

    pub fn request_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("request.toml");
        fs::write(&path, REQUEST).unwrap();
        path
    }
}
