use crate::workflows::sweep::SweepPoint;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Writes sweep points as a CSV table with a header row.
pub fn write_sweep<W: Write>(writer: W, points: &[SweepPoint]) -> Result<(), ExportError> {
    let mut writer = ::csv::Writer::from_writer(writer);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush().map_err(|e| ExportError::Io {
        path: "<writer>".to_string(),
        source: e,
    })?;
    Ok(())
}

pub fn write_sweep_to_path(path: &Path, points: &[SweepPoint]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_sweep(file, points)
}
