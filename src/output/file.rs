use crate::error::OutputError;
use crate::results::JobRecord;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Writes `records` as CSV to `path`, header row first
pub fn write_records(path: &Path, records: &[JobRecord]) -> Result<(), OutputError> {
    let io_error = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(io_error)?;
    Ok(())
}

/// Reads records back from a CSV file written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<JobRecord>, OutputError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader.deserialize().collect::<Result<Vec<JobRecord>, _>>()?;
    Ok(records)
}

/// Saves the run's records under `dir`.
///
/// Returns the written path, or `None` when there was nothing to write.
pub fn save_results(
    dir: &Path,
    file_name: &str,
    records: &[JobRecord],
) -> Result<Option<PathBuf>, OutputError> {
    if records.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(file_name);
    write_records(&path, records)?;
    Ok(Some(path))
}
