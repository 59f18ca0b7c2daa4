//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// A file that exists but can't be opened or parsed is reported as
/// `PersistCorrupt`.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ExpenseError::corrupt(path, format!("failed to open: {}", e))),
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| ExpenseError::corrupt(path, e))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched. Failures are
/// reported as `PersistWriteFailed`.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::write_failed(
                path,
                format!("failed to create directory {}: {}", parent.display(), e),
            )
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let result = write_and_sync(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| ExpenseError::write_failed(path, format!("failed to replace file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_and_sync<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), ExpenseError> {
    let file = File::create(temp_path).map_err(|e| {
        ExpenseError::write_failed(temp_path, format!("failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::write_failed(temp_path, format!("failed to serialize: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::write_failed(temp_path, format!("failed to flush: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::write_failed(temp_path, format!("failed to sync: {}", e)))?;

    Ok(())
}
