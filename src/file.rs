// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::csv::{write_records, write_rows};
use crate::store::DataSet;

/// Write a table with its header row. Parent directories are created.
/// Returns the path written to.
pub fn write_dataset(path: &Path, ds: &DataSet) -> Result<PathBuf, Box<dyn Error>> {
    ensure_parent(path)?;
    let out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_rows(out, &ds.headers, &ds.rows)?;
    logf!("Wrote {} rows to {}", ds.rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// Write serde records (header from field names). Parent directories are created.
pub fn write_serialized<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<PathBuf, Box<dyn Error>> {
    ensure_parent(path)?;
    let out = BufWriter::new(File::create(path)?);
    write_records(out, records)?;
    logf!("Wrote {} rows to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p))
}
