//! Turning the `--db` argument into a `SQLite` URL sqlx can open.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum DbUrlError {
    #[error("invalid --db value: {0}")]
    Invalid(String),
    #[error("cannot create database file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Accepts `sqlite://...`, `sqlite:<path>` or a bare path; relative paths are
/// resolved against the working directory.
pub fn normalize_sqlite_url(raw: &str) -> Result<String, DbUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DbUrlError::Invalid(raw.to_string()));
    }
    if trimmed == MEMORY_URL || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_string());
    }

    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

/// sqlx will not create a missing file, so make sure it (and its directory)
/// exists before connecting.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), DbUrlError> {
    if db_url == MEMORY_URL {
        return Ok(());
    }
    let path = db_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
        .filter(|path| !path.is_empty())
        .ok_or_else(|| DbUrlError::Invalid(db_url.to_string()))?;
    let path = Path::new(path);

    let create = |source| DbUrlError::Create {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(create)?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(create)?;
    }
    Ok(())
}
