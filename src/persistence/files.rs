use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Environment variable that overrides the app directory
pub const DIR_ENV_VAR: &str = "FASTCLOCK_DIR";

/// Get the app directory - $FASTCLOCK_DIR if set, otherwise ~/.fastclock
pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".fastclock"))
}

/// Ensure the app directory exists
pub fn ensure_app_dir() -> Result<PathBuf> {
    let dir = get_app_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Path to settings.json (may not exist yet)
pub fn settings_file() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("settings.json"))
}

/// Path to the log file, creating the app directory if needed
pub fn log_file() -> Result<PathBuf> {
    Ok(ensure_app_dir()?.join("fastclock.log"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
