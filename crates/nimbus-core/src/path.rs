use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const WORKSPACE_ENV: &str = "NIMBUS_PATH";

const APP_DIR: &str = "nimbus";
const HOME_DIR: &str = ".nimbus";

/// Pick the workspace: `--config-dir`, then a non-empty `NIMBUS_PATH`, then
/// `<config dir>/nimbus`, then `~/.nimbus`. User-given paths may start with `~`.
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    let requested = explicit_path
        .map(str::to_string)
        .or_else(|| std::env::var(WORKSPACE_ENV).ok().filter(|p| !p.is_empty()));
    if let Some(path) = requested {
        return Ok(expand_tilde(&path));
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .or_else(|| dirs::home_dir().map(|home| home.join(HOME_DIR)))
        .ok_or_else(|| Error::Config("no config or home directory for the workspace".to_string()))
}

/// Replace a leading `~` (alone or followed by `/`) with the home directory.
/// `~user` forms are left alone.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home_relative = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(rest) => rest.strip_prefix('/'),
        None => None,
    };
    match (home_relative, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Size of a file, or the summed size of every regular file below a
/// directory. Symlinks are not followed.
pub fn get_path_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_file() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|err| match err.into_io_error() {
            Some(io) => Error::Io(io),
            None => Error::Config("filesystem loop while walking directory".to_string()),
        })?;
        if entry.file_type().is_file() {
            total += entry.metadata().map_err(std::io::Error::from)?.len();
        }
    }

    tracing::debug!(path = %path.display(), total, "measured path size");
    Ok(total)
}
