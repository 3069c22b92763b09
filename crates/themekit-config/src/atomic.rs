//! Atomic file writes shared by the config and theme writers.

use std::path::Path;

use themekit_common::ConfigError;

/// Write `content` to `path` via a sibling `.tmp` file and a rename.
///
/// Parent directories are created as needed. If the rename fails the
/// content is written directly.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::WriteError(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    std::fs::write(tmp_path, content).map_err(|e| {
        ConfigError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(tmp_path, path) {
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        let direct = std::fs::write(path, content);
        remove_tmp(tmp_path);
        direct.map_err(|e2| {
            ConfigError::WriteError(format!("failed to write {}: {e2}", path.display()))
        })?;
    }

    Ok(())
}

fn remove_tmp(tmp_path: &Path) {
    if let Err(e) = std::fs::remove_file(tmp_path) {
        tracing::warn!(path = %tmp_path.display(), "failed to remove temp file: {e}");
    }
}
