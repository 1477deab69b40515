// src/db/paths.rs
//! Default locations for the Recetario database and config file

use std::path::PathBuf;

/// Application directory name under the platform data/config roots
const APP_DIR: &str = "recetario";

/// Database file name
const DB_FILE: &str = "recetario.db";

/// Default database path: `<data_local_dir>/recetario/recetario.db`
///
/// Falls back to the current directory when the platform has no data dir.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILE)
}

/// Default config file path: `<config_dir>/recetario/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_file_name() {
        let path = default_db_path();
        assert!(path.ends_with("recetario.db"));
        if dirs::data_local_dir().is_some() {
            assert!(path.ends_with("recetario/recetario.db"));
        }
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("recetario/config.toml"));
        }
    }
}
