use std::path::Path;

/// Name of the configuration file, looked up in CWD and then in the home directory
pub const CONFIG_FILE: &str = ".drop-console.toml";

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_config(Path::new(CONFIG_FILE)) {
        return Some(content);
    }

    crate::paths::home_config_path().and_then(|path| read_config(&path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
