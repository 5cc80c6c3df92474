use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SLUGKIT_CONFIG";

/// Base slugkit config directory (~/.config/slugkit/ on Unix, %APPDATA%\slugkit on Windows)
pub fn slugkit() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("slugkit"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("slugkit"))
    }
}

/// Config file path, honoring `SLUGKIT_CONFIG`.
pub fn slugkit_json() -> Result<PathBuf> {
    match env::var(CONFIG_ENV) {
        Ok(raw) if !raw.trim().is_empty() => expand(&raw),
        _ => Ok(slugkit()?.join("slugkit.json")),
    }
}

fn expand(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        Error::config_invalid_value(CONFIG_ENV, Some(raw.to_string()), e.to_string())
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
