use std::path::Path;

use color_eyre::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Writes `object` as pretty JSON, creating missing parent directories.
pub fn store(object: &impl Serialize, path: &Path) -> Result<(), std::io::Error> {
    let serialized = serde_json::to_string_pretty(object)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serialized + "\n")?;
    Ok(())
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path)?;
    from_str(&data)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    Ok(serde_json::from_str(input)?)
}

pub fn to_string<T: Serialize>(object: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(object)?)
}
