use std::io::Write;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub fn slurp_file(path: &str) -> Result<String> {
    Ok(fs_err::read_to_string(path)?)
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let contents = slurp_file(path)?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path))
}

/// Creates parent directories if needed.
pub fn write_file(path: &str, contents: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent)?;
        }
    }
    let mut file = fs_err::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    info!("Wrote {}", path);
    Ok(())
}
