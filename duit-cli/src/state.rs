use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$DUIT_HOME`, or `~/.duit`
pub fn duit_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("DUIT_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".duit"))
}

pub fn ensure_duit_home() -> Result<PathBuf> {
    let dir = duit_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn store_path() -> Result<PathBuf> {
    Ok(ensure_duit_home()?.join("transactions.jsonl"))
}
