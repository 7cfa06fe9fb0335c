use std::fs::create_dir_all;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

pub fn ensure_parent_exist(path: &Path) -> Result<()> {
    if let Some(parent_dir) = path.parent() {
        create_dir_all(parent_dir)?;
        Ok(())
    } else {
        bail!("Failed to get parent directory from given file: {:?}", path)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_parent_exist;

    #[test]
    fn test_ensure_parent_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("config.toml");

        ensure_parent_exist(&path).unwrap();

        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!path.exists());
    }
}
