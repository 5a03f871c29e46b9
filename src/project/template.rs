//! Post-clone edits applied to the template checkout.
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::error::AxypeError;

/// Project manifest at the template root.
pub const MANIFEST_FILE: &str = "default.project.json";

/// README at the template root.
pub const README_FILE: &str = "README.md";

/// Heading replaced with the project name in the README.
pub const README_PLACEHOLDER: &str = "# paste-template";

/// Version-control metadata left behind by the clone.
pub const GIT_DIR: &str = ".git";

/// Set the manifest's `name` field and write it back as compact JSON.
///
/// Key order and every other field are kept as they were.
///
/// # Errors
///
/// Returns [`AxypeError::InvalidTemplate`] if the manifest is missing, is not
/// valid JSON or is not an object, and an I/O error if it cannot be written.
pub fn rewrite_manifest(root: &Path, name: &str) -> Result<()> {
    let path = root.join(MANIFEST_FILE);
    let invalid = |reason: String| AxypeError::InvalidTemplate {
        path: path.clone(),
        reason,
    };

    let raw = fs::read_to_string(&path).map_err(|e| invalid(e.to_string()))?;
    let mut manifest: Value = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| invalid("manifest is not a JSON object".to_string()))?;
    object.insert("name".to_string(), Value::String(name.to_string()));

    let compact = serde_json::to_string(&manifest)?;
    fs::write(&path, compact).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Rename `src/client/init.lua` to `src/client/init.luau`.
///
/// # Errors
///
/// Returns an error if the rename fails (e.g. the entry point is missing).
pub fn use_luau_client(root: &Path) -> Result<()> {
    let client = root.join("src").join("client");
    let from = client.join("init.lua");
    let to = client.join("init.luau");
    fs::rename(&from, &to).with_context(|| {
        format!(
            "failed to rename {} to {}",
            from.display(),
            to.display()
        )
    })
}

/// Replace the first placeholder heading in the README with `# <name>`.
///
/// Returns `false` without touching anything when there is no README.
///
/// # Errors
///
/// Returns an error if the README exists but cannot be read or written.
pub fn patch_readme(root: &Path, name: &str) -> Result<bool> {
    let path = root.join(README_FILE);
    if !path.exists() {
        return Ok(false);
    }
    let contents =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let patched = contents.replacen(README_PLACEHOLDER, &format!("# {name}"), 1);
    fs::write(&path, patched).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

/// Remove the `.git` directory left by the clone, if present.
///
/// Returns `false` when there was nothing to remove.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be removed.
pub fn remove_git_metadata(root: &Path) -> Result<bool> {
    let git_dir = root.join(GIT_DIR);
    if !git_dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(&git_dir)
        .with_context(|| format!("failed to remove {}", git_dir.display()))?;
    Ok(true)
}
