use anyhow::{Context, Result};
use corpora_model::{InstallManifest, MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Hidden sibling of `target` that installs are assembled in before being
/// swapped into place.
pub fn staging_dir(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .with_context(|| format!("Install path has no final component: {}", target.display()))?;
    let mut staging_name = std::ffi::OsString::from(".");
    staging_name.push(name);
    staging_name.push(".partial");
    Ok(target.with_file_name(staging_name))
}

/// Create a fresh, empty staging directory for `target`.
pub fn prepare_staging(target: &Path) -> Result<PathBuf> {
    let staging = staging_dir(target)?;
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }
    if let Some(parent) = staging.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(staging)
}

/// Replace `target` with the finished `staging` directory.
pub fn swap_into_place(staging: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_dir_all(target)
            .with_context(|| format!("Failed to remove previous install at {}", target.display()))?;
    }
    fs::rename(staging, target)
        .with_context(|| format!("Failed to move {} into place", staging.display()))?;
    Ok(())
}

/// Write the provenance manifest into an installed corpus directory.
pub fn write_manifest(corpus_dir: &Path, manifest: &InstallManifest) -> Result<PathBuf> {
    fs::create_dir_all(corpus_dir)?;
    let path = corpus_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), method = ?manifest.method, "Wrote install manifest");
    Ok(path)
}

/// Read the manifest of an installed corpus, if there is one.
pub fn read_manifest(corpus_dir: &Path) -> Result<Option<InstallManifest>> {
    let path = corpus_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    let manifest = serde_json::from_str(&contents)
        .with_context(|| format!("Malformed manifest at {}", path.display()))?;
    Ok(Some(manifest))
}
