use crate::output;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a user-supplied corpus tree from `source` into `target`.
///
/// The copy is assembled in a staging directory and only then replaces any
/// previous install. `source` and `target` must not overlap. Returns the
/// number of files copied.
pub fn copy_tree(source: &Path, target: &Path) -> Result<usize> {
    anyhow::ensure!(
        source.is_dir(),
        "Local corpus path {} is not a directory",
        source.display()
    );
    ensure_disjoint(source, target)?;

    let staging = output::prepare_staging(target)?;
    fs::create_dir_all(&staging)?;

    let files = match copy_into(source, &staging) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(e);
        }
    };
    output::swap_into_place(&staging, target)?;

    tracing::info!(source = %source.display(), path = %target.display(), files, "Copied local corpus");
    Ok(files)
}

fn copy_into(source: &Path, dest: &Path) -> Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source)?;
        let out = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&out)?;
        } else {
            fs::copy(entry.path(), &out)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            files += 1;
        }
    }
    Ok(files)
}

/// Refuse a source that is, contains, or lives inside the install directory.
fn ensure_disjoint(source: &Path, target: &Path) -> Result<()> {
    let source = source.canonicalize()?;
    let target = canonicalize_lenient(target)?;

    anyhow::ensure!(
        !source.starts_with(&target) && !target.starts_with(&source),
        "Local corpus path {} overlaps the install directory {}",
        source.display(),
        target.display()
    );
    Ok(())
}

/// Canonicalize the longest existing prefix of `path` and append the rest.
fn canonicalize_lenient(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)?;
    let mut existing = path.as_path();
    let mut rest = Vec::new();
    while !existing.exists() {
        let Some(parent) = existing.parent() else {
            break;
        };
        if let Some(name) = existing.file_name() {
            rest.push(name.to_os_string());
        }
        existing = parent;
    }

    let mut resolved = existing.canonicalize()?;
    for name in rest.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
