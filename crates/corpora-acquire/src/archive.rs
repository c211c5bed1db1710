use crate::output;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tar::Archive;

const GITHUB: &str = "https://github.com/";

/// Download the default-branch tarball of a GitHub `origin` and install it
/// at `target`, replacing whatever was there.
pub async fn fetch(origin: &str, target: &Path) -> Result<usize> {
    let url = tarball_url(origin)?;

    tracing::info!(url = %url, "Downloading corpus archive");
    let bytes = fetch_bytes(&url).await?;
    tracing::info!(bytes = bytes.len(), "Received archive");

    let target = target.to_path_buf();
    let files = tokio::task::spawn_blocking(move || unpack(&bytes, &target))
        .await
        .context("Archive extraction task panicked")??;

    Ok(files)
}

/// `https://github.com/owner/repo(.git)` -> `https://github.com/owner/repo/archive/HEAD.tar.gz`
pub fn tarball_url(origin: &str) -> Result<String> {
    let path = origin
        .strip_prefix(GITHUB)
        .with_context(|| format!("Archive downloads are only supported for GitHub origins, got {origin}"))?;
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let parts: Vec<&str> = path.split('/').collect();
    anyhow::ensure!(
        parts.len() == 2 && parts.iter().all(|p| !p.is_empty()),
        "Expected a GitHub repository URL of the form {GITHUB}owner/repo, got {origin}"
    );

    Ok(format!("{GITHUB}{}/{}/archive/HEAD.tar.gz", parts[0], parts[1]))
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("corpora/", env!("CARGO_PKG_VERSION"), " (corpus installer)"))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch archive")?;

    let status = response.status();
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    let bytes = response.bytes().await.context("Failed to read response body")?;
    Ok(bytes.to_vec())
}

/// Unpack a gzipped tarball into `target`, dropping the archive's top-level
/// directory. Extraction goes to a sibling staging directory first, so a
/// failed unpack leaves any previous install untouched.
///
/// Returns the number of regular files written.
pub fn unpack(gz: &[u8], target: &Path) -> Result<usize> {
    let staging = output::prepare_staging(target)?;
    fs::create_dir_all(&staging)?;

    let files = match unpack_into(gz, &staging) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(e);
        }
    };

    output::swap_into_place(&staging, target)?;
    tracing::info!(path = %target.display(), files, "Unpacked corpus archive");

    Ok(files)
}

fn unpack_into(gz: &[u8], dest: &Path) -> Result<usize> {
    let mut archive = Archive::new(GzDecoder::new(gz));
    let mut files = 0;

    for entry in archive.entries().context("Not a gzipped tar archive")? {
        let mut entry = entry?;
        let entry_type = entry.header().entry_type();
        if entry_type.is_pax_global_extensions() {
            continue;
        }
        // Links could point outside the corpus directory.
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            tracing::debug!(path = %entry.path()?.display(), "Skipping link entry");
            continue;
        }

        let path = entry.path()?.into_owned();
        let Some(relative) = strip_top_level(&path) else {
            continue;
        };

        let out = dest.join(&relative);
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        entry
            .unpack(&out)
            .with_context(|| format!("Failed to extract {}", relative.display()))?;
        if entry_type.is_file() {
            files += 1;
        }
    }

    Ok(files)
}

/// Drop the first path component; `None` for the top-level directory itself
/// and for anything that would escape the destination.
fn strip_top_level(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;

    let mut relative = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
