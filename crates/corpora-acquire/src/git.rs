use crate::output;
use anyhow::{Context, Result};
use corpora_model::InstallMethod;
use std::path::Path;
use tokio::process::Command;

/// Clone `origin` into `target`, or pull if `target` is already a checkout.
///
/// A fresh clone lands in a staging directory and then replaces `target`,
/// so an earlier archive or local install at the same path is superseded.
pub async fn clone_or_pull(origin: &str, target: &Path) -> Result<InstallMethod> {
    if is_checkout(target) {
        tracing::info!(path = %target.display(), "Corpus already present, pulling");
        run_git(&["pull", "--ff-only"], Some(target)).await?;
        return Ok(InstallMethod::GitPull);
    }

    let staging = output::prepare_staging(target)?;
    let staging_str = staging
        .to_str()
        .with_context(|| format!("Non UTF-8 install path: {}", staging.display()))?;

    tracing::info!(origin = %origin, path = %target.display(), "Cloning corpus");
    if let Err(e) = run_git(&["clone", "--depth", "1", origin, staging_str], None).await {
        let _ = std::fs::remove_dir_all(&staging);
        return Err(e);
    }
    output::swap_into_place(&staging, target)?;
    Ok(InstallMethod::GitClone)
}

/// Whether `dir` holds a git working tree.
pub fn is_checkout(dir: &Path) -> bool {
    dir.join(".git").exists()
}

async fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    // Never block on a credential prompt for a public corpus.
    cmd.env("GIT_TERMINAL_PROMPT", "0");

    tracing::debug!(args = ?args, "Running git");
    let output = cmd
        .output()
        .await
        .context("Failed to run git (is it installed and on PATH?)")?;

    let status = output.status;
    anyhow::ensure!(
        status.success(),
        "git {} failed ({status}): {}",
        args.first().copied().unwrap_or_default(),
        String::from_utf8_lossy(&output.stderr).trim()
    );

    Ok(())
}
