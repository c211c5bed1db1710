use crate::{CorpusKind, CorpusSpec, Language};
use serde::{Deserialize, Serialize};

/// File name of the provenance record written into each installed corpus.
pub const MANIFEST_FILE: &str = ".corpus.json";

/// Provenance record for an installed corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallManifest {
    pub name: String,
    pub language: Language,
    pub kind: CorpusKind,
    /// Git URL for remote corpora, source directory for local ones.
    pub origin: String,
    pub method: InstallMethod,
    /// RFC 3339 timestamp.
    pub installed_at: String,
}

/// How the corpus arrived on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallMethod {
    GitClone,
    GitPull,
    Archive,
    LocalCopy,
}

impl InstallManifest {
    pub fn new(spec: &CorpusSpec, origin: &str, method: InstallMethod) -> Self {
        Self {
            name: spec.name.clone(),
            language: spec.language,
            kind: spec.kind,
            origin: origin.to_string(),
            method,
            installed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
