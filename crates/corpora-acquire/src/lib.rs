//! Download and installation of classical-language corpora.
//!
//! The [`driver`] walks a fixed install plan and hands each corpus id to an
//! [`Importer`]. [`importer::CorpusImporter`] is the real implementation,
//! fetching corpora with git or as HTTP tarballs into the local data dir.

pub mod archive;
pub mod distributed;
pub mod driver;
pub mod git;
pub mod importer;
pub mod local;
pub mod output;

use anyhow::Result;
use async_trait::async_trait;
use corpora_model::Language;

/// A per-language handle that installs corpora by id.
#[async_trait]
pub trait Importer: Send {
    async fn import_corpus(&mut self, corpus: &str) -> Result<()>;
}

/// Constructs importer handles, one per language.
pub trait ImporterFactory {
    type Importer: Importer;

    fn importer(&self, language: Language) -> Result<Self::Importer>;
}
