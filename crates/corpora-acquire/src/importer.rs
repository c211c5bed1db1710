use crate::{archive, distributed, git, local, output, Importer, ImporterFactory};
use anyhow::{Context, Result};
use async_trait::async_trait;
use corpora_model::registry;
use corpora_model::{CorpusLocation, CorpusSpec, InstallManifest, InstallMethod, Language};
use std::path::{Path, PathBuf};

/// Directory under the home directory that corpora are installed into.
pub const DEFAULT_DATA_DIR_NAME: &str = "cltk_data";

/// How remote corpora are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMethod {
    /// `git clone`, or `git pull` for an existing checkout.
    #[default]
    Git,
    /// HTTPS tarball of the default branch; no git binary needed.
    Archive,
}

/// Settings shared by every importer handle.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    pub data_dir: PathBuf,
    pub method: FetchMethod,
}

impl ImporterConfig {
    pub fn new(data_dir: impl Into<PathBuf>, method: FetchMethod) -> Self {
        Self {
            data_dir: data_dir.into(),
            method,
        }
    }

    /// `~/cltk_data`
    pub fn default_data_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine the home directory; pass --data-dir")?;
        Ok(home.join(DEFAULT_DATA_DIR_NAME))
    }
}

/// Installs corpora for one language into the data directory.
#[derive(Debug)]
pub struct CorpusImporter {
    language: Language,
    config: ImporterConfig,
    corpora: Vec<CorpusSpec>,
}

impl CorpusImporter {
    /// Build the registry for `language`: built-in corpora followed by any
    /// user-registered ones. A user entry with a built-in name replaces it.
    pub fn new(language: Language, config: ImporterConfig) -> Result<Self> {
        let mut corpora = registry::builtin(language);
        for user in distributed::load(&config.data_dir, language)? {
            if let Some(existing) = corpora.iter_mut().find(|c| c.name == user.name) {
                tracing::warn!(corpus = %user.name, "User corpus overrides built-in entry");
                *existing = user;
            } else {
                corpora.push(user);
            }
        }

        Ok(Self {
            language,
            config,
            corpora,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn corpora(&self) -> &[CorpusSpec] {
        &self.corpora
    }

    /// Names of every corpus available for this language.
    pub fn list_corpora(&self) -> Vec<&str> {
        self.corpora.iter().map(|c| c.name.as_str()).collect()
    }

    /// Where `spec` is (or would be) installed.
    pub fn corpus_dir(&self, spec: &CorpusSpec) -> PathBuf {
        self.config.data_dir.join(spec.relative_dir())
    }

    /// Install `name`, returning its install directory.
    ///
    /// `local_path` is the source tree for local corpora and is ignored for
    /// remote ones.
    pub async fn import_corpus_from(&self, name: &str, local_path: Option<&Path>) -> Result<PathBuf> {
        let spec = registry::find(&self.corpora, self.language, name)?;
        let target = self.corpus_dir(spec);

        tracing::info!(
            corpus = %spec.name,
            language = %self.language,
            kind = %spec.kind,
            path = %target.display(),
            "Importing corpus"
        );

        let (origin, method) = match (&spec.location, local_path) {
            (CorpusLocation::Local, Some(source)) => {
                local::copy_tree(source, &target)?;
                (source.display().to_string(), InstallMethod::LocalCopy)
            }
            (CorpusLocation::Local, None) => {
                anyhow::bail!("Corpus '{name}' must be imported from a local path (use --path)")
            }
            (CorpusLocation::Remote { origin }, source) => {
                if let Some(source) = source {
                    tracing::warn!(path = %source.display(), "Ignoring local path for remote corpus");
                }
                let method = match self.config.method {
                    FetchMethod::Git => git::clone_or_pull(origin, &target).await?,
                    FetchMethod::Archive => {
                        archive::fetch(origin, &target).await?;
                        InstallMethod::Archive
                    }
                };
                (origin.clone(), method)
            }
        };

        output::write_manifest(&target, &InstallManifest::new(spec, &origin, method))?;
        tracing::info!(corpus = %spec.name, method = ?method, "Corpus installed");

        Ok(target)
    }
}

#[async_trait]
impl Importer for CorpusImporter {
    async fn import_corpus(&mut self, corpus: &str) -> Result<()> {
        self.import_corpus_from(corpus, None).await?;
        Ok(())
    }
}

/// Builds [`CorpusImporter`]s that share one [`ImporterConfig`].
#[derive(Debug, Clone)]
pub struct CorpusImporterFactory {
    config: ImporterConfig,
}

impl CorpusImporterFactory {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }
}

impl ImporterFactory for CorpusImporterFactory {
    type Importer = CorpusImporter;

    fn importer(&self, language: Language) -> Result<CorpusImporter> {
        CorpusImporter::new(language, self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpora_model::{CorpusKind, MANIFEST_FILE};
    use std::fs;

    fn importer(language: Language, data_dir: &Path) -> CorpusImporter {
        CorpusImporter::new(language, ImporterConfig::new(data_dir, FetchMethod::Git)).unwrap()
    }

    #[test]
    fn test_list_corpora() {
        let tmp = tempfile::tempdir().unwrap();
        let latin = importer(Language::Latin, tmp.path());
        let names = latin.list_corpora();
        assert!(names.contains(&"latin_text_latin_library"));
        assert!(names.contains(&"latin_models_cltk"));
        assert!(!names.contains(&"greek_models_cltk"));

        let akkadian = importer(Language::Akkadian, tmp.path());
        assert_eq!(akkadian.list_corpora(), vec!["cdli_corpus"]);
    }

    #[test]
    fn test_corpus_dir_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let greek = importer(Language::Greek, tmp.path());
        let spec = registry::find(greek.corpora(), Language::Greek, "greek_models_cltk").unwrap();
        assert_eq!(
            greek.corpus_dir(spec),
            tmp.path().join("greek").join("model").join("greek_models_cltk")
        );
    }

    #[test]
    fn test_user_corpora_appended_and_override() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(distributed::DISTRIBUTED_CORPORA_FILE),
            "latin_models_cltk:\n  origin: https://github.com/me/latin_models_fork.git\n  language: latin\n  type: model\n\
             latin_corpus_newton_example:\n  origin: https://github.com/kylepjohnson/latin_corpus_newton_example.git\n  language: latin\n  type: text\n",
        )
        .unwrap();

        let latin = importer(Language::Latin, tmp.path());
        let builtin_len = registry::builtin(Language::Latin).len();
        assert_eq!(latin.corpora().len(), builtin_len + 1);
        assert_eq!(latin.list_corpora().last(), Some(&"latin_corpus_newton_example"));

        let models = registry::find(latin.corpora(), Language::Latin, "latin_models_cltk").unwrap();
        assert_eq!(models.origin(), Some("https://github.com/me/latin_models_fork.git"));
        assert_eq!(models.kind, CorpusKind::Model);
    }

    #[test]
    fn test_factory_rejects_malformed_user_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(distributed::DISTRIBUTED_CORPORA_FILE), "[1, 2").unwrap();
        let factory = CorpusImporterFactory::new(ImporterConfig::new(tmp.path(), FetchMethod::Git));
        assert!(factory.importer(Language::Greek).is_err());
    }

    #[tokio::test]
    async fn test_unknown_corpus() {
        let tmp = tempfile::tempdir().unwrap();
        let mut greek = importer(Language::Greek, tmp.path());
        let err = greek.import_corpus("cdli_corpus").await.unwrap_err();
        assert!(err.to_string().starts_with("corpus 'cdli_corpus' is not available for greek"));
        assert!(!tmp.path().join("greek").exists());
    }

    #[tokio::test]
    async fn test_local_corpus_requires_path() {
        let tmp = tempfile::tempdir().unwrap();
        let mut latin = importer(Language::Latin, tmp.path());
        let err = latin.import_corpus("phi5").await.unwrap_err();
        assert!(err.to_string().contains("local path"));
    }

    #[tokio::test]
    async fn test_local_corpus_import_writes_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("TLG_E");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("TLG0012.TXT"), "Homer").unwrap();
        let data_dir = tmp.path().join("data");

        let greek = importer(Language::Greek, &data_dir);
        let installed = greek.import_corpus_from("tlg", Some(&source)).await.unwrap();

        assert_eq!(installed, data_dir.join("greek/text/tlg"));
        assert!(installed.join("TLG0012.TXT").is_file());
        assert!(installed.join(MANIFEST_FILE).is_file());

        let manifest = output::read_manifest(&installed).unwrap().unwrap();
        assert_eq!(manifest.name, "tlg");
        assert_eq!(manifest.language, Language::Greek);
        assert_eq!(manifest.method, InstallMethod::LocalCopy);
        assert_eq!(manifest.origin, source.display().to_string());
    }

    #[tokio::test]
    async fn test_remote_import_clones_then_pulls() {
        let tmp = tempfile::tempdir().unwrap();
        let origin = crate::git::tests::local_origin(&tmp.path().join("origin"));
        let data_dir = tmp.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join(distributed::DISTRIBUTED_CORPORA_FILE),
            format!("latin_text_fixture:\n  origin: {origin}\n  language: latin\n  type: text\n"),
        )
        .unwrap();

        let latin = importer(Language::Latin, &data_dir);
        let installed = latin.import_corpus_from("latin_text_fixture", None).await.unwrap();
        assert_eq!(installed, data_dir.join("latin/text/latin_text_fixture"));
        assert!(installed.join("README.md").is_file());
        let first = output::read_manifest(&installed).unwrap().unwrap();
        assert_eq!(first.method, InstallMethod::GitClone);
        assert_eq!(first.origin, origin);

        let mut again = importer(Language::Latin, &data_dir);
        again.import_corpus("latin_text_fixture").await.unwrap();
        let second = output::read_manifest(&installed).unwrap().unwrap();
        assert_eq!(second.method, InstallMethod::GitPull);
    }

    #[test]
    fn test_default_data_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(ImporterConfig::default_data_dir().unwrap(), home.join("cltk_data"));
        }
    }
}
