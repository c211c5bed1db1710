//! User-registered corpora.
//!
//! Extra corpora can be declared in `<data_dir>/distributed_corpora.yaml`:
//!
//! ```yaml
//! latin_corpus_newton_example:
//!   origin: https://github.com/kylepjohnson/latin_corpus_newton_example.git
//!   language: latin
//!   type: text
//! ```

use anyhow::{Context, Result};
use corpora_model::{CorpusKind, CorpusSpec, Language};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const DISTRIBUTED_CORPORA_FILE: &str = "distributed_corpora.yaml";

#[derive(Debug, Deserialize)]
struct DistributedEntry {
    origin: String,
    language: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Load the user-registered corpora for `language` from `data_dir`, if the
/// file exists.
pub fn load(data_dir: &Path, language: Language) -> Result<Vec<CorpusSpec>> {
    let path = data_dir.join(DISTRIBUTED_CORPORA_FILE);
    if !path.is_file() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path)?;
    let corpora = parse(&contents, language).with_context(|| format!("Invalid {}", path.display()))?;
    tracing::debug!(path = %path.display(), language = %language, corpora = corpora.len(), "Loaded user corpora");
    Ok(corpora)
}

/// Parse a distributed corpora document, keeping entries for `language`.
///
/// Entries with an unknown language or type are skipped with a warning; only
/// a document that is not a map of entries is an error.
pub fn parse(contents: &str, language: Language) -> Result<Vec<CorpusSpec>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: BTreeMap<String, DistributedEntry> = serde_yaml::from_str(contents)?;
    let mut corpora = Vec::new();

    for (name, entry) in entries {
        match entry.language.parse::<Language>() {
            Ok(lang) if lang == language => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(corpus = %name, "Skipping user corpus: {e}");
                continue;
            }
        }
        let kind: CorpusKind = match entry.kind.parse() {
            Ok(kind) => kind,
            Err(e) => {
                tracing::warn!(corpus = %name, "Skipping user corpus: {e}");
                continue;
            }
        };
        corpora.push(CorpusSpec::remote(&name, language, kind, &entry.origin));
    }

    Ok(corpora)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
latin_corpus_newton_example:
  origin: https://github.com/kylepjohnson/latin_corpus_newton_example.git
  language: latin
  type: text
greek_corpus_private:
  origin: https://github.com/example/greek_corpus_private.git
  language: greek
  type: treebank
coptic_corpus:
  origin: https://github.com/example/coptic.git
  language: coptic
  type: text
"#;

    #[test]
    fn test_parse_filters_by_language() {
        let latin = parse(SAMPLE, Language::Latin).unwrap();
        assert_eq!(latin.len(), 1);
        assert_eq!(latin[0].name, "latin_corpus_newton_example");
        assert_eq!(latin[0].kind, CorpusKind::Text);
        assert_eq!(
            latin[0].origin(),
            Some("https://github.com/kylepjohnson/latin_corpus_newton_example.git")
        );

        let greek = parse(SAMPLE, Language::Greek).unwrap();
        assert_eq!(greek.len(), 1);
        assert_eq!(greek[0].kind, CorpusKind::Treebank);

        assert!(parse(SAMPLE, Language::Akkadian).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("", Language::Latin).unwrap().is_empty());
        assert!(parse("  \n", Language::Latin).unwrap().is_empty());
    }

    #[test]
    fn test_parse_skips_unknown_type() {
        let doc = "\
poetry_corpus:
  origin: https://github.com/a/poetry.git
  language: latin
  type: poetry
latin_text_ok:
  origin: https://github.com/a/ok.git
  language: latin
  type: text
";
        let latin = parse(doc, Language::Latin).unwrap();
        assert_eq!(latin.len(), 1);
        assert_eq!(latin[0].name, "latin_text_ok");
    }

    #[test]
    fn test_parse_skips_unknown_language() {
        let doc = "\
coptic_corpus:
  origin: https://github.com/a/coptic.git
  language: coptic
  type: text
";
        for lang in Language::ALL {
            assert!(parse(doc, lang).unwrap().is_empty());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load(tmp.path(), Language::Latin).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(DISTRIBUTED_CORPORA_FILE), "- just\n- a list\n").unwrap();
        assert!(load(tmp.path(), Language::Latin).is_err());
    }
}
