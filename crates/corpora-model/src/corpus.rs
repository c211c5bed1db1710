use crate::{Language, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A corpus that can be installed into the local data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSpec {
    pub name: String,
    pub language: Language,
    pub kind: CorpusKind,
    pub location: CorpusLocation,
}

/// What a corpus contains. Determines the subdirectory it is installed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusKind {
    Text,
    Model,
    Treebank,
    Lexicon,
    Lemma,
    TrainingSet,
    Software,
    /// ASCII Transliteration Format (cuneiform).
    Atf,
}

/// Where a corpus comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "location", rename_all = "snake_case")]
pub enum CorpusLocation {
    /// A git repository reachable over the network.
    Remote { origin: String },
    /// Licensed material the user must supply from disk (e.g., PHI or TLG discs).
    Local,
}

impl CorpusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusKind::Text => "text",
            CorpusKind::Model => "model",
            CorpusKind::Treebank => "treebank",
            CorpusKind::Lexicon => "lexicon",
            CorpusKind::Lemma => "lemma",
            CorpusKind::TrainingSet => "training_set",
            CorpusKind::Software => "software",
            CorpusKind::Atf => "atf",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorpusKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "text" => CorpusKind::Text,
            "model" => CorpusKind::Model,
            "treebank" => CorpusKind::Treebank,
            "lexicon" => CorpusKind::Lexicon,
            "lemma" => CorpusKind::Lemma,
            "training_set" => CorpusKind::TrainingSet,
            "software" => CorpusKind::Software,
            "atf" => CorpusKind::Atf,
            other => return Err(ModelError::UnknownKind(other.to_string())),
        };
        Ok(kind)
    }
}

impl CorpusSpec {
    pub fn remote(name: &str, language: Language, kind: CorpusKind, origin: &str) -> Self {
        Self {
            name: name.to_string(),
            language,
            kind,
            location: CorpusLocation::Remote {
                origin: origin.to_string(),
            },
        }
    }

    pub fn local(name: &str, language: Language, kind: CorpusKind) -> Self {
        Self {
            name: name.to_string(),
            language,
            kind,
            location: CorpusLocation::Local,
        }
    }

    /// Git origin URL, if this corpus is fetched over the network.
    pub fn origin(&self) -> Option<&str> {
        match &self.location {
            CorpusLocation::Remote { origin } => Some(origin),
            CorpusLocation::Local => None,
        }
    }

    /// Path of the install directory relative to the data dir:
    /// `<language>/<kind>/<name>`.
    pub fn relative_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(self.language.as_str())
            .join(self.kind.as_str())
            .join(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_dir() {
        let spec = CorpusSpec::remote(
            "latin_models_cltk",
            Language::Latin,
            CorpusKind::Model,
            "https://github.com/cltk/latin_models_cltk.git",
        );
        assert_eq!(
            spec.relative_dir(),
            PathBuf::from("latin").join("model").join("latin_models_cltk")
        );
    }

    #[test]
    fn test_origin() {
        let remote = CorpusSpec::remote("x", Language::Greek, CorpusKind::Text, "https://example.org/x.git");
        assert_eq!(remote.origin(), Some("https://example.org/x.git"));
        let local = CorpusSpec::local("tlg", Language::Greek, CorpusKind::Text);
        assert_eq!(local.origin(), None);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("training_set".parse::<CorpusKind>(), Ok(CorpusKind::TrainingSet));
        assert_eq!("atf".parse::<CorpusKind>(), Ok(CorpusKind::Atf));
        assert!("poetry".parse::<CorpusKind>().is_err());
    }
}
