use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language for which corpora can be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Latin,
    Greek,
    Akkadian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Latin, Language::Greek, Language::Akkadian];

    /// Lowercase identifier, also used as the top-level directory in the data dir.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Latin => "latin",
            Language::Greek => "greek",
            Language::Akkadian => "akkadian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latin" => Ok(Language::Latin),
            "greek" => Ok(Language::Greek),
            "akkadian" => Ok(Language::Akkadian),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}
