pub mod language;
pub mod corpus;
pub mod registry;
pub mod manifest;

pub use language::*;
pub use corpus::*;
pub use manifest::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unsupported language: {0} (expected one of: latin, greek, akkadian)")]
    UnknownLanguage(String),

    #[error("unknown corpus type: {0}")]
    UnknownKind(String),

    #[error("corpus '{name}' is not available for {language}; available: {available}")]
    UnknownCorpus {
        name: String,
        language: Language,
        available: String,
    },
}
