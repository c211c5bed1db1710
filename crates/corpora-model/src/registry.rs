//! Built-in corpus registry.
//!
//! Remote corpora are git repositories, mostly under the CLTK GitHub
//! organization. Local corpora are licensed collections the user must
//! provide from disk.

use crate::{CorpusKind, CorpusSpec, Language, ModelError};

const CLTK: &str = "https://github.com/cltk";

/// (name, kind, origin); `None` origin means a local corpus.
type Entry = (&'static str, CorpusKind, Option<&'static str>);

const LATIN: &[Entry] = &[
    ("latin_text_perseus", CorpusKind::Text, Some("latin_text_perseus")),
    ("latin_treebank_perseus", CorpusKind::Treebank, Some("latin_treebank_perseus")),
    ("latin_text_latin_library", CorpusKind::Text, Some("latin_text_latin_library")),
    ("phi5", CorpusKind::Text, None),
    ("phi7", CorpusKind::Text, None),
    ("latin_proper_names_cltk", CorpusKind::Lexicon, Some("latin_proper_names_cltk")),
    ("latin_models_cltk", CorpusKind::Model, Some("latin_models_cltk")),
    ("latin_pos_lemmata_cltk", CorpusKind::Lemma, Some("latin_pos_lemmata_cltk")),
    ("latin_treebank_index_thomisticus", CorpusKind::Treebank, Some("latin_treebank_index_thomisticus")),
    ("latin_lexica_perseus", CorpusKind::Lexicon, Some("latin_lexica_perseus")),
    ("latin_training_set_sentence_cltk", CorpusKind::TrainingSet, Some("latin_training_set_sentence_cltk")),
    ("latin_word2vec_cltk", CorpusKind::Model, Some("latin_word2vec_cltk")),
    ("latin_text_antique_digiliblt", CorpusKind::Text, Some("latin_text_antique_digiliblt")),
    ("latin_text_corpus_grammaticorum_latinorum", CorpusKind::Text, Some("latin_text_corpus_grammaticorum_latinorum")),
    ("latin_text_poeti_ditalia", CorpusKind::Text, Some("latin_text_poeti_ditalia")),
    ("latin_text_tesserae", CorpusKind::Text, Some("latin_text_tesserae")),
];

const GREEK: &[Entry] = &[
    ("greek_software_tlgu", CorpusKind::Software, Some("greek_software_tlgu")),
    ("greek_text_perseus", CorpusKind::Text, Some("greek_text_perseus")),
    ("phi7", CorpusKind::Text, None),
    ("tlg", CorpusKind::Text, None),
    ("greek_proper_names_cltk", CorpusKind::Lexicon, Some("greek_proper_names_cltk")),
    ("greek_models_cltk", CorpusKind::Model, Some("greek_models_cltk")),
    ("greek_treebank_perseus", CorpusKind::Treebank, Some("greek_treebank_perseus")),
    ("greek_lexica_perseus", CorpusKind::Lexicon, Some("greek_lexica_perseus")),
    ("greek_training_set_sentence_cltk", CorpusKind::TrainingSet, Some("greek_training_set_sentence_cltk")),
    ("greek_word2vec_cltk", CorpusKind::Model, Some("greek_word2vec_cltk")),
    ("greek_text_lacus_curtius", CorpusKind::Text, Some("greek_text_lacus_curtius")),
    ("greek_text_first1kgreek", CorpusKind::Text, Some("First1KGreek")),
    ("greek_text_tesserae", CorpusKind::Text, Some("greek_text_tesserae")),
];

/// The CDLI ATF dump lives outside the CLTK organization.
const CDLI_ORIGIN: &str = "https://github.com/cdli-gh/data.git";

/// All built-in corpora for `language`, in registry order.
pub fn builtin(language: Language) -> Vec<CorpusSpec> {
    let entries = match language {
        Language::Latin => LATIN,
        Language::Greek => GREEK,
        Language::Akkadian => {
            return vec![CorpusSpec::remote(
                "cdli_corpus",
                Language::Akkadian,
                CorpusKind::Atf,
                CDLI_ORIGIN,
            )];
        }
    };

    entries
        .iter()
        .map(|(name, kind, repo)| match repo {
            Some(repo) => CorpusSpec::remote(name, language, *kind, &format!("{CLTK}/{repo}.git")),
            None => CorpusSpec::local(name, language, *kind),
        })
        .collect()
}

/// Look up `name` among `corpora`, reporting the available names on failure.
pub fn find<'a>(
    corpora: &'a [CorpusSpec],
    language: Language,
    name: &str,
) -> Result<&'a CorpusSpec, ModelError> {
    corpora.iter().find(|c| c.name == name).ok_or_else(|| {
        ModelError::UnknownCorpus {
            name: name.to_string(),
            language,
            available: corpora
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    })
}
