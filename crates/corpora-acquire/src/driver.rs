use crate::{Importer, ImporterFactory};
use anyhow::Result;
use corpora_model::Language;

/// An ordered list of languages, each with the corpus ids to install for it.
pub type InstallPlan<'a> = &'a [(Language, &'a [&'a str])];

/// The corpora installed by `corpora install`.
pub const DEFAULT_PLAN: InstallPlan<'static> = &[
    (Language::Latin, &["latin_text_latin_library", "latin_models_cltk"]),
    (Language::Greek, &["greek_models_cltk"]),
    (Language::Akkadian, &["cdli_corpus"]),
];

/// Install every corpus in [`DEFAULT_PLAN`].
pub async fn install_default_corpora<F: ImporterFactory>(factory: &F) -> Result<()> {
    install(factory, DEFAULT_PLAN).await
}

/// Install `plan` strictly in order.
///
/// One importer is constructed per language. The first error is returned
/// as-is and nothing after it is attempted.
pub async fn install<F: ImporterFactory>(factory: &F, plan: InstallPlan<'_>) -> Result<()> {
    for (language, corpora) in plan {
        tracing::info!(language = %language, corpora = corpora.len(), "Installing corpora");
        let mut importer = factory.importer(*language)?;
        for corpus in corpora.iter() {
            importer.import_corpus(corpus).await?;
        }
    }

    Ok(())
}
