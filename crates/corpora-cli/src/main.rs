use anyhow::Result;
use clap::{Parser, Subcommand};
use corpora_acquire::importer::{CorpusImporter, CorpusImporterFactory, FetchMethod, ImporterConfig};
use corpora_acquire::driver;
use corpora_model::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corpora")]
#[command(about = "Install Latin, Greek, and Akkadian text corpora and models")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Directory corpora are installed into [default: ~/cltk_data]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// How remote corpora are fetched
    #[arg(long, global = true, default_value = "git", value_enum)]
    method: Method,

    /// Defaults to `install` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Method {
    /// git clone, or git pull when already installed
    Git,
    /// Download the repository tarball over HTTPS
    Archive,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the default corpora: Latin Library texts, Latin and Greek models, CDLI
    Install,

    /// Install a single corpus
    Import {
        /// Language the corpus belongs to (latin, greek, akkadian)
        #[arg(short, long)]
        lang: Language,

        /// Corpus identifier (e.g., "latin_models_cltk")
        #[arg(short, long)]
        corpus: String,

        /// Source directory for local corpora (e.g., a PHI5 or TLG disc)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// List the corpora available for a language
    List {
        /// Language to list (latin, greek, akkadian)
        #[arg(short, long)]
        lang: Language,
    },
}

impl From<Method> for FetchMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Git => FetchMethod::Git,
            Method::Archive => FetchMethod::Archive,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, keeping HTTP internals quiet at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper_util=warn,rustls=warn",
        LogLevel::Trace => "trace,hyper_util=warn,rustls=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ImporterConfig::default_data_dir()?,
    };
    let config = ImporterConfig::new(data_dir, cli.method.into());

    match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => {
            tracing::info!(data_dir = %config.data_dir.display(), "Installing default corpora");
            let factory = CorpusImporterFactory::new(config);
            driver::install_default_corpora(&factory).await?;
            tracing::info!("All corpora installed");
        }
        Commands::Import { lang, corpus, path } => {
            let importer = CorpusImporter::new(lang, config)?;
            let installed = importer.import_corpus_from(&corpus, path.as_deref()).await?;
            tracing::info!(corpus = %corpus, path = %installed.display(), "Done");
        }
        Commands::List { lang } => {
            let importer = CorpusImporter::new(lang, config)?;
            for name in importer.list_corpora() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
