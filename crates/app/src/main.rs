use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use content::{ContentStore, FsQuestionSource, builtin_catalog, load_catalog, load_catalog_from};
use quiz_core::model::TopicCatalog;
use services::{Clock, QuizService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidContentDir { raw: String },
    InvalidTopicsFile { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidContentDir { raw } => {
                write!(f, "invalid --content value: {raw}")
            }
            ArgsError::InvalidTopicsFile { raw } => {
                write!(f, "invalid --topics value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<TopicCatalog>,
    store: ContentStore,
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    fn content_store(&self) -> ContentStore {
        self.store.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

struct Args {
    content_dir: PathBuf,
    topics_file: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content <dir>] [--topics <file>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content ./content");
    eprintln!("  --topics  <content>/topics.json if present, else built-in topics");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_CONTENT_DIR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut content_dir = std::env::var("PREP_CONTENT_DIR")
            .ok()
            .map_or_else(|| PathBuf::from("./content"), PathBuf::from);
        let mut topics_file = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    let value = require_value(args, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentDir { raw: value });
                    }
                    content_dir = PathBuf::from(value);
                }
                "--topics" => {
                    let value = require_value(args, "--topics")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTopicsFile { raw: value });
                    }
                    topics_file = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            content_dir,
            topics_file,
        })
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// The catalog is loaded once at startup; a broken or absent `topics.json`
/// falls back to the built-in topic list so the app always opens.
async fn resolve_catalog(store: &ContentStore) -> TopicCatalog {
    match load_catalog(store).await {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(error = %err, "topic catalog load failed, using built-in topics");
            builtin_catalog()
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if !Path::new(&parsed.content_dir).is_dir() {
        tracing::warn!(
            dir = %parsed.content_dir.display(),
            "content directory not found, topics will fail to load"
        );
    }

    let store = ContentStore::new(parsed.content_dir);
    // An explicit --topics override that cannot be loaded is a startup error;
    // only the implicit <content>/topics.json lookup falls back.
    let catalog = match &parsed.topics_file {
        Some(path) => load_catalog_from(path).await?,
        None => resolve_catalog(&store).await,
    };
    let clock = Clock::default_clock();
    let quiz_service = Arc::new(QuizService::new(
        Arc::new(FsQuestionSource::new(store.clone())),
        clock,
    ));

    let app = DesktopApp {
        catalog: Arc::new(catalog),
        store,
        quiz_service,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Interview Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
