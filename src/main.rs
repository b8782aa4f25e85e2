use anyhow::Context;
use awards::{headless, reload};
use awards_core::{config::Config, Filter, Query, RecordSet, Store};
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "awards", about = "Filter, search and paginate award data")]
struct Cli {
    /// Write debug logs to /tmp/awards-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/awards/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP search API.
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8080.
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        data: Option<PathBuf>,
        /// Reload the data file when it changes.
        #[arg(long)]
        watch: bool,
    },
    /// Run one search and print the page as JSON.
    Query(QueryArgs),
    /// Print the faculty list, one per line.
    Faculties {
        #[arg(long, default_value = "all")]
        campus: String,
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Free-text search term.
    #[arg(default_value = "")]
    term: String,
    #[arg(long, default_value = "all")]
    campus: String,
    #[arg(long, default_value = "all")]
    faculty: String,
    #[arg(long, default_value = "all")]
    learner: String,
    /// Award type label (Scholarship, Bursaries, …) or stored code.
    #[arg(long, default_value = "all")]
    award_type: String,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long)]
    per_page: Option<NonZeroUsize>,
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using built-in config defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Serve { bind, data, watch } => {
            let data = data.unwrap_or_else(|| config.data.path.clone());
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve(&config, &data, &bind, watch || config.data.watch)
        }
        Command::Query(args) => {
            let set = load(args.data.as_deref().unwrap_or(&config.data.path))?;
            let query = Query::new()
                .term(args.term)
                .campus(args.campus)
                .faculty(args.faculty)
                .learner(args.learner)
                .award_type(args.award_type);
            let per_page = config
                .search
                .limit_per_page(args.per_page.unwrap_or(config.search.per_page));
            headless::print_query(&set, &query, args.page, per_page, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Command::Faculties { campus, data } => {
            let set = load(data.as_deref().unwrap_or(&config.data.path))?;
            headless::print_faculties(&set, &Filter::from(campus), &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

fn load(path: &Path) -> anyhow::Result<RecordSet> {
    RecordSet::load(path).with_context(|| format!("loading award data from {}", path.display()))
}

#[tokio::main]
async fn serve(config: &Config, data: &Path, bind: &str, watch: bool) -> anyhow::Result<()> {
    let store = Arc::new(Store::new(RecordSet::load_or_empty(data)));

    // Dropping the watcher stops reloads, so it lives for the whole server run.
    let _watcher = if watch {
        Some(reload::watch(data, Arc::clone(&store)).context("starting data file watcher")?)
    } else {
        None
    };

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    let state = awards_web::AppState::new(store, config.search.clone());
    awards_web::serve(listener, state).await?;
    Ok(())
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/awards-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("awards debug log started, tail -f /tmp/awards-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
