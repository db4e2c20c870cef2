use clap::{Args, Parser, Subcommand};
use lei_core::config::Config;
use lei_core::{Query, SearchField};
use lei_search::headless::{self, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lei-search", about = "Search the LEI Latinismi article index")]
struct Cli {
    /// Config file to use instead of $XDG_CONFIG_HOME/lei-search/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/lei-search-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Dataset location (file path or http:// URL), overriding the config.
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Interactive terminal UI (the default).
    Tui,
    /// Run one search and print the matching rows.
    Search(SearchArgs),
    /// Print the dropdown values for every field.
    Values {
        /// Print JSON instead of one line per field.
        #[arg(long)]
        json: bool,
    },
    /// Serve the search page over HTTP.
    Serve {
        /// Address to bind, overriding `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Title words, "quoted phrases" and wild*cards.
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    volume: Option<String>,
    #[arg(long)]
    fascicolo: Option<String>,
    /// Publication date.
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    col_start: Option<String>,
    #[arg(long)]
    col_end: Option<String>,
    /// First author, matched exactly.
    #[arg(long)]
    author: Option<String>,
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl SearchArgs {
    fn query(&self) -> Query {
        [
            (SearchField::Title, &self.title),
            (SearchField::Volume, &self.volume),
            (SearchField::Fascicolo, &self.fascicolo),
            (SearchField::Date, &self.date),
            (SearchField::ColStart, &self.col_start),
            (SearchField::ColEnd, &self.col_end),
            (SearchField::Author, &self.author),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.clone())))
        .fold(Query::new(), |q, (field, v)| q.field(field, v))
    }
}

fn init_logging(debug: bool, serving: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/lei-search-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("lei-search debug log started — tail -f /tmp/lei-search-debug.log");
    } else if serving {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("info"))
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Cmd::Tui);
    init_logging(cli.debug, matches!(command, Cmd::Serve { .. }))?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config: falling back to defaults");
            Config::defaults()
        }),
    };
    let location = cli.data.unwrap_or_else(|| config.data.source.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    let session = runtime.block_on(lei_search::load_session(config, &location));

    match command {
        Cmd::Tui => {
            drop(runtime);
            lei_tui::run(session)
        }
        Cmd::Search(args) => {
            let out = headless::render_search(&session, &args.query(), args.format)?;
            print!("{out}");
            Ok(())
        }
        Cmd::Values { json } => {
            print!("{}", headless::render_values(&session, json)?);
            Ok(())
        }
        Cmd::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| session.config().server.bind.clone());
            runtime.block_on(lei_search::server::serve(Arc::new(session), &addr))
        }
    }
}
