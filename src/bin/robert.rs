use anyhow::Result;
use clap::Parser;
use robert::assistant::Assistant;
use robert::cli::run_session;
use robert::config::Config;
use robert::storage::LocalStorage;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "robert")]
#[command(about = "A personal task-tracking assistant")]
#[command(version)]
struct Cli {
    /// Task file to load and save (overrides config and ROBERT_DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Config file to read instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_or_else(|e| (Config::default(), Some(e)), |c| (c, None));

    // Logs go to stderr so they never mix with the replies on stdout.
    // RUST_LOG wins over the config filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default configuration");
        eprintln!("{}", e);
    }

    let data_file = config.resolve_data_file(cli.data_file.as_deref());
    tracing::debug!(path = %data_file.display(), "using data file");

    let mut assistant = Assistant::new(LocalStorage::new(data_file));
    let stdin = io::stdin();
    run_session(&mut assistant, stdin.lock(), io::stdout().lock())
}
