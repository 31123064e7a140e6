use brewfind::api::BrewApi;
use brewfind::search::KindFilter;
use brewfind::{cache, colors, output, search};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(name = "brewfind")]
#[command(
    author,
    version,
    about = "Search Homebrew packages by keyword, ranked by 90-day install counts",
    long_about = None
)]
struct Cli {
    /// Search term
    term: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 30)]
    number: usize,

    /// Search casks only
    #[arg(short, long, conflicts_with = "formula")]
    cask: bool,

    /// Search formulas only
    #[arg(short, long, conflicts_with = "cask")]
    formula: bool,

    /// Refresh statistics even if the cache is still fresh
    #[arg(long)]
    update: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "warn");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    colors::init_colors();

    let cli = Cli::parse();

    // Resolved before any network or cache activity.
    let filter = KindFilter::from_flags(cli.formula, cli.cask)?;

    let api = BrewApi::new()?;
    let path = cache::statistics_path();

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let spinner = if is_tty {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Fetching statistics...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let snapshot = cache::load_or_refresh(&api, &path, cli.update).await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let results = search::search(&snapshot, &cli.term, cli.number, filter);
    output::render(&results);

    Ok(())
}
