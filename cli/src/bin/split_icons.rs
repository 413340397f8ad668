use clap::Parser;
use cli::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, execute_run, load_config, plan_runs, run_all};
use color_eyre::eyre::{Result, eyre};
use sprite_split::{SplitConfig, Strategy};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Split a sprite sheet into individual icons", long_about = None)]
struct Cli {
    /// Path to the sprite sheet
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// Output directory (suffixed with _grid / _auto when no strategy is given)
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Run only this strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,
    /// Threshold configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write report.json next to the extracted icons
    #[arg(long)]
    report: bool,
    /// Print the configuration file JSON schema and exit
    #[arg(long)]
    config_schema: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    if cli.config_schema {
        println!("{}", serde_json::to_string_pretty(&SplitConfig::schema())?);
        return Ok(());
    }

    if !cli.source.exists() {
        return Err(eyre!(
            "Source image not found: {}\nUsage: split_icons [SOURCE] [OUTPUT_DIR]",
            cli.source.display()
        ));
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SplitConfig::default(),
    };

    info!("Input image: {:?}", cli.source);
    info!("Output directory: {:?}", cli.output_dir);

    let runs = plan_runs(cli.strategy, &cli.output_dir);

    // An explicitly chosen strategy fails the whole invocation
    if cli.strategy.is_some() {
        for run in &runs {
            info!("Strategy: {}", run.strategy.description());
            execute_run(&cli.source, run, &config, cli.report)?;
        }
        return Ok(());
    }

    let counts = run_all(&cli.source, &runs, &config, cli.report);

    info!("✅ Splitting completed!");
    for (strategy, count) in counts {
        info!("  {}: {} icons", strategy, count);
    }

    Ok(())
}
