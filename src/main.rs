//! Site shortcut app generator CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use site2crx::{report, Generator, Settings};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "site2crx")]
#[command(about = "Turn any web page into an installable Chrome shortcut app", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML settings file. Without one, assets are read from
    /// $SITE2CRX_ASSETS, ./assets or assets/ beside the executable
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a shortcut app package for a URL
    Generate {
        /// Page the app should launch
        #[arg(short, long)]
        url: String,

        /// Directory to write the package into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show the resolved title and icon source without packaging
    Resolve {
        #[arg(short, long)]
        url: String,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long)]
        addr: Option<String>,
    },
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let generator = Generator::new(&settings)?;

    match cli.command {
        Commands::Generate { url, output } => {
            let bar = spinner(&format!("Generating app for {}", url));
            let result = generator.generate(&url).await;
            bar.finish_and_clear();
            let package = result?;

            std::fs::create_dir_all(&output)?;
            let path = output.join(&package.filename);
            std::fs::write(&path, &package.bytes)?;

            println!("{}", "✅ Shortcut app generated!".green().bold());
            println!();
            print!("{}", report::generate_report(&package));
            println!("📦 Saved to {}", path.display());
        }

        Commands::Resolve { url, json } => {
            let bar = spinner(&format!("Fetching {}", url));
            let result = generator.resolve(&url).await;
            bar.finish_and_clear();
            let config = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", report::generate_resolution_report(&config));
            }
        }

        #[cfg(feature = "server")]
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| settings.bind_addr.clone());
            println!("{}", format!("Serving on http://{}", addr).bold().blue());
            site2crx::server::serve(&addr, std::sync::Arc::new(generator)).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    site2crx::logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}", "❌ Failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
