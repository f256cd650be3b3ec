use clap::Parser;
use imagesim::cli::commands::{Cli, Commands};
use imagesim::config::Settings;
use imagesim::infrastructure::model::download::ModelDownloader;
use imagesim::ImageSim;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();

    let result = run_command(&settings, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(settings: &Settings, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let gallery = || ImageSim::new(settings);

    match cmd {
        Commands::Similar { name, exclude, limit } => {
            let results = gallery()?.similar(&name, &exclude, limit)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Sample { count } => {
            let names = gallery()?.sample(count)?;
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        Commands::Images => {
            let names = gallery()?.images()?;
            let count = names.len();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "images": names,
                    "count": count,
                }))?
            );
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&gallery()?.stats())?);
        }
        Commands::Feature { name } => {
            let record = gallery()?.feature(&name)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Reindex => {
            let report = gallery()?.reindex().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::FetchModel => {
            let downloader = ModelDownloader::new(settings.model_url.clone(), settings.model_path.clone());
            let bytes = downloader.download().await?;
            println!("Downloaded {bytes} bytes to {}", downloader.dest().display());
        }
    }
    Ok(())
}
