pub mod cli;
pub mod csv_handler;
pub mod error;
pub mod gbif;
pub mod pipeline;
pub mod taxon;

use clap::Parser;
use cli::Cli;
use error::Result;
use gbif::GbifClient;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};
use pipeline::run;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .expect("Failed to initialize logger");

    let cli = Cli::parse();
    info!("Starting GBIF taxon key lookup...");
    info!("Species file: {:?} (column {:?})", cli.species_filepath, cli.column_name);
    info!("Output file: {:?}", cli.output_filepath);

    let start_time = Instant::now();

    let client = GbifClient::new(&cli.gbif_api_url, Duration::from_secs(cli.timeout_secs))?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("Failed to set progress bar style")
            .progress_chars("##-"),
    );

    let summary = run(
        &client,
        &cli.species_filepath,
        &cli.column_name,
        &cli.output_filepath,
        &pb,
    )
    .await?;

    let duration = start_time.elapsed();
    info!("Total execution time: {:.2?}", duration);

    println!("\n--- Summary Report ---");
    println!("Species names read: {}", summary.total());
    println!("Resolved to a GBIF species: {}", summary.matched);
    println!("No confident match: {}", summary.no_match);
    println!("No rank returned: {}", summary.no_rank);
    println!("Rank other than species returned: {}", summary.wrong_rank);
    println!("Taxon keys saved to: {}", cli.output_filepath.display());
    println!("Execution time: {:.2?}", duration);

    Ok(())
}
