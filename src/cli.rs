use clap::Parser;
use std::path::PathBuf;

use crate::gbif::DEFAULT_GBIF_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV file holding the species list.
    #[arg(long = "species_filepath", alias = "species-filepath", value_name = "FILE")]
    pub species_filepath: PathBuf,

    /// Name of the column holding the species names.
    #[arg(long = "column_name", alias = "column-name", value_name = "COLUMN")]
    pub column_name: String,

    /// Path to the output CSV file.
    #[arg(long = "output_filepath", alias = "output-filepath", value_name = "FILE")]
    pub output_filepath: PathBuf,

    /// Base URL of the GBIF API.
    #[arg(long = "gbif_api_url", alias = "gbif-api-url", value_name = "URL", default_value = DEFAULT_GBIF_API_URL)]
    pub gbif_api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout_secs", alias = "timeout-secs", value_name = "SECONDS", default_value_t = 30)]
    pub timeout_secs: u64,
}
