//! Species list in, taxon key table out.
use crate::csv_handler::{load_species_names, write_taxon_keys};
use crate::error::Result;
use crate::gbif::NameMatcher;
use crate::taxon::resolver::{ResolutionSummary, resolve_names};
use indicatif::ProgressBar;
use log::{error, info};
use std::path::Path;

/// Reads `column_name` from `species_path`, resolves every name with
/// `matcher` and writes one row per input row to `output_path`.
///
/// The output file is only written once every lookup has succeeded.
pub async fn run<M>(
    matcher: &M,
    species_path: &Path,
    column_name: &str,
    output_path: &Path,
    progress: &ProgressBar,
) -> Result<ResolutionSummary>
where
    M: NameMatcher + ?Sized,
{
    let names = match load_species_names(species_path, column_name) {
        Ok(names) => {
            info!("Loaded {} species names.", names.len());
            names
        }
        Err(e) => {
            error!("Failed to load species list: {}", e);
            return Err(e);
        }
    };

    progress.set_length(names.len() as u64);
    let (records, summary) = match resolve_names(matcher, &names, progress).await {
        Ok(resolved) => resolved,
        Err(e) => {
            progress.abandon();
            error!("GBIF lookup failed: {}", e);
            return Err(e);
        }
    };
    progress.finish_with_message("Name resolution complete.");

    if let Err(e) = write_taxon_keys(output_path, &records) {
        error!("Failed to write {:?}: {}", output_path, e);
        return Err(e);
    }
    info!("Wrote {} rows to {:?}", records.len(), output_path);

    Ok(summary)
}
