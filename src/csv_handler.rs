use crate::error::{CrateError, Result};
use crate::taxon::resolver::{OUTPUT_HEADERS, TaxonKeyRecord};
use std::path::Path;

// Reads the species names from `column_name`, in file order.
pub fn load_species_names(file_path: &Path, column_name: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();

    let column_index = headers
        .iter()
        .position(|h| h == column_name)
        .ok_or_else(|| CrateError::MissingHeader(column_name.to_string()))?;

    let mut names = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Records are length-checked against the header, so the index exists.
        names.push(record.get(column_index).unwrap_or_default().to_string());
    }

    Ok(names)
}

// Writes the taxon key table, header first, one row per record.
pub fn write_taxon_keys(file_path: &Path, records: &[TaxonKeyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_path)?;
    writer.write_record(OUTPUT_HEADERS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}
