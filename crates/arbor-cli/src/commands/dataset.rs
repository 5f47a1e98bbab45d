use arbor_core::error::ArborError;
use arbor_core::extraction::columns::LoadedDataset;
use arbor_core::extraction::{load_path_with, LoadOptions};
use std::path::Path;

/// Load a dataset file and report rows the loader had to skip.
pub fn load(input_file: &Path, sheet: Option<&str>) -> Result<LoadedDataset, ArborError> {
    let options = LoadOptions {
        sheet: sheet.map(str::to_string),
        ..Default::default()
    };
    let loaded = load_path_with(input_file, &options)?;
    if !loaded.skipped_rows.is_empty() {
        eprintln!(
            "  {} row(s) skipped while loading {}",
            loaded.skipped_rows.len(),
            input_file.display()
        );
    }
    Ok(loaded)
}

pub fn commodities(input_file: &Path, sheet: Option<&str>) -> Result<(), ArborError> {
    let dataset = load(input_file, sheet)?.dataset;
    let commodities = dataset.commodities();

    if commodities.is_empty() {
        println!("No commodities found.");
        return Ok(());
    }

    let width = commodities.iter().map(|c| c.len()).max().unwrap_or(10);
    println!("Commodities ({}):\n", commodities.len());
    for commodity in &commodities {
        let samples = dataset
            .rows
            .iter()
            .filter(|r| r.commodity.trim() == commodity)
            .count();
        println!("  {:<width$}  {:>5} sample(s)", commodity, samples, width = width);
    }

    Ok(())
}

pub fn variants(
    input_file: &Path,
    commodity: &str,
    sheet: Option<&str>,
) -> Result<(), ArborError> {
    let dataset = load(input_file, sheet)?.dataset;
    let counts = dataset.variant_counts(commodity);
    if counts.is_empty() {
        return Err(ArborError::UnknownCommodity(commodity.to_string()));
    }
    let default_variant = dataset.default_variant(commodity);

    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(10);
    println!("Variants of {commodity}:\n");
    for (variant, samples) in &counts {
        let marker = if default_variant.as_deref() == Some(variant.as_str()) {
            "  (default)"
        } else {
            ""
        };
        println!(
            "  {:<width$}  {:>5} sample(s){}",
            variant,
            samples,
            marker,
            width = width
        );
    }

    Ok(())
}
