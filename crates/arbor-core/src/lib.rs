pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod style;
pub mod tree;

use aggregate::{aggregate, Branch};
use std::collections::HashSet;
use error::ArborError;
use model::{Dataset, Selector};
use style::schema::StyleConfig;
use tree::TreeOutput;

/// Main API entry point: build the compliance tree for one
/// (commodity, variant) pair.
///
/// Fails with `EmptySubset` before anything is assembled when no rows
/// match the selector.
pub fn build_tree(
    dataset: &Dataset,
    selector: &Selector,
    style: &StyleConfig,
) -> Result<TreeOutput, ArborError> {
    let rows = classify::filter_subset(dataset, selector)?;
    let classification = classify::classify(selector, &rows)?;

    let quality = aggregate(&classification.quality_rows, Branch::Quality);
    let safety = aggregate(&classification.safety_rows, Branch::Safety);

    Ok(tree::assemble(
        selector,
        &classification.counts,
        &quality,
        &safety,
        style,
    ))
}

/// Tree result for one variant of a commodity batch.
#[derive(Debug)]
pub struct VariantTree {
    pub selector: Selector,
    pub result: Result<TreeOutput, ArborError>,
}

/// Build a tree for every variant of a commodity, in first-seen order.
///
/// A variant that fails is logged and kept as an `Err` in its slot; the
/// remaining variants are still built.
pub fn build_commodity_trees(
    dataset: &Dataset,
    commodity: &str,
    style: &StyleConfig,
) -> Result<Vec<VariantTree>, ArborError> {
    let variants = dataset.variants(commodity);
    if variants.is_empty() {
        return Err(ArborError::UnknownCommodity(commodity.to_string()));
    }

    let trees = variants
        .into_iter()
        .map(|variant| {
            let selector = Selector::new(commodity, variant);
            let result = build_tree(dataset, &selector, style);
            if let Err(ref e) = result {
                tracing::warn!(selector = %selector, error = %e, "skipping variant");
            }
            VariantTree { selector, result }
        })
        .collect();

    Ok(trees)
}

/// File name for a tree's DOT output: `{commodity}_{variant}.dot`, with
/// characters that are unsafe in file names replaced by `_`.
pub fn dot_file_name(selector: &Selector) -> String {
    let raw = format!("{}_{}", selector.commodity, selector.variant);
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{cleaned}.dot")
}

/// File names for a batch of trees, one per selector in order.
///
/// Selectors whose names clean to the same file get `_2`, `_3`, ...
/// before the extension so no tree overwrites another.
pub fn dot_file_names<'a>(selectors: impl IntoIterator<Item = &'a Selector>) -> Vec<String> {
    let mut used = HashSet::new();
    let mut names = Vec::new();
    for selector in selectors {
        let base = dot_file_name(selector);
        let stem = base.strip_suffix(".dot").unwrap_or(&base);
        let mut name = base.clone();
        let mut n = 2;
        while used.contains(&name) {
            name = format!("{stem}_{n}.dot");
            n += 1;
        }
        if name != base {
            tracing::warn!(selector = %selector, file = %name, "file name collision, adding suffix");
        }
        used.insert(name.clone());
        names.push(name);
    }
    names
}
