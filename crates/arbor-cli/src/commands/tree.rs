use arbor_core::error::ArborError;
use arbor_core::model::Selector;
use arbor_core::style::builtin;
use arbor_core::style::schema::{RankDir, StyleConfig};
use arbor_core::tree::TreeOutput;
use arbor_core::{build_commodity_trees, build_tree, dot_file_names};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::commands::dataset;
use crate::output;

#[derive(Args)]
pub struct TreeArgs {
    /// Path to a CSV, TSV or XLSX dataset
    input_file: PathBuf,

    /// Commodity name, as listed by `arbor commodities`
    #[arg(short, long)]
    commodity: String,

    /// Variant to build (default: "Packed Samples", else the most frequent)
    #[arg(long, conflicts_with = "all_variants")]
    variant: Option<String>,

    /// Build one tree per variant of the commodity
    #[arg(long)]
    all_variants: bool,

    /// Workbook sheet to read (default: first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Predefined style: default, landscape, print
    #[arg(short, long, default_value = "default")]
    preset: String,

    /// Custom JSON style file (replaces the preset)
    #[arg(short, long = "style", value_name = "FILE")]
    style: Option<PathBuf>,

    /// Layout direction: TB or LR
    #[arg(long)]
    rankdir: Option<String>,

    /// Node font name
    #[arg(long)]
    font_name: Option<String>,

    /// Node font size in points
    #[arg(long)]
    font_size: Option<u32>,

    /// Graphviz node shape, e.g. box or ellipse
    #[arg(long)]
    shape: Option<String>,

    /// Output format: table (default), json or dot
    #[arg(short, long, default_value = "table")]
    output: String,

    /// Write one .dot file per tree into this directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

impl TreeArgs {
    /// Preset, then style file, then individual flags.
    fn resolve_style(&self) -> Result<StyleConfig, ArborError> {
        let mut style = match &self.style {
            Some(path) => arbor_core::style::load_style(path)?,
            None => builtin::load_preset(&self.preset)?,
        };

        if let Some(ref raw) = self.rankdir {
            style.rankdir = RankDir::from_str_loose(raw).ok_or_else(|| {
                ArborError::StyleInvalid(format!("unknown rankdir '{raw}', expected TB or LR"))
            })?;
        }
        if let Some(ref font_name) = self.font_name {
            style.font_name = font_name.clone();
        }
        if let Some(font_size) = self.font_size {
            style.font_size = font_size;
        }
        if let Some(ref shape) = self.shape {
            style.node_shape = shape.clone();
        }

        arbor_core::style::validate_style(&style)?;
        Ok(style)
    }
}

pub fn run(args: TreeArgs) -> Result<(), ArborError> {
    let style = args.resolve_style()?;
    let dataset = dataset::load(&args.input_file, args.sheet.as_deref())?.dataset;

    let trees: Vec<(Selector, TreeOutput)> = if args.all_variants {
        let mut built = Vec::new();
        let mut first_error = None;
        for variant_tree in build_commodity_trees(&dataset, &args.commodity, &style)? {
            match variant_tree.result {
                Ok(tree) => built.push((variant_tree.selector, tree)),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        match (built.is_empty(), first_error) {
            (true, Some(e)) => return Err(e),
            _ => built,
        }
    } else {
        let variant = match args.variant.clone() {
            Some(v) => v,
            None => dataset
                .default_variant(&args.commodity)
                .ok_or_else(|| ArborError::UnknownCommodity(args.commodity.clone()))?,
        };
        let selector = Selector::new(args.commodity.as_str(), variant);
        tracing::info!(selector = %selector, "building tree");
        let tree = build_tree(&dataset, &selector, &style)?;
        vec![(selector, tree)]
    };

    if let Some(ref dir) = args.out_dir {
        write_dot_files(dir, &trees)?;
    }

    match args.output.as_str() {
        "json" => {
            let stats: Vec<_> = trees.iter().map(|(_, t)| &t.stats).collect();
            if args.all_variants {
                output::json::print(&stats)?;
            } else {
                output::json::print(&stats[0])?;
            }
        }
        "dot" => {
            let dots: Vec<&str> = trees.iter().map(|(_, t)| t.dot.as_str()).collect();
            println!("{}", dots.join("\n\n"));
        }
        _ => output::table::print(trees.iter().map(|(_, t)| t)),
    }

    Ok(())
}

fn write_dot_files(dir: &Path, trees: &[(Selector, TreeOutput)]) -> Result<(), ArborError> {
    std::fs::create_dir_all(dir)?;
    let names = dot_file_names(trees.iter().map(|(selector, _)| selector));
    for ((_, tree), name) in trees.iter().zip(names) {
        let path = dir.join(name);
        std::fs::write(&path, &tree.dot)?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
