mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arbor",
    version,
    about = "Compliance breakdown trees for food inspection sample data"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the commodities in a dataset with their sample counts
    Commodities {
        /// Path to a CSV, TSV or XLSX dataset
        input_file: PathBuf,

        /// Workbook sheet to read (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,
    },
    /// List the variants of one commodity, marking the default
    Variants {
        /// Path to a CSV, TSV or XLSX dataset
        input_file: PathBuf,

        /// Commodity name, as listed by `arbor commodities`
        #[arg(short, long)]
        commodity: String,

        /// Workbook sheet to read (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Build the compliance tree for a commodity
    Tree(commands::tree::TreeArgs),
    /// Inspect and validate tree styles
    Style {
        #[command(subcommand)]
        action: StyleAction,
    },
}

#[derive(Subcommand)]
enum StyleAction {
    /// List predefined styles
    List,
    /// Print a predefined style as JSON
    Show {
        /// Preset name (e.g., "landscape")
        preset: String,
    },
    /// Validate a custom style file
    Validate {
        /// Path to JSON style file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Commodities { input_file, sheet } => {
            commands::dataset::commodities(&input_file, sheet.as_deref())
        }
        Commands::Variants {
            input_file,
            commodity,
            sheet,
        } => commands::dataset::variants(&input_file, &commodity, sheet.as_deref()),
        Commands::Tree(args) => commands::tree::run(args),
        Commands::Style { action } => match action {
            StyleAction::List => commands::style::list(),
            StyleAction::Show { preset } => commands::style::show(&preset),
            StyleAction::Validate { file } => commands::style::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
