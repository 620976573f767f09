//! Pallet layout CLI

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pallet_layout_bed::LoadPlan;
use pallet_layout_cli::{load_config, LayoutReport};
use pallet_layout_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pallet-layout")]
#[command(about = "Arrange pallets on a trailer loading bed")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Arrange pallets and print the layout
    Arrange {
        #[command(flatten)]
        overrides: Overrides,

        /// JSON config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default configuration as JSON
    Defaults,
}

#[derive(Args)]
struct Overrides {
    /// Bed width in meters
    #[arg(long)]
    trailer_width: Option<f64>,

    /// Bed length in meters
    #[arg(long)]
    trailer_length: Option<f64>,

    /// Number of pallets
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Pallet width in meters
    #[arg(long)]
    width: Option<f64>,

    /// Pallet length in meters
    #[arg(long)]
    length: Option<f64>,

    /// Pallet height in meters
    #[arg(long)]
    height: Option<f64>,

    /// Clearance along the bed edges in meters
    #[arg(long)]
    margin: Option<f64>,

    /// Gap between pallets in meters
    #[arg(long)]
    spacing: Option<f64>,
}

impl Overrides {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(v) = self.trailer_width {
            config.trailer_width = v;
        }
        if let Some(v) = self.trailer_length {
            config.trailer_length = v;
        }
        if let Some(v) = self.count {
            config.pallet_count = v;
        }
        if let Some(v) = self.width {
            config.pallet_width = v;
        }
        if let Some(v) = self.length {
            config.pallet_length = v;
        }
        if let Some(v) = self.height {
            config.pallet_height = v;
        }
        if let Some(v) = self.margin {
            config.margin = v;
        }
        if let Some(v) = self.spacing {
            config.spacing = v;
        }
        config
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Fixed-width table
    Table,
    /// Pretty JSON report
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Arrange {
            overrides,
            config,
            format,
            output,
        } => {
            let base = match config {
                Some(path) => load_config(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::default(),
            };
            let config = overrides.apply(base);
            log::debug!("Arranging with {:?}", config);

            let plan = LoadPlan::new(config)?;
            let report = LayoutReport::from_plan(&plan);

            match format {
                Format::Table => print!("{}", report.to_table()),
                Format::Json => println!("{}", report.to_json()?),
            }

            if let Some(path) = output {
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
        }

        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&Config::default())?);
        }
    }

    Ok(())
}
