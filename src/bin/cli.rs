//! Launch Dash CLI
//!
//! Offline access to the dashboard computations:
//! - Print the pie chart for a site selection
//! - List the launches the scatter chart would plot
//! - Summarize the dataset
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use launch_dash::charts::{filter_scatter, pie_chart, PayloadRange, SiteSelection};
use launch_dash::config::{generate_default_config, LoggingConfig};
use launch_dash::dataset::Dataset;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "launch-dash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect SpaceX launch records from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Launch records CSV
    #[arg(long, default_value = "spacex_launch_dash.csv", global = true)]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show pie chart counts
    Pie {
        /// "ALL" or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: String,
    },

    /// List launches in a payload range
    Scatter {
        /// "ALL" or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: String,
        /// Lower payload bound (kg)
        #[arg(long, default_value_t = 0.0)]
        low: f64,
        /// Upper payload bound (kg)
        #[arg(long, default_value_t = 10_000.0)]
        high: f64,
    },

    /// Show dataset statistics
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep table output clean: only warnings and errors go to the log
    launch_dash::logging::init(&LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    });

    match cli.command {
        Commands::Pie { site } => {
            let dataset = load(&cli.data)?;
            let selection: SiteSelection = site.parse()?;
            let chart = pie_chart(&dataset, &selection);

            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                Format::Table => {
                    println!("{}", chart.title);
                    println!("{:<16} {:>6} {:>7}  {}", "LABEL", "COUNT", "SHARE", "COLOR");
                    let total = chart.total();
                    for slice in &chart.slices {
                        let share = if total > 0 {
                            100.0 * slice.count as f64 / total as f64
                        } else {
                            0.0
                        };
                        println!(
                            "{:<16} {:>6} {:>6.1}%  {}",
                            slice.label, slice.count, share, slice.color
                        );
                    }
                    println!("{:<16} {:>6}", "TOTAL", total);
                }
            }
        }

        Commands::Scatter { site, low, high } => {
            let dataset = load(&cli.data)?;
            let selection: SiteSelection = site.parse()?;
            let range = PayloadRange::new(low, high)?;
            let rows = filter_scatter(&dataset, &selection, range);

            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                Format::Table => {
                    println!(
                        "{:<14} {:>12} {:>6}  {}",
                        "SITE", "PAYLOAD_KG", "CLASS", "BOOSTER"
                    );
                    for row in &rows {
                        println!(
                            "{:<14} {:>12.1} {:>6}  {}",
                            row.site,
                            row.payload_mass_kg,
                            row.outcome.class(),
                            row.booster_category
                        );
                    }
                    println!("{} launches in {}", rows.len(), range);
                }
            }
        }

        Commands::Summary => {
            let dataset = load(&cli.data)?;
            let summary = dataset.summary();

            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                Format::Table => {
                    println!("Records:    {}", summary.records);
                    println!("Successes:  {}", summary.successes);
                    println!(
                        "Payload:    {} - {} kg",
                        summary.payload_min, summary.payload_max
                    );
                    println!("Launches by site:");
                    for (site, count) in &summary.launches_by_site {
                        println!("  {:<14} {:>4}", site, count);
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    eprintln!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Dataset> {
    Dataset::load(path).with_context(|| format!("loading launch dataset {:?}", path))
}
