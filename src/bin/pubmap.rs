use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use num_format::{Locale, ToFormattedString};
use pubmap::{Dataset, MapConfig};
use pubmap::{map, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pubmap",
    version,
    about = "Export per-country publication counts as CSV and an interactive map"
)]
struct Cli {
    /// Directory for countries.csv and map.html (created if missing).
    #[arg(long, default_value = "files")]
    out_dir: PathBuf,
    /// JSON dataset to use instead of the built-in one.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Print how many countries were placed on the map.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = match cli.data.as_ref() {
        Some(path) => {
            info!("loading dataset from {}", path.display());
            storage::load_dataset_json(path)?
        }
        None => Dataset::builtin(),
    };

    let out = dataset.build()?;
    debug!(
        "{} rows, {} markers, {} without coordinates",
        out.table.len(),
        out.markers.len(),
        out.table.len() - out.markers.len()
    );

    storage::ensure_dir(&cli.out_dir)?;

    let csv_path = cli.out_dir.join("countries.csv");
    info!("writing {}", csv_path.display());
    storage::save_csv(&out.table, &csv_path)?;
    println!("CSV file created: {}", csv_path.display());

    let html_path = cli.out_dir.join("map.html");
    info!("writing {}", html_path.display());
    map::save_html(&out.markers, &MapConfig::default(), &html_path)?;
    println!("Map file created: {}", html_path.display());

    if cli.stats {
        let c = stats::coverage(&out, &dataset.coordinates);
        println!(
            "countries={} mapped={} total_publications={} max={}",
            c.rows,
            c.mapped,
            c.total_publications.to_formatted_string(&Locale::en),
            c.max_count
                .map(|m| m.to_formatted_string(&Locale::en))
                .unwrap_or_else(|| "NA".to_string())
        );
        if !c.unmapped.is_empty() {
            println!("unmapped: {}", c.unmapped.join(", "));
        }
    }

    Ok(())
}
