//! Command-line front end: load a grid file and print both answers.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use hillpath_lib::{HeightMap, Report, Strategy};

/// Fewest steps up an elevation grid from 'S' to 'E', and from the best
/// lowest cell to 'E'.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Grid file: rows of 'a'-'z' with one 'S' and one 'E'.
    input: PathBuf,

    /// How to answer the best-of-many-starts query.
    #[arg(short, long, value_enum, default_value_t)]
    strategy: Strategy,

    /// Print the shortest path and draw it over the grid.
    #[arg(short = 'p', long)]
    show_path: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let options = Options::parse();

    let t0 = Instant::now();
    let map = HeightMap::from_file(&options.input)
        .with_context(|| format!("loading {}", options.input.display()))?;
    log::info!("loaded {} in {:?}", options.input.display(), t0.elapsed());

    let report = Report::solve(&map, options.strategy, options.show_path);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
