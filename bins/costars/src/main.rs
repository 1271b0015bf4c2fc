// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Costars CLI
//!
//! For each listed actor name, reports how many distinct actors they have
//! appeared with across all movies (self excluded). Unknown names count 0.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use costar_core::{load, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Tab-delimited cast listing: actor, movie title, release year.
    casts: PathBuf,
    /// Actor names to count co-stars for, one per line.
    actors: PathBuf,
    /// Report output path.
    out: PathBuf,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path).with_context(|| {
        format!("failed to open {}", path.display())
    })?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let started = Instant::now();

    let cast = load::read_cast(open(&args.casts)?)
        .with_context(|| format!("failed to read {}", args.casts.display()))?;
    info!(
        actors = cast.actor_count(),
        movies = cast.movie_count(),
        "cast listing loaded"
    );
    let names = load::read_names(open(&args.actors)?)
        .with_context(|| format!("failed to read {}", args.actors.display()))?;

    let mut lines = Vec::with_capacity(names.len());
    for name in &names {
        let count = cast.costar_count(name);
        info!("{name}: {count}");
        lines.push(count.to_string());
    }

    report::write_report_file(&args.out, report::COSTAR_REPORT_HEADER, &lines)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!("time taken: {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}
