//! Marching-cubes case table baker.
//!
//! Classifies all 256 corner cases and writes the lookup tables consumed by
//! the isosurface kernel as a JSON document:
//! - edges: per case, up to MAX_TRIANGLES triangles of 3 edge ids, padded with -1
//! - case_sizes: triangles used per case
//! - edge_corners / edge_samples: edge numbering and sample addressing

mod config;
mod document;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use voxel_tables::{classify, CaseTable, CASE_COUNT};

use config::Config;
use document::TableDocument;

/// Case table baker for voxel isosurface kernels.
#[derive(Parser, Debug)]
#[command(name = "bake_tables")]
#[command(about = "Bakes marching-cubes case tables into a JSON document")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Output path (overrides the config file).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Write compact JSON instead of pretty-printed.
	#[arg(long)]
	compact: bool,

	/// Log the resolution of every case.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.init();

	let mut config = match &args.config {
		Some(path) => {
			info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};
	config.apply_overrides(args.output, args.compact)?;

	let table = CaseTable::build().context("Building case table")?;
	let report = table.report();
	info!(
		unhandled = report.unhandled.len(),
		build_time_us = report.build_time_us,
		"Classified {} cases",
		CASE_COUNT
	);

	if args.verbose {
		log_cases()?;
	}

	config.check_unhandled(table.unhandled())?;

	let json = TableDocument::from_table(&table).to_json(config.pretty)?;

	if let Some(dir) = config.output.parent().filter(|d| !d.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
	}
	std::fs::write(&config.output, json)
		.with_context(|| format!("Failed to write: {}", config.output.display()))?;

	info!("Output written to: {}", config.output.display());

	Ok(())
}

/// Log how each case was resolved.
fn log_cases() -> Result<()> {
	for case in 0..CASE_COUNT {
		let case = case as u8;
		let result = classify(case).with_context(|| format!("Classifying case {}", case))?;
		let patterns: Vec<String> = result.patterns.iter().map(|p| p.to_string()).collect();

		debug!(
			case,
			active = %result.active,
			inverted = result.inverted,
			triangles = result.triangle_count(),
			"{}",
			if result.is_unresolved() {
				"unresolved".to_string()
			} else {
				patterns.join("; ")
			}
		);
	}
	Ok(())
}
