//! Configuration parsing for case table baking.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use voxel_tables::CASE_COUNT;

/// Root configuration for case table baking.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Output JSON path.
	pub output: PathBuf,
	/// Pretty-print the JSON document.
	pub pretty: bool,
	/// Fail when more cases than this stay unresolved.
	pub max_unhandled: Option<usize>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			output: PathBuf::from("case_tables.json"),
			pretty: true,
			max_unhandled: None,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.output.as_os_str().is_empty() {
			anyhow::bail!("output path must not be empty");
		}
		if let Some(max) = config.max_unhandled {
			if max > CASE_COUNT {
				anyhow::bail!(
					"max_unhandled must be at most {}, got {}",
					CASE_COUNT,
					max
				);
			}
		}

		Ok(config)
	}

	/// Apply command-line overrides on top of the file settings.
	pub fn apply_overrides(&mut self, output: Option<PathBuf>, compact: bool) -> Result<()> {
		if let Some(output) = output {
			if output.as_os_str().is_empty() {
				anyhow::bail!("output path must not be empty");
			}
			self.output = output;
		}
		if compact {
			self.pretty = false;
		}
		Ok(())
	}

	/// Fail if the build left more unresolved cases than allowed.
	pub fn check_unhandled(&self, unhandled: &[u8]) -> Result<()> {
		match self.max_unhandled {
			Some(max) if unhandled.len() > max => anyhow::bail!(
				"{} unhandled cases exceed the limit of {}: {:?}",
				unhandled.len(),
				max,
				unhandled
			),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
