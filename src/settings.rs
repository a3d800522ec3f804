//! Layered run settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the TOML file given with `--config`
//! 3. `SPRITESHEET_*` environment variables (`SPRITESHEET_ROWS`, `SPRITESHEET_COLUMNS`,
//!    `SPRITESHEET_LOG_LEVEL`, `SPRITESHEET_OVERFLOW`)
//! 4. command-line flags

use std::num::NonZeroU32;

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use spritesheet_types::{
	grid::{GridSpec, OverflowPolicy},
	packer::PackConfig,
};
use thiserror::Error;

use crate::{cli::Cli, logging::LogLevel};

/// Prefix of the environment variables read into [`Settings`]
pub const ENV_PREFIX: &str = "SPRITESHEET";

/// Errors raised while resolving settings
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A source could not be read or deserialized
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// A grid dimension is zero
	#[error("Invalid {key}: Argument must be >= 1")]
	NotPositive {
		/// Offending setting
		key: &'static str,
	},
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Explicit row count
	pub rows: Option<u32>,
	/// Explicit column count
	pub columns: Option<u32>,
	/// Log verbosity
	pub log_level: LogLevel,
	/// Cutoff for frames past the grid
	pub overflow: OverflowPolicy,
}

impl Settings {
	/// Resolves settings for `cli` from every layer.
	pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
		Self::load_from(cli, None)
	}

	/// Resolves settings for `cli`, reading the environment layer from `env`
	/// instead of the process environment when it is given.
	pub fn load_from(cli: &Cli, env: Option<Map<String, String>>) -> Result<Self, SettingsError> {
		let mut builder = Config::builder();

		if let Some(path) = &cli.config {
			builder = builder.add_source(File::from(path.as_path()).required(true));
		}

		let settings: Self = builder
			.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env))
			.set_override_option("rows", cli.rows.map(|v| i64::from(v.get())))?
			.set_override_option("columns", cli.columns.map(|v| i64::from(v.get())))?
			.set_override_option("log_level", cli.log_level.map(LogLevel::as_str))?
			.set_override_option("overflow", cli.overflow.map(|v| v.to_string()))?
			.build()?
			.try_deserialize()?;

		Ok(settings)
	}

	/// Builds the packing configuration.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::NotPositive`] if rows or columns are zero.
	pub fn pack_config(&self) -> Result<PackConfig, SettingsError> {
		let grid = GridSpec::new(positive("rows", self.rows)?, positive("columns", self.columns)?);
		Ok(PackConfig::new(grid).with_overflow(self.overflow))
	}
}

fn positive(key: &'static str, value: Option<u32>) -> Result<Option<NonZeroU32>, SettingsError> {
	match value {
		None => Ok(None),
		Some(value) => NonZeroU32::new(value).map(Some).ok_or(SettingsError::NotPositive {
			key,
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	fn parse_cli(extra: &[&str]) -> (tempfile::TempDir, Cli) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().to_str().unwrap().to_string();
		let mut args = vec!["spritesheet-maker".to_string(), path.clone(), path];
		args.extend(extra.iter().map(|s| s.to_string()));
		let cli = Cli::try_parse_from(args).unwrap();
		(dir, cli)
	}

	#[test]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.log_level, LogLevel::Info);
		assert_eq!(settings.overflow, OverflowPolicy::Inclusive);
		assert_eq!(settings.pack_config().unwrap(), PackConfig::default());
	}

	#[test]
	fn test_cli_flags() {
		let (_dir, cli) = parse_cli(&["--rows", "2", "--columns", "3", "--logLevel", "warn"]);
		let settings = Settings::load(&cli).unwrap();

		assert_eq!(settings.rows, Some(2));
		assert_eq!(settings.columns, Some(3));
		assert_eq!(settings.log_level, LogLevel::Warn);
	}

	#[test]
	fn test_config_file_is_overridden_by_flags() {
		let (dir, _) = parse_cli(&[]);
		let file = dir.path().join("sheet.toml");
		fs::write(&file, "rows = 4\ncolumns = 6\nlog_level = \"debug\"\noverflow = \"strict\"\n")
			.unwrap();

		let (_other, cli) = parse_cli(&["--config", file.to_str().unwrap(), "--columns", "2"]);
		let settings = Settings::load(&cli).unwrap();

		assert_eq!(settings.rows, Some(4));
		assert_eq!(settings.columns, Some(2));
		assert_eq!(settings.log_level, LogLevel::Debug);
		assert_eq!(settings.overflow, OverflowPolicy::Strict);
	}

	#[test]
	fn test_zero_from_config_file_is_rejected() {
		let (dir, _) = parse_cli(&[]);
		let file = dir.path().join("sheet.toml");
		fs::write(&file, "columns = 0\n").unwrap();

		let (_other, cli) = parse_cli(&["--config", file.to_str().unwrap()]);
		let settings = Settings::load(&cli).unwrap();

		let err = settings.pack_config().unwrap_err();
		assert_eq!(err.to_string(), "Invalid columns: Argument must be >= 1");
	}

	fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
		Some(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}

	#[test]
	fn test_environment_layer() {
		let (_dir, cli) = parse_cli(&[]);
		let vars = env(&[
			("SPRITESHEET_ROWS", "3"),
			("SPRITESHEET_COLUMNS", "4"),
			("SPRITESHEET_LOG_LEVEL", "debug"),
			("SPRITESHEET_OVERFLOW", "strict"),
			("OTHER_ROWS", "9"),
		]);
		let settings = Settings::load_from(&cli, vars).unwrap();

		assert_eq!(settings.rows, Some(3));
		assert_eq!(settings.columns, Some(4));
		assert_eq!(settings.log_level, LogLevel::Debug);
		assert_eq!(settings.overflow, OverflowPolicy::Strict);
	}

	#[test]
	fn test_environment_sits_between_file_and_flags() {
		let (dir, _) = parse_cli(&[]);
		let file = dir.path().join("sheet.toml");
		fs::write(&file, "rows = 4\ncolumns = 6\nlog_level = \"warn\"\n").unwrap();

		let (_other, cli) = parse_cli(&["--config", file.to_str().unwrap(), "--columns", "2"]);
		let vars = env(&[("SPRITESHEET_ROWS", "7"), ("SPRITESHEET_COLUMNS", "8")]);
		let settings = Settings::load_from(&cli, vars).unwrap();

		assert_eq!(settings.rows, Some(7));
		assert_eq!(settings.columns, Some(2));
		assert_eq!(settings.log_level, LogLevel::Warn);
	}

	#[test]
	fn test_zero_from_environment_is_rejected() {
		let (_dir, cli) = parse_cli(&[]);
		let settings = Settings::load_from(&cli, env(&[("SPRITESHEET_ROWS", "0")])).unwrap();

		let err = settings.pack_config().unwrap_err();
		assert_eq!(err.to_string(), "Invalid rows: Argument must be >= 1");
	}

	#[test]
	fn test_bad_overflow_from_environment() {
		let (_dir, cli) = parse_cli(&[]);
		let result = Settings::load_from(&cli, env(&[("SPRITESHEET_OVERFLOW", "sideways")]));
		assert!(matches!(result, Err(SettingsError::Config(_))));
	}

	#[test]
	fn test_missing_config_file() {
		let (_dir, cli) = parse_cli(&["--config", "/definitely/not/here.toml"]);
		assert!(matches!(Settings::load(&cli), Err(SettingsError::Config(_))));
	}
}
