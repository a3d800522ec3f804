//! Process-wide logging setup.

use std::io::Write;

use chrono::Local;
use clap::ValueEnum;
use log::LevelFilter;
use serde::Deserialize;

/// Verbosity accepted by `--logLevel`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	/// Progress messages and warnings
	#[default]
	Info,
	/// Everything, including per-file and per-frame details
	Debug,
	/// Warnings only
	Warn,
}

impl LogLevel {
	/// Name used on the command line and in `RUST_LOG` filters
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Warn => "warn",
		}
	}
}

impl From<LogLevel> for LevelFilter {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Info => LevelFilter::Info,
			LogLevel::Debug => LevelFilter::Debug,
			LogLevel::Warn => LevelFilter::Warn,
		}
	}
}

impl std::fmt::Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Installs the global logger.
///
/// `level` is the default filter; a `RUST_LOG` variable takes precedence.
/// Lines are written as `<local time> <LEVEL> <message>`.
pub fn init(level: LogLevel) {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
		.format(|buf, record| {
			writeln!(
				buf,
				"{} {} {}",
				Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
				record.level(),
				record.args()
			)
		})
		.init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_level_table() {
		assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
		assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
		assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
	}

	#[test]
	fn test_value_names() {
		let names: Vec<_> = LogLevel::value_variants()
			.iter()
			.filter_map(|v| v.to_possible_value())
			.map(|v| v.get_name().to_string())
			.collect();
		assert_eq!(names, vec!["info", "debug", "warn"]);
		assert_eq!(LogLevel::Warn.to_string(), "warn");
	}
}
