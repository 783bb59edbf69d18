// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration selecting which log types a scope collects.
//!
//! ```toml
//! enabled_types = ["profiler", "client"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::entry::LogEntry;
use crate::error::{LocalLogsError, Result};
use crate::local_logs::{LocalLogs, NullLocalLogs};
use crate::log_type;
use crate::store::StoringLocalLogs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalLogsConfig {
	/// Log types that may accumulate entries. Empty disables collection.
	#[serde(default)]
	pub enabled_types: BTreeSet<String>,
}

impl LocalLogsConfig {
	/// Create a config collecting the given log types.
	pub fn new<I, S>(enabled_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			enabled_types: enabled_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Parse and validate a config from TOML.
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		let config: Self = toml::from_str(contents)?;
		config.validate()?;
		Ok(config)
	}

	/// Load and validate a config from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		debug!(path = %path.display(), "loading local logs config");
		Self::from_toml_str(&contents)
	}

	/// Reject empty or whitespace-only log type names.
	pub fn validate(&self) -> Result<()> {
		for ty in &self.enabled_types {
			if ty.trim().is_empty() {
				return Err(LocalLogsError::InvalidLogType(ty.clone()));
			}
		}
		Ok(())
	}

	/// Check if any log type is collected.
	pub fn is_enabled(&self) -> bool {
		!self.enabled_types.is_empty()
	}

	/// Build the local logs this configuration describes.
	pub fn build(&self) -> Box<dyn LocalLogs<LogEntry> + Send> {
		if !self.is_enabled() {
			debug!("local log collection disabled");
			return Box::new(NullLocalLogs);
		}

		for ty in self.enabled_types.iter().filter(|t| !log_type::is_well_known(t)) {
			debug!(log_type = %ty, "collecting non-standard log type");
		}
		debug!(types = ?self.enabled_types, "collecting local logs");

		Box::new(StoringLocalLogs::new(self.enabled_types.iter().cloned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_parse_enabled_types() {
		let config = LocalLogsConfig::from_toml_str(r#"enabled_types = ["profiler", "client"]"#).unwrap();
		assert_eq!(config, LocalLogsConfig::new([log_type::PROFILER, log_type::CLIENT]));
	}

	#[test]
	fn test_empty_config_is_disabled() {
		let config = LocalLogsConfig::from_toml_str("").unwrap();
		assert!(!config.is_enabled());

		let mut logs = config.build();
		logs.add_entry(log_type::CLIENT, LogEntry::now(crate::LogLevel::Info, "a"));
		logs.add_entry(log_type::CLIENT, LogEntry::now(crate::LogLevel::Info, "b"));
		assert!(logs.get(log_type::CLIENT).is_empty());
		assert!(logs.available_log_types().is_empty());
	}

	#[test]
	fn test_build_stores_enabled_types() {
		let mut logs = LocalLogsConfig::new([log_type::PROFILER]).build();

		logs.add_entry(log_type::PROFILER, LogEntry::now(crate::LogLevel::Info, "a"));
		logs.add_entry(log_type::PROFILER, LogEntry::now(crate::LogLevel::Info, "b"));
		logs.add_entry(log_type::CLIENT, LogEntry::now(crate::LogLevel::Info, "c"));

		let entries = logs.get(log_type::PROFILER);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries.all()[0].message, "b");
		assert!(!logs.available_log_types().contains(log_type::CLIENT));
	}

	#[test]
	fn test_rejects_blank_log_type() {
		let err = LocalLogsConfig::from_toml_str(r#"enabled_types = ["  "]"#).unwrap_err();
		assert!(matches!(err, LocalLogsError::InvalidLogType(_)));
	}

	#[test]
	fn test_rejects_unknown_fields() {
		let err = LocalLogsConfig::from_toml_str(r#"enabled = true"#).unwrap_err();
		assert!(matches!(err, LocalLogsError::Parse(_)));
	}

	#[test]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"enabled_types = ["performance"]"#).unwrap();

		let config = LocalLogsConfig::from_file(file.path()).unwrap();
		assert!(config.enabled_types.contains(log_type::PERFORMANCE));
	}

	#[test]
	fn test_from_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = LocalLogsConfig::from_file(dir.path().join("locallogs.toml")).unwrap_err();
		assert!(matches!(err, LocalLogsError::Io(_)));
	}
}
