// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for local log configuration.
//!
//! Storing and reading entries never fails; only loading a
//! [`LocalLogsConfig`](crate::LocalLogsConfig) can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocalLogsError>;

#[derive(Debug, Error)]
pub enum LocalLogsError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid local logs config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid log type: {0:?}")]
	InvalidLogType(String),

	#[error("invalid log level: {0}")]
	InvalidLevel(String),
}
