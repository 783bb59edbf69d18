// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Opt-in local log collection for Loom clients.
//!
//! This crate provides:
//! - [`StoringLocalLogs`] - Per-scope storage that only accepts an allow-list of
//!   log types and drains entries on read
//! - [`LocalLogs`] - The trait shared by storing, null, and composite logs
//! - [`SharedLocalLogs`] - A cloneable, thread-safe handle around any local logs
//! - [`LocalLogsLayer`] - A tracing Layer that records events into local logs
//! - [`LocalLogsConfig`] - TOML configuration selecting which log types to keep
//!
//! There is no global instance; each session builds its own store.
//!
//! # Usage
//!
//! ```ignore
//! use loom_common_locallogs::{log_type, LocalLogsLayer, SharedLocalLogs, StoringLocalLogs};
//! use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
//!
//! let logs = SharedLocalLogs::new(StoringLocalLogs::new([log_type::CLIENT]));
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(LocalLogsLayer::new(logs.clone()))
//!     .init();
//!
//! let report = logs.get(log_type::CLIENT).to_json()?;
//! ```

mod config;
mod entries;
mod entry;
mod error;
mod layer;
mod local_logs;
pub mod log_type;
mod shared;
mod store;

pub use config::LocalLogsConfig;
pub use entries::LogEntries;
pub use entry::{LogEntry, LogLevel};
pub use error::{LocalLogsError, Result};
pub use layer::LocalLogsLayer;
pub use local_logs::{CompositeLocalLogs, LocalLogs, NullLocalLogs};
pub use shared::SharedLocalLogs;
pub use store::StoringLocalLogs;
