// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Allow-listed, consume-on-read log storage.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::entries::LogEntries;
use crate::entry::LogEntry;
use crate::local_logs::LocalLogs;

/// Local logs with their own storage, used for explicitly collected logs such
/// as profiling output.
///
/// Only log types in the allow-list given at construction accumulate entries.
/// Reads drain: entries returned by [`get`](Self::get) are not returned again.
///
/// The first entry added for a log type only registers the type; it is not
/// stored. Entries are appended from the second call onwards.
#[derive(Debug, Clone)]
pub struct StoringLocalLogs<E = LogEntry> {
	/// Known log types and their pending entries. Keys are never removed.
	entries: HashMap<String, Vec<E>>,
	/// Log types that may accumulate entries. Fixed at construction.
	allowed_types: BTreeSet<String>,
}

impl<E> StoringLocalLogs<E> {
	/// Create an empty store that accepts the given log types.
	pub fn new<I, S>(allowed_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			entries: HashMap::new(),
			allowed_types: allowed_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Record `entry` under `log_type`.
	///
	/// Entries for log types outside the allow-list are discarded.
	pub fn add_entry(&mut self, log_type: &str, entry: E) {
		if !self.allowed_types.contains(log_type) {
			trace!(log_type, "discarding entry for log type not in allow-list");
			return;
		}

		match self.entries.get_mut(log_type) {
			Some(entries) => entries.push(entry),
			None => {
				trace!(log_type, "registered log type");
				self.entries.insert(log_type.to_string(), Vec::new());
			}
		}
	}

	/// Drain and return the entries stored for `log_type`.
	///
	/// Unknown log types yield an empty snapshot and stay unknown.
	pub fn get(&mut self, log_type: &str) -> LogEntries<E> {
		match self.entries.get_mut(log_type) {
			Some(entries) => {
				let drained = std::mem::take(entries);
				trace!(log_type, count = drained.len(), "drained log entries");
				LogEntries::new(drained)
			}
			None => LogEntries::empty(),
		}
	}

	/// Log types that have been registered, whether or not they hold entries.
	pub fn available_log_types(&self) -> BTreeSet<String> {
		self.entries.keys().cloned().collect()
	}

	/// Get the allow-list this store was created with.
	pub fn allowed_types(&self) -> &BTreeSet<String> {
		&self.allowed_types
	}

	/// Total number of entries waiting to be read, across all log types.
	pub fn len(&self) -> usize {
		self.entries.values().map(Vec::len).sum()
	}

	/// Check if no entries are waiting to be read.
	pub fn is_empty(&self) -> bool {
		self.entries.values().all(Vec::is_empty)
	}
}

impl<E> LocalLogs<E> for StoringLocalLogs<E> {
	fn get(&mut self, log_type: &str) -> LogEntries<E> {
		StoringLocalLogs::get(self, log_type)
	}

	fn add_entry(&mut self, log_type: &str, entry: E) {
		StoringLocalLogs::add_entry(self, log_type, entry)
	}

	fn available_log_types(&self) -> BTreeSet<String> {
		StoringLocalLogs::available_log_types(self)
	}
}
