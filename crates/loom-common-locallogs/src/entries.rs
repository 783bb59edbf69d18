// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Snapshot of entries handed out by a read.

use crate::entry::{LogEntry, LogLevel};

/// Entries drained from a store by a single `get` call, in insertion order.
///
/// The store keeps no copy, so a snapshot is only ever returned once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntries<E = LogEntry> {
	entries: Vec<E>,
}

impl<E> LogEntries<E> {
	/// Wrap entries already in insertion order.
	pub fn new(entries: Vec<E>) -> Self {
		Self { entries }
	}

	/// Create an empty snapshot.
	pub fn empty() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Get all entries as a slice.
	pub fn all(&self) -> &[E] {
		&self.entries
	}

	/// Iterate over entries in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, E> {
		self.entries.iter()
	}

	/// Get the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Check if the snapshot is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Take ownership of the entries.
	pub fn into_vec(self) -> Vec<E> {
		self.entries
	}
}

impl LogEntries<LogEntry> {
	/// Entries at or above `min_level`, order preserved.
	pub fn filter(&self, min_level: LogLevel) -> Vec<LogEntry> {
		self.entries
			.iter()
			.filter(|e| e.level >= min_level)
			.cloned()
			.collect()
	}

	/// Serialize the snapshot as a JSON array.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(&self.entries)
	}
}

impl<E> Default for LogEntries<E> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<E> From<Vec<E>> for LogEntries<E> {
	fn from(entries: Vec<E>) -> Self {
		Self::new(entries)
	}
}

impl<E> FromIterator<E> for LogEntries<E> {
	fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<E> IntoIterator for LogEntries<E> {
	type Item = E;
	type IntoIter = std::vec::IntoIter<E>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a, E> IntoIterator for &'a LogEntries<E> {
	type Item = &'a E;
	type IntoIter = std::slice::Iter<'a, E>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
