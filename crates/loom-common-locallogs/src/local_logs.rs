// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The [`LocalLogs`] abstraction and its non-storing implementations.

use std::collections::BTreeSet;

use crate::entries::LogEntries;
use crate::entry::LogEntry;

/// Per-scope log storage keyed by log type.
///
/// Implementations never fail: disallowed log types are silently dropped and
/// reads of unknown types return an empty snapshot.
pub trait LocalLogs<E = LogEntry> {
	/// Drain and return all entries stored for `log_type`.
	fn get(&mut self, log_type: &str) -> LogEntries<E>;

	/// Record `entry` under `log_type`.
	fn add_entry(&mut self, log_type: &str, entry: E);

	/// Log types this instance currently knows about.
	fn available_log_types(&self) -> BTreeSet<String>;
}

impl<E, L> LocalLogs<E> for Box<L>
where
	L: LocalLogs<E> + ?Sized,
{
	fn get(&mut self, log_type: &str) -> LogEntries<E> {
		(**self).get(log_type)
	}

	fn add_entry(&mut self, log_type: &str, entry: E) {
		(**self).add_entry(log_type, entry)
	}

	fn available_log_types(&self) -> BTreeSet<String> {
		(**self).available_log_types()
	}
}

/// Local logs that discard everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocalLogs;

impl<E> LocalLogs<E> for NullLocalLogs {
	fn get(&mut self, _log_type: &str) -> LogEntries<E> {
		LogEntries::empty()
	}

	fn add_entry(&mut self, _log_type: &str, _entry: E) {}

	fn available_log_types(&self) -> BTreeSet<String> {
		BTreeSet::new()
	}
}

/// Routes each log type to one of two underlying loggers.
///
/// Types the predefined logger already knows about go to it; everything else
/// goes to the all-types logger.
pub struct CompositeLocalLogs<P, A> {
	predefined: P,
	all_types: A,
}

impl<P, A> CompositeLocalLogs<P, A> {
	/// Combine a predefined logger with a logger for all other types.
	pub fn new(predefined: P, all_types: A) -> Self {
		Self {
			predefined,
			all_types,
		}
	}

	pub fn predefined(&self) -> &P {
		&self.predefined
	}

	pub fn all_types(&self) -> &A {
		&self.all_types
	}
}

impl<E, P, A> LocalLogs<E> for CompositeLocalLogs<P, A>
where
	P: LocalLogs<E>,
	A: LocalLogs<E>,
{
	fn get(&mut self, log_type: &str) -> LogEntries<E> {
		if self.predefined.available_log_types().contains(log_type) {
			self.predefined.get(log_type)
		} else {
			self.all_types.get(log_type)
		}
	}

	fn add_entry(&mut self, log_type: &str, entry: E) {
		if self.predefined.available_log_types().contains(log_type) {
			self.predefined.add_entry(log_type, entry);
		} else {
			self.all_types.add_entry(log_type, entry);
		}
	}

	fn available_log_types(&self) -> BTreeSet<String> {
		let mut types = self.predefined.available_log_types();
		types.extend(self.all_types.available_log_types());
		types
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::log_type;
	use crate::store::StoringLocalLogs;

	#[test]
	fn test_null_discards_everything() {
		let mut logs = NullLocalLogs;
		LocalLogs::<u32>::add_entry(&mut logs, log_type::CLIENT, 1);
		LocalLogs::<u32>::add_entry(&mut logs, log_type::CLIENT, 2);

		assert!(LocalLogs::<u32>::get(&mut logs, log_type::CLIENT).is_empty());
		assert!(LocalLogs::<u32>::available_log_types(&logs).is_empty());
	}

	#[test]
	fn test_composite_routes_known_predefined_types() {
		let mut predefined = StoringLocalLogs::<u32>::new([log_type::PROFILER]);
		predefined.add_entry(log_type::PROFILER, 0);
		let all_types = StoringLocalLogs::<u32>::new([log_type::PROFILER, log_type::CLIENT]);

		let mut logs = CompositeLocalLogs::new(predefined, all_types);
		logs.add_entry(log_type::PROFILER, 1);
		logs.add_entry(log_type::PROFILER, 2);

		assert_eq!(logs.get(log_type::PROFILER).into_vec(), vec![1, 2]);
		assert!(logs.all_types().available_log_types().is_empty());
	}

	#[test]
	fn test_composite_falls_back_to_all_types() {
		let predefined = StoringLocalLogs::<u32>::new([log_type::PROFILER]);
		let all_types = StoringLocalLogs::<u32>::new([log_type::PROFILER, log_type::CLIENT]);

		let mut logs = CompositeLocalLogs::new(predefined, all_types);
		logs.add_entry(log_type::CLIENT, 1);
		logs.add_entry(log_type::CLIENT, 2);

		assert_eq!(logs.get(log_type::CLIENT).into_vec(), vec![2]);
		assert!(logs.predefined().available_log_types().is_empty());
	}

	#[test]
	fn test_composite_available_types_is_union() {
		let mut predefined = StoringLocalLogs::<u32>::new([log_type::PROFILER]);
		predefined.add_entry(log_type::PROFILER, 0);
		let all_types = StoringLocalLogs::<u32>::new([log_type::DRIVER]);

		let mut logs = CompositeLocalLogs::new(predefined, all_types);
		logs.add_entry(log_type::DRIVER, 1);

		let types: Vec<_> = logs.available_log_types().into_iter().collect();
		assert_eq!(types, vec!["driver".to_string(), "profiler".to_string()]);
	}

	#[test]
	fn test_boxed_trait_object() {
		let mut logs: Box<dyn LocalLogs<u32>> = Box::new(StoringLocalLogs::<u32>::new(["x"]));
		logs.add_entry("x", 1);
		logs.add_entry("x", 2);
		assert_eq!(logs.get("x").into_vec(), vec![2]);
	}
}
