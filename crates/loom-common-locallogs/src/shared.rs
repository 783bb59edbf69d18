// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Thread-safe handle around a [`LocalLogs`] implementation.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::entries::LogEntries;
use crate::entry::LogEntry;
use crate::local_logs::LocalLogs;

thread_local! {
	/// Number of `SharedLocalLogs` locks held by the current thread.
	static LOCKS_HELD: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as holding a lock for as long as it is alive.
struct HeldLock;

impl HeldLock {
	fn enter() -> Self {
		LOCKS_HELD.with(|held| held.set(held.get() + 1));
		HeldLock
	}

	fn is_held() -> bool {
		LOCKS_HELD.with(|held| held.get() > 0)
	}
}

impl Drop for HeldLock {
	fn drop(&mut self) {
		LOCKS_HELD.with(|held| held.set(held.get() - 1));
	}
}

/// A cloneable handle that serializes access to the wrapped local logs.
///
/// Each clone refers to the same storage. Individual operations are atomic;
/// use [`with`](Self::with) when several operations must see a consistent view.
pub struct SharedLocalLogs<L, E = LogEntry> {
	inner: Arc<Mutex<L>>,
	_entry: PhantomData<fn(E)>,
}

impl<L, E> SharedLocalLogs<L, E>
where
	L: LocalLogs<E>,
{
	/// Wrap `logs` in a new shared handle.
	pub fn new(logs: L) -> Self {
		Self {
			inner: Arc::new(Mutex::new(logs)),
			_entry: PhantomData,
		}
	}

	/// Record `entry` under `log_type`, waiting for the lock.
	pub fn add_entry(&self, log_type: &str, entry: E) {
		self.locked(|logs| logs.add_entry(log_type, entry));
	}

	/// Record `entry` unless this thread is already inside a lock on the same
	/// storage, in which case the entry is dropped.
	///
	/// Returns whether the entry was handed to the wrapped logs.
	pub fn try_add_entry(&self, log_type: &str, entry: E) -> bool {
		if !HeldLock::is_held() {
			self.add_entry(log_type, entry);
			return true;
		}

		// Some lock is held on this thread; only this handle's would deadlock.
		match self.inner.try_lock() {
			Some(mut logs) => {
				let _held = HeldLock::enter();
				logs.add_entry(log_type, entry);
				true
			}
			None => false,
		}
	}

	/// Drain and return the entries stored for `log_type`.
	pub fn get(&self, log_type: &str) -> LogEntries<E> {
		self.locked(|logs| logs.get(log_type))
	}

	/// Log types the wrapped logs currently know about.
	pub fn available_log_types(&self) -> BTreeSet<String> {
		self.locked(|logs| logs.available_log_types())
	}

	/// Run `f` with exclusive access to the wrapped logs.
	///
	/// The lock is held while `f` runs. Events a [`LocalLogsLayer`] over this
	/// handle would record from inside `f` are dropped rather than waiting on
	/// the lock.
	///
	/// [`LocalLogsLayer`]: crate::LocalLogsLayer
	pub fn with<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
		self.locked(f)
	}

	fn locked<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
		let mut logs = self.inner.lock();
		let _held = HeldLock::enter();
		f(&mut logs)
	}
}

impl<L, E> Clone for SharedLocalLogs<L, E> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
			_entry: PhantomData,
		}
	}
}
