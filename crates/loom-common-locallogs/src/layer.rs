// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tracing layer that records events into local logs.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::entry::{LogEntry, LogLevel};
use crate::local_logs::LocalLogs;
use crate::log_type;
use crate::shared::SharedLocalLogs;

/// Events from this crate are never captured, so the store's own diagnostics
/// cannot re-enter it while its lock is held.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");
const OWN_MODULE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

fn is_own_target(target: &str) -> bool {
	target == OWN_TARGET || target.starts_with(OWN_MODULE_PREFIX)
}

/// A tracing Layer that turns every event into a [`LogEntry`] and adds it to
/// local logs under a single log type.
///
/// Whether the entry is kept is up to the wrapped logs' allow-list. Events
/// emitted while the same thread holds the logs' lock, for example inside
/// [`SharedLocalLogs::with`], are dropped.
pub struct LocalLogsLayer<L> {
	logs: SharedLocalLogs<L>,
	log_type: String,
}

impl<L> LocalLogsLayer<L>
where
	L: LocalLogs,
{
	/// Create a layer recording under [`log_type::CLIENT`].
	pub fn new(logs: SharedLocalLogs<L>) -> Self {
		Self::with_log_type(logs, log_type::CLIENT)
	}

	/// Create a layer recording under `log_type`.
	pub fn with_log_type(logs: SharedLocalLogs<L>, log_type: impl Into<String>) -> Self {
		Self {
			logs,
			log_type: log_type.into(),
		}
	}

	/// Get the logs this layer records into.
	pub fn logs(&self) -> &SharedLocalLogs<L> {
		&self.logs
	}

	/// Get the log type events are recorded under.
	pub fn log_type(&self) -> &str {
		&self.log_type
	}
}

impl<S, L> Layer<S> for LocalLogsLayer<L>
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	L: LocalLogs + Send + 'static,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let metadata = event.metadata();
		if is_own_target(metadata.target()) {
			return;
		}

		let mut visitor = EntryVisitor::default();
		event.record(&mut visitor);

		let entry = LogEntry::now(LogLevel::from_tracing(metadata.level()), visitor.finish());
		self.logs.try_add_entry(&self.log_type, entry);
	}
}

#[derive(Default)]
struct EntryVisitor {
	message: String,
	fields: String,
}

impl EntryVisitor {
	fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
		if !self.fields.is_empty() {
			self.fields.push(' ');
		}
		let _ = write!(self.fields, "{name}={value}");
	}

	/// The message followed by `key=value` pairs.
	fn finish(self) -> String {
		match (self.message.is_empty(), self.fields.is_empty()) {
			(_, true) => self.message,
			(true, false) => self.fields,
			(false, false) => format!("{} {}", self.message, self.fields),
		}
	}
}

impl Visit for EntryVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			self.push_field(field.name(), format_args!("{value:?}"));
		}
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_string();
		} else {
			self.push_field(field.name(), format_args!("{value}"));
		}
	}

	fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
		self.push_field(field.name(), format_args!("{value}"));
	}
}
