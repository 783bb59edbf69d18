// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Well-known log type names.
//!
//! Any string is a valid log type; these are the ones Loom components emit.

/// Logs produced by the browser under automation.
pub const BROWSER: &str = "browser";

/// Logs produced by the client library itself.
pub const CLIENT: &str = "client";

/// Logs produced by the driver.
pub const DRIVER: &str = "driver";

/// Performance timeline events.
pub const PERFORMANCE: &str = "performance";

/// Profiling events such as command round trips.
pub const PROFILER: &str = "profiler";

/// Logs produced by a remote server.
pub const SERVER: &str = "server";

pub const ALL: [&str; 6] = [BROWSER, CLIENT, DRIVER, PERFORMANCE, PROFILER, SERVER];

/// Returns true if `log_type` is one of the names in [`ALL`].
pub fn is_well_known(log_type: &str) -> bool {
	ALL.contains(&log_type)
}
