// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Catalog**: Shape of the generated catalog and its simulated latency
//! - **Loading**: Slow-fetch warning threshold

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum products per page.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum products per page.
pub const MAX_PAGE_SIZE: usize = 200;

/// Default number of pages before the catalog reports the end of data.
pub const DEFAULT_PAGE_COUNT: u32 = 5;

/// Maximum number of pages. Zero is allowed and yields an empty catalog.
pub const MAX_PAGE_COUNT: u32 = 100_000;

/// Default simulated latency per page (milliseconds).
pub const DEFAULT_LATENCY_MS: u64 = 800;

/// Maximum simulated latency per page (milliseconds).
pub const MAX_LATENCY_MS: u64 = 30_000;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Default time after which an in-flight fetch raises a warning (seconds).
pub const DEFAULT_SLOW_FETCH_WARNING_SECS: u64 = 5;

/// Minimum slow-fetch warning threshold (seconds).
pub const MIN_SLOW_FETCH_WARNING_SECS: u64 = 1;

/// Maximum slow-fetch warning threshold (seconds).
pub const MAX_SLOW_FETCH_WARNING_SECS: u64 = 120;

#[must_use]
pub fn clamp_page_size(value: usize) -> usize {
    value.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

#[must_use]
pub fn clamp_page_count(value: u32) -> u32 {
    value.min(MAX_PAGE_COUNT)
}

#[must_use]
pub fn clamp_latency_ms(value: u64) -> u64 {
    value.min(MAX_LATENCY_MS)
}

#[must_use]
pub fn clamp_slow_fetch_warning_secs(value: u64) -> u64 {
    value.clamp(MIN_SLOW_FETCH_WARNING_SECS, MAX_SLOW_FETCH_WARNING_SECS)
}
