//! Metric names recorded by refresh workers.

use std::time::Duration;

use metrics::{counter, gauge, histogram};

use super::RefreshOutcome;

/// Counter of refresh cycles, labelled by `key` and `outcome`.
pub const REFRESH_TOTAL: &str = "relay_refresh_total";

/// Histogram of refresh cycle durations in seconds, labelled by `key`.
pub const REFRESH_DURATION_SECONDS: &str = "relay_refresh_duration_seconds";

/// Gauge of keys currently holding a payload.
pub const STORE_ENTRIES: &str = "relay_store_entries";

/// Describes the refresh metrics. Call once after installing a recorder.
pub fn describe_refresh_metrics() {
    metrics::describe_counter!(REFRESH_TOTAL, "Total number of refresh cycles");
    metrics::describe_histogram!(
        REFRESH_DURATION_SECONDS,
        "Time spent fetching a source during a refresh cycle"
    );
    metrics::describe_gauge!(STORE_ENTRIES, "Number of keys holding a cached payload");
}

pub(crate) fn record_cycle(key: &str, outcome: &RefreshOutcome, duration: Duration) {
    counter!(
        REFRESH_TOTAL,
        "key" => key.to_string(),
        "outcome" => outcome.label()
    )
    .increment(1);

    histogram!(REFRESH_DURATION_SECONDS, "key" => key.to_string()).record(duration.as_secs_f64());
}

pub(crate) fn record_store_entries(count: usize) {
    gauge!(STORE_ENTRIES).set(count as f64);
}
