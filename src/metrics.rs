//! Transformation metrics
//!
//! Counters and histograms are emitted through the `metrics` facade. Installing
//! a recorder or exporter is left to the host application; without one every
//! call here is a no-op.

/// Build a metric name following the `aton_{phase}_{metric_name}` convention
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("aton_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("aton_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;

/// Metrics for the record-to-dataset transformation
pub struct TransformMetrics;

impl TransformMetrics {
    /// Record one emitted member, labelled with its member kind
    pub fn record_member_emitted(kind: &'static str) {
        ::metrics::counter!(phase_metric!(counter, "transform", "members_emitted"), "kind" => kind)
            .increment(1);
    }

    /// Record a record skipped because its type is absent or unknown
    pub fn record_dropped() {
        ::metrics::counter!(phase_metric!(counter, "transform", "records_dropped")).increment(1);
    }

    /// Record link members emitted for one record
    pub fn record_links_emitted(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "transform", "links_emitted"))
            .increment(count as u64);
    }

    /// Record links skipped because they were already emitted
    pub fn record_links_suppressed(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "transform", "links_suppressed"))
            .increment(count as u64);
    }

    /// Record a finished transformation
    pub fn record_transform(records: usize, members: usize, duration_secs: f64) {
        ::metrics::counter!(phase_metric!(counter, "transform", "datasets_built")).increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "transform", "records_per_dataset"))
            .record(records as f64);
        ::metrics::histogram!(phase_metric!(histogram, "transform", "members_per_dataset"))
            .record(members as f64);
        ::metrics::histogram!(phase_metric!(histogram, "transform", "duration_seconds"))
            .record(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_naming_convention() {
        assert_eq!(
            phase_metric!(counter, "transform", "records_dropped"),
            "aton_transform_records_dropped_total"
        );
        assert_eq!(
            phase_metric!(histogram, "transform", "duration_seconds"),
            "aton_transform_duration_seconds"
        );
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        TransformMetrics::record_member_emitted("BeaconCardinal");
        TransformMetrics::record_dropped();
        TransformMetrics::record_links_emitted(2);
        TransformMetrics::record_links_suppressed(1);
        TransformMetrics::record_transform(3, 4, 0.01);
    }
}
