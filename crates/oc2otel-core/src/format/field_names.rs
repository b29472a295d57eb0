//! Field name constants for OpenCensus JSON payloads.
//!
//! Names are the snake_case forms used by the prost message structs. Canonical
//! protobuf JSON uses camelCase; the normalizer converts keys before matching
//! them against these constants.

/// OpenCensus message field names (snake_case)
pub mod oc {
    // Map-valued fields; their keys are user data and are never renamed.
    /// Resource labels
    pub const LABELS: &str = "labels";
    /// Node attributes
    pub const ATTRIBUTES: &str = "attributes";
    /// Exemplar attachments
    pub const ATTACHMENTS: &str = "attachments";

    // Timestamps
    pub const TIMESTAMP: &str = "timestamp";
    pub const START_TIMESTAMP: &str = "start_timestamp";
    pub const SECONDS: &str = "seconds";
    pub const NANOS: &str = "nanos";

    // Enumerations and their parent messages
    pub const METRIC_DESCRIPTOR: &str = "metric_descriptor";
    pub const TYPE: &str = "type";
    pub const LIBRARY_INFO: &str = "library_info";
    pub const LANGUAGE: &str = "language";

    // Point value oneof
    pub const POINTS: &str = "points";
    pub const VALUE: &str = "value";
    pub const INT64_VALUE: &str = "int64_value";
    pub const DOUBLE_VALUE: &str = "double_value";
    pub const DISTRIBUTION_VALUE: &str = "distribution_value";
    pub const SUMMARY_VALUE: &str = "summary_value";

    // Distribution
    pub const COUNT: &str = "count";
    pub const SUM: &str = "sum";
    pub const SUM_OF_SQUARED_DEVIATION: &str = "sum_of_squared_deviation";
    pub const BUCKET_OPTIONS: &str = "bucket_options";
    pub const EXPLICIT: &str = "explicit";
    pub const BOUNDS: &str = "bounds";
    pub const EXEMPLAR: &str = "exemplar";

    // Summary
    pub const SNAPSHOT: &str = "snapshot";
    pub const PERCENTILE: &str = "percentile";
    pub const PERCENTILE_VALUES: &str = "percentile_values";
}
