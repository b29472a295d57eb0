// Internal metrics data model
//
// The canonical representation produced by the translator and consumed by
// downstream pipeline stages:
//
//   MetricData
//     └─ ResourceMetrics (resource attributes)
//          └─ InstrumentationLibraryMetrics (0 or 1 per resource here)
//               └─ Metric (one of six typed variants)
//                    └─ data points
//
// Every value is plain owned data; nothing here refers back to the input.

mod metric;

pub use metric::{
    AggregationTemporality, Data, DoubleDataPoint, DoubleGauge, DoubleSum, Exemplar, Gauge,
    Histogram, HistogramDataPoint, IntDataPoint, IntGauge, IntSum, Metric, MetricKind,
    NumberDataPoint, Sum, Summary, SummaryDataPoint, ValueAtQuantile,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed, string-valued map used for resource attributes and data point labels.
pub type StringMap = BTreeMap<String, String>;

/// Top-level container returned by a translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    pub resource_metrics: Vec<ResourceMetrics>,
}

impl MetricData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_metrics.is_empty()
    }

    /// Number of metrics across every resource and library group.
    pub fn metric_count(&self) -> usize {
        self.metrics().count()
    }

    /// Number of data points across every metric.
    pub fn data_point_count(&self) -> usize {
        self.metrics().map(|metric| metric.data.data_point_count()).sum()
    }

    /// Iterate all metrics in output order.
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.resource_metrics
            .iter()
            .flat_map(|rm| rm.instrumentation_library_metrics.iter())
            .flat_map(|ilm| ilm.metrics.iter())
    }

    /// Move all resource groups from `other` to the end of `self`.
    pub fn append(&mut self, other: &mut MetricData) {
        self.resource_metrics.append(&mut other.resource_metrics);
    }
}

/// Metrics sharing one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetrics {
    pub resource: Resource,
    pub instrumentation_library_metrics: Vec<InstrumentationLibraryMetrics>,
}

impl ResourceMetrics {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            instrumentation_library_metrics: Vec::new(),
        }
    }

    /// Metrics of every library group under this resource.
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.instrumentation_library_metrics
            .iter()
            .flat_map(|ilm| ilm.metrics.iter())
    }
}

/// The entity producing the telemetry, described by its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub attributes: StringMap,
}

impl Resource {
    pub fn new(attributes: StringMap) -> Self {
        Self { attributes }
    }
}

/// Identifies the instrumentation library that recorded a group of metrics.
///
/// OpenCensus batches carry no library information, so translated groups
/// always use the empty library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationLibrary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentationLibraryMetrics {
    pub instrumentation_library: InstrumentationLibrary,
    pub metrics: Vec<Metric>,
}
