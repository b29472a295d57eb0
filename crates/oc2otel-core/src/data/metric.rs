// Typed metric variants and their data points

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StringMap;

/// A single named metric with its typed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub description: String,
    pub unit: String,
    pub data: Data,
}

impl Metric {
    pub fn kind(&self) -> MetricKind {
        self.data.kind()
    }
}

/// The closed set of metric shapes. The variant fixes both the value type of
/// the data points and whether they are cumulative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Data {
    IntGauge(IntGauge),
    IntSum(IntSum),
    DoubleGauge(DoubleGauge),
    DoubleSum(DoubleSum),
    Histogram(Histogram),
    Summary(Summary),
}

impl Data {
    pub fn kind(&self) -> MetricKind {
        match self {
            Data::IntGauge(_) => MetricKind::IntGauge,
            Data::IntSum(_) => MetricKind::IntSum,
            Data::DoubleGauge(_) => MetricKind::DoubleGauge,
            Data::DoubleSum(_) => MetricKind::DoubleSum,
            Data::Histogram(_) => MetricKind::Histogram,
            Data::Summary(_) => MetricKind::Summary,
        }
    }

    pub fn data_point_count(&self) -> usize {
        match self {
            Data::IntGauge(gauge) => gauge.data_points.len(),
            Data::IntSum(sum) => sum.data_points.len(),
            Data::DoubleGauge(gauge) => gauge.data_points.len(),
            Data::DoubleSum(sum) => sum.data_points.len(),
            Data::Histogram(histogram) => histogram.data_points.len(),
            Data::Summary(summary) => summary.data_points.len(),
        }
    }
}

/// Tag naming a `Data` variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    IntGauge,
    IntSum,
    DoubleGauge,
    DoubleSum,
    Histogram,
    Summary,
}

impl MetricKind {
    #[cfg(test)]
    pub(crate) const ALL: [MetricKind; 6] = [
        MetricKind::IntGauge,
        MetricKind::IntSum,
        MetricKind::DoubleGauge,
        MetricKind::DoubleSum,
        MetricKind::Histogram,
        MetricKind::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::IntGauge => "int_gauge",
            MetricKind::IntSum => "int_sum",
            MetricKind::DoubleGauge => "double_gauge",
            MetricKind::DoubleSum => "double_sum",
            MetricKind::Histogram => "histogram",
            MetricKind::Summary => "summary",
        }
    }

    /// Cumulative kinds report a running total since a start time and carry a
    /// start timestamp on every data point.
    pub fn is_cumulative(&self) -> bool {
        !matches!(self, MetricKind::IntGauge | MetricKind::DoubleGauge)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationTemporality {
    #[default]
    Unspecified,
    Delta,
    Cumulative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gauge<T> {
    pub data_points: Vec<NumberDataPoint<T>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sum<T> {
    pub aggregation_temporality: AggregationTemporality,
    pub is_monotonic: bool,
    pub data_points: Vec<NumberDataPoint<T>>,
}

pub type IntGauge = Gauge<i64>;
pub type IntSum = Sum<i64>;
pub type DoubleGauge = Gauge<f64>;
pub type DoubleSum = Sum<f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub aggregation_temporality: AggregationTemporality,
    pub data_points: Vec<HistogramDataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub data_points: Vec<SummaryDataPoint>,
}

/// A scalar observation. `start_time_unix_nano` is only set for cumulative kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberDataPoint<T> {
    pub labels: StringMap,
    pub start_time_unix_nano: Option<u64>,
    pub time_unix_nano: u64,
    pub value: T,
}

pub type IntDataPoint = NumberDataPoint<i64>;
pub type DoubleDataPoint = NumberDataPoint<f64>;

/// Bucketed distribution. `bucket_counts` has one more entry than
/// `explicit_bounds` when the source histogram is well formed; the shapes are
/// copied as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramDataPoint {
    pub labels: StringMap,
    pub start_time_unix_nano: Option<u64>,
    pub time_unix_nano: u64,
    pub count: u64,
    pub sum: f64,
    pub bucket_counts: Vec<u64>,
    pub explicit_bounds: Vec<f64>,
    pub exemplars: Vec<Exemplar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exemplar {
    pub time_unix_nano: u64,
    pub value: f64,
    pub filtered_labels: StringMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryDataPoint {
    pub labels: StringMap,
    pub start_time_unix_nano: Option<u64>,
    pub time_unix_nano: u64,
    pub count: u64,
    pub sum: f64,
    pub quantile_values: Vec<ValueAtQuantile>,
}

/// Value at a quantile in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueAtQuantile {
    pub quantile: f64,
    pub value: f64,
}
