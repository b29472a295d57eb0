// Data point conversion
//
// Every OpenCensus point becomes exactly one internal data point, in
// timeseries-major then point-major order. Labels come from zipping the
// descriptor's label keys with each timeseries' label values.

use chrono::DateTime;
use oc2otel_proto::google::protobuf::Timestamp;
use oc2otel_proto::opencensus::proto::metrics::v1::{
    distribution_value::{self, bucket_options},
    point, DistributionValue, LabelKey, LabelValue, SummaryValue, TimeSeries,
};
use tracing::debug;

use crate::data::{
    AggregationTemporality, Data, DoubleDataPoint, DoubleGauge, DoubleSum, Exemplar, Histogram,
    HistogramDataPoint, IntDataPoint, IntGauge, IntSum, MetricKind, StringMap, Summary,
    SummaryDataPoint, ValueAtQuantile,
};

/// Convert a protobuf timestamp to nanoseconds since the Unix epoch.
///
/// Absent, out-of-range and pre-epoch timestamps map to 0.
pub fn timestamp_to_unix_nanos(timestamp: &Timestamp) -> u64 {
    u32::try_from(timestamp.nanos)
        .ok()
        .and_then(|nanos| DateTime::from_timestamp(timestamp.seconds, nanos))
        .and_then(|datetime| datetime.timestamp_nanos_opt())
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or(0)
}

fn optional_unix_nanos(timestamp: Option<&Timestamp>) -> u64 {
    timestamp.map(timestamp_to_unix_nanos).unwrap_or(0)
}

/// Pair every label key with the value at the same position.
///
/// Unset values and values missing from a short `values` list become empty
/// strings, so each point of a metric carries the same key set.
pub fn label_map(keys: &[LabelKey], values: &[LabelValue]) -> StringMap {
    keys.iter()
        .enumerate()
        .map(|(index, key)| {
            let value = values
                .get(index)
                .filter(|value| value.has_value)
                .map(|value| value.value.clone())
                .unwrap_or_default();
            (key.key.clone(), value)
        })
        .collect()
}

/// Fields shared by every data point shape.
struct PointHeader {
    labels: StringMap,
    start_time_unix_nano: Option<u64>,
    time_unix_nano: u64,
}

fn collect_points<P>(
    label_keys: &[LabelKey],
    timeseries: &[TimeSeries],
    cumulative: bool,
    mut make: impl FnMut(PointHeader, Option<&point::Value>) -> P,
) -> Vec<P> {
    let capacity = timeseries.iter().map(|series| series.points.len()).sum();
    let mut points = Vec::with_capacity(capacity);

    for series in timeseries {
        let labels = label_map(label_keys, &series.label_values);
        let start_time_unix_nano = if cumulative {
            series.start_timestamp.as_ref().map(timestamp_to_unix_nanos)
        } else {
            None
        };

        for point in &series.points {
            let header = PointHeader {
                labels: labels.clone(),
                start_time_unix_nano,
                time_unix_nano: optional_unix_nanos(point.timestamp.as_ref()),
            };
            points.push(make(header, point.value.as_ref()));
        }
    }

    points
}

/// Converts the timeseries of one metric into the data of its classified kind.
///
/// Points whose value does not match the kind are still emitted, with a zero
/// payload, and counted in `mismatched_points`.
#[derive(Debug, Default)]
pub struct PointConverter {
    mismatched_points: usize,
}

impl PointConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mismatched_points(&self) -> usize {
        self.mismatched_points
    }

    pub fn convert(
        &mut self,
        metric_name: &str,
        kind: MetricKind,
        label_keys: &[LabelKey],
        timeseries: &[TimeSeries],
    ) -> Data {
        let cumulative = kind.is_cumulative();
        match kind {
            MetricKind::IntGauge => Data::IntGauge(IntGauge {
                data_points: self.int_points(metric_name, kind, label_keys, timeseries, cumulative),
            }),
            MetricKind::IntSum => Data::IntSum(IntSum {
                aggregation_temporality: AggregationTemporality::Cumulative,
                is_monotonic: true,
                data_points: self.int_points(metric_name, kind, label_keys, timeseries, cumulative),
            }),
            MetricKind::DoubleGauge => Data::DoubleGauge(DoubleGauge {
                data_points: self.double_points(metric_name, kind, label_keys, timeseries, cumulative),
            }),
            MetricKind::DoubleSum => Data::DoubleSum(DoubleSum {
                aggregation_temporality: AggregationTemporality::Cumulative,
                is_monotonic: true,
                data_points: self.double_points(metric_name, kind, label_keys, timeseries, cumulative),
            }),
            MetricKind::Histogram => Data::Histogram(Histogram {
                aggregation_temporality: AggregationTemporality::Cumulative,
                data_points: self.histogram_points(metric_name, label_keys, timeseries, cumulative),
            }),
            MetricKind::Summary => Data::Summary(Summary {
                data_points: self.summary_points(metric_name, label_keys, timeseries, cumulative),
            }),
        }
    }

    fn int_points(
        &mut self,
        metric_name: &str,
        kind: MetricKind,
        label_keys: &[LabelKey],
        timeseries: &[TimeSeries],
        cumulative: bool,
    ) -> Vec<IntDataPoint> {
        collect_points(label_keys, timeseries, cumulative, |header, value| {
            let value = match value {
                Some(point::Value::Int64Value(value)) => *value,
                other => {
                    self.note_mismatch(metric_name, kind, other);
                    0
                }
            };
            IntDataPoint {
                labels: header.labels,
                start_time_unix_nano: header.start_time_unix_nano,
                time_unix_nano: header.time_unix_nano,
                value,
            }
        })
    }

    fn double_points(
        &mut self,
        metric_name: &str,
        kind: MetricKind,
        label_keys: &[LabelKey],
        timeseries: &[TimeSeries],
        cumulative: bool,
    ) -> Vec<DoubleDataPoint> {
        collect_points(label_keys, timeseries, cumulative, |header, value| {
            let value = match value {
                Some(point::Value::DoubleValue(value)) => *value,
                other => {
                    self.note_mismatch(metric_name, kind, other);
                    0.0
                }
            };
            DoubleDataPoint {
                labels: header.labels,
                start_time_unix_nano: header.start_time_unix_nano,
                time_unix_nano: header.time_unix_nano,
                value,
            }
        })
    }

    fn histogram_points(
        &mut self,
        metric_name: &str,
        label_keys: &[LabelKey],
        timeseries: &[TimeSeries],
        cumulative: bool,
    ) -> Vec<HistogramDataPoint> {
        collect_points(label_keys, timeseries, cumulative, |header, value| {
            let mut data_point = HistogramDataPoint {
                labels: header.labels,
                start_time_unix_nano: header.start_time_unix_nano,
                time_unix_nano: header.time_unix_nano,
                ..Default::default()
            };
            match value {
                Some(point::Value::DistributionValue(distribution)) => {
                    fill_histogram(&mut data_point, distribution)
                }
                other => self.note_mismatch(metric_name, MetricKind::Histogram, other),
            }
            data_point
        })
    }

    fn summary_points(
        &mut self,
        metric_name: &str,
        label_keys: &[LabelKey],
        timeseries: &[TimeSeries],
        cumulative: bool,
    ) -> Vec<SummaryDataPoint> {
        collect_points(label_keys, timeseries, cumulative, |header, value| {
            let mut data_point = SummaryDataPoint {
                labels: header.labels,
                start_time_unix_nano: header.start_time_unix_nano,
                time_unix_nano: header.time_unix_nano,
                ..Default::default()
            };
            match value {
                Some(point::Value::SummaryValue(summary)) => fill_summary(&mut data_point, summary),
                other => self.note_mismatch(metric_name, MetricKind::Summary, other),
            }
            data_point
        })
    }

    fn note_mismatch(&mut self, metric_name: &str, kind: MetricKind, value: Option<&point::Value>) {
        self.mismatched_points += 1;
        debug!(
            metric = metric_name,
            kind = %kind,
            found = value_name(value),
            "Point value does not match metric kind; emitting zero value"
        );
    }
}

fn value_name(value: Option<&point::Value>) -> &'static str {
    match value {
        Some(point::Value::Int64Value(_)) => "int64",
        Some(point::Value::DoubleValue(_)) => "double",
        Some(point::Value::DistributionValue(_)) => "distribution",
        Some(point::Value::SummaryValue(_)) => "summary",
        None => "none",
    }
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn fill_histogram(data_point: &mut HistogramDataPoint, distribution: &DistributionValue) {
    data_point.count = non_negative(distribution.count);
    data_point.sum = distribution.sum;
    data_point.explicit_bounds = explicit_bounds(distribution);
    data_point.bucket_counts = distribution
        .buckets
        .iter()
        .map(|bucket| non_negative(bucket.count))
        .collect();
    data_point.exemplars = distribution
        .buckets
        .iter()
        .filter_map(|bucket| bucket.exemplar.as_ref())
        .map(convert_exemplar)
        .collect();
}

fn explicit_bounds(distribution: &DistributionValue) -> Vec<f64> {
    match distribution
        .bucket_options
        .as_ref()
        .and_then(|options| options.r#type.as_ref())
    {
        Some(bucket_options::Type::Explicit(explicit)) => explicit.bounds.clone(),
        None => Vec::new(),
    }
}

fn convert_exemplar(exemplar: &distribution_value::Exemplar) -> Exemplar {
    Exemplar {
        time_unix_nano: optional_unix_nanos(exemplar.timestamp.as_ref()),
        value: exemplar.value,
        filtered_labels: exemplar.attachments.clone(),
    }
}

fn fill_summary(data_point: &mut SummaryDataPoint, summary: &SummaryValue) {
    data_point.count = summary
        .count
        .as_ref()
        .map(|count| non_negative(count.value))
        .unwrap_or(0);
    data_point.sum = summary.sum.as_ref().map(|sum| sum.value).unwrap_or(0.0);
    // OpenCensus percentiles are in (0, 100]; quantiles are in [0, 1].
    data_point.quantile_values = summary
        .snapshot
        .iter()
        .flat_map(|snapshot| snapshot.percentile_values.iter())
        .map(|percentile| ValueAtQuantile {
            quantile: percentile.percentile / 100.0,
            value: percentile.value,
        })
        .collect();
}
