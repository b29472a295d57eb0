// Synthetic OpenCensus metric batches for benchmarking
//
// Creates ExportMetricsServiceRequest instances with configurable:
// - Number of timeseries (1k, 25k, 100k), one point each
// - Metric type (int/double counters, histograms, summaries, or a mix)
// - Format (protobuf, JSON)

use oc2otel_proto::google::protobuf::{DoubleValue, Int64Value, Timestamp};
use oc2otel_proto::opencensus::proto::{
    agent::metrics::v1::ExportMetricsServiceRequest,
    metrics::v1::{
        distribution_value::{self, bucket_options},
        metric_descriptor::Type,
        point,
        summary_value::{snapshot::ValueAtPercentile, Snapshot},
        DistributionValue, LabelKey, LabelValue, Metric, MetricDescriptor, Point, SummaryValue,
        TimeSeries,
    },
    resource::v1::Resource,
};
use prost::Message;

const SERIES_PER_METRIC: usize = 100;
const BASE_SECONDS: i64 = 1_700_000_000;

/// Workload size presets
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum WorkloadSize {
    Small,  // 1k timeseries
    Medium, // 25k timeseries
    Large,  // 100k timeseries
}

impl WorkloadSize {
    pub fn series_count(&self) -> usize {
        match self {
            WorkloadSize::Small => 1_000,
            WorkloadSize::Medium => 25_000,
            WorkloadSize::Large => 100_000,
        }
    }
}

/// Which metric type the generated batch carries
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Shape {
    IntCounter,
    DoubleCounter,
    Histogram,
    Summary,
    Mixed,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::IntCounter,
        Shape::DoubleCounter,
        Shape::Histogram,
        Shape::Summary,
        Shape::Mixed,
    ];

    fn for_metric(&self, metric_idx: usize) -> Shape {
        match self {
            Shape::Mixed => Shape::ALL[metric_idx % 4],
            other => *other,
        }
    }
}

/// Generate a synthetic OpenCensus export batch
pub fn generate_oc_batch(size: WorkloadSize, shape: Shape) -> ExportMetricsServiceRequest {
    let metric_count = (size.series_count() / SERIES_PER_METRIC).max(1);

    let metrics = (0..metric_count)
        .map(|metric_idx| generate_metric(metric_idx, shape.for_metric(metric_idx)))
        .collect();

    ExportMetricsServiceRequest {
        node: None,
        resource: Some(Resource {
            r#type: "host".to_string(),
            labels: [
                ("service.name".to_string(), "bench-service".to_string()),
                ("host.name".to_string(), "bench-host".to_string()),
            ]
            .into(),
        }),
        metrics,
    }
}

fn generate_metric(metric_idx: usize, shape: Shape) -> Metric {
    let descriptor_type = match shape {
        Shape::IntCounter => Type::CumulativeInt64,
        Shape::DoubleCounter => Type::CumulativeDouble,
        Shape::Histogram => Type::CumulativeDistribution,
        Shape::Summary | Shape::Mixed => Type::Summary,
    };

    Metric {
        metric_descriptor: Some(MetricDescriptor {
            name: format!("bench.metric.{}", metric_idx),
            description: "Synthetic benchmark metric".to_string(),
            unit: "1".to_string(),
            r#type: descriptor_type as i32,
            label_keys: ["method", "status", "route"]
                .iter()
                .map(|key| LabelKey {
                    key: key.to_string(),
                    description: String::new(),
                })
                .collect(),
        }),
        timeseries: (0..SERIES_PER_METRIC)
            .map(|series_idx| generate_series(series_idx, shape))
            .collect(),
        resource: None,
    }
}

fn generate_series(series_idx: usize, shape: Shape) -> TimeSeries {
    let label = |value: String| LabelValue {
        value,
        has_value: true,
    };
    // Every fifth series leaves the route unset
    let mut label_values = vec![
        label(["GET", "POST", "PUT"][series_idx % 3].to_string()),
        label((200 + series_idx % 5 * 100).to_string()),
    ];
    if series_idx % 5 != 0 {
        label_values.push(label(format!("/api/v1/resource/{}", series_idx % 20)));
    }

    TimeSeries {
        start_timestamp: Some(Timestamp {
            seconds: BASE_SECONDS,
            nanos: 0,
        }),
        label_values,
        points: vec![Point {
            timestamp: Some(Timestamp {
                seconds: BASE_SECONDS + 60,
                nanos: (series_idx * 1_000) as i32,
            }),
            value: Some(generate_value(series_idx, shape)),
        }],
    }
}

fn generate_value(series_idx: usize, shape: Shape) -> point::Value {
    let n = series_idx as f64;
    match shape {
        Shape::IntCounter => point::Value::Int64Value(series_idx as i64 * 7),
        Shape::DoubleCounter => point::Value::DoubleValue(n * 1.5),
        Shape::Histogram => point::Value::DistributionValue(DistributionValue {
            count: 10,
            sum: n * 10.0,
            sum_of_squared_deviation: 0.0,
            bucket_options: Some(distribution_value::BucketOptions {
                r#type: Some(bucket_options::Type::Explicit(bucket_options::Explicit {
                    bounds: vec![5.0, 10.0, 25.0, 50.0],
                })),
            }),
            buckets: [1, 2, 3, 3, 1]
                .iter()
                .enumerate()
                .map(|(bucket_idx, count)| distribution_value::Bucket {
                    count: *count,
                    exemplar: (bucket_idx == 2).then(|| distribution_value::Exemplar {
                        value: 12.5,
                        timestamp: Some(Timestamp {
                            seconds: BASE_SECONDS + 30,
                            nanos: 0,
                        }),
                        attachments: [("trace_id".to_string(), format!("{:032x}", series_idx))]
                            .into(),
                    }),
                })
                .collect(),
        }),
        Shape::Summary | Shape::Mixed => point::Value::SummaryValue(SummaryValue {
            count: Some(Int64Value { value: 10 }),
            sum: Some(DoubleValue { value: n * 10.0 }),
            snapshot: Some(Snapshot {
                count: None,
                sum: None,
                percentile_values: [50.0, 90.0, 99.0]
                    .iter()
                    .map(|percentile| ValueAtPercentile {
                        percentile: *percentile,
                        value: n + percentile / 10.0,
                    })
                    .collect(),
            }),
        }),
    }
}

/// Serialize request to protobuf bytes
#[allow(dead_code)]
pub fn to_protobuf(request: &ExportMetricsServiceRequest) -> Vec<u8> {
    request.encode_to_vec()
}

/// Serialize request to JSON bytes
#[allow(dead_code)]
pub fn to_json(request: &ExportMetricsServiceRequest) -> Vec<u8> {
    serde_json::to_vec(request).expect("Failed to serialize to JSON")
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_generate_small_workload() {
        let request = generate_oc_batch(WorkloadSize::Small, Shape::Mixed);
        let total_series: usize = request.metrics.iter().map(|m| m.timeseries.len()).sum();
        assert_eq!(total_series, 1_000);
    }

    #[test]
    fn test_serialization() {
        let request = generate_oc_batch(WorkloadSize::Small, Shape::Histogram);
        assert!(!to_protobuf(&request).is_empty());
        assert!(!to_json(&request).is_empty());
    }
}
