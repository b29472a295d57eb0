// Shared fixtures for oc2otel-core integration tests
//
// Each OpenCensus batch builder has a matching builder for the MetricData
// the translator is expected to produce from it.

#![allow(dead_code)]

use oc2otel_core::data::{
    AggregationTemporality, Data, DoubleDataPoint, DoubleGauge, DoubleSum, Exemplar, Histogram,
    HistogramDataPoint, InstrumentationLibraryMetrics, IntDataPoint, IntGauge, IntSum, Metric,
    MetricData, Resource, ResourceMetrics, StringMap, Summary, SummaryDataPoint, ValueAtQuantile,
};
use oc2otel_proto::google::protobuf::{DoubleValue, Int64Value, Timestamp};
use oc2otel_proto::opencensus::proto::{
    agent::{common::v1::Node, metrics::v1::ExportMetricsServiceRequest},
    metrics::v1::{
        distribution_value::{self, bucket_options},
        metric_descriptor::Type,
        point,
        summary_value::{snapshot::ValueAtPercentile, Snapshot},
        DistributionValue, LabelKey, LabelValue, Metric as OcMetric, MetricDescriptor, Point,
        SummaryValue, TimeSeries,
    },
    resource::v1::Resource as OcResource,
};
use std::path::{Path, PathBuf};

// 2020-02-11T20:26:12.000000321Z
pub const START_SECONDS: i64 = 1_581_452_772;
pub const START_NANOS: i32 = 321;
pub const START_UNIX_NANO: u64 = 1_581_452_772_000_000_321;

// 2020-02-11T20:26:13.000000789Z
pub const POINT_SECONDS: i64 = 1_581_452_773;
pub const POINT_NANOS: i32 = 789;
pub const POINT_UNIX_NANO: u64 = 1_581_452_773_000_000_789;

pub fn testdata_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("testdata")
        .join(filename)
}

fn start_timestamp() -> Option<Timestamp> {
    Some(Timestamp {
        seconds: START_SECONDS,
        nanos: START_NANOS,
    })
}

fn point_timestamp() -> Option<Timestamp> {
    Some(Timestamp {
        seconds: POINT_SECONDS,
        nanos: POINT_NANOS,
    })
}

fn string_map(pairs: &[(&str, &str)]) -> StringMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn label_keys(keys: &[&str]) -> Vec<LabelKey> {
    keys.iter()
        .map(|key| LabelKey {
            key: key.to_string(),
            description: String::new(),
        })
        .collect()
}

fn set(value: &str) -> LabelValue {
    LabelValue {
        value: value.to_string(),
        has_value: true,
    }
}

fn unset() -> LabelValue {
    LabelValue::default()
}

fn descriptor(name: &str, descriptor_type: Type, keys: &[&str]) -> MetricDescriptor {
    MetricDescriptor {
        name: name.to_string(),
        description: String::new(),
        unit: "1".to_string(),
        r#type: descriptor_type as i32,
        label_keys: label_keys(keys),
    }
}

fn series(label_values: Vec<LabelValue>, value: point::Value) -> TimeSeries {
    TimeSeries {
        start_timestamp: start_timestamp(),
        label_values,
        points: vec![Point {
            timestamp: point_timestamp(),
            value: Some(value),
        }],
    }
}

fn metric(name: &str, unit: &str, data: Data) -> Metric {
    Metric {
        name: name.to_string(),
        description: String::new(),
        unit: unit.to_string(),
        data,
    }
}

fn one_group(resource: Resource, metrics: Vec<Metric>) -> MetricData {
    MetricData {
        resource_metrics: vec![ResourceMetrics {
            resource,
            instrumentation_library_metrics: vec![InstrumentationLibraryMetrics {
                metrics,
                ..Default::default()
            }],
        }],
    }
}

// ---------------------------------------------------------------------------
// OpenCensus inputs
// ---------------------------------------------------------------------------

pub fn oc_resource() -> OcResource {
    OcResource {
        r#type: String::new(),
        labels: [(
            "resource-attr".to_string(),
            "resource-attr-val-1".to_string(),
        )]
        .into(),
    }
}

pub fn oc_metric_int() -> OcMetric {
    OcMetric {
        metric_descriptor: Some(descriptor(
            "counter-int",
            Type::CumulativeInt64,
            &["int-label-1", "int-label-2"],
        )),
        timeseries: vec![
            series(vec![set("int-label-value-1"), unset()], point::Value::Int64Value(123)),
            series(vec![unset(), set("int-label-value-2")], point::Value::Int64Value(456)),
        ],
        resource: None,
    }
}

pub fn oc_metric_double() -> OcMetric {
    OcMetric {
        metric_descriptor: Some(descriptor(
            "counter-double",
            Type::CumulativeDouble,
            &["double-label-1", "double-label-2", "double-label-3"],
        )),
        timeseries: vec![
            series(
                vec![set("double-label-value-1"), set("double-label-value-2")],
                point::Value::DoubleValue(1.23),
            ),
            series(
                vec![set("double-label-value-1"), unset(), set("double-label-value-3")],
                point::Value::DoubleValue(4.56),
            ),
        ],
        resource: None,
    }
}

pub fn oc_metric_histogram() -> OcMetric {
    let with_exemplar = DistributionValue {
        count: 1,
        sum: 15.0,
        sum_of_squared_deviation: 0.0,
        bucket_options: Some(distribution_value::BucketOptions {
            r#type: Some(bucket_options::Type::Explicit(bucket_options::Explicit {
                bounds: vec![1.0],
            })),
        }),
        buckets: vec![
            distribution_value::Bucket {
                count: 0,
                exemplar: None,
            },
            distribution_value::Bucket {
                count: 1,
                exemplar: Some(distribution_value::Exemplar {
                    value: 15.0,
                    timestamp: point_timestamp(),
                    attachments: [(
                        "exemplar-attachment".to_string(),
                        "exemplar-attachment-value".to_string(),
                    )]
                    .into(),
                }),
            },
        ],
    };
    let without_buckets = DistributionValue {
        count: 2,
        sum: 30.0,
        ..Default::default()
    };

    OcMetric {
        metric_descriptor: Some(descriptor(
            "cumulative-histogram",
            Type::CumulativeDistribution,
            &["histogram-label-1"],
        )),
        timeseries: vec![
            series(
                vec![set("histogram-label-value-1")],
                point::Value::DistributionValue(with_exemplar),
            ),
            series(vec![unset()], point::Value::DistributionValue(without_buckets)),
        ],
        resource: None,
    }
}

pub fn oc_metric_summary() -> OcMetric {
    let summary = SummaryValue {
        count: Some(Int64Value { value: 1 }),
        sum: Some(DoubleValue { value: 15.0 }),
        snapshot: Some(Snapshot {
            count: None,
            sum: None,
            percentile_values: vec![
                ValueAtPercentile {
                    percentile: 1.0,
                    value: 15.0,
                },
                ValueAtPercentile {
                    percentile: 50.0,
                    value: 15.0,
                },
            ],
        }),
    };

    OcMetric {
        metric_descriptor: Some(descriptor(
            "cumulative-summary",
            Type::Summary,
            &["summary-label"],
        )),
        timeseries: vec![series(
            vec![set("summary-label-value-1")],
            point::Value::SummaryValue(summary),
        )],
        resource: None,
    }
}

pub fn oc_metric_gauge_no_labels() -> OcMetric {
    OcMetric {
        metric_descriptor: Some(descriptor("gauge-int", Type::GaugeInt64, &[])),
        timeseries: vec![series(vec![], point::Value::Int64Value(123))],
        resource: None,
    }
}

/// One metric of every supported type, each with a labelled timeseries and
/// no points.
pub fn oc_metrics_no_points() -> Vec<OcMetric> {
    [
        ("gauge-int", Type::GaugeInt64),
        ("gauge-double", Type::GaugeDouble),
        ("counter-int", Type::CumulativeInt64),
        ("counter-double", Type::CumulativeDouble),
        ("cumulative-histogram", Type::CumulativeDistribution),
        ("cumulative-summary", Type::Summary),
    ]
    .into_iter()
    .map(|(name, descriptor_type)| OcMetric {
        metric_descriptor: Some(descriptor(name, descriptor_type, &["label"])),
        timeseries: vec![TimeSeries {
            start_timestamp: start_timestamp(),
            label_values: vec![set("value")],
            points: vec![],
        }],
        resource: None,
    })
    .collect()
}

pub fn oc_batch(metrics: Vec<OcMetric>) -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest {
        node: None,
        metrics,
        resource: Some(oc_resource()),
    }
}

pub fn oc_batch_empty_node_and_resource() -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest {
        node: Some(Node::default()),
        metrics: vec![],
        resource: Some(OcResource::default()),
    }
}

pub fn oc_batch_no_metrics() -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest {
        node: Some(Node::default()),
        metrics: vec![],
        resource: Some(oc_resource()),
    }
}

pub fn oc_batch_sample() -> ExportMetricsServiceRequest {
    oc_batch(vec![
        oc_metric_int(),
        oc_metric_double(),
        oc_metric_histogram(),
        oc_metric_summary(),
    ])
}

// ---------------------------------------------------------------------------
// Expected internal metrics
// ---------------------------------------------------------------------------

pub fn resource() -> Resource {
    Resource::new(string_map(&[("resource-attr", "resource-attr-val-1")]))
}

pub fn metric_int() -> Metric {
    let point = |labels: &[(&str, &str)], value| IntDataPoint {
        labels: string_map(labels),
        start_time_unix_nano: Some(START_UNIX_NANO),
        time_unix_nano: POINT_UNIX_NANO,
        value,
    };
    metric(
        "counter-int",
        "1",
        Data::IntSum(IntSum {
            aggregation_temporality: AggregationTemporality::Cumulative,
            is_monotonic: true,
            data_points: vec![
                point(
                    &[("int-label-1", "int-label-value-1"), ("int-label-2", "")],
                    123,
                ),
                point(
                    &[("int-label-1", ""), ("int-label-2", "int-label-value-2")],
                    456,
                ),
            ],
        }),
    )
}

pub fn metric_double() -> Metric {
    let point = |labels: &[(&str, &str)], value| DoubleDataPoint {
        labels: string_map(labels),
        start_time_unix_nano: Some(START_UNIX_NANO),
        time_unix_nano: POINT_UNIX_NANO,
        value,
    };
    metric(
        "counter-double",
        "1",
        Data::DoubleSum(DoubleSum {
            aggregation_temporality: AggregationTemporality::Cumulative,
            is_monotonic: true,
            data_points: vec![
                point(
                    &[
                        ("double-label-1", "double-label-value-1"),
                        ("double-label-2", "double-label-value-2"),
                        ("double-label-3", ""),
                    ],
                    1.23,
                ),
                point(
                    &[
                        ("double-label-1", "double-label-value-1"),
                        ("double-label-2", ""),
                        ("double-label-3", "double-label-value-3"),
                    ],
                    4.56,
                ),
            ],
        }),
    )
}

pub fn metric_histogram() -> Metric {
    metric(
        "cumulative-histogram",
        "1",
        Data::Histogram(Histogram {
            aggregation_temporality: AggregationTemporality::Cumulative,
            data_points: vec![
                HistogramDataPoint {
                    labels: string_map(&[("histogram-label-1", "histogram-label-value-1")]),
                    start_time_unix_nano: Some(START_UNIX_NANO),
                    time_unix_nano: POINT_UNIX_NANO,
                    count: 1,
                    sum: 15.0,
                    bucket_counts: vec![0, 1],
                    explicit_bounds: vec![1.0],
                    exemplars: vec![Exemplar {
                        time_unix_nano: POINT_UNIX_NANO,
                        value: 15.0,
                        filtered_labels: string_map(&[(
                            "exemplar-attachment",
                            "exemplar-attachment-value",
                        )]),
                    }],
                },
                HistogramDataPoint {
                    labels: string_map(&[("histogram-label-1", "")]),
                    start_time_unix_nano: Some(START_UNIX_NANO),
                    time_unix_nano: POINT_UNIX_NANO,
                    count: 2,
                    sum: 30.0,
                    bucket_counts: vec![],
                    explicit_bounds: vec![],
                    exemplars: vec![],
                },
            ],
        }),
    )
}

pub fn metric_summary() -> Metric {
    metric(
        "cumulative-summary",
        "1",
        Data::Summary(Summary {
            data_points: vec![SummaryDataPoint {
                labels: string_map(&[("summary-label", "summary-label-value-1")]),
                start_time_unix_nano: Some(START_UNIX_NANO),
                time_unix_nano: POINT_UNIX_NANO,
                count: 1,
                sum: 15.0,
                quantile_values: vec![
                    ValueAtQuantile {
                        quantile: 0.01,
                        value: 15.0,
                    },
                    ValueAtQuantile {
                        quantile: 0.5,
                        value: 15.0,
                    },
                ],
            }],
        }),
    )
}

pub fn metric_gauge_no_labels() -> Metric {
    metric(
        "gauge-int",
        "1",
        Data::IntGauge(IntGauge {
            data_points: vec![IntDataPoint {
                labels: StringMap::new(),
                start_time_unix_nano: None,
                time_unix_nano: POINT_UNIX_NANO,
                value: 123,
            }],
        }),
    )
}

pub fn metrics_no_points() -> Vec<Metric> {
    vec![
        metric("gauge-int", "1", Data::IntGauge(IntGauge::default())),
        metric("gauge-double", "1", Data::DoubleGauge(DoubleGauge::default())),
        metric(
            "counter-int",
            "1",
            Data::IntSum(IntSum {
                aggregation_temporality: AggregationTemporality::Cumulative,
                is_monotonic: true,
                data_points: vec![],
            }),
        ),
        metric(
            "counter-double",
            "1",
            Data::DoubleSum(DoubleSum {
                aggregation_temporality: AggregationTemporality::Cumulative,
                is_monotonic: true,
                data_points: vec![],
            }),
        ),
        metric(
            "cumulative-histogram",
            "1",
            Data::Histogram(Histogram {
                aggregation_temporality: AggregationTemporality::Cumulative,
                data_points: vec![],
            }),
        ),
        metric("cumulative-summary", "1", Data::Summary(Summary::default())),
    ]
}

pub fn metric_data_one_empty_resource_metrics() -> MetricData {
    MetricData {
        resource_metrics: vec![ResourceMetrics::new(Resource::default())],
    }
}

pub fn metric_data_no_libraries() -> MetricData {
    MetricData {
        resource_metrics: vec![ResourceMetrics::new(resource())],
    }
}

pub fn metric_data(metrics: Vec<Metric>) -> MetricData {
    one_group(resource(), metrics)
}

pub fn metric_data_sample() -> MetricData {
    metric_data(vec![
        metric_int(),
        metric_double(),
        metric_histogram(),
        metric_summary(),
    ])
}
