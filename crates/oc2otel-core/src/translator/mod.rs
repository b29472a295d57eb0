// OpenCensus metrics to internal metrics translation
//
// One synchronous pass over an ExportMetricsServiceRequest:
// resource mapping once per batch, then classification and point
// conversion per metric, with the builder collecting the results.

mod builder;
mod kind;
mod points;
mod resource;

pub use builder::MetricDataBuilder;
pub use kind::{classify, kind_for_type, SkipReason};
pub use points::{label_map, timestamp_to_unix_nanos, PointConverter};
pub use resource::{map_resource, resource_attributes};

use oc2otel_proto::opencensus::proto::{
    agent::metrics::v1::ExportMetricsServiceRequest, metrics::v1::Metric as OcMetric,
};
use std::ops::AddAssign;
use tracing::{debug, warn};

use crate::data::{Metric, MetricData, Resource};

/// Counters describing one translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMetadata {
    /// Resource groups in the output
    pub resource_metrics_count: usize,
    /// Metrics in the output
    pub metric_count: usize,
    /// Data points in the output
    pub data_point_count: usize,
    /// Input metrics dropped because their type has no internal equivalent
    pub skipped_metrics: usize,
    /// Points emitted with a zero value because their payload did not match the metric kind
    pub mismatched_points: usize,
}

impl AddAssign for TranslationMetadata {
    fn add_assign(&mut self, other: Self) {
        self.resource_metrics_count += other.resource_metrics_count;
        self.metric_count += other.metric_count;
        self.data_point_count += other.data_point_count;
        self.skipped_metrics += other.skipped_metrics;
        self.mismatched_points += other.mismatched_points;
    }
}

/// Translate an OpenCensus batch into internal metrics.
pub fn oc_to_metric_data(request: &ExportMetricsServiceRequest) -> MetricData {
    translate_with_metadata(request).0
}

/// Translate an OpenCensus batch and report what happened along the way.
pub fn translate_with_metadata(
    request: &ExportMetricsServiceRequest,
) -> (MetricData, TranslationMetadata) {
    let resource = map_resource(request.node.as_ref(), request.resource.as_ref());
    let primary_metric_count = request
        .metrics
        .iter()
        .filter(|metric| metric.resource.is_none())
        .count();
    let mut builder =
        MetricDataBuilder::new(resource, request.metrics.len(), primary_metric_count);
    let mut converter = PointConverter::new();
    let mut skipped_metrics = 0;

    for oc_metric in &request.metrics {
        let metric = match translate_metric(&mut converter, oc_metric) {
            Ok(metric) => metric,
            Err(reason) => {
                skipped_metrics += 1;
                warn!(
                    metric = metric_name(oc_metric),
                    reason = %reason,
                    "Skipping metric"
                );
                continue;
            }
        };

        match &oc_metric.resource {
            Some(own) => builder.push_with_resource(Resource::new(resource_attributes(own)), metric),
            None => builder.push(metric),
        }
    }

    let data = builder.finish();
    let metadata = TranslationMetadata {
        resource_metrics_count: data.resource_metrics.len(),
        metric_count: data.metric_count(),
        data_point_count: data.data_point_count(),
        skipped_metrics,
        mismatched_points: converter.mismatched_points(),
    };

    debug!(
        resource_metrics = metadata.resource_metrics_count,
        metrics = metadata.metric_count,
        data_points = metadata.data_point_count,
        skipped = metadata.skipped_metrics,
        mismatched = metadata.mismatched_points,
        "Translated OpenCensus batch"
    );

    (data, metadata)
}

fn translate_metric(
    converter: &mut PointConverter,
    oc_metric: &OcMetric,
) -> Result<Metric, SkipReason> {
    let descriptor = oc_metric
        .metric_descriptor
        .as_ref()
        .ok_or(SkipReason::MissingDescriptor)?;
    let kind = classify(descriptor.r#type)?;

    let data = converter.convert(
        &descriptor.name,
        kind,
        &descriptor.label_keys,
        &oc_metric.timeseries,
    );

    Ok(Metric {
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        unit: descriptor.unit.clone(),
        data,
    })
}

fn metric_name(oc_metric: &OcMetric) -> &str {
    oc_metric
        .metric_descriptor
        .as_ref()
        .map(|descriptor| descriptor.name.as_str())
        .unwrap_or("")
}
