// Metric kind classification
//
// The OpenCensus descriptor type is the only input that decides which
// internal variant receives a metric's points.

use oc2otel_proto::opencensus::proto::metrics::v1::metric_descriptor::Type as DescriptorType;
use thiserror::Error;

use crate::data::MetricKind;

/// Why a metric was left out of the translated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("metric has no descriptor")]
    MissingDescriptor,
    #[error("descriptor type {} has no internal equivalent", .0.as_str_name())]
    UnsupportedType(DescriptorType),
    #[error("unknown descriptor type value {0}")]
    UnknownType(i32),
}

/// Internal variant for each supported descriptor type.
pub fn kind_for_type(descriptor_type: DescriptorType) -> Option<MetricKind> {
    match descriptor_type {
        DescriptorType::GaugeInt64 => Some(MetricKind::IntGauge),
        DescriptorType::CumulativeInt64 => Some(MetricKind::IntSum),
        DescriptorType::GaugeDouble => Some(MetricKind::DoubleGauge),
        DescriptorType::CumulativeDouble => Some(MetricKind::DoubleSum),
        DescriptorType::CumulativeDistribution => Some(MetricKind::Histogram),
        DescriptorType::Summary => Some(MetricKind::Summary),
        DescriptorType::Unspecified | DescriptorType::GaugeDistribution => None,
    }
}

/// Classify the raw descriptor type field as carried on the wire.
pub fn classify(raw_type: i32) -> Result<MetricKind, SkipReason> {
    let descriptor_type =
        DescriptorType::try_from(raw_type).map_err(|_| SkipReason::UnknownType(raw_type))?;
    kind_for_type(descriptor_type).ok_or(SkipReason::UnsupportedType(descriptor_type))
}
