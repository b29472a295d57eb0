// oc2otel-core - OpenCensus to internal metrics translation
//
// This crate contains the PURE translation logic: OpenCensus metric
// batches in, canonical internal metrics out. No I/O, no async, no
// runtime dependencies.
//
// Pipeline:
//   bytes ──format──▶ ExportMetricsServiceRequest ──translator──▶ MetricData

pub mod data;
pub mod error;
pub mod format;
pub mod translator;

// Re-export commonly used types
pub use data::{Metric, MetricData, MetricKind, Resource, ResourceMetrics};
pub use error::ParseError;
pub use format::{parse_oc_request, InputFormat};
pub use translator::{oc_to_metric_data, translate_with_metadata, TranslationMetadata};

pub use oc2otel_proto::opencensus::proto::agent::metrics::v1::ExportMetricsServiceRequest;

/// Decode a payload and translate every batch it contains.
///
/// JSONL payloads hold several batches; each is translated on its own and the
/// resulting resource groups are concatenated in line order.
pub fn translate_payload(
    bytes: &[u8],
    format: InputFormat,
) -> Result<(MetricData, TranslationMetadata), ParseError> {
    let requests = parse_oc_request(bytes, format)?;

    let mut data = MetricData::new();
    let mut metadata = TranslationMetadata::default();
    for request in &requests {
        let (mut batch, batch_metadata) = translate_with_metadata(request);
        data.append(&mut batch);
        metadata += batch_metadata;
    }

    Ok((data, metadata))
}
