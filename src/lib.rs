// oc2otel - OpenCensus metrics to the canonical internal metrics model
//
// Command line front end over oc2otel-core: reads one OpenCensus export
// payload (protobuf, JSON or JSONL), translates it and writes MetricData JSON.

pub mod init;
pub mod pipeline;

pub use init::{init_runtime, init_tracing};
pub use pipeline::{render, resolve_format, run, translate, Paths};
