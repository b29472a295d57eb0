// Read → decode → translate → write
//
// One payload per invocation. Input comes from a file or stdin, output goes
// to a file or stdout as MetricData JSON.

use anyhow::{bail, Context, Result};
use oc2otel_config::{FormatSetting, RuntimeConfig};
use oc2otel_core::{translate_payload, InputFormat, MetricData, TranslationMetadata};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Where the payload is read from and the result written to.
/// `None` or `-` selects stdin / stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paths<'a> {
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
}

/// Run one translation end to end.
pub fn run(config: &RuntimeConfig, paths: Paths<'_>) -> Result<TranslationMetadata> {
    let input = paths.input.filter(|path| !is_stdio(path));
    let output = paths.output.filter(|path| !is_stdio(path));

    let bytes = read_input(input, config.input.max_payload_bytes)?;
    let format = resolve_format(config.input.format, input, &bytes);
    debug!(
        bytes = bytes.len(),
        format = %format,
        "Read OpenCensus payload"
    );

    let (data, metadata) = translate(&bytes, format)?;
    let rendered = render(&data, config.output.pretty)?;
    write_output(output, &rendered)?;

    info!(
        resource_metrics = metadata.resource_metrics_count,
        metrics = metadata.metric_count,
        data_points = metadata.data_point_count,
        "Translation complete"
    );
    if metadata.skipped_metrics > 0 || metadata.mismatched_points > 0 {
        warn!(
            skipped_metrics = metadata.skipped_metrics,
            mismatched_points = metadata.mismatched_points,
            "Some input could not be translated as-is"
        );
    }

    Ok(metadata)
}

/// Decode and translate a payload already in memory.
pub fn translate(bytes: &[u8], format: InputFormat) -> Result<(MetricData, TranslationMetadata)> {
    translate_payload(bytes, format)
        .with_context(|| format!("Failed to decode {} payload", format))
}

/// Explicit setting first, then the file extension, then the payload bytes.
pub fn resolve_format(setting: FormatSetting, path: Option<&Path>, bytes: &[u8]) -> InputFormat {
    match setting {
        FormatSetting::Protobuf => InputFormat::Protobuf,
        FormatSetting::Json => InputFormat::Json,
        FormatSetting::Jsonl => InputFormat::Jsonl,
        FormatSetting::Auto => path
            .and_then(InputFormat::from_path)
            .unwrap_or_else(|| InputFormat::sniff(bytes)),
    }
}

/// Serialize translated metrics as JSON with a trailing newline.
pub fn render(data: &MetricData, pretty: bool) -> Result<Vec<u8>> {
    let mut rendered = if pretty {
        serde_json::to_vec_pretty(data)
    } else {
        serde_json::to_vec(data)
    }
    .context("Failed to serialize translated metrics")?;
    rendered.push(b'\n');
    Ok(rendered)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: Option<&Path>, max_payload_bytes: usize) -> Result<Vec<u8>> {
    let bytes = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            read_limited(file, max_payload_bytes)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        None => read_limited(io::stdin().lock(), max_payload_bytes)
            .context("Failed to read payload from stdin")?,
    };
    Ok(bytes)
}

fn read_limited<R: Read>(reader: R, max_payload_bytes: usize) -> Result<Vec<u8>> {
    let limit = u64::try_from(max_payload_bytes)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;

    if bytes.len() > max_payload_bytes {
        bail!(
            "Payload exceeds max_payload_bytes ({} bytes)",
            max_payload_bytes
        );
    }
    Ok(bytes)
}

fn write_output(path: Option<&Path>, rendered: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered)?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
