// JSON normalization for OpenCensus canonical JSON
//
// Converts canonical protobuf JSON (camelCase keys, int64 as strings,
// RFC 3339 timestamps, enum names, bare wrapper values, flattened oneofs)
// into the shape the serde derives on the prost structs expect.
//
// Keys inside map fields (resource labels, node attributes, exemplar
// attachments) are user data and are left untouched.

use chrono::{DateTime, Timelike};
use oc2otel_proto::opencensus::proto::agent::common::v1::library_info::Language;
use oc2otel_proto::opencensus::proto::metrics::v1::metric_descriptor::Type as DescriptorType;
use serde_json::{Map, Number, Value as JsonValue};
use std::borrow::Cow;
use std::mem;

use super::field_names::oc;
use crate::error::{ParseError, Result};

const MAP_FIELDS: &[&str] = &[oc::LABELS, oc::ATTRIBUTES, oc::ATTACHMENTS];
const TIMESTAMP_FIELDS: &[&str] = &[oc::TIMESTAMP, oc::START_TIMESTAMP];
const I64_FIELDS: &[&str] = &[oc::INT64_VALUE, oc::COUNT, oc::SECONDS];
const F64_FIELDS: &[&str] = &[
    oc::DOUBLE_VALUE,
    oc::SUM,
    oc::SUM_OF_SQUARED_DEVIATION,
    oc::BOUNDS,
    oc::PERCENTILE,
];
const POINT_VARIANTS: &[(&str, &str)] = &[
    (oc::INT64_VALUE, "Int64Value"),
    (oc::DOUBLE_VALUE, "DoubleValue"),
    (oc::DISTRIBUTION_VALUE, "DistributionValue"),
    (oc::SUMMARY_VALUE, "SummaryValue"),
];

/// Normalize canonical OpenCensus JSON in place.
///
/// `key_hint` is the (snake_case) field name under which `value` appears;
/// pass `None` for the request root.
pub(crate) fn normalise_json_value(value: &mut JsonValue, key_hint: Option<&str>) -> Result<()> {
    match value {
        JsonValue::Object(map) => {
            if key_hint.is_some_and(|hint| MAP_FIELDS.contains(&hint)) {
                return Ok(());
            }

            let original = mem::take(map);
            for (key, mut val) in original {
                let snake_key: Cow<'_, str> = if needs_snake_case(&key) {
                    Cow::Owned(camel_to_snake_case(&key))
                } else {
                    Cow::Borrowed(key.as_str())
                };

                normalise_json_value(&mut val, Some(snake_key.as_ref()))?;

                let final_key = match snake_key {
                    Cow::Owned(s) => s,
                    Cow::Borrowed(_) => key,
                };
                map.insert(final_key, val);
            }

            match key_hint {
                Some(oc::POINTS) => wrap_point_value(map),
                Some(oc::BUCKET_OPTIONS) => wrap_bucket_options(map),
                Some(oc::SUMMARY_VALUE) | Some(oc::SNAPSHOT) => {
                    wrap_scalar(map, oc::COUNT);
                    wrap_scalar(map, oc::SUM);
                }
                // `value` is a double here, but a string in label values.
                Some(oc::PERCENTILE_VALUES) | Some(oc::EXEMPLAR) => {
                    convert_double_field(map, oc::VALUE)?;
                }
                Some(oc::METRIC_DESCRIPTOR) => {
                    convert_enum(map, oc::TYPE, |name| {
                        DescriptorType::from_str_name(name).map(|t| t as i32)
                    })?;
                }
                Some(oc::LIBRARY_INFO) => {
                    convert_enum(map, oc::LANGUAGE, |name| {
                        Language::from_str_name(name).map(|l| l as i32)
                    })?;
                }
                _ => {}
            }

            Ok(())
        }
        JsonValue::Array(values) => {
            for item in values.iter_mut() {
                normalise_json_value(item, key_hint)?;
            }
            Ok(())
        }
        JsonValue::String(current) => {
            if let Some(key) = key_hint {
                if let Some(converted) = convert_string_field(key, current)? {
                    *value = converted;
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Convert string field values to their typed JSON form.
///
/// Canonical JSON carries int64 values as strings and timestamps as
/// RFC 3339 strings.
fn convert_string_field(key: &str, value: &str) -> Result<Option<JsonValue>> {
    if TIMESTAMP_FIELDS.contains(&key) {
        return parse_timestamp(key, value).map(Some);
    }

    if value.is_empty() {
        return Ok(None);
    }

    if I64_FIELDS.contains(&key) {
        let parsed = value
            .parse::<i64>()
            .map_err(|e| ParseError::invalid_field(key, value, e.to_string()))?;
        return Ok(Some(JsonValue::Number(Number::from(parsed))));
    }

    if F64_FIELDS.contains(&key) {
        return parse_double(key, value).map(Some);
    }

    Ok(None)
}

/// Numeric strings become numbers. Non-finite values cannot be JSON numbers,
/// so they stay strings in their canonical spelling for the proto field
/// deserializers.
fn parse_double(key: &str, value: &str) -> Result<JsonValue> {
    let parsed = value
        .parse::<f64>()
        .map_err(|e| ParseError::invalid_field(key, value, e.to_string()))?;

    let converted = match Number::from_f64(parsed) {
        Some(number) => JsonValue::Number(number),
        None if parsed.is_nan() => JsonValue::String("NaN".to_string()),
        None if parsed > 0.0 => JsonValue::String("Infinity".to_string()),
        None => JsonValue::String("-Infinity".to_string()),
    };
    Ok(converted)
}

fn convert_double_field(map: &mut Map<String, JsonValue>, field: &str) -> Result<()> {
    if let Some(slot) = map.get_mut(field) {
        if let JsonValue::String(text) = slot {
            *slot = parse_double(field, text)?;
        }
    }
    Ok(())
}

fn parse_timestamp(key: &str, value: &str) -> Result<JsonValue> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|e| ParseError::invalid_field(key, value, e.to_string()))?;

    let mut timestamp = Map::with_capacity(2);
    timestamp.insert(
        oc::SECONDS.to_string(),
        JsonValue::Number(Number::from(parsed.timestamp())),
    );
    timestamp.insert(
        oc::NANOS.to_string(),
        JsonValue::Number(Number::from(parsed.nanosecond())),
    );
    Ok(JsonValue::Object(timestamp))
}

/// `{"int64Value": 1}` → `{"value": {"Int64Value": 1}}`
fn wrap_point_value(map: &mut Map<String, JsonValue>) {
    if map.contains_key(oc::VALUE) {
        return;
    }
    for (field, variant) in POINT_VARIANTS {
        if let Some(inner) = map.remove(*field) {
            map.insert(oc::VALUE.to_string(), tagged(variant, inner));
            return;
        }
    }
}

/// `{"explicit": {...}}` → `{"type": {"Explicit": {...}}}`
fn wrap_bucket_options(map: &mut Map<String, JsonValue>) {
    if map.contains_key(oc::TYPE) {
        return;
    }
    if let Some(explicit) = map.remove(oc::EXPLICIT) {
        map.insert(oc::TYPE.to_string(), tagged("Explicit", explicit));
    }
}

/// Wrapper types are bare scalars in canonical JSON: `10` → `{"value": 10}`.
/// Non-finite doubles arrive here still as strings.
fn wrap_scalar(map: &mut Map<String, JsonValue>, field: &str) {
    if let Some(slot) = map.get_mut(field) {
        if slot.is_number() || slot.is_string() {
            let inner = mem::take(slot);
            *slot = tagged(oc::VALUE, inner);
        }
    }
}

fn convert_enum(
    map: &mut Map<String, JsonValue>,
    field: &str,
    lookup: impl Fn(&str) -> Option<i32>,
) -> Result<()> {
    if let Some(slot) = map.get_mut(field) {
        if let JsonValue::String(name) = slot {
            let number = lookup(name).ok_or_else(|| {
                ParseError::invalid_field(field, name.as_str(), "unknown enum name")
            })?;
            *slot = JsonValue::Number(Number::from(number));
        }
    }
    Ok(())
}

fn tagged(tag: &str, inner: JsonValue) -> JsonValue {
    let mut map = Map::with_capacity(1);
    map.insert(tag.to_string(), inner);
    JsonValue::Object(map)
}

/// camelCase keys start lowercase; PascalCase keys are already-normalized
/// oneof variants and stay as they are.
fn needs_snake_case(key: &str) -> bool {
    key.starts_with(|c: char| c.is_ascii_lowercase()) && key.chars().any(|c| c.is_ascii_uppercase())
}

/// Convert camelCase to snake_case
fn camel_to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let mut prev_underscore = false;
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            if !result.is_empty() && !prev_underscore {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
            prev_underscore = false;
        } else {
            prev_underscore = ch == '_';
            result.push(ch);
        }
    }
    result
}
