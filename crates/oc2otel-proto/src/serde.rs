// Field deserializers for protobuf JSON doubles.
//
// Canonical protobuf JSON writes non-finite doubles as the strings "NaN",
// "Infinity" and "-Infinity", which `serde_json::Value` cannot hold as
// numbers. Double fields accept either form.

use std::fmt;

use ::serde::de::{self, Deserializer, Visitor};
use ::serde::Deserialize;

struct DoubleVisitor;

impl<'de> Visitor<'de> for DoubleVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

struct Double(f64);

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(DoubleVisitor).map(Double)
    }
}

pub fn deserialize_proto_double<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    d.deserialize_any(DoubleVisitor)
}

pub fn deserialize_proto_repeated_double<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Vec<f64>, D::Error> {
    Vec::<Double>::deserialize(d).map(|values| values.into_iter().map(|Double(v)| v).collect())
}
