/// A point in time independent of any time zone or calendar, represented as
/// seconds and fractions of seconds at nanosecond resolution in UTC Epoch time.
#[derive(::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    /// Seconds of UTC time since Unix epoch 1970-01-01T00:00:00Z.
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    /// Non-negative fractions of a second at nanosecond resolution.
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}
/// Wrapper message for `int64`.
#[derive(::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Int64Value {
    #[prost(int64, tag = "1")]
    pub value: i64,
}
/// Wrapper message for `double`.
#[derive(::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DoubleValue {
    #[prost(double, tag = "1")]
    #[serde(deserialize_with = "crate::serde::deserialize_proto_double")]
    pub value: f64,
}
