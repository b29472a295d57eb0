// oc2otel-proto - OpenCensus Metrics Protocol Definitions
//
// Message types for the OpenCensus agent metrics protocol, wire-compatible
// with opencensus-proto v0.3 and the well-known google.protobuf types it uses.
// The definitions are checked in rather than generated at build time, so the
// crate builds without protoc.

mod serde;

pub mod google {
    pub mod protobuf {
        include!("google.protobuf.rs");
    }
}

pub mod opencensus {
    pub mod proto {
        pub mod agent {
            pub mod common {
                pub mod v1 {
                    include!("opencensus.proto.agent.common.v1.rs");
                }
            }
            pub mod metrics {
                pub mod v1 {
                    include!("opencensus.proto.agent.metrics.v1.rs");
                }
            }
        }
        pub mod metrics {
            pub mod v1 {
                include!("opencensus.proto.metrics.v1.rs");
            }
        }
        pub mod resource {
            pub mod v1 {
                include!("opencensus.proto.resource.v1.rs");
            }
        }
    }
}
