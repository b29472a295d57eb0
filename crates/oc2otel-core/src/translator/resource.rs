// Resource mapping
//
// OpenCensus resource labels become internal resource attributes verbatim.
// The Node only signals presence; none of its fields become attributes.

use oc2otel_proto::opencensus::proto::{
    agent::common::v1::Node, resource::v1::Resource as OcResource,
};

use crate::data::{Resource, StringMap};

/// Map the batch-level Node and Resource to an internal resource.
///
/// Returns `None` when both are absent, which tells the builder not to open
/// a resource group for an otherwise empty batch. A present Node or Resource
/// yields `Some`, even when it carries no labels.
pub fn map_resource(node: Option<&Node>, resource: Option<&OcResource>) -> Option<Resource> {
    if node.is_none() && resource.is_none() {
        return None;
    }

    let attributes = resource.map(resource_attributes).unwrap_or_default();
    Some(Resource::new(attributes))
}

/// Copy resource labels into an attribute map. Keys and values are not
/// normalized or renamed. The resource `type` is not carried over.
pub fn resource_attributes(resource: &OcResource) -> StringMap {
    resource.labels.clone()
}
