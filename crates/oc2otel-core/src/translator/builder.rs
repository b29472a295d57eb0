// Metric container assembly
//
// A batch yields one primary resource group for metrics that share the
// batch resource, followed by one group per metric that declares its own
// resource. Each group holds a single instrumentation library group with the
// empty library.

use crate::data::{InstrumentationLibraryMetrics, Metric, MetricData, Resource, ResourceMetrics};

/// Accumulates translated metrics into their resource groups.
#[derive(Debug, Default)]
pub struct MetricDataBuilder {
    primary: Option<ResourceMetrics>,
    distinct: Vec<ResourceMetrics>,
}

impl MetricDataBuilder {
    /// Start a batch.
    ///
    /// `primary_metric_count` is the number of input metrics without a
    /// resource of their own. The primary group exists when there is at least
    /// one such metric, with a single library group even if all of them end
    /// up skipped. A batch with no metrics at all still gets an empty primary
    /// group when it carries a node or resource.
    pub fn new(
        resource: Option<Resource>,
        input_metric_count: usize,
        primary_metric_count: usize,
    ) -> Self {
        let primary = if primary_metric_count > 0 {
            let mut group = ResourceMetrics::new(resource.unwrap_or_default());
            group
                .instrumentation_library_metrics
                .push(InstrumentationLibraryMetrics {
                    metrics: Vec::with_capacity(primary_metric_count),
                    ..Default::default()
                });
            Some(group)
        } else if input_metric_count == 0 {
            resource.map(ResourceMetrics::new)
        } else {
            None
        };

        Self {
            primary,
            distinct: Vec::new(),
        }
    }

    /// Add a metric that shares the batch resource.
    pub fn push(&mut self, metric: Metric) {
        let group = self
            .primary
            .get_or_insert_with(|| ResourceMetrics::new(Resource::default()));
        if group.instrumentation_library_metrics.is_empty() {
            group
                .instrumentation_library_metrics
                .push(InstrumentationLibraryMetrics::default());
        }
        if let Some(library) = group.instrumentation_library_metrics.last_mut() {
            library.metrics.push(metric);
        }
    }

    /// Add a metric under its own resource group.
    pub fn push_with_resource(&mut self, resource: Resource, metric: Metric) {
        let mut group = ResourceMetrics::new(resource);
        group
            .instrumentation_library_metrics
            .push(InstrumentationLibraryMetrics {
                metrics: vec![metric],
                ..Default::default()
            });
        self.distinct.push(group);
    }

    /// Primary group first, then per-metric groups in input order.
    pub fn finish(self) -> MetricData {
        let resource_metrics = self.primary.into_iter().chain(self.distinct).collect();
        MetricData { resource_metrics }
    }
}
