use tracing::{debug, trace, warn};

use crate::core::ChartSpec;
use crate::engine::PlotEngine;
use crate::error::{BridgeError, BridgeResult};

use super::{
    AttachedGraph, ChangeGate, ExternallyOwnedRegion, GraphBridge, GraphProps, LifecyclePhase,
    RebuildReason, UpdateOutcome,
};

impl<E: PlotEngine> GraphBridge<E> {
    /// Creates the chart instance in the container and binds the enabled
    /// interaction streams.
    ///
    /// Engine failures propagate unchanged. A binding failure leaves the
    /// bridge attached with no listener handles, so a following `detach`
    /// stays well defined.
    pub fn attach(&mut self, props: GraphProps) -> BridgeResult<()> {
        if self.phase != LifecyclePhase::Pending {
            return Err(self.lifecycle_error("attach"));
        }
        props.config.validate()?;

        let region = ExternallyOwnedRegion::from_config(&props.config);
        let spec = props.config.spec();
        let instance = self
            .engine
            .create(region.container_id(), &spec.data, &spec.layout)?;
        debug!(
            container_id = region.container_id(),
            instance = instance.id(),
            series = spec.data.len(),
            "attached chart instance"
        );

        let container_id = region.container_id().to_owned();
        self.attached = Some(AttachedGraph {
            region,
            spec,
            instance: Some(instance),
        });
        self.phase = LifecyclePhase::Attached;

        self.subscriptions.bind(
            &mut self.engine,
            &container_id,
            props.config.binding_flags(),
            &self.whitelist,
            &props.value_changed,
        )
    }

    /// Rebuilds the instance when `next` differs structurally from the
    /// rendered spec.
    ///
    /// At most one rebuild happens per call and it always renders both
    /// `next.data` and `next.layout`. Listeners stay bound to the container.
    /// If a rebuild destroyed the instance but `create` failed, the next
    /// update recreates it whatever `next` is.
    pub fn receive_update(&mut self, next: ChartSpec) -> BridgeResult<UpdateOutcome> {
        let graph = match (self.phase, self.attached.as_mut()) {
            (LifecyclePhase::Attached, Some(graph)) => graph,
            (phase, _) => {
                return Err(BridgeError::InvalidLifecycle {
                    operation: "receive update",
                    phase: phase.as_str(),
                });
            }
        };

        let changed = ChangeGate::compare(&graph.spec, &next).rebuild_reason();
        let reason = match (graph.instance, changed) {
            (None, changed) => changed.unwrap_or(RebuildReason::MissingInstance),
            (Some(_), Some(changed)) => changed,
            (Some(_), None) => {
                trace!(container_id = graph.region.container_id(), "spec unchanged");
                return Ok(UpdateOutcome::Unchanged);
            }
        };

        let container_id = graph.region.container_id();
        if let Some(previous) = graph.instance {
            self.engine.destroy(container_id)?;
            graph.instance = None;
            trace!(
                container_id,
                instance = previous.id(),
                "destroyed chart instance"
            );
        }
        let instance = self.engine.create(container_id, &next.data, &next.layout)?;
        debug!(
            container_id,
            ?reason,
            instance = instance.id(),
            "rebuilt chart instance"
        );
        graph.instance = Some(instance);
        graph.spec = next;
        Ok(UpdateOutcome::Rebuilt(reason))
    }

    /// Releases every listener handle and ends the lifecycle.
    ///
    /// The container node itself is left for the host to remove. Detaching
    /// again is a no-op.
    pub fn detach(&mut self) -> BridgeResult<()> {
        match self.phase {
            LifecyclePhase::Detached => Ok(()),
            LifecyclePhase::Pending => {
                self.phase = LifecyclePhase::Detached;
                Ok(())
            }
            LifecyclePhase::Attached => {
                self.phase = LifecyclePhase::Detached;
                let released = self.subscriptions.unbind(&mut self.engine);
                if let Some(graph) = self.attached.take() {
                    debug!(
                        container_id = graph.region.container_id(),
                        instance = ?graph.instance,
                        "detached chart bridge"
                    );
                }
                released
            }
        }
    }
}

impl<E: PlotEngine> Drop for GraphBridge<E> {
    fn drop(&mut self) {
        if self.phase != LifecyclePhase::Attached {
            return;
        }
        if let Err(err) = self.detach() {
            warn!(error = %err, "listener release failed while dropping attached bridge");
        }
    }
}
