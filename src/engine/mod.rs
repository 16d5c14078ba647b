mod recording_engine;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BridgeResult;
use crate::interaction::{InteractionKind, RawInteractionEvent};

pub use recording_engine::{RecordedCall, RecordingEngine};

/// Handler invoked synchronously for every emitted interaction event.
pub type InteractionHandler = Box<dyn FnMut(&RawInteractionEvent)>;

/// Opaque reference to a live chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceHandle(u64);

impl InstanceHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Opaque reference to an active subscription; only used to release it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Imperative charting capability the bridge drives.
///
/// Instances live on a container identified by a stable id. Listeners bind to
/// the container rather than the instance, so they survive a rebuild.
pub trait PlotEngine {
    fn create(
        &mut self,
        container_id: &str,
        data: &[Value],
        layout: &Map<String, Value>,
    ) -> BridgeResult<InstanceHandle>;

    /// Tears down the instance on `container_id` without removing the node.
    fn destroy(&mut self, container_id: &str) -> BridgeResult<()>;

    fn on(
        &mut self,
        container_id: &str,
        kind: InteractionKind,
        handler: InteractionHandler,
    ) -> BridgeResult<ListenerHandle>;

    /// Detaches every listener registered under `handle`.
    fn off(&mut self, handle: ListenerHandle) -> BridgeResult<()>;
}
