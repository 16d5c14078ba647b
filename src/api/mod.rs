mod change_gate;
mod event_subscriptions;
mod host;
mod json_contract;
mod lifecycle;
mod region;

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::spec::null_as_default;
use crate::core::{ChartSpec, Dimension, Layout, SeriesData};
use crate::engine::{InstanceHandle, PlotEngine};
use crate::error::{BridgeError, BridgeResult};
use crate::interaction::{EventWhitelist, PartialState};

pub use change_gate::{ChangeGate, SpecChanges};
pub use event_subscriptions::EventSubscriptions;
pub use host::ExternallyOwnedComponent;
pub use json_contract::{GRAPH_CONFIG_JSON_SCHEMA_V1, GraphConfigJsonContractV1};
pub use region::{ContainerStyle, ExternallyOwnedRegion};

/// Application callback receiving forwarded interaction state.
pub type ValueChangedCallback = Rc<dyn Fn(PartialState)>;

/// Which interaction streams to forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingFlags {
    pub click: bool,
    pub hover: bool,
}

impl BindingFlags {
    #[must_use]
    pub fn new(click: bool, hover: bool) -> Self {
        Self { click, hover }
    }
}

/// Declared options of a graph component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    pub id: String,
    pub bind_click: bool,
    pub bind_hover: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub data: SeriesData,
    #[serde(deserialize_with = "null_as_default")]
    pub layout: Layout,
    pub height: Dimension,
    pub width: Dimension,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            bind_click: false,
            bind_hover: false,
            data: SeriesData::new(),
            layout: Layout::new(),
            height: Dimension::css("600px"),
            width: Dimension::css("100%"),
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_spec(mut self, spec: ChartSpec) -> Self {
        self.data = spec.data;
        self.layout = spec.layout;
        self
    }

    #[must_use]
    pub fn with_bind_click(mut self, enabled: bool) -> Self {
        self.bind_click = enabled;
        self
    }

    #[must_use]
    pub fn with_bind_hover(mut self, enabled: bool) -> Self {
        self.bind_hover = enabled;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn spec(&self) -> ChartSpec {
        ChartSpec::new(self.data.clone(), self.layout.clone())
    }

    #[must_use]
    pub fn binding_flags(&self) -> BindingFlags {
        BindingFlags::new(self.bind_click, self.bind_hover)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if self.id.trim().is_empty() {
            return Err(BridgeError::InvalidConfig(
                "graph container id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Config plus the required `valueChanged` callback.
#[derive(Clone)]
pub struct GraphProps {
    pub config: GraphConfig,
    pub value_changed: ValueChangedCallback,
}

impl GraphProps {
    #[must_use]
    pub fn new(config: GraphConfig, value_changed: impl Fn(PartialState) + 'static) -> Self {
        Self {
            config,
            value_changed: Rc::new(value_changed),
        }
    }
}

impl fmt::Debug for GraphProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphProps")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Constructed, not yet attached.
    Pending,
    Attached,
    /// Terminal; the component is not reused.
    Detached,
}

impl LifecyclePhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Attached => "attached",
            Self::Detached => "detached",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebuildReason {
    Data,
    Layout,
    DataAndLayout,
    /// A previous rebuild destroyed the instance but failed to recreate it.
    MissingInstance,
}

/// Result of one receive-update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOutcome {
    Unchanged,
    Rebuilt(RebuildReason),
}

struct AttachedGraph {
    region: ExternallyOwnedRegion,
    spec: ChartSpec,
    /// `None` between a successful `destroy` and a successful `create`.
    instance: Option<InstanceHandle>,
}

/// Owns one engine instance for a mounted graph component.
///
/// The only mutation path into the instance is `receive_update`; the host is
/// told never to re-render the region itself.
pub struct GraphBridge<E: PlotEngine> {
    engine: E,
    whitelist: EventWhitelist,
    phase: LifecyclePhase,
    attached: Option<AttachedGraph>,
    subscriptions: EventSubscriptions,
}

impl<E: PlotEngine> GraphBridge<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self::with_event_whitelist(engine, EventWhitelist::default())
    }

    #[must_use]
    pub fn with_event_whitelist(engine: E, whitelist: EventWhitelist) -> Self {
        Self {
            engine,
            whitelist,
            phase: LifecyclePhase::Pending,
            attached: None,
            subscriptions: EventSubscriptions::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn event_whitelist(&self) -> &EventWhitelist {
        &self.whitelist
    }

    /// Spec rendered by the live instance, if one exists.
    #[must_use]
    pub fn current_spec(&self) -> Option<&ChartSpec> {
        self.attached
            .as_ref()
            .filter(|graph| graph.instance.is_some())
            .map(|graph| &graph.spec)
    }

    #[must_use]
    pub fn instance(&self) -> Option<InstanceHandle> {
        self.attached.as_ref().and_then(|graph| graph.instance)
    }

    #[must_use]
    pub fn region(&self) -> Option<&ExternallyOwnedRegion> {
        self.attached.as_ref().map(|graph| &graph.region)
    }

    #[must_use]
    pub fn subscriptions(&self) -> &EventSubscriptions {
        &self.subscriptions
    }

    /// Static re-render policy: the region is owned by the engine once attached.
    #[must_use]
    pub fn should_rerender(&self) -> bool {
        false
    }

    fn lifecycle_error(&self, operation: &'static str) -> BridgeError {
        BridgeError::InvalidLifecycle {
            operation,
            phase: self.phase.as_str(),
        }
    }
}
