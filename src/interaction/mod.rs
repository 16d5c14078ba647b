mod event;

use serde::{Deserialize, Serialize};

pub use event::{
    DEFAULT_EVENT_FIELDS, EventWhitelist, FilteredEvent, FilteredPoint, RawInteractionEvent,
    filter_event,
};

/// Interaction streams the bridge can forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    Click,
    Hover,
}

impl InteractionKind {
    /// Event name emitted by the engine on the container node.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Click => "plotly_click",
            Self::Hover => "plotly_hover",
        }
    }

    /// Wraps a filtered event into the partial state forwarded for this stream.
    #[must_use]
    pub fn into_partial_state(self, event: FilteredEvent) -> PartialState {
        match self {
            Self::Click => PartialState::ClickData(event),
            Self::Hover => PartialState::HoverData(event),
        }
    }
}

/// Partial application state forwarded on each interaction.
///
/// Serializes as `{"clickData": ...}` or `{"hoverData": ...}`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartialState {
    #[serde(rename = "clickData")]
    ClickData(FilteredEvent),
    #[serde(rename = "hoverData")]
    HoverData(FilteredEvent),
}

impl PartialState {
    #[must_use]
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::ClickData(_) => InteractionKind::Click,
            Self::HoverData(_) => InteractionKind::Hover,
        }
    }

    #[must_use]
    pub fn event(&self) -> &FilteredEvent {
        match self {
            Self::ClickData(event) | Self::HoverData(event) => event,
        }
    }
}

/// Latest forwarded interaction payloads, as seen by the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOutputs {
    pub click_data: Option<FilteredEvent>,
    pub hover_data: Option<FilteredEvent>,
}

impl InteractionOutputs {
    /// Merges a partial state, replacing only the field it carries.
    pub fn apply(&mut self, state: PartialState) {
        match state {
            PartialState::ClickData(event) => self.click_data = Some(event),
            PartialState::HoverData(event) => self.hover_data = Some(event),
        }
    }
}
