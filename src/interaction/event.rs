use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::spec::null_as_default;
use crate::error::{BridgeError, BridgeResult};

/// Point fields exposed to the application by default.
pub const DEFAULT_EVENT_FIELDS: [&str; 7] =
    ["x", "y", "z", "labels", "values", "pointNumber", "curveNumber"];

/// Interaction payload as emitted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInteractionEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<Map<String, Value>>,
}

impl RawInteractionEvent {
    #[must_use]
    pub fn new(points: Vec<Map<String, Value>>) -> Self {
        Self { points }
    }

    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            BridgeError::InvalidData(format!("failed to parse interaction event: {e}"))
        })
    }

    pub fn from_value(value: Value) -> BridgeResult<Self> {
        serde_json::from_value(value).map_err(|e| {
            BridgeError::InvalidData(format!("failed to parse interaction event: {e}"))
        })
    }
}

impl From<&FilteredEvent> for RawInteractionEvent {
    /// Absent fields are omitted, so re-filtering yields the same event.
    fn from(event: &FilteredEvent) -> Self {
        let points = event
            .points
            .iter()
            .map(|point| {
                point
                    .fields
                    .iter()
                    .filter_map(|(key, value)| value.clone().map(|value| (key.clone(), value)))
                    .collect()
            })
            .collect();
        Self { points }
    }
}

/// A point restricted to whitelisted fields, in whitelist order.
///
/// Fields missing on the source point are kept with an absent (`None`) value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilteredPoint {
    fields: IndexMap<String, Option<Value>>,
}

impl FilteredPoint {
    /// Value of `field`, or `None` when absent or not whitelisted.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Sanitized interaction payload, 1:1 with its raw event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredEvent {
    pub points: Vec<FilteredPoint>,
}

impl FilteredEvent {
    pub fn to_json_pretty(&self) -> BridgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BridgeError::InvalidData(format!("failed to serialize filtered event: {e}"))
        })
    }
}

/// Fixed set of point fields forwarded to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWhitelist {
    fields: IndexSet<String>,
}

impl Default for EventWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_FIELDS)
    }
}

impl EventWhitelist {
    /// Builds a whitelist; duplicates keep their first position.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copies whitelisted fields of every point; everything else is dropped.
    #[must_use]
    pub fn filter(&self, raw: &RawInteractionEvent) -> FilteredEvent {
        FilteredEvent {
            points: raw
                .points
                .iter()
                .map(|point| self.filter_point(point))
                .collect(),
        }
    }

    fn filter_point(&self, point: &Map<String, Value>) -> FilteredPoint {
        FilteredPoint {
            fields: self
                .fields
                .iter()
                .map(|field| (field.clone(), point.get(field).cloned()))
                .collect(),
        }
    }
}

/// Filters with the default whitelist.
#[must_use]
pub fn filter_event(raw: &RawInteractionEvent) -> FilteredEvent {
    EventWhitelist::default().filter(raw)
}
