use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{BridgeError, BridgeResult};

/// Ordered sequence of series descriptors.
pub type SeriesData = Vec<Value>;

/// Display-option mapping.
pub type Layout = Map<String, Value>;

/// The `(data, layout)` pair describing what a chart instance displays.
///
/// Absent or `null` fields deserialize to the empty sequence / empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: SeriesData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,
}

impl ChartSpec {
    #[must_use]
    pub fn new(data: SeriesData, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Builds a spec from loosely typed JSON values.
    ///
    /// `data` must be an array and `layout` an object; `null` stands for empty.
    pub fn from_values(data: Value, layout: Value) -> BridgeResult<Self> {
        let data = match data {
            Value::Null => SeriesData::new(),
            Value::Array(series) => series,
            other => {
                return Err(BridgeError::InvalidData(format!(
                    "chart data must be an array, got {}",
                    json_kind(&other)
                )));
            }
        };
        let layout = match layout {
            Value::Null => Layout::new(),
            Value::Object(options) => options,
            other => {
                return Err(BridgeError::InvalidData(format!(
                    "chart layout must be an object, got {}",
                    json_kind(&other)
                )));
            }
        };
        Ok(Self { data, layout })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.layout.is_empty()
    }
}

/// Container extent: either pixels or any CSS length string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(f64),
    Css(String),
}

impl Dimension {
    #[must_use]
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// CSS value for the container style. Bare numbers are pixel lengths.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Pixels(px) => format!("{px}px"),
            Self::Css(value) => value.clone(),
        }
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Pixels(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(f64::from(px))
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
