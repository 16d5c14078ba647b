use serde::{Deserialize, Serialize};

use crate::core::Dimension;

use super::GraphConfig;

/// Inline style applied to the container element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub width: Dimension,
    pub height: Dimension,
}

impl ContainerStyle {
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "width: {}; height: {};",
            self.width.to_css(),
            self.height.to_css()
        )
    }
}

/// Container element whose contents belong to the chart engine.
///
/// The host renders it once and treats it as opaque: no diffing, no
/// re-render. Its contents change only through the bridge's lifecycle hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternallyOwnedRegion {
    container_id: String,
    style: ContainerStyle,
}

impl ExternallyOwnedRegion {
    #[must_use]
    pub fn new(container_id: impl Into<String>, style: ContainerStyle) -> Self {
        Self {
            container_id: container_id.into(),
            style,
        }
    }

    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(
            config.id.clone(),
            ContainerStyle {
                width: config.width.clone(),
                height: config.height.clone(),
            },
        )
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }

    /// Always true; reconcilers must skip this subtree.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        true
    }

    /// Markup for the empty container the engine renders into.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            r#"<div id="{}" style="{}"></div>"#,
            escape_attribute(&self.container_id),
            escape_attribute(&self.style.to_css())
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
