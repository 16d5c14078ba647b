//! chart-bridge: embeds an imperative charting engine inside a declarative UI tree.
//!
//! The bridge owns one engine instance per mounted component, rebuilds it only
//! when its data or layout structurally change, and forwards a whitelisted view
//! of click/hover interactions to the host application.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{GraphBridge, GraphConfig, GraphProps};
pub use error::{BridgeError, BridgeResult};
