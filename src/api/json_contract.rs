use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};
use crate::interaction::{InteractionOutputs, PartialState};

use super::GraphConfig;

pub const GRAPH_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GraphConfig,
}

impl GraphConfig {
    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            BridgeError::InvalidData(format!("failed to parse graph config json: {e}"))
        })?;
        let config = if value.get("schema_version").is_some() {
            let payload: GraphConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    BridgeError::InvalidData(format!(
                        "failed to parse graph config contract: {e}"
                    ))
                })?;
            if payload.schema_version != GRAPH_CONFIG_JSON_SCHEMA_V1 {
                return Err(BridgeError::InvalidData(format!(
                    "unsupported graph config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                BridgeError::InvalidData(format!("failed to parse graph config: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_contract_v1_pretty(&self) -> BridgeResult<String> {
        let payload = GraphConfigJsonContractV1 {
            schema_version: GRAPH_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BridgeError::InvalidData(format!("failed to serialize graph config contract v1: {e}"))
        })
    }
}

impl PartialState {
    pub fn to_json(&self) -> BridgeResult<String> {
        serde_json::to_string(self).map_err(|e| {
            BridgeError::InvalidData(format!("failed to serialize partial state: {e}"))
        })
    }
}

impl InteractionOutputs {
    pub fn to_json_pretty(&self) -> BridgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BridgeError::InvalidData(format!("failed to serialize interaction outputs: {e}"))
        })
    }
}
