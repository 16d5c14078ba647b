use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("cannot {operation} while component is {phase}")]
    InvalidLifecycle {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("chart engine failure: {0}")]
    Engine(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
