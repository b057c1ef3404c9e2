use thiserror::Error;

/// Errors raised while starting the application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] serde_wasm_bindgen::Error),
    #[error("cannot find element with id {0}")]
    MountpointNotFound(String),
    #[error("config is already initialized")]
    ConfigAlreadySet,
}
