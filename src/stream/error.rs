use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// 传输层错误
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tungstenite::Error,
    },
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type StreamResult<T> = Result<T, StreamError>;
