//! 实时日志订阅
//!
//! 通过 WebSocket `logsSubscribe` 订阅各协议程序的日志，交给
//! [`LogDispatcher`](crate::core::LogDispatcher) 解析。

pub mod client;
pub mod error;
pub mod program_ids;
pub mod types;

pub use client::{LogStreamClient, MessageOutcome};
pub use error::{StreamError, StreamResult};
pub use program_ids::*;
pub use types::{
    build_subscribe_requests, logs_subscribe_request, parse_protocol, parse_protocols, LogsMessage, StreamConfig,
};
