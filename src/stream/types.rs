use super::error::{StreamError, StreamResult};
use super::program_ids::get_program_ids_for_protocols;
use crate::core::events::Protocol;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "wss://api.mainnet-beta.solana.com/";
pub const DEFAULT_COMMITMENT: &str = "processed";

pub const ENV_ENDPOINT: &str = "SOLANA_WSS_ENDPOINT";
pub const ENV_COMMITMENT: &str = "SOLANA_COMMITMENT";

const COMMITMENTS: [&str; 3] = ["processed", "confirmed", "finalized"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// WebSocket 节点地址（ws:// 或 wss://）
    pub endpoint: String,
    /// processed / confirmed / finalized
    pub commitment: String,
    /// 订阅的协议，按顺序分配请求 id 1, 2, 3 ...
    pub protocols: Vec<Protocol>,
    /// 断线后重连等待时间（毫秒）
    pub reconnect_delay_ms: u64,
    /// 保活 ping 间隔（毫秒），0 表示不发送
    pub ping_interval_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
            protocols: vec![Protocol::JupiterSwap, Protocol::PumpFun, Protocol::RaydiumV4],
            reconnect_delay_ms: 1000,
            ping_interval_ms: 30000,
        }
    }
}

impl StreamConfig {
    pub fn mainnet() -> Self {
        Self::default()
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }

    /// 默认配置之上叠加环境变量
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(commitment) = lookup(ENV_COMMITMENT).filter(|v| !v.trim().is_empty()) {
            config.commitment = commitment.trim().to_string();
        }
        config
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn ping_interval(&self) -> Option<Duration> {
        (self.ping_interval_ms > 0).then(|| Duration::from_millis(self.ping_interval_ms))
    }

    pub fn validate(&self) -> StreamResult<()> {
        if self.endpoint.is_empty() {
            return Err(StreamError::Config("endpoint is empty".to_string()));
        }
        if !(self.endpoint.starts_with("ws://") || self.endpoint.starts_with("wss://")) {
            return Err(StreamError::Config(format!(
                "endpoint must start with ws:// or wss://, got {}",
                self.endpoint
            )));
        }
        if !COMMITMENTS.contains(&self.commitment.as_str()) {
            return Err(StreamError::Config(format!("unknown commitment {}", self.commitment)));
        }
        if get_program_ids_for_protocols(&self.protocols).is_empty() {
            return Err(StreamError::Config("no protocol to subscribe".to_string()));
        }
        Ok(())
    }
}

/// 解析单个协议名，不区分大小写
pub fn parse_protocol(name: &str) -> StreamResult<Protocol> {
    match name.trim().to_ascii_lowercase().as_str() {
        "jupiter" | "jup" => Ok(Protocol::JupiterSwap),
        "pumpfun" | "pump" => Ok(Protocol::PumpFun),
        "raydium" | "raydium_v4" | "ray" => Ok(Protocol::RaydiumV4),
        other => Err(StreamError::Config(format!("unknown protocol {}", other))),
    }
}

/// 解析逗号分隔的协议列表，例如 `jupiter,pumpfun,raydium`
pub fn parse_protocols(list: &str) -> StreamResult<Vec<Protocol>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(parse_protocol)
        .collect()
}

/// `logsSubscribe` 请求
pub fn logs_subscribe_request(id: u64, program_id: &str, commitment: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "logsSubscribe",
        "params": [
            { "mentions": [program_id] },
            { "commitment": commitment },
        ],
    })
}

/// 每个协议一条订阅请求，id 从 1 开始
pub fn build_subscribe_requests(config: &StreamConfig) -> StreamResult<Vec<(&'static str, String)>> {
    get_program_ids_for_protocols(&config.protocols)
        .into_iter()
        .zip(1u64..)
        .map(|(program_id, id)| {
            let request = logs_subscribe_request(id, program_id, &config.commitment);
            Ok((program_id, serde_json::to_string(&request)?))
        })
        .collect()
}

// ============================================================================
// logsNotification 消息结构
// ============================================================================

/// 节点推送的消息，只关心 `params.result.value.logs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsMessage {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub params: Option<NotificationParams>,
    /// 订阅确认时携带的请求 id
    #[serde(default)]
    pub id: Option<Value>,
    /// 订阅确认时携带的订阅号
    #[serde(default)]
    pub result: Option<Value>,
    /// 请求被拒绝时的 JSON-RPC 错误对象
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationParams {
    #[serde(default)]
    pub result: Option<NotificationResult>,
    #[serde(default)]
    pub subscription: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationResult {
    #[serde(default)]
    pub value: Option<LogsValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsValue {
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub logs: Option<Vec<String>>,
}

impl LogsMessage {
    fn value(&self) -> Option<&LogsValue> {
        self.params.as_ref()?.result.as_ref()?.value.as_ref()
    }

    /// 日志数组，任一层缺失都返回空切片
    pub fn logs(&self) -> &[String] {
        self.value().and_then(|value| value.logs.as_deref()).unwrap_or(&[])
    }

    pub fn signature(&self) -> Option<&str> {
        self.value()?.signature.as_deref()
    }

    /// JSON-RPC 错误回复：`{"error": {...}, "id": N}`
    pub fn rpc_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// 订阅确认：`{"result": <subscription id>, "id": N}`
    pub fn is_subscription_ack(&self) -> bool {
        self.method.is_none() && self.id.is_some() && self.result.is_some()
    }
}
