//! WebSocket 日志订阅客户端
//!
//! 连接 -> 发送 `logsSubscribe` -> 读取通知并分发 -> 断线后等待重连。

use super::error::{StreamError, StreamResult};
use super::types::{build_subscribe_requests, LogsMessage, StreamConfig};
use crate::core::events::EventType;
use crate::core::unified_parser::{EventSink, LogDispatcher};
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use std::future::Future;
use tokio::time::{self, Instant, Interval};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// 单条文本消息的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// 解析出事件并交给了 sink
    Event(EventType),
    /// 有日志但没有匹配的事件
    NoEvent,
    /// 通知中没有日志
    Empty,
    /// 订阅确认
    Confirmation,
    /// 节点返回的 JSON-RPC 错误（例如订阅被拒绝）
    RpcError,
    /// 不是合法 JSON
    Invalid,
}

pub struct LogStreamClient {
    config: StreamConfig,
    dispatcher: LogDispatcher,
}

impl LogStreamClient {
    pub fn new(config: StreamConfig) -> StreamResult<Self> {
        config.validate()?;
        Ok(Self { config, dispatcher: LogDispatcher::new() })
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// 处理一条文本帧，sink 最多被调用一次
    pub fn handle_text<K: EventSink + ?Sized>(&self, text: &str, sink: &mut K) -> MessageOutcome {
        let message: LogsMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                warn!("Skipping invalid message: {}", e);
                return MessageOutcome::Invalid;
            }
        };

        if let Some(error) = message.rpc_error() {
            warn!("Node returned error for request {:?}: {}", message.id, error);
            return MessageOutcome::RpcError;
        }

        if message.is_subscription_ack() {
            debug!(
                "Subscription confirmed: request={:?} subscription={:?}",
                message.id, message.result
            );
            return MessageOutcome::Confirmation;
        }

        let logs = message.logs();
        if logs.is_empty() {
            return MessageOutcome::Empty;
        }

        match self.dispatcher.process(logs) {
            Some(event) => {
                let event_type = event.event_type();
                debug!("{} decoded from {:?}", event_type, message.signature());
                sink.handle(event);
                MessageOutcome::Event(event_type)
            }
            None => MessageOutcome::NoEvent,
        }
    }

    /// 一直运行，断线自动重连
    pub async fn run<K: EventSink + ?Sized>(&self, sink: &mut K) -> StreamResult<()> {
        self.run_until(sink, std::future::pending::<()>()).await
    }

    /// 运行直到 `shutdown` 完成
    pub async fn run_until<K, F>(&self, sink: &mut K, shutdown: F) -> StreamResult<()>
    where
        K: EventSink + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping log stream");
                    return Ok(());
                }
                result = self.run_connection(sink) => match result {
                    Ok(()) => warn!("Connection to {} closed", self.config.endpoint),
                    Err(e) => warn!("Connection lost: {}", e),
                },
            }

            info!("Reconnecting in {:?}", self.config.reconnect_delay());
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping log stream");
                    return Ok(());
                }
                _ = time::sleep(self.config.reconnect_delay()) => {}
            }
        }
    }

    /// 单次连接的完整生命周期，正常关闭返回 `Ok`
    async fn run_connection<K: EventSink + ?Sized>(&self, sink: &mut K) -> StreamResult<()> {
        let endpoint = self.config.endpoint.as_str();
        let (ws, _) = connect_async(endpoint)
            .await
            .map_err(|source| StreamError::Connect { endpoint: endpoint.to_string(), source })?;
        info!("Connected to {}", endpoint);

        let (mut write, mut read) = ws.split();

        for (program_id, request) in build_subscribe_requests(&self.config)? {
            write.send(Message::Text(request)).await?;
            info!("Subscribed to logs mentioning {} ({})", program_id, self.config.commitment);
        }

        let mut keepalive = self
            .config
            .ping_interval()
            .map(|period| time::interval_at(Instant::now() + period, period));

        loop {
            tokio::select! {
                frame = read.next() => match frame {
                    None => return Ok(()),
                    Some(Err(e)) => return Err(e.into()),
                    Some(Ok(Message::Text(text))) => {
                        self.handle_text(&text, sink);
                    }
                    Some(Ok(Message::Close(frame))) => {
                        info!("Server closed connection: {:?}", frame);
                        return Ok(());
                    }
                    // Ping 由 tungstenite 自动回复 Pong
                    Some(Ok(_)) => {}
                },
                _ = next_tick(&mut keepalive) => {
                    write.send(Message::Ping(Vec::new())).await?;
                }
            }
        }
    }
}

async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
