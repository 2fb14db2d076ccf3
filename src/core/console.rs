//! 终端输出 sink
//!
//! 每个事件打印一行标题和一行 JSON；带时间戳的事件额外打印 UTC 时间。

use crate::core::events::DexEvent;
use crate::core::unified_parser::EventSink;
use chrono::{DateTime, Utc};
use log::warn;
use std::io::{self, Stdout, Write};

/// 事件标题
pub fn banner(event: &DexEvent) -> &'static str {
    match event {
        DexEvent::JupiterSwap(_) => "=== JUPITER SWAP EVENT ===",
        DexEvent::JupiterCreatePool(_) => "=== JUPITER CREATE POOL EVENT ===",
        DexEvent::PumpFunCreate(_) => "=== PUMP CREATE EVENT ===",
        DexEvent::PumpFunTrade(_) => "=== PUMP TRADE EVENT ===",
        DexEvent::PumpFunComplete(_) => "=== PUMP COMPLETE EVENT ===",
        DexEvent::RaydiumAmmV4InitPool(_) => "=== RAYDIUM INIT POOL EVENT ===",
        DexEvent::RaydiumAmmV4Swap(_) => "=== RAYDIUM SWAP EVENT ===",
        DexEvent::RaydiumAmmV4Liquidity(_) => "=== RAYDIUM LIQUIDITY EVENT ===",
    }
}

/// 事件自带的链上时间（秒级 unix 时间戳）
pub fn event_time(event: &DexEvent) -> Option<DateTime<Utc>> {
    let secs = match event {
        DexEvent::JupiterSwap(e) | DexEvent::JupiterCreatePool(e) => e.timestamp,
        DexEvent::PumpFunTrade(e) => i64::try_from(e.timestamp).ok()?,
        DexEvent::PumpFunComplete(e) => i64::try_from(e.timestamp).ok()?,
        DexEvent::RaydiumAmmV4Swap(e) => e.timestamp,
        DexEvent::RaydiumAmmV4Liquidity(e) => e.timestamp,
        DexEvent::PumpFunCreate(_) | DexEvent::RaydiumAmmV4InitPool(_) => return None,
    };
    DateTime::from_timestamp(secs, 0)
}

pub struct ConsoleSink<W: Write = Stdout> {
    out: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &DexEvent) -> io::Result<()> {
        writeln!(self.out, "{}", banner(event))?;
        if let Some(time) = event_time(event) {
            writeln!(self.out, "time: {}", time.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        let json = serde_json::to_string(event).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn handle(&mut self, event: DexEvent) {
        if let Err(e) = self.write_event(&event) {
            warn!("failed to write {} event: {}", event.event_type(), e);
        }
    }
}
