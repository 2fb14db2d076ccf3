//! Solana DEX 日志事件解析核心模块
//!
//! 提供纯函数式的日志批次解析能力，支持：
//! - Jupiter、PumpFun、Raydium AMM V4
//! - 按协议族选择有序解析计划
//! - 统一的事件格式

pub mod console;         // 终端输出
pub mod events;          // 事件定义
pub mod unified_parser;  // 统一解析器 - 单一入口

pub use console::ConsoleSink;
pub use events::*;
pub use unified_parser::{parse_batches_streaming, DispatchOutcome, EventSink, LogDispatcher};
