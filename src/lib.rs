// 核心模块 - 扁平化结构
pub mod core;
pub mod logs;   // 日志解析器

// WebSocket 模块 - 支持 logsSubscribe 订阅
pub mod stream;

// 重新导出主要API - 简化的单一入口解析器
pub use core::{
    // 事件类型
    DexEvent, EventType, Protocol,
    // 分发器
    DispatchOutcome, LogDispatcher,
    // 事件接收端
    ConsoleSink, EventSink, parse_batches_streaming,
};

pub use stream::{LogStreamClient, StreamConfig, StreamError, StreamResult};
