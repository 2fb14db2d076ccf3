//! 统一解析器 - 日志批次的单一入口
//!
//! 流程：识别协议族 -> 选择有序解析计划 -> 提取 `Program data:` 负载 ->
//! 依次尝试解析器 -> 返回第一个成功的事件。
//!
//! 整个过程是纯函数：不打日志、不修改全局状态，任何畸形输入都只会
//! 得到 `None`。

use crate::core::events::*;
use crate::logs::decoder_lut::{self, DecoderInfo};
use crate::logs::optimized_matcher::{detect_family, has_program_data, has_swap_instruction};
use crate::logs::utils::extract_program_data;

/// 一次分发的完整结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub family: Protocol,
    pub event: Option<DexEvent>,
    /// 实际调用的解析器次数
    pub attempts: usize,
}

impl DispatchOutcome {
    fn empty(family: Protocol) -> Self {
        Self { family, event: None, attempts: 0 }
    }
}

/// 日志分发器
///
/// 无内部状态，可在多个线程 / 任务间复制使用。
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

impl LogDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// 解析一个日志批次，最多返回一个事件
    #[inline]
    pub fn process<S: AsRef<str>>(&self, logs: &[S]) -> Option<DexEvent> {
        self.process_traced(logs).event
    }

    /// 与 [`process`](Self::process) 相同，额外返回协议族和尝试次数
    pub fn process_traced<S: AsRef<str>>(&self, logs: &[S]) -> DispatchOutcome {
        let family = detect_family(logs);

        match family {
            Protocol::JupiterSwap => {
                // 同族内不做 Swap / CreatePool 之间的回退
                let plan = if has_swap_instruction(logs) {
                    decoder_lut::JUPITER_SWAP_PLAN
                } else {
                    decoder_lut::JUPITER_CREATE_POOL_PLAN
                };
                Self::run(family, &[plan], logs)
            }
            Protocol::RaydiumV4 => {
                Self::run(family, &[decoder_lut::RAYDIUM_PLAN, decoder_lut::RAYDIUM_RAW_PLAN], logs)
            }
            Protocol::PumpFun => Self::run(family, &[decoder_lut::PUMPFUN_PLAN], logs),
            Protocol::Unclassified => {
                // 没有负载行的批次直接拒绝，不调用任何解析器
                if !has_program_data(logs) {
                    return DispatchOutcome::empty(family);
                }
                Self::run(family, &[decoder_lut::FALLBACK_PLAN], logs)
            }
        }
    }

    /// 解析并把事件交给 sink，sink 每个批次最多被调用一次
    ///
    /// 返回是否产生了事件。
    pub fn dispatch_to<S, K>(&self, logs: &[S], sink: &mut K) -> bool
    where
        S: AsRef<str>,
        K: EventSink + ?Sized,
    {
        match self.process(logs) {
            Some(event) => {
                sink.handle(event);
                true
            }
            None => false,
        }
    }

    /// 负载只解码一次，各阶段计划共用同一份字节
    fn run<S: AsRef<str>>(
        family: Protocol,
        stages: &[&[DecoderInfo]],
        logs: &[S],
    ) -> DispatchOutcome {
        let Some(data) = extract_program_data(logs) else {
            return DispatchOutcome::empty(family);
        };

        let mut outcome = DispatchOutcome::empty(family);
        for plan in stages {
            let (event, attempts) = decoder_lut::run_plan(plan, &data);
            outcome.attempts += attempts;
            if event.is_some() {
                outcome.event = event;
                break;
            }
        }
        outcome
    }
}

/// 事件接收端 trait - 实现此 trait 来处理解析出的事件
pub trait EventSink {
    fn handle(&mut self, event: DexEvent);
}

impl<F> EventSink for F
where
    F: FnMut(DexEvent),
{
    fn handle(&mut self, event: DexEvent) {
        self(event)
    }
}

/// 流式解析多个日志批次 - 每解析出一个事件就立即回调
pub fn parse_batches_streaming<B, S, F>(batches: &[B], mut callback: F)
where
    B: AsRef<[S]>,
    S: AsRef<str>,
    F: FnMut(DexEvent),
{
    let dispatcher = LogDispatcher::new();
    for batch in batches {
        dispatcher.dispatch_to(batch.as_ref(), &mut callback);
    }
}
