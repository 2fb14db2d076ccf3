//! Log dispatch benchmarks
//!
//! Measures a full batch through classification, payload extraction and the
//! ordered decode plan of each protocol family.
//!
//! Run with: cargo bench --bench dispatch

use base64::{engine::general_purpose, Engine as _};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use solana_log_decoder::logs::jupiter::JupiterPoolLayout;
use solana_log_decoder::logs::optimized_matcher::{detect_family, program_id_strings::*};
use solana_log_decoder::logs::pumpfun::PumpFunTradeLayout;
use solana_log_decoder::logs::raydium_amm::{RaydiumLiquidityLayout, RaydiumSwapLayout};
use solana_log_decoder::LogDispatcher;
use std::hint::black_box;

fn batch(program_id: &str, extra: &[&str], payload_len: usize) -> Vec<String> {
    let mut logs = vec![format!("Program {} invoke [1]", program_id)];
    logs.extend(extra.iter().map(|line| line.to_string()));
    logs.push(format!(
        "Program data: {}",
        general_purpose::STANDARD.encode(vec![1u8; payload_len])
    ));
    logs.push(format!("Program {} success", program_id));
    logs
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = LogDispatcher::new();
    let mut group = c.benchmark_group("Dispatch");

    let cases = [
        ("jupiter_swap", batch(JUPITER_ID, &[SWAP_INSTRUCTION], JupiterPoolLayout::LEN)),
        ("raydium_swap", batch(RAYDIUM_AMM_V4_ID, &[], RaydiumSwapLayout::LEN)),
        ("raydium_exhausted", batch(RAYDIUM_AMM_V4_ID, &[], RaydiumLiquidityLayout::LEN - 1)),
        ("pumpfun_trade", batch(PUMPFUN_ID, &[], PumpFunTradeLayout::LEN)),
        (
            "unclassified_no_payload",
            vec![
                "Program 11111111111111111111111111111111 invoke [1]".to_string(),
                "Program 11111111111111111111111111111111 success".to_string(),
            ],
        ),
    ];

    for (name, logs) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("process", name), logs, |b, logs| {
            b.iter(|| black_box(dispatcher.process(black_box(logs))))
        });
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut logs: Vec<String> = (0..40)
        .map(|i| format!("Program log: instruction step {}", i))
        .collect();
    logs.push(format!("Program {} invoke [1]", PUMPFUN_ID));

    c.bench_function("detect_family_worst_case", |b| {
        b.iter(|| black_box(detect_family(black_box(&logs))))
    });
}

criterion_group!(benches, bench_dispatch, bench_classification);
criterion_main!(benches);
