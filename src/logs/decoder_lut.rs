//! Decoder Lookup Table - compile-time constant arrays
//!
//! Every layout decoder is registered once here with its protocol and a
//! human-readable name. Each protocol family owns an ordered decode plan;
//! the order puts the most frequent event shapes first.

use crate::core::events::{DexEvent, Protocol};
use super::{jupiter, pumpfun, raydium_amm};

/// Parser function type - takes decoded payload bytes, returns parsed event
pub type ParserFn = fn(&[u8]) -> Option<DexEvent>;

/// Decoder entry for plan lookup
#[derive(Debug, Clone, Copy)]
pub struct DecoderInfo {
    pub parser: ParserFn,
    pub protocol: Protocol,
    pub name: &'static str, // Human-readable name for debugging
}

impl DecoderInfo {
    #[inline(always)]
    pub fn decode(&self, data: &[u8]) -> Option<DexEvent> {
        (self.parser)(data)
    }
}

pub const JUPITER_SWAP: DecoderInfo = DecoderInfo {
    parser: jupiter::parse_swap_from_data,
    protocol: Protocol::JupiterSwap,
    name: "Jupiter Swap",
};

pub const JUPITER_CREATE_POOL: DecoderInfo = DecoderInfo {
    parser: jupiter::parse_create_pool_from_data,
    protocol: Protocol::JupiterSwap,
    name: "Jupiter CreatePool",
};

pub const PUMPFUN_CREATE: DecoderInfo = DecoderInfo {
    parser: pumpfun::parse_create_from_data,
    protocol: Protocol::PumpFun,
    name: "PumpFun Create",
};

pub const PUMPFUN_TRADE: DecoderInfo = DecoderInfo {
    parser: pumpfun::parse_trade_from_data,
    protocol: Protocol::PumpFun,
    name: "PumpFun Trade",
};

pub const PUMPFUN_COMPLETE: DecoderInfo = DecoderInfo {
    parser: pumpfun::parse_complete_from_data,
    protocol: Protocol::PumpFun,
    name: "PumpFun Complete",
};

pub const RAYDIUM_SWAP: DecoderInfo = DecoderInfo {
    parser: raydium_amm::parse_swap_from_data,
    protocol: Protocol::RaydiumV4,
    name: "Raydium AMM V4 Swap",
};

pub const RAYDIUM_LIQUIDITY: DecoderInfo = DecoderInfo {
    parser: raydium_amm::parse_liquidity_from_data,
    protocol: Protocol::RaydiumV4,
    name: "Raydium AMM V4 Liquidity",
};

pub const RAYDIUM_INIT_POOL: DecoderInfo = DecoderInfo {
    parser: raydium_amm::parse_init_pool_from_data,
    protocol: Protocol::RaydiumV4,
    name: "Raydium AMM V4 InitPool",
};

/// InitPool -> Swap -> Liquidity in one decoder
pub const RAYDIUM_ANY: DecoderInfo = DecoderInfo {
    parser: raydium_amm::parse_any_from_data,
    protocol: Protocol::RaydiumV4,
    name: "Raydium AMM V4 Any",
};

// ============================================================================
// Decode plans
// ============================================================================

/// Jupiter batch with a swap instruction marker
pub static JUPITER_SWAP_PLAN: &[DecoderInfo] = &[JUPITER_SWAP];

/// Jupiter batch without a swap instruction marker
pub static JUPITER_CREATE_POOL_PLAN: &[DecoderInfo] = &[JUPITER_CREATE_POOL];

pub static RAYDIUM_PLAN: &[DecoderInfo] = &[RAYDIUM_SWAP, RAYDIUM_LIQUIDITY, RAYDIUM_INIT_POOL];

/// Last Raydium attempt after every entry of [`RAYDIUM_PLAN`] failed
pub static RAYDIUM_RAW_PLAN: &[DecoderInfo] = &[RAYDIUM_ANY];

pub static PUMPFUN_PLAN: &[DecoderInfo] = &[PUMPFUN_CREATE, PUMPFUN_TRADE, PUMPFUN_COMPLETE];

/// Exhaustive scan for batches without any family marker
pub static FALLBACK_PLAN: &[DecoderInfo] = &[
    JUPITER_SWAP,
    JUPITER_CREATE_POOL,
    PUMPFUN_CREATE,
    PUMPFUN_TRADE,
    PUMPFUN_COMPLETE,
    RAYDIUM_SWAP,
    RAYDIUM_LIQUIDITY,
    RAYDIUM_INIT_POOL,
];

/// Run a plan in order, returning the first decoded event and the number of
/// decoders invoked.
#[inline]
pub fn run_plan(plan: &[DecoderInfo], data: &[u8]) -> (Option<DexEvent>, usize) {
    let mut attempts = 0;
    for info in plan {
        attempts += 1;
        if let Some(event) = info.decode(data) {
            return (Some(event), attempts);
        }
    }
    (None, attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_plan_covers_every_decoder_once() {
        let names: Vec<&str> = FALLBACK_PLAN.iter().map(|info| info.name).collect();
        assert_eq!(names.len(), 8);
        for plan in [JUPITER_SWAP_PLAN, JUPITER_CREATE_POOL_PLAN, RAYDIUM_PLAN, PUMPFUN_PLAN] {
            for info in plan {
                assert_eq!(names.iter().filter(|name| **name == info.name).count(), 1);
            }
        }
    }

    #[test]
    fn test_plan_protocols() {
        assert!(RAYDIUM_PLAN.iter().all(|info| info.protocol == Protocol::RaydiumV4));
        assert!(PUMPFUN_PLAN.iter().all(|info| info.protocol == Protocol::PumpFun));
        assert_eq!(FALLBACK_PLAN[0].name, "Jupiter Swap");
        assert_eq!(FALLBACK_PLAN[7].name, "Raydium AMM V4 InitPool");
    }

    #[test]
    fn test_run_plan_counts_attempts() {
        let (event, attempts) = run_plan(FALLBACK_PLAN, &[0u8; 4]);
        assert!(event.is_none());
        assert_eq!(attempts, 8);

        let bytes = borsh::to_vec(&raydium_amm::sample_init_pool_layout()).unwrap();
        let (event, attempts) = run_plan(RAYDIUM_PLAN, &bytes);
        // 424 字节的 InitPool 负载同样满足 Swap 布局的最小长度
        assert!(matches!(event, Some(DexEvent::RaydiumAmmV4Swap(_))));
        assert_eq!(attempts, 1);
    }
}
