//! Jupiter 日志解析器
//!
//! CreatePool 和 Swap 事件共用同一字节布局（8 字节 discriminator + 19 个字段），
//! 解析器本身不区分二者，语义标签由调用方根据指令标记决定。

use super::utils::*;
use crate::core::events::*;
use borsh::{BorshDeserialize, BorshSerialize};

/// Jupiter 池事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct JupiterPoolLayout {
    /// 不检查，直接跳过
    pub discriminator: [u8; 8],
    pub timestamp: i64,
    pub index: u16,
    pub creator: [u8; 32],
    pub base_mint: [u8; 32],
    pub quote_mint: [u8; 32],
    pub base_mint_decimals: u8,
    pub quote_mint_decimals: u8,
    pub base_amount_in: u64,
    pub quote_amount_in: u64,
    pub pool_base_amount: u64,
    pub pool_quote_amount: u64,
    pub minimum_liquidity: u64,
    pub initial_liquidity: u64,
    pub lp_token_amount_out: u64,
    pub pool_bump: u8,
    pub pool: [u8; 32],
    pub lp_mint: [u8; 32],
    pub user_base_token_account: [u8; 32],
    pub user_quote_token_account: [u8; 32],
}

impl JupiterPoolLayout {
    pub const LEN: usize = 8 + 8 + 2 + 32 * 3 + 2 + 8 * 7 + 1 + 32 * 4;

    fn into_event(self) -> JupiterPoolEvent {
        JupiterPoolEvent {
            timestamp: self.timestamp,
            index: self.index,
            creator: read_address(&self.creator),
            base_mint: read_address(&self.base_mint),
            quote_mint: read_address(&self.quote_mint),
            base_mint_decimals: self.base_mint_decimals,
            quote_mint_decimals: self.quote_mint_decimals,
            base_amount_in: self.base_amount_in,
            quote_amount_in: self.quote_amount_in,
            pool_base_amount: self.pool_base_amount,
            pool_quote_amount: self.pool_quote_amount,
            minimum_liquidity: self.minimum_liquidity,
            initial_liquidity: self.initial_liquidity,
            lp_token_amount_out: self.lp_token_amount_out,
            pool_bump: self.pool_bump,
            pool: read_address(&self.pool),
            lp_mint: read_address(&self.lp_mint),
            user_base_token_account: read_address(&self.user_base_token_account),
            user_quote_token_account: read_address(&self.user_quote_token_account),
        }
    }
}

/// 解析池事件字段集（不带语义标签）
#[inline]
pub fn parse_pool_fields(data: &[u8]) -> Option<JupiterPoolEvent> {
    read_layout::<JupiterPoolLayout>(data).map(JupiterPoolLayout::into_event)
}

/// Parse Jupiter CreatePool event from pre-decoded data
#[inline]
pub fn parse_create_pool_from_data(data: &[u8]) -> Option<DexEvent> {
    parse_pool_fields(data).map(DexEvent::JupiterCreatePool)
}

/// Parse Jupiter Swap event from pre-decoded data
#[inline]
pub fn parse_swap_from_data(data: &[u8]) -> Option<DexEvent> {
    parse_pool_fields(data).map(DexEvent::JupiterSwap)
}

#[cfg(test)]
pub(crate) fn sample_layout() -> JupiterPoolLayout {
    let mut creator = [0u8; 32];
    creator[30] = 0x12;
    creator[31] = 0x34;
    JupiterPoolLayout {
        discriminator: [0xe4, 0x45, 0xa5, 0x2e, 0x51, 0xcb, 0x9a, 0x1d],
        timestamp: -1_700_000_000,
        index: 513,
        creator,
        base_mint: [1u8; 32],
        quote_mint: [2u8; 32],
        base_mint_decimals: 6,
        quote_mint_decimals: 9,
        base_amount_in: 1_000_000,
        quote_amount_in: 2_000_000_000,
        pool_base_amount: 3,
        pool_quote_amount: 4,
        minimum_liquidity: 5,
        initial_liquidity: 6,
        lp_token_amount_out: u64::MAX,
        pool_bump: 254,
        pool: [3u8; 32],
        lp_mint: [4u8; 32],
        user_base_token_account: [5u8; 32],
        user_quote_token_account: [6u8; 32],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_len() {
        let bytes = borsh::to_vec(&sample_layout()).unwrap();
        assert_eq!(bytes.len(), JupiterPoolLayout::LEN);
        assert_eq!(JupiterPoolLayout::LEN, 301);
    }

    #[test]
    fn test_parse_swap_round_trip() {
        let layout = sample_layout();
        let bytes = borsh::to_vec(&layout).unwrap();

        let Some(DexEvent::JupiterSwap(event)) = parse_swap_from_data(&bytes) else {
            panic!("expected JupiterSwap");
        };

        let expected = JupiterPoolEvent {
            timestamp: -1_700_000_000,
            index: 513,
            creator: read_address(&layout.creator),
            base_mint: read_address(&[1u8; 32]),
            quote_mint: read_address(&[2u8; 32]),
            base_mint_decimals: 6,
            quote_mint_decimals: 9,
            base_amount_in: 1_000_000,
            quote_amount_in: 2_000_000_000,
            pool_base_amount: 3,
            pool_quote_amount: 4,
            minimum_liquidity: 5,
            initial_liquidity: 6,
            lp_token_amount_out: u64::MAX,
            pool_bump: 254,
            pool: read_address(&[3u8; 32]),
            lp_mint: read_address(&[4u8; 32]),
            user_base_token_account: read_address(&[5u8; 32]),
            user_quote_token_account: read_address(&[6u8; 32]),
        };
        assert_eq!(event, expected);
        // 前导零字节保留为前导 '1'
        assert!(event.creator.starts_with("1111"));
    }

    #[test]
    fn test_create_pool_and_swap_share_fields() {
        let bytes = borsh::to_vec(&sample_layout()).unwrap();
        let create = parse_create_pool_from_data(&bytes).unwrap();
        let swap = parse_swap_from_data(&bytes).unwrap();

        assert_eq!(create.event_type(), EventType::JupiterCreatePool);
        assert_eq!(swap.event_type(), EventType::JupiterSwap);
        match (create, swap) {
            (DexEvent::JupiterCreatePool(a), DexEvent::JupiterSwap(b)) => assert_eq!(a, b),
            other => panic!("unexpected variants: {:?}", other),
        }
    }

    #[test]
    fn test_short_buffer_rejected() {
        let bytes = borsh::to_vec(&sample_layout()).unwrap();
        assert!(parse_swap_from_data(&bytes[..JupiterPoolLayout::LEN - 1]).is_none());
        assert!(parse_create_pool_from_data(&[]).is_none());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = borsh::to_vec(&sample_layout()).unwrap();
        bytes.extend_from_slice(&[0xaa; 16]);
        assert!(parse_swap_from_data(&bytes).is_some());
    }
}
