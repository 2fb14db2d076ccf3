//! Raydium AMM V4 日志解析器
//!
//! 三种事件布局都以 8 字节 discriminator 开头（跳过不检查）。

use super::utils::*;
use crate::core::events::*;
use borsh::{BorshDeserialize, BorshSerialize};

/// InitPool 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RaydiumInitPoolLayout {
    pub discriminator: [u8; 8],
    pub nonce: u64,
    pub open_time: u64,
    pub init_pc_amount: u64,
    pub init_coin_amount: u64,
    pub base_mint: [u8; 32],
    pub quote_mint: [u8; 32],
    pub lp_mint: [u8; 32],
    pub amm_id: [u8; 32],
    pub amm_authority: [u8; 32],
    pub amm_open_orders: [u8; 32],
    pub amm_target_orders: [u8; 32],
    pub pool_coin_token_account: [u8; 32],
    pub pool_pc_token_account: [u8; 32],
    pub pool_withdraw_queue: [u8; 32],
    pub pool_lp_token_account: [u8; 32],
    pub serum_market: [u8; 32],
}

impl RaydiumInitPoolLayout {
    pub const LEN: usize = 8 + 8 * 4 + 32 * 12;
}

/// Swap 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RaydiumSwapLayout {
    pub discriminator: [u8; 8],
    pub amm_id: [u8; 32],
    pub user: [u8; 32],
    pub direction: u8,
    pub amount_in: u64,
    pub amount_out: u64,
    pub fee_amount: u64,
    pub base_reserve_before: u64,
    pub quote_reserve_before: u64,
    pub base_reserve_after: u64,
    pub quote_reserve_after: u64,
    pub timestamp: i64,
}

impl RaydiumSwapLayout {
    pub const LEN: usize = 8 + 32 * 2 + 1 + 8 * 8;
}

/// Liquidity 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RaydiumLiquidityLayout {
    pub discriminator: [u8; 8],
    pub amm_id: [u8; 32],
    pub user: [u8; 32],
    pub is_deposit: u8,
    pub base_amount: u64,
    pub quote_amount: u64,
    pub lp_amount: u64,
    pub base_reserve_after: u64,
    pub quote_reserve_after: u64,
    pub lp_supply_after: u64,
    pub timestamp: i64,
}

impl RaydiumLiquidityLayout {
    pub const LEN: usize = 8 + 32 * 2 + 1 + 8 * 7;
}

/// Parse Raydium AMM V4 InitPool event from pre-decoded data
pub fn parse_init_pool_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<RaydiumInitPoolLayout>(data)?;

    Some(DexEvent::RaydiumAmmV4InitPool(RaydiumAmmV4InitPoolEvent {
        nonce: raw.nonce,
        open_time: raw.open_time,
        init_pc_amount: raw.init_pc_amount,
        init_coin_amount: raw.init_coin_amount,
        base_mint: read_address(&raw.base_mint),
        quote_mint: read_address(&raw.quote_mint),
        lp_mint: read_address(&raw.lp_mint),
        amm_id: read_address(&raw.amm_id),
        amm_authority: read_address(&raw.amm_authority),
        amm_open_orders: read_address(&raw.amm_open_orders),
        amm_target_orders: read_address(&raw.amm_target_orders),
        pool_coin_token_account: read_address(&raw.pool_coin_token_account),
        pool_pc_token_account: read_address(&raw.pool_pc_token_account),
        pool_withdraw_queue: read_address(&raw.pool_withdraw_queue),
        pool_lp_token_account: read_address(&raw.pool_lp_token_account),
        serum_market: read_address(&raw.serum_market),
    }))
}

/// Parse Raydium AMM V4 Swap event from pre-decoded data
pub fn parse_swap_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<RaydiumSwapLayout>(data)?;

    Some(DexEvent::RaydiumAmmV4Swap(RaydiumAmmV4SwapEvent {
        amm_id: read_address(&raw.amm_id),
        user: read_address(&raw.user),
        direction: raw.direction,
        amount_in: raw.amount_in,
        amount_out: raw.amount_out,
        fee_amount: raw.fee_amount,
        base_reserve_before: raw.base_reserve_before,
        quote_reserve_before: raw.quote_reserve_before,
        base_reserve_after: raw.base_reserve_after,
        quote_reserve_after: raw.quote_reserve_after,
        timestamp: raw.timestamp,
    }))
}

/// Parse Raydium AMM V4 Liquidity event from pre-decoded data
pub fn parse_liquidity_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<RaydiumLiquidityLayout>(data)?;

    Some(DexEvent::RaydiumAmmV4Liquidity(RaydiumAmmV4LiquidityEvent {
        amm_id: read_address(&raw.amm_id),
        user: read_address(&raw.user),
        is_deposit: read_flag(raw.is_deposit),
        base_amount: raw.base_amount,
        quote_amount: raw.quote_amount,
        lp_amount: raw.lp_amount,
        base_reserve_after: raw.base_reserve_after,
        quote_reserve_after: raw.quote_reserve_after,
        lp_supply_after: raw.lp_supply_after,
        timestamp: raw.timestamp,
    }))
}

/// 组合解析：InitPool -> Swap -> Liquidity，第一个成功的返回
pub fn parse_any_from_data(data: &[u8]) -> Option<DexEvent> {
    parse_init_pool_from_data(data)
        .or_else(|| parse_swap_from_data(data))
        .or_else(|| parse_liquidity_from_data(data))
}

#[cfg(test)]
pub(crate) fn sample_init_pool_layout() -> RaydiumInitPoolLayout {
    RaydiumInitPoolLayout {
        discriminator: [0u8; 8],
        nonce: 254,
        open_time: 1_718_000_000,
        init_pc_amount: 79_000_000_000,
        init_coin_amount: 206_900_000_000_000,
        base_mint: [10u8; 32],
        quote_mint: [11u8; 32],
        lp_mint: [12u8; 32],
        amm_id: [13u8; 32],
        amm_authority: [14u8; 32],
        amm_open_orders: [15u8; 32],
        amm_target_orders: [16u8; 32],
        pool_coin_token_account: [17u8; 32],
        pool_pc_token_account: [18u8; 32],
        pool_withdraw_queue: [19u8; 32],
        pool_lp_token_account: [20u8; 32],
        serum_market: [21u8; 32],
    }
}

#[cfg(test)]
pub(crate) fn sample_swap_layout() -> RaydiumSwapLayout {
    RaydiumSwapLayout {
        discriminator: [3u8; 8],
        amm_id: [13u8; 32],
        user: [22u8; 32],
        direction: 1,
        amount_in: 500_000_000,
        amount_out: 1_234_567,
        fee_amount: 1_250_000,
        base_reserve_before: 10_000,
        quote_reserve_before: 20_000,
        base_reserve_after: 9_000,
        quote_reserve_after: 21_000,
        timestamp: 1_718_000_100,
    }
}

#[cfg(test)]
pub(crate) fn sample_liquidity_layout() -> RaydiumLiquidityLayout {
    RaydiumLiquidityLayout {
        discriminator: [4u8; 8],
        amm_id: [13u8; 32],
        user: [22u8; 32],
        is_deposit: 1,
        base_amount: 1_000,
        quote_amount: 2_000,
        lp_amount: 300,
        base_reserve_after: 11_000,
        quote_reserve_after: 22_000,
        lp_supply_after: 3_300,
        timestamp: -5,
    }
}
