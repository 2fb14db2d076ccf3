//! 所有具体的事件类型定义
//!
//! 三个协议（Jupiter / PumpFun / Raydium AMM V4）共 8 种事件。
//! 地址字段统一为 base58 文本（与链上账户地址的标准文本形式一致）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 协议族 - 每个日志批次分类后得到的标签，不持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    JupiterSwap,
    PumpFun,
    RaydiumV4,
    Unclassified,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::JupiterSwap => "jupiter",
            Protocol::PumpFun => "pumpfun",
            Protocol::RaydiumV4 => "raydium",
            Protocol::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 事件类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    JupiterSwap,
    JupiterCreatePool,
    PumpCreate,
    PumpTrade,
    PumpComplete,
    RaydiumSwap,
    RaydiumLiquidity,
    RaydiumInitPool,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::JupiterSwap => "jupiter_swap",
            EventType::JupiterCreatePool => "jupiter_create_pool",
            EventType::PumpCreate => "pump_create",
            EventType::PumpTrade => "pump_trade",
            EventType::PumpComplete => "pump_complete",
            EventType::RaydiumSwap => "raydium_swap",
            EventType::RaydiumLiquidity => "raydium_liquidity",
            EventType::RaydiumInitPool => "raydium_init_pool",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jupiter 池事件字段集
///
/// CreatePool 与 Swap 的链上布局逐字节相同，二者共用此结构，
/// 由 [`DexEvent`] 的变体区分语义。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JupiterPoolEvent {
    pub timestamp: i64,
    pub index: u16,
    pub creator: String,
    pub base_mint: String,
    pub quote_mint: String,
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
    pub pool: String,
    pub lp_mint: String,
    pub user_base_token_account: String,
    pub user_quote_token_account: String,
}

/// PumpFun Create Event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PumpFunCreateEvent {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub mint: String,
    pub bonding_curve: String,
    pub user: String,
}

/// PumpFun Trade Event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PumpFunTradeEvent {
    pub mint: String,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub is_buy: bool,
    pub user: String,
    pub timestamp: u64,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
}

/// PumpFun Complete Event - 联合曲线毕业
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PumpFunCompleteEvent {
    pub user: String,
    pub mint: String,
    pub bonding_curve: String,
    pub timestamp: u64,
}

/// Raydium AMM V4 Init Pool Event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaydiumAmmV4InitPoolEvent {
    pub nonce: u64,
    pub open_time: u64,
    pub init_pc_amount: u64,
    pub init_coin_amount: u64,
    pub base_mint: String,
    pub quote_mint: String,
    pub lp_mint: String,
    pub amm_id: String,
    pub amm_authority: String,
    pub amm_open_orders: String,
    pub amm_target_orders: String,
    pub pool_coin_token_account: String,
    pub pool_pc_token_account: String,
    pub pool_withdraw_queue: String,
    pub pool_lp_token_account: String,
    pub serum_market: String,
}

/// Raydium AMM V4 Swap Event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaydiumAmmV4SwapEvent {
    pub amm_id: String,
    pub user: String,
    /// 0 = base -> quote, 1 = quote -> base
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

impl RaydiumAmmV4SwapEvent {
    pub fn is_base_to_quote(&self) -> bool {
        self.direction == 0
    }
}

/// Raydium AMM V4 Liquidity Event（存入 / 取出）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaydiumAmmV4LiquidityEvent {
    pub amm_id: String,
    pub user: String,
    pub is_deposit: bool,
    pub base_amount: u64,
    pub quote_amount: u64,
    pub lp_amount: u64,
    pub base_reserve_after: u64,
    pub quote_reserve_after: u64,
    pub lp_supply_after: u64,
    pub timestamp: i64,
}

/// 统一的事件枚举
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DexEvent {
    // Jupiter 事件
    JupiterCreatePool(JupiterPoolEvent),
    JupiterSwap(JupiterPoolEvent),

    // PumpFun 事件
    PumpFunCreate(PumpFunCreateEvent),
    PumpFunTrade(PumpFunTradeEvent),
    PumpFunComplete(PumpFunCompleteEvent),

    // Raydium AMM V4 事件
    RaydiumAmmV4InitPool(RaydiumAmmV4InitPoolEvent),
    RaydiumAmmV4Swap(RaydiumAmmV4SwapEvent),
    RaydiumAmmV4Liquidity(RaydiumAmmV4LiquidityEvent),
}

impl DexEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            DexEvent::JupiterCreatePool(_) => EventType::JupiterCreatePool,
            DexEvent::JupiterSwap(_) => EventType::JupiterSwap,
            DexEvent::PumpFunCreate(_) => EventType::PumpCreate,
            DexEvent::PumpFunTrade(_) => EventType::PumpTrade,
            DexEvent::PumpFunComplete(_) => EventType::PumpComplete,
            DexEvent::RaydiumAmmV4InitPool(_) => EventType::RaydiumInitPool,
            DexEvent::RaydiumAmmV4Swap(_) => EventType::RaydiumSwap,
            DexEvent::RaydiumAmmV4Liquidity(_) => EventType::RaydiumLiquidity,
        }
    }

    /// 事件所属协议族
    pub fn protocol(&self) -> Protocol {
        match self {
            DexEvent::JupiterCreatePool(_) | DexEvent::JupiterSwap(_) => Protocol::JupiterSwap,
            DexEvent::PumpFunCreate(_) | DexEvent::PumpFunTrade(_) | DexEvent::PumpFunComplete(_) => {
                Protocol::PumpFun
            }
            DexEvent::RaydiumAmmV4InitPool(_)
            | DexEvent::RaydiumAmmV4Swap(_)
            | DexEvent::RaydiumAmmV4Liquidity(_) => Protocol::RaydiumV4,
        }
    }
}
