//! PumpFun 日志解析器
//!
//! PumpFun 的三种事件布局没有 discriminator 前缀，字段从第 0 字节开始。
//! name / symbol / uri 为定长零填充字符串（32 / 10 / 100 字节）。

use super::utils::*;
use crate::core::events::*;
use borsh::{BorshDeserialize, BorshSerialize};

pub const NAME_LEN: usize = 32;
pub const SYMBOL_LEN: usize = 10;
pub const URI_LEN: usize = 100;

/// Create 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PumpFunCreateLayout {
    pub name: [u8; NAME_LEN],
    pub symbol: [u8; SYMBOL_LEN],
    pub uri: [u8; URI_LEN],
    pub mint: [u8; 32],
    pub bonding_curve: [u8; 32],
    pub user: [u8; 32],
}

impl PumpFunCreateLayout {
    pub const LEN: usize = NAME_LEN + SYMBOL_LEN + URI_LEN + 32 * 3;
}

/// Trade 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PumpFunTradeLayout {
    pub mint: [u8; 32],
    pub sol_amount: u64,
    pub token_amount: u64,
    pub is_buy: u8,
    pub user: [u8; 32],
    pub timestamp: u64,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
}

impl PumpFunTradeLayout {
    pub const LEN: usize = 32 + 8 + 8 + 1 + 32 + 8 * 3;
}

/// Complete 事件原始布局
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PumpFunCompleteLayout {
    pub user: [u8; 32],
    pub mint: [u8; 32],
    pub bonding_curve: [u8; 32],
    pub timestamp: u64,
}

impl PumpFunCompleteLayout {
    pub const LEN: usize = 32 * 3 + 8;
}

/// Parse PumpFun Create event from pre-decoded data
pub fn parse_create_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<PumpFunCreateLayout>(data)?;

    // 任一文本字段不是合法 UTF-8 都视为布局不匹配
    let name = read_padded_str(&raw.name)?;
    let symbol = read_padded_str(&raw.symbol)?;
    let uri = read_padded_str(&raw.uri)?;

    Some(DexEvent::PumpFunCreate(PumpFunCreateEvent {
        name,
        symbol,
        uri,
        mint: read_address(&raw.mint),
        bonding_curve: read_address(&raw.bonding_curve),
        user: read_address(&raw.user),
    }))
}

/// Parse PumpFun Trade event from pre-decoded data
pub fn parse_trade_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<PumpFunTradeLayout>(data)?;

    Some(DexEvent::PumpFunTrade(PumpFunTradeEvent {
        mint: read_address(&raw.mint),
        sol_amount: raw.sol_amount,
        token_amount: raw.token_amount,
        is_buy: read_flag(raw.is_buy),
        user: read_address(&raw.user),
        timestamp: raw.timestamp,
        virtual_sol_reserves: raw.virtual_sol_reserves,
        virtual_token_reserves: raw.virtual_token_reserves,
    }))
}

/// Parse PumpFun Complete event from pre-decoded data
pub fn parse_complete_from_data(data: &[u8]) -> Option<DexEvent> {
    let raw = read_layout::<PumpFunCompleteLayout>(data)?;

    Some(DexEvent::PumpFunComplete(PumpFunCompleteEvent {
        user: read_address(&raw.user),
        mint: read_address(&raw.mint),
        bonding_curve: read_address(&raw.bonding_curve),
        timestamp: raw.timestamp,
    }))
}

#[cfg(test)]
pub(crate) fn padded<const N: usize>(text: &str) -> [u8; N] {
    let mut buf = [0u8; N];
    buf[..text.len()].copy_from_slice(text.as_bytes());
    buf
}

#[cfg(test)]
pub(crate) fn sample_create_layout() -> PumpFunCreateLayout {
    PumpFunCreateLayout {
        name: padded("DOGE"),
        symbol: padded("DGE"),
        uri: padded("https://ipfs.io/ipfs/QmDoge"),
        mint: [7u8; 32],
        bonding_curve: [8u8; 32],
        user: [9u8; 32],
    }
}

#[cfg(test)]
pub(crate) fn sample_trade_layout() -> PumpFunTradeLayout {
    PumpFunTradeLayout {
        mint: [7u8; 32],
        sol_amount: 1_500_000_000,
        token_amount: 35_000_000_000_000,
        is_buy: 1,
        user: [9u8; 32],
        timestamp: 1_718_000_000,
        virtual_sol_reserves: 31_500_000_000,
        virtual_token_reserves: 1_020_000_000_000_000,
    }
}

#[cfg(test)]
pub(crate) fn sample_complete_layout() -> PumpFunCompleteLayout {
    PumpFunCompleteLayout {
        user: [9u8; 32],
        mint: [7u8; 32],
        bonding_curve: [8u8; 32],
        timestamp: 1_718_000_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_lens() {
        assert_eq!(borsh::to_vec(&sample_create_layout()).unwrap().len(), PumpFunCreateLayout::LEN);
        assert_eq!(borsh::to_vec(&sample_trade_layout()).unwrap().len(), PumpFunTradeLayout::LEN);
        assert_eq!(
            borsh::to_vec(&sample_complete_layout()).unwrap().len(),
            PumpFunCompleteLayout::LEN
        );
    }

    #[test]
    fn test_parse_create_strips_padding() {
        let bytes = borsh::to_vec(&sample_create_layout()).unwrap();
        let Some(DexEvent::PumpFunCreate(event)) = parse_create_from_data(&bytes) else {
            panic!("expected PumpFunCreate");
        };

        let expected = PumpFunCreateEvent {
            name: "DOGE".to_string(),
            symbol: "DGE".to_string(),
            uri: "https://ipfs.io/ipfs/QmDoge".to_string(),
            mint: read_address(&[7u8; 32]),
            bonding_curve: read_address(&[8u8; 32]),
            user: read_address(&[9u8; 32]),
        };
        assert_eq!(event, expected);
    }

    #[test]
    fn test_parse_create_multibyte_name() {
        let mut layout = sample_create_layout();
        layout.name = padded("狗狗币");
        let bytes = borsh::to_vec(&layout).unwrap();
        let Some(DexEvent::PumpFunCreate(event)) = parse_create_from_data(&bytes) else {
            panic!("expected PumpFunCreate");
        };
        assert_eq!(event.name, "狗狗币");
    }

    #[test]
    fn test_parse_create_invalid_utf8() {
        let mut layout = sample_create_layout();
        layout.symbol[0] = 0xff;
        let bytes = borsh::to_vec(&layout).unwrap();
        assert!(parse_create_from_data(&bytes).is_none());
    }

    #[test]
    fn test_parse_trade_round_trip() {
        let bytes = borsh::to_vec(&sample_trade_layout()).unwrap();
        let Some(DexEvent::PumpFunTrade(event)) = parse_trade_from_data(&bytes) else {
            panic!("expected PumpFunTrade");
        };

        let expected = PumpFunTradeEvent {
            mint: read_address(&[7u8; 32]),
            sol_amount: 1_500_000_000,
            token_amount: 35_000_000_000_000,
            is_buy: true,
            user: read_address(&[9u8; 32]),
            timestamp: 1_718_000_000,
            virtual_sol_reserves: 31_500_000_000,
            virtual_token_reserves: 1_020_000_000_000_000,
        };
        assert_eq!(event, expected);
    }

    #[test]
    fn test_parse_trade_flag_any_non_zero() {
        let mut layout = sample_trade_layout();
        layout.is_buy = 2;
        let bytes = borsh::to_vec(&layout).unwrap();
        let Some(DexEvent::PumpFunTrade(event)) = parse_trade_from_data(&bytes) else {
            panic!("expected PumpFunTrade");
        };
        assert!(event.is_buy);

        layout.is_buy = 0;
        let bytes = borsh::to_vec(&layout).unwrap();
        let Some(DexEvent::PumpFunTrade(event)) = parse_trade_from_data(&bytes) else {
            panic!("expected PumpFunTrade");
        };
        assert!(!event.is_buy);
    }

    #[test]
    fn test_parse_complete_round_trip() {
        let bytes = borsh::to_vec(&sample_complete_layout()).unwrap();
        let Some(DexEvent::PumpFunComplete(event)) = parse_complete_from_data(&bytes) else {
            panic!("expected PumpFunComplete");
        };

        let expected = PumpFunCompleteEvent {
            user: read_address(&[9u8; 32]),
            mint: read_address(&[7u8; 32]),
            bonding_curve: read_address(&[8u8; 32]),
            timestamp: 1_718_000_500,
        };
        assert_eq!(event, expected);
    }

    #[test]
    fn test_short_buffers_rejected() {
        let bytes = borsh::to_vec(&sample_create_layout()).unwrap();
        assert!(parse_create_from_data(&bytes[..PumpFunCreateLayout::LEN - 1]).is_none());
        let bytes = borsh::to_vec(&sample_trade_layout()).unwrap();
        assert!(parse_trade_from_data(&bytes[..PumpFunTradeLayout::LEN - 1]).is_none());
        assert!(parse_complete_from_data(&[0u8; PumpFunCompleteLayout::LEN - 1]).is_none());
    }
}
