use crate::core::events::Protocol;
use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

// Program IDs for supported protocols (string format)
pub const JUPITER_PROGRAM_ID: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";
pub const PUMPFUN_PROGRAM_ID: &str = "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P";
pub const RAYDIUM_AMM_V4_PROGRAM_ID: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";

// Program IDs (Pubkey format for matching)
pub const JUPITER_PROGRAM: Pubkey = pubkey!("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4");
pub const PUMPFUN_PROGRAM: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");
pub const RAYDIUM_AMM_V4_PROGRAM: Pubkey = pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");

lazy_static::lazy_static! {
    pub static ref PROTOCOL_PROGRAM_IDS: HashMap<Protocol, Vec<&'static str>> = {
        let mut map = HashMap::new();
        map.insert(Protocol::JupiterSwap, vec![JUPITER_PROGRAM_ID]);
        map.insert(Protocol::PumpFun, vec![PUMPFUN_PROGRAM_ID]);
        map.insert(Protocol::RaydiumV4, vec![RAYDIUM_AMM_V4_PROGRAM_ID]);
        map
    };
}

/// 按传入顺序返回协议的程序 ID（去重，保持顺序）
pub fn get_program_ids_for_protocols(protocols: &[Protocol]) -> Vec<&'static str> {
    let mut program_ids: Vec<&'static str> = Vec::new();
    for protocol in protocols {
        if let Some(ids) = PROTOCOL_PROGRAM_IDS.get(protocol) {
            for id in ids {
                if !program_ids.contains(id) {
                    program_ids.push(id);
                }
            }
        }
    }
    program_ids
}
