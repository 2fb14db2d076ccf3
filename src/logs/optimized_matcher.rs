//! 优化的日志匹配器 - 协议族识别
//!
//! 使用预编译的 memchr 查找器做子串匹配（区分大小写，位置不限）。

use crate::core::events::Protocol;
use memchr::memmem;
use once_cell::sync::Lazy;

/// 分类用到的字面量
pub mod program_id_strings {
    pub const JUPITER_ID: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";
    pub const JUPITER_MARKER: &str = "JUP";

    pub const RAYDIUM_AMM_V4_ID: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";
    pub const RAYDIUM_LOG_MARKER: &str = "ray_log:";

    pub const PUMPFUN_ID: &str = "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P";

    pub const SWAP_INSTRUCTION: &str = "Program log: Instruction: Swap";
    pub const PROGRAM_DATA: &str = "Program data: ";
}

use program_id_strings::*;

static JUPITER_FINDER: Lazy<memmem::Finder> = Lazy::new(|| memmem::Finder::new(JUPITER_ID));
static JUP_FINDER: Lazy<memmem::Finder> = Lazy::new(|| memmem::Finder::new(JUPITER_MARKER));
static RAYDIUM_AMM_FINDER: Lazy<memmem::Finder> =
    Lazy::new(|| memmem::Finder::new(RAYDIUM_AMM_V4_ID));
static RAY_LOG_FINDER: Lazy<memmem::Finder> = Lazy::new(|| memmem::Finder::new(RAYDIUM_LOG_MARKER));
static PUMPFUN_FINDER: Lazy<memmem::Finder> = Lazy::new(|| memmem::Finder::new(PUMPFUN_ID));
static SWAP_INSTRUCTION_FINDER: Lazy<memmem::Finder> =
    Lazy::new(|| memmem::Finder::new(SWAP_INSTRUCTION));
static PROGRAM_DATA_FINDER: Lazy<memmem::Finder> = Lazy::new(|| memmem::Finder::new(PROGRAM_DATA));

#[inline(always)]
fn any_line<S: AsRef<str>>(logs: &[S], finder: &memmem::Finder) -> bool {
    logs.iter().any(|log| finder.find(log.as_ref().as_bytes()).is_some())
}

/// 识别日志批次所属协议族
///
/// 按优先级匹配：Jupiter -> Raydium -> PumpFun，都不匹配为 `Unclassified`。
#[inline]
pub fn detect_family<S: AsRef<str>>(logs: &[S]) -> Protocol {
    if any_line(logs, &JUPITER_FINDER) || any_line(logs, &JUP_FINDER) {
        return Protocol::JupiterSwap;
    }

    if any_line(logs, &RAYDIUM_AMM_FINDER) || any_line(logs, &RAY_LOG_FINDER) {
        return Protocol::RaydiumV4;
    }

    if any_line(logs, &PUMPFUN_FINDER) {
        return Protocol::PumpFun;
    }

    Protocol::Unclassified
}

/// 批次中是否出现 Swap 指令标记
#[inline]
pub fn has_swap_instruction<S: AsRef<str>>(logs: &[S]) -> bool {
    any_line(logs, &SWAP_INSTRUCTION_FINDER)
}

/// 批次中是否有任何一行包含 `Program data: `
#[inline]
pub fn has_program_data<S: AsRef<str>>(logs: &[S]) -> bool {
    any_line(logs, &PROGRAM_DATA_FINDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_jupiter() {
        let logs = [format!("Program {} invoke [1]", JUPITER_ID)];
        assert_eq!(detect_family(&logs), Protocol::JupiterSwap);
        assert_eq!(detect_family(&["Program log: JUP route"]), Protocol::JupiterSwap);
    }

    #[test]
    fn test_jupiter_wins_over_raydium() {
        let logs = ["Program log: ray_log: AAAA", "Program log: JUP"];
        assert_eq!(detect_family(&logs), Protocol::JupiterSwap);
    }

    #[test]
    fn test_ray_log_anywhere_in_line() {
        assert_eq!(detect_family(&["xyz ray_log: abc"]), Protocol::RaydiumV4);
        assert_eq!(detect_family(&["ray_log:"]), Protocol::RaydiumV4);
        let logs = [format!("Program {} success", RAYDIUM_AMM_V4_ID)];
        assert_eq!(detect_family(&logs), Protocol::RaydiumV4);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(detect_family(&["RAY_LOG: abc", "jup"]), Protocol::Unclassified);
    }

    #[test]
    fn test_detect_pumpfun() {
        let logs = [format!("Program {} invoke [1]", PUMPFUN_ID)];
        assert_eq!(detect_family(&logs), Protocol::PumpFun);
    }

    #[test]
    fn test_unclassified_and_program_data() {
        let logs: [&str; 0] = [];
        assert_eq!(detect_family(&logs), Protocol::Unclassified);
        assert!(!has_program_data(&logs));
        assert!(has_program_data(&["Program data: AAAA"]));
        assert!(has_swap_instruction(&["Program log: Instruction: SwapBaseIn"]));
    }
}
