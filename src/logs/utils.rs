//! 日志解析通用工具函数
//!
//! 负责从日志批次中定位 `Program data: ` 行并解码出字节，
//! 以及布局解析时用到的地址 / 定长字符串转换。

use base64::{engine::general_purpose, Engine as _};
use borsh::BorshDeserialize;

/// 承载二进制负载的日志行前缀
pub const PROGRAM_DATA_PREFIX: &str = "Program data: ";

/// 返回第一条以 `Program data: ` 开头的日志的负载文本
///
/// 只看第一条匹配行；没有匹配行返回 `None`（大多数批次的正常情况）。
#[inline]
pub fn find_program_data<S: AsRef<str>>(logs: &[S]) -> Option<&str> {
    logs.iter()
        .find_map(|log| log.as_ref().strip_prefix(PROGRAM_DATA_PREFIX))
        .map(str::trim)
}

/// base64 解码负载文本，失败返回 `None`
#[inline]
pub fn decode_program_data(data: &str) -> Option<Vec<u8>> {
    general_purpose::STANDARD.decode(data).ok()
}

/// 从日志批次中提取程序数据（定位 + base64 解码）
#[inline]
pub fn extract_program_data<S: AsRef<str>>(logs: &[S]) -> Option<Vec<u8>> {
    find_program_data(logs).and_then(decode_program_data)
}

/// 32 字节地址转 base58 文本
#[inline]
pub fn read_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

/// 定长零填充字符串：去掉末尾的 NUL 后按 UTF-8 解析
///
/// 非法 UTF-8 返回 `None`。
pub fn read_padded_str(bytes: &[u8]) -> Option<String> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    std::str::from_utf8(&bytes[..end]).ok().map(str::to_owned)
}

/// 单字节标志位，任何非零值都视为 true
#[inline]
pub fn read_flag(byte: u8) -> bool {
    byte != 0
}

/// 从缓冲区开头按布局读取，忽略尾部多余字节；长度不足返回 `None`
#[inline]
pub fn read_layout<T: BorshDeserialize>(data: &[u8]) -> Option<T> {
    let mut cursor = data;
    T::deserialize(&mut cursor).ok()
}
