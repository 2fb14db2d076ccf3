//! Log parser module
//!
//! Layout decoders for every supported protocol, the payload extractor and
//! the protocol family matcher.

pub mod decoder_lut;
pub mod jupiter;
pub mod optimized_matcher;
pub mod pumpfun;
pub mod raydium_amm;
pub mod utils;

pub use decoder_lut::{run_plan, DecoderInfo, ParserFn};
pub use optimized_matcher::{detect_family, has_program_data, has_swap_instruction};
pub use utils::{decode_program_data, extract_program_data, find_program_data};
