pub mod decode_result;
pub mod formatting;

pub use decode_result::DecodeResult;
pub use formatting::{ECLevel, Formatting, MaskPattern, ParseFormattingError};
