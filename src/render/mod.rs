pub mod document;
pub mod encoding;

pub use document::{add_file_blocks, add_file_to_md, RenderOptions};
pub use encoding::{detect_encoding, read_to_text, DecodeError, TextEncoding};
