//! Rendering module for converting answer sheets to output formats.

mod json;
mod preview;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use preview::{preview, ConversionPreview, SheetStats};
pub use text::to_text;
