//! Source positions and spans.
//!
//! - **`span`**: byte ranges (`Span`), points (`SourcePosition`), file-qualified
//!   ranges (`SourceSpan`) and parse hints (`Location`)
//! - **`map`**: `SourceMap` turns byte offsets in extracted text back into
//!   points in the original file

pub mod map;
pub mod span;

pub use map::SourceMap;
pub use span::{Location, SourcePosition, SourceSpan, Span};
