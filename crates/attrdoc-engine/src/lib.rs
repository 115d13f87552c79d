pub mod annotation;
pub mod diagnostics;
pub mod extract;
pub mod markup;
pub mod semantics;
pub mod source;

// Re-export key types for easier usage
pub use annotation::{Literal, RawAnnotation, is_stop_marker};
pub use diagnostics::{DocError, Diagnostic, Diagnostics, Severity};
pub use extract::*;
pub use markup::{DocElement, Documentation, InternalTag, InternalTagKind, Located, TagElement};
pub use semantics::{Scope, Tags, TagsPolicy};
pub use source::{Location, SourcePosition, SourceSpan};
