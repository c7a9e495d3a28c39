//! SVG processing for icon components.
//!
//! # Modules
//!
//! - [`optimize`]: SVG minification using usvg (id prefixing, natural size)
//! - [`extract`]: `fill`/`stroke`/dashed attribute extraction from markup
//! - [`rewrite`]: attribute values → prop placeholders, dashed names → camelCase
//!
//! # Architecture
//!
//! ```text
//! raw SVG bytes
//!         │
//!         ▼
//!    ┌──────────┐
//!    │ optimize │ ──► usvg parse + compact write (IconSource)
//!    └────┬─────┘
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ extract │ ──► AttributeSet for fill / stroke
//!    └────┬────┘
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ rewrite │ ──► markup with {fill} / {stroke[i]} placeholders
//!    └─────────┘
//! ```

pub mod extract;
pub mod optimize;
pub mod rewrite;

pub use extract::{AttributeSet, SemanticAttr};
pub use optimize::{IconSource, minify_svg};
pub use rewrite::rewrite_markup;
