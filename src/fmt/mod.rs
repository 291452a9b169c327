//! Rendering building blocks: colors, the clock, severity badges, scope
//! colors, path shortening, and deep-value rendering.

pub mod color;
pub mod path;
pub mod scope;
pub mod severity;
pub mod timestamp;
pub mod value;

pub use color::{Color, strip};
pub use path::truncate_path;
pub use scope::{SCOPE_PALETTE, ScopeColors};
pub use severity::severity_label;
pub use timestamp::render_timestamp;
pub use value::{Inspector, ValueRenderer};
