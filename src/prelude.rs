//! Crate-wide imports: derive_more's `Display` derive and the tracing macros
//! the extractor logs through.

pub use derive_more::Display;
#[allow(unused_imports)]
pub use tracing::{debug, trace};
