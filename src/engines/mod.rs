//! Search engine module
//!
//! Defines the Engine trait: the narrow seam through which the search
//! pipeline learns a provider's endpoint and markup layout.

mod traits;

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGo;
pub use traits::*;
