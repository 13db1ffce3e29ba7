//! Result types and extraction
//!
//! Turns a provider's HTML response into ordered `SearchResult` records.

mod extractor;
mod types;

pub use extractor::extract;
pub use types::*;
