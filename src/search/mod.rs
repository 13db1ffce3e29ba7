//! Search orchestration module
//!
//! Validates incoming queries, dispatches them to the provider and
//! hands the markup to the extractor.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
