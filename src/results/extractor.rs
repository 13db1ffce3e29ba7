//! Extraction of structured results from provider markup

use super::types::SearchResult;
use crate::engines::ResultSelectors;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Parse `markup` and collect up to `limit` results, in document order.
///
/// Containers without a link, or whose title or URL is empty after trimming,
/// are skipped and do not count toward `limit`. Never fails: markup that does
/// not match the selectors simply yields fewer results.
pub fn extract(markup: &str, selectors: &ResultSelectors, limit: usize) -> Vec<SearchResult> {
    let document = Html::parse_document(markup);
    let mut results = Vec::new();
    let mut containers = 0usize;

    for container in document.select(&selectors.container) {
        if results.len() >= limit {
            break;
        }
        containers += 1;

        let link = match container.select(&selectors.link).next() {
            Some(link) => link,
            None => continue,
        };

        let title = visible_text(link);
        let url = link.value().attr("href").unwrap_or_default().trim();

        let description = container
            .select(&selectors.snippet)
            .next()
            .map(visible_text)
            .unwrap_or_default();

        if let Some(result) = SearchResult::new(title, url, description) {
            debug!("Added result {}: {}", results.len() + 1, result.title);
            results.push(result);
        }
    }

    debug!(
        "Extracted {} results from {} containers (limit {})",
        results.len(),
        containers,
        limit
    );

    results
}

/// Text content of an element with whitespace runs collapsed and ends trimmed
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
