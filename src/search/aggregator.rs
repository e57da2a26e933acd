use tracing::{debug, warn};

use crate::wiki::{LangCode, SearchSource, WikiError};

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub languages: Vec<LangCode>,
    /// Max hits requested from the API per language.
    pub pages_limit: u32,
    /// Max combined hits after merging and ranking.
    pub results_limit: usize,
    pub sort: SortField,
    /// Wrap the query in double quotes so it matches as a contiguous phrase.
    pub exact: bool,
}

/// Field the combined results are ranked by, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortField {
    Title,
    #[default]
    Size,
    Lang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub size: u64,
    pub lang: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("at least one language is required")]
    NoLanguages,

    #[error("{0}")]
    Wiki(#[from] WikiError),
}

/// Queries each requested language edition in order, merges the hits into one
/// sequence tagged by source language, then ranks and trims it.
///
/// A language whose request fails is skipped with a warning; the run only
/// fails when every language failed, in which case the first error is
/// returned.
pub async fn aggregate(
    source: &impl SearchSource,
    request: &SearchRequest,
) -> Result<Vec<SearchResult>, AggregateError> {
    if request.query.trim().is_empty() {
        return Err(AggregateError::EmptyQuery);
    }
    if request.languages.is_empty() {
        return Err(AggregateError::NoLanguages);
    }

    let query = if request.exact {
        format!("\"{}\"", request.query)
    } else {
        request.query.clone()
    };

    let mut results = Vec::new();
    let mut first_err = None;
    let mut failures = 0;

    for lang in &request.languages {
        match source.search(lang, &query, request.pages_limit).await {
            Ok(hits) => {
                debug!(lang = %lang, hits = hits.len(), "language searched");
                results.extend(hits.into_iter().map(|hit| SearchResult {
                    title: hit.title,
                    size: hit.size,
                    lang: lang.to_string(),
                }));
            }
            Err(e) => {
                warn!(lang = %lang, error = %e, "search failed for language (continuing with others)");
                failures += 1;
                first_err.get_or_insert(e);
            }
        }
    }

    if failures == request.languages.len()
        && let Some(e) = first_err
    {
        return Err(e.into());
    }

    sort_results(&mut results, request.sort);
    results.truncate(request.results_limit);
    Ok(results)
}

/// Descending stable sort; ties keep the merge order (language order, then
/// per-language API order).
fn sort_results(results: &mut [SearchResult], field: SortField) {
    match field {
        SortField::Title => results.sort_by(|a, b| b.title.cmp(&a.title)),
        SortField::Size => results.sort_by(|a, b| b.size.cmp(&a.size)),
        SortField::Lang => results.sort_by(|a, b| b.lang.cmp(&a.lang)),
    }
}

pub fn format_results(results: &[SearchResult]) -> String {
    let mut output = String::new();
    for result in results {
        output.push_str(&format!(
            "Title: {}, Size: {}, Language: {}\n",
            result.title, result.size, result.lang
        ));
    }
    output
}
