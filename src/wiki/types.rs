use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub query: Option<QueryBody>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct QueryBody {
    pub searchinfo: Option<SearchInfo>,
    #[serde(default)]
    pub search: Vec<PageHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInfo {
    pub totalhits: Option<u64>,
}

/// One page hit under `query.search`. The API also returns ns, pageid,
/// wordcount, snippet and timestamp; only the fields the ranking uses are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PageHit {
    pub title: String,
    pub size: u64,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub info: Option<String>,
}
