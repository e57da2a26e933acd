//! Search aggregation: per-language fan-out, merge, rank, trim, and render.

mod aggregator;

pub use aggregator::{
    AggregateError, SearchRequest, SearchResult, SortField, aggregate, format_results,
};
