use clap::Parser;

use crate::search::{SearchRequest, SortField};
use crate::wiki::LangCode;

/// Full-text search across multiple Wikipedia language editions.
#[derive(Debug, Parser)]
#[command(name = "wikiscan", version, about)]
pub struct Cli {
    /// Text to search for
    pub query: String,

    /// Language editions to search, in order (repeat or comma-separate)
    #[arg(short = 'l', long = "lang", value_delimiter = ',', default_value = "en")]
    pub languages: Vec<LangCode>,

    /// Max hits requested per language (the API caps one request at 500)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=500))]
    pub pages_limit: u32,

    /// Max combined hits printed
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub results_limit: u32,

    /// Field to rank results by, descending
    #[arg(long, value_enum, default_value_t = SortField::Size)]
    pub sort: SortField,

    /// Search for the query as an exact phrase
    #[arg(long)]
    pub exact: bool,
}

impl Cli {
    pub fn into_request(self) -> SearchRequest {
        SearchRequest {
            query: self.query,
            languages: self.languages,
            pages_limit: self.pages_limit,
            results_limit: self.results_limit as usize,
            sort: self.sort,
            exact: self.exact,
        }
    }
}
