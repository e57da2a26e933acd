//! Wikipedia search API client: language codes, wire types, and the HTTP client.

mod client;
mod lang;
mod types;

pub use client::{SearchSource, WikiClient, WikiError};
pub use lang::LangCode;
pub use types::PageHit;
