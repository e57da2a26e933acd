use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::lang::LangCode;
use super::types::{ApiError, PageHit, SearchResponse};

const ENDPOINT_TEMPLATE: &str = "https://{lang}.wikipedia.org/w/api.php";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("search failed: status {0}")]
    Status(u16),

    #[error("API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("unexpected response shape: missing `query.search`")]
    MissingQuery,
}

/// Abstraction over the Wikipedia full-text search API.
/// Implemented by `WikiClient` for production; mock implementations used in tests.
pub trait SearchSource {
    async fn search(
        &self,
        lang: &LangCode,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PageHit>, WikiError>;
}

#[derive(Clone)]
pub struct WikiClient {
    http: Client,
    endpoint_template: String,
}

impl WikiClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            endpoint_template: ENDPOINT_TEMPLATE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint_template(http: Client, template: &str) -> Self {
        Self {
            http,
            endpoint_template: template.to_string(),
        }
    }

    fn endpoint_for(&self, lang: &LangCode) -> Result<url::Url, WikiError> {
        let raw = self.endpoint_template.replace("{lang}", lang.as_str());
        Ok(url::Url::parse(&raw)?)
    }
}

impl SearchSource for WikiClient {
    async fn search(
        &self,
        lang: &LangCode,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PageHit>, WikiError> {
        let url = self.endpoint_for(lang)?;

        let limit_param = limit.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("utf8", "1"),
            ("srsearch", query),
            ("srlimit", limit_param.as_str()),
            ("srinterwiki", "1"),
        ];

        let response = self
            .http
            .get(url)
            .query(&params)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(lang = %lang, status = %status, "wikipedia API returned error status");
            return Err(WikiError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;

        if let Some(err) = body.error {
            let classified = classify_api_error(err);
            warn!(lang = %lang, error = %classified, "wikipedia API error");
            return Err(classified);
        }

        let query_body = body.query.ok_or(WikiError::MissingQuery)?;
        let totalhits = query_body.searchinfo.as_ref().and_then(|s| s.totalhits);
        debug!(lang = %lang, hits = query_body.search.len(), totalhits, "wikipedia search complete");

        Ok(query_body.search)
    }
}

fn classify_api_error(err: ApiError) -> WikiError {
    WikiError::Api {
        code: err.code.unwrap_or_else(|| "unknown".to_string()),
        info: err.info.unwrap_or_else(|| "no details provided".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_substitutes_language() {
        let client = WikiClient::new(Client::new());
        let lang: LangCode = "ja".parse().unwrap();
        let url = client.endpoint_for(&lang).unwrap();
        assert_eq!(url.as_str(), "https://ja.wikipedia.org/w/api.php");
    }

    #[test]
    fn classify_error_keeps_code_and_info() {
        let err = classify_api_error(ApiError {
            code: Some("srsearch-missing".into()),
            info: Some("The srsearch parameter must be set".into()),
        });
        match err {
            WikiError::Api { code, info } => {
                assert_eq!(code, "srsearch-missing");
                assert!(info.contains("srsearch"));
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn classify_error_without_fields_uses_placeholders() {
        let err = classify_api_error(ApiError {
            code: None,
            info: None,
        });
        assert_eq!(
            err.to_string(),
            "API error (unknown): no details provided"
        );
    }
}
