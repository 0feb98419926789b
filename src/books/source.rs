use std::fmt;

use async_trait::async_trait;

use super::types::{BookRecord, SearchPage};

/// Errors that can occur while searching.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// Endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not JSON or a required field (`title`) was missing.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Anything that can turn a free-text query into book records.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Returns the name of the source, used in logs.
    fn name(&self) -> &str;

    /// Runs one search. The query is forwarded as-is, the empty string included.
    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, SearchError>;

    /// Like [`search`](Self::search), plus the server-side match count when
    /// the source reports one.
    async fn search_page(&self, query: &str) -> Result<SearchPage, SearchError> {
        let records = self.search(query).await?;
        Ok(SearchPage {
            records,
            total_items: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        let err = SearchError::Api {
            status: 500,
            message: "backend down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): backend down");
        assert_eq!(
            SearchError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
        assert_eq!(
            SearchError::Parse("missing field `title`".to_string()).to_string(),
            "parse error: missing field `title`"
        );
    }
}
