//! Client for the remote movie directory (OMDb).
//!
//! The plugin cannot block on HTTP: the host performs the request and reports
//! back with an event. Each operation is therefore split in two halves that
//! are both pure:
//!
//! ```text
//! search_request(term)    ──► host web_request ──► complete_search(reply)  -> Vec<MovieSummary>
//! details_request(id)     ──► host web_request ──► complete_details(reply) -> Result<MovieDetail>
//! ```
//!
//! # Modules
//!
//! - [`request`]: URLs, request ids and routing tags
//! - [`response`]: response interpretation and failure mapping

pub mod request;
pub mod response;

pub use request::{DirectoryRequest, HttpReply, RequestId, RequestKind, RequestTag};

use crate::domain::{DirectoryError, MovieDetail, MovieSummary};
use request::build_url;

/// Default OMDb endpoint.
pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Builds directory requests and interprets their replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryClient {
    base_url: String,
    api_key: Option<String>,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

impl DirectoryClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Whether requests will carry an API key.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search-by-title request. An empty `term` is sent as `s=`.
    #[must_use]
    pub fn search_request(&self, term: &str, id: RequestId) -> DirectoryRequest {
        let mut params = self.key_param();
        params.push(("s", term));
        DirectoryRequest {
            url: build_url(&self.base_url, &params),
            tag: RequestTag {
                id,
                kind: RequestKind::Search,
            },
        }
    }

    /// Lookup-by-id request asking for the full plot.
    #[must_use]
    pub fn details_request(&self, movie_id: &str, id: RequestId) -> DirectoryRequest {
        let mut params = self.key_param();
        params.push(("i", movie_id));
        params.push(("plot", "full"));
        DirectoryRequest {
            url: build_url(&self.base_url, &params),
            tag: RequestTag {
                id,
                kind: RequestKind::Details {
                    movie_id: movie_id.to_string(),
                },
            },
        }
    }

    /// Completes a search. Always yields a list; see [`response::parse_search`].
    #[must_use]
    pub fn complete_search(&self, reply: &HttpReply) -> Vec<MovieSummary> {
        response::parse_search(reply)
    }

    /// Completes a detail lookup.
    ///
    /// # Errors
    ///
    /// See [`response::parse_details`].
    pub fn complete_details(&self, reply: &HttpReply) -> Result<MovieDetail, DirectoryError> {
        response::parse_details(reply)
    }

    fn key_param(&self) -> Vec<(&str, &str)> {
        self.api_key
            .as_deref()
            .map(|key| vec![("apikey", key)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DirectoryClient {
        DirectoryClient::new(DEFAULT_API_URL, Some("k3y".to_string()))
    }

    #[test]
    fn search_url_carries_key_and_escaped_term() {
        let request = client().search_request("star wars", RequestId(1));
        assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k3y&s=star%20wars");
        assert_eq!(request.tag.kind, RequestKind::Search);
    }

    #[test]
    fn empty_search_term_is_sent_as_is() {
        let request = client().search_request("", RequestId(2));
        assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k3y&s=");
    }

    #[test]
    fn details_url_requests_full_plot() {
        let request = client().details_request("tt0848228", RequestId(3));
        assert_eq!(
            request.url,
            "https://www.omdbapi.com/?apikey=k3y&i=tt0848228&plot=full"
        );
        assert_eq!(request.tag.id, RequestId(3));
    }

    #[test]
    fn blank_key_is_omitted() {
        let client = DirectoryClient::new(DEFAULT_API_URL, Some("  ".to_string()));
        assert!(!client.has_api_key());
        assert_eq!(
            client.search_request("up", RequestId(4)).url,
            "https://www.omdbapi.com/?s=up"
        );
    }
}
