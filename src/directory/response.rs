//! Interpretation of directory responses.
//!
//! Search responses never fail outward: whatever goes wrong, the caller gets a
//! list (possibly empty) and the problem goes to the log. Detail responses
//! fail with a [`DirectoryError`] that the detail modal can show.

use crate::directory::request::HttpReply;
use crate::domain::error::DETAILS_NOT_AVAILABLE;
use crate::domain::{DirectoryError, MovieDetail, MovieSummary};
use serde::Deserialize;
use serde_json::Value;

/// Turns a search reply into the list of summaries it contains.
///
/// | reply                                    | result            |
/// |------------------------------------------|-------------------|
/// | non-2xx                                  | `[]`, warning     |
/// | body is not JSON                         | `[]`, warning     |
/// | JSON without `Search` ("not found")      | `[]`              |
/// | `Search` is not an array                 | `[]`, warning     |
/// | `Search` array                           | entries that decode, in order; a warning per skipped entry |
#[must_use]
pub fn parse_search(reply: &HttpReply) -> Vec<MovieSummary> {
    if !reply.is_success() {
        tracing::warn!(
            status = reply.status,
            reason = %String::from_utf8_lossy(&reply.body),
            "search request failed"
        );
        return Vec::new();
    }

    let body: Value = match serde_json::from_slice(&reply.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "search response is not JSON");
            return Vec::new();
        }
    };

    let Some(results) = body.get("Search") else {
        let upstream_error = body.get("Error").and_then(Value::as_str).unwrap_or_default();
        tracing::debug!(upstream_error, "search response has no results");
        return Vec::new();
    };

    let Some(entries) = results.as_array() else {
        tracing::warn!("search results are not an array");
        return Vec::new();
    };

    let movies: Vec<MovieSummary> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            MovieSummary::deserialize(entry)
                .map_err(|e| tracing::warn!(index, error = %e, "skipping malformed search entry"))
                .ok()
        })
        .collect();
    tracing::debug!(count = movies.len(), total = entries.len(), "search results parsed");
    movies
}

/// Turns a detail reply into a [`MovieDetail`].
///
/// Success requires an explicit `"Response": "True"`; anything else is a
/// refusal even when the HTTP exchange itself worked.
///
/// # Errors
///
/// - [`DirectoryError::FetchFailed`] for non-2xx replies
/// - [`DirectoryError::Malformed`] when the body is not a JSON object or the
///   record cannot be decoded
/// - [`DirectoryError::DetailsUnavailable`] when the directory refuses
pub fn parse_details(reply: &HttpReply) -> Result<MovieDetail, DirectoryError> {
    if !reply.is_success() {
        return Err(DirectoryError::FetchFailed(format!(
            "status {}: {}",
            reply.status,
            String::from_utf8_lossy(&reply.body)
        )));
    }

    let body: Value = serde_json::from_slice(&reply.body)
        .map_err(|e| DirectoryError::Malformed(e.to_string()))?;

    if !body.is_object() {
        return Err(DirectoryError::Malformed("expected a JSON object".to_string()));
    }

    if body.get("Response").and_then(Value::as_str) != Some("True") {
        let message = body
            .get("Error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DETAILS_NOT_AVAILABLE);
        return Err(DirectoryError::DetailsUnavailable(message.to_string()));
    }

    serde_json::from_value(body).map_err(|e| DirectoryError::Malformed(e.to_string()))
}
