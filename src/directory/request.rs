//! Outgoing directory requests and the tags that route their responses.
//!
//! The host performs HTTP on our behalf and hands the response back later,
//! together with a string map we attached to the request. [`RequestTag`]
//! is what we put in that map.

use std::collections::BTreeMap;
use std::fmt;

const CONTEXT_KIND: &str = "marquee.kind";
const CONTEXT_REQUEST: &str = "marquee.request";
const CONTEXT_MOVIE: &str = "marquee.movie";

const KIND_SEARCH: &str = "search";
const KIND_DETAILS: &str = "details";

/// Monotonic identifier of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// Title search.
    Search,
    /// Full record lookup for one title.
    Details {
        /// Directory id of the title.
        movie_id: String,
    },
}

/// Routing information carried alongside a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub id: RequestId,
    pub kind: RequestKind,
}

impl RequestTag {
    /// Encodes the tag into the host's request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_REQUEST.to_string(), self.id.0.to_string());
        match &self.kind {
            RequestKind::Search => {
                context.insert(CONTEXT_KIND.to_string(), KIND_SEARCH.to_string());
            }
            RequestKind::Details { movie_id } => {
                context.insert(CONTEXT_KIND.to_string(), KIND_DETAILS.to_string());
                context.insert(CONTEXT_MOVIE.to_string(), movie_id.clone());
            }
        }
        context
    }

    /// Decodes a tag from a response context.
    ///
    /// Returns `None` for contexts that did not originate from
    /// [`RequestTag::to_context`].
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let id = context.get(CONTEXT_REQUEST)?.parse::<u64>().ok()?;
        let kind = match context.get(CONTEXT_KIND)?.as_str() {
            KIND_SEARCH => RequestKind::Search,
            KIND_DETAILS => RequestKind::Details {
                movie_id: context.get(CONTEXT_MOVIE)?.clone(),
            },
            _ => return None,
        };
        Some(Self {
            id: RequestId(id),
            kind,
        })
    }
}

/// A GET request ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRequest {
    pub url: String,
    pub tag: RequestTag,
}

/// Status and body of a completed host request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Builds `base?k=v&k=v` with every value percent-encoded.
pub(crate) fn build_url(base: &str, params: &[(&str, &str)]) -> String {
    let mut url = base.to_string();
    let mut separator = if base.contains('?') { '&' } else { '?' };
    for (key, value) in params {
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        separator = '&';
    }
    url
}
