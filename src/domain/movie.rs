//! Movie records as delivered by the OMDb directory.
//!
//! Field names on the wire follow OMDb (`Title`, `imdbID`, ...). The same
//! shape is used for the favorites file, so a stored favorite is exactly the
//! summary object the search returned.

use serde::{Deserialize, Serialize};

/// Upstream sentinel for "this title has no poster".
pub const NO_POSTER: &str = "N/A";

/// Poster reference of a title.
///
/// OMDb sends a URL or the literal `"N/A"`. The sentinel is decoded into
/// [`Poster::Missing`] and encoded back to `"N/A"`, so records survive a
/// storage round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Poster {
    /// Absolute URL of the poster image.
    Url(String),
    /// The directory has no image for this title.
    #[default]
    Missing,
}

impl From<String> for Poster {
    fn from(value: String) -> Self {
        if value == NO_POSTER || value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Url(value)
        }
    }
}

impl From<Poster> for String {
    fn from(value: Poster) -> Self {
        match value {
            Poster::Url(url) => url,
            Poster::Missing => NO_POSTER.to_string(),
        }
    }
}

impl Poster {
    /// Text used wherever the poster would be shown.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Missing => "No image",
        }
    }
}

/// Minimal record returned by a title search.
///
/// Immutable once received. Two summaries describe the same title when their
/// ids match; see [`MovieSummary::same_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: Poster,
    #[serde(rename = "Type", default)]
    pub kind: String,
}

impl MovieSummary {
    /// Identity comparison by directory id.
    #[must_use]
    pub fn same_title(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// One entry of the `Ratings` array, e.g. `Rotten Tomatoes: 91%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full record returned by a lookup by id.
///
/// Text fields OMDb leaves out (it does for some series and episodes) decode
/// as empty strings rather than failing the whole lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Language", default)]
    pub language: String,
    #[serde(rename = "Awards", default)]
    pub awards: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "BoxOffice", default)]
    pub box_office: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

impl MovieDetail {
    /// Labelled fields in display order. Box office only appears when known.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("Plot", self.plot.as_str()),
            ("Genre", self.genre.as_str()),
            ("Director", self.director.as_str()),
            ("Actors", self.actors.as_str()),
            ("Released", self.released.as_str()),
            ("Runtime", self.runtime.as_str()),
            ("Language", self.language.as_str()),
            ("Awards", self.awards.as_str()),
            ("IMDB Rating", self.imdb_rating.as_str()),
        ];
        if let Some(box_office) = self.box_office.as_deref().filter(|b| !b.is_empty()) {
            fields.push(("Box Office", box_office));
        }
        fields
    }
}
