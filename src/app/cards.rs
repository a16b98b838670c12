//! Result cards and their lazily loaded detail panels.
//!
//! Every search result becomes a [`ResultCard`]. A card fetches its full
//! record the first time its detail modal opens and keeps it for as long as
//! the card exists; reopening never fetches again unless the previous
//! attempt failed.

use crate::app::scroll::ScrollLock;
use crate::directory::RequestId;
use crate::domain::{DirectoryError, MovieDetail, MovieSummary};
use std::collections::HashMap;

/// Detail modal state of one card.
#[derive(Debug, Default)]
pub struct DetailPanel {
    open: bool,
    loading: bool,
    detail: Option<MovieDetail>,
    error: Option<String>,
    pending: Option<RequestId>,
    lock: Option<ScrollLock>,
}

impl DetailPanel {
    /// Opens the modal and engages the scroll lock.
    ///
    /// Returns the id of a detail request to issue, allocated through
    /// `next_id`, when nothing is cached and nothing is in flight. Opening
    /// an already open panel does nothing.
    pub fn open(
        &mut self,
        lock_flag: &mut bool,
        next_id: impl FnOnce() -> RequestId,
    ) -> Option<RequestId> {
        if self.open {
            return None;
        }
        self.open = true;
        self.lock = Some(ScrollLock::engage(lock_flag));

        if self.detail.is_some() || self.pending.is_some() {
            tracing::debug!(cached = self.detail.is_some(), "detail panel reopened");
            return None;
        }

        let id = next_id();
        self.loading = true;
        self.error = None;
        self.pending = Some(id);
        Some(id)
    }

    /// Settles the in-flight request `id`.
    ///
    /// Returns `false` and changes nothing when `id` is not the request this
    /// panel is waiting for.
    pub fn apply(&mut self, id: RequestId, outcome: Result<MovieDetail, DirectoryError>) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(request = %id, pending = ?self.pending, "ignoring stale detail response");
            return false;
        }
        self.pending = None;
        self.loading = false;
        match outcome {
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(request = %id, error = %e, "detail lookup failed");
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Closes the modal and restores the scroll lock flag.
    pub fn close(&mut self, lock_flag: &mut bool) {
        if !self.open {
            return;
        }
        self.open = false;
        if let Some(lock) = self.lock.take() {
            lock.release(lock_flag);
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<RequestId> {
        self.pending
    }
}

/// One search result with its detail panel.
#[derive(Debug)]
pub struct ResultCard {
    pub movie: MovieSummary,
    pub details: DetailPanel,
}

impl ResultCard {
    #[must_use]
    pub fn new(movie: MovieSummary) -> Self {
        Self {
            movie,
            details: DetailPanel::default(),
        }
    }
}

/// Builds the card list for a new result set.
///
/// A card whose id appears again keeps its detail panel (the first
/// occurrence wins when the directory repeats an id). Cards that disappear
/// are dropped; an open panel among them is closed first so its scroll lock
/// is released.
pub fn replace_cards(
    old: Vec<ResultCard>,
    movies: Vec<MovieSummary>,
    lock_flag: &mut bool,
) -> Vec<ResultCard> {
    let mut previous: HashMap<String, DetailPanel> = HashMap::with_capacity(old.len());
    for card in old {
        previous.entry(card.movie.id).or_insert(card.details);
    }

    let cards: Vec<ResultCard> = movies
        .into_iter()
        .map(|movie| {
            let details = previous.remove(&movie.id).unwrap_or_default();
            ResultCard { movie, details }
        })
        .collect();

    for (movie_id, mut panel) in previous {
        if panel.is_open() {
            tracing::debug!(%movie_id, "closing detail panel of a dropped card");
            panel.close(lock_flag);
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Poster;

    fn movie(id: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Title {id}"),
            year: "2012".to_string(),
            poster: Poster::Missing,
            kind: "movie".to_string(),
        }
    }

    fn detail(id: &str) -> MovieDetail {
        MovieDetail {
            summary: movie(id),
            plot: "Plot".to_string(),
            genre: String::new(),
            director: "Joss Whedon".to_string(),
            actors: String::new(),
            released: String::new(),
            runtime: String::new(),
            language: String::new(),
            awards: String::new(),
            imdb_rating: "8.0".to_string(),
            box_office: None,
            ratings: Vec::new(),
        }
    }

    #[test]
    fn first_open_fetches_and_reopen_uses_cache() {
        let mut locked = false;
        let mut panel = DetailPanel::default();
        let mut issued = 0;

        let id = panel.open(&mut locked, || {
            issued += 1;
            RequestId(7)
        });
        assert_eq!(id, Some(RequestId(7)));
        assert!(panel.is_loading());
        assert!(locked);

        assert!(panel.apply(RequestId(7), Ok(detail("tt1"))));
        panel.close(&mut locked);
        assert!(!locked);

        assert_eq!(panel.open(&mut locked, || RequestId(8)), None);
        assert_eq!(issued, 1);
        assert_eq!(panel.detail().map(|d| d.director.as_str()), Some("Joss Whedon"));
    }

    #[test]
    fn reopening_while_loading_does_not_refetch() {
        let mut locked = false;
        let mut panel = DetailPanel::default();
        assert!(panel.open(&mut locked, || RequestId(1)).is_some());
        panel.close(&mut locked);
        assert_eq!(panel.open(&mut locked, || RequestId(2)), None);
        assert_eq!(panel.pending(), Some(RequestId(1)));
    }

    #[test]
    fn failure_shows_message_and_reopen_retries() {
        let mut locked = false;
        let mut panel = DetailPanel::default();
        panel.open(&mut locked, || RequestId(1));
        panel.apply(
            RequestId(1),
            Err(DirectoryError::FetchFailed("status 500".into())),
        );
        assert_eq!(panel.error(), Some("Failed to fetch details"));
        assert!(!panel.is_loading());

        panel.close(&mut locked);
        assert_eq!(panel.open(&mut locked, || RequestId(2)), Some(RequestId(2)));
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn mismatched_response_is_ignored() {
        let mut locked = false;
        let mut panel = DetailPanel::default();
        panel.open(&mut locked, || RequestId(3));
        assert!(!panel.apply(RequestId(2), Ok(detail("tt1"))));
        assert!(panel.is_loading());
    }

    #[test]
    fn replacement_keeps_state_of_surviving_cards() {
        let mut locked = false;
        let mut kept = ResultCard::new(movie("tt1"));
        kept.details.open(&mut locked, || RequestId(1));
        kept.details.apply(RequestId(1), Ok(detail("tt1")));
        kept.details.close(&mut locked);

        let mut dropped = ResultCard::new(movie("tt2"));
        dropped.details.open(&mut locked, || RequestId(2));
        assert!(locked);

        let cards = replace_cards(vec![kept, dropped], vec![movie("tt3"), movie("tt1")], &mut locked);

        assert_eq!(cards.len(), 2);
        assert!(cards[0].details.detail().is_none());
        assert!(cards[1].details.detail().is_some());
        assert!(!locked);
    }
}
