//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It is owned by
//! the plugin shim and mutated only through
//! [`handle_event`](crate::app::handle_event).
//!
//! # State Components
//!
//! - **Search**: query text, debounce timer, committed term
//! - **Results**: one [`ResultCard`] per search hit, each with its own lazily
//!   loaded detail panel
//! - **Favorites**: persisted list plus the overlay that browses it
//! - **Scroll lock**: set while any modal is open
//! - **Request sequencing**: only the newest search response is applied
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{AppState, SearchController};
//! use marquee::directory::DirectoryClient;
//! use marquee::ui::Theme;
//! use std::time::Duration;
//!
//! let search = SearchController::new("Avengers", Duration::from_millis(600));
//! let state = AppState::new(DirectoryClient::default(), search, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.favorites_label, "Favorites (0)");
//! ```

use super::actions::Action;
use super::cards::{replace_cards, ResultCard};
use super::modes::{Focus, Surface};
use super::observer::{Observers, StateChange};
use super::overlay::FavoritesOverlay;
use super::search::SearchController;
use super::timers::TimerQueue;
use crate::directory::{DirectoryClient, HttpReply, RequestId};
use crate::storage::FavoritesStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailsBody, DetailsView, DisplayItem, EmptyState, FavoriteRow, FavoritesView, FooterInfo,
    HeaderInfo, OverlayView, SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

pub const NO_RESULTS: &str = "No movies found.";
/// Shown under an empty result list when requests carry no API key.
pub const MISSING_API_KEY: &str = "Set api_key in the plugin configuration; OMDb refuses keyless requests";
pub const NO_FAVORITES: &str = "No favorites yet. Add movies to favorites to see them here.";
pub const LOADING_DETAILS: &str = "Loading details…";

/// Rows taken by everything except the result list: blank line, header,
/// border, search box (3), column headers, border, footer.
const CHROME_ROWS: usize = 9;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Where keys go on the main surface.
    pub focus: Focus,

    pub search: SearchController,

    /// Host timers backing the search debounce.
    pub timers: TimerQueue,

    /// Cards of the most recent applied search response.
    pub results: Vec<ResultCard>,

    /// Zero-based index of the selected card within `results`.
    pub selected_index: usize,

    pub favorites: FavoritesStore,
    pub overlay: FavoritesOverlay,

    /// Set while a modal is open; the result cursor does not move.
    pub scroll_locked: bool,

    pub theme: Theme,

    client: DirectoryClient,
    next_request: u64,

    /// Newest search issued and not yet answered.
    pending_search: Option<RequestId>,

    /// The host granted the permissions needed to reach the directory.
    ready: bool,

    observers: Observers,
}

impl AppState {
    /// Creates a state with no results and in-memory favorites.
    ///
    /// Nothing is fetched until [`AppState::mark_ready`].
    #[must_use]
    pub fn new(client: DirectoryClient, search: SearchController, theme: Theme) -> Self {
        Self {
            focus: Focus::Search,
            search,
            timers: TimerQueue::new(),
            results: Vec::new(),
            selected_index: 0,
            favorites: FavoritesStore::default(),
            overlay: FavoritesOverlay::default(),
            scroll_locked: false,
            theme,
            client,
            next_request: 0,
            pending_search: None,
            ready: false,
            observers: Observers::default(),
        }
    }

    /// Registers an observer for [`StateChange`] notifications.
    pub fn subscribe(&mut self, observer: impl FnMut(&StateChange) + 'static) {
        self.observers.subscribe(observer);
    }

    /// Replaces the favorites store, typically once durable storage is
    /// reachable.
    pub fn attach_favorites(&mut self, favorites: FavoritesStore) {
        self.favorites = favorites;
        self.overlay.clamp(self.favorites.len());
        self.notify(StateChange::FavoritesChanged {
            count: self.favorites.len(),
        });
    }

    /// Allows network access and searches the committed query.
    pub fn mark_ready(&mut self) -> Option<Action> {
        self.ready = true;
        let term = self.search.committed().to_string();
        self.issue_search(term)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether a search response is still outstanding.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Topmost surface, which decides how keys are interpreted.
    #[must_use]
    pub fn surface(&self) -> Surface {
        if self.overlay.is_open() {
            Surface::Favorites
        } else if self.selected_card().is_some_and(|c| c.details.is_open()) {
            Surface::Details
        } else {
            Surface::Main(self.focus)
        }
    }

    /// Starts a search for `term`, superseding any search in flight.
    ///
    /// Before [`AppState::mark_ready`] the term is only committed; the ready
    /// transition searches it.
    pub fn issue_search(&mut self, term: String) -> Option<Action> {
        self.notify(StateChange::QueryCommitted { term: term.clone() });
        if !self.ready {
            tracing::debug!(query = %term, "search deferred until ready");
            return None;
        }
        let id = self.next_request_id();
        if let Some(superseded) = self.pending_search.replace(id) {
            tracing::debug!(%superseded, request = %id, "search superseded");
        }
        tracing::debug!(query = %term, request = %id, "issuing search");
        Some(Action::Fetch(self.client.search_request(&term, id)))
    }

    /// Applies a search response. Responses other than the newest issued
    /// search are discarded; returns whether the results changed.
    pub fn apply_search_response(&mut self, id: RequestId, reply: &HttpReply) -> bool {
        if self.pending_search != Some(id) {
            tracing::debug!(request = %id, pending = ?self.pending_search, "discarding stale search response");
            return false;
        }
        self.pending_search = None;

        let movies = self.client.complete_search(reply);
        let old = std::mem::take(&mut self.results);
        self.results = replace_cards(old, movies, &mut self.scroll_locked);
        self.selected_index = self
            .results
            .iter()
            .position(|c| c.details.is_open())
            .unwrap_or(0);

        tracing::debug!(request = %id, count = self.results.len(), "results replaced");
        self.notify(StateChange::ResultsReplaced {
            count: self.results.len(),
        });
        true
    }

    /// Applies a detail response to the card that asked for it. Returns
    /// `false` when no card is waiting for `id`.
    pub fn apply_details_response(&mut self, id: RequestId, movie_id: &str, reply: &HttpReply) -> bool {
        let Some(card) = self
            .results
            .iter_mut()
            .find(|c| c.movie.id == movie_id && c.details.pending() == Some(id))
        else {
            tracing::debug!(request = %id, %movie_id, "no card waiting for detail response");
            return false;
        };

        let outcome = self.client.complete_details(reply);
        let ok = outcome.is_ok();
        card.details.apply(id, outcome);
        self.notify(StateChange::DetailsSettled {
            movie_id: movie_id.to_string(),
            ok,
        });
        true
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&ResultCard> {
        self.results.get(self.selected_index)
    }

    /// Moves the cursor of the topmost list down, wrapping to the top.
    ///
    /// The result list does not move while the scroll lock is held.
    pub fn move_selection_down(&mut self) {
        if self.overlay.is_open() {
            self.overlay.move_down(self.favorites.len());
            return;
        }
        if self.scroll_locked || self.results.is_empty() {
            tracing::trace!(locked = self.scroll_locked, "result cursor not moved");
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the cursor of the topmost list up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.overlay.is_open() {
            self.overlay.move_up(self.favorites.len());
            return;
        }
        if self.scroll_locked || self.results.is_empty() {
            tracing::trace!(locked = self.scroll_locked, "result cursor not moved");
            return;
        }
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.results.len() - 1);
    }

    /// Opens the selected card's detail modal, fetching details if needed.
    pub fn open_details(&mut self) -> Option<Action> {
        let next_request = &mut self.next_request;
        let card = self.results.get_mut(self.selected_index)?;
        let id = card.details.open(&mut self.scroll_locked, || {
            *next_request += 1;
            RequestId(*next_request)
        })?;
        tracing::debug!(movie_id = %card.movie.id, request = %id, "fetching details");
        Some(Action::Fetch(self.client.details_request(&card.movie.id, id)))
    }

    pub fn close_details(&mut self) {
        if let Some(card) = self.results.get_mut(self.selected_index) {
            card.details.close(&mut self.scroll_locked);
        }
    }

    /// Toggles the selected card's favorite status. Returns `false` when no
    /// card is selected.
    pub fn toggle_favorite(&mut self) -> bool {
        let Some(movie) = self.selected_card().map(|c| c.movie.clone()) else {
            return false;
        };
        let now_favorite = self.favorites.toggle(&movie);
        tracing::debug!(movie_id = %movie.id, now_favorite, "favorite toggled");
        self.overlay.clamp(self.favorites.len());
        self.notify(StateChange::FavoritesChanged {
            count: self.favorites.len(),
        });
        true
    }

    pub fn open_favorites(&mut self) {
        self.overlay.open(&mut self.scroll_locked);
    }

    pub fn close_favorites(&mut self) {
        self.overlay.close(&mut self.scroll_locked);
    }

    /// Removes the favorite under the overlay cursor.
    pub fn remove_selected_favorite(&mut self) -> bool {
        let Some(id) = self.overlay.remove_selected(&mut self.favorites) else {
            return false;
        };
        tracing::debug!(movie_id = %id, "favorite removed from overlay");
        self.notify(StateChange::FavoritesChanged {
            count: self.favorites.len(),
        });
        true
    }

    fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn notify(&mut self, change: StateChange) {
        self.observers.notify(&change);
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The visible window of cards is centered on the selection and shifted
    /// to stay full near either end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.results.len());
        if visible_end - visible_start < available_rows && self.results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.search.committed().trim();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);

        let display_items = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, card)| {
                self.compute_display_item(card, visible_start + offset, cols, matcher.as_ref(), query)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: SearchBarInfo {
                query: self.search.input().to_string(),
                is_focused: self.surface() == Surface::Main(Focus::Search),
                is_typing: self.search.is_pending(),
            },
            empty_state: self.compute_empty_state(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_display_item(
        &self,
        card: &ResultCard,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
        query: &str,
    ) -> DisplayItem {
        // marker, year and type columns
        const FIXED_COLUMNS: usize = 24;

        let max_title = cols.saturating_sub(FIXED_COLUMNS).max(8);
        let title = truncate(&card.movie.title, max_title);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| highlight_ranges(&title, query, m));

        DisplayItem {
            title,
            year: card.movie.year.clone(),
            kind: card.movie.kind.clone(),
            is_selected: absolute_idx == self.selected_index,
            is_favorite: self.favorites.contains(&card.movie.id),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let status = if self.search.is_pending() {
            Some("typing…".to_string())
        } else if self.is_searching() {
            Some("searching…".to_string())
        } else {
            None
        };
        HeaderInfo {
            title: format!(" Marquee ({}) ", self.results.len()),
            favorites_label: favorites_label(self.favorites.len()),
            status,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.surface() {
            Surface::Main(Focus::Search) => {
                "Type to search  Enter: search now  Ctrl+l: clear  Tab: results"
            }
            Surface::Main(Focus::Results) => {
                "j/k: navigate  Enter: details  f: favorite  F: favorites  /: search  c: clear  q: quit"
            }
            Surface::Details => "f: favorite  Esc/q/Enter: close",
            Surface::Favorites => "j/k: navigate  x: remove  Esc/q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.results.is_empty() {
            return None;
        }
        if !self.is_ready() {
            return Some(EmptyState {
                message: "Waiting for permissions".to_string(),
                subtitle: "Grant web access to reach the movie directory".to_string(),
            });
        }
        if self.pending_search.is_some() {
            return Some(EmptyState {
                message: "Searching…".to_string(),
                subtitle: self.search.committed().to_string(),
            });
        }
        let subtitle = if !self.client.has_api_key() {
            MISSING_API_KEY.to_string()
        } else if self.search.committed().is_empty() {
            "Type a title to search".to_string()
        } else {
            format!("Nothing matched \"{}\"", self.search.committed())
        };
        Some(EmptyState {
            message: NO_RESULTS.to_string(),
            subtitle,
        })
    }

    fn compute_overlay(&self) -> Option<OverlayView> {
        match self.surface() {
            Surface::Favorites => Some(OverlayView::Favorites(self.compute_favorites_view())),
            Surface::Details => self
                .selected_card()
                .map(|card| OverlayView::Details(self.compute_details_view(card))),
            Surface::Main(_) => None,
        }
    }

    fn compute_details_view(&self, card: &ResultCard) -> DetailsView {
        let body = if let Some(error) = card.details.error() {
            DetailsBody::Error(error.to_string())
        } else if let Some(detail) = card.details.detail() {
            DetailsBody::Fields {
                fields: detail
                    .fields()
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value.to_string()))
                    .collect(),
                ratings: detail
                    .ratings
                    .iter()
                    .map(|r| format!("{}: {}", r.source, r.value))
                    .collect(),
            }
        } else {
            DetailsBody::Loading
        };

        DetailsView {
            heading: format!("{} ({})", card.movie.title, card.movie.year),
            kind: card.movie.kind.clone(),
            poster: card.movie.poster.display().to_string(),
            is_favorite: self.favorites.contains(&card.movie.id),
            body,
        }
    }

    fn compute_favorites_view(&self) -> FavoritesView {
        let rows = self
            .favorites
            .items()
            .iter()
            .enumerate()
            .map(|(idx, movie)| FavoriteRow {
                title: movie.title.clone(),
                year: movie.year.clone(),
                kind: movie.kind.clone(),
                is_selected: idx == self.overlay.selected(),
            })
            .collect();

        FavoritesView {
            title: favorites_label(self.favorites.len()),
            rows,
            empty_message: self.favorites.is_empty().then(|| NO_FAVORITES.to_string()),
        }
    }
}

fn favorites_label(count: usize) -> String {
    format!("Favorites ({count})")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Coalesces fuzzy match positions of `query` in `text` into
/// `(start, end)` character ranges.
fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::search::DEFAULT_DEBOUNCE;
    use crate::domain::{MovieSummary, Poster};

    fn state() -> AppState {
        let search = SearchController::new("Avengers", DEFAULT_DEBOUNCE);
        AppState::new(DirectoryClient::default(), search, Theme::default())
    }

    fn movie(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: "2012".to_string(),
            poster: Poster::Missing,
            kind: "movie".to_string(),
        }
    }

    fn with_results(titles: &[(&str, &str)]) -> AppState {
        let mut state = state();
        state.results = titles.iter().map(|(id, t)| ResultCard::new(movie(id, t))).collect();
        state
    }

    #[test]
    fn selection_wraps_and_respects_scroll_lock() {
        let mut state = with_results(&[("tt1", "A"), ("tt2", "B")]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.scroll_locked = true;
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(highlight_ranges("The Avengers", "aven", &matcher), vec![(4, 8)]);
        assert!(highlight_ranges("Alien", "zzz", &matcher).is_empty());
    }

    #[test]
    fn viewmodel_marks_favorites_and_highlights_query() {
        let mut state = with_results(&[("tt0848228", "The Avengers"), ("tt2", "Alien")]);
        state.favorites.add(movie("tt0848228", "The Avengers"));

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 2);
        assert!(vm.display_items[0].is_favorite);
        assert!(!vm.display_items[1].is_favorite);
        assert!(!vm.display_items[0].highlight_ranges.is_empty());
        assert_eq!(vm.header.favorites_label, "Favorites (1)");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_results_after_search_say_no_movies_found() {
        let mut state = state();
        state.ready = true;
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some(NO_RESULTS));
    }

    #[test]
    fn favorites_overlay_shows_empty_message() {
        let mut state = state();
        state.open_favorites();
        let vm = state.compute_viewmodel(24, 80);
        let Some(OverlayView::Favorites(view)) = vm.overlay else {
            panic!("favorites overlay expected");
        };
        assert_eq!(view.title, "Favorites (0)");
        assert_eq!(view.empty_message.as_deref(), Some(NO_FAVORITES));
    }

    #[test]
    fn window_follows_selection_in_long_lists() {
        let titles: Vec<(String, String)> =
            (0..30).map(|i| (format!("tt{i}"), format!("Movie {i}"))).collect();
        let refs: Vec<(&str, &str)> = titles.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let mut state = with_results(&refs);
        state.selected_index = 29;

        let vm = state.compute_viewmodel(20, 80);
        assert_eq!(vm.display_items.len(), 11);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Movie 29");
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("A very long movie title", 10), "A very ...");
    }
}
