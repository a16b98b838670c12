//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; no component
//! looks back into the application state.
//!
//! ```text
//! ┌ header ──────────────────────────── Favorites (N) ┐
//! │ search bar                                        │
//! │ result cards / empty state                        │
//! │ footer                                            │
//! └───────────────────────────────────────────────────┘
//!        overlay (details modal or favorites) on top
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Result cards inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected card within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub search_bar: SearchBarInfo,

    /// Shown instead of the result list when there are no results.
    pub empty_state: Option<EmptyState>,

    /// Modal drawn on top of everything else.
    pub overlay: Option<OverlayView>,
}

/// One result card row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub year: String,
    pub kind: String,
    pub is_selected: bool,
    pub is_favorite: bool,

    /// Character ranges of `title` matching the committed query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// `Favorites (N)`, always visible.
    pub favorites_label: String,

    /// Transient status such as `searching…`.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Keys currently edit the query.
    pub is_focused: bool,

    /// A typed query is waiting out the debounce period.
    pub is_typing: bool,
}

/// Modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    Details(DetailsView),
    Favorites(FavoritesView),
}

/// Detail modal of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    /// `Title (Year)`.
    pub heading: String,
    pub kind: String,
    pub poster: String,
    pub is_favorite: bool,
    pub body: DetailsBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsBody {
    Loading,
    Error(String),
    Fields {
        /// Labelled fields in display order.
        fields: Vec<(String, String)>,
        /// `Source: Value` lines.
        ratings: Vec<String>,
    },
}

/// Favorites overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesView {
    /// `Favorites (N)`.
    pub title: String,
    pub rows: Vec<FavoriteRow>,

    /// Set when there are no favorites.
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRow {
    pub title: String,
    pub year: String,
    pub kind: String,
    pub is_selected: bool,
}
