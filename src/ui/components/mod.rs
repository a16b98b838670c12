//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to a `String` buffer and
//! returns the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: title, status and favorites count
//! - [`search`]: search input box
//! - [`table`]: result cards (marker, TITLE, YEAR, TYPE)
//! - [`empty`]: message in place of an empty result list
//! - [`footer`]: keybinding hints
//! - [`details`]: detail modal of one card
//! - [`favorites`]: favorites overlay

mod details;
mod empty;
mod favorites;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayView, UIViewModel};

use details::render_details;
use empty::render_empty_state;
use favorites::render_favorites;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Screen rectangle of a modal, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalArea {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl ModalArea {
    /// Centered rectangle leaving a margin around the pane.
    #[must_use]
    pub fn centered(rows: usize, cols: usize) -> Self {
        let width = cols.saturating_sub(8).clamp(20.min(cols), 100);
        let height = rows.saturating_sub(4).max(6.min(rows));
        Self {
            top: (rows.saturating_sub(height)) / 2 + 1,
            left: (cols.saturating_sub(width)) / 2 + 1,
            width,
            height,
        }
    }
}

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the main surface.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Table Headers]
/// [Table Rows | Empty State]
/// [Border]
/// [Footer]
/// ```
pub fn render_main(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(out, current_row, theme, cols);
        render_table_rows(out, current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows;
    render_border(out, footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders the modal on top of the main surface.
pub fn render_overlay(out: &mut String, overlay: &OverlayView, theme: &Theme, cols: usize, rows: usize) {
    let area = ModalArea::centered(rows, cols);
    match overlay {
        OverlayView::Details(view) => render_details(out, area, view, theme),
        OverlayView::Favorites(view) => render_favorites(out, area, view, theme),
    }
}
