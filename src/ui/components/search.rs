//! Search box.

use crate::ui::helpers::{clip, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

const TYPING: &str = "typing…";

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
///   ┌──────────────────────────────────────┐
///   │ Search: aveng▏               typing… │
///   └──────────────────────────────────────┘
/// ```
///
/// The border is highlighted and a cursor drawn while the box has focus.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let indicator = if search.is_typing { TYPING } else { "" };
    let cursor = if search.is_focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(width(indicator) + 2);
    let search_text = clip(&format!(" Search: {}{cursor}", search.query), room);
    let padding = inner_width.saturating_sub(width(&search_text) + width(indicator) + 1);

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&search_text);
    pad(out, padding);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(indicator);
    out.push(' ');
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(border));
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
