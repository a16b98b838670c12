//! Result cards as table rows: favorite marker, title, year, type.

use crate::ui::helpers::{self, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const MARKER_WIDTH: usize = 2;
const YEAR_WIDTH: usize = 11;
const TYPE_WIDTH: usize = 9;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(MARKER_WIDTH + YEAR_WIDTH + TYPE_WIDTH)
}

/// Renders the bold column headers at `row`.
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    pad(out, MARKER_WIDTH);
    out.push_str(&format!(
        "{:<tw$}{:<yw$}{:<kw$}",
        "TITLE",
        "YEAR",
        "TYPE",
        tw = title_width(cols),
        yw = YEAR_WIDTH,
        kw = TYPE_WIDTH
    ));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders every item starting at `row` and returns the next free row.
pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// One card. Selected rows get a full-width background; favorites a star.
fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = |out: &mut String| {
        if item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
    };

    position_cursor(out, row, 1);
    base(out);

    if item.is_favorite {
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        }
        out.push_str("★ ");
        base(out);
    } else {
        pad(out, MARKER_WIDTH);
    }

    helpers::push_highlighted(out, &item.title, &item.highlight_ranges, theme, item.is_selected);
    pad(out, title_width(cols).saturating_sub(width(&item.title)));

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&format!(
        "{:<yw$}{:<kw$}",
        item.year,
        item.kind,
        yw = YEAR_WIDTH,
        kw = TYPE_WIDTH
    ));

    let line_len = MARKER_WIDTH + title_width(cols).max(width(&item.title)) + YEAR_WIDTH + TYPE_WIDTH;
    pad(out, cols.saturating_sub(line_len));

    out.push_str(Theme::reset());
    row + 1
}
