//! Header bar: app title and status on the left, favorites count on the right.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///  Marquee (10)  searching…                          ★ Favorites (2)
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let left = match &header.status {
        Some(status) => format!("{}  {status}", header.title),
        None => header.title.clone(),
    };
    let right = format!("★ {} ", header.favorites_label);
    let gap = cols.saturating_sub(width(&left) + width(&right));

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    out.push_str(&header.title);
    if let Some(status) = &header.status {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("  ");
        out.push_str(status);
    }
    pad(out, gap);
    out.push_str(&Theme::fg(&theme.colors.favorite_fg));
    out.push_str(&right);

    out.push_str(Theme::reset());
    row + 1
}
