//! Favorites overlay.

use crate::ui::helpers::{clip, draw_box, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FavoritesView;

use super::ModalArea;

/// Renders the overlay inside `area`. Rows beyond the box are not drawn;
/// the window scrolls to keep the selected row visible.
pub fn render_favorites(out: &mut String, area: ModalArea, view: &FavoritesView, theme: &Theme) {
    draw_box(out, area.top, area.left, area.width, area.height, &theme.colors.overlay_border);

    let inner = area.width.saturating_sub(4);
    let col = area.left + 2;

    position_cursor(out, area.top + 1, col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.favorite_fg));
    out.push_str(&format!("★ {}", view.title));
    out.push_str(Theme::reset());

    if let Some(message) = &view.empty_message {
        position_cursor(out, area.top + 3, col);
        out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
        out.push_str(&clip(message, inner));
        out.push_str(Theme::reset());
        return;
    }

    let visible = area.height.saturating_sub(4).max(1);
    let selected = view.rows.iter().position(|r| r.is_selected).unwrap_or(0);
    let start = (selected + 1).saturating_sub(visible);

    for (offset, fav) in view.rows.iter().skip(start).take(visible).enumerate() {
        position_cursor(out, area.top + 3 + offset, col);
        if fav.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
        let suffix = format!("  {} · {}", fav.year, fav.kind);
        let title = clip(&fav.title, inner.saturating_sub(width(&suffix)));
        out.push_str(&title);
        out.push_str(&suffix);
        pad(out, inner.saturating_sub(width(&title) + width(&suffix)));
        out.push_str(Theme::reset());
    }
}
