//! Empty state shown in place of the result list.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    pad(out, msg_padding);
    out.push_str(&empty.message);
    out.push_str(Theme::reset());

    let sub_len = width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&empty.subtitle);
    out.push_str(Theme::reset());

    row + 2
}
