//! Detail modal for one result card.

use crate::app::state::LOADING_DETAILS;
use crate::ui::helpers::{clip, draw_box, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailsBody, DetailsView};

use super::ModalArea;

/// Widest label ("IMDB Rating") plus ": ".
const LABEL_WIDTH: usize = 13;

/// Renders the modal inside `area`.
///
/// ```text
/// ╭───────────────────────────────────────╮
/// │ The Avengers (2012)              ★    │
/// │ movie · No image                      │
/// │                                       │
/// │ Plot:        Earth's mightiest heroes │
/// │              must come together...    │
/// │ Director:    Joss Whedon              │
/// │ ...                                   │
/// ╰───────────────────────────────────────╯
/// ```
pub fn render_details(out: &mut String, area: ModalArea, view: &DetailsView, theme: &Theme) {
    draw_box(out, area.top, area.left, area.width, area.height, &theme.colors.overlay_border);

    let inner = area.width.saturating_sub(4);
    let last_row = area.top + area.height.saturating_sub(2);
    let mut row = area.top + 1;
    let col = area.left + 2;

    position_cursor(out, row, col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&clip(&view.heading, inner.saturating_sub(2)));
    if view.is_favorite {
        out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        out.push_str(" ★");
    }
    out.push_str(Theme::reset());
    row += 1;

    position_cursor(out, row, col);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&clip(&format!("{} · {}", view.kind, view.poster), inner));
    out.push_str(Theme::reset());
    row += 2;

    let mut lines: Vec<Line> = Vec::new();
    match &view.body {
        DetailsBody::Loading => lines.push(Line::Plain(LOADING_DETAILS.to_string())),
        DetailsBody::Error(message) => lines.extend(wrap(message, inner).into_iter().map(Line::Error)),
        DetailsBody::Fields { fields, ratings } => {
            let value_width = inner.saturating_sub(LABEL_WIDTH);
            for (label, value) in fields {
                let mut wrapped = wrap(value, value_width).into_iter();
                lines.push(Line::Labeled(format!("{label}:"), wrapped.next().unwrap_or_default()));
                lines.extend(wrapped.map(Line::Continued));
            }
            if !ratings.is_empty() {
                lines.push(Line::Labeled("Ratings:".to_string(), String::new()));
                lines.extend(ratings.iter().map(|r| Line::Plain(format!("  {r}"))));
            }
        }
    }

    for line in lines.into_iter().take((last_row + 1).saturating_sub(row)) {
        position_cursor(out, row, col);
        let (text, color) = match line {
            Line::Labeled(label, text) => {
                out.push_str(Theme::bold());
                out.push_str(&Theme::fg(&theme.colors.header_fg));
                out.push_str(&format!("{label:<w$}", w = LABEL_WIDTH));
                out.push_str(Theme::reset());
                (text, &theme.colors.text_normal)
            }
            Line::Continued(text) => {
                out.push_str(&" ".repeat(LABEL_WIDTH));
                (text, &theme.colors.text_normal)
            }
            Line::Plain(text) => (text, &theme.colors.text_normal),
            Line::Error(text) => (text, &theme.colors.error_fg),
        };
        out.push_str(&Theme::fg(color));
        out.push_str(&text);
        out.push_str(Theme::reset());
        row += 1;
    }
}

enum Line {
    /// First line of a field.
    Labeled(String, String),
    /// Wrapped remainder of a field value.
    Continued(String),
    Plain(String),
    Error(String),
}
