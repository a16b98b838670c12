//! Shared rendering utilities.
//!
//! Components append ANSI text to a frame buffer (`&mut String`) instead of
//! printing, so a whole frame can be inspected or written at once. Widths
//! are measured in characters; the UI contains no double-width glyphs of its
//! own.

use crate::ui::theme::Theme;

/// Appends a cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Character count of `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Appends `n` spaces.
pub fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

/// Appends `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. Selected rows
/// skip match highlighting so the selection colors stay intact.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Greedy word wrap of `text` into lines of at most `max` characters.
///
/// Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(max);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if line.is_empty() { word.len() } else { width(&line) + 1 + word.len() };
        if needed > max {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws an empty framed box with its top-left corner at `top`, `left`.
pub fn draw_box(out: &mut String, top: usize, left: usize, box_width: usize, height: usize, color: &str) {
    let inner = box_width.saturating_sub(2);
    out.push_str(&Theme::fg(color));

    position_cursor(out, top, left);
    out.push_str(&format!("╭{}╮", "─".repeat(inner)));
    for row in 1..height.saturating_sub(1) {
        position_cursor(out, top + row, left);
        out.push('│');
        pad(out, inner);
        out.push('│');
    }
    position_cursor(out, top + height.saturating_sub(1), left);
    out.push_str(&format!("╰{}╯", "─".repeat(inner)));

    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Earth's mightiest heroes must come together", 16),
            vec!["Earth's", "mightiest heroes", "must come", "together"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "The Avengers", &[(4, 8)], &theme, false);
        assert!(out.starts_with("The "));
        assert!(out.contains("Aven"));
        assert!(out.ends_with("gers"));

        let mut plain = String::new();
        push_highlighted(&mut plain, "The Avengers", &[(4, 8)], &theme, true);
        assert_eq!(plain, "The Avengers");
    }
}
