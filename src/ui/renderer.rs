//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI String → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Zellij clears the pane before calling the plugin's `render`, so the frame
/// only positions and paints.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Renders a view model into one ANSI frame.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    components::render_main(&mut out, vm, theme, cols, rows);
    if let Some(overlay) = &vm.overlay {
        components::render_overlay(&mut out, overlay, theme, cols, rows);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{
        DetailsBody, DetailsView, DisplayItem, FooterInfo, HeaderInfo, OverlayView, SearchBarInfo,
    };

    fn viewmodel() -> UIViewModel {
        UIViewModel {
            display_items: vec![DisplayItem {
                title: "The Avengers".to_string(),
                year: "2012".to_string(),
                kind: "movie".to_string(),
                is_selected: true,
                is_favorite: true,
                highlight_ranges: vec![],
            }],
            selected_index: 0,
            header: HeaderInfo {
                title: " Marquee (1) ".to_string(),
                favorites_label: "Favorites (1)".to_string(),
                status: None,
            },
            footer: FooterInfo {
                keybindings: "q: quit".to_string(),
            },
            search_bar: SearchBarInfo {
                query: "Avengers".to_string(),
                is_focused: false,
                is_typing: true,
            },
            empty_state: None,
            overlay: None,
        }
    }

    #[test]
    fn frame_contains_main_surface_text() {
        let frame = render_frame(&viewmodel(), &Theme::default(), 24, 80);
        assert!(frame.contains("Favorites (1)"));
        assert!(frame.contains("Search: Avengers"));
        assert!(frame.contains("typing…"));
        assert!(frame.contains("The Avengers"));
        assert!(frame.contains("★ "));
        assert!(frame.contains("q: quit"));
    }

    #[test]
    fn details_modal_lists_fields_and_ratings() {
        let mut vm = viewmodel();
        vm.overlay = Some(OverlayView::Details(DetailsView {
            heading: "The Avengers (2012)".to_string(),
            kind: "movie".to_string(),
            poster: "No image".to_string(),
            is_favorite: false,
            body: DetailsBody::Fields {
                fields: vec![
                    ("Director".to_string(), "Joss Whedon".to_string()),
                    ("Box Office".to_string(), "$623,357,910".to_string()),
                ],
                ratings: vec!["Rotten Tomatoes: 91%".to_string()],
            },
        }));

        let frame = render_frame(&vm, &Theme::default(), 30, 80);
        assert!(frame.contains("The Avengers (2012)"));
        assert!(frame.contains("Director:"));
        assert!(frame.contains("Joss Whedon"));
        assert!(frame.contains("$623,357,910"));
        assert!(frame.contains("Rotten Tomatoes: 91%"));
    }

    #[test]
    fn loading_modal_says_so() {
        let mut vm = viewmodel();
        vm.overlay = Some(OverlayView::Details(DetailsView {
            heading: "Alien (1979)".to_string(),
            kind: "movie".to_string(),
            poster: "No image".to_string(),
            is_favorite: false,
            body: DetailsBody::Loading,
        }));
        let frame = render_frame(&vm, &Theme::default(), 24, 80);
        assert!(frame.contains("Loading details…"));
    }
}
