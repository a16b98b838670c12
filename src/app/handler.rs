//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only function that mutates [`AppState`]. The plugin
//! shim translates host events (keys, timer firings, HTTP results, permission
//! grants) into [`Event`]s, calls the handler, renders if asked to, and
//! executes the returned [`Action`]s.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Ready`
//! - **Search input**: `Char`, `Backspace`, `Submit`, `ClearQuery`
//! - **Focus**: `FocusSearch`, `FocusResults`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Cards**: `OpenDetails`, `CloseDetails`, `ToggleFavorite`
//! - **Favorites overlay**: `ShowFavorites`, `CloseFavorites`, `RemoveFavorite`
//! - **Host completions**: `TimerElapsed`, `DirectoryResponse`
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, Action, AppState, Event, SearchController};
//! use marquee::directory::DirectoryClient;
//! use marquee::ui::Theme;
//! use std::time::Duration;
//!
//! let search = SearchController::new("Avengers", Duration::from_millis(600));
//! let mut state = AppState::new(DirectoryClient::default(), search, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Ready)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use crate::app::modes::Focus;
use crate::app::{Action, AppState};
use crate::directory::{HttpReply, RequestKind, RequestTag};
use crate::domain::error::Result;

/// Events triggered by user input or host completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions were granted; network access may start.
    Ready,

    /// Appends a character to the query (debounced).
    Char(char),
    /// Deletes the last query character (debounced).
    Backspace,
    /// Searches the current query immediately.
    Submit,
    /// Empties the query and searches the empty term.
    ClearQuery,

    FocusSearch,
    FocusResults,

    /// Moves the cursor of the topmost list down.
    KeyDown,
    /// Moves the cursor of the topmost list up.
    KeyUp,

    /// Opens the selected card's detail modal.
    OpenDetails,
    /// Closes the detail modal.
    CloseDetails,
    /// Adds the selected card to favorites, or removes it.
    ToggleFavorite,

    ShowFavorites,
    CloseFavorites,
    /// Removes the favorite under the overlay cursor.
    RemoveFavorite,

    /// Hides the plugin pane.
    CloseFocus,

    /// One host timer fired.
    TimerElapsed,

    /// A directory request completed.
    DirectoryResponse {
        tag: RequestTag,
        reply: HttpReply,
    },
}

/// Processes an event, mutates application state, and returns whether to
/// render plus the actions to execute.
///
/// Timers armed while handling the event are appended as
/// [`Action::SetTimeout`] after any other action.
///
/// # Errors
///
/// No event currently fails; the signature leaves room for storage-backed
/// events that may.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (should_render, mut actions) = dispatch(state, event)?;

    actions.extend(
        state
            .timers
            .drain_requests()
            .into_iter()
            .map(|delay| Action::SetTimeout {
                seconds: delay.as_secs_f64(),
            }),
    );

    Ok((should_render, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Ready => {
            tracing::debug!("plugin ready");
            Ok((true, state.mark_ready().into_iter().collect()))
        }
        Event::Char(c) => {
            state.search.push_char(*c, &mut state.timers);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let changed = state.search.pop_char(&mut state.timers);
            Ok((changed, vec![]))
        }
        Event::Submit => {
            let term = state.search.submit(&mut state.timers);
            Ok((true, state.issue_search(term).into_iter().collect()))
        }
        Event::ClearQuery => {
            let term = state.search.clear(&mut state.timers);
            state.focus = Focus::Search;
            Ok((true, state.issue_search(term).into_iter().collect()))
        }
        Event::FocusSearch => {
            state.focus = Focus::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::OpenDetails => {
            if state.selected_card().is_none() {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            }
            Ok((true, state.open_details().into_iter().collect()))
        }
        Event::CloseDetails => {
            state.close_details();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => Ok((state.toggle_favorite(), vec![])),
        Event::ShowFavorites => {
            state.open_favorites();
            Ok((true, vec![]))
        }
        Event::CloseFavorites => {
            state.close_favorites();
            Ok((true, vec![]))
        }
        Event::RemoveFavorite => Ok((state.remove_selected_favorite(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::TimerElapsed => {
            let Some(handle) = state.timers.fire_next() else {
                return Ok((false, vec![]));
            };
            let Some(term) = state.search.timer_fired(handle) else {
                return Ok((false, vec![]));
            };
            Ok((true, state.issue_search(term).into_iter().collect()))
        }
        Event::DirectoryResponse { tag, reply } => {
            tracing::debug!(request = %tag.id, status = reply.status, bytes = reply.body.len(), "directory response");
            let changed = match &tag.kind {
                RequestKind::Search => state.apply_search_response(tag.id, reply),
                RequestKind::Details { movie_id } => {
                    state.apply_details_response(tag.id, movie_id, reply)
                }
            };
            Ok((changed, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::search::{SearchController, DEFAULT_DEBOUNCE};
    use crate::app::modes::Surface;
    use crate::directory::{DirectoryClient, RequestId};
    use crate::ui::Theme;

    fn state() -> AppState {
        let search = SearchController::new("Avengers", DEFAULT_DEBOUNCE);
        AppState::new(DirectoryClient::default(), search, Theme::default())
    }

    #[test]
    fn keystrokes_before_ready_only_commit() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::Ready).unwrap();
        let [Action::Fetch(request)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        assert!(request.url.ends_with("s=Avengers"));
    }

    #[test]
    fn typing_arms_a_host_timer_per_keystroke() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Char('!')).unwrap();
        assert_eq!(actions, vec![Action::SetTimeout { seconds: 0.6 }]);
    }

    #[test]
    fn cancelled_timer_does_not_render() {
        let mut state = state();
        handle_event(&mut state, &Event::Ready).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::TimerElapsed).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn stray_response_is_ignored() {
        let mut state = state();
        let tag = RequestTag {
            id: RequestId(99),
            kind: RequestKind::Search,
        };
        let reply = HttpReply::new(200, r#"{"Search":[]}"#);
        let (render, _) =
            handle_event(&mut state, &Event::DirectoryResponse { tag, reply }).unwrap();
        assert!(!render);
    }

    #[test]
    fn favorites_overlay_takes_over_the_surface() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        handle_event(&mut state, &Event::ShowFavorites).unwrap();
        assert_eq!(state.surface(), Surface::Favorites);
        assert!(state.scroll_locked);

        handle_event(&mut state, &Event::CloseFavorites).unwrap();
        assert_eq!(state.surface(), Surface::Main(Focus::Results));
        assert!(!state.scroll_locked);
    }

    #[test]
    fn close_focus_hides_without_render() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }
}
