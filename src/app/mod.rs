//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! directory/storage layers. It never calls the host directly.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → AppState mutation → Actions
//!                                     ↑                                          ↓
//!                                     └─────────── host completions ◄────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing and state transition coordinator
//! - [`modes`]: focus and surface types that select key bindings
//! - [`state`]: central application state and view model computation
//! - [`search`]: debounced search controller
//! - [`timers`]: cancellable timers over the host's one-shot timeouts
//! - [`cards`]: result cards with lazily loaded detail panels
//! - [`overlay`]: favorites overlay
//! - [`scroll`]: scroll lock held by open modals
//! - [`observer`]: change notifications

pub mod actions;
pub mod cards;
pub mod handler;
pub mod modes;
pub mod observer;
pub mod overlay;
pub mod scroll;
pub mod search;
pub mod state;
pub mod timers;

pub use actions::Action;
pub use cards::{DetailPanel, ResultCard};
pub use handler::{handle_event, Event};
pub use modes::{Focus, Surface};
pub use observer::StateChange;
pub use overlay::FavoritesOverlay;
pub use scroll::ScrollLock;
pub use search::{SearchController, SearchPhase, DEFAULT_DEBOUNCE};
pub use state::AppState;
pub use timers::{Scheduler, TimerHandle, TimerQueue};
