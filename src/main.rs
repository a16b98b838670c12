//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Marquee library and the Zellij plugin
//! system. It translates host events into library [`Event`]s and library
//! [`Action`]s into host calls; everything else lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`, request
//!    permissions, subscribe to events
//! 2. **Permissions granted**: open the favorites file, send `Event::Ready`
//! 3. **Update**: map keys, timers and web results to events, execute actions
//! 4. **Render**: call the library renderer
//!
//! # Host Mapping
//!
//! - `Action::Fetch` → `web_request` with the request tag as context
//! - `WebRequestResult` → `Event::DirectoryResponse`
//! - `Action::SetTimeout` → `set_timeout`; `Timer` → `Event::TimerElapsed`
//! - `Action::CloseFocus` → `hide_self`
//!
//! # Keybindings
//!
//! Search input:
//! - characters: edit the query (debounced)
//! - `Enter`: search now
//! - `Ctrl+l`: clear
//! - `Tab`/`Esc`/`Down`: focus results
//!
//! Results:
//! - `j`/`k`/arrows, `Ctrl+n`/`Ctrl+p`: move
//! - `Enter`/`d`: details
//! - `f`: toggle favorite, `F`: favorites overlay
//! - `/`/`Tab`: focus search, `c`: clear, `q`: hide
//!
//! Details modal:
//! - `Esc`/`q`/`Enter`: close, `f`: toggle favorite
//!
//! Favorites overlay:
//! - `j`/`k`/arrows: move, `x`/`d`/`Delete`: remove, `Esc`/`q`: close

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("marquee is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from a layout");
}

#[cfg(target_arch = "wasm32")]
mod shim {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use marquee::app::StateChange;
    use marquee::directory::{HttpReply, RequestTag};
    use marquee::{handle_event, Action, AppState, Config, Event, Focus, Surface};

    const PANE_TITLE: &str = "Marquee";

    /// Plugin state wrapper.
    pub struct State {
        app: AppState,
        config: Config,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: marquee::initialize(&config),
                config,
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the application state, requests
        /// permissions and subscribes to events.
        ///
        /// # Permissions
        ///
        /// - `WebAccess`: directory requests
        /// - `FullHdAccess`: favorites file under the data directory
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            marquee::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            self.app = marquee::initialize(&config);
            self.app.subscribe(|change| {
                if let StateChange::FavoritesChanged { count } = change {
                    let title = format!("{PANE_TITLE} ({count} favorites)");
                    rename_plugin_pane(get_plugin_ids().plugin_id, title);
                }
            });
            self.config = config;

            tracing::debug!("requesting permissions");
            request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);

            subscribe(&[
                EventType::Key,
                EventType::Timer,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Timer(_) => Event::TimerElapsed,
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match RequestTag::from_context(&context) {
                        Some(tag) => Event::DirectoryResponse {
                            tag,
                            reply: HttpReply::new(status, body),
                        },
                        None => {
                            tracing::debug!(?context, "web result without a request tag");
                            return false;
                        }
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    match status {
                        PermissionStatus::Granted => {
                            tracing::debug!("permissions granted");
                            self.app
                                .attach_favorites(marquee::open_favorites_store(&self.config));
                            Event::Ready
                        }
                        PermissionStatus::Denied => {
                            tracing::warn!("permissions denied - the directory is unreachable");
                            return false;
                        }
                    }
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            marquee::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        /// Maps a key to an event according to the topmost surface.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
            let surface = self.app.surface();

            if ctrl {
                return match (key.bare_key, surface) {
                    (BareKey::Char('n'), Surface::Main(_) | Surface::Favorites) => Some(Event::KeyDown),
                    (BareKey::Char('p'), Surface::Main(_) | Surface::Favorites) => Some(Event::KeyUp),
                    (BareKey::Char('l'), Surface::Main(_)) => Some(Event::ClearQuery),
                    _ => None,
                };
            }

            Some(match surface {
                Surface::Main(Focus::Search) => match key.bare_key {
                    BareKey::Enter => Event::Submit,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Tab | BareKey::Esc | BareKey::Down => Event::FocusResults,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                },
                Surface::Main(Focus::Results) => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                    BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                    BareKey::Enter | BareKey::Char('d') => Event::OpenDetails,
                    BareKey::Char('f') => Event::ToggleFavorite,
                    BareKey::Char('F') => Event::ShowFavorites,
                    BareKey::Char('/') | BareKey::Tab => Event::FocusSearch,
                    BareKey::Char('c') => Event::ClearQuery,
                    BareKey::Char('q') => Event::CloseFocus,
                    _ => return None,
                },
                Surface::Details => match key.bare_key {
                    BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Event::CloseDetails,
                    BareKey::Char('f') => Event::ToggleFavorite,
                    _ => return None,
                },
                Surface::Favorites => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                    BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                    BareKey::Delete | BareKey::Char('x' | 'd') => Event::RemoveFavorite,
                    BareKey::Esc | BareKey::Char('q') => Event::CloseFavorites,
                    _ => return None,
                },
            })
        }

        /// Translates library actions to Zellij API calls.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::SetTimeout { seconds } => set_timeout(*seconds),
                Action::Fetch(request) => {
                    tracing::debug!(request = %request.tag.id, kind = ?request.tag.kind, "web request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        BTreeMap::new(),
                        vec![],
                        request.tag.to_context(),
                    );
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
use shim::State;
