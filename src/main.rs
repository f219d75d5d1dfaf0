//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zgallery library and the Zellij plugin
//! API. Host events become library [`Event`]s stamped with the time since the
//! plugin loaded; returned [`Action`]s become host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Request `WebAccess`; register for `Key`, `Timer`,
//!    `WebRequestResult` and `PermissionRequestResult`
//! 3. **Grant**: The first page is requested once web access is granted
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → per input mode, see below
//! - `Timer` → `Event::Tick`
//! - `WebRequestResult` → `Event::PageFetched { context, reply }`
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//!
//! # Keybindings
//!
//! Normal mode:
//! - `/`: Focus the search box
//! - `h`/`Left`, `l`/`Right`: Previous/next page
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `s`: Cycle sort criterion
//! - `Enter`: Open image details
//! - `r`: Retry the current page
//! - `q`: Hide plugin
//!
//! Search mode:
//! - Any character: Type
//! - `Backspace`: Delete
//! - `Enter`: Search now
//! - `Esc`: Leave the search box
//!
//! Detail dialog:
//! - `Tab`/`Shift+Tab`: Move focus
//! - `Enter`: Activate focused button
//! - `Left`/`Right`: Previous/next image
//! - `Esc`: Close

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use std::time::{Duration, Instant};
    use zellij_tile::prelude::*;

    use zgallery::gallery::HostReply;
    use zgallery::{handle_event, Action, Config, Event, InputMode};

    /// Plugin state wrapper.
    ///
    /// Wraps the library's `AppState` with the clock the library's timing is
    /// measured against.
    pub(crate) struct State {
        /// Core application state from library layer.
        app: zgallery::AppState,

        /// Load time. Event timestamps are offsets from here.
        started: Instant,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zgallery::initialize(&Config::default()),
                started: Instant::now(),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zgallery::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(
                api_url = ?config.api_url,
                category = %config.category,
                "parsed configuration"
            );
            self.app = zgallery::initialize(&config);
            self.started = Instant::now();

            request_permission(&[PermissionType::WebAccess]);
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
                zellij_tile::prelude::Event::Timer(_) => Event::Tick,
                zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                    tracing::debug!(status, body_len = body.len(), "web request result");
                    Event::PageFetched {
                        context,
                        reply: HostReply {
                            status,
                            headers,
                            body,
                        },
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    Event::PermissionsResult {
                        granted: matches!(status, PermissionStatus::Granted),
                    }
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event, self.now()) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            zgallery::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn now(&self) -> Duration {
            self.started.elapsed()
        }

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

        /// Maps keyboard events to application events for the current mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

            match self.app.input_mode {
                InputMode::Search => Some(match key.bare_key {
                    BareKey::Enter => Event::CommitSearch,
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c)
                        if !key.has_modifiers(&[KeyModifier::Ctrl])
                            && !key.has_modifiers(&[KeyModifier::Alt]) =>
                    {
                        Event::Char(c)
                    }
                    _ => return None,
                }),
                InputMode::Detail => Some(match key.bare_key {
                    BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
                    BareKey::Tab => Event::FocusNext,
                    BareKey::Enter => Event::Activate,
                    BareKey::Left => Event::DetailPrev,
                    BareKey::Right => Event::DetailNext,
                    BareKey::Esc => Event::CloseDetail,
                    _ => return None,
                }),
                InputMode::Normal => Some(match key.bare_key {
                    BareKey::Char('/') => Event::FocusSearch,
                    BareKey::Char('h') | BareKey::Left => Event::PrevPage,
                    BareKey::Char('l') | BareKey::Right => Event::NextPage,
                    BareKey::Char('j') | BareKey::Down => Event::SelectDown,
                    BareKey::Char('k') | BareKey::Up => Event::SelectUp,
                    BareKey::Char('s') => Event::CycleSort,
                    BareKey::Char('r') => Event::Retry,
                    BareKey::Char('q') => Event::CloseFocus,
                    BareKey::Enter => Event::OpenDetail,
                    _ => return None,
                }),
            }
        }

        /// Translates library actions to Zellij API calls.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::FetchPage(request) => {
                    tracing::debug!(url = %request.url, "issuing page request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        BTreeMap::new(),
                        Vec::new(),
                        request.key.to_context(),
                    );
                }
                Action::ScheduleTimer(delay) => set_timeout(delay.as_secs_f64()),
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "zgallery is a Zellij plugin; build it with `cargo build --target wasm32-wasip1` and load the .wasm from Zellij"
    );
}
