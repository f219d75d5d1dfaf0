//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which state changes. The
//! plugin shim translates host events into [`Event`]s, passes the current
//! session time, and executes the returned [`Action`]s.
//!
//! # Event Types
//!
//! - **Search**: `FocusSearch`, `Char`, `Backspace`, `CommitSearch`, `ExitSearch`
//! - **Gallery**: `NextPage`, `PrevPage`, `CycleSort`, `SelectUp`, `SelectDown`,
//!   `OpenDetail`, `Retry`
//! - **Detail dialog**: `FocusNext`, `FocusPrev`, `Activate`, `DetailPrev`,
//!   `DetailNext`, `CloseDetail`
//! - **Host**: `Tick`, `PageFetched`, `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use zgallery::app::{handle_event, Action, AppState, Event};
//! use zgallery::domain::{Category, SortCriterion};
//! use zgallery::gallery::{ApiEndpoint, Debouncer, FetchOrchestrator, SessionStore};
//! use zgallery::ui::Theme;
//!
//! let store = SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id);
//! let orchestrator = FetchOrchestrator::new(ApiEndpoint::parse("https://api.example.com").unwrap());
//! let mut state = AppState::new(store, orchestrator, Debouncer::default(), Theme::default());
//!
//! let (_, actions) =
//!     handle_event(&mut state, &Event::PermissionsResult { granted: true }, Duration::ZERO)?;
//! assert!(matches!(actions[0], Action::FetchPage(_)));
//! # Ok::<(), zgallery::GalleryError>(())
//! ```

use super::modes::{InputMode, PermissionState};
use crate::app::{Action, AppState};
use crate::domain::error::{GalleryError, Result};
use crate::domain::Category;
use crate::gallery::{DetailControl, DetailView, HostReply, LoadDecision, Notification, PageKey};
use std::collections::BTreeMap;
use std::time::Duration;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Gives the search box keyboard focus.
    FocusSearch,
    /// Leaves the search box. A pending commit still fires.
    ExitSearch,
    /// Commits the search box text now instead of waiting for the pause.
    CommitSearch,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,

    /// Shows the next page.
    NextPage,
    /// Shows the previous page.
    PrevPage,
    /// Switches to the next sort criterion.
    CycleSort,
    /// Moves the cursor up (wraps).
    SelectUp,
    /// Moves the cursor down (wraps).
    SelectDown,
    /// Opens the detail dialog for the record under the cursor.
    OpenDetail,
    /// Requests the active page again if it is neither cached nor in flight.
    Retry,

    /// Moves dialog focus forward.
    FocusNext,
    /// Moves dialog focus backward.
    FocusPrev,
    /// Activates the focused dialog control.
    Activate,
    /// Shows the previous image in the dialog.
    DetailPrev,
    /// Shows the next image in the dialog.
    DetailNext,
    /// Closes the dialog.
    CloseDetail,

    /// A host timer fired.
    Tick,

    /// The host answered a page request.
    PageFetched {
        /// Context map sent with the request.
        context: BTreeMap<String, String>,
        /// Status, headers and body.
        reply: HostReply,
    },

    /// The host reported the result of the permission request.
    PermissionsResult {
        /// Whether web access was granted.
        granted: bool,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event at session time `now`, returning whether to re-render
/// and the actions to execute.
///
/// After every event a host timer is armed if a debounce commit or toast
/// expiry is pending and no armed timer covers it.
///
/// # Errors
///
/// Returns [`GalleryError::ReplyContext`] when a page reply cannot be matched
/// to the request it answers.
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: Duration,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    let (render, mut actions) = dispatch(state, event, now)?;

    if let Some(delay) = state.timers.arm(now, state.next_deadline()) {
        actions.push(Action::ScheduleTimer(delay));
    }
    Ok((render, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event, now: Duration) -> Result<(bool, Vec<Action>)> {
    let mut actions = vec![];

    let render = match event {
        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            true
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            true
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, actions));
            }
            state.search_input.push(*c);
            state.debouncer.schedule(state.search_input.clone(), now);
            tracing::trace!(query = %state.search_input, "search input updated");
            true
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, actions));
            }
            state.search_input.pop();
            state.debouncer.schedule(state.search_input.clone(), now);
            true
        }
        Event::CommitSearch => {
            state.debouncer.cancel();
            state.input_mode = InputMode::Normal;
            let text = state.search_input.clone();
            commit_category(state, &text, now, &mut actions);
            true
        }
        Event::NextPage => {
            if !state.store.can_go_next() {
                return Ok((false, actions));
            }
            state.store.next_page();
            state.selected_index = 0;
            load_active(state, now, &mut actions);
            true
        }
        Event::PrevPage => {
            if !state.store.prev_page() {
                return Ok((false, actions));
            }
            state.selected_index = 0;
            load_active(state, now, &mut actions);
            true
        }
        Event::CycleSort => {
            let next = state.store.sort_criterion().cycle();
            tracing::debug!(sort = %next, "sort changed");
            state.store.set_sort_criterion(next);
            true
        }
        Event::SelectUp => {
            state.move_selection_up();
            true
        }
        Event::SelectDown => {
            state.move_selection_down();
            true
        }
        Event::OpenDetail => {
            match DetailView::open(state.selected_record(), state.selected_index) {
                Ok(detail) => {
                    state.detail = Some(detail);
                    state.input_mode = InputMode::Detail;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "detail requested without a record");
                    state.toasts.push(Notification::from(err), now);
                }
            }
            true
        }
        Event::Retry => {
            load_active(state, now, &mut actions);
            true
        }
        Event::FocusNext => match state.detail.as_mut() {
            Some(detail) => {
                detail.focus_next();
                true
            }
            None => false,
        },
        Event::FocusPrev => match state.detail.as_mut() {
            Some(detail) => {
                detail.focus_prev();
                true
            }
            None => false,
        },
        Event::Activate => match state.detail.as_ref().map(DetailView::focused) {
            Some(DetailControl::Close) => close_detail(state),
            Some(DetailControl::Previous) => show_previous(state),
            Some(DetailControl::Next) => show_next(state),
            None => false,
        },
        Event::DetailPrev => show_previous(state),
        Event::DetailNext => show_next(state),
        Event::CloseDetail => close_detail(state),
        Event::Tick => {
            state.timers.fired();
            let mut changed = state.toasts.prune(now);
            if let Some(text) = state.debouncer.poll(now) {
                commit_category(state, &text, now, &mut actions);
                changed = true;
            }
            changed
        }
        Event::PageFetched { context, reply } => {
            let key = PageKey::from_context(context)
                .ok_or_else(|| GalleryError::ReplyContext(context.clone()))?;
            let outcome = reply.classify();
            if let Some(notification) = state.orchestrator.resolve(&mut state.store, key, outcome) {
                state.toasts.push(notification, now);
            }
            state.clamp_selection();
            true
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::info!("web access granted");
                state.permission = PermissionState::Granted;
                load_active(state, now, &mut actions);
            } else {
                tracing::warn!("web access denied, nothing can be loaded");
                state.permission = PermissionState::Denied;
            }
            true
        }
        Event::CloseFocus => {
            actions.push(Action::CloseFocus);
            false
        }
    };

    Ok((render, actions))
}

/// Applies a committed search box value. Blank text leaves the category alone.
fn commit_category(state: &mut AppState, text: &str, now: Duration, actions: &mut Vec<Action>) {
    match Category::new(text) {
        Ok(category) => {
            tracing::info!(category = %category, "category committed");
            state.store.set_category(category);
            state.selected_index = 0;
            // The dialog belongs to the page it was opened on.
            if state.detail.take().is_some() {
                state.input_mode = InputMode::Normal;
            }
            load_active(state, now, actions);
        }
        Err(err) => tracing::debug!(error = %err, "ignoring blank category"),
    }
}

/// Runs the cache-or-fetch decision for the page on screen.
fn load_active(state: &mut AppState, now: Duration, actions: &mut Vec<Action>) {
    if state.permission != PermissionState::Granted {
        tracing::debug!("web access not granted, deferring load");
        return;
    }
    let key = state.store.active_key();
    match state.orchestrator.ensure_loaded(&mut state.store, &key) {
        LoadDecision::Fetch(request) => actions.push(Action::FetchPage(request)),
        LoadDecision::Unavailable(notification) => {
            state.toasts.push(notification, now);
        }
        LoadDecision::CacheHit | LoadDecision::InFlight => {}
    }
}

fn close_detail(state: &mut AppState) -> bool {
    let Some(detail) = state.detail.take() else {
        return false;
    };
    state.selected_index = detail.close();
    state.input_mode = InputMode::Normal;
    true
}

fn show_previous(state: &mut AppState) -> bool {
    state
        .detail
        .as_mut()
        .is_some_and(DetailView::show_previous)
}

fn show_next(state: &mut AppState) -> bool {
    let len = state.store.sorted_view().len();
    state
        .detail
        .as_mut()
        .is_some_and(|detail| detail.show_next(len))
}

/// Short event name for span fields; avoids dumping response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::PageFetched { reply, .. } => write!(f, "PageFetched({})", reply.status),
            Event::Char(_) => f.write_str("Char"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortCriterion;
    use crate::gallery::{ApiEndpoint, Debouncer, FetchOrchestrator, SessionStore};
    use crate::ui::Theme;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn granted_state() -> AppState {
        let store = SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id);
        let orchestrator =
            FetchOrchestrator::new(ApiEndpoint::parse("https://api.example.com").unwrap());
        let mut state = AppState::new(store, orchestrator, Debouncer::default(), Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }, ms(0)).unwrap();
        state
    }

    fn reply_for(key: &PageKey, body: &str) -> Event {
        Event::PageFetched {
            context: key.to_context(),
            reply: HostReply {
                status: 200,
                headers: BTreeMap::from([("content-type".into(), "application/json".into())]),
                body: body.as_bytes().to_vec(),
            },
        }
    }

    #[test]
    fn typing_outside_search_mode_is_ignored() {
        let mut state = granted_state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x'), ms(10)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search_input, "sport");
    }

    #[test]
    fn keystroke_arms_a_debounce_timer() {
        let mut state = granted_state();
        handle_event(&mut state, &Event::FocusSearch, ms(0)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Char('s'), ms(0)).unwrap();
        assert_eq!(actions, vec![Action::ScheduleTimer(ms(500))]);
    }

    #[test]
    fn blank_commit_keeps_category() {
        let mut state = granted_state();
        handle_event(&mut state, &Event::FocusSearch, ms(0)).unwrap();
        for _ in 0.."sport".len() {
            handle_event(&mut state, &Event::Backspace, ms(0)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::CommitSearch, ms(5)).unwrap();
        assert_eq!(state.store.category().as_str(), "sport");
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn open_detail_on_empty_page_raises_notification() {
        let mut state = granted_state();
        let (render, _) = handle_event(&mut state, &Event::OpenDetail, ms(0)).unwrap();
        assert!(render);
        assert!(state.detail.is_none());
        assert_eq!(
            state.toasts.visible().next().unwrap().notification.message,
            "An error occurred while loading the image."
        );
    }

    #[test]
    fn closing_detail_returns_cursor_to_last_image() {
        let mut state = granted_state();
        let key = state.store.active_key();
        handle_event(&mut state, &reply_for(&key, r#"[{"id":3},{"id":2},{"id":1}]"#), ms(1)).unwrap();

        handle_event(&mut state, &Event::OpenDetail, ms(2)).unwrap();
        assert_eq!(state.input_mode, InputMode::Detail);
        handle_event(&mut state, &Event::DetailNext, ms(3)).unwrap();
        handle_event(&mut state, &Event::FocusPrev, ms(4)).unwrap();
        assert_eq!(state.detail.as_ref().unwrap().focused(), DetailControl::Next);
        handle_event(&mut state, &Event::Activate, ms(5)).unwrap();

        handle_event(&mut state, &Event::CloseDetail, ms(6)).unwrap();
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn reply_without_context_is_an_error() {
        let mut state = granted_state();
        let event = Event::PageFetched {
            context: BTreeMap::new(),
            reply: HostReply {
                status: 200,
                headers: BTreeMap::new(),
                body: b"[]".to_vec(),
            },
        };
        assert!(matches!(
            handle_event(&mut state, &event, ms(0)),
            Err(GalleryError::ReplyContext(_))
        ));
    }
}
