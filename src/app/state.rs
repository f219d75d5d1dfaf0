//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin remembers between
//! events: the gallery session, the fetch orchestrator, the search box, the
//! detail dialog, live toasts and host timer bookkeeping. The event handler
//! mutates it; the renderer only reads view models computed from it.
//!
//! # Example
//!
//! ```rust
//! use zgallery::app::AppState;
//! use zgallery::domain::{Category, SortCriterion};
//! use zgallery::gallery::{ApiEndpoint, Debouncer, FetchOrchestrator, SessionStore};
//! use zgallery::ui::Theme;
//!
//! let store = SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id);
//! let orchestrator = FetchOrchestrator::new(ApiEndpoint::parse("https://api.example.com").unwrap());
//! let state = AppState::new(store, orchestrator, Debouncer::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.search_bar.query, "sport");
//! ```

use super::modes::{InputMode, PermissionState};
use super::timers::TimerBook;
use crate::domain::ImageRecord;
use crate::gallery::{Debouncer, DetailView, FetchOrchestrator, SessionStore, ToastQueue};
use crate::ui::helpers::{truncate, FIXED_COLUMNS_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyState, ControlInfo, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
use std::time::Duration;

/// Rows taken by everything except table rows: blank line, header, two
/// borders, search box (3), pagination bar, column headers, footer border and
/// footer.
const CHROME_ROWS: usize = 11;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Category, page, sort and cached pages.
    pub store: SessionStore,

    /// Cache-or-fetch policy and outstanding requests.
    pub orchestrator: FetchOrchestrator,

    /// Pending category commit.
    pub debouncer: Debouncer,

    /// Visible search box text. Updated on every keystroke, committed later.
    pub search_input: String,

    /// Cursor position within the sorted view.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Web access permission as last reported by the host.
    pub permission: PermissionState,

    /// Open detail dialog.
    pub detail: Option<DetailView>,

    /// Live error toasts.
    pub toasts: ToastQueue,

    /// Host timers armed and not yet fired.
    pub timers: TimerBook,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Set when the plugin configuration is unusable; shown instead of images.
    pub config_error: Option<String>,
}

impl AppState {
    /// Creates state positioned on the first page of the store's category.
    ///
    /// The search box starts out holding the current category.
    #[must_use]
    pub fn new(
        store: SessionStore,
        orchestrator: FetchOrchestrator,
        debouncer: Debouncer,
        theme: Theme,
    ) -> Self {
        let search_input = store.category().to_string();
        Self {
            store,
            orchestrator,
            debouncer,
            search_input,
            selected_index: 0,
            input_mode: InputMode::Normal,
            permission: PermissionState::Pending,
            detail: None,
            toasts: ToastQueue::new(),
            timers: TimerBook::new(),
            theme,
            config_error: None,
        }
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.store.sorted_view().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.store.sorted_view().len();
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
    }

    /// Keeps the cursor inside the active page.
    pub fn clamp_selection(&mut self) {
        let len = self.store.sorted_view().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Record under the cursor.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ImageRecord> {
        self.store.sorted_view().get(self.selected_index).copied()
    }

    /// Earliest moment something time-driven must happen.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.debouncer.deadline(), self.toasts.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The table shows a window of the sorted page centred on the cursor.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                focused: self.input_mode == InputMode::Search,
                pending: self.debouncer.deadline().is_some(),
            },
            pagination: PaginationInfo {
                page: self.store.page().get(),
                can_prev: self.store.can_go_prev(),
                can_next: self.store.can_go_next(),
                sort_label: self.store.sort_criterion().label(),
            },
            body: self.compute_body(rows, cols),
            detail: self.compute_detail(),
            toasts: self
                .toasts
                .visible()
                .map(|toast| toast.notification.message.clone())
                .collect(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Gallery: {} (page {}) ",
                self.store.category(),
                self.store.page()
            ),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> BodyState {
        if let Some(error) = &self.config_error {
            return BodyState::Empty(EmptyState {
                message: "Plugin is not configured".to_string(),
                subtitle: error.clone(),
            });
        }
        match self.permission {
            PermissionState::Pending => {
                return BodyState::Empty(EmptyState {
                    message: "Waiting for permission".to_string(),
                    subtitle: "Allow web access to load images".to_string(),
                });
            }
            PermissionState::Denied => {
                return BodyState::Empty(EmptyState {
                    message: "Web access denied".to_string(),
                    subtitle: "Reload the plugin to ask again".to_string(),
                });
            }
            PermissionState::Granted => {}
        }

        let flags = self.store.flags();
        if flags.loading {
            return BodyState::Loading;
        }
        if flags.exhausted {
            return BodyState::Exhausted;
        }

        let view = self.store.sorted_view();
        if view.is_empty() {
            return BodyState::Empty(EmptyState {
                message: "Nothing loaded yet".to_string(),
                subtitle: "Press r to load this page".to_string(),
            });
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(view.len());
        if visible_end - visible_start < available_rows && view.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let preview_width = cols.saturating_sub(FIXED_COLUMNS_WIDTH);
        let items = view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| DisplayItem {
                id: record.id.to_string(),
                views: record.display_field("views"),
                downloads: record.display_field("downloads"),
                collections: record.display_field("collections"),
                preview: truncate(&record.display_field("previewURL"), preview_width),
                is_selected: visible_start + offset == self.selected_index,
            })
            .collect();

        BodyState::Table {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        let detail = self.detail.as_ref()?;
        let view = self.store.sorted_view();
        let record = view.get(detail.index())?;
        Some(DetailInfo {
            title: format!(" Image {} ", record.id),
            position: format!("{} / {}", detail.index() + 1, view.len()),
            fields: DetailView::fields(record),
            controls: detail
                .focus_ring()
                .controls()
                .iter()
                .map(|control| ControlInfo {
                    label: control.label(),
                    focused: *control == detail.focused(),
                })
                .collect(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type: category  Enter: search now  Esc: done",
            InputMode::Detail => "Tab/S-Tab: focus  Enter: activate  \u{2190}/\u{2192}: image  Esc: close",
            InputMode::Normal => {
                "h/l: page  j/k: select  Enter: details  s: sort  /: search  r: retry  q: hide"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
