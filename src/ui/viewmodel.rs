//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; nothing here
//! reaches back into session state.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Category box, always shown.
    pub search_bar: SearchBarInfo,

    /// Prev/next state and sort label.
    pub pagination: PaginationInfo,

    /// Main area: table, spinner text, or a message.
    pub body: BodyState,

    /// Detail dialog overlay, when open.
    pub detail: Option<DetailInfo>,

    /// Toasts to draw, oldest first.
    pub toasts: Vec<String>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyState {
    /// A request for the active page is outstanding.
    Loading,

    /// The active page came back empty or failed.
    Exhausted,

    /// Nothing can be shown yet, with an explanation.
    Empty(EmptyState),

    /// The visible window of the sorted page.
    Table {
        /// Rows inside the window.
        items: Vec<DisplayItem>,
        /// Selected row relative to the window.
        selected_index: usize,
    },
}

/// One image row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Identifier column.
    pub id: String,
    /// View count column.
    pub views: String,
    /// Download count column.
    pub downloads: String,
    /// Collection count column.
    pub collections: String,
    /// Preview URL column.
    pub preview: String,
    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text in the box.
    pub query: String,
    /// Whether keystrokes go to the box.
    pub focused: bool,
    /// Whether a debounced commit is waiting.
    pub pending: bool,
}

/// Pagination bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page number.
    pub page: u32,
    /// Whether "Prev" is enabled.
    pub can_prev: bool,
    /// Whether "Next" is enabled.
    pub can_next: bool,
    /// Label of the active sort criterion.
    pub sort_label: &'static str,
}

/// Detail dialog display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    /// Dialog title, naming the image.
    pub title: String,
    /// Position in the page, e.g. `"3 / 9"`.
    pub position: String,
    /// Label/value rows.
    pub fields: Vec<(&'static str, String)>,
    /// Buttons in focus order.
    pub controls: Vec<ControlInfo>,
}

/// A dialog button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    /// Button text.
    pub label: &'static str,
    /// Whether the button has keyboard focus.
    pub focused: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Message shown instead of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
