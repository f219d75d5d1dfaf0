//! Input mode and permission state types.
//!
//! The input mode decides how the shim maps keys to events and which footer
//! hints are shown:
//! - **Normal**: paging, selection, sorting
//! - **Search**: keystrokes edit the category box
//! - **Detail**: the detail dialog owns the keyboard

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Gallery navigation.
    ///
    /// Keybindings: h/l (page), j/k (select), s (sort), Enter (details),
    /// / (search), r (retry), q (hide).
    #[default]
    Normal,

    /// Typing in the category box.
    ///
    /// Characters and Backspace edit the text, Enter commits at once, Esc
    /// returns to Normal. A pending debounced commit survives Esc.
    Search,

    /// Detail dialog open.
    ///
    /// Tab/Shift+Tab cycle focus inside the dialog, Enter activates the focused
    /// control, Left/Right switch image, Esc closes.
    Detail,
}

/// Whether the host has allowed outbound web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Waiting for the user to answer the permission prompt.
    #[default]
    Pending,
    /// Web access granted; fetches may be issued.
    Granted,
    /// Web access refused; nothing can be loaded.
    Denied,
}
