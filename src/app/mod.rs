//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the gallery/UI layers:
//!
//! ```text
//! Host Event → Event → handle_event → AppState mutations → Actions → Host calls
//!                          ↑                                    ↓
//!                          └──── Timer / WebRequestResult ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode and permission state
//! - [`state`]: Central application state and view model computation
//! - [`timers`]: Host timer bookkeeping

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod timers;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, PermissionState};
pub use state::AppState;
pub use timers::TimerBook;
