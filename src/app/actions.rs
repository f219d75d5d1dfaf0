//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls host APIs. It returns a `Vec<Action>` and the
//! plugin shim executes them in order after the state change is complete.

use crate::gallery::FetchRequest;
use std::time::Duration;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a GET for one page. The request key travels as the reply
    /// context so the answer can be matched to its slot.
    FetchPage(FetchRequest),

    /// Arms a host timer that fires a tick after the given delay.
    ScheduleTimer(Duration),
}
