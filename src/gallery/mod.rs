//! Gallery session controller.
//!
//! Everything that decides what the user sees, independent of Zellij:
//!
//! - [`store`]: current category, page, sort and the page cache
//! - [`orchestrator`]: cache-or-fetch decisions and result bookkeeping
//! - [`fetch`]: request URLs and reply classification
//! - [`debounce`]: search box commit delay
//! - [`sort_view`]: display ordering of a page
//! - [`notify`]: error toasts
//! - [`detail`]: detail dialog and focus trap

pub mod cache;
pub mod debounce;
pub mod detail;
pub mod fetch;
pub mod notify;
pub mod orchestrator;
pub mod sort_view;
pub mod store;

pub use cache::{PageCache, ResultSet};
pub use debounce::Debouncer;
pub use detail::{DetailControl, DetailView, FocusRing};
pub use fetch::{ApiEndpoint, FetchOutcome, FetchRequest, HostReply, PageKey};
pub use notify::{Notification, Toast, ToastQueue};
pub use orchestrator::{FetchOrchestrator, LoadDecision};
pub use sort_view::sorted_view;
pub use store::{SessionFlags, SessionStore, NEXT_PAGE_THRESHOLD};
