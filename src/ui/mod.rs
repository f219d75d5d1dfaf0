//! Terminal UI: view models, components and themes.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Per-element renderers
//! - [`helpers`]: Cursor positioning, truncation, column widths
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyState, ControlInfo, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
