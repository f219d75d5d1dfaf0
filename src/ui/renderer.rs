//! Top-level rendering entry point.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from [`AppState`], then
//! hand it to the components.
//!
//! [`UIViewModel`]: crate::ui::viewmodel::UIViewModel
//! [`AppState`]: crate::app::AppState

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_gallery(&viewmodel, &state.theme, cols, rows);
}
