pub mod renderer;

use crate::models::Position;
use crate::state::AppState;

/// Capability boundary for the graph rendering engine.
///
/// The core only needs two things from a canvas: redraw the current graph
/// and translate pointer coordinates into flow space.  Everything else
/// (pan/zoom, hit-testing, gesture handling) is the implementation's own
/// business, so any conforming renderer can be swapped in and the reducer
/// never learns which one is attached.
pub trait GraphCanvas {
    fn render(&self, state: &AppState);
    fn screen_to_flow(&self, client_x: f64, client_y: f64) -> Position;
}
