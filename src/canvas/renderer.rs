//! 2D-canvas implementation of the [`GraphCanvas`] capability.
//!
//! Deliberately thin: boxes, labels and bezier connections, no pan/zoom.
//! The graph semantics live entirely in the state store; this file only
//! mirrors it onto pixels.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::GraphCanvas;
use crate::constants::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, NODE_TYPE_INPUT, NODE_TYPE_LLM};
use crate::models::{Position, WorkflowNode};
use crate::state::AppState;

const CANVAS_BACKGROUND: &str = "#f7fafc";
const EDGE_COLOR: &str = "#95a5a6";
const NODE_BORDER: &str = "#2c5282";
const LABEL_COLOR: &str = "#2d3748";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }

    fn draw_node(&self, node: &WorkflowNode) {
        let ctx = &self.context;
        let (x, y) = (node.position.x, node.position.y);

        ctx.save();
        ctx.set_shadow_color("rgba(0,0,0,0.15)");
        ctx.set_shadow_blur(6.0);
        ctx.set_shadow_offset_y(2.0);
        ctx.set_fill_style_str(fill_for(&node.node_type));
        rounded_rect_path(ctx, x, y, DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT, 8.0);
        ctx.fill();

        ctx.set_shadow_blur(0.0);
        ctx.set_shadow_offset_y(0.0);
        ctx.set_line_width(if node.selected { 2.5 } else { 1.5 });
        ctx.set_stroke_style_str(NODE_BORDER);
        ctx.stroke();
        ctx.restore();

        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font("13px sans-serif");
        let _ = ctx.fill_text(
            node.label(),
            x + 10.0,
            y + DEFAULT_NODE_HEIGHT / 2.0 + 4.0,
        );

        // Output handle on the right edge; connect gestures start here.
        ctx.begin_path();
        let _ = ctx.arc(
            x + DEFAULT_NODE_WIDTH,
            y + DEFAULT_NODE_HEIGHT / 2.0,
            4.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.set_fill_style_str(NODE_BORDER);
        ctx.fill();
    }

    fn draw_edges(&self, state: &AppState) {
        let ctx = &self.context;
        for edge in &state.edges {
            let from = state.nodes.iter().find(|n| n.id == edge.source);
            let to = state.nodes.iter().find(|n| n.id == edge.target);
            let (Some(from), Some(to)) = (from, to) else {
                // Dangling endpoint: the canvas never drops the edge on the
                // store's behalf, it just has nothing to draw.
                continue;
            };

            let start_x = from.position.x + DEFAULT_NODE_WIDTH;
            let start_y = from.position.y + DEFAULT_NODE_HEIGHT / 2.0;
            let end_x = to.position.x;
            let end_y = to.position.y + DEFAULT_NODE_HEIGHT / 2.0;
            let mid_x = start_x + (end_x - start_x) / 2.0;

            ctx.begin_path();
            ctx.move_to(start_x, start_y);
            ctx.bezier_curve_to(mid_x, start_y, mid_x, end_y, end_x, end_y);
            ctx.set_stroke_style_str(EDGE_COLOR);
            ctx.set_line_width(2.0);
            ctx.stroke();
        }
    }
}

impl GraphCanvas for CanvasRenderer {
    fn render(&self, state: &AppState) {
        let ctx = &self.context;
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);

        ctx.set_fill_style_str(CANVAS_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        // Connections first so nodes draw on top.
        self.draw_edges(state);
        for node in &state.nodes {
            self.draw_node(node);
        }
    }

    fn screen_to_flow(&self, client_x: f64, client_y: f64) -> Position {
        let rect = self.canvas.get_bounding_client_rect();
        Position {
            x: client_x - rect.left(),
            y: client_y - rect.top(),
        }
    }
}

fn fill_for(node_type: &str) -> &'static str {
    match node_type {
        NODE_TYPE_INPUT => "#c6f6d5",
        NODE_TYPE_LLM => "#ebf8ff",
        _ => "#edf2f7",
    }
}

fn rounded_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    let _ = ctx.arc_to(x, y + h, x, y, r);
    let _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

/// Hit-test in flow coordinates.  Later nodes draw on top, so scan from the
/// back of the list.
pub fn node_at(state: &AppState, x: f64, y: f64) -> Option<String> {
    state
        .nodes
        .iter()
        .rev()
        .find(|n| {
            x >= n.position.x
                && x <= n.position.x + DEFAULT_NODE_WIDTH
                && y >= n.position.y
                && y <= n.position.y + DEFAULT_NODE_HEIGHT
        })
        .map(|n| n.id.clone())
}
