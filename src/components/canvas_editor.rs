//! Canvas host: owns the `<canvas>` element, the renderer attachment and the
//! pointer/drag gestures.  Gestures are resolved here and enter the core as
//! plain messages (`AddNode`, `ConnectNodes`, `NodeMoved`), so the reducer
//! never sees DOM events.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::canvas::renderer::{node_at, CanvasRenderer};
use crate::canvas::GraphCanvas;
use crate::constants::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH};
use crate::messages::Message;
use crate::models::ConnectParams;
use crate::state::{dispatch_global_message, APP_STATE};

pub const NODE_TYPE_MIME: &str = "application/workflow-node";

/// Gesture state local to the canvas; the store never sees it.
#[derive(Default)]
struct Gesture {
    /// Node id being dragged plus pointer offset inside the node.
    dragging: Option<(String, f64, f64)>,
    /// Source node id of a connect gesture started on an output handle.
    connecting: Option<String>,
}

thread_local! {
    static GESTURE: RefCell<Gesture> = RefCell::new(Gesture::default());
}

/// Create the canvas element inside `#canvas-container`, attach the renderer
/// to the global state and wire drop/pointer handlers.
pub fn setup_canvas(document: &Document) -> Result<(), JsValue> {
    let container = document
        .get_element_by_id("canvas-container")
        .ok_or_else(|| JsValue::from_str("canvas-container not found"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id("workflow-canvas");
    canvas.set_width(1200);
    canvas.set_height(800);
    container.append_child(&canvas)?;

    let renderer = Rc::new(CanvasRenderer::new(canvas.clone())?);
    APP_STATE.with(|state| {
        state.borrow_mut().canvas = Some(renderer.clone() as Rc<dyn GraphCanvas>);
    });

    setup_drop_target(&canvas, renderer.clone())?;
    setup_pointer_handlers(document, &canvas, renderer)?;
    setup_delete_key(document)?;
    Ok(())
}

/// Delete/Backspace removes the selected node.  The incident-edge cascade is
/// resolved here, not in the store: one `EdgeRemoved` per dangling edge, then
/// the `NodeRemoved` itself.
fn setup_delete_key(document: &Document) -> Result<(), JsValue> {
    let keydown = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: KeyboardEvent| {
        let key = event.key();
        if key != "Delete" && key != "Backspace" {
            return;
        }
        // Ignore keystrokes aimed at form fields.
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            if matches!(target.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") {
                return;
            }
        }

        let (node_id, edge_ids) = APP_STATE.with(|state| {
            let state = state.borrow();
            let Some(node_id) = state.selected_node_id() else {
                return (None, Vec::new());
            };
            let edge_ids: Vec<String> = state
                .edges
                .iter()
                .filter(|e| e.source == node_id || e.target == node_id)
                .map(|e| e.id.clone())
                .collect();
            (Some(node_id), edge_ids)
        });

        if let Some(node_id) = node_id {
            for edge_id in edge_ids {
                dispatch_global_message(Message::EdgeRemoved { edge_id });
            }
            dispatch_global_message(Message::NodeRemoved { node_id });
        }
    }));
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}

/// Accept palette drops: the dataTransfer carries the node-type tag, the
/// renderer translates pointer coordinates into flow space.
fn setup_drop_target(
    canvas: &HtmlCanvasElement,
    renderer: Rc<CanvasRenderer>,
) -> Result<(), JsValue> {
    let dragover = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: DragEvent| {
        event.prevent_default();
        if let Some(dt) = event.data_transfer() {
            dt.set_drop_effect("move");
        }
    }));
    canvas.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())?;
    dragover.forget();

    let ondrop = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: DragEvent| {
        event.prevent_default();
        let node_type = event
            .data_transfer()
            .and_then(|dt| dt.get_data(NODE_TYPE_MIME).ok())
            .unwrap_or_default();
        if node_type.is_empty() {
            return;
        }

        let pos = renderer.screen_to_flow(event.client_x() as f64, event.client_y() as f64);
        dispatch_global_message(Message::AddNode {
            node_type,
            x: pos.x,
            y: pos.y,
        });
    }));
    canvas.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
    ondrop.forget();

    Ok(())
}

fn setup_pointer_handlers(
    document: &Document,
    canvas: &HtmlCanvasElement,
    renderer: Rc<CanvasRenderer>,
) -> Result<(), JsValue> {
    // mousedown: start a connect gesture when the pointer is on a node's
    // output handle, otherwise start dragging the node under the pointer.
    {
        let renderer = renderer.clone();
        let mousedown = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
            let pos = renderer.screen_to_flow(event.client_x() as f64, event.client_y() as f64);
            let hit = APP_STATE.with(|state| {
                let state = state.borrow();
                let id = node_at(&state, pos.x, pos.y)?;
                let node = state.nodes.iter().find(|n| n.id == id)?;
                let on_handle = (pos.x - (node.position.x + DEFAULT_NODE_WIDTH)).abs() <= 10.0
                    && (pos.y - (node.position.y + DEFAULT_NODE_HEIGHT / 2.0)).abs() <= 10.0;
                Some((id, node.position.x, node.position.y, on_handle))
            });

            match hit {
                Some((id, node_x, node_y, on_handle)) => {
                    GESTURE.with(|g| {
                        let mut g = g.borrow_mut();
                        if on_handle {
                            g.connecting = Some(id.clone());
                        } else {
                            g.dragging = Some((id.clone(), pos.x - node_x, pos.y - node_y));
                        }
                    });
                    dispatch_global_message(Message::NodeSelected { node_id: Some(id) });
                }
                None => {
                    dispatch_global_message(Message::NodeSelected { node_id: None });
                }
            }
        }));
        canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }

    // mousemove: live drag-move passthrough into the store.
    {
        let renderer = renderer.clone();
        let mousemove = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
            let dragging = GESTURE.with(|g| g.borrow().dragging.clone());
            if let Some((node_id, off_x, off_y)) = dragging {
                let pos =
                    renderer.screen_to_flow(event.client_x() as f64, event.client_y() as f64);
                dispatch_global_message(Message::NodeMoved {
                    node_id,
                    x: pos.x - off_x,
                    y: pos.y - off_y,
                });
            }
        }));
        canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }

    // mouseup: complete a pending connect gesture when released over a node.
    // Registered on the document, not the canvas, so releasing the button
    // outside the canvas still ends the gesture.
    {
        let mouseup = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
            let (connecting, _) = GESTURE.with(|g| {
                let mut g = g.borrow_mut();
                (g.connecting.take(), g.dragging.take())
            });

            if let Some(source) = connecting {
                let pos =
                    renderer.screen_to_flow(event.client_x() as f64, event.client_y() as f64);
                let target = APP_STATE.with(|state| node_at(&state.borrow(), pos.x, pos.y));
                if let Some(target) = target {
                    dispatch_global_message(Message::ConnectNodes(ConnectParams {
                        source,
                        target,
                        source_handle: None,
                        target_handle: None,
                    }));
                }
            }
        }));
        document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }

    Ok(())
}
