use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod command_executors;
pub mod components;
pub mod constants;
pub mod ids;
pub mod messages;
pub mod models;
pub mod network;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;

#[cfg(test)]
mod tests;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::init_api_config();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    // Static layout, then the components mount into it.
    ui::setup::create_base_ui(&document)?;
    components::canvas_editor::setup_canvas(&document)?;
    components::node_palette::init(&document)?;
    components::workflow_switcher::init(&document)?;
    components::execution_panel::init(&document)?;

    // Draw the seeded graph before any workflow is loaded.
    let canvas = state::APP_STATE.with(|s| s.borrow().canvas.clone());
    if let Some(canvas) = canvas {
        state::APP_STATE.with(|s| canvas.render(&s.borrow()));
    }

    // Fetch the workflow list; a non-empty list auto-loads its first entry.
    state::dispatch_global_message(messages::Message::RefreshWorkflowList {
        auto_select_first: true,
    });

    Ok(())
}
