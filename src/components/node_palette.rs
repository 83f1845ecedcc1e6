//! Node palette: draggable cards in the side panel.  A drag carries only the
//! node-type tag; the drop position and default data are resolved by the
//! canvas host and the store.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element};

use crate::components::canvas_editor::NODE_TYPE_MIME;
use crate::constants::NODE_TYPE_LLM;

/// A draggable node type offered by the palette.
struct PaletteNode {
    type_tag: &'static str,
    name: &'static str,
    description: &'static str,
}

fn palette_nodes() -> Vec<PaletteNode> {
    vec![PaletteNode {
        type_tag: NODE_TYPE_LLM,
        name: "LLM Node",
        description: "Prompt template step",
    }]
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let panel = document
        .get_element_by_id("side-panel")
        .ok_or_else(|| JsValue::from_str("side-panel not found"))?;

    let section = document.create_element("div")?;
    section.set_id("node-palette");

    let heading = document.create_element("div")?;
    heading.set_class_name("panel-label");
    heading.set_text_content(Some("Drag nodes to the canvas:"));
    section.append_child(&heading)?;

    for node in palette_nodes() {
        let card = document.create_element("div")?;
        card.set_class_name("palette-node");
        card.set_attribute("draggable", "true")?;
        card.set_attribute("data-node-type", node.type_tag)?;
        card.set_inner_html(&format!(
            "<div class='palette-node-name'>{}</div>\
             <div class='palette-node-desc'>{}</div>",
            node.name, node.description
        ));
        add_drag_listener(&card, node.type_tag)?;
        section.append_child(&card)?;
    }

    panel.append_child(&section)?;
    Ok(())
}

fn add_drag_listener(element: &Element, type_tag: &'static str) -> Result<(), JsValue> {
    let ondragstart = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: DragEvent| {
        if let Some(data_transfer) = event.data_transfer() {
            let _ = data_transfer.set_data(NODE_TYPE_MIME, type_tag);
            data_transfer.set_effect_allowed("move");
        }
    }));
    element.add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
    ondragstart.forget();
    Ok(())
}
