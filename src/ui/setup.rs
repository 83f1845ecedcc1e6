//! Static page scaffolding: the canvas/side-panel split and the base styles.
//! Components mount themselves into `#side-panel` afterwards.

use wasm_bindgen::JsValue;
use web_sys::Document;

pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let app = document.create_element("div")?;
    app.set_id("app-container");

    let canvas_container = document.create_element("div")?;
    canvas_container.set_id("canvas-container");
    app.append_child(&canvas_container)?;

    let panel = document.create_element("aside")?;
    panel.set_id("side-panel");

    let title = document.create_element("h2")?;
    title.set_text_content(Some("AI Workflow Orchestrator"));
    panel.append_child(&title)?;

    app.append_child(&panel)?;
    body.append_child(&app)?;

    inject_base_styles(document)?;
    Ok(())
}

fn inject_base_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("base-styles").is_some() {
        return Ok(());
    }

    let css = "
#app-container{display:flex;height:100vh;font-family:sans-serif;color:#2d3748}
#canvas-container{flex:1;height:100%;overflow:hidden}
#side-panel{width:350px;border-left:1px solid #e2e8f0;padding:15px;background:#f7fafc;display:flex;flex-direction:column;gap:20px;overflow-y:auto}
#side-panel h2{margin:0}
#side-panel label,.panel-label{display:block;margin-bottom:5px;font-size:14px}
#side-panel select,#side-panel input,#side-panel textarea{width:100%;padding:8px;box-sizing:border-box;border:1px solid #cbd5e0;border-radius:4px}
#side-panel textarea{font-family:monospace}
.primary-btn{padding:12px;background:#4299e1;color:#fff;border:none;border-radius:8px;font-size:1em;cursor:pointer}
.execute-btn{background:#48bb78}
.execute-btn:disabled{background:#a0aec0;cursor:default}
.spinner{display:inline-block;width:14px;height:14px;border:2px solid #fff;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle}
@keyframes spin{to{transform:rotate(360deg)}}
.palette-node{padding:10px;border:2px dashed #cbd5e0;border-radius:8px;margin-bottom:10px;cursor:grab;text-align:center;background:#fff}
.palette-node-name{font-weight:600;font-size:14px}
.palette-node-desc{font-size:12px;color:#64748b}
#execution-result{background:#edf2f7;padding:10px;border-radius:8px;min-height:100px;white-space:pre-wrap;word-wrap:break-word}
";

    let style = document.create_element("style")?;
    style.set_id("base-styles");
    style.set_text_content(Some(css));
    if let Some(head) = document.query_selector("head")? {
        head.append_child(&style)?;
    } else {
        body_append(document, &style)?;
    }
    Ok(())
}

fn body_append(document: &Document, el: &web_sys::Element) -> Result<(), JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(el)?;
    Ok(())
}
