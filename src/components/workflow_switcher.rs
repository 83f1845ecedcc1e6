//! Workflow selector, name field and save button in the side panel.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlInputElement, HtmlSelectElement, MouseEvent};

use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

/// Build the selector widgets once.  `refresh` keeps them in sync afterwards.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let panel = document
        .get_element_by_id("side-panel")
        .ok_or_else(|| JsValue::from_str("side-panel not found"))?;

    // Load Workflow: <select>
    let load_block = document.create_element("div")?;
    let load_label = document.create_element("label")?;
    load_label.set_text_content(Some("Load Workflow:"));
    load_block.append_child(&load_label)?;

    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id("workflow-select");
    {
        let select_ref = select.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            if let Ok(workflow_id) = select_ref.value().parse::<u32>() {
                dispatch_global_message(Message::LoadWorkflow { workflow_id });
            }
        }));
        select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    load_block.append_child(&select)?;
    panel.append_child(&load_block)?;

    // Workflow Name: <input>
    let name_block = document.create_element("div")?;
    let name_label = document.create_element("label")?;
    name_label.set_text_content(Some("Workflow Name:"));
    name_block.append_child(&name_label)?;

    let name_input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    name_input.set_id("workflow-name");
    name_input.set_type("text");
    {
        let input_ref = name_input.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            dispatch_global_message(Message::SetWorkflowName(input_ref.value()));
        }));
        name_input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    name_block.append_child(&name_input)?;
    panel.append_child(&name_block)?;

    // Save button
    let save_btn = document.create_element("button")?;
    save_btn.set_id("save-workflow-btn");
    save_btn.set_class_name("primary-btn");
    save_btn.set_text_content(Some("Save Workflow"));
    {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            dispatch_global_message(Message::SaveWorkflow);
        }));
        save_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    panel.append_child(&save_btn)?;

    refresh(document)
}

/// Rebuild the dropdown options and name field from current state.  Backend
/// list order is preserved as-is.
pub fn refresh(document: &Document) -> Result<(), JsValue> {
    let (workflows, selected_id, name) = APP_STATE.with(|state| {
        let st = state.borrow();
        (
            st.workflows.clone(),
            st.selected_workflow_id,
            st.workflow_name.clone(),
        )
    });

    if let Some(select) = document
        .get_element_by_id("workflow-select")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_inner_html("");

        let placeholder = document.create_element("option")?;
        placeholder.set_attribute("value", "")?;
        placeholder.set_text_content(Some("Select a workflow"));
        select.append_child(&placeholder)?;

        for wf in &workflows {
            let option = document.create_element("option")?;
            option.set_attribute("value", &wf.id.to_string())?;
            option.set_text_content(Some(&wf.name));
            select.append_child(&option)?;
        }

        select.set_value(&selected_id.map(|id| id.to_string()).unwrap_or_default());
    }

    if let Some(input) = document
        .get_element_by_id("workflow-name")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        if input.value() != name {
            input.set_value(&name);
        }
    }

    Ok(())
}
