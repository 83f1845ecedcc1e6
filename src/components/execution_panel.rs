//! Execution controls: variables editor, execute button and result pane.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlButtonElement, HtmlTextAreaElement, MouseEvent};

use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn init(document: &Document) -> Result<(), JsValue> {
    let panel = document
        .get_element_by_id("side-panel")
        .ok_or_else(|| JsValue::from_str("side-panel not found"))?;

    // Variables editor
    let vars_block = document.create_element("div")?;
    let vars_label = document.create_element("label")?;
    vars_label.set_text_content(Some("Initial Variables (JSON):"));
    vars_block.append_child(&vars_label)?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_id("initial-variables");
    textarea.set_rows(5);
    let default_vars = APP_STATE.with(|s| s.borrow().variables_text.clone());
    textarea.set_value(&default_vars);
    {
        let textarea_ref = textarea.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            dispatch_global_message(Message::SetVariablesText(textarea_ref.value()));
        }));
        textarea.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    vars_block.append_child(&textarea)?;
    panel.append_child(&vars_block)?;

    // Execute button
    let execute_btn: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    execute_btn.set_id("execute-btn");
    execute_btn.set_class_name("primary-btn execute-btn");
    execute_btn.set_text_content(Some("Execute Full Workflow"));
    {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            dispatch_global_message(Message::ExecuteWorkflow);
        }));
        execute_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    panel.append_child(&execute_btn)?;

    // Result pane
    let result_block = document.create_element("div")?;
    let result_label = document.create_element("label")?;
    result_label.set_text_content(Some("Execution Result:"));
    result_block.append_child(&result_label)?;

    let result_pre = document.create_element("pre")?;
    result_pre.set_id("execution-result");
    result_block.append_child(&result_pre)?;
    panel.append_child(&result_block)?;

    Ok(())
}

/// Mirror execution state into the DOM: spinner + disabled button while a
/// run is in flight, result text when one finished.
pub fn refresh(document: &Document) -> Result<(), JsValue> {
    let (is_executing, result) = APP_STATE.with(|state| {
        let st = state.borrow();
        (st.is_executing, st.execution_result.clone())
    });

    if let Some(btn) = document
        .get_element_by_id("execute-btn")
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        btn.set_disabled(is_executing);
        if is_executing {
            btn.set_inner_html("<span class='spinner'></span> Executing...");
        } else {
            btn.set_text_content(Some("Execute Full Workflow"));
        }
    }

    if let Some(pre) = document.get_element_by_id("execution-result") {
        pre.set_text_content(Some(&result));
    }

    Ok(())
}
