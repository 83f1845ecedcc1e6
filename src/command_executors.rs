use crate::messages::{Command, Message};
use crate::models::{ExecuteResponse, Workflow};
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;

/// Execute a single command produced by the reducer.  Network commands spawn
/// an async task and re-enter the dispatch loop with a completion message;
/// nothing here blocks the event loop.
pub fn execute(cmd: Command) {
    match cmd {
        Command::SendMessage(msg) => {
            dispatch_global_message(msg);
        }

        Command::UpdateUI(f) => {
            f();
        }

        Command::FetchWorkflows { auto_select_first } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_workflows().await {
                    Ok(response) => match serde_json::from_str::<Vec<Workflow>>(&response) {
                        Ok(workflows) => dispatch_global_message(Message::WorkflowsLoaded {
                            workflows,
                            auto_select_first,
                        }),
                        Err(e) => dispatch_global_message(Message::WorkflowListFetchFailed(
                            format!("Failed to parse workflow list: {}", e),
                        )),
                    },
                    Err(e) => dispatch_global_message(Message::WorkflowListFetchFailed(
                        format!("Failed to fetch workflows: {}", js_error_text(&e)),
                    )),
                }
            });
        }

        Command::PersistWorkflow {
            workflow_id,
            name,
            nodes_json,
            edges_json,
        } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match workflow_id {
                    Some(id) => {
                        ApiClient::update_workflow(id, &name, &nodes_json, &edges_json).await
                    }
                    None => ApiClient::create_workflow(&name, &nodes_json, &edges_json).await,
                };

                match result {
                    Ok(response) => match serde_json::from_str::<Workflow>(&response) {
                        Ok(saved) => dispatch_global_message(Message::WorkflowSaved(saved)),
                        Err(e) => dispatch_global_message(Message::WorkflowSaveFailed(format!(
                            "Failed to parse save response: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::WorkflowSaveFailed(format!(
                        "Failed to save: {}",
                        js_error_text(&e)
                    ))),
                }
            });
        }

        Command::ExecuteWorkflow {
            workflow_id,
            request,
        } => {
            wasm_bindgen_futures::spawn_local(async move {
                let body = match serde_json::to_string(&request) {
                    Ok(b) => b,
                    Err(e) => {
                        dispatch_global_message(Message::ExecutionFailed(format!(
                            "Failed to encode execute request: {}",
                            e
                        )));
                        return;
                    }
                };

                match ApiClient::execute_workflow(workflow_id, &body).await {
                    Ok(response) => match serde_json::from_str::<ExecuteResponse>(&response) {
                        Ok(out) => dispatch_global_message(Message::ExecutionFinished(out.result)),
                        Err(e) => dispatch_global_message(Message::ExecutionFailed(format!(
                            "Failed to parse execution response: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::ExecutionFailed(format!(
                        "Execution failed: {}",
                        js_error_text(&e)
                    ))),
                }
            });
        }

        Command::DismissNotificationAfter { seq, delay_ms } => {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                dispatch_global_message(Message::NotificationExpired(seq));
            });
        }
    }
}

fn js_error_text(e: &wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
