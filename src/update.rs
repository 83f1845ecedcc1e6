// src/update.rs
//
// The reducer.  Pure state transitions plus a list of commands for the side
// effects; no DOM and no network happens in here, which is what keeps the
// whole lifecycle unit-testable.
//
use crate::constants::{DEFAULT_MODEL_ID, NOTIFICATION_TIMEOUT_MS};
use crate::messages::{Command, Message};
use crate::models::{
    ExecuteRequest, Notification, NotificationKind, WorkflowEdge, WorkflowNode,
};
use crate::state::{AppState, APP_STATE};

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        // --------------------------------------------------------------
        // Graph mutations
        // --------------------------------------------------------------
        Message::AddNode { node_type, x, y } => {
            state.add_node(&node_type, x, y);
            commands.push(refresh_canvas());
        }

        Message::ConnectNodes(params) => {
            state.connect(params);
            commands.push(refresh_canvas());
        }

        Message::NodeSelected { node_id } => {
            state.select_node(node_id.as_deref());
            commands.push(refresh_canvas());
        }

        Message::NodeMoved { node_id, x, y } => {
            state.move_node(&node_id, x, y);
            commands.push(refresh_canvas());
        }

        Message::NodeRemoved { node_id } => {
            state.remove_node(&node_id);
            commands.push(refresh_canvas());
        }

        Message::EdgeRemoved { edge_id } => {
            state.remove_edge(&edge_id);
            commands.push(refresh_canvas());
        }

        // --------------------------------------------------------------
        // Workflow lifecycle
        // --------------------------------------------------------------
        Message::RefreshWorkflowList { auto_select_first } => {
            commands.push(Command::FetchWorkflows { auto_select_first });
        }

        Message::WorkflowsLoaded {
            workflows,
            auto_select_first,
        } => {
            // Backend order is kept as-is; the switcher renders it verbatim.
            state.workflows = workflows;
            commands.push(refresh_side_panel());

            if auto_select_first && state.selected_workflow_id.is_none() {
                if let Some(first) = state.workflows.first() {
                    commands.push(Command::SendMessage(Message::LoadWorkflow {
                        workflow_id: first.id,
                    }));
                }
            }
        }

        Message::WorkflowListFetchFailed(err) => {
            show_notification(state, &mut commands, err, NotificationKind::Error);
        }

        Message::LoadWorkflow { workflow_id } => {
            let Some(workflow) = state.find_workflow(workflow_id).cloned() else {
                // Requested id missing from the cached list.
                show_notification(
                    state,
                    &mut commands,
                    format!("Workflow {} not found", workflow_id),
                    NotificationKind::Error,
                );
                return commands;
            };

            let nodes = decode_snapshot::<WorkflowNode>(workflow.nodes_json.as_deref());
            let edges = decode_snapshot::<WorkflowEdge>(workflow.edges_json.as_deref());
            match (nodes, edges) {
                (Ok(nodes), Ok(edges)) => {
                    state.replace_all(nodes, edges);
                    state.selected_workflow_id = Some(workflow.id);
                    state.workflow_name = workflow.name;
                    commands.push(refresh_canvas());
                    commands.push(refresh_side_panel());
                }
                (Err(e), _) | (_, Err(e)) => {
                    show_notification(
                        state,
                        &mut commands,
                        format!("Workflow \"{}\" has a corrupt snapshot: {}", workflow.name, e),
                        NotificationKind::Error,
                    );
                }
            }
        }

        Message::SetWorkflowName(name) => {
            state.workflow_name = name;
        }

        Message::SaveWorkflow => {
            let name = state.workflow_name.trim().to_string();
            if name.is_empty() {
                show_notification(
                    state,
                    &mut commands,
                    "Workflow name must not be empty".to_string(),
                    NotificationKind::Error,
                );
                return commands;
            }

            commands.push(Command::PersistWorkflow {
                workflow_id: state.selected_workflow_id,
                name,
                nodes_json: state.nodes_json(),
                edges_json: state.edges_json(),
            });
        }

        Message::WorkflowSaved(workflow) => {
            // Adopt the backend-assigned id so the next save is an update.
            state.selected_workflow_id = Some(workflow.id);
            state.workflow_name = workflow.name.clone();
            show_notification(
                state,
                &mut commands,
                format!("Workflow \"{}\" saved!", workflow.name),
                NotificationKind::Success,
            );
            // Refresh the list so the new/renamed entry shows up.  If that
            // fetch fails it surfaces its own notification; the selection
            // adopted above is not rolled back.
            commands.push(Command::FetchWorkflows {
                auto_select_first: false,
            });
        }

        Message::WorkflowSaveFailed(err) => {
            show_notification(state, &mut commands, err, NotificationKind::Error);
        }

        // --------------------------------------------------------------
        // Execution
        // --------------------------------------------------------------
        Message::SetVariablesText(text) => {
            state.variables_text = text;
        }

        Message::ExecuteWorkflow => {
            // The button is disabled while executing; the reducer drops the
            // message too in case a stray event slips through.
            if state.is_executing {
                return commands;
            }

            let Some(workflow_id) = state.selected_workflow_id else {
                show_notification(
                    state,
                    &mut commands,
                    "Please save or load a workflow first.".to_string(),
                    NotificationKind::Error,
                );
                return commands;
            };

            let variables = match state.parse_variables() {
                Ok(v) => v,
                Err(e) => {
                    show_notification(
                        state,
                        &mut commands,
                        format!("Invalid variables JSON: {}", e),
                        NotificationKind::Error,
                    );
                    return commands;
                }
            };

            state.is_executing = true;
            state.execution_result.clear();
            commands.push(refresh_execution_panel());
            commands.push(Command::ExecuteWorkflow {
                workflow_id,
                request: ExecuteRequest {
                    model_id: DEFAULT_MODEL_ID.to_string(),
                    initial_variables: variables,
                },
            });
        }

        Message::ExecutionFinished(result) => {
            state.is_executing = false;
            state.execution_result = result;
            commands.push(refresh_execution_panel());
        }

        Message::ExecutionFailed(err) => {
            state.is_executing = false;
            show_notification(state, &mut commands, err, NotificationKind::Error);
            commands.push(refresh_execution_panel());
        }

        // --------------------------------------------------------------
        // Notifications
        // --------------------------------------------------------------
        Message::ShowNotification { message, kind } => {
            show_notification(state, &mut commands, message, kind);
        }

        Message::NotificationExpired(seq) => {
            // Only the timer belonging to the currently shown notification
            // may clear it.
            if seq == state.notification_seq && state.notification.is_some() {
                state.notification = None;
                commands.push(refresh_toast());
            }
        }
    }

    commands
}

/// Replace the visible notification and restart the expiry timer.
fn show_notification(
    state: &mut AppState,
    commands: &mut Vec<Command>,
    message: String,
    kind: NotificationKind,
) {
    state.notification_seq += 1;
    state.notification = Some(Notification { message, kind });
    commands.push(Command::DismissNotificationAfter {
        seq: state.notification_seq,
        delay_ms: NOTIFICATION_TIMEOUT_MS,
    });
    commands.push(refresh_toast());
}

/// An absent or empty snapshot decodes to an empty set rather than failing.
fn decode_snapshot<T: serde::de::DeserializeOwned>(
    json: Option<&str>,
) -> Result<Vec<T>, serde_json::Error> {
    match json {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s),
    }
}

// ---------------------------------------------------------------------------
// UI refresh commands.  Each closure re-resolves the document at run time so
// the reducer stays DOM-free and headless tests can execute without a window.
// ---------------------------------------------------------------------------

fn refresh_canvas() -> Command {
    Command::UpdateUI(Box::new(|| {
        let canvas = APP_STATE.with(|s| s.borrow().canvas.clone());
        if let Some(canvas) = canvas {
            APP_STATE.with(|s| canvas.render(&s.borrow()));
        }
    }))
}

fn refresh_side_panel() -> Command {
    Command::UpdateUI(Box::new(|| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Err(e) = crate::components::workflow_switcher::refresh(&document) {
                web_sys::console::warn_1(
                    &format!("Failed to refresh workflow switcher: {:?}", e).into(),
                );
            }
        }
    }))
}

fn refresh_execution_panel() -> Command {
    Command::UpdateUI(Box::new(|| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Err(e) = crate::components::execution_panel::refresh(&document) {
                web_sys::console::warn_1(
                    &format!("Failed to refresh execution panel: {:?}", e).into(),
                );
            }
        }
    }))
}

fn refresh_toast() -> Command {
    Command::UpdateUI(Box::new(|| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let notification = APP_STATE.with(|s| s.borrow().notification.clone());
            crate::toast::render(&document, notification.as_ref());
        }
    }))
}
