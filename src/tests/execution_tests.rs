use super::{network_commands, showing_error};
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::update::update;

#[test]
fn execute_without_selection_never_reaches_network() {
    let mut state = AppState::new();

    let commands = update(&mut state, Message::ExecuteWorkflow);

    assert_eq!(network_commands(&commands), 0);
    assert!(!state.is_executing);
    assert!(showing_error(&state));
    assert!(matches!(
        state.notification,
        Some(ref n) if n.message.contains("save or load")
    ));
}

#[test]
fn invalid_variables_json_aborts_before_network() {
    let mut state = AppState::new();
    state.selected_workflow_id = Some(3);
    update(&mut state, Message::SetVariablesText("{".into()));

    let commands = update(&mut state, Message::ExecuteWorkflow);

    assert_eq!(network_commands(&commands), 0);
    assert!(!state.is_executing);
    assert!(showing_error(&state));
}

#[test]
fn execute_builds_request_from_parsed_variables() {
    let mut state = AppState::new();
    state.selected_workflow_id = Some(3);
    state.execution_result = "stale output".into();

    let commands = update(&mut state, Message::ExecuteWorkflow);

    assert!(state.is_executing);
    assert!(state.execution_result.is_empty(), "stale result cleared");

    let request = commands
        .iter()
        .find_map(|c| match c {
            Command::ExecuteWorkflow {
                workflow_id: 3,
                request,
            } => Some(request),
            _ => None,
        })
        .expect("expected an execute command for workflow 3");

    assert_eq!(request.model_id, "openai");
    // Default variables sample parses into the expected mapping.
    assert_eq!(request.initial_variables["topic"], "the moon");
    assert_eq!(request.initial_variables["style"], "Dr. Seuss");
}

#[test]
fn execute_while_in_flight_is_rejected_not_queued() {
    let mut state = AppState::new();
    state.selected_workflow_id = Some(3);

    let first = update(&mut state, Message::ExecuteWorkflow);
    assert_eq!(network_commands(&first), 1);

    let second = update(&mut state, Message::ExecuteWorkflow);
    assert!(second.is_empty());
    assert!(state.is_executing);
}

#[test]
fn in_flight_flag_clears_on_success() {
    let mut state = AppState::new();
    state.selected_workflow_id = Some(3);
    update(&mut state, Message::ExecuteWorkflow);

    update(
        &mut state,
        Message::ExecutionFinished("Once upon a moon...".into()),
    );

    assert!(!state.is_executing);
    assert_eq!(state.execution_result, "Once upon a moon...");
    assert!(state.notification.is_none());
}

#[test]
fn in_flight_flag_clears_on_failure() {
    let mut state = AppState::new();
    state.selected_workflow_id = Some(3);
    update(&mut state, Message::ExecuteWorkflow);

    update(
        &mut state,
        Message::ExecutionFailed("Execution failed: provider unavailable".into()),
    );

    assert!(!state.is_executing);
    assert!(showing_error(&state));

    // The controller is back in its idle state: a new run may start.
    let commands = update(&mut state, Message::ExecuteWorkflow);
    assert_eq!(network_commands(&commands), 1);
}
