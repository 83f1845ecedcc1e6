//! Unit tests for the editor core.  Everything here drives the real reducer
//! against a fresh `AppState` with no canvas attached and no DOM, so the
//! suite runs headless; returned commands are inspected, never executed.

mod execution_tests;
mod graph_state_tests;
mod notification_tests;

use crate::messages::Command;
use crate::models::NotificationKind;
use crate::state::AppState;

/// True when the currently shown notification is an error.
pub(crate) fn showing_error(state: &AppState) -> bool {
    matches!(
        state.notification,
        Some(ref n) if n.kind == NotificationKind::Error
    )
}

/// Count of network-touching commands in a reducer result.
pub(crate) fn network_commands(commands: &[Command]) -> usize {
    commands
        .iter()
        .filter(|c| {
            matches!(
                c,
                Command::FetchWorkflows { .. }
                    | Command::PersistWorkflow { .. }
                    | Command::ExecuteWorkflow { .. }
            )
        })
        .count()
}
