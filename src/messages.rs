// src/messages.rs
//
// The events that can occur in the editor, plus the side-effect commands the
// reducer hands back to be executed outside the state borrow.
//
use crate::models::{
    ConnectParams, ExecuteRequest, NotificationKind, Workflow,
};

#[derive(Debug, Clone)]
pub enum Message {
    // ------------------------------------------------------------------
    // Graph mutations (canvas drag/drop, connect, incremental changes)
    // ------------------------------------------------------------------
    /// Drop of a palette card onto the canvas.  `x`/`y` are already in flow
    /// coordinates (the canvas translates pointer coordinates before
    /// dispatching).
    AddNode {
        node_type: String,
        x: f64,
        y: f64,
    },
    /// Completed connect gesture between two nodes.
    ConnectNodes(ConnectParams),
    /// Pointer-down selection; `None` clears it (click on empty canvas).
    NodeSelected {
        node_id: Option<String>,
    },
    /// Canvas-originated incremental updates.  The store applies these
    /// verbatim - it never re-derives them, and the deletion cascade (edges
    /// of a removed node) is the canvas's responsibility.
    NodeMoved {
        node_id: String,
        x: f64,
        y: f64,
    },
    NodeRemoved {
        node_id: String,
    },
    EdgeRemoved {
        edge_id: String,
    },

    // ------------------------------------------------------------------
    // Workflow lifecycle
    // ------------------------------------------------------------------
    /// Kick off a list fetch.  With `auto_select_first` the first workflow
    /// of the response is loaded once the list arrives (bootstrap behavior).
    RefreshWorkflowList {
        auto_select_first: bool,
    },
    WorkflowsLoaded {
        workflows: Vec<Workflow>,
        auto_select_first: bool,
    },
    WorkflowListFetchFailed(String),
    /// Select a workflow from the cached list and install its node/edge
    /// snapshots in the store.  Unsaved in-memory changes to the previous
    /// selection are discarded without warning.
    LoadWorkflow {
        workflow_id: u32,
    },
    SetWorkflowName(String),
    SaveWorkflow,
    WorkflowSaved(Workflow),
    WorkflowSaveFailed(String),

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------
    SetVariablesText(String),
    ExecuteWorkflow,
    ExecutionFinished(String),
    ExecutionFailed(String),

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------
    ShowNotification {
        message: String,
        kind: NotificationKind,
    },
    /// Fired by the dismiss timer.  Carries the sequence number of the
    /// notification it was scheduled for; a stale sequence is a no-op so an
    /// old timer can never clear a newer message.
    NotificationExpired(u64),
}

/// Side effects requested by the reducer.  Executed by
/// `command_executors::execute` after the state borrow is released.
pub enum Command {
    /// Chain another message through the normal dispatch path.
    SendMessage(Message),

    /// Run a UI update closure outside the reducer.
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// `GET /api/workflows`
    FetchWorkflows { auto_select_first: bool },

    /// Create (`workflow_id: None`) or update an existing record.
    PersistWorkflow {
        workflow_id: Option<u32>,
        name: String,
        nodes_json: String,
        edges_json: String,
    },

    /// `POST /api/workflows/{id}/execute-full`
    ExecuteWorkflow {
        workflow_id: u32,
        request: ExecuteRequest,
    },

    /// Schedule `Message::NotificationExpired(seq)` after `delay_ms`.
    DismissNotificationAfter { seq: u64, delay_ms: u32 },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SendMessage(msg) => f.debug_tuple("SendMessage").field(msg).finish(),
            Command::UpdateUI(_) => f.write_str("UpdateUI(..)"),
            Command::FetchWorkflows { auto_select_first } => f
                .debug_struct("FetchWorkflows")
                .field("auto_select_first", auto_select_first)
                .finish(),
            Command::PersistWorkflow {
                workflow_id, name, ..
            } => f
                .debug_struct("PersistWorkflow")
                .field("workflow_id", workflow_id)
                .field("name", name)
                .finish(),
            Command::ExecuteWorkflow { workflow_id, .. } => f
                .debug_struct("ExecuteWorkflow")
                .field("workflow_id", workflow_id)
                .finish(),
            Command::DismissNotificationAfter { seq, delay_ms } => f
                .debug_struct("DismissNotificationAfter")
                .field("seq", seq)
                .field("delay_ms", delay_ms)
                .finish(),
        }
    }
}
