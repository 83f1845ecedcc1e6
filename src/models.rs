use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_LLM_LABEL, DEFAULT_LLM_PROMPT, NODE_TYPE_INPUT, NODE_TYPE_LLM,
};

/// Position of a node in canvas (flow) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single node of the workflow graph.
///
/// Only `id`, `type`, `position` and `data` are part of the persistence
/// contract; everything the canvas needs at runtime (selection, drag state)
/// is `#[serde(skip)]` so a saved workflow round-trips to an editor-equivalent
/// graph with transient state reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    /// Type-specific configuration.  Minimally a display `label`; the LLM
    /// node type additionally carries a `promptTemplate` string.  The shape
    /// is not validated here - unknown node types get a generic label.
    pub data: Map<String, Value>,

    // Canvas-only runtime state, never persisted.
    #[serde(skip)]
    pub selected: bool,
    #[serde(skip)]
    pub dragging: bool,
}

impl WorkflowNode {
    /// Build a node with the default `data` shape for the given type tag.
    pub fn with_default_data(id: String, node_type: &str, position: Position) -> Self {
        let mut data = Map::new();
        match node_type {
            NODE_TYPE_LLM => {
                data.insert("label".into(), Value::String(DEFAULT_LLM_LABEL.into()));
                data.insert(
                    "promptTemplate".into(),
                    Value::String(DEFAULT_LLM_PROMPT.into()),
                );
            }
            NODE_TYPE_INPUT => {
                data.insert("label".into(), Value::String("Start".into()));
            }
            other => {
                data.insert("label".into(), Value::String(format!("{} node", other)));
            }
        }
        Self {
            id,
            node_type: node_type.to_string(),
            position,
            data,
            selected: false,
            dragging: false,
        }
    }

    pub fn label(&self) -> &str {
        self.data
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or(&self.id)
    }
}

/// A directed connection between two node ids.  `id` and the handle fields
/// are canvas-assigned metadata we store verbatim and never interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(
        rename = "targetHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
}

/// Connection parameters as supplied by the canvas when the user completes a
/// connect gesture.  The store derives a [`WorkflowEdge`] from these without
/// any shape validation (self-loops and multi-edges are representable).
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

/// A workflow record as the backend stores it: a name plus JSON snapshots of
/// the node and edge sets taken at last save.  `id` is backend-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: u32,
    pub name: String,
    #[serde(rename = "nodesJson", default)]
    pub nodes_json: Option<String>,
    #[serde(rename = "edgesJson", default)]
    pub edges_json: Option<String>,
}

/// Request body for create (`POST /api/workflows`) and update
/// (`PUT /api/workflows/{id}`).
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowPayload {
    pub name: String,
    #[serde(rename = "nodesJson")]
    pub nodes_json: String,
    #[serde(rename = "edgesJson")]
    pub edges_json: String,
}

/// Request body for `POST /api/workflows/{id}/execute-full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    #[serde(rename = "modelId")]
    pub model_id: String,
    #[serde(rename = "initialVariables")]
    pub initial_variables: Value,
}

/// Opaque execution result returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteResponse {
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user-facing status message.  At most one is visible at a time;
/// a newer one replaces the current one and restarts the expiry timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}
