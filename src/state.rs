use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::canvas::GraphCanvas;
use crate::constants::{DEFAULT_VARIABLES_JSON, DEFAULT_WORKFLOW_NAME, NODE_TYPE_INPUT};
use crate::ids::NodeIdAllocator;
use crate::messages::Message;
use crate::models::{
    ConnectParams, Notification, Position, Workflow, WorkflowEdge, WorkflowNode,
};

/// Global application state: the live graph, the cached workflow list, the
/// execution status and the currently visible notification.
///
/// The node/edge sets are owned here exclusively - the persistence layer only
/// ever serializes them out (`nodes_json`/`edges_json`) or swaps them in
/// (`replace_all`), it never keeps its own copy.
pub struct AppState {
    // Graph state store
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    pub allocator: NodeIdAllocator,
    edge_seq: u64,

    // Workflow lifecycle
    pub workflows: Vec<Workflow>,
    pub selected_workflow_id: Option<u32>,
    pub workflow_name: String,

    // Execution controller
    pub variables_text: String,
    pub execution_result: String,
    pub is_executing: bool,

    // Notification presenter
    pub notification: Option<Notification>,
    pub notification_seq: u64,

    // External canvas capability, attached by the shell after setup.  Unit
    // tests leave this as None; every reducer path must work without it.
    pub canvas: Option<Rc<dyn GraphCanvas>>,
}

impl AppState {
    pub fn new() -> Self {
        let nodes = seed_graph();
        let allocator = NodeIdAllocator::seeded_above(&nodes);
        Self {
            nodes,
            edges: Vec::new(),
            allocator,
            edge_seq: 0,
            workflows: Vec::new(),
            selected_workflow_id: None,
            workflow_name: DEFAULT_WORKFLOW_NAME.to_string(),
            variables_text: DEFAULT_VARIABLES_JSON.to_string(),
            execution_result: String::new(),
            is_executing: false,
            notification: None,
            notification_seq: 0,
            canvas: None,
        }
    }

    // ------------------------------------------------------------------
    // Graph state store operations
    // ------------------------------------------------------------------

    /// Append a node of `node_type` at the given flow position with the
    /// type-specific default data shape.  Unknown types are accepted.
    /// Returns the allocated id.
    pub fn add_node(&mut self, node_type: &str, x: f64, y: f64) -> String {
        let id = self.allocator.next_id();
        let node =
            WorkflowNode::with_default_data(id.clone(), node_type, Position { x, y });
        self.nodes.push(node);
        id
    }

    /// Append an edge derived from canvas-supplied connection params.  No
    /// shape validation: self-loops and multi-edges are representable and it
    /// is the execution backend's job to reject graphs it cannot run.
    pub fn connect(&mut self, params: ConnectParams) -> String {
        self.edge_seq += 1;
        let id = format!("edge-{}-{}-{}", params.source, params.target, self.edge_seq);
        self.edges.push(WorkflowEdge {
            id: id.clone(),
            source: params.source,
            target: params.target,
            source_handle: params.source_handle,
            target_handle: params.target_handle,
        });
        id
    }

    /// Atomically discard the current node/edge sets and install the given
    /// ones.  Both vectors are swapped in a single mutation so the canvas can
    /// never observe a half-applied graph.  The node and edge id floors are
    /// raised (never reset) so nodes and edges created afterwards stay
    /// unique against the loaded sets.
    pub fn replace_all(&mut self, nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.allocator.raise_floor(&self.nodes);
        self.raise_edge_floor();
    }

    /// Bump `edge_seq` above every `edge-*-{n}` suffix in the current edge
    /// set, so connecting an already-saved pair again cannot reproduce a
    /// loaded id.  Foreign id shapes are ignored; our own ids never collide
    /// with those.
    fn raise_edge_floor(&mut self) {
        for edge in &self.edges {
            let seq = edge
                .id
                .strip_prefix("edge-")
                .and_then(|rest| rest.rsplit('-').next())
                .and_then(|s| s.parse::<u64>().ok());
            if let Some(n) = seq {
                if n > self.edge_seq {
                    self.edge_seq = n;
                }
            }
        }
    }

    /// At most one node is selected at a time; `None` clears the selection.
    pub fn select_node(&mut self, node_id: Option<&str>) {
        for node in &mut self.nodes {
            node.selected = Some(node.id.as_str()) == node_id;
        }
    }

    /// Id of the currently selected node, if any.
    pub fn selected_node_id(&self) -> Option<String> {
        self.nodes.iter().find(|n| n.selected).map(|n| n.id.clone())
    }

    /// Canvas-originated drag-move passthrough.
    pub fn move_node(&mut self, node_id: &str, x: f64, y: f64) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.position = Position { x, y };
        }
    }

    /// Canvas-originated delete passthrough.  The edge cascade for a removed
    /// node is delegated to the canvas; we accept whatever post-cascade edge
    /// set it hands us via `remove_edge`.
    pub fn remove_node(&mut self, node_id: &str) {
        self.nodes.retain(|n| n.id != node_id);
    }

    pub fn remove_edge(&mut self, edge_id: &str) {
        self.edges.retain(|e| e.id != edge_id);
    }

    // ------------------------------------------------------------------
    // Serialization contract
    // ------------------------------------------------------------------

    /// Snapshot of the node set for persistence.  Transient canvas fields
    /// are `#[serde(skip)]` on [`WorkflowNode`], so only id/type/position/
    /// data survive - reloading reproduces an editor-equivalent graph.
    pub fn nodes_json(&self) -> String {
        serde_json::to_string(&self.nodes).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn edges_json(&self) -> String {
        serde_json::to_string(&self.edges).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse the user-edited variables textarea.
    pub fn parse_variables(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.variables_text)
    }

    pub fn find_workflow(&self, workflow_id: u32) -> Option<&Workflow> {
        self.workflows.iter().find(|wf| wf.id == workflow_id)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// The statically seeded initial graph: a single input node the user can
/// connect new nodes from.
fn seed_graph() -> Vec<WorkflowNode> {
    vec![WorkflowNode::with_default_data(
        "1".to_string(),
        NODE_TYPE_INPUT,
        Position { x: 50.0, y: 50.0 },
    )]
}

/// Run the reducer for `msg`, release the state borrow, then execute the
/// returned commands.  All async completions re-enter through here, so no
/// `RefCell` borrow is ever held across an await point.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        crate::update::update(&mut state, msg)
    });

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
