use proptest::prelude::*;

use crate::models::{ConnectParams, Position, WorkflowEdge, WorkflowNode};
use crate::state::AppState;

fn connect(source: &str, target: &str) -> ConnectParams {
    ConnectParams {
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
    }
}

proptest! {
    // Any sequence of add_node calls yields pairwise distinct ids, whatever
    // the type tags are (unknown ones are accepted without validation).
    #[test]
    fn node_ids_pairwise_distinct(types in prop::collection::vec("[a-zA-Z]{1,12}", 1..40)) {
        let mut state = AppState::new();
        for (i, t) in types.iter().enumerate() {
            state.add_node(t, i as f64 * 10.0, 0.0);
        }

        let mut ids: Vec<_> = state.nodes.iter().map(|n| n.id.clone()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}

#[test]
fn allocator_skips_ids_of_a_loaded_graph() {
    let mut state = AppState::new();

    let loaded = vec![
        WorkflowNode::with_default_data("1".into(), "input", Position { x: 0.0, y: 0.0 }),
        WorkflowNode::with_default_data("7".into(), "llmNode", Position { x: 100.0, y: 0.0 }),
        WorkflowNode::with_default_data("banana".into(), "llmNode", Position { x: 200.0, y: 0.0 }),
    ];
    state.replace_all(loaded, Vec::new());

    let new_id = state.add_node("llmNode", 300.0, 0.0);
    assert_eq!(new_id, "8");
    assert!(state.nodes.iter().filter(|n| n.id == new_id).count() == 1);
}

#[test]
fn allocator_never_resets_across_reloads() {
    let mut state = AppState::new();
    let before_load = state.add_node("llmNode", 0.0, 0.0);

    // Loading an empty graph must not lower the floor below ids already
    // handed out in this session.
    state.replace_all(Vec::new(), Vec::new());
    let after_load = state.add_node("llmNode", 0.0, 0.0);

    assert_ne!(before_load, after_load);
    assert!(
        after_load.parse::<u64>().unwrap() > before_load.parse::<u64>().unwrap(),
        "ids must stay monotonically increasing"
    );
}

#[test]
fn default_data_shapes_per_node_type() {
    let mut state = AppState::new();
    let llm_id = state.add_node("llmNode", 10.0, 10.0);
    let odd_id = state.add_node("somethingElse", 20.0, 20.0);

    let llm = state.nodes.iter().find(|n| n.id == llm_id).unwrap();
    assert_eq!(llm.data["label"], "New LLM Node");
    assert_eq!(llm.data["promptTemplate"], "Your prompt here...");

    let odd = state.nodes.iter().find(|n| n.id == odd_id).unwrap();
    assert_eq!(odd.data["label"], "somethingElse node");
    assert!(odd.data.get("promptTemplate").is_none());
}

#[test]
fn selection_is_exclusive_and_clearable() {
    let mut state = AppState::new();
    let a = state.add_node("llmNode", 0.0, 0.0);
    let b = state.add_node("llmNode", 50.0, 0.0);

    state.select_node(Some(&a));
    state.select_node(Some(&b));
    assert_eq!(state.selected_node_id(), Some(b.clone()));
    assert_eq!(state.nodes.iter().filter(|n| n.selected).count(), 1);

    state.select_node(None);
    assert_eq!(state.selected_node_id(), None);

    // Selection is transient: it never survives a snapshot reload.
    state.select_node(Some(&a));
    let nodes = serde_json::from_str(&state.nodes_json()).unwrap();
    state.replace_all(nodes, Vec::new());
    assert_eq!(state.selected_node_id(), None);
}

#[test]
fn connect_accepts_self_loops_and_multi_edges() {
    let mut state = AppState::new();
    let a = state.add_node("llmNode", 0.0, 0.0);

    state.connect(connect(&a, &a));
    state.connect(connect("1", &a));
    state.connect(connect("1", &a));

    assert_eq!(state.edges.len(), 3);
    assert_eq!(state.edges[0].source, state.edges[0].target);

    // Edge ids are opaque but must still be usable as removal keys.
    let mut edge_ids: Vec<_> = state.edges.iter().map(|e| e.id.clone()).collect();
    let total = edge_ids.len();
    edge_ids.sort();
    edge_ids.dedup();
    assert_eq!(edge_ids.len(), total);
}

#[test]
fn edge_ids_stay_unique_after_reload() {
    let mut state = AppState::new();
    state.add_node("llmNode", 100.0, 0.0);
    state.connect(connect("1", "2"));

    let nodes_json = state.nodes_json();
    let edges_json = state.edges_json();

    // A fresh session loads the saved graph and connects the same pair.
    let mut reloaded = AppState::new();
    reloaded.replace_all(
        serde_json::from_str(&nodes_json).unwrap(),
        serde_json::from_str(&edges_json).unwrap(),
    );
    let new_edge = reloaded.connect(connect("1", "2"));

    assert_ne!(reloaded.edges[0].id, new_edge);

    // Removal keys stay independent: dropping the new edge must leave the
    // loaded parallel one in place.
    reloaded.remove_edge(&new_edge);
    assert_eq!(reloaded.edges.len(), 1);
}

#[test]
fn connect_keeps_handle_metadata_verbatim() {
    let mut state = AppState::new();
    state.connect(ConnectParams {
        source: "1".into(),
        target: "2".into(),
        source_handle: Some("out-a".into()),
        target_handle: Some("in-b".into()),
    });

    let edge = &state.edges[0];
    assert_eq!(edge.source_handle.as_deref(), Some("out-a"));
    assert_eq!(edge.target_handle.as_deref(), Some("in-b"));
}

#[test]
fn replace_all_swaps_both_sets_atomically() {
    let mut state = AppState::new();
    state.add_node("llmNode", 0.0, 0.0);
    state.connect(connect("1", "2"));

    let nodes = vec![WorkflowNode::with_default_data(
        "10".into(),
        "input",
        Position { x: 5.0, y: 5.0 },
    )];
    let edges = vec![WorkflowEdge {
        id: "e1".into(),
        source: "10".into(),
        target: "10".into(),
        source_handle: None,
        target_handle: None,
    }];
    state.replace_all(nodes.clone(), edges.clone());

    assert_eq!(state.nodes, nodes);
    assert_eq!(state.edges, edges);
}

#[test]
fn incremental_changes_apply_verbatim() {
    let mut state = AppState::new();
    let id = state.add_node("llmNode", 0.0, 0.0);
    state.connect(connect("1", &id));
    let edge_id = state.edges[0].id.clone();

    state.move_node(&id, 42.0, 24.0);
    let node = state.nodes.iter().find(|n| n.id == id).unwrap();
    assert_eq!(node.position, Position { x: 42.0, y: 24.0 });

    // Removing a node does not cascade to its edges; the canvas owns that
    // policy and hands us the post-cascade set separately.
    state.remove_node(&id);
    assert_eq!(state.edges.len(), 1);

    state.remove_edge(&edge_id);
    assert!(state.edges.is_empty());

    // Moving or removing unknown ids is a no-op rather than a fault.
    state.move_node("missing", 1.0, 1.0);
    state.remove_node("missing");
    state.remove_edge("missing");
}
