//! Session-local node identifier allocation.
//!
//! The allocator is an explicit object owned by the graph state rather than a
//! process-wide counter, so independent editor instances (and unit tests) do
//! not share id sequences.

use crate::models::WorkflowNode;

/// Produces unique, monotonically increasing string ids for the lifetime of
/// an editor session.  The counter only ever moves forward: loading a graph
/// raises the floor above any numeric id it contains but never lowers it, so
/// a node created after a reload cannot collide with a pre-existing id.
#[derive(Debug, Clone)]
pub struct NodeIdAllocator {
    next: u64,
}

impl NodeIdAllocator {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// Start above the highest numeric id present in a seeded graph.
    pub fn seeded_above(nodes: &[WorkflowNode]) -> Self {
        let mut alloc = Self::new(1);
        alloc.raise_floor(nodes);
        alloc
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }

    /// Bump the counter above every numeric id in `nodes`.  Non-numeric ids
    /// (backend-assigned or foreign) are ignored; uniqueness against those is
    /// already guaranteed because we only ever emit ids above our own floor.
    pub fn raise_floor(&mut self, nodes: &[WorkflowNode]) {
        for node in nodes {
            if let Ok(n) = node.id.parse::<u64>() {
                if n >= self.next {
                    self.next = n + 1;
                }
            }
        }
    }
}
