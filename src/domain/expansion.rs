//! Expansion state: the set of node ids whose subtree is rendered open
//!
//! Tracks expansion independently of the catalog data and of any active
//! filter. An id can be expanded here yet absent from the current filtered
//! tree; rendering then simply never consults it. In-memory only, for the
//! life of one session.

use std::collections::HashSet;

/// Set of expanded node ids with O(1) toggle and membership.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership: expanded becomes collapsed and vice versa.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Ensure an id is expanded. Used to auto-expand the first top-level
    /// node on initial load; a no-op if already expanded.
    pub fn expand_one(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}
