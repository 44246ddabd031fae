use crate::{Error, MindMap, Result};
use rustc_hash::{FxHashMap, FxHashSet};

impl MindMap {
    /// Checks the tree invariants: unique ids, no dangling edges, one parent per node, exactly
    /// one root, every node reachable from it.
    ///
    /// The graph queries and the layout engine never call this; they degrade on malformed input
    /// instead. It exists for callers that would rather reject a broken map up front.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::Empty);
        }

        let mut ids: FxHashSet<&str> = FxHashSet::default();
        for n in &self.nodes {
            if !ids.insert(n.id.as_str()) {
                return Err(Error::DuplicateNodeId { node: n.id.clone() });
            }
        }

        let mut incoming: FxHashMap<&str, usize> = FxHashMap::default();
        for e in &self.edges {
            for endpoint in [&e.source, &e.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(Error::DanglingEdge {
                        edge: e.id.clone(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
            let count = incoming.entry(e.target.as_str()).or_default();
            *count += 1;
            if *count > 1 {
                return Err(Error::MultipleParents {
                    node: e.target.clone(),
                });
            }
        }

        let roots: Vec<String> = self
            .nodes
            .iter()
            .filter(|n| !incoming.contains_key(n.id.as_str()))
            .map(|n| n.id.clone())
            .collect();
        match roots.len() {
            0 => return Err(Error::NoRoot),
            1 => {}
            _ => return Err(Error::MultipleRoots { roots }),
        }

        let index = self.index();
        let reachable = index.reachable();
        let unreachable: Vec<String> = reachable
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(i, _)| index.id(i).to_string())
            .collect();
        if !unreachable.is_empty() {
            return Err(Error::Unreachable { nodes: unreachable });
        }

        Ok(())
    }
}
