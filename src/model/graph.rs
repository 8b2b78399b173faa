//! Explicit graph structures backing the structural metrics: a directed
//! inheritance graph (DIT, NOC) and a union-find used for LCOM4 components.

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Cap on upward DFS visits per depth query. Deep multiple-inheritance
/// lattices can have exponentially many simple paths; past this budget the
/// query returns the best depth found so far.
const MAX_PATH_VISITS: usize = 10_000;

/// Directed inheritance graph over discovered class names. Edges run
/// base → derived; bases outside the discovered set never become nodes.
#[derive(Clone, Debug, Default)]
pub struct InheritanceGraph {
    nodes: BTreeSet<String>,
    children: BTreeMap<String, BTreeSet<String>>,
    parents: BTreeMap<String, BTreeSet<String>>,
}

impl InheritanceGraph {
    pub fn add_node(&mut self, name: &str) {
        self.nodes.insert(name.to_string());
    }

    /// Insert a base → derived edge. Both endpoints must already be nodes.
    pub fn add_edge(&mut self, base: &str, derived: &str) {
        debug_assert!(self.nodes.contains(base) && self.nodes.contains(derived));
        self.children
            .entry(base.to_string())
            .or_default()
            .insert(derived.to_string());
        self.parents
            .entry(derived.to_string())
            .or_default()
            .insert(base.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    /// NOC: number of direct subclasses; 0 for leaves and unknown names.
    pub fn child_count(&self, name: &str) -> u32 {
        self.children.get(name).map_or(0, |c| c.len() as u32)
    }

    /// DIT: length in edges of the longest simple path from any root
    /// (in-degree 0) down to `name`; 0 for roots and unknown names.
    ///
    /// Enumerates simple paths by DFS over predecessor edges. Only paths
    /// that terminate at a root count; a path blocked by a cycle is
    /// discarded, so cyclic base declarations add no depth.
    pub fn inheritance_depth(&self, name: &str) -> u32 {
        if !self.nodes.contains(name) {
            return 0;
        }
        let mut best = 0;
        let mut budget = MAX_PATH_VISITS;
        let mut on_path = HashSet::new();
        on_path.insert(name);
        self.depth_dfs(name, 0, &mut on_path, &mut best, &mut budget);
        best
    }

    fn depth_dfs<'a>(
        &'a self,
        node: &'a str,
        depth: u32,
        on_path: &mut HashSet<&'a str>,
        best: &mut u32,
        budget: &mut usize,
    ) {
        if *budget == 0 {
            return;
        }
        *budget -= 1;

        match self.parents.get(node).filter(|p| !p.is_empty()) {
            None => *best = (*best).max(depth),
            Some(parents) => {
                for parent in parents {
                    if !on_path.insert(parent.as_str()) {
                        continue;
                    }
                    self.depth_dfs(parent, depth + 1, on_path, best, budget);
                    on_path.remove(parent.as_str());
                }
            }
        }
    }
}

/// Union-find with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    pub fn component_count(&mut self) -> usize {
        (0..self.parent.len())
            .map(|i| self.find(i))
            .collect::<BTreeSet<_>>()
            .len()
    }
}
