//! Reference adjacency-list graph and seeded random-graph generators.
//!
//! Purpose
//! - Provide a minimal, insertion-ordered [`AdjacencySource`] implementation
//!   for tests, benches, the examples, and embedders that do not bring their
//!   own graph representation.
//! - Provide deterministic random digraphs (seeded `StdRng`) so property
//!   tests and benchmarks are reproducible.
//!
//! The traversal operators do not depend on this module; any type
//! implementing [`AdjacencySource`] works.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::source::AdjacencySource;

/// Directed graph stored as per-vertex successor lists.
///
/// Successors keep insertion order, which is the order the traversal
/// operators see them in. `add_edge` registers both endpoints, so a vertex
/// that only ever appears as a target is a known sink rather than an unknown
/// vertex. Parallel edges collapse: inserting an existing edge is a no-op,
/// keeping combine counts well-defined for the replay parity contract.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList<V> {
    succ: AHashMap<V, Vec<V>>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> AdjacencyList<V> {
    pub fn new() -> Self {
        Self {
            succ: AHashMap::new(),
        }
    }

    /// Register a vertex with no outgoing edges (no-op if already present).
    pub fn add_vertex(&mut self, v: V) {
        self.succ.entry(v).or_default();
    }

    /// Insert the edge `from -> to`, registering both endpoints.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.succ.entry(to.clone()).or_default();
        let out = self.succ.entry(from).or_default();
        if !out.contains(&to) {
            out.push(to);
        }
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut g = Self::new();
        for (from, to) in edges {
            g.add_edge(from, to);
        }
        g
    }

    /// Number of known vertices.
    pub fn len(&self) -> usize {
        self.succ.len()
    }

    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.succ.contains_key(v)
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> AdjacencySource for AdjacencyList<V> {
    type Vertex = V;

    fn adjacent_vertices(&self, v: &V) -> Option<Vec<V>> {
        self.succ.get(v).cloned()
    }
}

/// Random DAG on vertices `0..n`: every edge goes from a lower to a higher
/// index, so the result is acyclic by construction. Draws `edges` candidate
/// pairs; duplicates collapse, so the realized edge count may be lower.
pub fn random_dag(n: u32, edges: usize, seed: u64) -> AdjacencyList<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = AdjacencyList::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    if n < 2 {
        return g;
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..n - 1);
        let to = rng.gen_range(from + 1..n);
        g.add_edge(from, to);
    }
    g
}

/// Random digraph on vertices `0..n`, cycles and self-loops allowed.
pub fn random_digraph(n: u32, edges: usize, seed: u64) -> AdjacencyList<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = AdjacencyList::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    if n == 0 {
        return g;
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        g.add_edge(from, to);
    }
    g
}
