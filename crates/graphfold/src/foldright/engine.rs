//! Bottom-up fold engine with per-vertex memoization.

use std::hash::Hash;

use ahash::AHashMap;
use tracing::{debug, trace};

use crate::source::{AdjacencySource, AncestorSet, FoldCfg, FoldError, ResultSet};

use super::types::CombineInput;

/// Aggregate from the effective leaves of the subgraph reachable from `root`
/// back up to `root`.
///
/// At a true leaf the combiner sees [`CombineInput::Seed`] with the caller's
/// initial value; at an internal vertex it sees [`CombineInput::Merged`] with
/// the deduplicated results of the vertex's non-ancestor successors (possibly
/// empty, when every successor was an active ancestor). Each vertex is
/// combined at most once per traversal; later references reuse the cached
/// result regardless of the ancestor context they arrive with.
pub fn fold_right<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
) -> Result<A, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(CombineInput<'_, A>, &S::Vertex) -> A,
{
    fold_right_with_cfg(source, root, init, combine, FoldCfg::default())
}

/// [`fold_right`] with an explicit traversal configuration.
pub fn fold_right_with_cfg<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    mut combine: F,
    cfg: FoldCfg,
) -> Result<A, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(CombineInput<'_, A>, &S::Vertex) -> A,
{
    try_fold_right_with_cfg(source, root, init, move |input, v| Ok(combine(input, v)), cfg)
}

/// [`fold_right`] with a fallible combiner.
pub fn try_fold_right<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
) -> Result<A, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(CombineInput<'_, A>, &S::Vertex) -> Result<A, FoldError>,
{
    try_fold_right_with_cfg(source, root, init, combine, FoldCfg::default())
}

/// [`try_fold_right`] with an explicit traversal configuration.
pub fn try_fold_right_with_cfg<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
    cfg: FoldCfg,
) -> Result<A, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(CombineInput<'_, A>, &S::Vertex) -> Result<A, FoldError>,
{
    debug!(root = ?root, "fold_right: traversal start");
    let mut runner = FoldRightRunner {
        source,
        combine,
        cfg,
        init,
        ancestors: AncestorSet::new(),
        vcache: AHashMap::new(),
    };
    runner.eval(root, 1)
}

/// Runner carrying the shared traversal context, the per-traversal vertex
/// cache, and the caller's initial value.
struct FoldRightRunner<'a, S: AdjacencySource, A, F> {
    source: &'a S,
    combine: F,
    cfg: FoldCfg,
    init: A,
    ancestors: AncestorSet<S::Vertex>,
    vcache: AHashMap<S::Vertex, A>,
}

impl<S, A, F> FoldRightRunner<'_, S, A, F>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(CombineInput<'_, A>, &S::Vertex) -> Result<A, FoldError>,
{
    fn eval(&mut self, v: &S::Vertex, depth: usize) -> Result<A, FoldError> {
        if let Some(hit) = self.vcache.get(v) {
            trace!(vertex = ?v, "fold_right: vertex cache hit");
            return Ok(hit.clone());
        }
        if let Some(limit) = self.cfg.max_depth {
            if depth > limit {
                return Err(FoldError::DepthExceeded { limit });
            }
        }
        let succs = self
            .source
            .adjacent_vertices(v)
            .ok_or_else(|| FoldError::vertex_not_found(v))?;
        let value = if succs.is_empty() {
            (self.combine)(CombineInput::Seed(&self.init), v)?
        } else {
            // Successors are filtered against the ancestor set including `v`
            // itself, so a self-loop never recurses.
            self.ancestors.insert(v.clone());
            let mut merged = ResultSet::default();
            for s in &succs {
                if self.ancestors.contains(s) {
                    trace!(vertex = ?s, "fold_right: successor is an active ancestor, skipped");
                    continue;
                }
                merged.insert(self.eval(s, depth + 1)?);
            }
            self.ancestors.remove(v);
            (self.combine)(CombineInput::Merged(merged), v)?
        };
        self.vcache.insert(v.clone(), value.clone());
        Ok(value)
    }
}
