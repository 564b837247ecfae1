//! Depth-first path-fold engine.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::source::{AdjacencySource, AncestorSet, FoldCfg, FoldError, ResultSet};

/// Fold `combine` along every maximal cycle-safe walk from `root`.
///
/// The root visit is `combine(&init, root)`; from there the accumulated value
/// is extended once per successor, in the order the adjacency source reports
/// them. A walk contributes its value to the result set only when it ends at
/// a true sink (zero outgoing edges). A branch whose next vertex is an active
/// ancestor ends silently: the combiner still observes that final extension,
/// but nothing is recorded and the engine does not descend.
///
/// Errors: [`FoldError::VertexNotFound`] if `root` (or any vertex the engine
/// descends into) is unknown to the source.
pub fn fold<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
) -> Result<ResultSet<A>, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(&A, &S::Vertex) -> A,
{
    fold_with_cfg(source, root, init, combine, FoldCfg::default())
}

/// [`fold`] with an explicit traversal configuration.
pub fn fold_with_cfg<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    mut combine: F,
    cfg: FoldCfg,
) -> Result<ResultSet<A>, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(&A, &S::Vertex) -> A,
{
    try_fold_with_cfg(source, root, init, move |acc, v| Ok(combine(acc, v)), cfg)
}

/// [`fold`] with a fallible combiner.
///
/// A combiner error aborts the entire traversal; no partial result set is
/// returned. Use [`FoldError::combiner`] to wrap caller-side errors.
pub fn try_fold<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
) -> Result<ResultSet<A>, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(&A, &S::Vertex) -> Result<A, FoldError>,
{
    try_fold_with_cfg(source, root, init, combine, FoldCfg::default())
}

/// [`try_fold`] with an explicit traversal configuration.
pub fn try_fold_with_cfg<S, A, F>(
    source: &S,
    root: &S::Vertex,
    init: A,
    combine: F,
    cfg: FoldCfg,
) -> Result<ResultSet<A>, FoldError>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(&A, &S::Vertex) -> Result<A, FoldError>,
{
    let succs = source
        .adjacent_vertices(root)
        .ok_or_else(|| FoldError::vertex_not_found(root))?;
    debug!(root = ?root, "fold: traversal start");
    let mut runner = FoldRunner {
        source,
        combine,
        cfg,
        ancestors: AncestorSet::new(),
        results: ResultSet::default(),
    };
    let acc0 = (runner.combine)(&init, root)?;
    // The root belongs to its own ancestor set: a self-loop on the root is
    // combined once and then cut, like any other back-edge.
    runner.ancestors.insert(root.clone());
    runner.recur(succs, acc0, 1)?;
    Ok(runner.results)
}

/// Runner carrying the shared traversal context and accumulators.
struct FoldRunner<'a, S: AdjacencySource, A, F> {
    source: &'a S,
    combine: F,
    cfg: FoldCfg,
    ancestors: AncestorSet<S::Vertex>,
    results: ResultSet<A>,
}

impl<S, A, F> FoldRunner<'_, S, A, F>
where
    S: AdjacencySource,
    A: Clone + Eq + Hash,
    F: FnMut(&A, &S::Vertex) -> Result<A, FoldError>,
{
    /// Expand the vertex whose successors are `succs`, reached with value
    /// `acc` as the `depth`-th vertex of the current walk.
    fn recur(&mut self, succs: Vec<S::Vertex>, acc: A, depth: usize) -> Result<(), FoldError> {
        if succs.is_empty() {
            // The only insertion point: a true sink ends a complete walk.
            self.results.insert(acc);
            return Ok(());
        }
        if let Some(limit) = self.cfg.max_depth {
            if depth >= limit {
                return Err(FoldError::DepthExceeded { limit });
            }
        }
        for s in succs {
            let next = (self.combine)(&acc, &s)?;
            if self.ancestors.contains(&s) {
                trace!(vertex = ?s, "fold: branch re-entered active ancestor, discarded");
                continue;
            }
            let child_succs = self
                .source
                .adjacent_vertices(&s)
                .ok_or_else(|| FoldError::vertex_not_found(&s))?;
            self.ancestors.insert(s.clone());
            self.recur(child_succs, next, depth + 1)?;
            self.ancestors.remove(&s);
        }
        Ok(())
    }
}
