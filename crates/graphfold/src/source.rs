//! The adjacency boundary, shared configuration, and the error taxonomy.
//!
//! Kept small and explicit so the `fold`, `foldright`, and `paths` modules
//! stay easy to read.

use std::fmt;
use std::hash::Hash;

use ahash::AHashSet;
use thiserror::Error;

/// Value-deduplicated, unordered collection of accumulated values.
///
/// Returned by `fold` and used for the merge step inside `fold_right`.
pub type ResultSet<A> = AHashSet<A>;

/// The single capability the engine needs from a graph representation.
///
/// Implementors own vertex and edge storage; the engine only asks for the
/// ordered successors of a vertex. The reported order is significant: it
/// determines the iteration order of combine calls, and hence which walk is
/// first to populate the caches of compiled plans. The sequence reported for
/// a vertex must be stable for the duration of one traversal.
pub trait AdjacencySource {
    type Vertex: Clone + Eq + Hash + fmt::Debug;

    /// Ordered direct successors of `v`.
    ///
    /// `None` means the vertex is unknown to the source; `Some` with an empty
    /// vector means a true sink (a vertex with zero outgoing edges). The two
    /// are distinct: unknown vertices abort a traversal with
    /// [`FoldError::VertexNotFound`], sinks terminate walks normally.
    fn adjacent_vertices(&self, v: &Self::Vertex) -> Option<Vec<Self::Vertex>>;
}

/// Traversal configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoldCfg {
    /// Upper bound on walk length / recursion depth, in vertices.
    ///
    /// `None` (the default) leaves recursion unbounded; depth then equals the
    /// longest cycle-safe walk from the root, and pathological graphs can
    /// exhaust the call stack. Callers working with untrusted or very deep
    /// graphs should set a budget; exceeding it surfaces
    /// [`FoldError::DepthExceeded`] rather than overflowing.
    pub max_depth: Option<usize>,
}

/// Errors surfaced by the traversal operators.
///
/// There is no silent recovery: any of these aborts the operation that
/// triggered it, and the compile operators fail exactly as their direct
/// counterparts do.
#[derive(Debug, Error)]
pub enum FoldError {
    /// A root, source, target, or descended-into vertex is unknown to the
    /// adjacency source.
    #[error("vertex {vertex} not found in adjacency source")]
    VertexNotFound { vertex: String },

    /// The caller-supplied combining function failed. The underlying error is
    /// propagated unmodified; no partial aggregation is kept.
    #[error("combiner failed")]
    Combiner(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A walk grew past the configured [`FoldCfg::max_depth`] budget.
    #[error("walk exceeded configured depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl FoldError {
    /// Wrap a caller-side error as a combiner failure.
    pub fn combiner(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Combiner(err.into())
    }

    pub(crate) fn vertex_not_found(v: &impl fmt::Debug) -> Self {
        Self::VertexNotFound {
            vertex: format!("{v:?}"),
        }
    }
}

/// Branch-scoped ancestor bookkeeping used by both fold directions.
///
/// Membership here is the only cycle guard in the engine. The set lives for
/// one recursive call chain: vertices are inserted on descent and removed on
/// return, so a vertex revisited from a sibling branch is explored again
/// while a back-edge to an active ancestor ends the branch.
pub(crate) type AncestorSet<V> = AHashSet<V>;
