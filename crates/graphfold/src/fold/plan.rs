//! Fold plan compilation and replay.

use std::hash::Hash;

use ahash::AHashMap;
use tracing::{debug, trace};

use crate::source::{AdjacencySource, AncestorSet, FoldCfg, FoldError, ResultSet};

use super::types::Walk;

/// Precomputed walk shape for one root, replayable with arbitrary combiners.
///
/// Immutable after compilation; replay builds all of its working state
/// per-invocation, so a single plan can be replayed from multiple threads
/// concurrently.
#[derive(Clone, Debug)]
pub struct CompiledFoldPlan<V> {
    /// Maximal walked sequences in traversal order. Cycle-cut walks are kept
    /// (`complete == false`) so replay reproduces the exact combine count of
    /// a direct `fold`; only complete walks contribute results.
    walks: Vec<Walk<V>>,
}

/// Discover, once, every walk that [`super::fold`] would traverse from
/// `root`, independent of any combiner.
pub fn compile_fold<S>(
    source: &S,
    root: &S::Vertex,
) -> Result<CompiledFoldPlan<S::Vertex>, FoldError>
where
    S: AdjacencySource,
{
    compile_fold_with_cfg(source, root, FoldCfg::default())
}

/// [`compile_fold`] with an explicit traversal configuration.
pub fn compile_fold_with_cfg<S>(
    source: &S,
    root: &S::Vertex,
    cfg: FoldCfg,
) -> Result<CompiledFoldPlan<S::Vertex>, FoldError>
where
    S: AdjacencySource,
{
    let succs = source
        .adjacent_vertices(root)
        .ok_or_else(|| FoldError::vertex_not_found(root))?;
    let mut compiler = Compiler {
        source,
        cfg,
        ancestors: AncestorSet::new(),
        walk: vec![root.clone()],
        walks: Vec::new(),
    };
    compiler.ancestors.insert(root.clone());
    compiler.recur(succs, 1)?;
    debug!(root = ?root, walks = compiler.walks.len(), "compiled fold plan");
    Ok(CompiledFoldPlan {
        walks: compiler.walks,
    })
}

/// Reference traversal recording maximal walks; mirrors the engine's descent
/// rules exactly so the recorded prefixes match a direct call one-for-one.
struct Compiler<'a, S: AdjacencySource> {
    source: &'a S,
    cfg: FoldCfg,
    ancestors: AncestorSet<S::Vertex>,
    walk: Vec<S::Vertex>,
    walks: Vec<Walk<S::Vertex>>,
}

impl<S: AdjacencySource> Compiler<'_, S> {
    fn recur(&mut self, succs: Vec<S::Vertex>, depth: usize) -> Result<(), FoldError> {
        if succs.is_empty() {
            self.walks.push(Walk {
                vertices: self.walk.clone(),
                complete: true,
            });
            return Ok(());
        }
        if let Some(limit) = self.cfg.max_depth {
            if depth >= limit {
                return Err(FoldError::DepthExceeded { limit });
            }
        }
        for s in succs {
            self.walk.push(s.clone());
            if self.ancestors.contains(&s) {
                self.walks.push(Walk {
                    vertices: self.walk.clone(),
                    complete: false,
                });
                self.walk.pop();
                continue;
            }
            let child_succs = self
                .source
                .adjacent_vertices(&s)
                .ok_or_else(|| FoldError::vertex_not_found(&s))?;
            self.ancestors.insert(s.clone());
            self.recur(child_succs, depth + 1)?;
            self.ancestors.remove(&s);
            self.walk.pop();
        }
        Ok(())
    }
}

impl<V: Clone + Eq + Hash + std::fmt::Debug> CompiledFoldPlan<V> {
    /// The recorded maximal walks, in traversal order.
    pub fn walks(&self) -> &[Walk<V>] {
        &self.walks
    }

    /// Number of recorded walks (complete and cycle-cut).
    pub fn len(&self) -> usize {
        self.walks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// Reproduce `fold(root, init, combine)` from the recorded walks.
    ///
    /// A prefix cache (seeded with the empty prefix -> `init`) guarantees the
    /// combiner runs exactly once per distinct walked prefix, so replay cost
    /// is proportional to total walk length, not to a re-traversal of the
    /// graph. The value cached under a complete walk's full vertex sequence
    /// is that walk's contribution to the output.
    pub fn replay<A, F>(&self, init: A, mut combine: F) -> ResultSet<A>
    where
        A: Clone + Eq + Hash,
        F: FnMut(&A, &V) -> A,
    {
        let mut cache: AHashMap<&[V], A> = AHashMap::new();
        cache.insert(&[], init);
        let mut out = ResultSet::default();
        for walk in &self.walks {
            let vs = &walk.vertices;
            for k in 1..=vs.len() {
                if cache.contains_key(&vs[..k]) {
                    trace!(prefix_len = k, "replay: prefix cache hit");
                    continue;
                }
                let value = combine(&cache[&vs[..k - 1]], &vs[k - 1]);
                cache.insert(&vs[..k], value);
            }
            if walk.complete {
                out.insert(cache[&vs[..]].clone());
            }
        }
        out
    }

    /// [`Self::replay`] with a fallible combiner; a combiner error aborts the
    /// whole replay.
    pub fn try_replay<A, F>(&self, init: A, mut combine: F) -> Result<ResultSet<A>, FoldError>
    where
        A: Clone + Eq + Hash,
        F: FnMut(&A, &V) -> Result<A, FoldError>,
    {
        let mut cache: AHashMap<&[V], A> = AHashMap::new();
        cache.insert(&[], init);
        let mut out = ResultSet::default();
        for walk in &self.walks {
            let vs = &walk.vertices;
            for k in 1..=vs.len() {
                if cache.contains_key(&vs[..k]) {
                    continue;
                }
                let value = combine(&cache[&vs[..k - 1]], &vs[k - 1])?;
                cache.insert(&vs[..k], value);
            }
            if walk.complete {
                out.insert(cache[&vs[..]].clone());
            }
        }
        Ok(out)
    }
}
