//! Fold-right plan compilation and replay.

use std::hash::Hash;

use ahash::AHashMap;
use tracing::debug;

use crate::source::{AdjacencySource, AncestorSet, FoldCfg, FoldError, ResultSet};

use super::types::{CombineInput, FoldRightInstr, InstrId};

/// Recorded combine schedule of one bottom-up traversal.
///
/// Instructions are post-order (children precede parents) with shared
/// substructure collapsed through an interning table; `result` names the
/// root's instruction. Immutable after compilation, so a shared plan can be
/// replayed concurrently; every replay builds its own value table.
#[derive(Clone, Debug)]
pub struct CompiledFoldRightPlan<V> {
    instructions: Vec<FoldRightInstr<V>>,
    result: InstrId,
}

/// Record, once, the combine operations a [`super::fold_right`] from `root`
/// would perform, independent of any combiner.
pub fn compile_fold_right<S>(
    source: &S,
    root: &S::Vertex,
) -> Result<CompiledFoldRightPlan<S::Vertex>, FoldError>
where
    S: AdjacencySource,
{
    compile_fold_right_with_cfg(source, root, FoldCfg::default())
}

/// [`compile_fold_right`] with an explicit traversal configuration.
pub fn compile_fold_right_with_cfg<S>(
    source: &S,
    root: &S::Vertex,
    cfg: FoldCfg,
) -> Result<CompiledFoldRightPlan<S::Vertex>, FoldError>
where
    S: AdjacencySource,
{
    let mut compiler = Compiler {
        source,
        cfg,
        ancestors: AncestorSet::new(),
        vcache: AHashMap::new(),
        interned: AHashMap::new(),
        instructions: Vec::new(),
    };
    let result = compiler.eval(root, 1)?;
    debug!(
        root = ?root,
        instructions = compiler.instructions.len(),
        "compiled fold-right plan"
    );
    Ok(CompiledFoldRightPlan {
        instructions: compiler.instructions,
        result,
    })
}

/// Reference run of the bottom-up recursion that records an instruction per
/// vertex-combine and returns structural identities in place of real values.
/// The same vertex cache the engine uses makes the recorded trace post-order
/// with shared results collapsed.
struct Compiler<'a, S: AdjacencySource> {
    source: &'a S,
    cfg: FoldCfg,
    ancestors: AncestorSet<S::Vertex>,
    vcache: AHashMap<S::Vertex, InstrId>,
    interned: AHashMap<FoldRightInstr<S::Vertex>, InstrId>,
    instructions: Vec<FoldRightInstr<S::Vertex>>,
}

impl<S: AdjacencySource> Compiler<'_, S> {
    fn eval(&mut self, v: &S::Vertex, depth: usize) -> Result<InstrId, FoldError> {
        if let Some(&id) = self.vcache.get(v) {
            return Ok(id);
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
        let instr = if succs.is_empty() {
            FoldRightInstr::Leaf { vertex: v.clone() }
        } else {
            self.ancestors.insert(v.clone());
            let mut children = Vec::new();
            for s in &succs {
                if self.ancestors.contains(s) {
                    continue;
                }
                children.push(self.eval(s, depth + 1)?);
            }
            self.ancestors.remove(v);
            FoldRightInstr::Node {
                children,
                vertex: v.clone(),
            }
        };
        let id = self.intern(instr);
        self.vcache.insert(v.clone(), id);
        Ok(id)
    }

    fn intern(&mut self, instr: FoldRightInstr<S::Vertex>) -> InstrId {
        if let Some(&id) = self.interned.get(&instr) {
            return id;
        }
        let id = InstrId(self.instructions.len());
        self.interned.insert(instr.clone(), id);
        self.instructions.push(instr);
        id
    }
}

impl<V: Clone + Eq + Hash + std::fmt::Debug> CompiledFoldRightPlan<V> {
    /// The recorded instructions; children always precede their parent.
    pub fn instructions(&self) -> &[FoldRightInstr<V>] {
        &self.instructions
    }

    /// Identity of the root's instruction.
    pub fn result(&self) -> InstrId {
        self.result
    }

    /// Reproduce `fold_right(root, init, combine)` from the recorded trace.
    ///
    /// Executes the instructions in order over a value table keyed by
    /// instruction identity: leaves combine the initial value, internal
    /// instructions merge their children's cached values into a set first.
    /// The combiner runs exactly once per instruction, matching the
    /// combine-invocation count of a direct call.
    pub fn replay<A, F>(&self, init: A, mut combine: F) -> A
    where
        A: Clone + Eq + Hash,
        F: FnMut(CombineInput<'_, A>, &V) -> A,
    {
        let mut values: Vec<A> = Vec::with_capacity(self.instructions.len());
        for instr in &self.instructions {
            let value = match instr {
                FoldRightInstr::Leaf { vertex } => combine(CombineInput::Seed(&init), vertex),
                FoldRightInstr::Node { children, vertex } => {
                    let merged: ResultSet<A> =
                        children.iter().map(|id| values[id.0].clone()).collect();
                    combine(CombineInput::Merged(merged), vertex)
                }
            };
            values.push(value);
        }
        values[self.result.0].clone()
    }

    /// [`Self::replay`] with a fallible combiner; a combiner error aborts the
    /// whole replay.
    pub fn try_replay<A, F>(&self, init: A, mut combine: F) -> Result<A, FoldError>
    where
        A: Clone + Eq + Hash,
        F: FnMut(CombineInput<'_, A>, &V) -> Result<A, FoldError>,
    {
        let mut values: Vec<A> = Vec::with_capacity(self.instructions.len());
        for instr in &self.instructions {
            let value = match instr {
                FoldRightInstr::Leaf { vertex } => combine(CombineInput::Seed(&init), vertex)?,
                FoldRightInstr::Node { children, vertex } => {
                    let merged: ResultSet<A> =
                        children.iter().map(|id| values[id.0].clone()).collect();
                    combine(CombineInput::Merged(merged), vertex)?
                }
            };
            values.push(value);
        }
        Ok(values[self.result.0].clone())
    }
}
