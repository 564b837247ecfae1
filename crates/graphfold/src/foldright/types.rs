//! Data types for the bottom-up fold and its compiled instruction traces.
//!
//! Kept small and explicit to make `engine` and `plan` easy to read.

use crate::source::ResultSet;

/// What a `fold_right` combiner is given alongside the vertex.
///
/// The two shapes are distinct by construction and a combiner must handle
/// both: a true leaf (zero outgoing edges) is combined with the caller's
/// initial value, while an internal vertex is combined with the merged set of
/// its children's results. `Merged` can be empty when every successor of a
/// vertex was an active ancestor; that is still the internal shape, not a
/// leaf.
#[derive(Debug)]
pub enum CombineInput<'a, A> {
    /// True leaf: the caller's initial value.
    Seed(&'a A),
    /// Internal vertex: deduplicated results of its non-ancestor successors.
    Merged(ResultSet<A>),
}

/// Identity of one recorded combine operation within a plan.
///
/// Assigned from an interning table keyed by the instruction's structure, so
/// identical shapes share one identity; doubles as the index into the plan's
/// instruction list and the replay value table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstrId(pub usize);

/// One recorded combine operation.
///
/// Instruction lists are post-order: an instruction's children always precede
/// it. `Node` with no children records a vertex whose successors were all
/// active ancestors; it replays as `CombineInput::Merged` of the empty set,
/// which is deliberately distinct from `Leaf`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FoldRightInstr<V> {
    Leaf { vertex: V },
    Node { children: Vec<InstrId>, vertex: V },
}

impl<V> FoldRightInstr<V> {
    pub fn vertex(&self) -> &V {
        match self {
            Self::Leaf { vertex } => vertex,
            Self::Node { vertex, .. } => vertex,
        }
    }
}
