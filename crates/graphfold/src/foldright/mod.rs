//! Bottom-up (rightward) folds: leaf-to-root aggregation and replayable
//! instruction traces.
//!
//! Purpose
//! - `fold_right` computes one aggregate per vertex by recursing into its
//!   non-ancestor successors first, merging the children's results into a
//!   deduplicated set, and combining that set with the vertex. A per-traversal
//!   vertex cache both memoizes and terminates cycles.
//! - `compile_fold_right` records one reference run as a post-order
//!   instruction list ([`CompiledFoldRightPlan`]); replaying the list with a
//!   real combiner reproduces the rightward fold without consulting the
//!   adjacency source again.
//!
//! Why this design
//! - The vertex cache is keyed by vertex identity alone. When a vertex is
//!   reachable under several ancestor contexts, the first traversal order
//!   decides which context's result is shared. This is a known sharp edge of
//!   the operator, kept deliberately: treat the reachable subgraph as a DAG
//!   once a vertex has resolved.
//!
//! Note on structure
//! - Split for readability: `types.rs` (combiner input and instructions),
//!   `engine.rs` (direct recursion), `plan.rs` (compilation + replay).

mod engine;
mod plan;
mod types;

pub use engine::{
    fold_right, fold_right_with_cfg, try_fold_right, try_fold_right_with_cfg,
};
pub use plan::{compile_fold_right, compile_fold_right_with_cfg, CompiledFoldRightPlan};
pub use types::{CombineInput, FoldRightInstr, InstrId};
