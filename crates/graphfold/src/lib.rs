//! Cycle-safe fold operators over directed graphs.
//!
//! Purpose
//! - Fold a caller-supplied combining function over every walk reachable from
//!   a start vertex (`fold`, one result per maximal walk), or aggregate
//!   bottom-up from the effective leaves back to the start (`fold_right`).
//! - Both directions can be "compiled": walk discovery is paid once against
//!   the adjacency source, and the resulting plan replays with arbitrary
//!   combiners without touching the graph again (`compile_fold`,
//!   `compile_fold_right`).
//! - `find_all_paths` enumerates cycle-limited walks between two vertices on
//!   top of `fold`.
//!
//! Why this design
//! - The graph itself is an external collaborator reached through a single
//!   capability, `source::AdjacencySource`; the engine never stores or
//!   mutates vertices, it only references them.
//! - Cycle safety comes from a branch-scoped ancestor set, never a global
//!   visited set, so diamond reconvergence is explored while back-edges to an
//!   active ancestor terminate the branch.
//!
//! Code cross-refs: `fold::{fold, compile_fold}`, `foldright::{fold_right,
//! compile_fold_right}`, `paths::find_all_paths`, `adjacency::AdjacencyList`.

pub mod adjacency;
pub mod fold;
pub mod foldright;
pub mod paths;
pub mod source;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fold::{
    compile_fold, compile_fold_with_cfg, fold, fold_with_cfg, try_fold, try_fold_with_cfg,
    CompiledFoldPlan, Walk,
};
pub use foldright::{
    compile_fold_right, compile_fold_right_with_cfg, fold_right, fold_right_with_cfg,
    try_fold_right, try_fold_right_with_cfg, CombineInput, CompiledFoldRightPlan, FoldRightInstr,
    InstrId,
};
pub use paths::{find_all_paths, find_all_paths_with_cfg};
pub use source::{AdjacencySource, FoldCfg, FoldError, ResultSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adjacency::AdjacencyList;
    pub use crate::fold::{compile_fold, fold, try_fold, CompiledFoldPlan, Walk};
    pub use crate::foldright::{
        compile_fold_right, fold_right, try_fold_right, CombineInput, CompiledFoldRightPlan,
    };
    pub use crate::paths::find_all_paths;
    pub use crate::source::{AdjacencySource, FoldCfg, FoldError, ResultSet};
}
