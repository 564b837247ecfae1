//! Leftward (path) folds: walk enumeration and replayable compiled plans.
//!
//! Purpose
//! - `fold` descends every cycle-safe walk from a root depth-first, threading
//!   an accumulated value through the caller's combiner; each walk ending at
//!   a true sink contributes one (deduplicated) result.
//! - `compile_fold` pays the traversal cost once and captures the walked
//!   shape in a [`CompiledFoldPlan`]; the plan replays with arbitrary
//!   combiners, combining each distinct walk prefix exactly once, without
//!   ever consulting the adjacency source again.
//!
//! Why this design
//! - The combiner observes every edge extension, including the one that
//!   closes a cycle; only the *descent* is gated by the ancestor set. Plans
//!   therefore record cycle-cut walks alongside complete ones, which is what
//!   makes a replay's combine-invocation count identical to a direct call's.
//!
//! Note on structure
//! - Split for readability: `types.rs` (walks), `engine.rs` (direct
//!   traversal), `plan.rs` (compilation + replay).

mod engine;
mod plan;
mod types;

pub use engine::{fold, fold_with_cfg, try_fold, try_fold_with_cfg};
pub use plan::{compile_fold, compile_fold_with_cfg, CompiledFoldPlan};
pub use types::Walk;
