//! Walks over a small module dependency graph, one call per operator.
//!
//! Run with `cargo run --example dependency_walks`.

use graphfold::prelude::*;
use graphfold::{compile_fold_right, fold_right};

fn main() -> Result<(), FoldError> {
    let deps = AdjacencyList::from_edges([
        ("app", "ui"),
        ("app", "api"),
        ("ui", "render"),
        ("ui", "state"),
        ("api", "state"),
        ("state", "alloc"),
        ("render", "alloc"),
    ]);

    let chains = fold(&deps, &"app", Vec::new(), |walk, v| {
        let mut next = walk.clone();
        next.push(*v);
        next
    })?;
    println!("dependency chains from app:");
    let mut sorted: Vec<_> = chains.into_iter().collect();
    sorted.sort();
    for chain in &sorted {
        println!("  {}", chain.join(" -> "));
    }

    // Compile once, then reuse the walk structure with cheap combiners.
    let plan = compile_fold(&deps, &"app")?;
    let lengths = plan.replay(0usize, |n, _| n + 1);
    println!("distinct chain lengths: {lengths:?}");

    // Bottom-up: cost of a module is 1 plus the cost of what it links.
    let cost = fold_right(&deps, &"app", 0u32, |input, _v| match input {
        CombineInput::Seed(seed) => seed + 1,
        CombineInput::Merged(children) => children.iter().sum::<u32>() + 1,
    })?;
    println!("linked cost of app: {cost}");

    let rplan = compile_fold_right(&deps, &"app")?;
    let height = rplan.replay(0u32, |input, _v| match input {
        CombineInput::Seed(_) => 1,
        CombineInput::Merged(children) => children.iter().copied().max().unwrap_or(0) + 1,
    });
    println!("dependency height of app: {height}");

    let mut routes: Vec<_> = find_all_paths(&deps, &"app", &"alloc")?
        .into_iter()
        .collect();
    routes.sort();
    println!("routes from app to alloc:");
    for route in &routes {
        println!("  {}", route.join(" -> "));
    }
    Ok(())
}
