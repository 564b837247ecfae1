//! Cross-operator properties on randomly generated digraphs.
//!
//! Small vertex domains keep walk counts bounded while still producing
//! cycles, self-loops, diamonds, and unreachable regions.

use graphfold::adjacency::AdjacencyList;
use graphfold::{
    compile_fold, compile_fold_right, fold, fold_right, AdjacencySource, CombineInput,
};
use proptest::prelude::*;

fn arb_graph() -> impl Strategy<Value = AdjacencyList<u8>> {
    proptest::collection::vec((0u8..6, 0u8..6), 0..24).prop_map(|edges| {
        let mut g = AdjacencyList::from_edges(edges);
        // The traversal root always exists, even for the empty edge list.
        g.add_vertex(0);
        g
    })
}

fn append(walk: &Vec<u8>, v: &u8) -> Vec<u8> {
    let mut next = walk.clone();
    next.push(*v);
    next
}

fn sum(input: CombineInput<'_, u64>, v: &u8) -> u64 {
    match input {
        CombineInput::Seed(init) => init + u64::from(*v),
        CombineInput::Merged(children) => children.iter().sum::<u64>() + u64::from(*v),
    }
}

proptest! {
    /// Termination on arbitrary cyclic graphs, and the leaf-only insertion
    /// rule: every recorded walk ends at a true sink.
    #[test]
    fn fold_terminates_and_results_end_at_sinks(g in arb_graph()) {
        let walks = fold(&g, &0, Vec::new(), append).unwrap();
        for walk in &walks {
            let last = walk.last().unwrap();
            prop_assert_eq!(g.adjacent_vertices(last), Some(vec![]));
        }
    }

    /// A compiled plan replays to the same result set as a direct fold, with
    /// the same number of combiner invocations.
    #[test]
    fn fold_replay_parity(g in arb_graph()) {
        let mut direct_calls = 0u64;
        let direct = fold(&g, &0, Vec::new(), |w, v| {
            direct_calls += 1;
            append(w, v)
        })
        .unwrap();
        let plan = compile_fold(&g, &0).unwrap();
        let mut replay_calls = 0u64;
        let replayed = plan.replay(Vec::new(), |w, v| {
            replay_calls += 1;
            append(w, v)
        });
        prop_assert_eq!(&replayed, &direct);
        prop_assert_eq!(replay_calls, direct_calls);
    }

    /// Same parity contract for the bottom-up direction.
    #[test]
    fn fold_right_replay_parity(g in arb_graph()) {
        let mut direct_calls = 0u64;
        let direct = fold_right(&g, &0, 0u64, |input, v| {
            direct_calls += 1;
            sum(input, v)
        })
        .unwrap();
        let plan = compile_fold_right(&g, &0).unwrap();
        let mut replay_calls = 0u64;
        let replayed = plan.replay(0u64, |input, v| {
            replay_calls += 1;
            sum(input, v)
        });
        prop_assert_eq!(replayed, direct);
        prop_assert_eq!(replay_calls, direct_calls);
    }

    /// Replaying the same plan twice with the same inputs is idempotent.
    #[test]
    fn replay_is_idempotent(g in arb_graph()) {
        let plan = compile_fold(&g, &0).unwrap();
        prop_assert_eq!(
            plan.replay(Vec::new(), append),
            plan.replay(Vec::new(), append)
        );
        let rplan = compile_fold_right(&g, &0).unwrap();
        prop_assert_eq!(rplan.replay(0u64, sum), rplan.replay(0u64, sum));
    }

    /// `fold_right` terminates and each reachable vertex combines at most
    /// once per traversal.
    #[test]
    fn fold_right_combines_each_vertex_at_most_once(g in arb_graph()) {
        let mut seen = std::collections::HashSet::new();
        let mut duplicated = false;
        fold_right(&g, &0, 0u64, |input, v| {
            if !seen.insert(*v) {
                duplicated = true;
            }
            sum(input, v)
        })
        .unwrap();
        prop_assert!(!duplicated);
    }
}
