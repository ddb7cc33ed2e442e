//! Cross-check against petgraph's Floyd–Warshall.

use std::collections::HashMap;

use dg_core::Weight;
use dg_graph::{GraphSnapshot, IndexedEdge};
use dg_solver::{Distance, compute_all_pairs_shortest_paths};
use petgraph::algo::floyd_warshall;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

/// petgraph wants a simple graph, so hand it only the lightest edge of each
/// unordered pair and no self-loops. The solver gets the raw edge list.
fn reference(n: usize, edges: &[(usize, usize, u32)]) -> Vec<Vec<Distance>> {
    let mut lightest: HashMap<(usize, usize), u64> = HashMap::new();
    for &(i, j, w) in edges {
        if i == j {
            continue;
        }
        let key = (i.min(j), i.max(j));
        let w = u64::from(w);
        lightest
            .entry(key)
            .and_modify(|cur| *cur = (*cur).min(w))
            .or_insert(w);
    }

    let mut graph: UnGraph<(), u64> = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    for (&(i, j), &w) in &lightest {
        graph.add_edge(nodes[i], nodes[j], w);
    }

    let dist = floyd_warshall(&graph, |e| *e.weight()).expect("no negative weights");
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match dist.get(&(nodes[i], nodes[j])) {
                    Some(&d) if d != u64::MAX => Distance::Finite(d),
                    _ => Distance::Unreachable,
                })
                .collect()
        })
        .collect()
}

fn snapshot(n: usize, edges: &[(usize, usize, u32)]) -> GraphSnapshot {
    GraphSnapshot::from_parts(
        (0..n).map(|i| format!("v{i}")).collect(),
        edges
            .iter()
            .map(|&(i, j, w)| IndexedEdge {
                i,
                j,
                weight: Weight::new(w),
            })
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn agrees_with_petgraph(
        (n, edges) in (1_usize..10).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0..n, 0..n, 0_u32..1000), 0..(n * 2)))
        })
    ) {
        let ours = compute_all_pairs_shortest_paths(&snapshot(n, &edges));
        let theirs = reference(n, &edges);
        for (i, row) in theirs.iter().enumerate() {
            prop_assert_eq!(ours.row(i).unwrap(), row.as_slice());
        }
    }
}
