use std::collections::{BTreeMap, BTreeSet};

use rag_core::{connected_components, AdjacencyGraph, Connectivity, Graph, GridGraph};
use rag_region::{RagParams, RegionAdjacencyGraph};
use rag_watershed::{
    edge_weighted_watersheds, node_weighted_seeds, node_weighted_watersheds, Seeds,
    WatershedError,
};

fn path4() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).expect("path graph")
}

/// 9x4 grid split by an ignored column at x = 4 into two blocks of four
/// 2x2 regions each.
fn split_rag() -> (GridGraph, RegionAdjacencyGraph) {
    let grid = GridGraph::new(9, 4, Connectivity::Four);
    let labels: Vec<u32> = (0..4)
        .flat_map(|y: u32| {
            (0..9u32).map(move |x| match x {
                0..=3 => x / 2 + 2 * (y / 2),
                4 => 99,
                _ => 4 + (x - 5) / 2 + 2 * (y / 2),
            })
        })
        .collect();
    let rag = RegionAdjacencyGraph::build(
        &grid,
        &labels,
        &RagParams {
            ignore_label: Some(99),
        },
    )
    .expect("contiguous labels");
    (grid, rag)
}

fn ripple(grid: &GridGraph) -> Vec<f32> {
    (0..grid.node_count())
        .map(|n| {
            let (x, y) = grid.coords(n);
            ((x as f32 * 1.3).sin() + (y as f32 * 0.7).cos()) * 4.0
        })
        .collect()
}

#[test]
fn symmetric_path_floods_to_the_midpoint() {
    let g = path4();
    let weights = [0.0, 5.0, 5.0, 0.0];
    let seeds = node_weighted_seeds(&g, &weights).expect("seeds");
    assert_eq!(vec![(0, 1), (3, 2)], seeds.iter().collect::<Vec<_>>());

    let labels = node_weighted_watersheds(&g, &weights, &seeds).expect("flood");
    assert_eq!(vec![1, 1, 2, 2], labels);
}

#[test]
fn edge_weighted_flood_ignores_node_weights() {
    let g = path4();
    let seeds: Seeds = [(0, 1), (3, 2)].into_iter().collect();
    let labels = edge_weighted_watersheds(&g, &[1.0, 100.0, 1.0], &seeds).expect("flood");
    assert_eq!(vec![1, 1, 2, 2], labels);

    // Node 1 is first offered label 1 at cost 100, then label 2 at cost 1.
    let shifted = edge_weighted_watersheds(&g, &[100.0, 1.0, 1.0], &seeds).expect("flood");
    assert_eq!(vec![1, 2, 2, 2], shifted);
}

#[test]
fn seedless_rag_component_fails_without_partial_labels() {
    let (_, rag) = split_rag();
    let components = connected_components(&rag);
    assert_eq!(2, components.count);

    let seeds: Seeds = [(0, 1)].into_iter().collect();
    let weights = vec![0.0; rag.node_count()];
    let err = node_weighted_watersheds(&rag, &weights, &seeds).unwrap_err();
    assert_eq!(
        WatershedError::UnseededComponent {
            unlabeled: 4,
            components: 1,
            first: 4
        },
        err
    );
}

#[test]
fn every_node_gets_a_seed_label_and_seeds_keep_theirs() {
    let grid = GridGraph::new(24, 16, Connectivity::Eight);
    let weights = ripple(&grid);
    let seeds = node_weighted_seeds(&grid, &weights).expect("seeds");
    assert!(seeds.distinct_labels().len() > 1);

    let edge_weights: Vec<f32> = grid
        .edges()
        .map(|(_, u, v)| weights[u].max(weights[v]))
        .collect();
    let allowed: BTreeSet<u32> = seeds.distinct_labels().into_iter().collect();

    for labels in [
        node_weighted_watersheds(&grid, &weights, &seeds).expect("node flood"),
        edge_weighted_watersheds(&grid, &edge_weights, &seeds).expect("edge flood"),
    ] {
        assert_eq!(grid.node_count(), labels.len());
        assert!(labels.iter().all(|l| allowed.contains(l)));
        for (node, label) in seeds.iter() {
            assert_eq!(label, labels[node], "seed {node} relabeled");
        }
    }
}

#[test]
fn repeated_floods_are_identical() {
    let grid = GridGraph::new(17, 11, Connectivity::Four);
    // Coarse quantization creates many equal-cost ties.
    let weights: Vec<f32> = ripple(&grid).iter().map(|w| w.round()).collect();
    let seeds = node_weighted_seeds(&grid, &weights).expect("seeds");

    let first = node_weighted_watersheds(&grid, &weights, &seeds).expect("flood");
    for _ in 0..5 {
        assert_eq!(
            first,
            node_weighted_watersheds(&grid, &weights, &seeds).expect("flood")
        );
    }
}

#[test]
fn labels_never_cross_components() {
    let (grid, rag) = split_rag();
    let pixel_weights = ripple(&grid);
    let region_weights = rag
        .accumulate_node_features(&pixel_weights)
        .expect("regions have members");
    let seeds = node_weighted_seeds(&rag, &region_weights).expect("seeds");
    let labels = node_weighted_watersheds(&rag, &region_weights, &seeds).expect("every component seeded");

    let components = connected_components(&rag);
    let mut seed_labels_by_component: BTreeMap<usize, BTreeSet<u32>> = BTreeMap::new();
    for (node, label) in seeds.iter() {
        seed_labels_by_component
            .entry(components.labels[node])
            .or_default()
            .insert(label);
    }
    assert_eq!(2, seed_labels_by_component.len());

    for (node, &label) in labels.iter().enumerate() {
        let own = &seed_labels_by_component[&components.labels[node]];
        assert!(own.contains(&label), "node {node} took foreign label {label}");
    }
}

#[test]
fn two_flat_basins_give_two_seed_labels() {
    // Ridge peaks at column 3 so neither slope holds a local minimum.
    let grid = GridGraph::new(7, 3, Connectivity::Eight);
    let weights: Vec<f32> = (0..grid.node_count())
        .map(|n| match grid.coords(n).0 {
            0 | 1 | 5 | 6 => 1.0,
            3 => 6.0,
            _ => 5.0,
        })
        .collect();
    let seeds = node_weighted_seeds(&grid, &weights).expect("seeds");
    assert_eq!(vec![1, 2], seeds.distinct_labels());
    assert_eq!(12, seeds.len());
    assert_eq!(Some(1), seeds.get(grid.node_at(1, 2)));
    assert_eq!(Some(2), seeds.get(grid.node_at(5, 0)));
}

#[test]
fn flat_shelf_beside_a_basin_is_seeded() {
    // Columns 2..=4 form a shelf at 5 whose left edge borders the basin.
    let grid = GridGraph::new(5, 2, Connectivity::Four);
    let weights: Vec<f32> = (0..grid.node_count())
        .map(|n| if grid.coords(n).0 < 2 { 1.0 } else { 5.0 })
        .collect();
    let seeds = node_weighted_seeds(&grid, &weights).expect("seeds");
    assert_eq!(vec![1, 2], seeds.distinct_labels());
    assert_eq!(Some(2), seeds.get(grid.node_at(2, 0)));
    assert_eq!(Some(2), seeds.get(grid.node_at(4, 1)));

    let labels = node_weighted_watersheds(&grid, &weights, &seeds).expect("flood");
    assert_eq!(labels, seeds.iter().map(|(_, l)| l).collect::<Vec<_>>());
}
