use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rag_core::{
    edge_features_from_interpolated_image, interpolated_shape, Connectivity, Graph, GridGraph,
    ScalarImage,
};

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_neighbors");
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let grid = GridGraph::new(640, 480, connectivity);
        group.bench_function(format!("{connectivity:?}"), |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for node in 0..grid.node_count() {
                    for adj in grid.neighbors(node) {
                        acc = acc.wrapping_add(adj.edge);
                    }
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_interpolated_edges(c: &mut Criterion) {
    let grid = GridGraph::new(640, 480, Connectivity::Four);
    let (fw, fh) = interpolated_shape(640, 480);
    let fine = ScalarImage::from_fn(fw, fh, |x, y| ((x * 7 + y * 13) % 255) as f32);

    c.bench_function("edge_features_from_interpolated_image_640x480", |b| {
        b.iter(|| edge_features_from_interpolated_image(black_box(&grid), fine.as_view()))
    });
}

criterion_group!(benches, bench_neighbors, bench_interpolated_edges);
criterion_main!(benches);
