use criterion::{black_box, criterion_group, criterion_main, Criterion};
use superpixel_rag::core::ScalarImage;
use superpixel_rag::{segment, SegmentParams, WatershedVariant};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn tiled_labels(cell: usize) -> Vec<u32> {
    let cells_x = WIDTH.div_ceil(cell);
    (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x / cell + cells_x * (y / cell)) as u32))
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let labels = tiled_labels(12);
    let cost = ScalarImage::from_fn(WIDTH, HEIGHT, |x, y| {
        ((x as f32 * 0.031).sin() * (y as f32 * 0.027).cos()).abs()
    });

    let mut group = c.benchmark_group("segment_640x480");
    for (name, variant) in [
        ("node_weighted", WatershedVariant::NodeWeighted),
        ("edge_weighted", WatershedVariant::EdgeWeighted),
        ("both", WatershedVariant::Both),
    ] {
        let params = SegmentParams {
            variant,
            ..SegmentParams::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                segment(
                    black_box(&labels),
                    WIDTH,
                    HEIGHT,
                    cost.as_view(),
                    None,
                    &params,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
