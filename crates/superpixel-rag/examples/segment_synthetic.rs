//! Segment a synthetic superpixel map and print the basins as ASCII.
//!
//! ```text
//! RUST_LOG=debug cargo run -p superpixel-rag --example segment_synthetic
//! ```

use std::time::Instant;

use superpixel_rag::core::ScalarImage;
use superpixel_rag::{segment, Connectivity, SegmentParams, SegmentReport};

const WIDTH: usize = 48;
const HEIGHT: usize = 24;
const CELL: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Square superpixels over a cost surface with three valleys.
    let cells_x = WIDTH / CELL;
    let labels: Vec<u32> = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x / CELL + cells_x * (y / CELL)) as u32))
        .collect();
    let valleys = [(8.0f32, 6.0f32), (38.0, 5.0), (24.0, 19.0)];
    let cost = ScalarImage::from_fn(WIDTH, HEIGHT, |x, y| {
        valleys
            .iter()
            .map(|&(vx, vy)| ((x as f32 - vx).powi(2) + (y as f32 - vy).powi(2)).sqrt())
            .fold(f32::INFINITY, f32::min)
    });

    let mut params = SegmentParams::default();
    params.grid.connectivity = Connectivity::Eight;

    let started = Instant::now();
    let seg = segment(&labels, WIDTH, HEIGHT, cost.as_view(), None, &params)?;
    println!(
        "{} regions, {} basins in {:.2?}",
        seg.rag.region_count(),
        seg.seeds.distinct_labels().len(),
        started.elapsed()
    );

    if let Some(edge) = &seg.edge_weighted {
        for row in edge.pixel_labels.chunks(WIDTH) {
            let line: String = row
                .iter()
                .map(|&l| char::from_digit(l % 36, 36).unwrap_or('?'))
                .collect();
            println!("{line}");
        }
    }

    let mut report = SegmentReport::new(WIDTH, HEIGHT, params);
    report.set_segmentation(&seg);
    println!("{}", serde_json::to_string(&report.region_sizes)?);
    Ok(())
}
