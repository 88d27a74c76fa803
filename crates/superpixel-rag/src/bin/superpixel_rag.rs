use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use image::GenericImageView;
use log::info;
use superpixel_rag::raster::{labels_from_dynamic, labels_to_luma16, scalar_image_from_dynamic};
use superpixel_rag::{
    segment, Connectivity, SegmentConfig, SegmentParams, SegmentReport, WatershedVariant,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "superpixel-rag",
    version,
    about = "Watershed segmentation of superpixel region adjacency graphs"
)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON log lines (requires the `tracing` feature).
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Segment a superpixel label map using a cost image.
    Segment(SegmentArgs),
    /// Write a config file with default parameters.
    InitConfig {
        /// Destination of the JSON config.
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
struct SegmentArgs {
    /// Superpixel label map (8- or 16-bit grayscale).
    #[arg(long)]
    labels: PathBuf,
    /// Pixel cost image; decoded to float luma in [0, 1].
    #[arg(long)]
    image: PathBuf,
    /// Optional cost image at (2w-1)x(2h-1) for grid edge weights.
    #[arg(long)]
    interpolated: Option<PathBuf>,
    /// JSON config; command line flags override its params.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report path; defaults to the config's `output_path`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also write per-pixel watershed labels as a 16-bit PNG.
    #[arg(long)]
    labels_out: Option<PathBuf>,
    #[arg(long, value_enum)]
    connectivity: Option<ConnectivityArg>,
    #[arg(long)]
    ignore_label: Option<u32>,
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConnectivityArg {
    Four,
    Eight,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    NodeWeighted,
    EdgeWeighted,
    Both,
}

impl SegmentArgs {
    fn params(&self, base: SegmentParams) -> SegmentParams {
        let mut params = base;
        if let Some(c) = self.connectivity {
            params.grid.connectivity = match c {
                ConnectivityArg::Four => Connectivity::Four,
                ConnectivityArg::Eight => Connectivity::Eight,
            };
        }
        if self.ignore_label.is_some() {
            params.rag.ignore_label = self.ignore_label;
        }
        if let Some(v) = self.variant {
            params.variant = match v {
                VariantArg::NodeWeighted => WatershedVariant::NodeWeighted,
                VariantArg::EdgeWeighted => WatershedVariant::EdgeWeighted,
                VariantArg::Both => WatershedVariant::Both,
            };
        }
        params
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_logging(cli.verbose, cli.json_logs)?;

    match cli.command {
        Command::Segment(args) => run_segment(&args),
        Command::InitConfig { out } => {
            SegmentConfig::default().write_json(&out)?;
            println!("wrote default config to {}", out.display());
            Ok(())
        }
    }
}

fn run_segment(args: &SegmentArgs) -> CliResult<()> {
    let cfg = match &args.config {
        Some(path) => SegmentConfig::load_json(path)?,
        None => SegmentConfig::default(),
    };
    let params = args.params(cfg.params);

    let label_img = image::open(&args.labels)?;
    let labels = labels_from_dynamic(&label_img);
    let (width, height) = (label_img.width() as usize, label_img.height() as usize);
    let cost = scalar_image_from_dynamic(&image::open(&args.image)?);
    let interpolated = match &args.interpolated {
        Some(path) => Some(scalar_image_from_dynamic(&image::open(path)?)),
        None => None,
    };
    info!(
        "segmenting {}x{} label map {}",
        width,
        height,
        args.labels.display()
    );

    let mut report = SegmentReport::new(width, height, params);
    let result = segment(
        &labels,
        width,
        height,
        cost.as_view(),
        interpolated.as_ref().map(|img| img.as_view()),
        &params,
    );
    let out = args.out.clone().unwrap_or_else(|| cfg.output_path());

    match result {
        Ok(seg) => {
            report.set_segmentation(&seg);
            report.write_json(&out)?;
            println!(
                "{} regions, {} basins; wrote report to {}",
                report.region_count,
                report.seed_count,
                out.display()
            );
            if let Some(path) = &args.labels_out {
                let pixels = seg
                    .edge_weighted
                    .as_ref()
                    .or(seg.node_weighted.as_ref())
                    .map(|v| v.pixel_labels.as_slice())
                    .unwrap_or_default();
                write_label_png(path, pixels, width, height)?;
            }
            Ok(())
        }
        Err(err) => {
            report.set_error(&err);
            report.write_json(&out)?;
            Err(err.into())
        }
    }
}

fn write_label_png(path: &Path, labels: &[u32], width: usize, height: usize) -> CliResult<()> {
    let img = labels_to_luma16(labels, width as u32, height as u32)
        .ok_or("watershed labels do not fit a 16-bit image")?;
    img.save(path)?;
    Ok(())
}

fn init_logging(verbose: u8, json: bool) -> CliResult<()> {
    #[cfg(feature = "tracing")]
    {
        let _ = verbose;
        let _ = tracing_log::LogTracer::init();
        superpixel_rag::core::init_tracing(json);
        Ok(())
    }
    #[cfg(not(feature = "tracing"))]
    {
        if json {
            eprintln!("--json-logs needs the `tracing` feature; using plain logs");
        }
        let level = superpixel_rag::core::level_for_verbosity(verbose);
        superpixel_rag::core::init_with_level(level)?;
        Ok(())
    }
}
