use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use fractal_zoom::{
    BmpFilePresenter, Complex, DEFAULT_BASE_DELTA, DEFAULT_CENTER, DEFAULT_OUTPUT_DIR,
    DEFAULT_TILE_SIZE, ExecutionStrategy, FrameGeometry, FrameOrder, FramePresenterPort,
    OutputOutcome, PgmFilePresenter, ZoomConfig, ZoomController, ZoomSettings,
};

#[derive(Parser, Debug)]
#[command(name = "fractal_zoom", version, about = "Render a zoom into the Mandelbrot set as a sequence of grayscale frames")]
struct Cli {
    /// Frame width in pixels (at least 10).
    width: usize,

    /// Frame height in pixels (at least 10).
    height: usize,

    /// Number of frames to render (at least 1).
    num_frames: usize,

    /// Directory the frame images are written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Image format of the written frames.
    #[arg(long, value_enum, default_value_t = Format::Bmp)]
    format: Format,

    /// Edge length of the square tiles a frame is split into.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: NonZeroUsize,

    /// Render each frame on a single thread.
    #[arg(long, conflicts_with = "tile_size")]
    serial: bool,

    /// Render frames concurrently instead of one after another.
    #[arg(long)]
    frame_parallel: bool,

    /// Worker threads (defaults to one per core).
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    /// Real part of the zoom target.
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    center_x: f64,

    /// Imaginary part of the zoom target.
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    center_y: f64,

    /// Half the visible plane height in the first frame.
    #[arg(long, default_value_t = DEFAULT_BASE_DELTA)]
    delta: f64,

    /// Log per-frame progress.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Bmp,
    Pgm,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = settings_from_cli(&cli)?;
    match cli.format {
        Format::Bmp => run(ZoomController::new(BmpFilePresenter::new(), settings)),
        Format::Pgm => run(ZoomController::new(PgmFilePresenter::new(), settings)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn settings_from_cli(cli: &Cli) -> anyhow::Result<ZoomSettings> {
    let geometry = FrameGeometry::new(cli.width, cli.height, cli.num_frames)
        .context("invalid frame dimensions")?;
    anyhow::ensure!(
        cli.delta.is_finite() && cli.delta > 0.0,
        "zoom delta must be a positive number, got {}",
        cli.delta
    );

    let mut settings = ZoomSettings::new(geometry);
    settings.zoom = ZoomConfig::default()
        .with_center(Complex::new(cli.center_x, cli.center_y))
        .with_base_delta(cli.delta);
    settings.strategy = if cli.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::square_tiles(cli.tile_size)
    };
    settings.order = if cli.frame_parallel {
        FrameOrder::Parallel
    } else {
        FrameOrder::Sequential
    };
    settings.threads = cli.threads;
    settings.output_dir = cli.output_dir.clone();

    Ok(settings)
}

fn run<P: FramePresenterPort>(mut controller: ZoomController<P>) -> anyhow::Result<()> {
    let report = controller.generate().context("rendering failed")?;
    eprintln!(
        "computed {} frames in {:.4} s ({} faulted)",
        report.rendered + report.faulted,
        report.elapsed.as_secs_f64(),
        report.faulted
    );

    let output_dir = controller.settings().output_dir.clone();
    match controller
        .write()
        .with_context(|| format!("writing frames to '{}'", output_dir.display()))?
    {
        OutputOutcome::Written(written) => {
            eprintln!(
                "wrote {} of {} frames to {}",
                written.paths.len(),
                written.paths.len() + written.skipped.len(),
                output_dir.display()
            );
            if !written.skipped.is_empty() {
                eprintln!("skipped faulted frames: {:?}", written.skipped);
            }
        }
        OutputOutcome::SkippedBySizeLimit => {
            eprintln!("frames not written: width or frame count exceeds the output limit");
        }
        OutputOutcome::NothingRendered => {}
    }

    Ok(())
}
