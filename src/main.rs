use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use twi_runner::logger;
use twi_runner::twi_pipeline::{PipelineConfig, TwiWorkflow, config};

/// Computes Topographic Wetness Index layers from an elevation raster,
/// using both the D8 and D-infinity flow-routing methods. Reprojection is
/// delegated to gdalwarp and all hydrology to the TauDEM tools.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input elevation raster (GeoTIFF)
    input: PathBuf,

    /// Worker processes passed to mpiexec for the TauDEM tools
    #[arg(long, default_value_t = config::DEFAULT_PROCESSES)]
    processes: usize,

    /// Target SRS of the warp step, as a PROJ string
    #[arg(long)]
    target_srs: Option<String>,

    /// Target cell size of the warp step, in target SRS units
    #[arg(long)]
    cell_size: Option<f64>,

    /// Directory containing the TauDEM executables (default: PATH lookup)
    #[arg(long)]
    taudem_bin: Option<PathBuf>,
}

fn main() {
    logger::init();

    let args = Args::parse();

    let mut builder = PipelineConfig::builder()
        .processes(args.processes)
        .taudem_bin(args.taudem_bin);
    if let Some(srs) = args.target_srs {
        builder = builder.target_srs(srs);
    }
    if let Some(size) = args.cell_size {
        builder = builder.cell_size(size);
    }

    let workflow = TwiWorkflow::new(builder.build());

    info!("TWI pipeline initialized");
    info!("Target SRS: {}", workflow.config().target_srs);
    info!("Cell size: {} m", workflow.config().cell_size);
    info!("TauDEM processes: {}", workflow.config().processes);

    match workflow.run(&args.input) {
        Ok(products) => {
            info!("D8 TWI: {}", products.d8.twi.display());
            info!("D-infinity TWI: {}", products.dinf.twi.display());
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            std::process::exit(1);
        }
    }
}
