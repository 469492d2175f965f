//! Path construction for every derived raster.
//!
//! Stages communicate purely through the filesystem, so these suffix
//! conventions are the pipeline's only contract: `elev.tif` becomes
//! `elev_UTM.tif` after warping, `elev_UTMfel.tif` after pit removal (the
//! `fel` suffix is TauDEM's default for filled elevation), and the routing
//! products land in a `D8/` or `Dinf/` subdirectory beside the filled
//! raster, e.g. `D8/elev_UTMfelD8_twi.tif`.

use std::path::{Path, PathBuf};

use crate::twi_pipeline::common::error::{PipelineError, Result};
use crate::twi_pipeline::routing::RoutingMethod;

/// Output paths for one routing method's run: the subdirectory holding them
/// plus the four product rasters.
#[derive(Debug, Clone)]
pub struct RoutingProducts {
    pub dir: PathBuf,
    pub flow_dir: PathBuf,
    pub slope: PathBuf,
    pub contributing_area: PathBuf,
    pub twi: PathBuf,
}

fn raster_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PipelineError::InvalidRasterName(path.to_path_buf()))
}

/// Path of the reprojected raster: `<stem>_UTM.tif` beside the input.
pub fn reprojected_path(input: &Path) -> Result<PathBuf> {
    let stem = raster_stem(input)?;
    Ok(input.with_file_name(format!("{stem}_UTM.tif")))
}

/// Path of the pit-filled raster: `<stem>fel.tif` beside the reprojected one.
pub fn filled_path(reprojected: &Path) -> Result<PathBuf> {
    let stem = raster_stem(reprojected)?;
    Ok(reprojected.with_file_name(format!("{stem}fel.tif")))
}

/// Product paths for the given routing method, derived from the filled
/// raster's name. The subdirectory is created by the stage, not here.
pub fn routing_products(filled: &Path, method: RoutingMethod) -> Result<RoutingProducts> {
    let stem = raster_stem(filled)?;
    let label = method.label();
    let dir = filled.with_file_name(label);

    let product = |kind: &str| dir.join(format!("{stem}{label}_{kind}.tif"));

    Ok(RoutingProducts {
        flow_dir: product("fdr"),
        slope: product("slp"),
        contributing_area: product("uca"),
        twi: product("twi"),
        dir,
    })
}
