//! Flow-routing method selection.
//!
//! TWI layers are computed twice, once per routing algorithm: D8 (single
//! flow direction, the ArcGIS convention) and D-infinity (Tarboton's
//! continuous angles). The two runs are structurally identical; only the
//! TauDEM tool names, their flag spellings, and the output suffixes differ,
//! and this enum captures those differences.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMethod {
    D8,
    DInfinity,
}

impl RoutingMethod {
    /// Short label used both as the output subdirectory name and as the
    /// product-suffix prefix (`D8_fdr.tif`, `Dinf_twi.tif`, ...).
    pub fn label(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "D8",
            RoutingMethod::DInfinity => "Dinf",
        }
    }

    pub fn flow_dir_tool(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "d8flowdir",
            RoutingMethod::DInfinity => "dinfflowdir",
        }
    }

    pub fn area_tool(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "aread8",
            RoutingMethod::DInfinity => "areadinf",
        }
    }

    /// Flag naming the flow-direction output: a D8 pointer grid for `-p`,
    /// a D-infinity angle grid for `-ang`.
    pub fn flow_dir_flag(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "-p",
            RoutingMethod::DInfinity => "-ang",
        }
    }

    pub fn slope_flag(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "-sd8",
            RoutingMethod::DInfinity => "-slp",
        }
    }

    pub fn area_flag(self) -> &'static str {
        match self {
            RoutingMethod::D8 => "-ad8",
            RoutingMethod::DInfinity => "-sca",
        }
    }
}

impl fmt::Display for RoutingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingMethod::D8 => write!(f, "D8"),
            RoutingMethod::DInfinity => write!(f, "D-infinity"),
        }
    }
}
