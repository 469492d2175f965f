//! Per-method TWI stage: flow direction + slope, upstream contributing
//! area, then TWI composition. The same three-step shape serves both
//! routing methods; [`RoutingMethod`] supplies the tool names and flags.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::twi_pipeline::common::error::Result;
use crate::twi_pipeline::config::PipelineConfig;
use crate::twi_pipeline::exec::ToolRunner;
use crate::twi_pipeline::naming::{self, RoutingProducts};
use crate::twi_pipeline::routing::RoutingMethod;
use crate::twi_pipeline::stages::ensure_output;

pub struct TwiCalcs<'a> {
    config: &'a PipelineConfig,
    method: RoutingMethod,
}

impl<'a> TwiCalcs<'a> {
    pub fn new(config: &'a PipelineConfig, method: RoutingMethod) -> Self {
        Self { config, method }
    }

    pub fn run<R: ToolRunner>(&self, runner: &R, filled: &Path) -> Result<RoutingProducts> {
        let method = self.method;
        let products = naming::routing_products(filled, method)?;

        info!("Executing {} calculations", method);
        fs::create_dir_all(&products.dir)?;

        if products.flow_dir.exists() {
            info!("{} flow directions and slope already exist", method);
        } else {
            info!("Calculating {} flow directions and slope", method);
            let invocation = self
                .config
                .taudem_invocation(method.flow_dir_tool())
                .arg("-fel")
                .arg(filled)
                .arg(method.flow_dir_flag())
                .arg(&products.flow_dir)
                .arg(method.slope_flag())
                .arg(&products.slope);
            runner.run(&invocation)?;
            ensure_output(method.flow_dir_tool(), &products.flow_dir)?;
        }

        if products.contributing_area.exists() {
            info!("{} upstream contributing area already exists", method);
        } else {
            info!("Calculating {} upstream contributing area", method);
            let invocation = self
                .config
                .taudem_invocation(method.area_tool())
                .arg(method.flow_dir_flag())
                .arg(&products.flow_dir)
                .arg(method.area_flag())
                .arg(&products.contributing_area);
            runner.run(&invocation)?;
            ensure_output(method.area_tool(), &products.contributing_area)?;
        }

        if products.twi.exists() {
            info!("TWI from {} components already exists", method);
        } else {
            info!("Calculating TWI from {} components", method);
            let invocation = self
                .config
                .taudem_invocation("twi")
                .arg("-slp")
                .arg(&products.slope)
                .arg("-sca")
                .arg(&products.contributing_area)
                .arg("-twi")
                .arg(&products.twi);
            runner.run(&invocation)?;
            ensure_output("twi", &products.twi)?;
        }

        info!("{} calculations complete", method);
        Ok(products)
    }
}
