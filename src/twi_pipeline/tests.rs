use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::twi_pipeline::common::error::{PipelineError, Result};
use crate::twi_pipeline::config::PipelineConfig;
use crate::twi_pipeline::exec::{ToolInvocation, ToolRunner};
use crate::twi_pipeline::naming;
use crate::twi_pipeline::routing::RoutingMethod;
use crate::twi_pipeline::workflow::TwiWorkflow;

/// Records the logical tool of every invocation and, when asked, creates
/// the raster files the real tools would have written (every argument
/// ending in `.tif`).
struct MockRunner {
    calls: Arc<Mutex<Vec<String>>>,
    fail_on: Option<String>,
    touch_outputs: bool,
}

impl MockRunner {
    fn new(touch_outputs: bool) -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let runner = Self {
            calls: calls.clone(),
            fail_on: None,
            touch_outputs,
        };
        (runner, calls)
    }

    fn failing_on(tool: &str) -> Self {
        let (mut runner, _) = Self::new(true);
        runner.fail_on = Some(tool.to_string());
        runner
    }

    fn check_failure(&self, tool: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(tool) {
            return Err(PipelineError::ToolFailed {
                tool: tool.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// The tool a caller meant to run: for mpiexec invocations that is the
/// TauDEM executable passed after `-n <count>`, not mpiexec itself.
fn logical_tool(invocation: &ToolInvocation) -> String {
    if invocation.tool_name() == "mpiexec" {
        invocation
            .args
            .get(2)
            .and_then(|arg| Path::new(arg).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mpiexec".to_string())
    } else {
        invocation.tool_name()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<()> {
        let tool = logical_tool(invocation);
        self.calls.lock().unwrap().push(tool.clone());
        self.check_failure(&tool)?;

        if self.touch_outputs {
            for arg in &invocation.args {
                let path = Path::new(arg);
                if path.extension().is_some_and(|ext| ext == "tif") {
                    fs::write(path, b"")?;
                }
            }
        }

        Ok(())
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<String> {
        let tool = logical_tool(invocation);
        self.calls.lock().unwrap().push(tool.clone());
        self.check_failure(&tool)?;

        Ok("+proj=longlat +datum=WGS84 +no_defs".to_string())
    }
}

fn dem_in(dir: &Path) -> PathBuf {
    let input = dir.join("elev.tif");
    fs::write(&input, b"").unwrap();
    input
}

#[test]
fn full_run_invokes_every_tool_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let (runner, calls) = MockRunner::new(true);
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    let products = workflow.run(&input).unwrap();

    assert_eq!(
        calls.lock().unwrap().as_slice(),
        [
            "gdalsrsinfo",
            "gdalwarp",
            "pitremove",
            "d8flowdir",
            "aread8",
            "twi",
            "dinfflowdir",
            "areadinf",
            "twi",
        ]
    );

    assert_eq!(products.reprojected, dir.path().join("elev_UTM.tif"));
    assert_eq!(products.filled, dir.path().join("elev_UTMfel.tif"));
    assert_eq!(products.d8.twi, dir.path().join("D8/elev_UTMfelD8_twi.tif"));
    assert_eq!(
        products.dinf.twi,
        dir.path().join("Dinf/elev_UTMfelDinf_twi.tif")
    );
    assert!(products.d8.twi.exists());
    assert!(products.dinf.twi.exists());
}

#[test]
fn missing_input_is_reported() {
    let (runner, calls) = MockRunner::new(true);
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    let result = workflow.run("no_such_raster.tif");

    assert!(matches!(result, Err(PipelineError::InputNotFound(_))));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn failed_tool_stops_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let runner = MockRunner::failing_on("pitremove");
    let calls = runner.calls.clone();
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    let result = workflow.run(&input);

    assert!(matches!(
        result,
        Err(PipelineError::ToolFailed { ref tool, .. }) if tool == "pitremove"
    ));
    assert!(!calls.lock().unwrap().iter().any(|c| c == "d8flowdir"));
}

#[test]
fn tool_that_writes_nothing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let (runner, _) = MockRunner::new(false);
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    let result = workflow.run(&input);

    assert!(matches!(
        result,
        Err(PipelineError::OutputMissing { ref tool, .. }) if tool == "gdalwarp"
    ));
}

#[test]
fn srs_probe_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let runner = MockRunner::failing_on("gdalsrsinfo");
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());

    assert!(workflow.run(&input).is_ok());
}

#[test]
fn existing_outputs_skip_their_stages() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let reprojected = naming::reprojected_path(&input).unwrap();
    let filled = naming::filled_path(&reprojected).unwrap();
    fs::write(&filled, b"").unwrap();

    for method in [RoutingMethod::D8, RoutingMethod::DInfinity] {
        let products = naming::routing_products(&filled, method).unwrap();
        fs::create_dir_all(&products.dir).unwrap();
        for path in [
            &products.flow_dir,
            &products.slope,
            &products.contributing_area,
            &products.twi,
        ] {
            fs::write(path, b"").unwrap();
        }
    }

    let (runner, calls) = MockRunner::new(true);
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    workflow.run(&input).unwrap();

    // Only the unconditional warp stage runs; everything downstream found
    // its output already on disk.
    assert_eq!(calls.lock().unwrap().as_slice(), ["gdalsrsinfo", "gdalwarp"]);
}

#[test]
fn rerun_after_success_skips_all_taudem_steps() {
    let dir = tempfile::tempdir().unwrap();
    let input = dem_in(dir.path());

    let (runner, calls) = MockRunner::new(true);
    let workflow = TwiWorkflow::with_runner(runner, PipelineConfig::default());
    workflow.run(&input).unwrap();
    workflow.run(&input).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 9 + 2);
    assert_eq!(&calls[9..], ["gdalsrsinfo", "gdalwarp"]);
}
