//! The sweep driver.
//!
//! One dedicated worker thread runs the whole measurement phase (topology
//! parse, overhead baselines, then the size sweep) so a long sweep never
//! blocks the calling thread. The registry is owned by that worker and
//! handed back by value at join, which is the happens-before edge; the
//! report write then runs as its own I/O task. A panic inside measured
//! work is fatal and re-raised at the join, never swallowed.

use std::panic;
use std::path::PathBuf;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::affinity::CpuPinGuard;
use crate::cpu::{self, CpuInfo};
use crate::registry::WorkRegistry;
use crate::suite::{self, SweepInput};
use crate::timing::{clock, convergence};
use crate::{report, tui};

#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Input sizes to sweep, in order.
    pub sizes: Vec<usize>,
    /// Consecutive non-improving samples required per measurement.
    pub stability_window: u32,
    /// Wider window for the boundary-overhead baselines, which are cheap
    /// and noisy.
    pub overhead_window: u32,
    /// Seed for input generation; fixed default keeps runs comparable.
    pub seed: u64,
    /// Report sink; `None` picks a timestamped file in the working
    /// directory.
    pub report_path: Option<PathBuf>,
    /// Topology source, normally [`cpu::CPUINFO_PATH`].
    pub cpuinfo_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1, 10, 100, 1_000, 10_000, 100_000, 1_000_000],
            stability_window: 20,
            overhead_window: 50,
            seed: 123,
            report_path: None,
            cpuinfo_path: PathBuf::from(cpu::CPUINFO_PATH),
        }
    }
}

/// Everything a completed measurement phase produced.
pub struct RunOutcome {
    pub cpu: CpuInfo,
    pub registry: WorkRegistry,
    /// Where the report landed, unless the sink failed.
    pub report_path: Option<PathBuf>,
}

/// Execute a full benchmark run: measurement phase on a worker thread,
/// report write as a follow-up I/O task, completion notice on the calling
/// thread.
///
/// Topology-source and report-sink failures degrade and are logged; the
/// run still completes. Only a panic inside measured work aborts.
pub fn run(config: &RunConfig) -> RunOutcome {
    clock::bootstrap();

    let worker_config = config.clone();
    let worker = thread::Builder::new()
        .name("bench-worker".into())
        .spawn(move || measure_all(&worker_config))
        .expect("failed to spawn measurement worker");

    let (cpu, registry) = match worker.join() {
        Ok(outcome) => outcome,
        // Measured work panicked; surface it instead of reporting
        // silently-wrong numbers.
        Err(payload) => panic::resume_unwind(payload),
    };

    let path = config
        .report_path
        .clone()
        .unwrap_or_else(default_report_path);
    let text = report::render(&cpu, &config.sizes, &registry);
    let sink_path = path.clone();
    let io_task = thread::Builder::new()
        .name("bench-report".into())
        .spawn(move || report::write_to(&sink_path, &text))
        .expect("failed to spawn report writer");

    let report_path = match io_task.join() {
        Ok(Ok(())) => Some(path),
        Ok(Err(err)) => {
            log::error!("{err}");
            None
        }
        Err(payload) => panic::resume_unwind(payload),
    };

    RunOutcome {
        cpu,
        registry,
        report_path,
    }
}

fn measure_all(config: &RunConfig) -> (CpuInfo, WorkRegistry) {
    let pin = CpuPinGuard::new();
    match pin.core_id() {
        Some(core) => log::debug!("measurement worker pinned to core {core}"),
        None => log::debug!("cpu pinning unavailable; measurements may be noisier"),
    }

    let cpu = cpu::fetch(&config.cpuinfo_path);

    let mut registry = WorkRegistry::new();

    for mut bench in suite::overhead_benches() {
        let result = convergence::measure(config.overhead_window, &mut bench.run);
        tui::print_timed(&bench.tag, None, &result);
        registry.record(&bench.tag, 0, result);
    }

    let suite = suite::build_suite();
    for &size in &config.sizes {
        let input = SweepInput::generate(size, config.seed);
        for bench in &suite {
            for mut variant in bench.variants(&input) {
                let result = convergence::measure(config.stability_window, &mut variant.run);
                tui::print_timed(&variant.tag, Some(size), &result);
                registry.record(&variant.tag, size, result);
            }
        }
    }

    (cpu, registry)
}

fn default_report_path() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    PathBuf::from(format!("ffi_bench-{millis}.csv"))
}
