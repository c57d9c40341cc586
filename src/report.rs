//! Report serialization: the registry plus the CPU summary rendered as a
//! comma-separated text report.
//!
//! The serializer only renders and hands the text to a sink path chosen by
//! the caller; it performs no path resolution or directory creation.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::cpu::CpuInfo;
use crate::error::BenchError;
use crate::registry::WorkRegistry;

const NANOS_PER_MICROSECOND: f64 = 1_000.0;
const NANOS_PER_MILLISECOND: f64 = 1_000_000.0;

/// Format a duration with a magnitude-chosen unit and exactly two
/// fractional digits: `500.00ns`, `2.50µs`, `1.25ms`, `3.00s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{:.2}ns", nanos as f64)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / NANOS_PER_MICROSECOND)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / NANOS_PER_MILLISECOND)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Render the full report.
///
/// Rows appear in tag-insertion order; each row lists the minimum duration
/// of every recorded `(size, result)` pair in recording order. A row may
/// carry fewer cells than the size header when its benchmark was recorded
/// once (the boundary-overhead baselines).
pub fn render(cpu: &CpuInfo, sizes: &[usize], registry: &WorkRegistry) -> String {
    let mut out = String::new();

    out.push_str("Manufacturer,Model,Processor Count\n");
    let _ = writeln!(
        out,
        "{},{},{}",
        non_empty(&cpu.manufacturer),
        non_empty(&cpu.model),
        cpu.processor_count()
    );

    out.push_str("\nElement Count");
    for size in sizes {
        let _ = write!(out, ",{size}");
    }
    out.push('\n');

    for tag in registry.tags() {
        out.push_str(tag);
        for (_, result) in registry.entries(tag) {
            let _ = write!(out, ",{}", format_duration(result.min()));
        }
        out.push('\n');
    }

    out
}

/// Hand the rendered text to the sink.
pub fn write_to(path: &Path, contents: &str) -> Result<(), BenchError> {
    fs::write(path, contents).map_err(|source| BenchError::ReportSink {
        path: path.to_owned(),
        source,
    })
}

fn non_empty(s: &str) -> &str {
    if s.is_empty() {
        "unknown"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::convergence::measure;

    fn result(ns: u64) -> crate::timing::TimedResult {
        measure(1, || Duration::from_nanos(ns))
    }

    #[test]
    fn durations_format_by_magnitude() {
        assert_eq!(format_duration(Duration::from_nanos(0)), "0.00ns");
        assert_eq!(format_duration(Duration::from_nanos(500)), "500.00ns");
        assert_eq!(format_duration(Duration::from_nanos(999)), "999.00ns");
        assert_eq!(format_duration(Duration::from_nanos(2_500)), "2.50µs");
        assert_eq!(format_duration(Duration::from_nanos(999_990)), "999.99µs");
        assert_eq!(format_duration(Duration::from_nanos(1_250_000)), "1.25ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn rows_carry_one_min_cell_per_recorded_pair() {
        let mut registry = WorkRegistry::new();
        registry.record("T", 10, result(500));
        registry.record("T", 1000, result(2_500));

        let text = render(&CpuInfo::empty(), &[10, 1000], &registry);
        let row = text.lines().last().unwrap();
        assert_eq!(row, "T,500.00ns,2.50µs");
    }

    #[test]
    fn metadata_and_header_lines_are_present() {
        let cpu = CpuInfo {
            model: "SM8550".into(),
            manufacturer: "Qualcomm".into(),
            isas: vec!["aarch64".into()],
            processors: vec![],
        };
        let registry = WorkRegistry::new();
        let text = render(&cpu, &[1, 10, 100], &registry);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Manufacturer,Model,Processor Count"));
        assert_eq!(lines.next(), Some("Qualcomm,SM8550,0"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Element Count,1,10,100"));
    }

    #[test]
    fn empty_cpu_fields_render_as_unknown() {
        let registry = WorkRegistry::new();
        let text = render(&CpuInfo::empty(), &[], &registry);
        assert!(text.contains("unknown,unknown,0"));
    }

    #[test]
    fn rows_keep_tag_insertion_order() {
        let mut registry = WorkRegistry::new();
        registry.record("Timer Overhead", 0, result(30));
        registry.record("Rust: Sum", 10, result(100));
        registry.record("C: Sum", 10, result(150));

        let text = render(&CpuInfo::empty(), &[10], &registry);
        let rows: Vec<&str> = text.lines().skip(4).collect();
        assert_eq!(
            rows,
            ["Timer Overhead,30.00ns", "Rust: Sum,100.00ns", "C: Sum,150.00ns"]
        );
    }

    #[test]
    fn sink_failure_is_reported_not_panicked() {
        let err = write_to(Path::new("/nonexistent/dir/report.csv"), "data").unwrap_err();
        assert!(matches!(err, BenchError::ReportSink { .. }));
    }
}
