//! Terminal output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::cpu::CpuInfo;
use crate::registry::WorkRegistry;
use crate::report::format_duration;
use crate::suite::Benchmark;
use crate::timing::TimedResult;

/// Current terminal width, constrained to a reasonable range.
fn term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

pub fn print_header() {
    println!("=== FFI Playground ===");
    match crate::C_COMPILER_NAME {
        Some(compiler) => println!("C variants compiled with {compiler}."),
        None => println!("No C compiler detected; running Rust variants only."),
    }
    println!();
}

pub fn print_cpu_info(cpu: &CpuInfo) {
    fn or_unknown(s: &str) -> &str {
        if s.is_empty() {
            "unknown"
        } else {
            s
        }
    }

    println!("=== CPU Information ===");
    println!("Model: {}", or_unknown(&cpu.model));
    println!("Manufacturer: {}", or_unknown(&cpu.manufacturer));
    println!("Instruction sets: {}", cpu.isas.join(" "));
    println!("Processor count: {}", cpu.processor_count());
    let features: Vec<String> = cpu.feature_union().into_iter().collect();
    println!("Processor features: {}", features.join(" "));
    println!();
}

/// One progress line per converged measurement.
pub fn print_timed(tag: &str, size: Option<usize>, result: &TimedResult) {
    let title = match size {
        Some(size) => format!("{tag} [{size}]"),
        None => tag.to_string(),
    };
    println!(
        "{:<55}min {:>10}  max {:>10}  iterations {}",
        truncate(&title, 54),
        format_duration(result.min()),
        format_duration(result.max()),
        result.iterations()
    );
}

/// Final summary: one row per tag, one column of minimum durations per
/// tested size.
pub fn print_summary(registry: &WorkRegistry, sizes: &[usize]) {
    const CELL: usize = 12;
    let tag_width = term_width().saturating_sub(CELL * sizes.len().min(7)).max(20);

    println!();
    println!("=== Minimum duration per input size ===");
    print!("{:<tag_width$}", "");
    for size in sizes {
        print!("{size:>CELL$}");
    }
    println!();

    for tag in registry.tags() {
        let entries = registry.entries(tag);
        // Overhead baselines were measured once; show them separately.
        if entries.len() == 1 && entries[0].0 == 0 {
            continue;
        }
        print!("{:<tag_width$}", truncate(tag, tag_width.saturating_sub(1)));
        for (_, result) in entries {
            print!("{:>CELL$}", format_duration(result.min()));
        }
        println!();
    }

    let overheads: Vec<&str> = registry
        .tags()
        .filter(|tag| {
            let entries = registry.entries(tag);
            entries.len() == 1 && entries[0].0 == 0
        })
        .collect();
    if !overheads.is_empty() {
        println!();
        println!("=== Boundary overhead baselines ===");
        for tag in overheads {
            let (_, result) = registry.entries(tag)[0];
            println!(
                "{:<tag_width$}min {:>10}  max {:>10}",
                truncate(tag, tag_width.saturating_sub(1)),
                format_duration(result.min()),
                format_duration(result.max())
            );
        }
    }
}

pub fn print_list(suite: &[Box<dyn Benchmark>]) {
    println!("Available benchmarks:");
    for bench in suite {
        println!("  {:<16}{}", bench.name(), bench.description());
    }
}

pub fn print_help() {
    println!("ffi-bench - measure Rust<->C FFI boundary overhead");
    println!();
    println!("Usage: ffi-bench [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --sizes a,b,c        Input sizes to sweep (default: 1,10,...,1000000)");
    println!("  --window N           Stability window for the sweep (default: 20)");
    println!("  --overhead-window N  Stability window for overhead baselines (default: 50)");
    println!("  --seed N             Input generation seed (default: 123)");
    println!("  --report PATH        Report destination (default: ffi_bench-<millis>.csv)");
    println!("  --cpuinfo PATH       Topology source (default: /proc/cpuinfo)");
    println!("  --list, -l           List benchmarks and exit");
    println!("  --help, -h           Show this help");
}
