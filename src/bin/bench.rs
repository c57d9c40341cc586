//! CLI driver.
//!
//! Usage:
//!   ffi-bench                 # full sweep, report to a timestamped CSV
//!   ffi-bench --list          # list benchmarks
//!   ffi-bench --sizes 1,1000  # custom size sweep

use std::env;
use std::path::PathBuf;

use ffi_playground::{runner, suite, tui, RunConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = RunConfig::default();
    let mut show_list = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    config.sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--window" => {
                i += 1;
                if i < args.len() {
                    config.stability_window = args[i].parse().unwrap_or(20).max(1);
                }
            }
            "--overhead-window" => {
                i += 1;
                if i < args.len() {
                    config.overhead_window = args[i].parse().unwrap_or(50).max(1);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    if let Ok(seed) = args[i].parse() {
                        config.seed = seed;
                    }
                }
            }
            "--report" => {
                i += 1;
                if i < args.len() {
                    config.report_path = Some(PathBuf::from(&args[i]));
                }
            }
            "--cpuinfo" => {
                i += 1;
                if i < args.len() {
                    config.cpuinfo_path = PathBuf::from(&args[i]);
                }
            }
            other => {
                eprintln!("Unknown option: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_list(&suite::build_suite());
        return;
    }

    if config.sizes.is_empty() {
        eprintln!("No valid input sizes given.");
        std::process::exit(1);
    }

    tui::print_header();

    let outcome = runner::run(&config);

    tui::print_cpu_info(&outcome.cpu);
    tui::print_summary(&outcome.registry, &config.sizes);
    println!();
    match &outcome.report_path {
        Some(path) => println!("Performance test complete! Report: {}", path.display()),
        None => println!("Performance test complete! (report could not be written)"),
    }
}
