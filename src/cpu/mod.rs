//! Host CPU topology, parsed from the `/proc/cpuinfo` pseudo-file.
//!
//! The file has no guaranteed schema beyond blank-line-delimited per-core
//! blocks of loose `label: value` lines, so the parser is a two-state
//! machine over the line stream. Absence of the file is an expected
//! condition on some hosts and degrades to an empty [`CpuInfo`].

pub mod platform;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::BenchError;

/// Conventional location of the topology pseudo-file.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// One detected core: its index and the feature tokens its block listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessorInfo {
    /// Core index from the block's opening line; `-1` if unparseable.
    pub index: i32,
    pub features: BTreeSet<String>,
}

/// Structured summary of the host CPU, built once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// Device/SoC model; empty when unknown.
    pub model: String,
    /// Manufacturer; empty when unknown.
    pub manufacturer: String,
    /// Platform-reported instruction-set identifiers.
    pub isas: Vec<String>,
    pub processors: Vec<ProcessorInfo>,
}

impl CpuInfo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Union of every core's feature set.
    pub fn feature_union(&self) -> BTreeSet<String> {
        self.processors
            .iter()
            .flat_map(|p| p.features.iter().cloned())
            .collect()
    }
}

/// Read and parse the topology source, then fill in what the pseudo-file
/// could not provide from the platform collaborator: the instruction-set
/// list always, and the model/manufacturer identity when no hardware line
/// was found.
pub fn fetch(path: &Path) -> CpuInfo {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            log::warn!(
                "{}",
                BenchError::Topology {
                    path: path.to_owned(),
                    source,
                }
            );
            return CpuInfo::empty();
        }
    };

    let mut info = parse(&text);
    if info.model.is_empty() {
        if let Some((model, manufacturer)) = platform::identity() {
            info.model = model;
            info.manufacturer = manufacturer;
        }
    }
    info.isas = platform::instruction_sets();
    info
}

/// Value of a `label:  value` line, if it follows the colon-then-whitespace
/// convention. Lines matching a field prefix but not this shape are skipped.
fn field_value(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(':')?;
    let value = rest.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// First run of decimal digits in `line`, or `-1` when absent.
fn leading_core_index(line: &str) -> i32 {
    let start = match line.find(|c: char| c.is_ascii_digit()) {
        Some(i) => i,
        None => return -1,
    };
    let digits: String = line[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(-1)
}

enum State {
    Outside,
    InBlock {
        index: i32,
        model: String,
        features: BTreeSet<String>,
    },
}

/// Parse the raw topology text. Pure function of its input; the platform
/// fallbacks live in [`fetch`].
///
/// The device model is the first `Hardware` line's value; when the input
/// has none (typical on x86), the first per-core `model name` stands in.
pub fn parse(text: &str) -> CpuInfo {
    let mut processors = Vec::new();
    let mut hardware: Option<String> = None;
    let mut core_model: Option<String> = None;
    let mut state = State::Outside;

    for line in text.lines() {
        state = match state {
            State::Outside => {
                if line.starts_with("processor") {
                    State::InBlock {
                        index: leading_core_index(line),
                        model: String::new(),
                        features: BTreeSet::new(),
                    }
                } else {
                    if line.starts_with("Hardware") && hardware.is_none() {
                        if let Some(value) = field_value(line) {
                            hardware = Some(value.to_owned());
                        }
                    }
                    State::Outside
                }
            }
            State::InBlock {
                index,
                mut model,
                mut features,
            } => {
                if line.trim().is_empty() {
                    emit(&mut core_model, &mut processors, index, model, features);
                    State::Outside
                } else {
                    if line.starts_with("model name") {
                        if let Some(value) = field_value(line) {
                            model = value.to_owned();
                        }
                    } else if line.starts_with("Features") || line.starts_with("flags") {
                        if let Some(value) = field_value(line) {
                            features.extend(value.split_whitespace().map(str::to_owned));
                        }
                    }
                    State::InBlock {
                        index,
                        model,
                        features,
                    }
                }
            }
        };
    }

    // End of input inside a block counts as an implicit blank line.
    if let State::InBlock {
        index,
        model,
        features,
    } = state
    {
        emit(&mut core_model, &mut processors, index, model, features);
    }

    CpuInfo {
        model: hardware.or(core_model).unwrap_or_default(),
        manufacturer: String::new(),
        isas: Vec::new(),
        processors,
    }
}

/// Close a per-core block: remember the first non-empty per-core model as
/// the fallback device model, then record the processor.
fn emit(
    core_model: &mut Option<String>,
    processors: &mut Vec<ProcessorInfo>,
    index: i32,
    model: String,
    features: BTreeSet<String>,
) {
    if core_model.is_none() && !model.is_empty() {
        *core_model = Some(model);
    }
    processors.push(ProcessorInfo { index, features });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn two_core_blocks_parse_into_two_processors() {
        let text = "processor\t: 0\n\
                    model name\t: X\n\
                    Features\t: a b c\n\
                    \n\
                    processor\t: 1\n\
                    model name\t: Y\n\
                    Features\t: d e\n\
                    \n";
        let info = parse(text);
        assert_eq!(info.processors.len(), 2);
        assert_eq!(info.processors[0].index, 0);
        assert_eq!(info.processors[0].features, set(&["a", "b", "c"]));
        assert_eq!(info.processors[1].index, 1);
        assert_eq!(info.processors[1].features, set(&["d", "e"]));
        assert_eq!(info.feature_union(), set(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn hardware_line_sets_the_model_first_match_wins() {
        let text = "processor\t: 0\n\
                    \n\
                    Hardware\t: Qualcomm Technologies, Inc SM8550\n\
                    Hardware\t: something else\n";
        let info = parse(text);
        assert_eq!(info.model, "Qualcomm Technologies, Inc SM8550");
    }

    #[test]
    fn hardware_line_outranks_per_core_model_names() {
        let text = "processor\t: 0\n\
                    model name\t: ARMv8 Processor rev 1\n\
                    \n\
                    Hardware\t: Google Tensor G3\n";
        let info = parse(text);
        assert_eq!(info.model, "Google Tensor G3");
    }

    #[test]
    fn end_of_input_closes_an_open_block() {
        let text = "processor\t: 3\nFeatures\t: fp asimd";
        let info = parse(text);
        assert_eq!(info.processors.len(), 1);
        assert_eq!(info.processors[0].index, 3);
        assert_eq!(info.processors[0].features, set(&["fp", "asimd"]));
    }

    #[test]
    fn field_without_colon_value_is_skipped() {
        let text = "processor\t: 0\n\
                    model name\n\
                    Features\t:\n\
                    \n";
        let info = parse(text);
        assert_eq!(info.processors.len(), 1);
        assert!(info.processors[0].features.is_empty());
        assert!(info.model.is_empty());
    }

    #[test]
    fn processor_line_without_digits_gets_sentinel_index() {
        let info = parse("processor\t: none\n\n");
        assert_eq!(info.processors[0].index, -1);
    }

    #[test]
    fn x86_flags_spelling_is_recognized() {
        let text = "processor\t: 0\n\
                    model name\t: AMD Ryzen 7 5800X\n\
                    flags\t\t: fpu vme sse2 avx2\n\
                    \n";
        let info = parse(text);
        assert_eq!(info.processors[0].features, set(&["fpu", "vme", "sse2", "avx2"]));
        // No Hardware line, so the per-core model stands in.
        assert_eq!(info.model, "AMD Ryzen 7 5800X");
    }

    #[test]
    fn missing_file_degrades_to_empty_info_without_platform_fill() {
        let info = fetch(Path::new("/nonexistent/cpuinfo"));
        assert!(info.model.is_empty());
        assert!(info.manufacturer.is_empty());
        assert!(info.isas.is_empty());
        assert!(info.processors.is_empty());
    }

    #[test]
    fn blank_only_input_yields_no_processors() {
        let info = parse("\n\n\n");
        assert!(info.processors.is_empty());
    }
}
