//! Platform queries the topology pseudo-file cannot answer: the
//! instruction-set identifiers the build actually targets, and a
//! structured device identity to fall back on when the pseudo-file names
//! no hardware model.

/// Instruction-set identifiers for the running host: the target
/// architecture first, then runtime-detected extensions.
pub fn instruction_sets() -> Vec<String> {
    let mut isas = vec![std::env::consts::ARCH.to_string()];

    #[cfg(target_arch = "x86_64")]
    {
        for (name, detected) in [
            ("sse2", std::arch::is_x86_feature_detected!("sse2")),
            ("ssse3", std::arch::is_x86_feature_detected!("ssse3")),
            ("sse4.2", std::arch::is_x86_feature_detected!("sse4.2")),
            ("avx", std::arch::is_x86_feature_detected!("avx")),
            ("avx2", std::arch::is_x86_feature_detected!("avx2")),
            ("fma", std::arch::is_x86_feature_detected!("fma")),
        ] {
            if detected {
                isas.push(name.to_string());
            }
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is baseline on aarch64.
        isas.push("neon".to_string());
    }

    isas
}

/// Device model and vendor from the DMI tables, when the platform exposes
/// them. Returns `None` on hosts without DMI (containers, non-Linux).
pub fn identity() -> Option<(String, String)> {
    #[cfg(target_os = "linux")]
    {
        let model = read_dmi("product_name")?;
        let vendor = read_dmi("sys_vendor").unwrap_or_default();
        Some((model, vendor))
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(target_os = "linux")]
fn read_dmi(field: &str) -> Option<String> {
    let path = format!("/sys/devices/virtual/dmi/id/{field}");
    let value = std::fs::read_to_string(path).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_sets_start_with_the_target_arch() {
        let isas = instruction_sets();
        assert!(!isas.is_empty());
        assert_eq!(isas[0], std::env::consts::ARCH);
    }
}
