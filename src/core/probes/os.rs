use crate::core::probes::types::OsInfo;
use sysinfo::System;

/// Collect the OS identity. Always succeeds; unresolvable fields fall
/// back to "unknown".
pub fn collect() -> OsInfo {
    OsInfo {
        system_name: System::name().unwrap_or_else(|| "unknown".to_string()),
        release: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
    }
}
