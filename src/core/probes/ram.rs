use crate::core::probes::types::RamInfo;
use crate::error::{ReportError, Result};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Collect memory totals and usage.
///
/// Fails with `ResourceUnavailable` only when the OS memory API itself
/// reports nothing, which sysinfo surfaces as a zero total.
pub fn collect() -> Result<RamInfo> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
    let sys = System::new_with_specifics(refresh);

    let total = sys.total_memory();
    if total == 0 {
        return Err(ReportError::resource_unavailable(
            "OS reported zero total memory",
        ));
    }

    let available = sys.available_memory().min(total);
    let used = sys.used_memory();
    let used_percent = (used as f32 / total as f32) * 100.0;

    Ok(RamInfo {
        total_bytes: total,
        available_bytes: available,
        used_percent,
    })
}
