use std::time::Duration;

use crate::core::probes::types::CpuInfo;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Minimum sampling window. Anything shorter yields a near-instantaneous
/// reading that is effectively zero on an idle host.
pub const MIN_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Collect CPU identity and utilization sampled over `sample_window`.
///
/// Blocks the calling thread for the window (clamped up to at least one
/// second) between two refreshes so the OS can accumulate utilization.
/// This is the single deliberate suspension point in the collection core.
pub fn collect(sample_window: Duration) -> CpuInfo {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    // Two refreshes bracket the window; usage is the delta between them.
    sys.refresh_cpu_all();
    std::thread::sleep(sample_window.max(MIN_SAMPLE_WINDOW));
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    let processor = cpus
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let usage_percent = if cpus.is_empty() {
        0.0
    } else {
        cpus.iter().map(|cpu| cpu.cpu_usage()).sum::<f32>() / cpus.len() as f32
    };

    CpuInfo {
        processor,
        logical_cores: cpus.len(),
        physical_cores: System::physical_core_count(),
        usage_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_reads_plausible_usage() {
        let info = collect(MIN_SAMPLE_WINDOW);
        assert!(info.logical_cores > 0);
        assert!(info.usage_percent >= 0.0);
        assert!(info.usage_percent <= 100.0 + 0.01);
        if let Some(physical) = info.physical_cores {
            assert!(physical <= info.logical_cores);
        }
    }
}
