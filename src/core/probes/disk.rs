use crate::core::probes::types::DiskEntry;
use crate::error::{ReportError, Result};
use log::warn;
use sysinfo::{Disk, Disks};

/// Collect usage for every accessible mount point.
///
/// One inaccessible mount must never suppress the rest: per-mount
/// failures are absorbed and the entry is excluded, so the result is a
/// best-effort subset of all partitions.
pub fn collect() -> Vec<DiskEntry> {
    let disks = Disks::new_with_refreshed_list();
    keep_accessible(disks.list().iter().map(read_usage))
}

/// Skip-and-continue policy: keep the Ok entries, log and drop the rest.
pub fn keep_accessible<I>(results: I) -> Vec<DiskEntry>
where
    I: IntoIterator<Item = Result<DiskEntry>>,
{
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping partition: {}", e);
                None
            }
        })
        .collect()
}

/// Read the usage of a single partition.
///
/// sysinfo does not surface a per-mount errno; a mount it could not stat
/// shows up with zero capacity (pseudo-filesystems look the same), and
/// both are routed through the same skip path as a permission failure.
fn read_usage(disk: &Disk) -> Result<DiskEntry> {
    let device = disk.name().to_string_lossy().to_string();
    let total = disk.total_space();
    if total == 0 {
        return Err(ReportError::permission_denied(format!(
            "no usage readable for {} ({})",
            device,
            disk.mount_point().display()
        )));
    }

    let free = disk.available_space();
    let used = total.saturating_sub(free);

    Ok(DiskEntry {
        device,
        total_bytes: total,
        used_bytes: used,
        free_bytes: free,
        used_percent: (used as f32 / total as f32) * 100.0,
    })
}
