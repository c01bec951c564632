use crate::core::probes::types::{UptimeInfo, UptimeParts};
use sysinfo::System;

/// Read the whole seconds elapsed since boot.
pub fn collect() -> UptimeInfo {
    UptimeInfo {
        total_seconds: System::uptime(),
    }
}

/// Decompose an uptime into days/hours/minutes/seconds.
///
/// Pure integer division/modulo ladder; no independent storage.
pub fn decompose(total_seconds: u64) -> UptimeParts {
    UptimeParts {
        days: total_seconds / 86_400,
        hours: (total_seconds % 86_400) / 3_600,
        minutes: (total_seconds % 3_600) / 60,
        seconds: total_seconds % 60,
    }
}
