use crate::core::probes::types::GpuEntry;
use crate::platform::gpu as backend;

/// Enumerate GPU devices.
///
/// When the enumeration backend is not available (feature disabled, no
/// driver, no device) the result is an empty sequence, never an error,
/// so the rest of the report is unaffected on GPU-less hosts.
pub fn collect() -> Vec<GpuEntry> {
    if !backend::is_available() {
        return Vec::new();
    }

    backend::enumerate().unwrap_or_else(|e| {
        log::warn!("GPU backend present but enumeration failed: {}", e);
        Vec::new()
    })
}
