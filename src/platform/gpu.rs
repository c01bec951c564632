//! GPU enumeration backend.
//!
//! Backed by NVML when the `nvml` feature is enabled and an NVIDIA
//! driver is present. Availability is probed once per process and every
//! later call short-circuits on the cached result, so a driver-less host
//! never pays for repeated failed initializations.

#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;
#[cfg(feature = "nvml")]
use once_cell::sync::Lazy;

use crate::core::probes::types::GpuEntry;
use crate::error::{ReportError, Result};

#[cfg(feature = "nvml")]
static NVML: Lazy<Option<Nvml>> = Lazy::new(|| match Nvml::init() {
    Ok(nvml) => Some(nvml),
    Err(e) => {
        log::debug!("NVML unavailable: {}", e);
        None
    }
});

/// Whether a GPU enumeration backend is usable on this host.
pub fn is_available() -> bool {
    #[cfg(feature = "nvml")]
    {
        NVML.is_some()
    }
    #[cfg(not(feature = "nvml"))]
    {
        false
    }
}

/// Enumerate the devices the backend exposes.
#[cfg(feature = "nvml")]
pub fn enumerate() -> Result<Vec<GpuEntry>> {
    let nvml = NVML
        .as_ref()
        .ok_or_else(|| ReportError::backend_unavailable("NVML failed to initialize"))?;

    let count = nvml
        .device_count()
        .map_err(|e| ReportError::resource_unavailable(format!("NVML device count: {}", e)))?;

    let mut entries = Vec::with_capacity(count as usize);
    for index in 0..count {
        let device = nvml.device_by_index(index).map_err(|e| {
            ReportError::resource_unavailable(format!("NVML device {}: {}", index, e))
        })?;

        let name = device
            .name()
            .unwrap_or_else(|_| format!("NVIDIA GPU {}", index));
        let memory = device.memory_info().map_err(|e| {
            ReportError::resource_unavailable(format!("NVML memory info {}: {}", index, e))
        })?;

        entries.push(GpuEntry {
            name,
            memory_total_mb: memory.total as f64 / (1024.0 * 1024.0),
            memory_used_mb: memory.used as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(entries)
}

#[cfg(not(feature = "nvml"))]
pub fn enumerate() -> Result<Vec<GpuEntry>> {
    Err(ReportError::backend_unavailable(
        "GPU support not compiled in",
    ))
}
