use serde::Serialize;

/// Operating system identity
#[derive(Debug, Clone, Serialize)]
pub struct OsInfo {
    pub system_name: String,
    pub release: String,
    pub version: String,
}

/// CPU identity and sampled utilization
#[derive(Debug, Clone, Serialize)]
pub struct CpuInfo {
    pub processor: String,
    pub logical_cores: usize,
    /// None on hosts where the OS cannot distinguish physical from
    /// logical cores (some virtualized/container environments).
    pub physical_cores: Option<usize>,
    pub usage_percent: f32,
}

/// Memory totals and usage
#[derive(Debug, Clone, Serialize)]
pub struct RamInfo {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_percent: f32,
}

/// Usage for a single accessible mount point
#[derive(Debug, Clone, Serialize)]
pub struct DiskEntry {
    pub device: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f32,
}

/// A single enumerated GPU device
#[derive(Debug, Clone, Serialize)]
pub struct GpuEntry {
    pub name: String,
    pub memory_total_mb: f64,
    pub memory_used_mb: f64,
}

/// A network interface and its bound addresses
///
/// Addresses are kept in enumeration order; the order is not stable
/// across OS calls and display-joining is left to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkInterfaceEntry {
    pub interface: String,
    pub addresses: Vec<String>,
}

/// Cumulative traffic counters since boot
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkCounters {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// Snapshot of a single live process
#[derive(Debug, Clone, Serialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_mb: f64,
}

/// Seconds elapsed since boot
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UptimeInfo {
    pub total_seconds: u64,
}

/// Pure decomposition of an uptime into calendar-style parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UptimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Current login identity
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub home_dir: String,
}

/// One labeled reading from a thermal sensor group
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureReading {
    pub label: String,
    pub celsius: f32,
}

/// A thermal sensor group and its labeled readings
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureGroup {
    pub sensor: String,
    pub readings: Vec<TemperatureReading>,
}
