use std::io::Write;

use crate::core::probes::types::*;
use crate::core::probes::uptime;
use crate::error::Result;
use crate::ui::table::{Cell, Table};
use crate::ui::{format_bytes, format_mb, severity_cell};

pub fn render_os(info: &OsInfo, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Operating System Information",
        &["System", "OS Release", "OS Version"],
    );
    table.add_row(vec![
        Cell::plain(&info.system_name),
        Cell::plain(&info.release),
        Cell::plain(&info.version),
    ]);
    table.write_to(out)
}

pub fn render_cpu(info: &CpuInfo, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "CPU Information",
        &["Processor", "Core count", "Physical cores", "CPU Usage (%)"],
    );
    let physical = info
        .physical_cores
        .map(|n| n.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    table.add_row(vec![
        Cell::plain(&info.processor),
        Cell::plain(info.logical_cores.to_string()),
        Cell::plain(physical),
        severity_cell(info.usage_percent),
    ]);
    table.write_to(out)
}

pub fn render_ram(info: &RamInfo, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "RAM Information",
        &["Total memory", "Available memory", "Used memory (%)"],
    );
    table.add_row(vec![
        Cell::plain(format_bytes(info.total_bytes)),
        Cell::plain(format_bytes(info.available_bytes)),
        severity_cell(info.used_percent),
    ]);
    table.write_to(out)
}

pub fn render_disks(entries: &[DiskEntry], out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Disk Information",
        &["Device", "Total size", "Used size", "Free size", "Usage (%)"],
    );
    for entry in entries {
        table.add_row(vec![
            Cell::plain(&entry.device),
            Cell::plain(format_bytes(entry.total_bytes)),
            Cell::plain(format_bytes(entry.used_bytes)),
            Cell::plain(format_bytes(entry.free_bytes)),
            severity_cell(entry.used_percent),
        ]);
    }
    table.write_to(out)
}

pub fn render_gpus(entries: &[GpuEntry], out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "GPU Information",
        &["GPU", "Memory Total", "Memory Used"],
    );
    if entries.is_empty() {
        table.add_row(vec![
            Cell::plain("no GPU detected"),
            Cell::plain("-"),
            Cell::plain("-"),
        ]);
    }
    for entry in entries {
        table.add_row(vec![
            Cell::plain(&entry.name),
            Cell::plain(format_mb(entry.memory_total_mb)),
            Cell::plain(format_mb(entry.memory_used_mb)),
        ]);
    }
    table.write_to(out)
}

pub fn render_interfaces(entries: &[NetworkInterfaceEntry], out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Network Interface Information",
        &["Interface", "IP Address"],
    );
    for entry in entries {
        let joined = if entry.addresses.is_empty() {
            "-".to_string()
        } else {
            entry.addresses.join(", ")
        };
        table.add_row(vec![Cell::plain(&entry.interface), Cell::plain(joined)]);
    }
    table.write_to(out)
}

pub fn render_processes(entries: &[ProcessEntry], out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Process Information",
        &["PID", "Name", "CPU (%)", "Memory"],
    );
    for entry in entries {
        table.add_row(vec![
            Cell::plain(entry.pid.to_string()),
            Cell::plain(&entry.name),
            severity_cell(entry.cpu_percent),
            Cell::plain(format_mb(entry.memory_mb)),
        ]);
    }
    table.write_to(out)
}

pub fn render_uptime(info: &UptimeInfo, out: &mut dyn Write) -> Result<()> {
    let parts = uptime::decompose(info.total_seconds);
    let mut table = Table::new(
        "Uptime Information",
        &["Days", "Hours", "Minutes", "Seconds"],
    );
    table.add_row(vec![
        Cell::plain(parts.days.to_string()),
        Cell::plain(parts.hours.to_string()),
        Cell::plain(parts.minutes.to_string()),
        Cell::plain(parts.seconds.to_string()),
    ]);
    table.write_to(out)
}

pub fn render_counters(counters: &NetworkCounters, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Network Usage Information",
        &["Bytes Sent", "Bytes Received"],
    );
    table.add_row(vec![
        Cell::plain(format_bytes(counters.bytes_sent)),
        Cell::plain(format_bytes(counters.bytes_received)),
    ]);
    table.write_to(out)
}

pub fn render_user(info: &UserInfo, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new("User Information", &["Username", "Home directory"]);
    table.add_row(vec![
        Cell::plain(&info.username),
        Cell::plain(&info.home_dir),
    ]);
    table.write_to(out)
}

/// Render thermal sensor groups, one row per labeled reading.
///
/// A host with zero groups still gets a defined placeholder row rather
/// than an empty body, so downstream consumers never see a headerless
/// blank section.
pub fn render_temperatures(groups: &[TemperatureGroup], out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new(
        "Temperature Information",
        &["Sensor", "Label", "Temperature (°C)"],
    );
    for group in groups {
        for reading in &group.readings {
            table.add_row(vec![
                Cell::plain(&group.sensor),
                Cell::plain(&reading.label),
                Cell::plain(format!("{:.1}", reading.celsius)),
            ]);
        }
    }
    if table.is_empty() {
        table.add_row(vec![
            Cell::plain("no sensors detected"),
            Cell::plain("-"),
            Cell::plain("-"),
        ]);
    }
    table.write_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_zero_temperature_groups_render_placeholder_row() {
        let text = render_to_string(|out| render_temperatures(&[], out));
        assert!(text.contains("Temperature Information"));
        assert!(text.contains("no sensors detected"));
    }

    #[test]
    fn test_temperature_rows_follow_group_order() {
        let groups = vec![
            TemperatureGroup {
                sensor: "coretemp".to_string(),
                readings: vec![
                    TemperatureReading {
                        label: "Core 0".to_string(),
                        celsius: 41.0,
                    },
                    TemperatureReading {
                        label: "Core 1".to_string(),
                        celsius: 43.5,
                    },
                ],
            },
            TemperatureGroup {
                sensor: "nvme".to_string(),
                readings: vec![TemperatureReading {
                    label: "Composite".to_string(),
                    celsius: 35.0,
                }],
            },
        ];
        let text = render_to_string(|out| render_temperatures(&groups, out));
        let core0 = text.find("Core 0").unwrap();
        let core1 = text.find("Core 1").unwrap();
        let nvme = text.find("Composite").unwrap();
        assert!(core0 < core1 && core1 < nvme);
    }

    #[test]
    fn test_gpu_section_renders_placeholder_when_absent() {
        let text = render_to_string(|out| render_gpus(&[], out));
        assert!(text.contains("no GPU detected"));
    }

    #[test]
    fn test_interface_addresses_join_in_order() {
        let entries = vec![NetworkInterfaceEntry {
            interface: "eth0".to_string(),
            addresses: vec!["192.168.1.2".to_string(), "fe80::1".to_string()],
        }];
        let text = render_to_string(|out| render_interfaces(&entries, out));
        assert!(text.contains("192.168.1.2, fe80::1"));
    }

    #[test]
    fn test_cpu_section_shows_na_for_unresolved_physical_cores() {
        let info = CpuInfo {
            processor: "test cpu".to_string(),
            logical_cores: 8,
            physical_cores: None,
            usage_percent: 12.5,
        };
        let text = render_to_string(|out| render_cpu(&info, out));
        assert!(text.contains("n/a"));
        assert!(text.contains("12.5%"));
    }
}
