//! Report command: maps CLI flags to probe invocations and hands each
//! probe's typed result to the rendering layer.
//!
//! Failure isolation mirrors the disk probe's policy, generalized to the
//! whole dispatcher: a failed category prints a labeled notice instead
//! of a table and the remaining categories still run; the final exit
//! code reflects that something was unavailable.

use std::io::Write;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use log::warn;
use serde_json::json;

use crate::core::probes::{
    cpu, disk, gpu, network, os, process, ram, temperature, uptime, user, types::*,
};
use crate::error::Result;
use crate::ui::report as render;

/// Report categories in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Os,
    Cpu,
    Ram,
    Disk,
    Gpu,
    Network,
    Process,
    Uptime,
    NetworkUsage,
    User,
    Temperature,
}

impl Category {
    pub const DISPLAY_ORDER: [Category; 11] = [
        Category::Os,
        Category::Cpu,
        Category::Ram,
        Category::Disk,
        Category::Gpu,
        Category::Network,
        Category::Process,
        Category::Uptime,
        Category::NetworkUsage,
        Category::User,
        Category::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Os => "OS",
            Category::Cpu => "CPU",
            Category::Ram => "RAM",
            Category::Disk => "Disk",
            Category::Gpu => "GPU",
            Category::Network => "Network",
            Category::Process => "Process",
            Category::Uptime => "Uptime",
            Category::NetworkUsage => "Network Usage",
            Category::User => "User",
            Category::Temperature => "Temperature",
        }
    }

    fn json_key(self) -> &'static str {
        match self {
            Category::Os => "os",
            Category::Cpu => "cpu",
            Category::Ram => "ram",
            Category::Disk => "disk",
            Category::Gpu => "gpu",
            Category::Network => "network",
            Category::Process => "process",
            Category::Uptime => "uptime",
            Category::NetworkUsage => "network_usage",
            Category::User => "user",
            Category::Temperature => "temperature",
        }
    }
}

/// Parsed report selection. Replaces the implicit parsed-args singleton
/// so probes and rendering stay independently testable.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub os: bool,
    pub cpu: bool,
    pub ram: bool,
    pub disk: bool,
    pub gpu: bool,
    pub network: bool,
    pub process: bool,
    pub uptime: bool,
    pub network_usage: bool,
    pub user: bool,
    pub temperature: bool,
    pub json: bool,
    pub cpu_sample_window: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::none()
    }
}

impl ReportOptions {
    /// No categories selected; running this produces no output.
    pub fn none() -> Self {
        ReportOptions {
            os: false,
            cpu: false,
            ram: false,
            disk: false,
            gpu: false,
            network: false,
            process: false,
            uptime: false,
            network_usage: false,
            user: false,
            temperature: false,
            json: false,
            cpu_sample_window: cpu::MIN_SAMPLE_WINDOW,
        }
    }

    /// Every category selected, equivalent to `--all`.
    pub fn all() -> Self {
        ReportOptions {
            os: true,
            cpu: true,
            ram: true,
            disk: true,
            gpu: true,
            network: true,
            process: true,
            uptime: true,
            network_usage: true,
            user: true,
            temperature: true,
            ..Self::none()
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut opts = if matches.get_flag("all") {
            Self::all()
        } else {
            ReportOptions {
                os: matches.get_flag("os"),
                cpu: matches.get_flag("cpu"),
                ram: matches.get_flag("ram"),
                disk: matches.get_flag("disk"),
                gpu: matches.get_flag("gpu"),
                network: matches.get_flag("network"),
                process: matches.get_flag("process"),
                uptime: matches.get_flag("uptime"),
                network_usage: matches.get_flag("network-usage"),
                user: matches.get_flag("user"),
                temperature: matches.get_flag("temperature"),
                ..Self::none()
            }
        };

        opts.json = matches.get_flag("json");
        if let Some(seconds) = matches.get_one::<u64>("cpu-window") {
            opts.cpu_sample_window = Duration::from_secs(*seconds);
        }
        opts
    }

    pub fn selected(&self, category: Category) -> bool {
        match category {
            Category::Os => self.os,
            Category::Cpu => self.cpu,
            Category::Ram => self.ram,
            Category::Disk => self.disk,
            Category::Gpu => self.gpu,
            Category::Network => self.network,
            Category::Process => self.process,
            Category::Uptime => self.uptime,
            Category::NetworkUsage => self.network_usage,
            Category::User => self.user,
            Category::Temperature => self.temperature,
        }
    }

    pub fn any_selected(&self) -> bool {
        Category::DISPLAY_ORDER.iter().any(|c| self.selected(*c))
    }
}

/// Outcome of one report run.
#[derive(Debug, Default)]
pub struct ReportSummary {
    /// Labeled per-category failures, in display order.
    pub failures: Vec<String>,
}

impl ReportSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One category's typed probe result.
enum Snapshot {
    Os(OsInfo),
    Cpu(CpuInfo),
    Ram(RamInfo),
    Disks(Vec<DiskEntry>),
    Gpus(Vec<GpuEntry>),
    Interfaces(Vec<NetworkInterfaceEntry>),
    Processes(Vec<ProcessEntry>),
    Uptime(UptimeInfo),
    Counters(NetworkCounters),
    User(UserInfo),
    Temperatures(Vec<TemperatureGroup>),
}

fn collect(category: Category, opts: &ReportOptions) -> Result<Snapshot> {
    Ok(match category {
        Category::Os => Snapshot::Os(os::collect()),
        Category::Cpu => Snapshot::Cpu(cpu::collect(opts.cpu_sample_window)),
        Category::Ram => Snapshot::Ram(ram::collect()?),
        Category::Disk => Snapshot::Disks(disk::collect()),
        Category::Gpu => Snapshot::Gpus(gpu::collect()),
        Category::Network => Snapshot::Interfaces(network::collect_interfaces()),
        Category::Process => Snapshot::Processes(process::collect()?),
        Category::Uptime => Snapshot::Uptime(uptime::collect()),
        Category::NetworkUsage => Snapshot::Counters(network::collect_counters()),
        Category::User => Snapshot::User(user::collect()?),
        Category::Temperature => Snapshot::Temperatures(temperature::collect()),
    })
}

fn render_snapshot(snapshot: &Snapshot, out: &mut dyn Write) -> Result<()> {
    match snapshot {
        Snapshot::Os(info) => render::render_os(info, out),
        Snapshot::Cpu(info) => render::render_cpu(info, out),
        Snapshot::Ram(info) => render::render_ram(info, out),
        Snapshot::Disks(entries) => render::render_disks(entries, out),
        Snapshot::Gpus(entries) => render::render_gpus(entries, out),
        Snapshot::Interfaces(entries) => render::render_interfaces(entries, out),
        Snapshot::Processes(entries) => render::render_processes(entries, out),
        Snapshot::Uptime(info) => render::render_uptime(info, out),
        Snapshot::Counters(counters) => render::render_counters(counters, out),
        Snapshot::User(info) => render::render_user(info, out),
        Snapshot::Temperatures(groups) => render::render_temperatures(groups, out),
    }
}

fn snapshot_json(snapshot: &Snapshot) -> serde_json::Value {
    match snapshot {
        Snapshot::Os(info) => json!(info),
        Snapshot::Cpu(info) => json!(info),
        Snapshot::Ram(info) => json!(info),
        Snapshot::Disks(entries) => json!(entries),
        Snapshot::Gpus(entries) => json!(entries),
        Snapshot::Interfaces(entries) => json!(entries),
        Snapshot::Processes(entries) => json!(entries),
        Snapshot::Uptime(info) => json!(info),
        Snapshot::Counters(counters) => json!(counters),
        Snapshot::User(info) => json!(info),
        Snapshot::Temperatures(groups) => json!(groups),
    }
}

/// Run the selected probes in display order and write each section.
///
/// IO failures on the writer abort the run; probe failures do not.
pub fn run_report<W: Write>(opts: &ReportOptions, out: &mut W) -> Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    if !opts.any_selected() {
        return Ok(summary);
    }

    if opts.json {
        return run_json(opts, out);
    }

    for category in Category::DISPLAY_ORDER {
        if !opts.selected(category) {
            continue;
        }

        match collect(category, opts) {
            Ok(snapshot) => render_snapshot(&snapshot, out)?,
            Err(e) => {
                warn!("{} probe failed: {}", category.label(), e);
                let notice = format!("{} unavailable: {}", category.label(), e);
                writeln!(out, "\n{}", notice.as_str().red().bold())?;
                summary.failures.push(notice);
            }
        }
    }

    Ok(summary)
}

/// Machine-readable variant: one JSON document keyed by category.
fn run_json<W: Write>(opts: &ReportOptions, out: &mut W) -> Result<ReportSummary> {
    let mut summary = ReportSummary::default();
    let mut document = serde_json::Map::new();

    for category in Category::DISPLAY_ORDER {
        if !opts.selected(category) {
            continue;
        }

        let value = match collect(category, opts) {
            Ok(snapshot) => snapshot_json(&snapshot),
            Err(e) => {
                warn!("{} probe failed: {}", category.label(), e);
                summary
                    .failures
                    .push(format!("{} unavailable: {}", category.label(), e));
                json!({ "error": e.to_string() })
            }
        };
        document.insert(category.json_key().to_string(), value);
    }

    let text = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
    writeln!(out, "{}", text)?;

    Ok(summary)
}

/// Build the command-line surface. Flags are independent boolean
/// switches, OR-combined; `--all` enables every category.
pub fn build_cli() -> Command {
    Command::new("sysreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Display system information")
        .arg(flag("all", "Display all information"))
        .arg(flag("os", "Display OS information"))
        .arg(flag("cpu", "Display CPU information"))
        .arg(flag("ram", "Display RAM information"))
        .arg(flag("disk", "Display disk information"))
        .arg(flag("gpu", "Display GPU information"))
        .arg(flag("network", "Display network interface information"))
        .arg(flag("process", "Display process information"))
        .arg(flag("uptime", "Display uptime information"))
        .arg(
            flag("network-usage", "Display cumulative network usage")
                .alias("network_usage"),
        )
        .arg(flag("user", "Display current user information"))
        .arg(flag("temperature", "Display temperature sensor information"))
        .arg(flag("json", "Emit the selected categories as JSON"))
        .arg(
            Arg::new("cpu-window")
                .long("cpu-window")
                .value_name("SECONDS")
                .help("CPU utilization sampling window in seconds (minimum 1)")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("1"),
        )
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}
