use crate::core::probes::types::{NetworkCounters, NetworkInterfaceEntry};
use sysinfo::Networks;

/// Enumerate network interfaces with their bound addresses.
///
/// Addresses are collected in OS enumeration order, one entry per
/// interface; joining them into display text is the renderer's job.
pub fn collect_interfaces() -> Vec<NetworkInterfaceEntry> {
    let networks = Networks::new_with_refreshed_list();

    networks
        .iter()
        .map(|(interface, data)| NetworkInterfaceEntry {
            interface: interface.to_string(),
            addresses: data
                .ip_networks()
                .iter()
                .map(|ip| ip.addr.to_string())
                .collect(),
        })
        .collect()
}

/// Read the cumulative traffic counters, summed across interfaces.
///
/// Counters are monotonic within a boot session; no rates or deltas are
/// computed here, there is no polling loop.
pub fn collect_counters() -> NetworkCounters {
    let networks = Networks::new_with_refreshed_list();

    let mut counters = NetworkCounters {
        bytes_sent: 0,
        bytes_received: 0,
    };
    for (_, data) in networks.iter() {
        counters.bytes_sent = counters.bytes_sent.saturating_add(data.total_transmitted());
        counters.bytes_received = counters
            .bytes_received
            .saturating_add(data.total_received());
    }

    counters
}
