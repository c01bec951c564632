use crate::core::probes::types::{TemperatureGroup, TemperatureReading};
use crate::error::{ReportError, Result};
use log::warn;
use sysinfo::Components;

/// Enumerate thermal sensor groups and their labeled readings.
///
/// A host without exposed sensors yields an empty sequence; that is not
/// an error. Readings the OS exposes but cannot value (absent or
/// non-finite) are absorbed per-sensor and excluded.
pub fn collect() -> Vec<TemperatureGroup> {
    let components = Components::new_with_refreshed_list();

    let mut groups: Vec<TemperatureGroup> = Vec::new();
    for component in components.iter() {
        let celsius = match read_celsius(component.label(), component.temperature()) {
            Ok(celsius) => celsius,
            Err(e) => {
                warn!("skipping sensor reading: {}", e);
                continue;
            }
        };

        let (sensor, label) = split_label(component.label());
        let reading = TemperatureReading { label, celsius };
        match groups.iter_mut().find(|g| g.sensor == sensor) {
            Some(group) => group.readings.push(reading),
            None => groups.push(TemperatureGroup {
                sensor,
                readings: vec![reading],
            }),
        }
    }

    groups
}

fn read_celsius(label: &str, celsius: Option<f32>) -> Result<f32> {
    let celsius = celsius.ok_or_else(|| {
        ReportError::malformed_sensor_data(format!("{}: no current reading", label))
    })?;
    if !celsius.is_finite() {
        return Err(ReportError::malformed_sensor_data(format!(
            "{}: non-finite reading {}",
            label, celsius
        )));
    }

    Ok(celsius)
}

/// Split a component label like "coretemp Core 0" into the sensor group
/// name and the per-reading label. Labels without a space form their own
/// single-reading group.
fn split_label(label: &str) -> (String, String) {
    match label.trim().split_once(' ') {
        Some((sensor, rest)) => (sensor.to_string(), rest.trim().to_string()),
        None => (label.trim().to_string(), label.trim().to_string()),
    }
}
