pub mod report;
pub mod table;

use colored::Color;
use humansize::{format_size, BINARY};

use crate::core::severity::SeverityBand;
use crate::ui::table::Cell;

/// Map a severity band to its display color.
///
/// Swappable presentation concern; classification itself knows nothing
/// about rendering.
pub fn band_color(band: SeverityBand) -> Color {
    match band {
        SeverityBand::Ok => Color::Green,
        SeverityBand::Elevated => Color::Blue,
        SeverityBand::High => Color::Yellow,
        SeverityBand::Critical => Color::Red,
    }
}

/// Build a percentage cell colored by its severity band.
pub fn severity_cell(percent: f32) -> Cell {
    let band = SeverityBand::classify(percent);
    Cell::colored(format!("{:.1}%", percent), band_color(band))
}

/// Format a byte count for table display (KiB/MiB/GiB).
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format a megabyte quantity for table display.
pub fn format_mb(mb: f64) -> String {
    format!("{:.1} MB", mb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_are_distinct() {
        let colors = [
            band_color(SeverityBand::Ok),
            band_color(SeverityBand::Elevated),
            band_color(SeverityBand::High),
            band_color(SeverityBand::Critical),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_format_bytes_scales() {
        assert_eq!(format_bytes(0), "0 B");
        assert!(format_bytes(2 * 1024 * 1024).contains("MiB"));
    }
}
