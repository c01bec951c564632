use serde::Serialize;

/// Discrete severity band for a usage percentage.
///
/// Classification is pure and carries no rendering concern; the mapping
/// from a band to a display color lives in the `ui` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeverityBand {
    Ok,
    Elevated,
    High,
    Critical,
}

impl SeverityBand {
    /// Classify a percentage into a severity band.
    ///
    /// Breakpoints: <=25 Ok, <=50 Elevated, <=75 High, >75 Critical.
    /// Input is not clamped; transient readings outside [0, 100] still
    /// classify through the same breakpoints.
    pub fn classify(percent: f32) -> Self {
        if percent <= 25.0 {
            SeverityBand::Ok
        } else if percent <= 50.0 {
            SeverityBand::Elevated
        } else if percent <= 75.0 {
            SeverityBand::High
        } else {
            SeverityBand::Critical
        }
    }
}
