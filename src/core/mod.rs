pub mod probes;
pub mod severity;
