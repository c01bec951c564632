pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod network;
pub mod os;
pub mod process;
pub mod ram;
pub mod temperature;
pub mod types;
pub mod uptime;
pub mod user;

pub use types::*;
