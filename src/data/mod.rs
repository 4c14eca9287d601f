//! Plain data gathered by the collectors

pub mod hardware;
pub mod system;

pub use hardware::{GpuInfo, MemoryInfo};
pub use system::{OsInfo, PackageCount, PackageInfo, PackageManager, SystemInfo, UptimeInfo};

/// Placeholder shown for any fact a probe could not determine.
pub const UNKNOWN: &str = "Unknown";
