//! Hardware-specific information structures

use super::UNKNOWN;

/// GPU information with support for multiple GPUs
#[derive(Debug, Clone, PartialEq)]
pub struct GpuInfo {
    /// Best-ranked display adapter
    pub primary: String,
    /// Every display adapter, best first
    pub all: Vec<String>,
}

impl GpuInfo {
    pub fn unknown() -> Self {
        GpuInfo {
            primary: UNKNOWN.to_string(),
            all: Vec::new(),
        }
    }
}

/// Memory information
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryInfo {
    pub used_kib: u64,
    pub total_kib: u64,
    pub formatted: String,
}
