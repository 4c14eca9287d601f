//! System-wide information structures

use super::hardware::{GpuInfo, MemoryInfo};
use crate::distro::Distro;
use std::fmt;

/// Complete system information gathered by nordfetch
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub distro: Distro,
    pub os: OsInfo,
    pub kernel: String,
    pub uptime: UptimeInfo,
    pub memory: MemoryInfo,
    pub wm: String,
    pub terminal: String,
    pub shell: String,
    pub cpu: String,
    pub gpu: GpuInfo,
    pub packages: PackageInfo,
}

/// Operating system related information
#[derive(Debug, Clone, PartialEq)]
pub struct OsInfo {
    /// Human-readable name, e.g. "Gentoo Linux"
    pub name: String,
    /// Release string when the distribution has one
    pub version: Option<String>,
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) if !self.name.contains(version.as_str()) => {
                write!(f, "{} {}", self.name, version)
            }
            _ => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UptimeInfo {
    pub seconds: u64,
    pub formatted: String,
}

/// Supported package managers for different Linux distributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageManager {
    Nix,     // NixOS, Bedrock's nix stratum
    Rpm,     // Fedora, RHEL
    Emerge,  // Gentoo
    Pacman,  // Arch Linux, CachyOS
    Dpkg,    // Debian, Ubuntu
    Xbps,    // Void Linux
    Flatpak,
}

impl PackageManager {
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Nix => "nix",
            PackageManager::Rpm => "rpm",
            PackageManager::Emerge => "emerge",
            PackageManager::Pacman => "pacman",
            PackageManager::Dpkg => "dpkg",
            PackageManager::Xbps => "xbps",
            PackageManager::Flatpak => "flatpak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageCount {
    pub manager: PackageManager,
    pub count: usize,
}

/// Package management information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageInfo {
    pub counts: Vec<PackageCount>,
}

impl PackageInfo {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

impl fmt::Display for PackageInfo {
    /// "557 (pacman), 284 (emerge)"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return f.write_str("0");
        }
        for (i, entry) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", entry.count, entry.manager.name())?;
        }
        Ok(())
    }
}
