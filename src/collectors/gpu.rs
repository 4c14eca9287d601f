//! Display adapter discovery and naming.
//!
//! Enumeration reads sysfs; ranking is a pure function over the enumerated
//! devices; naming goes through the PCI ID registry.

use crate::data::GpuInfo;
use crate::error::{FetchError, Result};
use crate::pci::{self, vendor, HardwareId, IdRegistry};
use crate::utils::file::SysRoot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PCI_DEVICES: &str = "/sys/bus/pci/devices";

/// PCI base class for display controllers (VGA, 3D, other display).
const DISPLAY_CLASS: u32 = 0x03;

/// A display-class PCI function found in sysfs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PciDevice {
    /// Bus address, e.g. "0000:01:00.0"
    pub address: String,
    pub id: HardwareId,
    /// 24-bit class code, e.g. 0x030000
    pub class: u32,
    /// Firmware picked this device for the boot console.
    pub boot_vga: bool,
}

/// Ranking score of a display adapter.
///
/// | vendor                        | score |
/// |-------------------------------|-------|
/// | NVIDIA                        | 30    |
/// | AMD/ATI                       | 20    |
/// | Intel                         | 10    |
/// | any other physical vendor     | 5     |
/// | virtual adapters (VMware, ...)| 0     |
///
/// Discrete vendors outrank integrated ones. The boot VGA device gets one
/// extra point so it wins ties.
pub fn score(device: &PciDevice) -> u32 {
    let base = match device.id.vendor {
        vendor::NVIDIA => 30,
        vendor::AMD_ATI => 20,
        vendor::INTEL => 10,
        v if vendor::is_virtual(v) => 0,
        _ => 5,
    };
    base + u32::from(device.boot_vga)
}

/// Devices ordered best first; equal scores keep enumeration order.
pub fn rank(mut candidates: Vec<PciDevice>) -> Vec<PciDevice> {
    candidates.sort_by_key(|device| std::cmp::Reverse(score(device)));
    candidates
}

/// Highest-scoring device; the earliest one on ties.
pub fn select_best(candidates: &[PciDevice]) -> Option<&PciDevice> {
    candidates
        .iter()
        .enumerate()
        .max_by_key(|(index, device)| (score(device), std::cmp::Reverse(*index)))
        .map(|(_, device)| device)
}

/// Display-class PCI devices under `root`, sorted by bus address.
pub fn enumerate_display_devices(root: &SysRoot) -> Result<Vec<PciDevice>> {
    let mut devices = Vec::new();

    for entry in fs::read_dir(root.path(PCI_DEVICES))?.filter_map(|e| e.ok()) {
        let path = entry.path();
        match read_device(&path) {
            Ok(Some(device)) => devices.push(device),
            Ok(None) => {}
            Err(err) => debug!(path = %path.display(), error = %err, "skipping PCI device"),
        }
    }

    devices.sort_by(|a, b| a.address.cmp(&b.address));
    Ok(devices)
}

/// Read one `/sys/bus/pci/devices/<addr>` entry; `None` if not a display device.
fn read_device(path: &Path) -> Result<Option<PciDevice>> {
    let class = parse_sysfs_hex(&fs::read_to_string(path.join("class"))?)?;
    if class >> 16 != DISPLAY_CLASS {
        return Ok(None);
    }

    let vendor = parse_sysfs_hex(&fs::read_to_string(path.join("vendor"))?)?;
    let device = parse_sysfs_hex(&fs::read_to_string(path.join("device"))?)?;
    let boot_vga = fs::read_to_string(path.join("boot_vga"))
        .map(|v| v.trim() == "1")
        .unwrap_or(false);

    Ok(Some(PciDevice {
        address: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        id: HardwareId::new(
            u16::try_from(vendor).map_err(|_| FetchError::Parse(format!("vendor id {:#x}", vendor)))?,
            u16::try_from(device).map_err(|_| FetchError::Parse(format!("device id {:#x}", device)))?,
        ),
        class,
        boot_vga,
    }))
}

/// "0x10de\n" -> 0x10de
fn parse_sysfs_hex(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|_| FetchError::Parse(format!("Invalid sysfs hex value: {}", trimmed)))
}

/// Enumerate, rank and name every display adapter.
///
/// The registry is only opened once there is something to name, and is
/// unmapped when this function returns.
pub fn collect_gpu_info(root: &SysRoot, registry_paths: &[PathBuf]) -> Result<GpuInfo> {
    let ranked = rank(enumerate_display_devices(root)?);
    if ranked.is_empty() {
        return Err(FetchError::Detection("No display adapter found".to_string()));
    }

    let candidates: Vec<PathBuf> = registry_paths.iter().map(|p| root.path(p)).collect();
    let registry = IdRegistry::open_first(&candidates);
    if registry.is_none() {
        debug!("no PCI ID registry found, GPU names fall back to hex IDs");
    }

    let all: Vec<String> = ranked
        .iter()
        .map(|device| pci::lookup(registry.as_ref(), device.id).to_string())
        .collect();

    Ok(GpuInfo {
        primary: all[0].clone(),
        all,
    })
}
