//! PCI vendor/device name resolution against the `pci.ids` registry.
//!
//! Lookups never fail outright: anything the registry cannot answer falls
//! back to the 4-digit hex ID so the caller always has something to print.

pub mod hexid;
pub mod locate;
pub mod registry;
pub mod resolve;
pub mod vendor;

pub use registry::{IdRegistry, DEFAULT_PATHS};

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Lower-case, zero-padded 4-digit hex rendering of an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex(pub u16);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

/// Vendor/device pair as reported by device enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HardwareId {
    pub vendor: u16,
    pub device: u16,
}

impl HardwareId {
    pub fn new(vendor: u16, device: u16) -> Self {
        HardwareId { vendor, device }
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Hex(self.vendor), Hex(self.device))
    }
}

/// Human-readable names for a `HardwareId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub vendor: String,
    pub device: String,
}

impl ResolvedName {
    /// Hex placeholders for both names.
    pub fn placeholder(id: HardwareId) -> Self {
        ResolvedName {
            vendor: Hex(id.vendor).to_string(),
            device: Hex(id.device).to_string(),
        }
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vendor, self.device)
    }
}

/// Why a lookup fell back to placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupMiss {
    #[error("no PCI ID registry available")]
    RegistryUnavailable,
    #[error("vendor {0} not in registry")]
    VendorNotFound(Hex),
    #[error("device {device} not listed under {vendor}")]
    DeviceNotFound { vendor: String, device: Hex },
}

impl LookupMiss {
    /// Best names still available after this miss.
    pub fn fallback(&self, id: HardwareId) -> ResolvedName {
        match self {
            LookupMiss::DeviceNotFound { vendor, .. } => ResolvedName {
                vendor: vendor.clone(),
                device: Hex(id.device).to_string(),
            },
            _ => ResolvedName::placeholder(id),
        }
    }
}

/// Resolve `id` in a registry buffer, reporting exactly what was missing.
pub fn try_resolve(buf: &[u8], id: HardwareId) -> Result<ResolvedName, LookupMiss> {
    if buf.is_empty() {
        return Err(LookupMiss::RegistryUnavailable);
    }

    let offset = locate::find_vendor(buf, id.vendor).ok_or(LookupMiss::VendorNotFound(Hex(id.vendor)))?;
    let raw_vendor = String::from_utf8_lossy(resolve::vendor_name(buf, offset));
    if raw_vendor.trim().is_empty() {
        return Err(LookupMiss::VendorNotFound(Hex(id.vendor)));
    }
    let vendor = vendor::normalize(id.vendor, &raw_vendor);

    match resolve::find_device(buf, offset, id.device) {
        Some(raw_device) => {
            let description = String::from_utf8_lossy(raw_device);
            Ok(ResolvedName {
                vendor,
                device: resolve::marketing_name(&description).to_string(),
            })
        }
        None => Err(LookupMiss::DeviceNotFound {
            vendor,
            device: Hex(id.device),
        }),
    }
}

/// Resolve `id`, falling back to hex placeholders for anything unknown.
pub fn lookup(registry: Option<&IdRegistry>, id: HardwareId) -> ResolvedName {
    let buf = registry.map(IdRegistry::as_bytes).unwrap_or(&[]);
    try_resolve(buf, id).unwrap_or_else(|miss| {
        debug!(id = %id, reason = %miss, "PCI name lookup fell back");
        miss.fallback(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "10de  NVIDIA Corporation\n\t2482  GA104 [GeForce RTX 3070 Ti]\n";

    fn resolve_in(registry: &str, vendor: u16, device: u16) -> ResolvedName {
        let registry = IdRegistry::from_bytes(registry);
        lookup(Some(&registry), HardwareId::new(vendor, device))
    }

    #[test]
    fn test_known_device() {
        let name = resolve_in(SCENARIO, 0x10de, 0x2482);
        assert_eq!(name.vendor, "NVIDIA");
        assert_eq!(name.device, "GeForce RTX 3070 Ti");
        assert_eq!(name.to_string(), "NVIDIA GeForce RTX 3070 Ti");
    }

    #[test]
    fn test_unknown_device_keeps_vendor() {
        let name = resolve_in(SCENARIO, 0x10de, 0x9999);
        assert_eq!(name.vendor, "NVIDIA");
        assert_eq!(name.device, "9999");
    }

    #[test]
    fn test_empty_registry() {
        let name = resolve_in("", 0x10de, 0x2482);
        assert_eq!(name, ResolvedName::placeholder(HardwareId::new(0x10de, 0x2482)));
        assert_eq!(name.vendor, "10de");
        assert_eq!(name.device, "2482");
    }

    #[test]
    fn test_no_registry() {
        let name = lookup(None, HardwareId::new(0x00ab, 0x000c));
        assert_eq!(name.vendor, "00ab");
        assert_eq!(name.device, "000c");
    }

    #[test]
    fn test_unknown_vendor() {
        assert_eq!(
            try_resolve(SCENARIO.as_bytes(), HardwareId::new(0x1002, 0x73bf)),
            Err(LookupMiss::VendorNotFound(Hex(0x1002)))
        );
        let name = resolve_in(SCENARIO, 0x1002, 0x73bf);
        assert_eq!((name.vendor.as_str(), name.device.as_str()), ("1002", "73bf"));
    }

    #[test]
    fn test_device_scan_starts_at_target_vendor() {
        // Both vendors list device 2482; only the 10de entry may match.
        let registry = "1002  Advanced Micro Devices, Inc. [AMD/ATI]\n\
\t2482  Wrong Device [Not This One]\n\
\t73bf  Navi 21 [Radeon RX 6800/6800 XT / 6900 XT]\n\
10de  NVIDIA Corporation\n\
\t2482  GA104 [GeForce RTX 3070 Ti]\n";
        let offset = locate::find_vendor(registry.as_bytes(), 0x10de).unwrap();
        assert_eq!(offset, registry.find("10de  ").unwrap());
        // 73bf exists only in the 1002 block, before the located line
        assert_eq!(resolve::find_device(registry.as_bytes(), offset, 0x73bf), None);

        let name = resolve_in(registry, 0x10de, 0x2482);
        assert_eq!(name.device, "GeForce RTX 3070 Ti");
        let amd = resolve_in(registry, 0x1002, 0x73bf);
        assert_eq!(amd.to_string(), "AMD Radeon RX 6800/6800 XT / 6900 XT");
    }

    #[test]
    fn test_empty_vendor_name_is_a_miss() {
        let registry = "1a03  \n\t2000  ASPEED Graphics Family\n";
        assert_eq!(
            try_resolve(registry.as_bytes(), HardwareId::new(0x1a03, 0x2000)),
            Err(LookupMiss::VendorNotFound(Hex(0x1a03)))
        );
        assert_eq!(resolve_in(registry, 0x1a03, 0x2000).to_string(), "1a03 2000");
    }

    #[test]
    fn test_plain_description_without_brackets() {
        let registry = "1a03  ASPEED Technology, Inc.\n\t2000  ASPEED Graphics Family\n";
        let name = resolve_in(registry, 0x1a03, 0x2000);
        assert_eq!(name.to_string(), "ASPEED Technology ASPEED Graphics Family");
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let registry = IdRegistry::from_bytes(SCENARIO);
        let id = HardwareId::new(0x10de, 0x2482);
        let first = lookup(Some(&registry), id);
        let second = lookup(Some(&registry), id);
        assert_eq!(first, second);
        assert_eq!(registry.as_bytes(), SCENARIO.as_bytes());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Hex(0xa).to_string(), "000a");
        assert_eq!(HardwareId::new(0x10de, 0x2482).to_string(), "10de:2482");
        assert_eq!(
            LookupMiss::DeviceNotFound { vendor: "NVIDIA".into(), device: Hex(0x9999) }.to_string(),
            "device 9999 not listed under NVIDIA"
        );
    }
}
