//! Short display names for PCI vendors.

pub const NVIDIA: u16 = 0x10de;
pub const AMD_ATI: u16 = 0x1002;
pub const AMD: u16 = 0x1022;
pub const INTEL: u16 = 0x8086;
pub const APPLE: u16 = 0x106b;
pub const VMWARE: u16 = 0x15ad;
pub const VIRTUALBOX: u16 = 0x80ee;
pub const MICROSOFT: u16 = 0x1414;
pub const QEMU: u16 = 0x1234;
pub const VIRTIO: u16 = 0x1af4;
pub const REDHAT: u16 = 0x1b36;

const CORPORATE_SUFFIXES: &[&str] = &[" Corporation", " Corp.", ", Inc.", " Inc."];

/// Fixed name for vendors whose registry entries are verbose.
pub fn short_name(vendor: u16) -> Option<&'static str> {
    match vendor {
        NVIDIA => Some("NVIDIA"),
        AMD_ATI | AMD => Some("AMD"),
        INTEL => Some("Intel"),
        APPLE => Some("Apple"),
        VMWARE => Some("VMware"),
        VIRTUALBOX => Some("VirtualBox"),
        MICROSOFT => Some("Microsoft"),
        _ => None,
    }
}

/// Display name for a vendor the registry resolved to `registry_name`.
pub fn normalize(vendor: u16, registry_name: &str) -> String {
    if let Some(short) = short_name(vendor) {
        return short.to_string();
    }

    let mut name = registry_name.trim();
    for suffix in CORPORATE_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.trim_end();
        }
    }
    name.to_string()
}

/// Hypervisor-provided display adapters.
pub fn is_virtual(vendor: u16) -> bool {
    matches!(vendor, VMWARE | VIRTUALBOX | MICROSOFT | QEMU | VIRTIO | REDHAT)
}
