//! A fake machine in a temporary directory.

#![allow(dead_code)]

use nordfetch::utils::file::SysRoot;
use nordfetch::{Environment, ProbeContext};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PCI_IDS: &str = "\
# List of PCI ID's
#
#\tSyntax:
#\tvendor  vendor_name
#\t\tdevice  device_name
#\t\t\tsubvendor subdevice  subsystem_name

0001  SafeNet (wrong ID)
1002  Advanced Micro Devices, Inc. [AMD/ATI]
\t73bf  Navi 21 [Radeon RX 6800/6800 XT / 6900 XT]
\t\t1002 0e3a  Radeon RX 6900 XT
10de  NVIDIA Corporation
\t2482  GA104 [GeForce RTX 3070 Ti]
\t2684  AD102 [GeForce RTX 4090]
15ad  VMware
\t0405  SVGA II Adapter
8086  Intel Corporation
\t4680  AlderLake-S GT1 [UHD Graphics 770]
ffff  Illegal Vendor ID

# List of known device classes
C 03  Display controller
\t00  VGA compatible controller
";

pub struct FakeRoot {
    dir: TempDir,
}

impl FakeRoot {
    pub fn new() -> Self {
        FakeRoot {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self) -> SysRoot {
        SysRoot::new(self.dir.path())
    }

    /// Write `content` at the absolute system path `path`.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.root().path(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
        self
    }

    pub fn dir(&self, path: &str) -> &Self {
        fs::create_dir_all(self.root().path(path)).unwrap();
        self
    }

    pub fn pci_device(&self, address: &str, class: u32, vendor: u16, device: u16, boot_vga: bool) -> &Self {
        let base = format!("/sys/bus/pci/devices/{}", address);
        self.file(&format!("{}/class", base), &format!("0x{:06x}\n", class))
            .file(&format!("{}/vendor", base), &format!("0x{:04x}\n", vendor))
            .file(&format!("{}/device", base), &format!("0x{:04x}\n", device));
        if class >> 16 == 0x03 {
            self.file(&format!("{}/boot_vga", base), if boot_vga { "1\n" } else { "0\n" });
        }
        self
    }

    /// A typical Gentoo desktop.
    pub fn gentoo_desktop() -> Self {
        let fake = FakeRoot::new();
        fake.file(
            "/etc/os-release",
            "NAME=Gentoo\nID=gentoo\nPRETTY_NAME=\"Gentoo Linux\"\nANSI_COLOR=\"1;32\"\n",
        )
        .file("/proc/sys/kernel/osrelease", "6.12.1-gentoo\n")
        .file("/proc/uptime", "93784.12 371020.55\n")
        .file(
            "/proc/meminfo",
            "MemTotal:       16777216 kB\nMemFree:         1048576 kB\nMemAvailable:   12582912 kB\n",
        )
        .file(
            "/proc/cpuinfo",
            "processor\t: 0\nvendor_id\t: AuthenticAMD\nmodel name\t: AMD Ryzen 7 5800X 8-Core Processor\n\nprocessor\t: 1\nmodel name\t: AMD Ryzen 7 5800X 8-Core Processor\n",
        )
        .file("/proc/self/stat", "4242 (nordfetch) R 4241 4242 4100 34816 4242 4194304\n")
        .file("/proc/4241/stat", "4241 (zsh) S 4100 4241 4241 34816 4242 4194304\n")
        .file("/proc/4100/stat", "4100 (kitty) S 1 4100 4100 0 -1 4194560\n")
        .dir("/var/db/pkg/sys-apps/portage-3.0.66")
        .dir("/var/db/pkg/sys-apps/coreutils-9.5")
        .dir("/var/db/pkg/dev-lang/rust-1.82.0")
        .file("/usr/share/hwdata/pci.ids", PCI_IDS)
        .pci_device("0000:00:02.0", 0x030000, 0x8086, 0x4680, true)
        .pci_device("0000:00:1f.3", 0x040300, 0x8086, 0x7ad0, false)
        .pci_device("0000:01:00.0", 0x030000, 0x10de, 0x2482, false);
        fake
    }

    pub fn context(&self, env: Environment) -> ProbeContext {
        ProbeContext::new(self.root(), env)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.base().join("usr/share/hwdata/pci.ids")
    }
}

pub fn desktop_env() -> Environment {
    Environment {
        xdg_current_desktop: Some("Hyprland".to_string()),
        desktop_session: None,
        shell: Some("/bin/zsh".to_string()),
        term: Some("xterm-kitty".to_string()),
    }
}
