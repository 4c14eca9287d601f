//! nordfetch library
//!
//! A small system information fetch tool for Linux, with per-distribution
//! banners and PCI ID registry lookups for GPU names.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod distro;
pub mod error;
pub mod logging;
pub mod pci;
pub mod utils;

pub use collectors::{Environment, ProbeContext};
pub use data::SystemInfo;
pub use distro::Distro;
pub use error::{FetchError, Result};

use collectors::{desktop, gpu, hardware, packages, system};
use data::{GpuInfo, MemoryInfo, OsInfo, UptimeInfo, UNKNOWN};
use tracing::debug;

/// Collect all system information.
///
/// Never fails: a probe that errors is logged and shown as "Unknown".
pub fn collect_system_info(ctx: &ProbeContext) -> SystemInfo {
    let root = &ctx.root;
    let distro = Distro::detect(root);

    SystemInfo {
        distro,
        os: or_unknown("os", system::collect_os_info(root, distro), || OsInfo {
            name: UNKNOWN.to_string(),
            version: None,
        }),
        kernel: or_unknown("kernel", system::read_kernel_version(root), || UNKNOWN.to_string()),
        uptime: or_unknown("uptime", system::read_uptime(root), || UptimeInfo {
            seconds: 0,
            formatted: UNKNOWN.to_string(),
        }),
        memory: or_unknown("memory", hardware::read_memory_info(root), || MemoryInfo {
            used_kib: 0,
            total_kib: 0,
            formatted: UNKNOWN.to_string(),
        }),
        wm: desktop::detect_wm(root, &ctx.env),
        terminal: system::detect_terminal(root, &ctx.env),
        shell: system::get_shell(&ctx.env),
        cpu: or_unknown("cpu", hardware::read_cpu_info(root), || UNKNOWN.to_string()),
        gpu: or_unknown("gpu", gpu::collect_gpu_info(root, &ctx.registry_paths), GpuInfo::unknown),
        packages: packages::collect_package_info(root, distro),
    }
}

fn or_unknown<T>(probe: &str, result: Result<T>, fallback: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|err| {
        debug!(probe, error = %err, "probe failed");
        fallback()
    })
}
