//! Package management information collection

use crate::data::{PackageCount, PackageInfo, PackageManager};
use crate::distro::Distro;
use crate::error::Result;
use crate::utils::command::{command_exists, run_command};
use crate::utils::file::{count_subdirs, SysRoot};
use std::collections::BTreeMap;
use std::fs;
use tracing::{debug, trace};

const BEDROCK_STRATA: &str = "/bedrock/strata";

const ALL_MANAGERS: &[PackageManager] = &[
    PackageManager::Nix,
    PackageManager::Rpm,
    PackageManager::Emerge,
    PackageManager::Pacman,
    PackageManager::Dpkg,
    PackageManager::Xbps,
    PackageManager::Flatpak,
];

/// Count installed packages for every package manager found.
///
/// On Bedrock every stratum is its own root with its own package database;
/// counts for the same manager across strata are summed.
pub fn collect_package_info(root: &SysRoot, distro: Distro) -> PackageInfo {
    let roots = match distro {
        Distro::Bedrock => bedrock_strata(root).unwrap_or_else(|err| {
            debug!(error = %err, "could not list Bedrock strata");
            vec![root.clone()]
        }),
        _ => vec![root.clone()],
    };

    let mut totals: BTreeMap<PackageManager, usize> = BTreeMap::new();
    for stratum in &roots {
        for found in count_in_root(stratum, root.is_system()) {
            *totals.entry(found.manager).or_default() += found.count;
        }
    }

    PackageInfo {
        counts: totals
            .into_iter()
            .map(|(manager, count)| PackageCount { manager, count })
            .collect(),
    }
}

/// Roots of all strata, sorted by name. Alias symlinks are skipped so no
/// stratum is counted twice.
fn bedrock_strata(root: &SysRoot) -> Result<Vec<SysRoot>> {
    let mut names: Vec<String> = fs::read_dir(root.path(BEDROCK_STRATA))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_dir()))
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();

    Ok(names
        .iter()
        .map(|name| root.nested(format!("{}/{}", BEDROCK_STRATA, name)))
        .collect())
}

/// Non-zero counts for every manager with a database under `root`.
///
/// `live` allows falling back to the package manager's own tools, which only
/// describe the real system.
pub fn count_in_root(root: &SysRoot, live: bool) -> Vec<PackageCount> {
    ALL_MANAGERS
        .iter()
        .filter_map(|&manager| match count_packages(root, manager, live) {
            Ok(0) => None,
            Ok(count) => Some(PackageCount { manager, count }),
            Err(err) => {
                trace!(root = %root.base().display(), manager = manager.name(), error = %err, "no packages counted");
                None
            }
        })
        .collect()
}

pub fn count_packages(root: &SysRoot, manager: PackageManager, live: bool) -> Result<usize> {
    match manager {
        PackageManager::Nix => get_nix_package_count(root, live),
        PackageManager::Rpm => get_rpm_package_count(root, live),
        PackageManager::Emerge => get_portage_package_count(root),
        PackageManager::Pacman => count_subdirs(root.path("/var/lib/pacman/local")),
        PackageManager::Dpkg => get_dpkg_package_count(root),
        PackageManager::Xbps => get_xbps_package_count(root),
        PackageManager::Flatpak => count_subdirs(root.path("/var/lib/flatpak/app")),
    }
}

fn get_portage_package_count(root: &SysRoot) -> Result<usize> {
    // /var/db/pkg/<category>/<package-version>
    let mut count = 0;
    for entry in fs::read_dir(root.path("/var/db/pkg"))?.filter_map(|e| e.ok()) {
        if entry.file_type().map_or(false, |ft| ft.is_dir()) {
            count += count_subdirs(entry.path()).unwrap_or(0);
        }
    }
    Ok(count)
}

fn get_dpkg_package_count(root: &SysRoot) -> Result<usize> {
    let status = root.read_to_string("/var/lib/dpkg/status")?;
    Ok(status
        .lines()
        .filter(|line| line.trim_end() == "Status: install ok installed")
        .count())
}

fn get_xbps_package_count(root: &SysRoot) -> Result<usize> {
    // Installed packages are keys of the pkgdb plist, each carrying a pkgver
    let mut count = 0;
    for entry in fs::read_dir(root.path("/var/db/xbps"))?.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("pkgdb-") && name.ends_with(".plist") {
            let content = fs::read_to_string(entry.path())?;
            count += content.matches("<key>pkgver</key>").count();
        }
    }
    Ok(count)
}

fn get_rpm_package_count(root: &SysRoot, live: bool) -> Result<usize> {
    let has_db = root.exists("/var/lib/rpm") || root.exists("/usr/lib/sysimage/rpm");
    if !live || !has_db || !command_exists("rpm") {
        return Ok(0);
    }
    let root_arg = root.base().to_string_lossy();
    let output = run_command("rpm", &["--root", &root_arg, "-qa"])?;
    Ok(output.lines().filter(|line| !line.is_empty()).count())
}

fn get_nix_package_count(root: &SysRoot, live: bool) -> Result<usize> {
    // Profile manifests list one element per installed package
    let manifest = root.path("/nix/var/nix/profiles/default/manifest.json");
    if manifest.exists() {
        let content = fs::read_to_string(manifest)?;
        return Ok(content.matches("\"storePaths\"").count());
    }

    if live && root.exists("/run/current-system/sw") && command_exists("nix-store") {
        let sw = root.path("/run/current-system/sw");
        let output = run_command("nix-store", &["--query", "--requisites", &sw.to_string_lossy()])?;
        return Ok(output.lines().count());
    }
    Ok(0)
}
