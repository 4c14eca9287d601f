//! System information collection (OS, kernel, uptime, shell, terminal)

use super::Environment;
use crate::data::{OsInfo, UptimeInfo, UNKNOWN};
use crate::distro::{Distro, BEDROCK_RELEASE, OS_RELEASE};
use crate::error::{FetchError, Result};
use crate::utils::file::SysRoot;
use crate::utils::parsing::{format_uptime, parse_key_values};
use tracing::trace;

const BEDROCK_OS_RELEASE: &str = "/bedrock/etc/os-release";

/// Shells, privilege wrappers and ourselves: processes between us and the
/// terminal emulator that should be skipped when looking for it.
const PASSTHROUGH_PROCESSES: &[&str] = &[
    "sh", "bash", "zsh", "fish", "dash", "ksh", "mksh", "tcsh", "csh", "nu", "nushell", "elvish",
    "xonsh", "login", "sudo", "doas", "su", "env", "nordfetch",
];

/// Collect OS name and version
pub fn collect_os_info(root: &SysRoot, distro: Distro) -> Result<OsInfo> {
    match distro {
        Distro::Bedrock => Ok(OsInfo {
            name: "Bedrock Linux".to_string(),
            version: read_bedrock_version(root),
        }),
        _ => read_os_name(root),
    }
}

/// Bedrock version from its release files, most specific first.
fn read_bedrock_version(root: &SysRoot) -> Option<String> {
    for path in [BEDROCK_RELEASE, BEDROCK_OS_RELEASE] {
        if let Ok(content) = root.read_to_string(path) {
            if let Some(version) = parse_key_values(&content).remove("VERSION") {
                return Some(version);
            }
        }
    }

    // bedrock-release is usually just "Bedrock Linux 0.7.31beta2 Poki"
    let line = root.read_first_line(BEDROCK_RELEASE).ok()?;
    let version = line.strip_prefix("Bedrock Linux").unwrap_or(&line).trim();
    (!version.is_empty()).then(|| version.to_string())
}

fn read_os_name(root: &SysRoot) -> Result<OsInfo> {
    let fields = parse_key_values(&root.read_to_string(OS_RELEASE)?);
    fields
        .get("PRETTY_NAME")
        .or_else(|| fields.get("NAME"))
        .filter(|name| !name.is_empty())
        .map(|name| OsInfo {
            name: name.clone(),
            version: None,
        })
        .ok_or_else(|| FetchError::Detection("OS name not found".to_string()))
}

/// Kernel release, e.g. "6.16.4-200.fc42.x86_64"
pub fn read_kernel_version(root: &SysRoot) -> Result<String> {
    // osrelease is a single line, so use optimized read
    if let Ok(release) = root.read_first_line("/proc/sys/kernel/osrelease") {
        if !release.is_empty() {
            return Ok(release);
        }
    }

    let version_info = root.read_first_line("/proc/version")?;
    version_info
        .split_whitespace()
        .nth(2)
        .map(|v| v.to_string())
        .ok_or_else(|| FetchError::Detection("Kernel version not found".to_string()))
}

pub fn read_uptime(root: &SysRoot) -> Result<UptimeInfo> {
    // /proc/uptime is a single line
    let uptime_str = root.read_first_line("/proc/uptime")?;
    let secs: f64 = uptime_str
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FetchError::Parse(format!("Invalid uptime: {}", uptime_str)))?;
    let seconds = secs as u64;

    Ok(UptimeInfo {
        seconds,
        formatted: format_uptime(seconds),
    })
}

/// Basename of `$SHELL`
pub fn get_shell(env: &Environment) -> String {
    env.shell
        .as_deref()
        .and_then(|shell| shell.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Terminal emulator hosting this process.
///
/// Walks up from our parent, skipping shells and wrappers; the first other
/// process is taken to be the terminal. Falls back to `$TERM`.
pub fn detect_terminal(root: &SysRoot, env: &Environment) -> String {
    let mut pid = root
        .read_to_string("/proc/self/stat")
        .ok()
        .and_then(|stat| parse_stat(&stat).map(|(_, ppid)| ppid));

    // Walk up the process tree (max 10 levels to avoid loops)
    for _ in 0..10 {
        let current = match pid {
            Some(p) if p > 1 => p,
            _ => break,
        };
        let stat = match root.read_to_string(format!("/proc/{}/stat", current)) {
            Ok(stat) => stat,
            Err(_) => break,
        };
        let Some((comm, ppid)) = parse_stat(&stat) else {
            break;
        };

        trace!(pid = current, comm, "inspecting ancestor process");
        if !PASSTHROUGH_PROCESSES.contains(&comm) {
            return comm.to_string();
        }
        pid = Some(ppid);
    }

    env.term.clone().unwrap_or_else(|| UNKNOWN.to_string())
}

/// `(comm, ppid)` from the contents of `/proc/<pid>/stat`.
///
/// `comm` is parenthesised and may itself contain spaces or parentheses, so
/// the fields after it are located from the last `)`.
pub fn parse_stat(stat: &str) -> Option<(&str, u32)> {
    let open = stat.find('(')?;
    let close = stat.rfind(')')?;
    let comm = stat.get(open + 1..close)?;
    let ppid = stat[close + 1..].split_whitespace().nth(1)?.parse().ok()?;
    Some((comm, ppid))
}
