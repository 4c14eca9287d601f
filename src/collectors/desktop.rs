//! Desktop environment and window manager detection

use super::Environment;
use crate::data::UNKNOWN;
use crate::utils::file::SysRoot;
use std::fs;
use tracing::debug;

/// Process names of window managers and compositors, with display names.
const KNOWN_WMS: &[(&str, &str)] = &[
    ("i3", "i3"),
    ("sway", "Sway"),
    ("bspwm", "bspwm"),
    ("dwm", "dwm"),
    ("awesome", "Awesome"),
    ("Hyprland", "Hyprland"),
    ("hyprland", "Hyprland"),
    ("niri", "niri"),
    ("river", "river"),
    ("openbox", "Openbox"),
    ("xfwm4", "Xfwm4"),
    ("kwin_wayland", "KWin"),
    ("kwin_x11", "KWin"),
    ("mutter", "Mutter"),
    ("gnome-shell", "GNOME"),
    ("weston", "Weston"),
];

/// Detect the current window manager or desktop environment
pub fn detect_wm(root: &SysRoot, env: &Environment) -> String {
    if let Some(wm) = wm_from_env(env) {
        return wm;
    }
    wm_from_processes(root).unwrap_or_else(|| UNKNOWN.to_string())
}

/// `XDG_CURRENT_DESKTOP`, then `DESKTOP_SESSION`.
///
/// `XDG_CURRENT_DESKTOP` may be a colon list ("ubuntu:GNOME"); its last
/// entry names the desktop itself. Values are shown as set.
pub fn wm_from_env(env: &Environment) -> Option<String> {
    env.xdg_current_desktop
        .as_deref()
        .and_then(|value| value.rsplit(':').map(str::trim).find(|s| !s.is_empty()))
        .or_else(|| env.desktop_session.as_deref().map(str::trim))
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Scan `/proc/<pid>/comm` for a known window manager.
pub fn wm_from_processes(root: &SysRoot) -> Option<String> {
    let entries = fs::read_dir(root.path("/proc")).ok()?;

    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        // Skip non-PID directories
        if name.parse::<u32>().is_err() {
            continue;
        }

        let Ok(comm) = fs::read_to_string(entry.path().join("comm")) else {
            continue;
        };
        let comm = comm.trim();
        if let Some((_, display)) = KNOWN_WMS.iter().find(|(process, _)| *process == comm) {
            debug!(pid = name, comm, "found window manager process");
            return Some(display.to_string());
        }
    }
    None
}
