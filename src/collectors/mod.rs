//! Probes that read facts about the running system.
//!
//! Every probe reads through a [`SysRoot`] and an [`Environment`] snapshot
//! instead of touching `/` and `std::env` directly, so a whole machine can be
//! faked in a temporary directory.

pub mod desktop;
pub mod gpu;
pub mod hardware;
pub mod packages;
pub mod system;

use crate::pci::DEFAULT_PATHS;
use crate::utils::file::SysRoot;
use std::env;
use std::path::PathBuf;

/// The environment variables probes consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub xdg_current_desktop: Option<String>,
    pub desktop_session: Option<String>,
    pub shell: Option<String>,
    pub term: Option<String>,
}

impl Environment {
    /// Snapshot of the current process environment. Empty values count as unset.
    pub fn from_process() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Environment {
            xdg_current_desktop: var("XDG_CURRENT_DESKTOP"),
            desktop_session: var("DESKTOP_SESSION"),
            shell: var("SHELL"),
            term: var("TERM"),
        }
    }
}

/// Everything a full collection run needs.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    pub root: SysRoot,
    pub env: Environment,
    /// Candidate `pci.ids` locations, as absolute paths below `root`.
    pub registry_paths: Vec<PathBuf>,
}

impl ProbeContext {
    pub fn new(root: SysRoot, env: Environment) -> Self {
        ProbeContext {
            root,
            env,
            registry_paths: DEFAULT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Probe the live system.
    pub fn system() -> Self {
        ProbeContext::new(SysRoot::system(), Environment::from_process())
    }
}
