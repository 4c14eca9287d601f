//! Distribution detection, which picks the banner theme.

use crate::utils::file::SysRoot;
use crate::utils::parsing::parse_key_values;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

pub const BEDROCK_RELEASE: &str = "/bedrock/etc/bedrock-release";
pub const OS_RELEASE: &str = "/etc/os-release";

/// Distributions with their own banner; everything else is `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Bedrock,
    Gentoo,
    #[serde(rename = "cachyos")]
    CachyOs,
    Generic,
}

impl Distro {
    /// Detect the running distribution below `root`.
    ///
    /// Bedrock is recognised by its own release file since `/etc/os-release`
    /// on a Bedrock system belongs to whichever stratum provides it.
    pub fn detect(root: &SysRoot) -> Distro {
        if root.exists(BEDROCK_RELEASE) {
            return Distro::Bedrock;
        }

        let distro = root
            .read_to_string(OS_RELEASE)
            .map(|content| Distro::from_os_release(&content))
            .unwrap_or(Distro::Generic);
        debug!(?distro, "detected distribution");
        distro
    }

    /// Match `ID`, then each entry of `ID_LIKE`.
    pub fn from_os_release(content: &str) -> Distro {
        let fields = parse_key_values(content);
        let id = fields.get("ID").map(String::as_str).unwrap_or("");
        let like = fields.get("ID_LIKE").map(String::as_str).unwrap_or("");

        std::iter::once(id)
            .chain(like.split_whitespace())
            .find_map(Distro::from_id)
            .unwrap_or(Distro::Generic)
    }

    fn from_id(id: &str) -> Option<Distro> {
        match id.to_ascii_lowercase().as_str() {
            "bedrock" => Some(Distro::Bedrock),
            "gentoo" => Some(Distro::Gentoo),
            "cachyos" => Some(Distro::CachyOs),
            _ => None,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Distro::Bedrock => "Bedrock Linux",
            Distro::Gentoo => "Gentoo",
            Distro::CachyOs => "CachyOS",
            Distro::Generic => "Linux",
        })
    }
}
