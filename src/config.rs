use crate::display::Field;
use crate::distro::Distro;
use crate::error::Result;
use crate::pci::DEFAULT_PATHS;
use dirs::config_dir;
use serde::de::{value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer};
use std::{collections::HashMap, fs, path::Path, path::PathBuf};
use tracing::debug;

pub const SYSTEM_CONFIG: &str = "/usr/share/nordfetch/config.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Label color overrides: field name -> color name or `#rrggbb`
    pub colors: HashMap<String, String>,
    pub pci: PciConfig,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct DisplayConfig {
    /// Force a banner; detected from the system when unset or `"auto"`
    #[serde(deserialize_with = "theme_or_auto")]
    pub theme: Option<Distro>,
    pub items: Vec<Field>,
    pub separator: String,
    pub ascii_path: Option<String>,
    pub show_all_gpus: bool,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            theme: None,
            items: Field::DEFAULT_ORDER.to_vec(),
            separator: ": ".to_string(),
            ascii_path: None,
            show_all_gpus: false,
            color: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PciConfig {
    /// `pci.ids` locations to try, in order; built-in list when empty
    pub ids_paths: Vec<String>,
}

impl Config {
    pub fn parse(data: &str) -> Result<Config> {
        Ok(toml::de::from_str(data)?)
    }

    /// Registry candidates with `~` expanded.
    pub fn registry_paths(&self) -> Vec<PathBuf> {
        if self.pci.ids_paths.is_empty() {
            return DEFAULT_PATHS.iter().map(PathBuf::from).collect();
        }
        self.pci.ids_paths.iter().map(|p| expand(p)).collect()
    }

    /// Custom banner file with `~` expanded, if configured.
    pub fn ascii_path(&self) -> Option<PathBuf> {
        self.display
            .ascii_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(expand)
    }
}

fn theme_or_auto<'de, D>(deserializer: D) -> std::result::Result<Option<Distro>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let name: StrDeserializer<'_, D::Error> = name.trim().into_deserializer();
    Distro::deserialize(name).map(Some)
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// User config first, then the system-wide default.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = config_dir() {
        candidates.push(dir.join("nordfetch/config.toml"));
    }
    candidates.push(PathBuf::from(SYSTEM_CONFIG));
    candidates
}

/// Load `explicit` if given, otherwise the first existing candidate.
///
/// No config file at all is not an error: built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_candidates().into_iter().find(|p| p.exists()) {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading config");
    let config_data = fs::read_to_string(&path)?;
    Config::parse(&config_data)
}
