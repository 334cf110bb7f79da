//! Configuration options

use crate::{geometry::Padding, utils::deserialize_shellexpand};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use directories::{BaseDirs, ProjectDirs};
use format_serde_error::SerdeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Configuration file name
const CONFIG_FILE: &str = "lwm-randr.yml";

// =============== GlobalSettings ================= [[[

/// Global configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Whether the log is also written to a file
    #[serde(alias = "log-to-file")]
    pub log_to_file: bool,

    /// The directory to write the log to
    #[serde(alias = "log-dir", deserialize_with = "deserialize_shellexpand")]
    pub log_dir: Option<PathBuf>,

    /// Space reserved inside of every screen
    pub padding: Padding,

    /// Print the screens each time the layout changes
    #[serde(alias = "print-on-change")]
    pub print_on_change: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            log_to_file:     false,
            log_dir:         None,
            padding:         Padding::new(0, 0, 0, 0),
            print_on_change: true,
        }
    }
}

// ]]] === GlobalSettings ===

// =================== Config ===================== [[[

/// Configuration file to parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(flatten)]
    pub global: GlobalSettings,
}

impl Config {
    /// Create the default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("Creating configuration path: {}", path.display());
            fs::create_dir_all(path).context("unable to create configuration directory")?;
        }

        let path = path.join(CONFIG_FILE);
        log::debug!("{}: {}", "Configuration path".bright_blue(), path.display());

        if !path.is_file() {
            let initialization = include_str!("../contrib/lwm-randr.yml");

            let mut config_file: fs::File = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .open(&path)
                .with_context(|| {
                    format!("could not create lwm-randr config: '{}'", path.display())
                })?;

            config_file
                .write_all(initialization.as_bytes())
                .with_context(|| {
                    format!("could not create lwm-randr config: '{}'", path.display())
                })?;
            config_file.flush()?;
        }

        Self::load(path)
    }

    /// Load the configuration file from a given path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::read_to_string(path.as_ref()).context("failed to read config file")?;
        Self::parse(file)
    }

    /// Parse the contents of a configuration file
    fn parse(file: String) -> Result<Self> {
        let res = serde_yaml::from_str(&file).map_err(|e| SerdeError::new(file, e))?;
        Ok(res)
    }

    /// Load the default configuration file
    pub fn load_default() -> Result<Self> {
        let dirs = PROJECT_DIRS
            .as_ref()
            .ok_or_else(|| anyhow!("could not detect user home directory"))?;
        let path = dirs.config_dir();
        log::debug!("loading default config: {}", path.display());
        Self::create_default(path)
    }
} // ]]] === Config ===

// ================ Project Dirs ================== [[[

/// The project directories of the user, `None` without a home directory
pub static PROJECT_DIRS: Lazy<Option<LwmDirs>> = Lazy::new(LwmDirs::new);

/// Get the project directories relevant to `lwm-randr`
#[derive(Debug, Clone)]
pub struct LwmDirs {
    /// User's `$XDG_CONFIG_HOME/lwm-randr` directory
    config_dir: PathBuf,
}

impl LwmDirs {
    /// Create a new [`LwmDirs`]
    fn new() -> Option<Self> {
        Some(Self {
            config_dir: Self::get_config_dir()?,
        })
    }

    /// Wrapper function that makes it easier to get directories
    fn get_dir(env_var: &str, var: &str, join: &str) -> Option<PathBuf> {
        env::var_os(env_var).map(PathBuf::from).map_or_else(
            || {
                env::var_os(var)
                    .map(PathBuf::from)
                    .filter(|p| p.is_absolute())
                    .or_else(|| BaseDirs::new().map(|p| p.home_dir().join(join)))
                    .map(|p| p.join(env!("CARGO_PKG_NAME")))
            },
            |v| {
                // Custom env var is set
                if v.is_absolute() {
                    Some(v)
                } else {
                    BaseDirs::new()
                        .map(|p| p.home_dir().join(join))
                        .map(|p| p.join(env!("CARGO_PKG_NAME")))
                }
            },
        )
    }

    /// Get the `config` directory
    fn get_config_dir() -> Option<PathBuf> {
        Self::get_dir("LWM_RANDR_CONFIG_DIR", "XDG_CONFIG_HOME", ".config").or_else(|| {
            ProjectDirs::from("com", "lmburns", env!("CARGO_PKG_NAME"))
                .map(|p| p.config_dir().to_path_buf())
        })
    }

    /// Get configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

// ]]] === Project Dirs ===
