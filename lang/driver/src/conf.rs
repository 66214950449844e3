use sculptor::{AppAuthor, FileIO, ProjectInfo, impl_serde_str_toml};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// print `value : type` instead of just `value`
    pub show_type: bool,
    /// wall-clock budget for a single run on the worker
    pub timeout_ms: Option<u64>,
    /// worker stack size in MiB
    pub stack_size_mb: usize,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { show_type: true, timeout_ms: None, stack_size_mb: 256 }
    }
}

impl_serde_str_toml!(Conf);

impl AppAuthor for Conf {
    fn app_name() -> &'static str {
        "Tylam"
    }

    fn author() -> &'static str {
        "Tylam"
    }
}

impl Conf {
    pub fn path() -> PathBuf {
        Conf::config_dir().join("tylam.toml")
    }
    /// Load the user configuration, writing out the defaults if there is
    /// none yet.
    pub fn load() -> Conf {
        Conf::load_from(&Conf::path())
    }
    /// Load the configuration at `path`. A missing file is created with the
    /// defaults; an unreadable one is reported and left as it is.
    pub fn load_from(path: &Path) -> Conf {
        let file_conf: FileIO<Conf> = FileIO::new(path.to_path_buf());
        if !path.exists() {
            log::warn!("Using default configuration; suppose to find one at `{}`.", path.display());
            let conf = Conf::default();
            if let Err(err) = file_conf.save(&conf) {
                log::warn!("Failed to write `{}`: {}", path.display(), err);
            }
            return conf;
        }
        file_conf.load().unwrap_or_else(|err| {
            log::warn!("Ignoring `{}` and using defaults: {}", path.display(), err);
            Conf::default()
        })
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
    pub fn stack_size(&self) -> usize {
        self.stack_size_mb.saturating_mul(1024 * 1024)
    }
}
