use std::path::{Path, PathBuf};

use log::debug;

use super::{Config, ConfigError, parse_config};

/// Trait for locating and merging configuration files.
pub trait ConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError>;
}

/// Reads `~/.config/lmctl/lmctl.yml` and then `lmctl.yml` (or `lmctl.yaml`)
/// in the working directory, later files overriding earlier ones. A loader
/// built with [`DefaultConfigLoader::explicit`] reads only the given file.
pub struct DefaultConfigLoader {
    global_config_path: Option<PathBuf>,
    explicit_path: Option<PathBuf>,
}

impl Default for DefaultConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultConfigLoader {
    pub fn new() -> Self {
        let global_config_path = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(|h| PathBuf::from(h).join(".config/lmctl/lmctl.yml"));
        Self {
            global_config_path,
            explicit_path: None,
        }
    }

    /// Discover files as usual, with the global file at `path`.
    pub fn with_global_path(path: PathBuf) -> Self {
        Self {
            global_config_path: Some(path),
            explicit_path: None,
        }
    }

    /// Read exactly `path` (the `--config` flag). The file must exist.
    pub fn explicit(path: PathBuf) -> Self {
        Self {
            global_config_path: None,
            explicit_path: Some(path),
        }
    }

    /// Files to read, lowest precedence first.
    fn sources(&self, cwd: &Path) -> Vec<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return vec![path.clone()];
        }
        let local = ["lmctl.yml", "lmctl.yaml"]
            .into_iter()
            .map(|name| cwd.join(name))
            .find(|path| path.exists());
        self.global_config_path
            .iter()
            .filter(|p| p.exists())
            .cloned()
            .chain(local)
            .collect()
    }
}

impl ConfigLoader for DefaultConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        for path in self.sources(cwd) {
            debug!("reading config {}", path.display());
            let yaml = std::fs::read_to_string(&path)?;
            config = config.merge(parse_config(&yaml)?);
        }

        config.validate()?;
        match config.socket() {
            Some(socket) => debug!("service socket: {}", socket.display()),
            None => debug!("no service socket configured; requests will be printed"),
        }
        Ok(config)
    }
}
