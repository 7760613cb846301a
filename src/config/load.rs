use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `RECOUNT__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("RECOUNT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.logging.filter.trim().is_empty() {
            return Err("logging.filter must not be empty".to_string());
        }

        let paths = [
            ("library.catalog_path", &self.library.catalog_path),
            ("store.dismissals_path", &self.store.dismissals_path),
            ("queue.queue_path", &self.queue.queue_path),
        ];
        for (name, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(format!("{name} must not be empty"));
            }
        }
        Ok(())
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.library
            .catalog_path
            .clone()
            .unwrap_or_else(|| data_file("catalog.json"))
    }

    pub fn dismissals_path(&self) -> PathBuf {
        self.store
            .dismissals_path
            .clone()
            .unwrap_or_else(|| data_file("dismissed.json"))
    }

    pub fn queue_path(&self) -> PathBuf {
        self.queue
            .queue_path
            .clone()
            .unwrap_or_else(|| data_file("queue.txt"))
    }
}

/// Resolve the config path from `RECOUNT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("RECOUNT_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/recount/config.toml`
/// or `~/.config/recount/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("recount").join("config.toml"))
}

/// Compute the data directory `$XDG_DATA_HOME/recount` or
/// `~/.local/share/recount`, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("recount")
    } else if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share").join("recount")
    } else {
        PathBuf::from(".")
    }
}

fn data_file(name: &str) -> PathBuf {
    default_data_dir().join(name)
}
