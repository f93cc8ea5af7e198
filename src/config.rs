use std::path::PathBuf;

use crate::db::{KeyValueStore, StoreError};
use crate::exec::{normalize_base_address, DEFAULT_BASE_ADDRESS};

pub const DB_ENV: &str = "PC_REMOTE_DB";
pub const SERVER_ENV: &str = "PC_REMOTE_SERVER";
pub const DEBUG_ENV: &str = "PC_REMOTE_DEBUG";

/// Settings key the last used server address is remembered under.
pub const SERVER_ADDRESS_KEY: &str = "settings.server_address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Address given on the command line or through the environment.
    pub server_override: Option<String>,
    pub debug: bool,
}

impl Config {
    /// Combines command-line values with the environment; flags win.
    pub fn resolve(db_flag: Option<PathBuf>, server_flag: Option<String>, debug_flag: bool) -> Self {
        let db_path = db_flag
            .or_else(|| std::env::var_os(DB_ENV).map(PathBuf::from))
            .unwrap_or_else(default_db_path);
        let server_override = server_flag.or_else(|| {
            std::env::var(SERVER_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
        });
        let debug = debug_flag || std::env::var(DEBUG_ENV).is_ok();

        Config {
            db_path,
            server_override,
            debug,
        }
    }

    /// Picks the override, then the remembered address, then the default.
    pub fn server_address(&self, settings: &impl KeyValueStore) -> Result<String, StoreError> {
        let address = match &self.server_override {
            Some(address) => address.clone(),
            None => load_server_address(settings)?.unwrap_or_else(|| DEFAULT_BASE_ADDRESS.to_string()),
        };
        Ok(normalize_base_address(&address))
    }
}

pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .map(|mut path| {
            path.push(".pc-remote");
            path.push("profiles.db");
            path
        })
        .unwrap_or_else(|| PathBuf::from("profiles.db"))
}

pub fn load_server_address(settings: &impl KeyValueStore) -> Result<Option<String>, StoreError> {
    settings.get(SERVER_ADDRESS_KEY)
}

/// Normalizes and remembers `address`, returning the stored form.
pub fn save_server_address(settings: &impl KeyValueStore, address: &str) -> Result<String, StoreError> {
    let address = normalize_base_address(address);
    settings.set(SERVER_ADDRESS_KEY, &address)?;
    Ok(address)
}
