//! Configuration ingestion for the pacman-ecosystem config dialect.
//!
//! The dialect is section-less `key=value` with shell-style comments,
//! optional scalar quoting, and whitespace-separated list values. Files are
//! parsed whole, cached per source path, and served through typed lookups
//! with fallback defaults.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_config_file, parse_config_str};
pub use paths::{makepkg_conf_path, pacman_conf_path};
pub use schema::{ConfigMapping, ConfigValue, FieldSchema, MAKEPKG_SCHEMA, PACMAN_SCHEMA};
pub use store::ConfigStore;

/// Store over `/etc/pacman.conf` with the pacman field classification.
pub fn pacman_config() -> ConfigStore {
    ConfigStore::new(PACMAN_SCHEMA, paths::pacman_conf_path())
}

/// Store over makepkg.conf with the makepkg field classification,
/// preferring the per-user override file when one exists.
pub fn makepkg_config() -> ConfigStore {
    ConfigStore::new(MAKEPKG_SCHEMA, paths::makepkg_conf_path())
}
