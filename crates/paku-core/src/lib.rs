//! Paku Core Library
//!
//! Domain logic for a pacman/AUR helper: ingestion of the pacman-ecosystem
//! config dialect with per-path caching, shared record types, and the
//! process and filesystem primitives the front-end builds on.

pub mod config;
pub mod exec;
pub mod fs;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{
        ConfigMapping, ConfigStore, ConfigValue, FieldSchema, makepkg_config, pacman_config,
    };

    // Process helpers
    pub use crate::exec::{isolate_root_cmd, running_as_root, spawn_interactive};

    // Filesystem
    pub use crate::fs::remove_dir;

    // Records
    pub use crate::types::{InstallInfo, PackageSource};
}
