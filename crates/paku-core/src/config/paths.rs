//! Default config path resolution.

use std::path::PathBuf;

/// System pacman.conf location.
pub fn pacman_conf_path() -> PathBuf {
    PathBuf::from("/etc/pacman.conf")
}

/// makepkg.conf location.
///
/// Per-user overrides win over the system file, checked in makepkg's own
/// order: `$XDG_CONFIG_HOME/pacman/makepkg.conf`, then `~/.makepkg.conf`.
pub fn makepkg_conf_path() -> PathBuf {
    if let Some(user_conf) = dirs::config_dir().map(|dir| dir.join("pacman").join("makepkg.conf"))
        && user_conf.exists()
    {
        return user_conf;
    }
    if let Some(home_conf) = dirs::home_dir().map(|dir| dir.join(".makepkg.conf"))
        && home_conf.exists()
    {
        return home_conf;
    }
    PathBuf::from("/etc/makepkg.conf")
}
