//! Filesystem primitives shared across features.

use std::io;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::exec::spawn_interactive;

/// Remove a directory tree, escalating through sudo when plain removal is
/// denied. Build directories may contain root-owned files left behind by
/// chroot builds.
pub fn remove_dir(dir_path: &Path) -> anyhow::Result<()> {
    match std::fs::remove_dir_all(dir_path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            debug!(path = %dir_path.display(), "plain removal denied, retrying with sudo");
            let cmd = vec![
                "sudo".to_string(),
                "rm".to_string(),
                "-rf".to_string(),
                dir_path.to_string_lossy().into_owned(),
            ];
            let status = spawn_interactive(&cmd)?;
            if !status.success() {
                anyhow::bail!("Failed to remove directory: {}", dir_path.display());
            }
            Ok(())
        }
        Err(err) => Err(err)
            .with_context(|| format!("Failed to remove directory: {}", dir_path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_dir_removes_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("build");
        std::fs::create_dir_all(target.join("pkg/usr/bin")).unwrap();
        std::fs::write(target.join("PKGBUILD"), "pkgname=demo\n").unwrap();

        remove_dir(&target).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_remove_missing_dir_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = remove_dir(&temp.path().join("absent")).unwrap_err();
        assert!(err.to_string().contains("Failed to remove directory"));
    }
}
