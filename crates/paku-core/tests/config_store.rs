use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use paku_core::config::store::ConfigStore;
use paku_core::config::{ConfigValue, FieldSchema, MAKEPKG_SCHEMA, PACMAN_SCHEMA};

fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn single(value: &str) -> ConfigValue {
    ConfigValue::Single(value.to_string())
}

#[test]
fn parse_makepkg_style_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        "makepkg.conf",
        "\
# /etc/makepkg.conf
CARCH=\"x86_64\"
CHOST=\"x86_64-pc-linux-gnu\"
MAKEFLAGS=-j8 ; adjust to taste
OPTIONS=strip docs !libtool  staticlibs
PKGDEST=
   BUILDENV=this-is-indented-and-dropped
",
    );
    let store = ConfigStore::new(MAKEPKG_SCHEMA, path);

    let config = store.get_config(None).unwrap();

    assert_eq!(config.get("CARCH"), Some(&single("x86_64")));
    assert_eq!(config.get("MAKEFLAGS"), Some(&single("-j8")));
    assert_eq!(
        config.get("OPTIONS"),
        Some(&ConfigValue::List(vec![
            "strip".to_string(),
            "docs".to_string(),
            "!libtool".to_string(),
            "staticlibs".to_string(),
        ]))
    );
    // Empty value is stored, not dropped.
    assert_eq!(config.get("PKGDEST"), Some(&single("")));
    assert!(!config.contains_key("BUILDENV"));
}

#[test]
fn ignored_fields_never_stored() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        "pacman.conf",
        "\
Include=/etc/pacman.d/mirrorlist
IgnorePkg=linux linux-headers
DBPath=/var/lib/pacman/
",
    );
    let store = ConfigStore::new(PACMAN_SCHEMA, path);

    let config = store.get_config(None).unwrap();

    assert!(!config.contains_key("Include"));
    assert_eq!(
        config.get("IgnorePkg"),
        Some(&ConfigValue::List(vec![
            "linux".to_string(),
            "linux-headers".to_string(),
        ]))
    );
    assert_eq!(config.get("DBPath"), Some(&single("/var/lib/pacman/")));
}

#[test]
fn second_load_is_served_from_cache() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "makepkg.conf", "PACKAGER=Jane <jane@example.org>\n");
    let store = ConfigStore::new(FieldSchema::EMPTY, path.clone());

    let first = store.get_config(None).unwrap();

    // With the backing file gone, a successful second load proves no read
    // happened.
    fs::remove_file(&path).unwrap();
    let second = store.get_config(None).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        store.get("PACKAGER", None).unwrap(),
        Some(single("Jane <jane@example.org>"))
    );
}

#[test]
fn distinct_paths_cached_independently() {
    let temp = TempDir::new().unwrap();
    let system = write_config(&temp, "system.conf", "PKGDEST=/srv/pkg\n");
    let user = write_config(&temp, "user.conf", "PKGDEST=/home/jane/pkg\n");
    let store = ConfigStore::new(FieldSchema::EMPTY, system.clone());

    assert_eq!(
        store.get("PKGDEST", None).unwrap(),
        Some(single("/srv/pkg"))
    );
    assert_eq!(
        store.get("PKGDEST", Some(&user)).unwrap(),
        Some(single("/home/jane/pkg"))
    );
    // The default-path entry is still intact.
    assert_eq!(
        store.get("PKGDEST", Some(&system)).unwrap(),
        Some(single("/srv/pkg"))
    );
}

#[test]
fn get_falls_back_on_absent_and_on_empty_values() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "makepkg.conf", "blank=\nPKGDEST=/srv/pkg\n");
    let store = ConfigStore::new(FieldSchema::EMPTY, path);

    assert_eq!(store.get("missing", None).unwrap(), None);
    assert_eq!(
        store
            .get_or("missing", single("default"), None)
            .unwrap(),
        single("default")
    );

    // Explicitly set but empty behaves like absent.
    assert_eq!(store.get("blank", None).unwrap(), None);
    assert_eq!(
        store.get_or("blank", single("default"), None).unwrap(),
        single("default")
    );

    assert_eq!(
        store.get_or("PKGDEST", single("default"), None).unwrap(),
        single("/srv/pkg")
    );
}

#[test]
fn read_failure_propagates_and_does_not_poison_cache() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("not-yet-written.conf");
    let store = ConfigStore::new(FieldSchema::EMPTY, path.clone());

    let err = store.get_config(None).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));

    // After the file appears, the same path loads cleanly; the earlier
    // failure left no cache entry behind.
    fs::write(&path, "Color=always\n").unwrap();
    let config = store.get_config(None).unwrap();
    assert_eq!(config.get("Color"), Some(&single("always")));
}
