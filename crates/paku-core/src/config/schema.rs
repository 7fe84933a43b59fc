//! Config value types and per-dialect field classification.

use std::collections::HashMap;

use serde::Serialize;

/// A single parsed config value: an opaque scalar or a whitespace-split list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Single(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Single(s) => Some(s),
            ConfigValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::Single(_) => None,
            ConfigValue::List(items) => Some(items),
        }
    }

    /// Empty string or empty list. Falsy values are treated the same as
    /// absent keys by [`crate::config::ConfigStore::get`].
    pub fn is_falsy(&self) -> bool {
        match self {
            ConfigValue::Single(s) => s.is_empty(),
            ConfigValue::List(items) => items.is_empty(),
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Single(s) => f.write_str(s),
            ConfigValue::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

/// A fully parsed config file: key to scalar-or-list value.
///
/// A key stored with an empty scalar (`key=` in the source) is distinct from
/// an absent key; only lookups through `get` collapse the two.
pub type ConfigMapping = HashMap<String, ConfigValue>;

/// Static field classification for one config dialect.
///
/// Values of keys in `list_fields` split on whitespace runs into ordered
/// lists; keys in `ignored_fields` are parsed but never stored.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub list_fields: &'static [&'static str],
    pub ignored_fields: &'static [&'static str],
}

impl FieldSchema {
    /// Schema with no list or ignored fields: every value stays a scalar.
    pub const EMPTY: FieldSchema = FieldSchema {
        list_fields: &[],
        ignored_fields: &[],
    };

    pub fn is_list_field(&self, key: &str) -> bool {
        self.list_fields.contains(&key)
    }

    pub fn is_ignored_field(&self, key: &str) -> bool {
        self.ignored_fields.contains(&key)
    }
}

/// pacman.conf field classification.
pub const PACMAN_SCHEMA: FieldSchema = FieldSchema {
    list_fields: &["HoldPkg", "IgnorePkg", "IgnoreGroup", "NoUpgrade", "NoExtract"],
    ignored_fields: &["Include"],
};

/// makepkg.conf field classification.
pub const MAKEPKG_SCHEMA: FieldSchema = FieldSchema {
    list_fields: &["OPTIONS", "BUILDENV"],
    ignored_fields: &[],
};
