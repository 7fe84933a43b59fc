//! Config store with per-path lazy caching.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::parser;
use super::schema::{ConfigMapping, ConfigValue, FieldSchema};

/// Lazily parsed, per-path-cached view over one config dialect.
///
/// Each distinct path is read and parsed at most once for the lifetime of
/// the store; the source file is assumed immutable while the process runs.
#[derive(Debug)]
pub struct ConfigStore {
    schema: FieldSchema,
    default_path: PathBuf,
    cache: Mutex<HashMap<PathBuf, Arc<ConfigMapping>>>,
}

impl ConfigStore {
    pub fn new(schema: FieldSchema, default_path: PathBuf) -> Self {
        Self {
            schema,
            default_path,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Load the mapping for `path`, or for the default path when `None`.
    ///
    /// The first call per path reads and parses the file; later calls are
    /// served from the cache. Read failures propagate unchanged and leave
    /// the cache untouched. The cache lock is held across the whole
    /// read-parse-insert sequence, so concurrent first loads of one path
    /// parse only once.
    pub fn get_config(&self, path: Option<&Path>) -> anyhow::Result<Arc<ConfigMapping>> {
        let path = path.unwrap_or(&self.default_path);
        let mut cache = self.cache.lock().expect("config cache lock poisoned");
        if let Some(mapping) = cache.get(path) {
            debug!(path = %path.display(), "config cache hit");
            return Ok(Arc::clone(mapping));
        }
        let mapping = Arc::new(parser::parse_config_file(path, &self.schema)?);
        debug!(path = %path.display(), keys = mapping.len(), "parsed config file");
        cache.insert(path.to_path_buf(), Arc::clone(&mapping));
        Ok(mapping)
    }

    /// Look up `key`, treating a stored-but-empty value the same as an
    /// absent key.
    ///
    /// Collapsing `key=` (empty value) into `None` mirrors the established
    /// behavior of this dialect's consumers; callers that need to tell the
    /// two apart should go through [`ConfigStore::get_config`].
    pub fn get(&self, key: &str, path: Option<&Path>) -> anyhow::Result<Option<ConfigValue>> {
        let config = self.get_config(path)?;
        Ok(config.get(key).filter(|value| !value.is_falsy()).cloned())
    }

    /// [`ConfigStore::get`] with an explicit fallback value.
    pub fn get_or(
        &self,
        key: &str,
        fallback: ConfigValue,
        path: Option<&Path>,
    ) -> anyhow::Result<ConfigValue> {
        Ok(self.get(key, path)?.unwrap_or(fallback))
    }
}
