//! Line parser for the section-less key=value config dialect.
//!
//! pacman-ecosystem files (pacman.conf value lines, makepkg.conf) mix
//! shell-style comments, optional scalar quoting, and whitespace-separated
//! list values. Parsing is strictly line-by-line with no cross-line state;
//! a line that does not parse contributes nothing instead of erroring, so
//! free-form comments and unsupported directives pass through silently.

use std::path::Path;

use anyhow::Context;

use super::schema::{ConfigMapping, ConfigValue, FieldSchema};

/// Characters that start a comment. Stripping is quote-blind: a prefix
/// inside a quoted value still truncates the line. Existing config files
/// rely on this exact dialect behavior.
const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Read and parse a whole config file.
pub fn parse_config_file(path: &Path, schema: &FieldSchema) -> anyhow::Result<ConfigMapping> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Ok(parse_config_str(&content, schema))
}

/// Parse config content from a string. Later occurrences of a key overwrite
/// earlier ones.
pub fn parse_config_str(content: &str, schema: &FieldSchema) -> ConfigMapping {
    let mut mapping = ConfigMapping::new();
    for line in content.lines() {
        if let Some((key, value)) = parse_line(line, schema) {
            mapping.insert(key, value);
        }
    }
    mapping
}

/// Parse one line into a key/value pair, or `None` when the line
/// contributes nothing.
fn parse_line(line: &str, schema: &FieldSchema) -> Option<(String, ConfigValue)> {
    // Indented lines are continuation-style noise in this dialect; they are
    // never merged with the previous line.
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    if !line.contains('=') {
        return None;
    }

    let mut line = line.trim();
    if let Some(pos) = line.find(COMMENT_PREFIXES) {
        line = &line[..pos];
    }

    // First '=' splits key from value; later ones stay in the value. When
    // the comment strip swallowed the '=', the whole rest is the key and
    // the value is empty.
    let (key, value) = match line.split_once('=') {
        Some((key, value)) => (key, value),
        None => (line, ""),
    };
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || schema.is_ignored_field(key) {
        return None;
    }

    // `key=` with no value is stored as an empty scalar, distinct from an
    // absent key.
    if value.is_empty() {
        return Some((key.to_string(), ConfigValue::Single(String::new())));
    }

    let value = strip_quotes(value);

    if schema.is_list_field(key) {
        let items = value.split_whitespace().map(str::to_string).collect();
        return Some((key.to_string(), ConfigValue::List(items)));
    }
    Some((key.to_string(), ConfigValue::Single(value.to_string())))
}

/// Strip one surrounding layer of double quotes, then one of single quotes,
/// each only when both ends match.
fn strip_quotes(value: &str) -> &str {
    let value = strip_surrounding(value, '"');
    strip_surrounding(value, '\'')
}

fn strip_surrounding(value: &str, quote: char) -> &str {
    value
        .strip_prefix(quote)
        .and_then(|v| v.strip_suffix(quote))
        .unwrap_or(value)
}
