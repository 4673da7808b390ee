//! Saving and loading a property set as a flat JSON object.
//!
//! File problems never fail these calls: they are logged and the properties
//! keep their cached values. Only values that fail to decode or validate on
//! load are returned as errors.

use std::path::Path;

use serde_json::{Map, Value};

use super::PropertySet;
use crate::error::Result;
use crate::host::{ReadContext, WriteContext};

/// What [`PropertySet::save_to`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The file was written.
    Written,
    /// The path is a directory; nothing was written.
    IsDirectory,
    /// Serializing or writing failed; the failure was logged.
    WriteFailed,
}

/// How far [`PropertySet::load_from`] got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// The file was parsed and applied.
    Loaded,
    /// The file is missing or could not be read.
    #[default]
    Unreadable,
    /// The file is not a JSON object.
    Malformed,
}

/// Outcome of a successful [`PropertySet::load_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// Properties whose value was taken from the file.
    pub applied: Vec<String>,
    /// Properties absent from the file; they keep their previous value.
    pub missing: Vec<String>,
    /// Keys in the file that match no property.
    pub unknown: Vec<String>,
}

impl LoadReport {
    fn skipped(status: LoadStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// True if the file was read and every property was found in it.
    pub fn is_complete(&self) -> bool {
        self.status == LoadStatus::Loaded && self.missing.is_empty()
    }
}

impl PropertySet {
    /// Current values by name, in collection order, read through `ctx` when given.
    pub fn snapshot(&mut self, ctx: Option<&dyn ReadContext>) -> Map<String, Value> {
        self.iter_mut()
            .map(|p| (p.name().to_string(), p.to_json(ctx)))
            .collect()
    }

    /// Writes all current values to `path` as pretty-printed JSON, replacing
    /// any existing content.
    ///
    /// With a read context, live rule values take precedence over the cache.
    pub fn save_to(&mut self, path: &Path, ctx: Option<&dyn ReadContext>) -> SaveStatus {
        if path.is_dir() {
            tracing::warn!(path = %path.display(), "Config path is a directory, not saving");
            return SaveStatus::IsDirectory;
        }

        let json = match serde_json::to_string_pretty(&Value::Object(self.snapshot(ctx))) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Config couldn't be serialized");
                return SaveStatus::WriteFailed;
            }
        };

        match std::fs::write(path, json) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), properties = self.len(), "Config saved");
                SaveStatus::Written
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Config file couldn't be written");
                SaveStatus::WriteFailed
            }
        }
    }

    /// Reads `path` and applies every value found in it, in collection order.
    ///
    /// With a write context, applied values are also pushed to their rules.
    /// Missing or unparsable files leave everything untouched. Properties
    /// absent from the file keep their current value. A value that does not
    /// decode or validate stops the load with an error; properties before it
    /// stay updated.
    pub fn load_from(
        &mut self,
        path: &Path,
        mut ctx: Option<&mut dyn WriteContext>,
    ) -> Result<LoadReport> {
        let values = match read_object(path) {
            FileContent::Object(values) => values,
            FileContent::Unreadable => return Ok(LoadReport::skipped(LoadStatus::Unreadable)),
            FileContent::Malformed => return Ok(LoadReport::skipped(LoadStatus::Malformed)),
        };

        let mut report = LoadReport {
            status: LoadStatus::Loaded,
            ..LoadReport::default()
        };

        for property in self.iter_mut() {
            let name = property.name().to_string();
            let Some(value) = values.get(&name) else {
                tracing::warn!(property = %name, "Missing config value, default will be used");
                report.missing.push(name);
                continue;
            };
            let rule_ctx = match ctx.as_mut() {
                Some(ctx) => Some(&mut **ctx as &mut dyn WriteContext),
                None => None,
            };
            property.set_json(value, rule_ctx)?;
            report.applied.push(name);
        }

        let known: Vec<&str> = self.iter().map(|p| p.name()).collect();
        for key in values.keys().filter(|k| !known.contains(&k.as_str())) {
            match find_similar_name(key, &known) {
                Some(similar) => {
                    tracing::debug!(key = %key, suggestion = %similar, "Ignoring unknown config key")
                }
                None => tracing::debug!(key = %key, "Ignoring unknown config key"),
            }
            report.unknown.push(key.clone());
        }

        tracing::info!(
            path = %path.display(),
            applied = report.applied.len(),
            missing = report.missing.len(),
            "Config loaded"
        );
        Ok(report)
    }
}

/// Largest edit distance at which an unknown key is reported as a likely typo.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the property name closest to an unknown `key`, if any is close
/// enough to be a likely typo.
fn find_similar_name<'a>(key: &str, known: &[&'a str]) -> Option<&'a str> {
    known
        .iter()
        .map(|name| (strsim::levenshtein(key, name), *name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

/// Raw content of a config file.
enum FileContent {
    Object(Map<String, Value>),
    Unreadable,
    Malformed,
}

/// Reads a config file as a JSON object, logging why if it can't.
fn read_object(path: &Path) -> FileContent {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "No readable config file found");
        return FileContent::Unreadable;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config file couldn't be read");
            return FileContent::Unreadable;
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(values)) => FileContent::Object(values),
        Ok(other) => {
            tracing::warn!(
                path = %path.display(),
                found = json_type(&other),
                "Config file is not a JSON object"
            );
            FileContent::Malformed
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config file couldn't be parsed");
            FileContent::Malformed
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
