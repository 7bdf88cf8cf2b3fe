//! URL pattern extraction from an instance's site configuration.
//!
//! An instance declares the addresses it should handle in
//! `Contents/Resources/urlPatterns.plist`, a plist array of pattern strings.
//! Pattern syntax is opaque here: the strings are handed over in declaration
//! order to the dispatch logic that does the actual matching.

use std::path::{Path, PathBuf};

use crate::error::{InstanceError, Result};

pub(crate) fn patterns_resource_path(bundle: &Path) -> PathBuf {
    bundle
        .join("Contents")
        .join("Resources")
        .join("urlPatterns.plist")
}

/// Reads the URL patterns declared by the bundle at `bundle`.
///
/// A missing resource means the instance was never configured and yields an
/// empty list. A resource that exists but does not parse as a plist array of
/// strings yields [`InstanceError::ConfigUnreadable`]; the distinction keeps
/// "never configured" separate from "corrupt".
pub fn read_url_patterns(bundle: &Path) -> Result<Vec<String>> {
    let resource = patterns_resource_path(bundle);
    if !resource.exists() {
        return Ok(Vec::new());
    }

    let value =
        plist::Value::from_file(&resource).map_err(|error| InstanceError::ConfigUnreadable {
            path: resource.clone(),
            reason: error.to_string(),
        })?;

    let entries = value
        .as_array()
        .ok_or_else(|| InstanceError::ConfigUnreadable {
            path: resource.clone(),
            reason: "root element is not an array".to_string(),
        })?;

    let mut patterns = Vec::with_capacity(entries.len());
    for entry in entries {
        let pattern = entry
            .as_string()
            .ok_or_else(|| InstanceError::ConfigUnreadable {
                path: resource.clone(),
                reason: "array contains a non-string entry".to_string(),
            })?;
        patterns.push(pattern.to_string());
    }
    Ok(patterns)
}
