//! Info.plist access for application bundles.

use std::path::{Path, PathBuf};

use crate::error::{InstanceError, Result};

/// Metadata read from a bundle's `Contents/Info.plist`.
#[derive(Debug, Clone)]
pub(crate) struct BundleInfo {
    pub display_name: String,
    pub bundle_id: Option<String>,
    pub executable: Option<String>,
    pub icon_file: Option<String>,
}

pub(crate) fn info_plist_path(bundle: &Path) -> PathBuf {
    bundle.join("Contents").join("Info.plist")
}

/// Reads and validates the Info.plist of the bundle at `bundle`.
///
/// A path qualifies as an application bundle if it is a directory containing
/// a parseable `Contents/Info.plist` whose root is a dictionary. Anything
/// else fails with [`InstanceError::InvalidPath`]. Missing name keys never
/// fail an otherwise valid bundle; the display name falls back to
/// `CFBundleName` and finally the bundle directory's file stem.
pub(crate) fn read_bundle_info(bundle: &Path) -> Result<BundleInfo> {
    if !bundle.is_dir() {
        return Err(InstanceError::InvalidPath(bundle.to_path_buf()));
    }

    let plist = plist::Value::from_file(info_plist_path(bundle))
        .map_err(|_| InstanceError::InvalidPath(bundle.to_path_buf()))?;
    let dict = plist
        .as_dictionary()
        .ok_or_else(|| InstanceError::InvalidPath(bundle.to_path_buf()))?;

    let bundle_id = dict
        .get("CFBundleIdentifier")
        .and_then(|value| value.as_string())
        .map(|value| value.to_string());

    let executable = dict
        .get("CFBundleExecutable")
        .and_then(|value| value.as_string())
        .map(|value| value.to_string());

    let icon_file = dict
        .get("CFBundleIconFile")
        .or_else(|| dict.get("CFBundleIconName"))
        .and_then(|value| value.as_string())
        .map(|value| value.to_string());

    let display_name = dict
        .get("CFBundleDisplayName")
        .and_then(|value| value.as_string())
        .or_else(|| dict.get("CFBundleName").and_then(|value| value.as_string()))
        .map(|value| value.to_string())
        .unwrap_or_else(|| fallback_name(bundle));

    Ok(BundleInfo {
        display_name,
        bundle_id,
        executable,
        icon_file,
    })
}

fn fallback_name(bundle: &Path) -> String {
    bundle
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("Unknown")
        .to_string()
}
