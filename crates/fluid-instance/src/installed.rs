//! Discovery of installed Fluid instances.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::bundle::read_bundle_info;
use crate::instance::FluidInstance;

/// Executable name shared by every bundle Fluid generates.
const FLUID_EXECUTABLE: &str = "Fluid";

/// Directories scanned for installed instances.
pub fn instance_directories() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/Applications")];
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(PathBuf::from(home).join("Applications"));
    }
    dirs
}

/// Scans the standard application directories for Fluid instances.
pub fn list_installed_instances() -> Vec<FluidInstance> {
    scan_directories(&instance_directories())
}

/// Scans `dirs` for `.app` bundles whose executable is Fluid's and builds a
/// descriptor for each. Duplicates (same bundle id found under two roots) are
/// collapsed; results are sorted by display name. Unreadable bundles are
/// skipped, never fatal to the scan.
pub fn scan_directories(dirs: &[PathBuf]) -> Vec<FluidInstance> {
    let mut instances = Vec::new();
    let mut seen = HashSet::new();

    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("app") {
                continue;
            }
            let info = match read_bundle_info(&path) {
                Ok(info) => info,
                Err(error) => {
                    tracing::warn!("skipping unreadable bundle {}: {error}", path.display());
                    continue;
                }
            };
            if info.executable.as_deref() != Some(FLUID_EXECUTABLE) {
                continue;
            }

            let key = info
                .bundle_id
                .clone()
                .unwrap_or_else(|| path.to_string_lossy().to_string());
            if seen.insert(key) {
                instances.push(FluidInstance::from_info(path, info));
            }
        }
    }

    instances.sort_by(|a, b| a.name().cmp(b.name()));
    tracing::debug!("found {} installed Fluid instances", instances.len());
    instances
}
