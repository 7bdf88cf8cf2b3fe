//! Descriptor for one installed Fluid single-site-browser instance.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::bundle::{read_bundle_info, BundleInfo};
use crate::error::Result;
use crate::icon::{load_icon, InstanceIcon};
use crate::patterns::read_url_patterns;

/// One installed instance: a bundle path plus the attributes derived from it.
///
/// Name and icon are derived when the path is set, so they always reflect the
/// current bundle. URL patterns are read from disk on every call and are
/// therefore never stale either.
#[derive(Debug, Clone, Serialize)]
pub struct FluidInstance {
    path: PathBuf,
    name: String,
    bundle_id: Option<String>,
    icon: InstanceIcon,
}

impl FluidInstance {
    /// Builds a descriptor for the application bundle at `path`.
    ///
    /// Fails with [`crate::InstanceError::InvalidPath`] unless `path` is a
    /// readable, well-formed bundle.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let info = read_bundle_info(&path)?;
        Ok(Self::from_info(path, info))
    }

    pub(crate) fn from_info(path: PathBuf, info: BundleInfo) -> Self {
        let icon = load_icon(&path, info.icon_file.as_deref());
        Self {
            path,
            name: info.display_name,
            bundle_id: info.bundle_id,
            icon,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name from the bundle's metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    pub fn icon(&self) -> &InstanceIcon {
        &self.icon
    }

    /// Re-points the descriptor at a different bundle.
    ///
    /// Every derived field is rebuilt from the new bundle. If the new path is
    /// not a valid bundle the descriptor keeps its previous state untouched.
    pub fn set_path(&mut self, new_path: impl Into<PathBuf>) -> Result<()> {
        *self = Self::new(new_path)?;
        Ok(())
    }

    /// URL patterns this instance declares, in declaration order.
    ///
    /// An instance with no patterns resource yields an empty list; a corrupt
    /// resource yields [`crate::InstanceError::ConfigUnreadable`] while the
    /// descriptor itself stays valid.
    pub fn matching_url_patterns(&self) -> Result<Vec<String>> {
        read_url_patterns(&self.path)
    }
}
