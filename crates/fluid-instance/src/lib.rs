//! Descriptors for installed Fluid single-site-browser instances.
//!
//! A Fluid instance is an application bundle generated to open one site in
//! isolation from a general-purpose browser. Each [`FluidInstance`] owns the
//! bundle's path and derives a display name, an icon handle, and the ordered
//! list of URL patterns the instance declares. Matching those patterns
//! against candidate URLs is the dispatcher's job, not this crate's: the
//! contract here is faithful, order-preserving extraction.

mod bundle;
mod error;
mod icon;
mod installed;
mod instance;
mod patterns;

pub use error::{InstanceError, Result};
pub use icon::InstanceIcon;
pub use installed::{instance_directories, list_installed_instances, scan_directories};
pub use instance::FluidInstance;
pub use patterns::read_url_patterns;
