//! Icon extraction from an instance's `.icns` resource.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use icns::{IconFamily, IconType};
use serde::{Serialize, Serializer};

/// Icon types to try first, roughly in order of usefulness for a chooser UI.
const PREFERRED_ICON_TYPES: &[IconType] = &[
    IconType::RGBA32_32x32,
    IconType::RGBA32_16x16_2x,
    IconType::RGB24_32x32,
    IconType::RGBA32_64x64,
    IconType::RGBA32_128x128,
    IconType::RGB24_128x128,
    IconType::RGBA32_16x16,
    IconType::RGB24_16x16,
];

/// Icon handle for one instance.
///
/// Bundles without a usable icon resource get [`InstanceIcon::Placeholder`]
/// rather than an error; the owning UI supplies the placeholder artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceIcon {
    Png(Vec<u8>),
    Placeholder,
}

impl InstanceIcon {
    pub fn png_data(&self) -> Option<&[u8]> {
        match self {
            InstanceIcon::Png(data) => Some(data),
            InstanceIcon::Placeholder => None,
        }
    }

    /// Base64 PNG data URI for UI consumption, or `None` for the placeholder.
    pub fn data_uri(&self) -> Option<String> {
        self.png_data()
            .map(|data| format!("data:image/png;base64,{}", STANDARD.encode(data)))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, InstanceIcon::Placeholder)
    }
}

impl Serialize for InstanceIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data_uri().serialize(serializer)
    }
}

/// Loads the icon declared by the bundle's Info.plist (`icon_file`), falling
/// back to the placeholder if the resource is missing or undecodable.
pub(crate) fn load_icon(bundle: &Path, icon_file: Option<&str>) -> InstanceIcon {
    let png = icon_file
        .and_then(|name| locate_icns(bundle, name))
        .and_then(|path| extract_png(&path));
    match png {
        Some(data) => InstanceIcon::Png(data),
        None => InstanceIcon::Placeholder,
    }
}

/// Resolves the icon name to a file under `Contents/Resources`. The name may
/// be declared with or without the `.icns` extension.
fn locate_icns(bundle: &Path, icon_name: &str) -> Option<PathBuf> {
    let resources = bundle.join("Contents").join("Resources");
    let candidate = if icon_name.ends_with(".icns") {
        resources.join(icon_name)
    } else {
        let with_ext = resources.join(format!("{icon_name}.icns"));
        if with_ext.exists() {
            with_ext
        } else {
            resources.join(icon_name)
        }
    };
    candidate.exists().then_some(candidate)
}

fn extract_png(icns_path: &Path) -> Option<Vec<u8>> {
    let file = File::open(icns_path).ok()?;
    let family = IconFamily::read(BufReader::new(file)).ok()?;

    for icon_type in PREFERRED_ICON_TYPES {
        if let Some(data) = png_for_type(&family, *icon_type) {
            return Some(data);
        }
    }

    // Nothing preferred was present; take whatever the family has.
    family
        .available_icons()
        .into_iter()
        .find_map(|icon_type| png_for_type(&family, icon_type))
}

fn png_for_type(family: &IconFamily, icon_type: IconType) -> Option<Vec<u8>> {
    let image = family.get_icon_with_type(icon_type).ok()?;
    let mut png = Vec::new();
    image.write_png(&mut png).ok()?;
    (!png.is_empty()).then_some(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::test_support::make_bundle;
    use std::fs;
    use tempfile::tempdir;

    fn write_icns(bundle: &Path, file_name: &str) {
        let resources = bundle.join("Contents").join("Resources");
        fs::create_dir_all(&resources).expect("should create Resources");

        let image = icns::Image::from_data(
            icns::PixelFormat::RGBA,
            16,
            16,
            vec![0xff; 16 * 16 * 4],
        )
        .expect("should build image");
        let mut family = IconFamily::new();
        family.add_icon(&image).expect("should add icon");

        let file = fs::File::create(resources.join(file_name)).expect("should create icns file");
        family.write(file).expect("should write icns");
    }

    #[test]
    fn extracts_png_from_declared_icns() {
        let dir = tempdir().expect("tempdir");
        let bundle = make_bundle(dir.path(), "Iconed.app", &[("CFBundleIconFile", "app")]);
        write_icns(&bundle, "app.icns");

        let icon = load_icon(&bundle, Some("app"));
        let data = icon.png_data().expect("should extract PNG data");
        // PNG magic bytes
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let uri = icon.data_uri().expect("should render data URI");
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn icon_name_with_explicit_extension_resolves() {
        let dir = tempdir().expect("tempdir");
        let bundle = make_bundle(dir.path(), "Ext.app", &[("CFBundleIconFile", "app.icns")]);
        write_icns(&bundle, "app.icns");

        assert!(!load_icon(&bundle, Some("app.icns")).is_placeholder());
    }

    #[test]
    fn missing_icon_resource_yields_placeholder() {
        let dir = tempdir().expect("tempdir");
        let bundle = make_bundle(dir.path(), "Bare.app", &[]);

        let icon = load_icon(&bundle, Some("nope"));
        assert!(icon.is_placeholder());
        assert!(icon.data_uri().is_none());
    }

    #[test]
    fn undeclared_icon_yields_placeholder() {
        let dir = tempdir().expect("tempdir");
        let bundle = make_bundle(dir.path(), "NoDecl.app", &[]);

        assert!(load_icon(&bundle, None).is_placeholder());
    }
}
