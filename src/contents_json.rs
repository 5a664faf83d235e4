//! Contents.json data model for an Xcode AppIcon set
//!
//! Mirrors the subset of Apple's asset catalog Contents.json schema that an
//! iPhone `AppIcon.appiconset` needs: one entry per rendered PNG plus the
//! catalog `info` block.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// One entry per rendered icon image
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within the AppIcon set
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The PNG file this entry points at
    pub filename: String,

    /// The device type for the image ("iphone", "ios-marketing")
    pub idiom: String,

    /// The scale factor for the image (e.g., "2x", "3x")
    pub scale: String,

    /// The size of the image in points (e.g., "29x29", "60x60")
    pub size: String,

    /// Expected pixel size, used by Xcode for validation
    #[serde(skip_serializing_if = "Option::is_none", rename = "expected-size")]
    pub expected_size: Option<String>,

    /// The role of the icon (e.g., "notificationCenter", "spotlight")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl ContentsFile {
    /// Creates a new Contents.json structure with the specified author
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates a new app icon entry
    ///
    /// # Arguments
    /// * `filename` - The filename for the icon
    /// * `idiom` - The device idiom
    /// * `size` - The size in points (e.g., "60x60")
    /// * `scale` - The scale factor (e.g., "3x")
    /// * `role` - Optional role for the icon
    pub fn new_app_icon(
        filename: String,
        idiom: String,
        size: String,
        scale: String,
        role: Option<String>,
    ) -> Self {
        Self {
            filename,
            idiom,
            scale,
            size,
            expected_size: None,
            role,
        }
    }

    /// Records the expected pixel size of the image
    pub fn with_expected_size(mut self, pixels: u32) -> Self {
        self.expected_size = Some(pixels.to_string());
        self
    }
}

/// Writes `Contents.json` into `dir`.
///
/// # Errors
/// Returns an error if JSON serialization fails or the file cannot be written.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<()> {
    let json =
        serde_json::to_string_pretty(contents).context("Failed to serialize Contents.json")?;
    std::fs::write(dir.join("Contents.json"), json).context("Failed to write Contents.json file")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher_entry() -> ImageEntry {
        ImageEntry::new_app_icon(
            "AppIcon-60@2x.png".to_string(),
            "iphone".to_string(),
            "60x60".to_string(),
            "2x".to_string(),
            Some("appLauncher".to_string()),
        )
        .with_expected_size(120)
    }

    #[test]
    fn test_contents_file_creation() {
        let contents = ContentsFile::new("magic-icons".to_string());
        assert_eq!(contents.info.author, "magic-icons");
        assert_eq!(contents.info.version, 1);
        assert!(contents.images.is_empty());
    }

    #[test]
    fn test_single_entry_json_serialization() {
        let mut contents = ContentsFile::new("com.test.app".to_string());
        contents.add_image(launcher_entry());

        let json = serde_json::to_string_pretty(&contents).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        assert_eq!(parsed["images"].as_array().unwrap().len(), 1);
        let image = &parsed["images"][0];
        assert_eq!(image["filename"], "AppIcon-60@2x.png");
        assert_eq!(image["idiom"], "iphone");
        assert_eq!(image["size"], "60x60");
        assert_eq!(image["scale"], "2x");
        assert_eq!(image["expected-size"], "120");
        assert_eq!(image["role"], "appLauncher");

        assert_eq!(parsed["info"]["version"], 1);
        assert_eq!(parsed["info"]["author"], "com.test.app");
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let entry = ImageEntry::new_app_icon(
            "AppIcon-1024.png".to_string(),
            "ios-marketing".to_string(),
            "1024x1024".to_string(),
            "1x".to_string(),
            None,
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("role"));
        assert!(!json.contains("expected-size"));
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let mut contents = ContentsFile::new("magic-icons".to_string());
        contents.add_image(launcher_entry());
        write_contents_json(temp_dir.path(), &contents).unwrap();

        let contents_path = temp_dir.path().join("Contents.json");
        assert!(contents_path.exists());

        let file_content = std::fs::read_to_string(&contents_path).unwrap();
        assert!(file_content.contains("AppIcon-60@2x.png"));
        assert!(file_content.contains("\"version\": 1"));
    }
}
