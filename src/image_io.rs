use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::errors::{LeafDoctorError, Result};

/// File extensions the decoder is asked to handle
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Load an image and decode it to 3-channel RGB, discarding any alpha.
///
/// A missing path is reported as its own error before the decoder runs; a
/// decoder that declines the format maps to the fallback-signaling variant
/// rather than a hard failure.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LeafDoctorError::ImageNotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|e| match e {
        image::ImageError::Unsupported(err) => LeafDoctorError::UnsupportedFormat(err.to_string()),
        other => LeafDoctorError::Image(other),
    })?;

    Ok(img.to_rgb8())
}

/// Get all image files from a directory (recursively)
pub fn get_image_files_in_dir<P: AsRef<Path>>(dir_path: P) -> Result<Vec<PathBuf>> {
    let dir_path = dir_path.as_ref();

    if !dir_path.exists() {
        return Err(LeafDoctorError::InvalidPath(dir_path.to_path_buf()));
    }

    if !dir_path.is_dir() {
        return Err(LeafDoctorError::Config(format!(
            "{} is not a directory",
            dir_path.display()
        )));
    }

    let mut image_files = Vec::new();
    find_image_files_recursive(dir_path, &mut image_files)?;

    // Deterministic batch order regardless of directory enumeration order
    image_files.sort();

    Ok(image_files)
}

/// Helper function to recursively search for image files
fn find_image_files_recursive(dir_path: &Path, result: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir_path).map_err(LeafDoctorError::Io)?;

    for entry in entries {
        let entry = entry.map_err(LeafDoctorError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            find_image_files_recursive(&path, result)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                    result.push(path.clone());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_image_not_found() {
        let result = load_rgb_image("/definitely/not/here.png");
        assert!(matches!(result, Err(LeafDoctorError::ImageNotFound(_))));
    }

    #[test]
    fn test_missing_dir_is_invalid_path() {
        let result = get_image_files_in_dir("/definitely/not/a/dir");
        assert!(matches!(result, Err(LeafDoctorError::InvalidPath(_))));
    }
}
