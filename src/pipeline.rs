use std::path::Path;

use image::RgbImage;

use crate::config::Config;
use crate::errors::Result;
use crate::image_io::load_rgb_image;
use crate::region::{fit_within, select_region};
use crate::report::{build_report, DiagnosisReport};
use crate::scoring::score_metrics;

/// Run the full diagnosis pipeline on one image file.
pub fn analyze_image<P: AsRef<Path>>(path: P, config: &Config) -> Result<DiagnosisReport> {
    let image = load_rgb_image(path)?;
    analyze_rgb_image(image, config)
}

/// Run the diagnosis pipeline on already-decoded RGB pixel data.
///
/// Steps: downscale cap, full-frame + center-crop sampling, region
/// selection, rule scoring, ranking. Fails only when the full frame holds
/// no usable tissue.
pub fn analyze_rgb_image(image: RgbImage, config: &Config) -> Result<DiagnosisReport> {
    let image = fit_within(image, config.resize_target);

    let selection = select_region(&image)?;
    let hits = score_metrics(&selection.metrics);

    Ok(build_report(&hits, &selection.metrics, selection.used_center))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LeafDoctorError;
    use image::Rgb;

    #[test]
    fn test_missing_file_error() {
        let result = analyze_image("/no/such/leaf.png", &Config::default());
        assert!(matches!(result, Err(LeafDoctorError::ImageNotFound(_))));
    }

    #[test]
    fn test_all_background_image_is_no_tissue() {
        let image = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        let result = analyze_rgb_image(image, &Config::default());
        assert!(matches!(result, Err(LeafDoctorError::NoPlantTissue)));
        // The rendered message is part of the output contract
        assert_eq!(
            LeafDoctorError::NoPlantTissue.to_string(),
            "No plant tissue detected in image"
        );
    }

    #[test]
    fn test_determinism_on_identical_pixels() {
        let mut image = RgbImage::new(300, 200);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let v = ((x * 7 + y * 13) % 200) as u8;
            *pixel = Rgb([40 + v / 4, 90 + v / 2, 30 + v / 5]);
        }
        let config = Config::default();
        let a = analyze_rgb_image(image.clone(), &config).unwrap();
        let b = analyze_rgb_image(image, &config).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
