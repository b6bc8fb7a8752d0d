use image::{imageops, DynamicImage, RgbImage};

use crate::errors::{LeafDoctorError, Result};
use crate::metrics::SegmentMetrics;
use crate::sampler::sample_segment;

/// Center metrics are selected only when their disease score exceeds the
/// full-frame score by this factor
const CENTER_DISEASE_MARGIN: f64 = 1.2;

/// The metrics chosen for scoring, and which region produced them.
#[derive(Debug, Clone)]
pub struct RegionSelection {
    pub metrics: SegmentMetrics,
    /// True when the center crop won the disease-score comparison
    pub used_center: bool,
}

/// Downscale so the longer side fits within `target` pixels, preserving
/// aspect ratio. Images already within bounds are returned untouched;
/// upscaling never happens.
pub fn fit_within(image: RgbImage, target: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if width <= target && height <= target {
        return image;
    }

    DynamicImage::ImageRgb8(image)
        .resize(target, target, imageops::FilterType::Lanczos3)
        .to_rgb8()
}

/// Analyze the full frame and the centered crop (middle 50% of width and
/// height), then pick whichever region carries the stronger disease signal.
///
/// A full frame with no usable tissue is a hard error; a center crop with
/// no usable tissue only disables the comparison.
pub fn select_region(image: &RgbImage) -> Result<RegionSelection> {
    let full = sample_segment(image.pixels(), false).ok_or(LeafDoctorError::NoPlantTissue)?;

    let (width, height) = image.dimensions();
    let center_crop =
        imageops::crop_imm(image, width / 4, height / 4, width / 2, height / 2).to_image();
    let center = sample_segment(center_crop.pixels(), true);

    Ok(choose_metrics(full, center))
}

/// The zoomed subject wins only when it looks materially worse than the
/// overall frame; small noise differences keep the full-frame read.
pub fn choose_metrics(full: SegmentMetrics, center: Option<SegmentMetrics>) -> RegionSelection {
    if let Some(center) = center {
        if center.disease_score() > full.disease_score() * CENTER_DISEASE_MARGIN {
            return RegionSelection {
                metrics: center,
                used_center: true,
            };
        }
    }

    RegionSelection {
        metrics: full,
        used_center: false,
    }
}
