use image::Rgb;

use crate::color::rgb_to_hsl;
use crate::metrics::SegmentMetrics;

/// Sampling target for the center (zoomed) region
pub const CENTER_SAMPLE_TARGET: usize = 3500;

/// Sampling target for any other region
pub const FULL_SAMPLE_TARGET: usize = 1500;

/// Lightness above which a pixel is treated as background
const BACKGROUND_LIGHTNESS: f64 = 0.92;

/// Washed-out background: low saturation combined with high lightness
const WASHOUT_SATURATION: f64 = 0.08;
const WASHOUT_LIGHTNESS: f64 = 0.6;

/// Hue jump between consecutive sampled pixels counted as a texture break
const TEXTURE_BREAK_DEGREES: f64 = 30.0;

/// Raw accumulation state for one region walk.
///
/// Counts are per sampled pixel; `sampled` is the denominator for every
/// ratio downstream (background pixels are excluded entirely).
#[derive(Debug, Default)]
pub struct SegmentCounts {
    pub sampled: usize,
    pub green: usize,
    pub yellow: usize,
    pub brown: usize,
    pub black: usize,
    pub white: usize,
    pub bleached: usize,
    pub crispy: usize,
    pub low_sat: usize,
    pub high_bright: usize,
    pub texture_breaks: usize,
    pub brightness_sum: f64,
    pub saturation_sum: f64,
    pub green_intensities: Vec<f64>,
}

/// Walk one region's pixel sequence at an adaptive stride and aggregate it
/// into normalized metrics.
///
/// The stride is chosen so that roughly [`CENTER_SAMPLE_TARGET`] pixels are
/// visited for the center region and [`FULL_SAMPLE_TARGET`] for any other
/// region; small regions are walked pixel-by-pixel, never upsampled.
/// Returns `None` when the region yields zero usable samples.
pub fn sample_segment<'a, I>(pixels: I, is_center: bool) -> Option<SegmentMetrics>
where
    I: ExactSizeIterator<Item = &'a Rgb<u8>>,
{
    let count = pixels.len();
    if count == 0 {
        return None;
    }

    let target = if is_center {
        CENTER_SAMPLE_TARGET
    } else {
        FULL_SAMPLE_TARGET
    };
    let step = (count / target).max(1);

    let mut counts = SegmentCounts::default();
    let mut prev_hue: Option<f64> = None;

    for pixel in pixels.step_by(step) {
        let Rgb([r, g, b]) = *pixel;
        let (h, s, l) = rgb_to_hsl(r, g, b);

        // Skip background: near-white, or washed-out low-chroma highlights
        if l > BACKGROUND_LIGHTNESS || (s < WASHOUT_SATURATION && l > WASHOUT_LIGHTNESS) {
            continue;
        }

        counts.sampled += 1;
        counts.brightness_sum += l;
        counts.saturation_sum += s;

        if s < 0.25 {
            counts.low_sat += 1;
        }
        if l > 0.65 {
            counts.high_bright += 1;
        }

        if let Some(prev) = prev_hue {
            if (h - prev).abs() > TEXTURE_BREAK_DEGREES {
                counts.texture_breaks += 1;
            }
        }
        prev_hue = Some(h);

        // Color buckets: first matching rule wins
        if h <= 40.0 && s > 0.15 && l > 0.15 && l < 0.55 {
            counts.brown += 1;
            if l > 0.40 {
                counts.crispy += 1;
            }
        } else if h > 40.0 && h <= 70.0 && s > 0.20 {
            counts.yellow += 1;
        } else if h > 70.0 && h <= 165.0 && s > 0.15 {
            counts.green += 1;
            counts.green_intensities.push(g as f64);
        } else if l < 0.12 {
            counts.black += 1;
        } else if l > 0.75 && s < 0.20 {
            counts.white += 1;
        } else if l > 0.68 && s < 0.30 {
            counts.bleached += 1;
        }
    }

    SegmentMetrics::from_counts(&counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    // RGB(85,153,51) -> h=100, s=0.5, l=0.4
    const LEAF_GREEN: Rgb<u8> = Rgb([85, 153, 51]);
    // RGB(153,145,51) -> h~55.3, s=0.5, l=0.4
    const SICK_YELLOW: Rgb<u8> = Rgb([153, 145, 51]);

    #[test]
    fn test_empty_sequence_is_no_data() {
        let pixels: Vec<Rgb<u8>> = Vec::new();
        assert!(sample_segment(pixels.iter(), false).is_none());
    }

    #[test]
    fn test_all_background_is_no_data() {
        // Pure white fails the lightness test for every pixel
        let pixels = vec![Rgb([255u8, 255, 255]); 5000];
        assert!(sample_segment(pixels.iter(), false).is_none());
    }

    #[test]
    fn test_uniform_green_region() {
        let pixels = vec![LEAF_GREEN; 6000];
        let metrics = sample_segment(pixels.iter(), false).unwrap();

        assert_approx_eq!(metrics.green, 1.0);
        assert_approx_eq!(metrics.yellow, 0.0);
        assert_approx_eq!(metrics.brown, 0.0);
        assert_approx_eq!(metrics.texture_breaks, 0.0);
        assert_approx_eq!(metrics.avg_brightness, 0.4, 1e-9);
        assert_approx_eq!(metrics.avg_saturation, 0.5, 1e-9);
        // All recorded green intensities are identical
        assert_approx_eq!(metrics.green_variance, 0.0);
    }

    #[test]
    fn test_stride_targets() {
        // 6000 pixels, full-region target 1500 -> stride 4 -> 1500 samples;
        // center target 3500 -> stride 1 -> all 6000 sampled. Both are
        // ratios of 1.0 either way, so probe via sampled counts indirectly:
        // a small region (< target) must be walked at stride 1.
        let pixels = vec![LEAF_GREEN; 10];
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.green, 1.0);
    }

    #[test]
    fn test_bucket_priority_brown_over_black() {
        // Dark brown: h in [0,40], s>0.15, l in (0.15,0.55) but l >= 0.12,
        // so the brown arm must win before the black test is reached.
        // RGB(92,46,26): max=0.361 min=0.102, l=0.231, d=0.259, s=0.559, h=18.2
        let pixels = vec![Rgb([92u8, 46, 26]); 100];
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.brown, 1.0);
        assert_approx_eq!(metrics.black, 0.0);
        // l = 0.231 <= 0.40: not crispy
        assert_approx_eq!(metrics.crispy, 0.0);
    }

    #[test]
    fn test_crispy_layered_on_light_brown() {
        // RGB(184,120,60): l=0.478 > 0.40 -> brown and crispy both count
        let pixels = vec![Rgb([184u8, 120, 60]); 100];
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.brown, 1.0);
        assert_approx_eq!(metrics.crispy, 1.0);
    }

    #[test]
    fn test_black_bucket() {
        // RGB(20,20,25): l=0.088 < 0.12, achromatic enough to skip color arms
        let pixels = vec![Rgb([20u8, 20, 25]); 100];
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.black, 1.0);
    }

    #[test]
    fn test_texture_breaks_on_alternating_hues() {
        // Alternating green (h=100) and yellow (h~55.3): every transition
        // jumps by ~44.7 degrees; the first sampled pixel cannot break.
        let mut pixels = Vec::new();
        for i in 0..1000 {
            pixels.push(if i % 2 == 0 { LEAF_GREEN } else { SICK_YELLOW });
        }
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.texture_breaks, 999.0 / 1000.0, 1e-9);
    }

    #[test]
    fn test_background_pixels_excluded_from_denominator() {
        // Half background, half green: ratios are over sampled pixels only
        let mut pixels = Vec::new();
        for i in 0..1000 {
            pixels.push(if i % 2 == 0 { Rgb([255u8, 255, 255]) } else { LEAF_GREEN });
        }
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.green, 1.0);
    }

    #[test]
    fn test_low_sat_and_high_bright_counters() {
        // RGB(176,176,150): h=60, s=0.141, l=0.639. Saturated enough to
        // escape the washout skip, too desaturated for any color bucket:
        // counts toward low_sat only.
        let pixels = vec![Rgb([176u8, 176, 150]); 100];
        let metrics = sample_segment(pixels.iter(), false).unwrap();
        assert_approx_eq!(metrics.low_sat, 1.0);
        assert_approx_eq!(metrics.high_bright, 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut pixels = Vec::new();
        for i in 0..5000u32 {
            let v = (i % 251) as u8;
            pixels.push(Rgb([v, v.wrapping_add(40), v.wrapping_mul(3)]));
        }
        let a = sample_segment(pixels.iter(), true);
        let b = sample_segment(pixels.iter(), true);
        assert_eq!(a, b);
    }
}
