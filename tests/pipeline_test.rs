use image::{Rgb, RgbImage};

use leaf_doctor_lib::config::Config;
use leaf_doctor_lib::errors::LeafDoctorError;
use leaf_doctor_lib::output::error_object;
use leaf_doctor_lib::pipeline::analyze_rgb_image;
use leaf_doctor_lib::symptoms::Condition;

// h=100, s=0.5, l=0.4
const LEAF_GREEN: Rgb<u8> = Rgb([85, 153, 51]);
// h~55.3, s=0.5, l=0.4
const SICK_YELLOW: Rgb<u8> = Rgb([153, 145, 51]);
// h~29, s~0.51, l~0.48: brown bucket, crispy tag
const SPOT_BROWN: Rgb<u8> = Rgb([184, 120, 60]);

fn confidence_percent(confidence: &str) -> f64 {
    confidence.trim_end_matches('%').parse().unwrap()
}

#[test]
fn uniform_green_image_reads_healthy() {
    let image = RgbImage::from_pixel(400, 300, LEAF_GREEN);
    let report = analyze_rgb_image(image, &Config::default()).unwrap();

    assert_eq!(report.status, "success");
    assert_eq!(report.diagnosis, "Healthy Plant");
    assert!(confidence_percent(&report.confidence) >= 85.0);

    let detections = report.all_detections.unwrap();
    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].id, Condition::Healthy);

    // Purity-bonus signals fire on a clean read
    assert!(report
        .signals
        .iter()
        .any(|s| s.starts_with("Vibrant green coverage")));
    assert_eq!(report.metrics.green, "100.0%");
}

#[test]
fn thirty_percent_yellow_reads_chlorosis() {
    // Top 30% of rows yellow, remainder green
    let mut image = RgbImage::new(400, 300);
    for (_, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = if y < 90 { SICK_YELLOW } else { LEAF_GREEN };
    }
    let report = analyze_rgb_image(image, &Config::default()).unwrap();

    assert_eq!(report.diagnosis, "Yellowing / Chlorosis");
    // 40 + 0.30 * 250 = 115, clamped to the 99 ceiling
    assert_eq!(report.confidence, "99%");

    let detections = report.all_detections.unwrap();
    assert!(detections.iter().any(|d| d.id == Condition::Chlorosis));
    // Healthy also fired (70% green) but is overridden by the symptom
    assert!(detections.iter().all(|d| d.id != Condition::Healthy));

    assert!(report.signals.iter().any(|s| s.starts_with("Yellowing:")));
}

#[test]
fn scattered_brown_spots_read_as_lesions() {
    // Green leaf with sparse crispy-brown flecks; the hue jumps around each
    // fleck also drive the texture-break ratio up
    let mut image = RgbImage::new(400, 300);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let idx = (y * 400 + x) as usize;
        *pixel = if idx % 23 == 0 { SPOT_BROWN } else { LEAF_GREEN };
    }
    let report = analyze_rgb_image(image, &Config::default()).unwrap();

    assert_eq!(report.diagnosis, "Leaf Spots / Lesions");
    let detections = report.all_detections.unwrap();
    assert!(detections.iter().all(|d| d.id != Condition::Healthy));
    assert!(detections.iter().any(|d| d.id == Condition::Dry));
}

#[test]
fn all_background_image_yields_no_tissue_error() {
    let image = RgbImage::from_pixel(300, 300, Rgb([255, 255, 255]));
    let err = analyze_rgb_image(image, &Config::default()).unwrap_err();

    assert!(matches!(err, LeafDoctorError::NoPlantTissue));
    let object = error_object(&err);
    assert_eq!(
        serde_json::to_string(&object).unwrap(),
        r#"{"error":"No plant tissue detected in image"}"#
    );
}

#[test]
fn oversized_image_is_downscaled_and_still_diagnosed() {
    let image = RgbImage::from_pixel(2400, 1600, LEAF_GREEN);
    let report = analyze_rgb_image(image, &Config::default()).unwrap();
    assert_eq!(report.diagnosis, "Healthy Plant");
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let mut image = RgbImage::new(500, 400);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let band = ((x / 40 + y / 30) % 3) as u8;
        *pixel = match band {
            0 => LEAF_GREEN,
            1 => SICK_YELLOW,
            _ => SPOT_BROWN,
        };
    }
    let config = Config::default();
    let first = analyze_rgb_image(image.clone(), &config).unwrap();
    let second = analyze_rgb_image(image, &config).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
