/// Convert an 8-bit RGB triple to HSL.
///
/// Returns (hue, saturation, lightness) with hue in degrees [0, 360) and
/// saturation/lightness in [0, 1]. Achromatic pixels (r == g == b) yield
/// hue 0 and saturation 0. The formula is the standard piecewise RGB->HSL
/// transform; downstream bucket thresholds depend on it exactly.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let l = (max_c + min_c) / 2.0;

    if max_c == min_c {
        return (0.0, 0.0, l);
    }

    let d = max_c - min_c;
    let s = if l > 0.5 {
        d / (2.0 - max_c - min_c)
    } else {
        d / (max_c + min_c)
    };

    let mut h = if max_c == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max_c == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h *= 60.0;

    (h, s, l)
}
