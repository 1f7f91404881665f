//! Color helpers for generators

/// Convert an HSL color to RGB.
///
/// `h` is the hue in [0, 1] (wrapping), `s` saturation and `l` lightness in
/// [0, 1]. Matches the hue-band coloring the generators use: pick a narrow
/// hue range, jitter saturation and lightness.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grayscale_when_unsaturated() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.4), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_primary_hues() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert_relative_eq!(red[0], 1.0);
        assert_relative_eq!(red[1], 0.0);
        assert_relative_eq!(red[2], 0.0);

        let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert_relative_eq!(green[0], 0.0);
        assert_relative_eq!(green[1], 1.0);
        assert_relative_eq!(green[2], 0.0);

        let blue = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
        assert_relative_eq!(blue[0], 0.0);
        assert_relative_eq!(blue[1], 0.0);
        assert_relative_eq!(blue[2], 1.0);
    }

    #[test]
    fn test_hue_wraps() {
        let a = hsl_to_rgb(0.25, 0.6, 0.5);
        let b = hsl_to_rgb(1.25, 0.6, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_components_in_range() {
        for i in 0..20 {
            let c = hsl_to_rgb(i as f32 / 20.0, 0.65, 0.5);
            assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}
