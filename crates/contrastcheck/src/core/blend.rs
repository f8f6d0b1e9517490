use crate::Float;

/// Composite a translucent foreground over an opaque background.
///
/// This function implements source-over compositing for an opaque backdrop.
/// Each resulting coordinate is `foreground * alpha + background * (1 -
/// alpha)`, truncated towards zero. Alpha is clamped to `0..=1`, with
/// not-a-number treated as fully transparent.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn blend(foreground: &[u8; 3], background: &[u8; 3], alpha: Float) -> [u8; 3] {
    let alpha = if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    };

    #[inline]
    fn mix(foreground: u8, background: u8, alpha: Float) -> u8 {
        // Truncation, not rounding, matches a plain cast of the blended value.
        (Float::from(foreground) * alpha + Float::from(background) * (1.0 - alpha)) as u8
    }

    let [f1, f2, f3] = *foreground;
    let [b1, b2, b3] = *background;
    [mix(f1, b1, alpha), mix(f2, b2, alpha), mix(f3, b3, alpha)]
}

#[cfg(test)]
mod test {
    use super::blend;
    use crate::Float;

    const WHITE: [u8; 3] = [255, 255, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(&WHITE, &BLACK, 0.0), BLACK, "transparent white");
        assert_eq!(blend(&WHITE, &BLACK, 1.0), WHITE, "opaque white");
        assert_eq!(blend(&WHITE, &BLACK, -0.5), BLACK, "negative alpha");
        assert_eq!(blend(&WHITE, &BLACK, 1.5), WHITE, "excessive alpha");
        assert_eq!(blend(&WHITE, &BLACK, Float::NAN), BLACK, "NaN alpha");
    }

    #[test]
    fn test_blend_truncates() {
        // 255 * 0.5 = 127.5
        assert_eq!(blend(&WHITE, &BLACK, 0.5), [127, 127, 127], "half white");

        let green = [39, 174, 96];
        assert_eq!(blend(&WHITE, &green, 0.75), [201, 234, 215], "muted text");
        assert_eq!(blend(&WHITE, &green, 0.15), [71, 186, 119], "card overlay");
        assert_eq!(blend(&WHITE, &green, 0.6), [168, 222, 191], "focus outline");
    }
}
