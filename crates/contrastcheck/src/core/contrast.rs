use crate::Float;

/// The ITU-R BT.709 coefficients for computing relative luminance from
/// linear sRGB coordinates.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The largest gamma-encoded value on the linear segment of the sRGB transfer
/// function, as given by WCAG 2.x.
const LINEAR_THRESHOLD: Float = 0.03928;

/// The flare added to both luminances before taking their ratio.
const FLARE: Float = 0.05;

/// Convert a gamma-encoded 8-bit sRGB coordinate to linear light.
fn linearize(value: u8) -> Float {
    let value = Float::from(value) / 255.0;
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG relative luminance for the given 24-bit sRGB coordinates.
///
/// The result is in `0..=1`, with black at 0 and white at 1.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn to_luminance(coordinates: &[u8; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    // No mul_add: fused rounding drifts from published WCAG ratios.
    c1 * linearize(r) + c2 * linearize(g) + c3 * linearize(b)
}

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// The arguments are interchangeable. The result is in `1..=21` for
/// luminances in `0..=1`.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);
    (lighter + FLARE) / (darker + FLARE)
}
