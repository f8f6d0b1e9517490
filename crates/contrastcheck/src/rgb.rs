#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{blend, parse_hex, to_contrast_ratio, to_luminance};
use crate::error::ColorFormatError;
use crate::Float;

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit sRGB color.
///
/// Rust code can create a new true color with either [`Rgb::new`] or [`Rgb as
/// From<[u8; 3]>`](struct.Rgb.html#impl-From%3C%5Bu8;+3%5D%3E-for-Rgb) and
/// parse hexadecimal notation with or without the leading `#` with
/// [`str::parse`]. It can access the coordinates with [`Rgb as
/// AsRef<[u8; 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) and
/// format the color in hashed hexadecimal notation with [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb).
/// ```
/// # use contrastcheck::Rgb;
/// # use contrastcheck::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let orange: Rgb = "e67e22".parse()?;
/// assert_eq!(orange, Rgb::new(0xe6, 0x7e, 0x22));
/// assert_eq!(orange.as_ref(), &[230_u8, 126, 34]);
/// assert_eq!(format!("{}", orange), "#e67e22");
/// # Ok(())
/// # }
/// ```
///
/// The color's methods implement the WCAG 2.x formulae for [relative
/// luminance](Rgb::luminance) and [contrast ratio](Rgb::contrast_ratio) as
/// well as [compositing](Rgb::blend_over) a translucent color over an opaque
/// one.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "contrastcheck")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new true color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse hexadecimal notation with or without the leading `#`. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Access this true color's coordinates. <i class=python-only>Python
    /// only!</i>
    fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    #[pyo3(name = "luminance")]
    fn py_luminance(&self) -> Float {
        self.luminance()
    }

    #[pyo3(name = "contrast_ratio")]
    fn py_contrast_ratio(&self, other: &Rgb) -> Float {
        self.contrast_ratio(other)
    }

    #[pyo3(name = "blend_over")]
    fn py_blend_over(&self, background: &Rgb, alpha: Float) -> Rgb {
        self.blend_over(background, alpha)
    }

    /// Get this true color's length, which is 3. <i
    /// class=python-only>Python only!</i>
    fn __len__(&self) -> usize {
        3
    }

    /// Convert this true color to its debug representation. <i
    /// class=python-only>Python only!</i>
    fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this true color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Compute this color's WCAG relative luminance.
    ///
    /// The result is in `0..=1`. It is computed by linearizing each coordinate
    /// with the sRGB transfer function and weighting the linear values with
    /// the ITU-R BT.709 coefficients.
    /// ```
    /// # use contrastcheck::{assert_close_enough, Rgb};
    /// assert_close_enough!(Rgb::new(0, 0, 0).luminance(), 0.0);
    /// assert_close_enough!(Rgb::new(255, 255, 255).luminance(), 1.0);
    /// ```
    pub fn luminance(&self) -> Float {
        to_luminance(&self.0)
    }

    /// Compute the WCAG contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and in `1..=21`. WCAG AA requires at least 4.5
    /// for normal text and at least 3 for large text and user interface
    /// components.
    /// ```
    /// # use contrastcheck::{assert_close_enough, Rgb};
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_close_enough!(black.contrast_ratio(&white), 21.0);
    /// assert_close_enough!(white.contrast_ratio(&black), 21.0);
    /// ```
    pub fn contrast_ratio(&self, other: &Rgb) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Composite this color with the given opacity over the opaque background.
    ///
    /// This method approximates CSS source-over compositing of a translucent
    /// layer, truncating each coordinate towards zero. It does not model
    /// stacked translucent layers or backdrop filters.
    /// ```
    /// # use contrastcheck::Rgb;
    /// let white = Rgb::new(255, 255, 255);
    /// let black = Rgb::new(0, 0, 0);
    /// assert_eq!(white.blend_over(&black, 0.0), black);
    /// assert_eq!(white.blend_over(&black, 1.0), white);
    /// assert_eq!(white.blend_over(&black, 0.5), Rgb::new(127, 127, 127));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_over(&self, background: &Rgb, alpha: Float) -> Rgb {
        Rgb(blend(&self.0, &background.0, alpha))
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse hexadecimal notation with exactly six digits and an optional
    /// leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Rgb)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value).map(Rgb)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
// ColorRef
// ====================================================================================================================

/// An operand for contrast computations.
///
/// A color reference is either hexadecimal notation, which still needs to be
/// parsed, or an already parsed color. That way, callers can mix literals with
/// computed colors, e.g., the result of [`Rgb::blend_over`].
/// ```
/// # use contrastcheck::{ColorRef, Rgb};
/// # use contrastcheck::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let white = ColorRef::from("#ffffff");
/// let green = ColorRef::from(Rgb::new(39, 174, 96));
/// let ratio = white.contrast_ratio(green)?;
/// assert_eq!(format!("{:.2}", ratio), "2.87");
///
/// assert_eq!(
///     ColorRef::from("#fff").contrast_ratio(green),
///     Err(ColorFormatError::UnexpectedLength)
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorRef<'a> {
    Hex(&'a str),
    Rgb(Rgb),
}

impl ColorRef<'_> {
    /// Resolve this color reference to a color.
    pub fn resolve(self) -> Result<Rgb, ColorFormatError> {
        match self {
            Self::Hex(s) => s.parse(),
            Self::Rgb(rgb) => Ok(rgb),
        }
    }

    /// Compute the WCAG contrast ratio between this and the other color
    /// reference, parsing hexadecimal notation as needed.
    pub fn contrast_ratio(self, other: ColorRef<'_>) -> Result<Float, ColorFormatError> {
        Ok(self.resolve()?.contrast_ratio(&other.resolve()?))
    }
}

impl<'a> From<&'a str> for ColorRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgb> for ColorRef<'_> {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<[u8; 3]> for ColorRef<'_> {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(Rgb(value))
    }
}

/// Compute the WCAG contrast ratio between two colors in hexadecimal
/// notation. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn contrast_ratio_of_hex(color1: &str, color2: &str) -> Result<Float, ColorFormatError> {
    ColorRef::Hex(color1).contrast_ratio(ColorRef::Hex(color2))
}
