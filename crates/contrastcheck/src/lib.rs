//! # contrastcheck
//!
//! Contrastcheck verifies that a status page's color scheme meets the [WCAG
//! 2.x](https://www.w3.org/TR/WCAG21/#contrast-minimum) contrast minimums.
//!
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`Rgb`] implements **24-bit sRGB colors**. It parses hexadecimal
//!     notation with or without the leading `#`, computes WCAG relative
//!     luminance and contrast ratios, and composites a translucent color over
//!     an opaque backdrop.
//!   * [`ColorRef`] is an **operand for contrast computations** that is either
//!     a hexadecimal string or an already parsed [`Rgb`].
//!   * The [`report`] module checks a table of **status colors** against the
//!     WCAG AA thresholds for white text, muted text, card overlays, and focus
//!     outlines and writes the results as plain text.
//!
//! ```
//! # use contrastcheck::Rgb;
//! # use contrastcheck::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! let green: Rgb = "#27ae60".parse()?;
//! let white = Rgb::new(255, 255, 255);
//! let ratio = white.contrast_ratio(&green);
//! assert!(ratio < 3.0, "white on green should fail even for large text");
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Contrastcheck supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls contrastcheck's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod report;
mod rgb;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use rgb::{ColorRef, Rgb};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn contrastcheck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Rgb>()?;
    m.add_function(wrap_pyfunction!(rgb::contrast_ratio_of_hex, m)?)?;
    Ok(())
}
