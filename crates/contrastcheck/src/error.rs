//! Utility module with contrastcheck's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hexadecimal color format.
///
/// Hexadecimal colors have exactly six digits, optionally preceded by a `#`.
/// The enumeration distinguishes strings of the wrong length from strings of
/// the right length with unsuitable characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with an unexpected number of characters. For example,
    /// `#fff` is missing three hexadecimal digits, whereas `#ffffff00` has two
    /// too many.
    UnexpectedLength,

    /// A color format with the correct length but characters other than
    /// hexadecimal digits. For example, `#efgefg` contains the letter `g`.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedLength => {
                f.write_str("color format should have 6 hexadecimal digits after optional `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while writing the contrast report.
///
/// The report fails either because an entry of its color table does not parse
/// or because the output cannot be written.
#[derive(Debug)]
pub enum ReportError {
    /// A status color with malformed hexadecimal notation.
    Format {
        label: String,
        source: ColorFormatError,
    },

    /// A failure writing the report.
    Io(std::io::Error),
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Format { ref label, .. } => {
                f.write_fmt(format_args!("could not parse color for status {}", label))
            }
            Self::Io(_) => f.write_str("could not write contrast report"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Format { ref source, .. } => Some(source),
            Self::Io(ref source) => Some(source),
        }
    }
}
