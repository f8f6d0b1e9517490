//! Checking status colors against WCAG AA and writing the results.
//!
//! The report covers four situations for each status background:
//!
//!   * [`Section::WhiteText`]: opaque white text directly on the background;
//!   * [`Section::MutedText`]: white text at [`MUTED_ALPHA`] opacity;
//!   * [`Section::CardText`]: white and muted text on a card, i.e., a white
//!     overlay at [`CARD_ALPHA`] opacity over the background;
//!   * [`Section::FocusIndicator`]: a white focus outline at [`FOCUS_ALPHA`]
//!     opacity.
//!
//! Translucent colors are composited with [`Rgb::blend_over`]. The card's
//! backdrop blur and the stacking of muted text on a translucent card are not
//! modeled, which is why the report labels those ratios as approximate.
use std::io::Write;

use tracing::debug;

use crate::error::ReportError;
use crate::{Float, Rgb};

/// The status backgrounds checked by the report, as label and hexadecimal
/// color pairs.
pub const STATUS_COLORS: &[(&str, &str)] = &[
    ("Normal (Green)", "#27ae60"),
    ("Degraded (Orange)", "#e67e22"),
    ("Fucked (Red)", "#c0392b"),
    ("Unknown (Gray)", "#7f8c8d"),
];

/// The text color.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// The opacity of muted text.
pub const MUTED_ALPHA: Float = 0.75;

/// The opacity of the white overlay forming card backgrounds.
pub const CARD_ALPHA: Float = 0.15;

/// The opacity of focus outlines.
pub const FOCUS_ALPHA: Float = 0.6;

const WIDTH: usize = 80;

// ====================================================================================================================
// Threshold
// ====================================================================================================================

/// A WCAG AA contrast minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// Large text and user interface components need 3:1.
    LargeText,
    /// Normal text needs 4.5:1.
    NormalText,
}

impl Threshold {
    /// All thresholds, from least to most demanding.
    pub const ALL: [Threshold; 2] = [Threshold::LargeText, Threshold::NormalText];

    /// Get the minimum contrast ratio.
    pub const fn ratio(&self) -> Float {
        match *self {
            Self::LargeText => 3.0,
            Self::NormalText => 4.5,
        }
    }

    /// Get the human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::LargeText => "≥3:1",
            Self::NormalText => "≥4.5:1",
        }
    }

    /// Determine whether the contrast ratio meets this threshold.
    pub fn is_met_by(&self, ratio: Float) -> bool {
        self.ratio() <= ratio
    }
}

// ====================================================================================================================
// Section
// ====================================================================================================================

/// A section of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    WhiteText,
    MutedText,
    CardText,
    FocusIndicator,
}

impl Section {
    /// All sections in report order.
    pub const ALL: [Section; 4] = [
        Section::WhiteText,
        Section::MutedText,
        Section::CardText,
        Section::FocusIndicator,
    ];

    /// Get the section's heading.
    pub const fn heading(&self) -> &'static str {
        match *self {
            Self::WhiteText => "WHITE TEXT (#ffffff) ON STATUS BACKGROUNDS",
            Self::MutedText => "MUTED TEXT (75% opacity white) ON STATUS BACKGROUNDS",
            Self::CardText => "TEXT ON SEMI-TRANSPARENT CARD BACKGROUNDS",
            Self::FocusIndicator => "FOCUS INDICATORS",
        }
    }

    /// Get the explanatory lines printed below the heading.
    pub const fn notes(&self) -> &'static [&'static str] {
        match *self {
            Self::WhiteText => &[],
            Self::MutedText => &[
                "Semi-transparent text on colored backgrounds has varying effective contrast",
                "depending on the background color. Values are approximate.",
            ],
            Self::CardText => &[
                "Cards use: rgba(255, 255, 255, 0.15) + backdrop-filter: blur(4px)",
                "The white overlay lightens the effective background. The blur is not",
                "modeled and muted text is blended onto the card as if it were opaque,",
                "so these values are approximations.",
            ],
            Self::FocusIndicator => &[
                "Focus outlines use: rgba(255, 255, 255, 0.6) - 60% white",
                "Non-text content such as outlines requires 3:1.",
            ],
        }
    }

    /// Get the label for the background that text is checked against.
    pub const fn background_label(&self) -> &'static str {
        match *self {
            Self::CardText => "Card BG (effective)",
            _ => "Background",
        }
    }

    /// Check one status background, appending the results.
    fn check<'a>(&self, status: &'a str, background: Rgb, checks: &mut Vec<Check<'a>>) {
        let section = *self;
        match section {
            Self::WhiteText => {
                checks.push(Check::new(section, status, "White text", WHITE, background));
            }
            Self::MutedText => {
                let muted = WHITE.blend_over(&background, MUTED_ALPHA);
                checks.push(Check::new(section, status, "Muted text", muted, background));
            }
            Self::CardText => {
                let card = WHITE.blend_over(&background, CARD_ALPHA);
                checks.push(Check::new(section, status, "White text", WHITE, card));
                let muted = WHITE.blend_over(&card, MUTED_ALPHA);
                checks.push(Check::new(section, status, "Muted text", muted, card));
            }
            Self::FocusIndicator => {
                let outline = WHITE.blend_over(&background, FOCUS_ALPHA);
                checks.push(Check::new(section, status, "Outline", outline, background));
            }
        }
    }
}

// ====================================================================================================================
// Check
// ====================================================================================================================

/// The contrast between one foreground and one background color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Check<'a> {
    pub section: Section,
    pub status: &'a str,
    pub subject: &'static str,
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: Float,
}

impl<'a> Check<'a> {
    fn new(
        section: Section,
        status: &'a str,
        subject: &'static str,
        foreground: Rgb,
        background: Rgb,
    ) -> Self {
        let ratio = foreground.contrast_ratio(&background);
        debug!(?section, status, subject, %foreground, %background, ratio, "checked contrast");

        Self {
            section,
            status,
            subject,
            foreground,
            background,
            ratio,
        }
    }

    /// Determine whether this check meets the threshold.
    pub fn passes(&self, threshold: Threshold) -> bool {
        threshold.is_met_by(self.ratio)
    }
}

/// Check all status colors for all sections.
///
/// The result is ordered by section, then by status in table order. Each
/// status contributes one check per section, except for
/// [`Section::CardText`], which checks both white and muted text.
///
/// # Errors
///
/// This function fails with [`ReportError::Format`] if a table entry is not
/// valid hexadecimal notation.
pub fn audit<'a>(table: &[(&'a str, &str)]) -> Result<Vec<Check<'a>>, ReportError> {
    let statuses = table
        .iter()
        .map(|&(label, hex)| {
            hex.parse::<Rgb>()
                .map(|rgb| (label, rgb))
                .map_err(|source| ReportError::Format {
                    label: label.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut checks = Vec::with_capacity(5 * statuses.len());
    for section in Section::ALL {
        for &(status, background) in &statuses {
            section.check(status, background, &mut checks);
        }
    }

    Ok(checks)
}

// ====================================================================================================================
// Summary
// ====================================================================================================================

/// The number of passing checks for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub large_text: usize,
    pub normal_text: usize,
}

impl Tally {
    /// Count the checks belonging to the section.
    pub fn of(section: Section, checks: &[Check<'_>]) -> Self {
        checks
            .iter()
            .filter(|check| check.section == section)
            .fold(Self::default(), |mut tally, check| {
                tally.total += 1;
                tally.large_text += usize::from(check.passes(Threshold::LargeText));
                tally.normal_text += usize::from(check.passes(Threshold::NormalText));
                tally
            })
    }

    /// Get the number of passing checks for the threshold.
    pub fn passed(&self, threshold: Threshold) -> usize {
        match threshold {
            Threshold::LargeText => self.large_text,
            Threshold::NormalText => self.normal_text,
        }
    }
}

// ====================================================================================================================
// Rendering
// ====================================================================================================================

fn verdict(passes: bool) -> &'static str {
    if passes {
        "✓ PASS"
    } else {
        "✗ FAIL"
    }
}

fn write_heading<W: Write>(out: &mut W, section: Section) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "### {}", section.heading())?;
    writeln!(out, "{:-<1$}", "", WIDTH)?;
    for note in section.notes() {
        writeln!(out, "{}", note)?;
    }
    if !section.notes().is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

fn write_group<W: Write>(out: &mut W, group: &[Check<'_>]) -> std::io::Result<()> {
    let Some(first) = group.first() else {
        return Ok(());
    };

    let [r, g, b] = *first.background.as_ref();
    writeln!(
        out,
        "{:<20} {}: {} RGB({}, {}, {})",
        first.status,
        first.section.background_label(),
        first.background,
        r,
        g,
        b
    )?;

    for check in group {
        write!(
            out,
            "  {:<10} {} → Ratio: {:.2}:1",
            check.subject, check.foreground, check.ratio
        )?;
        for threshold in Threshold::ALL {
            write!(
                out,
                "  {} ({})",
                verdict(check.passes(threshold)),
                threshold.name()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out)
}

fn write_summary<W: Write>(out: &mut W, checks: &[Check<'_>]) -> std::io::Result<()> {
    writeln!(out, "{:=<1$}", "", WIDTH)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{:=<1$}", "", WIDTH)?;

    for section in Section::ALL {
        let tally = Tally::of(section, checks);
        write!(out, "{:<54}", section.heading())?;
        for threshold in Threshold::ALL {
            write!(
                out,
                "  {}/{} {}",
                tally.passed(threshold),
                tally.total,
                threshold.name()
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Check the status colors and write the report.
///
/// The report starts with a banner, continues with one section per
/// [`Section`], and ends with a summary of passing checks per section and
/// threshold. Each check shows the contrast ratio with two digits after the
/// decimal and verdicts for both [`Threshold`]s.
///
/// # Errors
///
/// This function fails with [`ReportError::Format`] if a table entry is not
/// valid hexadecimal notation and with [`ReportError::Io`] if writing fails.
/// Since all checks are computed before writing, a malformed entry results in
/// no output at all.
pub fn write_report<W: Write>(out: &mut W, table: &[(&str, &str)]) -> Result<(), ReportError> {
    let checks = audit(table)?;

    writeln!(out, "{:=<1$}", "", WIDTH)?;
    writeln!(out, "WCAG AA CONTRAST VERIFICATION - Is BVG Fucked Up?")?;
    writeln!(out, "{:=<1$}", "", WIDTH)?;

    let mut section = None;
    for group in checks.chunk_by(|c1, c2| c1.section == c2.section && c1.status == c2.status) {
        let Some(first) = group.first() else {
            continue;
        };
        if section != Some(first.section) {
            section = Some(first.section);
            write_heading(out, first.section)?;
        }
        write_group(out, group)?;
    }

    writeln!(out)?;
    write_summary(out, &checks)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{audit, write_report, Section, Tally, Threshold, STATUS_COLORS, WHITE};
    use crate::error::{ColorFormatError, ReportError};
    use crate::Rgb;

    #[test]
    fn test_threshold() {
        assert!(Threshold::LargeText.is_met_by(3.0), "3:1 meets large text");
        assert!(!Threshold::NormalText.is_met_by(3.0), "3:1 fails normal text");
        assert!(Threshold::NormalText.is_met_by(4.5), "4.5:1 meets normal text");
        assert!(!Threshold::LargeText.is_met_by(2.99), "2.99:1 fails large text");
    }

    #[test]
    fn test_audit() -> Result<(), ReportError> {
        let checks = audit(STATUS_COLORS)?;
        assert_eq!(checks.len(), 20, "checks per table");

        let sections = checks.iter().map(|c| c.section).collect::<Vec<_>>();
        let mut sorted = sections.clone();
        sorted.sort_by_key(|s| Section::ALL.iter().position(|t| t == s));
        assert_eq!(sections, sorted, "checks are grouped by section");

        // White text on green fails both thresholds.
        let green = checks[0];
        assert_eq!(green.section, Section::WhiteText, "first section");
        assert_eq!(green.status, "Normal (Green)", "first status");
        assert_eq!(green.foreground, WHITE, "white text");
        assert_eq!(green.background, Rgb::new(39, 174, 96), "green background");
        assert_eq!(format!("{:.2}", green.ratio), "2.87", "white on green");
        assert!(!green.passes(Threshold::LargeText), "green passes 3:1");
        assert!(!green.passes(Threshold::NormalText), "green passes 4.5:1");

        // White text on red passes both thresholds.
        let red = checks[2];
        assert_eq!(red.status, "Fucked (Red)", "third status");
        assert_eq!(format!("{:.2}", red.ratio), "5.44", "white on red");
        assert!(red.passes(Threshold::NormalText), "red fails 4.5:1");

        // Cards check white and muted text against the blended overlay.
        let card = checks
            .iter()
            .filter(|c| c.section == Section::CardText && c.status == "Fucked (Red)")
            .collect::<Vec<_>>();
        assert_eq!(card.len(), 2, "card checks per status");
        assert_eq!(card[0].background, Rgb::new(201, 86, 74), "card on red");
        assert_eq!(format!("{:.2}", card[0].ratio), "4.27", "white on red card");
        assert_eq!(format!("{:.2}", card[1].ratio), "3.07", "muted on red card");
        Ok(())
    }

    #[test]
    fn test_tally() -> Result<(), ReportError> {
        let checks = audit(STATUS_COLORS)?;

        let white = Tally::of(Section::WhiteText, &checks);
        assert_eq!(white.total, 4, "white text checks");
        assert_eq!(white.passed(Threshold::LargeText), 2, "red and gray");
        assert_eq!(white.passed(Threshold::NormalText), 1, "red only");

        let muted = Tally::of(Section::MutedText, &checks);
        assert_eq!(muted.passed(Threshold::LargeText), 1, "red only");
        assert_eq!(muted.passed(Threshold::NormalText), 0, "none");

        let card = Tally::of(Section::CardText, &checks);
        assert_eq!(card.total, 8, "card checks");
        assert_eq!(card.passed(Threshold::LargeText), 2, "red white and muted");
        assert_eq!(card.passed(Threshold::NormalText), 0, "none");

        let focus = Tally::of(Section::FocusIndicator, &checks);
        assert_eq!(focus.passed(Threshold::LargeText), 0, "none");
        Ok(())
    }

    #[test]
    fn test_write_report() -> Result<(), ReportError> {
        let mut out = Vec::new();
        write_report(&mut out, STATUS_COLORS)?;
        let text = String::from_utf8_lossy(&out);

        for section in Section::ALL {
            assert!(
                text.contains(section.heading()),
                "missing heading {}",
                section.heading()
            );
        }
        for (label, hex) in STATUS_COLORS {
            assert!(text.contains(label), "missing status {}", label);
            assert!(text.contains(hex), "missing color {}", hex);
        }

        assert!(text.contains("2.87:1"), "white on green ratio");
        assert!(text.contains("blur(4px)"), "blur caveat");
        assert!(text.contains("SUMMARY"), "summary");
        assert!(text.contains("2/4 ≥3:1"), "white text tally");

        let line = text
            .lines()
            .find(|l| l.contains("White text") && l.contains("2.87:1"))
            .unwrap_or_default();
        assert!(
            line.contains("✗ FAIL (≥3:1)") && line.contains("✗ FAIL (≥4.5:1)"),
            "white on green verdicts: {}",
            line
        );
        Ok(())
    }

    #[test]
    fn test_malformed_table() {
        let mut out = Vec::new();
        let result = write_report(&mut out, &[("Fine", "#ffffff"), ("Broken", "#12345")]);

        match result {
            Err(ReportError::Format { label, source }) => {
                assert_eq!(label, "Broken", "label of malformed entry");
                assert_eq!(source, ColorFormatError::UnexpectedLength, "cause");
            }
            other => panic!("expected format error, got {:?}", other),
        }
        assert!(out.is_empty(), "report written despite error");
    }
}
