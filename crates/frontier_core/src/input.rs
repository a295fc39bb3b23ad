//! Free-text input normalisation.
//!
//! Users type percentages in whatever form they like: `"16"`, `"16%"`,
//! `"0.16"`, `" 16 %"`. [`normalize`] turns any of those into a fraction,
//! clamps it into the field's range, and reports whether a bound was hit.
//!
//! Nothing here fails. Unparsable text reads as zero and out-of-range values
//! are clamped; a clamp is reported back so the caller can correct the
//! display and announce the adjustment once the current turn has finished.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::params::{fold_name, EXPECTED_RETURN_RANGE, SHARE_RANGE, STD_DEV_RANGE};
use crate::types::{ClampDirection, ParamError, ParamName, ValueRange};

/// Editable input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Expected return of asset A
    ExpectedReturnA,
    /// Expected return of asset B
    ExpectedReturnB,
    /// Standard deviation of asset A
    StdDevA,
    /// Standard deviation of asset B
    StdDevB,
    /// Share of the portfolio in asset A
    ShareA,
}

impl FieldKind {
    /// Every field, in display order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::ExpectedReturnA,
        FieldKind::ExpectedReturnB,
        FieldKind::StdDevA,
        FieldKind::StdDevB,
        FieldKind::ShareA,
    ];

    /// Parameter the field edits.
    pub fn param(&self) -> ParamName {
        match self {
            FieldKind::ExpectedReturnA => ParamName::ExpectedReturnA,
            FieldKind::ExpectedReturnB => ParamName::ExpectedReturnB,
            FieldKind::StdDevA => ParamName::StdDevA,
            FieldKind::StdDevB => ParamName::StdDevB,
            FieldKind::ShareA => ParamName::ShareA,
        }
    }

    /// Field editing `param`, if the parameter has an input field.
    pub fn for_param(param: ParamName) -> Option<Self> {
        FieldKind::ALL.into_iter().find(|field| field.param() == param)
    }

    /// Accepted range of normalised values.
    pub fn range(&self) -> ValueRange {
        match self {
            FieldKind::ExpectedReturnA | FieldKind::ExpectedReturnB => EXPECTED_RETURN_RANGE,
            FieldKind::StdDevA | FieldKind::StdDevB => STD_DEV_RANGE,
            FieldKind::ShareA => SHARE_RANGE,
        }
    }

    /// Human-readable name used in announcements.
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::ExpectedReturnA => "Expected Return A",
            FieldKind::ExpectedReturnB => "Expected Return B",
            FieldKind::StdDevA => "Standard Deviation A",
            FieldKind::StdDevB => "Standard Deviation B",
            FieldKind::ShareA => "Share A",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param().as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_name(s.trim());
        FieldKind::ALL
            .into_iter()
            .find(|field| fold_name(field.param().as_str()) == folded)
            .ok_or_else(|| ParamError::UnknownField(s.to_string()))
    }
}

/// Result of normalising one raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    /// Parsed, scaled and clamped value
    pub value: f64,
    /// Whether the value had to be clamped
    pub was_clamped: bool,
    /// Which bound was hit, if any
    pub clamp_direction: ClampDirection,
}

impl NormalizedInput {
    /// Text that replaces the raw input once a clamp has been applied,
    /// e.g. `"30.0%"`.
    pub fn display_text(&self) -> String {
        format_percent(self.value, 1)
    }

    /// Accessible announcement describing the clamp, if one happened.
    ///
    /// # Examples
    /// ```
    /// use frontier_core::input::{normalize, FieldKind};
    ///
    /// let input = normalize("150", FieldKind::ExpectedReturnA);
    /// assert_eq!(
    ///     input.announcement(FieldKind::ExpectedReturnA).as_deref(),
    ///     Some("Expected Return A adjusted to maximum value 30%")
    /// );
    /// ```
    pub fn announcement(&self, field: FieldKind) -> Option<String> {
        let (label, bound) = match self.clamp_direction {
            ClampDirection::Min => ("minimum", field.range().min),
            ClampDirection::Max => ("maximum", field.range().max),
            ClampDirection::None => return None,
        };
        Some(format!(
            "{} adjusted to {} value {}",
            field.display_name(),
            label,
            format_percent(bound, 0)
        ))
    }
}

/// Parses raw text into a validated, range-clamped fraction.
///
/// 1. Every character except ASCII digits, `.` and `-` is dropped.
/// 2. The remainder is parsed; anything unparsable (including the empty
///    string) reads as `0`.
/// 3. If the raw text contained `%`, or the magnitude exceeds 1, the value is
///    divided by 100. Every field holds a fraction no larger than 1, so a
///    bare `"50"` means 50%.
/// 4. The value is clamped into the field's range.
///
/// # Examples
/// ```
/// use frontier_core::input::{normalize, FieldKind};
/// use frontier_core::types::ClampDirection;
///
/// let input = normalize("50%", FieldKind::ShareA);
/// assert_eq!(input.value, 0.5);
/// assert!(!input.was_clamped);
///
/// let input = normalize("abc", FieldKind::StdDevA);
/// assert_eq!(input.value, 0.0);
/// assert_eq!(input.clamp_direction, ClampDirection::None);
/// ```
pub fn normalize(raw: &str, field: FieldKind) -> NormalizedInput {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let mut value = match cleaned.parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    };

    if raw.contains('%') || value.abs() > 1.0 {
        value /= 100.0;
    }

    let (value, clamp_direction) = field.range().clamp(value);
    NormalizedInput {
        // folds -0.0 into +0.0
        value: value + 0.0,
        was_clamped: clamp_direction != ClampDirection::None,
        clamp_direction,
    }
}

/// Formats a fraction as a percentage with `decimals` places.
///
/// # Examples
/// ```
/// use frontier_core::input::format_percent;
///
/// assert_eq!(format_percent(0.3, 1), "30.0%");
/// assert_eq!(format_percent(0.6, 0), "60%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}
