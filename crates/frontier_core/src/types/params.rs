//! Portfolio parameters and their identities.
//!
//! Six scalars drive the frontier: the correlation between the two assets,
//! their expected returns and standard deviations, and the share of the
//! portfolio held in asset A.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParamError;
use super::range::ValueRange;

/// Default correlation between asset A and asset B.
pub const DEFAULT_CORRELATION: f64 = 0.0;
/// Default expected return of asset A.
pub const DEFAULT_EXPECTED_RETURN_A: f64 = 0.16;
/// Default expected return of asset B.
pub const DEFAULT_EXPECTED_RETURN_B: f64 = 0.06;
/// Default standard deviation of asset A.
pub const DEFAULT_STD_DEV_A: f64 = 0.3;
/// Default standard deviation of asset B.
pub const DEFAULT_STD_DEV_B: f64 = 0.2;
/// Default share of the portfolio held in asset A.
pub const DEFAULT_SHARE_A: f64 = 0.5;

/// Domain of the correlation coefficient.
pub const CORRELATION_RANGE: ValueRange = ValueRange::new(-1.0, 1.0);
/// Domain of either expected return.
pub const EXPECTED_RETURN_RANGE: ValueRange = ValueRange::new(0.0, 0.3);
/// Domain of either standard deviation.
pub const STD_DEV_RANGE: ValueRange = ValueRange::new(0.0, 0.6);
/// Domain of the share held in asset A.
pub const SHARE_RANGE: ValueRange = ValueRange::new(0.0, 1.0);

/// The full set of portfolio parameters.
///
/// All fields are plain fractions (`0.16` means 16%).
///
/// # Examples
/// ```
/// use frontier_core::types::{ParamName, Parameters};
///
/// let mut params = Parameters::default();
/// assert_eq!(params.get(ParamName::StdDevA), 0.3);
///
/// params.set(ParamName::ShareA, 0.25);
/// assert_eq!(params.share_b(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameters {
    /// Correlation between the two assets, in `[-1, 1]`
    pub correlation: f64,
    /// Expected return of asset A
    pub expected_return_a: f64,
    /// Expected return of asset B
    pub expected_return_b: f64,
    /// Standard deviation of asset A
    pub std_dev_a: f64,
    /// Standard deviation of asset B
    pub std_dev_b: f64,
    /// Fraction of the portfolio held in asset A
    pub share_a: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            correlation: DEFAULT_CORRELATION,
            expected_return_a: DEFAULT_EXPECTED_RETURN_A,
            expected_return_b: DEFAULT_EXPECTED_RETURN_B,
            std_dev_a: DEFAULT_STD_DEV_A,
            std_dev_b: DEFAULT_STD_DEV_B,
            share_a: DEFAULT_SHARE_A,
        }
    }
}

impl Parameters {
    /// Reads a single parameter by identity.
    pub fn get(&self, name: ParamName) -> f64 {
        match name {
            ParamName::Correlation => self.correlation,
            ParamName::ExpectedReturnA => self.expected_return_a,
            ParamName::ExpectedReturnB => self.expected_return_b,
            ParamName::StdDevA => self.std_dev_a,
            ParamName::StdDevB => self.std_dev_b,
            ParamName::ShareA => self.share_a,
        }
    }

    /// Writes a single parameter by identity, without any domain check.
    pub fn set(&mut self, name: ParamName, value: f64) {
        let slot = match name {
            ParamName::Correlation => &mut self.correlation,
            ParamName::ExpectedReturnA => &mut self.expected_return_a,
            ParamName::ExpectedReturnB => &mut self.expected_return_b,
            ParamName::StdDevA => &mut self.std_dev_a,
            ParamName::StdDevB => &mut self.std_dev_b,
            ParamName::ShareA => &mut self.share_a,
        };
        *slot = value;
    }

    /// Fraction of the portfolio held in asset B.
    #[inline]
    pub fn share_b(&self) -> f64 {
        1.0 - self.share_a
    }

    /// Returns a copy with every field coerced into its domain.
    pub fn coerced(mut self) -> Self {
        for name in ParamName::ALL {
            let value = name.coerce(self.get(name));
            self.set(name, value);
        }
        self
    }
}

/// Identity of a portfolio parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamName {
    /// Correlation between the two assets
    Correlation,
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

impl ParamName {
    /// Every parameter, in declaration order.
    pub const ALL: [ParamName; 6] = [
        ParamName::Correlation,
        ParamName::ExpectedReturnA,
        ParamName::ExpectedReturnB,
        ParamName::StdDevA,
        ParamName::StdDevB,
        ParamName::ShareA,
    ];

    /// Canonical camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamName::Correlation => "correlation",
            ParamName::ExpectedReturnA => "expectedReturnA",
            ParamName::ExpectedReturnB => "expectedReturnB",
            ParamName::StdDevA => "stdDevA",
            ParamName::StdDevB => "stdDevB",
            ParamName::ShareA => "shareA",
        }
    }

    /// Valid domain of the parameter.
    pub fn domain(&self) -> ValueRange {
        match self {
            ParamName::Correlation => CORRELATION_RANGE,
            ParamName::ExpectedReturnA | ParamName::ExpectedReturnB => EXPECTED_RETURN_RANGE,
            ParamName::StdDevA | ParamName::StdDevB => STD_DEV_RANGE,
            ParamName::ShareA => SHARE_RANGE,
        }
    }

    /// Default value restored on reset.
    pub fn default_value(&self) -> f64 {
        Parameters::default().get(*self)
    }

    /// Maps `value` into the domain: NaN becomes zero, then out-of-range
    /// values are clamped.
    pub fn coerce(&self, value: f64) -> f64 {
        let value = if value.is_nan() { 0.0 } else { value };
        self.domain().clamp(value).0
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cases a name and strips `_` / `-` so that `stdDevA`, `std_dev_a`
/// and `std-dev-a` compare equal.
pub(crate) fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ParamName {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_name(s.trim());
        ParamName::ALL
            .into_iter()
            .find(|name| fold_name(name.as_str()) == folded)
            .ok_or_else(|| ParamError::UnknownParameter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Parameters::default();
        assert_eq!(params.correlation, 0.0);
        assert_eq!(params.share_a, 0.5);
        assert_eq!(params.expected_return_a, 0.16);
        assert_eq!(params.expected_return_b, 0.06);
        assert_eq!(params.std_dev_a, 0.3);
        assert_eq!(params.std_dev_b, 0.2);
    }

    #[test]
    fn test_get_set_round_trip_per_name() {
        let mut params = Parameters::default();
        for (i, name) in ParamName::ALL.into_iter().enumerate() {
            let value = 0.01 * (i + 1) as f64;
            params.set(name, value);
            assert_eq!(params.get(name), value);
        }
    }

    #[test]
    fn test_name_parsing_accepts_aliases() {
        assert_eq!("stdDevA".parse::<ParamName>().unwrap(), ParamName::StdDevA);
        assert_eq!("std_dev_a".parse::<ParamName>().unwrap(), ParamName::StdDevA);
        assert_eq!(
            "EXPECTED-RETURN-B".parse::<ParamName>().unwrap(),
            ParamName::ExpectedReturnB
        );
        assert_eq!(" shareA ".parse::<ParamName>().unwrap(), ParamName::ShareA);
        assert_eq!(
            "volatility".parse::<ParamName>(),
            Err(ParamError::UnknownParameter("volatility".to_string()))
        );
    }

    #[test]
    fn test_coerce() {
        assert_eq!(ParamName::Correlation.coerce(1.5), 1.0);
        assert_eq!(ParamName::Correlation.coerce(-2.0), -1.0);
        assert_eq!(ParamName::StdDevB.coerce(f64::NAN), 0.0);
        assert_eq!(ParamName::ShareA.coerce(0.4), 0.4);
    }

    #[test]
    fn test_coerced_parameters() {
        let params = Parameters {
            correlation: 3.0,
            std_dev_a: 0.9,
            ..Parameters::default()
        }
        .coerced();
        assert_eq!(params.correlation, 1.0);
        assert_eq!(params.std_dev_a, 0.6);
        assert_eq!(params.std_dev_b, DEFAULT_STD_DEV_B);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&Parameters::default()).unwrap();
        assert!(json.contains("\"expectedReturnA\":0.16"));
        assert!(json.contains("\"shareA\":0.5"));

        let partial: Parameters = serde_json::from_str(r#"{"stdDevA":0.45}"#).unwrap();
        assert_eq!(partial.std_dev_a, 0.45);
        assert_eq!(partial.share_a, DEFAULT_SHARE_A);
    }
}
