//! Use-case records and the enumerations they carry.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name given to proposed records that arrive without one.
pub const UNNAMED_USE_CASE: &str = "Unnamed Use Case";

/// Effort or impact score on a 1-5 scale.
///
/// Values outside the scale are clamped, never rejected. Deserialization goes
/// through the same clamp, so a stored record can never hold an out-of-range
/// score.
///
/// ```rust
/// use roicanvas::core::types::Score1To5;
///
/// assert_eq!(Score1To5::new(9).value(), 5);
/// assert_eq!(Score1To5::new(-2).value(), 1);
/// assert_eq!(Score1To5::from(3.6).value(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub struct Score1To5(u8);

impl Score1To5 {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a new score, clamping to [1, 5].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Get the raw score value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Score1To5 {
    fn default() -> Self {
        Self(3)
    }
}

impl From<f64> for Score1To5 {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        // `as` saturates on overflow, the clamp does the rest
        Self::new(value.round() as i64)
    }
}

impl From<Score1To5> for u8 {
    fn from(score: Score1To5) -> Self {
        score.0
    }
}

impl fmt::Display for Score1To5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery risk of an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    /// Lenient parse used for any external text.
    ///
    /// Letters are compared case-insensitively with everything else stripped,
    /// so "medium-high" and "Medium/High" both land on a blend. Blends and
    /// unknown text resolve to `Medium`.
    pub fn parse_lenient(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            "medium" | "lowmedium" | "mediumlow" | "mediumhigh" | "highmedium" => {
                RiskLevel::Medium
            }
            _ => RiskLevel::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl From<String> for RiskLevel {
    fn from(text: String) -> Self {
        Self::parse_lenient(&text)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery horizon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Timeframe {
    #[serde(rename = "Q1")]
    Q1,
    #[default]
    #[serde(rename = "1-Year")]
    OneYear,
    #[serde(rename = "3-Year")]
    ThreeYear,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Q1, Timeframe::OneYear, Timeframe::ThreeYear];

    /// Lenient parse used for any external text; unknown values become `OneYear`.
    pub fn parse_lenient(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "q1" => Timeframe::Q1,
            "1year" | "oneyear" => Timeframe::OneYear,
            "3year" | "threeyear" => Timeframe::ThreeYear,
            _ => Timeframe::OneYear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Q1 => "Q1",
            Timeframe::OneYear => "1-Year",
            Timeframe::ThreeYear => "3-Year",
        }
    }

    /// Q1 and 1-Year initiatives count as near-term.
    pub fn is_near_term(&self) -> bool {
        matches!(self, Timeframe::Q1 | Timeframe::OneYear)
    }
}

impl From<String> for Timeframe {
    fn from(text: String) -> Self {
        Self::parse_lenient(&text)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate AI initiative with its cost, benefit and risk attributes.
///
/// Money fields are annual dollars except `implementation_cost`, which is
/// one-time. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UseCaseRecord {
    pub id: String,
    pub name: String,
    pub problem_statement: String,
    pub kpis: Vec<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub hard_benefits: f64,
    pub soft_benefits: Vec<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub implementation_cost: f64,
    #[serde(deserialize_with = "deserialize_money")]
    pub annual_cost: f64,
    pub effort_score: Score1To5,
    pub impact_score: Score1To5,
    pub risk_level: RiskLevel,
    pub dependencies: Vec<String>,
    pub timeframe: Timeframe,
    pub selected: bool,
}

impl Default for UseCaseRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: UNNAMED_USE_CASE.to_string(),
            problem_statement: String::new(),
            kpis: Vec::new(),
            hard_benefits: 0.0,
            soft_benefits: Vec::new(),
            implementation_cost: 0.0,
            annual_cost: 0.0,
            effort_score: Score1To5::default(),
            impact_score: Score1To5::default(),
            risk_level: RiskLevel::default(),
            dependencies: Vec::new(),
            timeframe: Timeframe::default(),
            selected: true,
        }
    }
}

impl UseCaseRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_costs(mut self, implementation_cost: f64, annual_cost: f64) -> Self {
        self.implementation_cost = non_negative(implementation_cost);
        self.annual_cost = non_negative(annual_cost);
        self
    }

    pub fn with_hard_benefits(mut self, hard_benefits: f64) -> Self {
        self.hard_benefits = non_negative(hard_benefits);
        self
    }

    pub fn with_scores(mut self, effort: i64, impact: i64) -> Self {
        self.effort_score = Score1To5::new(effort);
        self.impact_score = Score1To5::new(impact);
        self
    }

    pub fn with_risk(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_problem_statement(mut self, problem_statement: impl Into<String>) -> Self {
        self.problem_statement = problem_statement.into();
        self
    }

    pub fn with_kpis<I, S>(mut self, kpis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kpis = kpis.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_soft_benefits<I, S>(mut self, soft_benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.soft_benefits = soft_benefits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// One-time plus one year of recurring cost.
    pub fn total_cost(&self) -> f64 {
        self.implementation_cost + self.annual_cost
    }

    /// Key used when comparing names across a collection.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Floor a money amount at zero and cap it at `f64::MAX`; NaN counts as missing.
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f64::MAX)
    }
}

fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(non_negative)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_always_in_bounds(value in -1000i64..1000) {
            let score = Score1To5::new(value);
            prop_assert!((Score1To5::MIN..=Score1To5::MAX).contains(&score.value()));
        }

        #[test]
        fn fractional_score_always_in_bounds(value in -50.0..50.0f64) {
            let score = Score1To5::from(value);
            prop_assert!((1..=5).contains(&score.value()));
        }
    }
}
