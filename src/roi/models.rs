use serde::{Deserialize, Serialize};
use std::fmt;

/// Months needed to recover the implementation cost.
///
/// `Never` marks initiatives whose recurring cost eats the whole benefit.
/// It serializes as `null` so it can never be mistaken for a number.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum PaybackPeriod {
    Months(f64),
    Never,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Months(m) => Some(*m),
            PaybackPeriod::Never => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, PaybackPeriod::Months(_))
    }
}

impl From<Option<f64>> for PaybackPeriod {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(m) if m.is_finite() => PaybackPeriod::Months(m),
            _ => PaybackPeriod::Never,
        }
    }
}

impl From<PaybackPeriod> for Option<f64> {
    fn from(period: PaybackPeriod) -> Self {
        period.months()
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Months(m) => write!(f, "{m:.1} months"),
            PaybackPeriod::Never => f.write_str("N/A"),
        }
    }
}

/// Investment metrics for one use case. Always derived, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    pub use_case_id: String,
    #[serde(rename = "basicROI")]
    pub basic_roi: f64,
    pub npv: f64,
    pub payback_period: PaybackPeriod,
    pub risk_adjusted_value: f64,
}

impl RoiMetrics {
    pub fn summary(&self) -> String {
        format!(
            "ROI: {:.2}% | NPV: {:.2} | Payback: {} | Risk-adjusted: {:.2}",
            self.basic_roi, self.npv, self.payback_period, self.risk_adjusted_value
        )
    }
}
