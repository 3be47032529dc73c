//! The exportable canvas document and its assembler.
//!
//! A [`CanvasDocument`] is rebuilt wholesale from the selected use cases
//! whenever its inputs change; it is never edited in place.

pub mod assembler;

pub use assembler::{assemble_canvas, generate_canvas, CanvasContext, DEFAULT_DESIGNED_BY};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{RiskLevel, Timeframe};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDocument {
    pub header: CanvasHeader,
    pub objectives: Objectives,
    pub inputs: Inputs,
    pub impacts: Impacts,
    pub timeline: Vec<TimelineEntry>,
    pub risks: Vec<RiskEntry>,
    pub capabilities: Capabilities,
    pub costs: Costs,
    pub benefits: Benefits,
    #[serde(rename = "portfolioROI")]
    pub portfolio_roi: PortfolioRoi,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasHeader {
    pub canvas_title: String,
    pub name: String,
    pub designed_by: String,
    pub designed_for: String,
    pub date: NaiveDate,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objectives {
    pub primary_goal: String,
    pub strategic_focus: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub resources: Vec<String>,
    pub personnel: Vec<String>,
    pub external_support: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impacts {
    pub hard_benefits: Vec<String>,
    pub soft_benefits: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub ai_initiative: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub milestones: Vec<Milestone>,
    pub timeframe: Timeframe,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub name: String,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub skills_needed: Vec<String>,
    pub technology: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    pub near_term: f64,
    pub long_term: f64,
    pub annual_maintenance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    pub near_term: f64,
    pub long_term: f64,
    pub soft_benefits: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRoi {
    #[serde(rename = "nearTermROIPercent")]
    pub near_term_roi_percent: f64,
    #[serde(rename = "longTermROIPercent")]
    pub long_term_roi_percent: f64,
    pub portfolio_note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub credit_line: String,
}
