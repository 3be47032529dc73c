//! Builds a [`CanvasDocument`] from the selected use cases.
//!
//! Several sections are fixed boilerplate (personnel, external support,
//! capabilities) and do not depend on the initiatives at all. Resources pick
//! up dependencies through a plain substring match on "data" / "platform";
//! that heuristic is deliberate and should only change together with a
//! structured dependency type.

use chrono::{Days, NaiveDate, Utc};
use std::collections::HashSet;

use super::{
    Benefits, CanvasDocument, CanvasHeader, Capabilities, Costs, Footer, Impacts, Inputs,
    Milestone, Objectives, PortfolioRoi, RiskEntry, TimelineEntry,
};
use crate::core::{saturate, RiskLevel, Timeframe, UseCaseRecord};
use crate::output::formatters::format_currency;
use crate::portfolio::calculate_portfolio_metrics;

pub const CANVAS_TITLE: &str = "AI ROI & Roadmap Canvas";
pub const CANVAS_VERSION: &str = "1.0";
pub const DEFAULT_DESIGNED_BY: &str = "AI ROI Canvas Agent";

const BASELINE_STRATEGIC_FOCUS: [&str; 3] = [
    "Automate repetitive processes",
    "Enhance decision-making with data insights",
    "Improve customer experience",
];
const MAX_KPI_FOCUS: usize = 3;

const BASELINE_RESOURCES: [&str; 3] = [
    "AI/ML development platform",
    "Cloud infrastructure",
    "Data storage and processing",
];
const RESOURCE_KEYWORDS: [&str; 2] = ["data", "platform"];

const PERSONNEL: [&str; 4] = [
    "AI/ML Engineers",
    "Data Scientists",
    "Project Managers",
    "Business Analysts",
];

const EXTERNAL_SUPPORT: [&str; 3] = [
    "AI consulting partners",
    "Cloud service providers",
    "Training and certification programs",
];

const SKILLS_NEEDED: [&str; 6] = [
    "Machine Learning",
    "Natural Language Processing",
    "Computer Vision",
    "Data Engineering",
    "Cloud Architecture",
    "MLOps",
];

const TECHNOLOGY: [&str; 5] = [
    "Python/TensorFlow/PyTorch",
    "Cloud AI Services (AWS/Azure/GCP)",
    "Data Pipeline Tools",
    "Model Monitoring Systems",
    "API Development",
];

/// Fixed checkpoint inside a timeline window, as a day offset from today.
struct MilestoneTemplate {
    name: &'static str,
    offset_days: u64,
    description: &'static str,
}

const fn milestone(name: &'static str, offset_days: u64, description: &'static str) -> MilestoneTemplate {
    MilestoneTemplate {
        name,
        offset_days,
        description,
    }
}

const Q1_MILESTONES: [MilestoneTemplate; 3] = [
    milestone("Kickoff", 0, "Project initiation"),
    milestone("MVP", 60, "Minimum viable product"),
    milestone("Go-Live", 90, "Production deployment"),
];

const ONE_YEAR_MILESTONES: [MilestoneTemplate; 3] = [
    milestone("Planning", 90, "Detailed planning"),
    milestone("Development", 200, "Core development"),
    milestone("Launch", 365, "Full launch"),
];

const THREE_YEAR_MILESTONES: [MilestoneTemplate; 3] = [
    milestone("Foundation", 365, "Build foundation"),
    milestone("Scale", 730, "Scale operations"),
    milestone("Optimize", 1095, "Full optimization"),
];

/// Start and end offsets (days from today) of each timeframe window.
fn timeline_window(timeframe: Timeframe) -> (u64, u64) {
    match timeframe {
        Timeframe::Q1 => (0, 90),
        Timeframe::OneYear => (90, 365),
        Timeframe::ThreeYear => (365, 1095),
    }
}

fn milestone_templates(timeframe: Timeframe) -> &'static [MilestoneTemplate; 3] {
    match timeframe {
        Timeframe::Q1 => &Q1_MILESTONES,
        Timeframe::OneYear => &ONE_YEAR_MILESTONES,
        Timeframe::ThreeYear => &THREE_YEAR_MILESTONES,
    }
}

/// Company-level inputs that are not part of any use case.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasContext {
    pub company_name: String,
    /// Carried for callers; the document does not render it.
    pub industry: String,
    pub designed_by: String,
}

impl CanvasContext {
    pub fn new(company_name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            designed_by: DEFAULT_DESIGNED_BY.to_string(),
        }
    }

    pub fn with_designed_by(mut self, designed_by: impl Into<String>) -> Self {
        self.designed_by = designed_by.into();
        self
    }
}

/// Assemble the canvas as of today's UTC date.
pub fn generate_canvas(use_cases: &[UseCaseRecord], context: &CanvasContext) -> CanvasDocument {
    assemble_canvas(use_cases, context, Utc::now().date_naive())
}

/// Assemble the canvas for the selected records in `use_cases`.
///
/// `today` is the only input besides the records and context, so the same
/// arguments always produce the same document.
pub fn assemble_canvas(
    use_cases: &[UseCaseRecord],
    context: &CanvasContext,
    today: NaiveDate,
) -> CanvasDocument {
    let selected: Vec<&UseCaseRecord> = use_cases.iter().filter(|uc| uc.selected).collect();
    let metrics = calculate_portfolio_metrics(use_cases);

    let all_kpis = unique_strings(selected.iter().flat_map(|uc| uc.kpis.iter()));
    let all_soft_benefits = unique_strings(selected.iter().flat_map(|uc| uc.soft_benefits.iter()));
    let all_dependencies = unique_strings(selected.iter().flat_map(|uc| uc.dependencies.iter()));

    let selected_slice: &[&UseCaseRecord] = &selected;
    let timeline = Timeframe::ALL
        .iter()
        .flat_map(move |&timeframe| in_bucket(selected_slice, timeframe))
        .map(|uc| timeline_entry(uc, today))
        .collect();

    let date = today.format("%Y-%m-%d").to_string();

    CanvasDocument {
        header: CanvasHeader {
            canvas_title: CANVAS_TITLE.to_string(),
            name: format!("{} AI Strategy", context.company_name),
            designed_by: context.designed_by.clone(),
            designed_for: context.company_name.clone(),
            date: today,
            version: CANVAS_VERSION.to_string(),
        },
        objectives: Objectives {
            primary_goal: format!(
                "Transform {} operations through strategic AI adoption",
                context.company_name
            ),
            strategic_focus: owned(&BASELINE_STRATEGIC_FOCUS)
                .into_iter()
                .chain(all_kpis.into_iter().take(MAX_KPI_FOCUS))
                .collect(),
        },
        inputs: Inputs {
            resources: owned(&BASELINE_RESOURCES)
                .into_iter()
                .chain(
                    all_dependencies
                        .into_iter()
                        .filter(|d| is_resource_dependency(d)),
                )
                .collect(),
            personnel: owned(&PERSONNEL),
            external_support: owned(&EXTERNAL_SUPPORT),
        },
        impacts: Impacts {
            hard_benefits: selected
                .iter()
                .map(|uc| format!("{}: {}/year", uc.name, format_currency(uc.hard_benefits)))
                .collect(),
            soft_benefits: all_soft_benefits.clone(),
        },
        timeline,
        risks: selected
            .iter()
            .filter(|uc| uc.risk_level != RiskLevel::Low)
            .map(|uc| risk_entry(uc))
            .collect(),
        capabilities: Capabilities {
            skills_needed: owned(&SKILLS_NEEDED),
            technology: owned(&TECHNOLOGY),
        },
        costs: Costs {
            near_term: total(near_term(&selected).map(|uc| uc.implementation_cost)),
            long_term: total(long_term(&selected).map(|uc| uc.implementation_cost)),
            annual_maintenance: total(selected.iter().map(|uc| uc.annual_cost)),
        },
        benefits: Benefits {
            near_term: total(near_term(&selected).map(|uc| uc.hard_benefits)),
            long_term: total(long_term(&selected).map(|uc| uc.hard_benefits)),
            soft_benefits: all_soft_benefits,
        },
        portfolio_roi: PortfolioRoi {
            near_term_roi_percent: metrics.near_term_roi,
            long_term_roi_percent: metrics.long_term_roi,
            portfolio_note: format!(
                "Portfolio of {} AI initiatives with total NPV of {} and average payback of {:.1} months.",
                selected.len(),
                format_currency(metrics.portfolio_npv),
                metrics.average_payback
            ),
        },
        footer: Footer {
            credit_line: format!("Generated by {DEFAULT_DESIGNED_BY} | {date}"),
        },
    }
}

fn in_bucket<'a>(
    selected: &'a [&'a UseCaseRecord],
    timeframe: Timeframe,
) -> impl Iterator<Item = &'a UseCaseRecord> + 'a {
    selected
        .iter()
        .copied()
        .filter(move |uc| uc.timeframe == timeframe)
}

/// Q1 only; 1-Year work is budgeted with the long-term bucket.
fn near_term<'a>(selected: &'a [&'a UseCaseRecord]) -> impl Iterator<Item = &'a UseCaseRecord> + 'a {
    in_bucket(selected, Timeframe::Q1)
}

fn long_term<'a>(selected: &'a [&'a UseCaseRecord]) -> impl Iterator<Item = &'a UseCaseRecord> + 'a {
    in_bucket(selected, Timeframe::OneYear).chain(in_bucket(selected, Timeframe::ThreeYear))
}

/// Sum that saturates at `f64::MAX` instead of overflowing to infinity.
fn total(amounts: impl Iterator<Item = f64>) -> f64 {
    saturate(amounts.sum())
}

fn timeline_entry(use_case: &UseCaseRecord, today: NaiveDate) -> TimelineEntry {
    let (start, end) = timeline_window(use_case.timeframe);

    TimelineEntry {
        ai_initiative: use_case.name.clone(),
        start_date: offset(today, start),
        end_date: offset(today, end),
        milestones: milestone_templates(use_case.timeframe)
            .iter()
            .map(|m| Milestone {
                name: m.name.to_string(),
                date: offset(today, m.offset_days),
                description: m.description.to_string(),
            })
            .collect(),
        timeframe: use_case.timeframe,
    }
}

fn risk_entry(use_case: &UseCaseRecord) -> RiskEntry {
    RiskEntry {
        name: format!("{} Implementation Risk", use_case.name),
        likelihood: use_case.risk_level,
        impact: RiskLevel::Medium,
        mitigation: format!(
            "Phased rollout, pilot testing, and change management for {}",
            use_case.name
        ),
    }
}

/// Dependencies that read like data or platform prerequisites.
fn is_resource_dependency(dependency: &str) -> bool {
    let lower = dependency.to_lowercase();
    RESOURCE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

// Saturates at the calendar maximum; only reachable with absurd dates
fn offset(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Deduplicate while keeping first-seen order.
fn unique_strings<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&'a String> = HashSet::new();
    items.filter(|item| seen.insert(*item)).cloned().collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
