//! Candidate-record ingestion from model output.
//!
//! The conversational layer hands over raw assistant text. Structured data is
//! expected inside fenced ```json blocks; blocks may carry a `company` object
//! and/or a `useCases` array. Anything that does not parse is skipped, never
//! raised: the caller only ever sees already-normalized records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::core::{non_negative, RiskLevel, Score1To5, Timeframe, UseCaseRecord, UNNAMED_USE_CASE};

static FENCED_JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)```").unwrap());

static INLINE_USE_CASES_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{\s*"useCases"\s*:\s*\["#).unwrap());

static COMPANY_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:I'm|I am|we're|we are)\s+(?:the\s+)?(?:CTO|CEO|VP|Director|Manager|Head)?\s*(?:at|of|for)\s+([A-Za-z0-9\s]+?)(?:,|\.|\s+a\s|\s+in\s)",
    )
    .unwrap()
});

static INDUSTRY_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:in the|industry[:\s]+|sector[:\s]+)\s*([A-Za-z][A-Za-z\s]{2,}?)(?:\s+industry|\s+sector|\s+space|\.|,)",
    )
    .unwrap()
});

static BUDGET_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)budget[^\d]*\$?([\d,.]+)\s*(million|m|k|thousand)?").unwrap()
});

const INDUSTRY_STOP_WORDS: [&str; 5] = ["the", "a", "an", "and", "or"];

/// A use case as proposed by the model, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUseCase {
    pub name: Option<String>,
    pub problem_statement: Option<String>,
    pub kpis: Option<Vec<String>>,
    pub hard_benefits: Option<f64>,
    pub soft_benefits: Option<Vec<String>>,
    pub implementation_cost: Option<f64>,
    pub annual_cost: Option<f64>,
    pub effort_score: Option<f64>,
    pub impact_score: Option<f64>,
    pub risk_level: Option<String>,
    pub dependencies: Option<Vec<String>>,
    pub timeframe: Option<String>,
}

impl RawUseCase {
    /// Apply the defaulting rules and produce a selected record.
    ///
    /// Empty names and zero scores count as missing.
    pub fn into_record(self, id: impl Into<String>) -> UseCaseRecord {
        UseCaseRecord {
            id: id.into(),
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNNAMED_USE_CASE.to_string()),
            problem_statement: self.problem_statement.unwrap_or_default(),
            kpis: self.kpis.unwrap_or_default(),
            hard_benefits: money(self.hard_benefits),
            soft_benefits: self.soft_benefits.unwrap_or_default(),
            implementation_cost: money(self.implementation_cost),
            annual_cost: money(self.annual_cost),
            effort_score: score(self.effort_score),
            impact_score: score(self.impact_score),
            risk_level: self
                .risk_level
                .map(|r| RiskLevel::parse_lenient(&r))
                .unwrap_or_default(),
            dependencies: self.dependencies.unwrap_or_default(),
            timeframe: self
                .timeframe
                .map(|t| Timeframe::parse_lenient(&t))
                .unwrap_or_default(),
            selected: true,
        }
    }
}

fn money(value: Option<f64>) -> f64 {
    value.map(non_negative).unwrap_or(0.0)
}

fn score(value: Option<f64>) -> Score1To5 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => Score1To5::from(v),
        _ => Score1To5::default(),
    }
}

/// Company context carried by a JSON block or read from a user message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<f64>,
}

impl CompanyUpdate {
    /// Blank strings and non-positive budgets do not count as information.
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.industry().is_none() && self.budget().is_none()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref().map(str::trim).filter(|i| !i.is_empty())
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget.filter(|b| b.is_finite() && *b > 0.0)
    }

    fn overlay(self, newer: CompanyUpdate) -> CompanyUpdate {
        CompanyUpdate {
            name: newer.name().map(String::from).or(self.name),
            industry: newer.industry().map(String::from).or(self.industry),
            budget: newer.budget().or(self.budget),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    company: Option<CompanyUpdate>,
    #[serde(default, rename = "useCases")]
    use_cases: Option<Vec<RawUseCase>>,
}

/// Everything recovered from one assistant response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedResponse {
    pub company: Option<CompanyUpdate>,
    pub use_cases: Vec<UseCaseRecord>,
}

/// Pull company context and candidate records out of assistant text.
///
/// Identifiers are `uc-{batch_stamp}-{n}` with `n` counting across the whole
/// response. Inline JSON is only consulted when no fenced block carried a
/// `useCases` array.
pub fn extract_from_response(text: &str, batch_stamp: i64) -> ExtractedResponse {
    let mut company: Option<CompanyUpdate> = None;
    let mut raw_use_cases: Vec<RawUseCase> = Vec::new();
    let mut found_use_cases = false;

    for capture in FENCED_JSON_BLOCK.captures_iter(text) {
        let Some(block) = parse_block(capture[1].trim()) else {
            continue;
        };

        if let Some(update) = block.company.filter(|c| !c.is_empty()) {
            company = Some(match company {
                Some(existing) => existing.overlay(update),
                None => update,
            });
        }

        if let Some(use_cases) = block.use_cases {
            found_use_cases = true;
            raw_use_cases.extend(use_cases);
        }
    }

    if !found_use_cases {
        for start in INLINE_USE_CASES_START.find_iter(text) {
            let block = parse_leading_block(&text[start.start()..]);
            if let Some(use_cases) = block.and_then(|b| b.use_cases) {
                raw_use_cases.extend(use_cases);
            }
        }
    }

    let use_cases: Vec<UseCaseRecord> = raw_use_cases
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_record(format!("uc-{batch_stamp}-{index}")))
        .collect();

    debug!(
        use_cases = use_cases.len(),
        company = company.is_some(),
        "extracted structured data from response"
    );

    ExtractedResponse { company, use_cases }
}

fn parse_block(json: &str) -> Option<ResponseBlock> {
    match serde_json::from_str::<ResponseBlock>(json) {
        Ok(block) => Some(block),
        Err(e) => {
            debug!(error = %e, "skipping unparseable JSON block");
            None
        }
    }
}

/// Parse the JSON object at the start of `text`, ignoring whatever follows it.
fn parse_leading_block(text: &str) -> Option<ResponseBlock> {
    match serde_json::Deserializer::from_str(text)
        .into_iter::<ResponseBlock>()
        .next()?
    {
        Ok(block) => Some(block),
        Err(e) => {
            debug!(error = %e, "skipping unparseable inline JSON");
            None
        }
    }
}

/// Best-effort company context from a free-form user message.
///
/// Only meant as a fallback when the model emitted no company block.
pub fn company_context_from_message(message: &str) -> CompanyUpdate {
    let name = COMPANY_MENTION
        .captures(message)
        .map(|c| c[1].trim().to_string())
        .filter(|n| !n.is_empty());

    let industry = INDUSTRY_MENTION
        .captures(message)
        .map(|c| c[1].trim().to_string())
        .filter(|i| i.len() >= 3 && !INDUSTRY_STOP_WORDS.contains(&i.to_lowercase().as_str()));

    let budget = BUDGET_MENTION.captures(message).and_then(|c| {
        let amount: f64 = c[1].replace(',', "").parse().ok()?;
        let multiplier = match c.get(2).map(|m| m.as_str().to_lowercase()).as_deref() {
            Some("million") | Some("m") => 1_000_000.0,
            Some("thousand") | Some("k") => 1_000.0,
            _ => 1.0,
        };
        Some(amount * multiplier)
    });

    CompanyUpdate {
        name,
        industry,
        budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn raw_use_case_defaults_missing_fields() {
        let record = RawUseCase::default().into_record("uc-1");
        assert_eq!(record.name, UNNAMED_USE_CASE);
        assert_eq!(record.effort_score.value(), 3);
        assert_eq!(record.impact_score.value(), 3);
        assert_eq!(record.risk_level, RiskLevel::Medium);
        assert_eq!(record.timeframe, Timeframe::OneYear);
        assert_eq!(record.hard_benefits, 0.0);
        assert!(record.selected);
    }

    #[test]
    fn raw_use_case_clamps_and_normalizes() {
        let raw = RawUseCase {
            effort_score: Some(9.0),
            impact_score: Some(0.0),
            implementation_cost: Some(-500.0),
            risk_level: Some("medium-high".into()),
            timeframe: Some("3-Year".into()),
            ..RawUseCase::default()
        };
        let record = raw.into_record("x");
        assert_eq!(record.effort_score.value(), 5);
        assert_eq!(record.impact_score.value(), 3);
        assert_eq!(record.implementation_cost, 0.0);
        assert_eq!(record.risk_level, RiskLevel::Medium);
        assert_eq!(record.timeframe, Timeframe::ThreeYear);
    }

    #[test]
    fn extracts_company_and_use_cases_from_fenced_blocks() {
        let text = indoc! {r#"
            Great, here is what I captured:

            ```json
            {"company": {"name": "Acme", "industry": "Retail", "budget": 750000}}
            ```

            And the first ideas:

            ```json
            {"useCases": [
              {"name": "Chatbot", "hardBenefits": 500000, "implementationCost": 150000,
               "annualCost": 50000, "effortScore": 2, "impactScore": 4,
               "riskLevel": "Low", "timeframe": "Q1"},
              {"name": "Forecasting", "riskLevel": "High"}
            ]}
            ```
        "#};

        let extracted = extract_from_response(text, 42);
        let company = extracted.company.unwrap();
        assert_eq!(company.name(), Some("Acme"));
        assert_eq!(company.budget(), Some(750_000.0));

        assert_eq!(extracted.use_cases.len(), 2);
        assert_eq!(extracted.use_cases[0].id, "uc-42-0");
        assert_eq!(extracted.use_cases[0].timeframe, Timeframe::Q1);
        assert_eq!(extracted.use_cases[1].id, "uc-42-1");
        assert_eq!(extracted.use_cases[1].risk_level, RiskLevel::High);
    }

    #[test]
    fn malformed_blocks_are_skipped() {
        let text = indoc! {r#"
            ```json
            {"useCases": [ oops
            ```
            ```json
            {"useCases": [{"name": "OCR"}]}
            ```
        "#};
        let extracted = extract_from_response(text, 1);
        assert_eq!(extracted.use_cases.len(), 1);
        assert_eq!(extracted.use_cases[0].name, "OCR");
    }

    #[test]
    fn falls_back_to_inline_json() {
        let text = r#"Here you go: {"useCases": [{"name": "Routing", "effortScore": 1}]} let me know."#;
        let extracted = extract_from_response(text, 7);
        assert_eq!(extracted.use_cases.len(), 1);
        assert_eq!(extracted.use_cases[0].name, "Routing");
        assert_eq!(extracted.use_cases[0].effort_score.value(), 1);
    }

    #[test]
    fn inline_json_with_nested_arrays() {
        let text = r#"Ideas: {"useCases": [{"name": "Triage", "kpis": ["Time"]}, {"name": "Search"}]} done"#;
        let names: Vec<String> = extract_from_response(text, 3)
            .use_cases
            .into_iter()
            .map(|uc| uc.name)
            .collect();
        assert_eq!(names, vec!["Triage", "Search"]);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert_eq!(extract_from_response("No data here.", 1), ExtractedResponse::default());
    }

    #[test]
    fn empty_company_block_is_ignored() {
        let text = "```json\n{\"company\": {\"name\": \"\", \"budget\": 0}}\n```";
        assert!(extract_from_response(text, 1).company.is_none());
    }

    #[test]
    fn reads_company_context_from_message() {
        let update = company_context_from_message(
            "I'm the CTO at Globex Corp, a logistics firm in the shipping industry. Our budget is $2.5 million.",
        );
        assert_eq!(update.name(), Some("Globex Corp"));
        assert_eq!(update.industry(), Some("shipping"));
        assert_eq!(update.budget(), Some(2_500_000.0));
    }

    #[test]
    fn budget_understands_thousands() {
        let update = company_context_from_message("We have a budget of 750k for this.");
        assert_eq!(update.budget(), Some(750_000.0));
        assert!(update.name().is_none());
    }
}
