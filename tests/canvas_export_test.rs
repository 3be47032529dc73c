use chrono::NaiveDate;
use indoc::indoc;
use pretty_assertions::assert_eq;
use roicanvas::demo::demo_use_cases;
use roicanvas::output::parse_canvas_json;
use roicanvas::{
    assemble_canvas, export_to_json, export_to_markdown, CanvasContext, RiskLevel, Timeframe,
    UseCaseRecord,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn costs_and_benefits_follow_timeframe_buckets() {
    let records = vec![
        UseCaseRecord::new("a", "Docs")
            .with_costs(100_000.0, 30_000.0)
            .with_hard_benefits(350_000.0)
            .with_timeframe(Timeframe::Q1),
        UseCaseRecord::new("b", "Recs")
            .with_costs(400_000.0, 100_000.0)
            .with_hard_benefits(1_200_000.0)
            .with_timeframe(Timeframe::ThreeYear),
    ];

    let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", "Retail"), today());

    assert_eq!(canvas.costs.near_term, 100_000.0);
    assert_eq!(canvas.costs.long_term, 400_000.0);
    assert_eq!(canvas.costs.annual_maintenance, 130_000.0);
    assert_eq!(canvas.benefits.near_term, 350_000.0);
    assert_eq!(canvas.benefits.long_term, 1_200_000.0);
    assert_eq!(canvas.header.name, "Acme AI Strategy");
}

#[test]
fn demo_portfolio_canvas_round_trips_through_json() {
    let canvas = assemble_canvas(&demo_use_cases(), &CanvasContext::new("Acme", ""), today());
    let json = export_to_json(&canvas).unwrap();
    assert_eq!(parse_canvas_json(&json).unwrap(), canvas);
}

#[test]
fn only_selected_use_cases_reach_the_canvas() {
    let canvas = assemble_canvas(&demo_use_cases(), &CanvasContext::new("Acme", ""), today());
    let names: Vec<&str> = canvas
        .timeline
        .iter()
        .map(|entry| entry.ai_initiative.as_str())
        .collect();
    assert!(!names.contains(&"AI-Powered Recommendations"));
    assert!(!names.contains(&"Basic Reporting Dashboard"));
    assert_eq!(names.len(), 4);
}

#[test]
fn markdown_risk_table_lists_non_low_risks() {
    let records = vec![
        UseCaseRecord::new("a", "Forecasting").with_risk(RiskLevel::High),
        UseCaseRecord::new("b", "Docs").with_risk(RiskLevel::Low),
    ];
    let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", ""), today());
    let markdown = export_to_markdown(&canvas).unwrap();

    let expected_header = indoc! {"
        | Risk | Likelihood | Impact | Mitigation |
        |------|------------|--------|------------|
    "};
    assert!(markdown.contains(expected_header), "{markdown}");
    assert!(markdown.contains("| Forecasting Implementation Risk | High | Medium |"));
    assert!(!markdown.contains("Docs Implementation Risk"));
}
