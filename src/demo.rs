//! Sample initiatives for trying the tool without a model conversation.

use crate::core::{RiskLevel, Timeframe, UseCaseRecord};

pub fn demo_use_cases() -> Vec<UseCaseRecord> {
    vec![
        UseCaseRecord::new("1", "Customer Service Chatbot")
            .with_problem_statement("High volume of repetitive customer inquiries")
            .with_kpis(["Response time", "Customer satisfaction", "Ticket volume"])
            .with_hard_benefits(500_000.0)
            .with_soft_benefits(["Improved customer experience", "24/7 availability"])
            .with_costs(150_000.0, 50_000.0)
            .with_scores(2, 4)
            .with_risk(RiskLevel::Low)
            .with_timeframe(Timeframe::Q1),
        UseCaseRecord::new("2", "Predictive Maintenance")
            .with_problem_statement("Unplanned equipment downtime causing losses")
            .with_kpis(["Downtime hours", "Maintenance costs", "Equipment lifespan"])
            .with_hard_benefits(800_000.0)
            .with_soft_benefits(["Safety improvements", "Better planning"])
            .with_costs(300_000.0, 80_000.0)
            .with_scores(4, 5)
            .with_risk(RiskLevel::Medium)
            .with_dependencies(["IoT sensors installation"])
            .with_timeframe(Timeframe::OneYear),
        UseCaseRecord::new("3", "Demand Forecasting")
            .with_problem_statement("Inventory imbalances and stockouts")
            .with_kpis(["Forecast accuracy", "Inventory turnover", "Stockout rate"])
            .with_hard_benefits(600_000.0)
            .with_soft_benefits(["Better supplier relationships"])
            .with_costs(200_000.0, 60_000.0)
            .with_scores(3, 4)
            .with_risk(RiskLevel::Low)
            .with_dependencies(["Data warehouse"])
            .with_timeframe(Timeframe::OneYear),
        UseCaseRecord::new("4", "Document Processing AI")
            .with_problem_statement("Manual document handling slowing operations")
            .with_kpis(["Processing time", "Error rate", "FTE savings"])
            .with_hard_benefits(350_000.0)
            .with_soft_benefits(["Employee satisfaction", "Compliance improvement"])
            .with_costs(100_000.0, 30_000.0)
            .with_scores(2, 3)
            .with_risk(RiskLevel::Low)
            .with_timeframe(Timeframe::Q1),
        UseCaseRecord::new("5", "AI-Powered Recommendations")
            .with_problem_statement("Low cross-sell and upsell rates")
            .with_kpis(["Revenue per customer", "Conversion rate", "Average order value"])
            .with_hard_benefits(1_200_000.0)
            .with_soft_benefits(["Personalized experience", "Customer loyalty"])
            .with_costs(400_000.0, 100_000.0)
            .with_scores(4, 5)
            .with_risk(RiskLevel::Medium)
            .with_dependencies(["Customer data platform"])
            .with_timeframe(Timeframe::ThreeYear)
            .with_selected(false),
        UseCaseRecord::new("6", "Basic Reporting Dashboard")
            .with_problem_statement("Manual report generation")
            .with_kpis(["Report generation time"])
            .with_hard_benefits(100_000.0)
            .with_soft_benefits(["Better visibility"])
            .with_costs(50_000.0, 10_000.0)
            .with_scores(1, 2)
            .with_risk(RiskLevel::Low)
            .with_timeframe(Timeframe::Q1)
            .with_selected(false),
    ]
}
