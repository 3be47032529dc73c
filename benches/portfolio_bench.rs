use criterion::{criterion_group, criterion_main, Criterion};
use roicanvas::{
    assemble_canvas, calculate_portfolio_metrics, export_to_markdown, select_portfolio_by_budget,
    CanvasContext, RiskLevel, Timeframe, UseCaseRecord,
};
use std::hint::black_box;

fn create_use_cases(count: usize) -> Vec<UseCaseRecord> {
    let risks = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
    (0..count)
        .map(|i| {
            UseCaseRecord::new(format!("uc-{i}"), format!("Initiative {i}"))
                .with_costs(50_000.0 + (i % 17) as f64 * 10_000.0, 5_000.0 * (i % 5) as f64)
                .with_hard_benefits(100_000.0 + (i % 23) as f64 * 25_000.0)
                .with_scores((i % 5) as i64 + 1, (i % 4) as i64 + 2)
                .with_risk(risks[i % 3])
                .with_timeframe(Timeframe::ALL[i % 3])
                .with_kpis([format!("KPI {}", i % 7)])
                .with_dependencies([format!("Data source {}", i % 4)])
        })
        .collect()
}

fn benchmark_portfolio(c: &mut Criterion) {
    let use_cases = create_use_cases(500);

    c.bench_function("portfolio_metrics_500", |b| {
        b.iter(|| calculate_portfolio_metrics(black_box(&use_cases)))
    });

    c.bench_function("rank_and_select_500", |b| {
        b.iter(|| select_portfolio_by_budget(black_box(&use_cases), black_box(5_000_000.0)))
    });
}

fn benchmark_canvas(c: &mut Criterion) {
    let use_cases = create_use_cases(100);
    let context = CanvasContext::new("Bench Corp", "Manufacturing");
    let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    c.bench_function("assemble_and_render_canvas_100", |b| {
        b.iter(|| {
            let canvas = assemble_canvas(black_box(&use_cases), &context, today);
            export_to_markdown(&canvas).unwrap()
        })
    });
}

criterion_group!(benches, benchmark_portfolio, benchmark_canvas);
criterion_main!(benches);
