//! Markdown rendering of the canvas document.
//!
//! Every section header is always written. List sections render one
//! `- item` bullet per entry and nothing beneath the header when empty.

use std::io::Write;

use crate::canvas::{CanvasDocument, RiskEntry, TimelineEntry};
use crate::core::Result;

use super::formatters::{format_currency, format_percent};
use super::CanvasWriter;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> CanvasWriter for MarkdownWriter<W> {
    fn write_canvas(&mut self, canvas: &CanvasDocument) -> Result<()> {
        self.write_header(canvas)?;
        self.write_objectives(canvas)?;
        self.write_inputs(canvas)?;
        self.write_impacts(canvas)?;
        self.write_timeline(&canvas.timeline)?;
        self.write_risks(&canvas.risks)?;
        self.write_capabilities(canvas)?;
        self.write_costs(canvas)?;
        self.write_benefits(canvas)?;
        self.write_portfolio_roi(canvas)?;
        writeln!(self.writer, "*{}*", canvas.footer.credit_line)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, canvas: &CanvasDocument) -> Result<()> {
        let header = &canvas.header;
        writeln!(self.writer, "# {}", header.canvas_title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Header")?;
        writeln!(self.writer, "- **Name:** {}", header.name)?;
        writeln!(self.writer, "- **Designed By:** {}", header.designed_by)?;
        writeln!(self.writer, "- **Designed For:** {}", header.designed_for)?;
        writeln!(self.writer, "- **Date:** {}", header.date)?;
        writeln!(self.writer, "- **Version:** {}", header.version)?;
        self.write_rule()
    }

    fn write_objectives(&mut self, canvas: &CanvasDocument) -> Result<()> {
        writeln!(self.writer, "## Objectives")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "### Primary Goal")?;
        writeln!(self.writer, "{}", canvas.objectives.primary_goal)?;
        writeln!(self.writer)?;
        self.write_list("### Strategic Focus", &canvas.objectives.strategic_focus)?;
        self.write_rule()
    }

    fn write_inputs(&mut self, canvas: &CanvasDocument) -> Result<()> {
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        self.write_list("### Resources", &canvas.inputs.resources)?;
        writeln!(self.writer)?;
        self.write_list("### Personnel", &canvas.inputs.personnel)?;
        writeln!(self.writer)?;
        self.write_list("### External Support", &canvas.inputs.external_support)?;
        self.write_rule()
    }

    fn write_impacts(&mut self, canvas: &CanvasDocument) -> Result<()> {
        writeln!(self.writer, "## Impacts")?;
        writeln!(self.writer)?;
        self.write_list("### Hard Benefits", &canvas.impacts.hard_benefits)?;
        writeln!(self.writer)?;
        self.write_list("### Soft Benefits", &canvas.impacts.soft_benefits)?;
        self.write_rule()
    }

    fn write_timeline(&mut self, timeline: &[TimelineEntry]) -> Result<()> {
        writeln!(self.writer, "## Timeline")?;
        for entry in timeline {
            writeln!(self.writer)?;
            writeln!(self.writer, "### {} ({})", entry.ai_initiative, entry.timeframe)?;
            writeln!(self.writer, "- **Start:** {}", entry.start_date)?;
            writeln!(self.writer, "- **End:** {}", entry.end_date)?;
            writeln!(self.writer, "- **Milestones:**")?;
            for milestone in &entry.milestones {
                writeln!(
                    self.writer,
                    "  - {} ({}): {}",
                    milestone.name, milestone.date, milestone.description
                )?;
            }
        }
        self.write_rule()
    }

    fn write_risks(&mut self, risks: &[RiskEntry]) -> Result<()> {
        writeln!(self.writer, "## Risks")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Risk | Likelihood | Impact | Mitigation |")?;
        writeln!(self.writer, "|------|------------|--------|------------|")?;
        for risk in risks {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                escape_cell(&risk.name),
                risk.likelihood,
                risk.impact,
                escape_cell(&risk.mitigation)
            )?;
        }
        self.write_rule()
    }

    fn write_capabilities(&mut self, canvas: &CanvasDocument) -> Result<()> {
        writeln!(self.writer, "## Capabilities")?;
        writeln!(self.writer)?;
        self.write_list("### Skills Needed", &canvas.capabilities.skills_needed)?;
        writeln!(self.writer)?;
        self.write_list("### Technology", &canvas.capabilities.technology)?;
        self.write_rule()
    }

    fn write_costs(&mut self, canvas: &CanvasDocument) -> Result<()> {
        let costs = &canvas.costs;
        writeln!(self.writer, "## Costs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Amount |")?;
        writeln!(self.writer, "|----------|--------|")?;
        self.write_amount_row("Near-Term Investment", costs.near_term, "")?;
        self.write_amount_row("Long-Term Investment", costs.long_term, "")?;
        self.write_amount_row("Annual Maintenance", costs.annual_maintenance, "")?;
        self.write_rule()
    }

    fn write_benefits(&mut self, canvas: &CanvasDocument) -> Result<()> {
        let benefits = &canvas.benefits;
        writeln!(self.writer, "## Benefits")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Amount |")?;
        writeln!(self.writer, "|----------|--------|")?;
        self.write_amount_row("Near-Term Benefits", benefits.near_term, "/year")?;
        self.write_amount_row("Long-Term Benefits", benefits.long_term, "/year")?;
        writeln!(self.writer)?;
        self.write_list("### Soft Benefits", &benefits.soft_benefits)?;
        self.write_rule()
    }

    fn write_portfolio_roi(&mut self, canvas: &CanvasDocument) -> Result<()> {
        let roi = &canvas.portfolio_roi;
        writeln!(self.writer, "## Portfolio ROI")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- **Near-Term ROI:** {}",
            format_percent(roi.near_term_roi_percent)
        )?;
        writeln!(
            self.writer,
            "- **Long-Term ROI:** {}",
            format_percent(roi.long_term_roi_percent)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", roi.portfolio_note)?;
        self.write_rule()
    }

    fn write_list(&mut self, heading: &str, items: &[String]) -> Result<()> {
        writeln!(self.writer, "{heading}")?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        Ok(())
    }

    fn write_amount_row(&mut self, category: &str, amount: f64, suffix: &str) -> Result<()> {
        writeln!(
            self.writer,
            "| {category} | {}{suffix} |",
            format_currency(amount)
        )?;
        Ok(())
    }

    fn write_rule(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

// Pipes would split a table row
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn export_to_markdown(canvas: &CanvasDocument) -> Result<String> {
    let mut buffer = Vec::new();
    MarkdownWriter::new(&mut buffer).write_canvas(canvas)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{assemble_canvas, CanvasContext};
    use crate::core::{RiskLevel, Timeframe, UseCaseRecord};
    use chrono::NaiveDate;

    const TOP_LEVEL_SECTIONS: [&str; 11] = [
        "# AI ROI & Roadmap Canvas",
        "## Header",
        "## Objectives",
        "## Inputs",
        "## Impacts",
        "## Timeline",
        "## Risks",
        "## Capabilities",
        "## Costs",
        "## Benefits",
        "## Portfolio ROI",
    ];

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn empty_canvas_still_has_every_section() {
        let canvas = assemble_canvas(&[], &CanvasContext::new("Acme", ""), date());
        let markdown = export_to_markdown(&canvas).unwrap();
        for section in TOP_LEVEL_SECTIONS {
            assert!(
                markdown.lines().any(|line| line == section),
                "missing section {section}"
            );
        }
        assert!(markdown.contains("### Hard Benefits\n\n### Soft Benefits\n"));
    }

    #[test]
    fn risks_render_as_table_rows() {
        let records = vec![UseCaseRecord::new("1", "Fraud Detection").with_risk(RiskLevel::High)];
        let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", ""), date());
        let markdown = export_to_markdown(&canvas).unwrap();
        assert!(markdown.contains(
            "| Fraud Detection Implementation Risk | High | Medium | Phased rollout, pilot testing, and change management for Fraud Detection |"
        ));
    }

    #[test]
    fn timeline_lists_milestones_as_nested_bullets() {
        let records = vec![UseCaseRecord::new("1", "Chatbot").with_timeframe(Timeframe::Q1)];
        let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", ""), date());
        let markdown = export_to_markdown(&canvas).unwrap();
        assert!(markdown.contains("### Chatbot (Q1)\n- **Start:** 2025-01-15\n- **End:** 2025-04-15\n"));
        assert!(markdown.contains("  - Kickoff (2025-01-15): Project initiation\n"));
        assert!(markdown.contains("  - Go-Live (2025-04-15): Production deployment\n"));
    }

    #[test]
    fn amounts_and_percentages_are_formatted() {
        let records = vec![UseCaseRecord::new("1", "Chatbot")
            .with_timeframe(Timeframe::Q1)
            .with_costs(150_000.0, 50_000.0)
            .with_hard_benefits(500_000.0)];
        let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", ""), date());
        let markdown = export_to_markdown(&canvas).unwrap();
        assert!(markdown.contains("| Near-Term Investment | $150,000 |"));
        assert!(markdown.contains("| Near-Term Benefits | $500,000/year |"));
        assert!(markdown.contains("- **Near-Term ROI:** +150.0%"));
        assert!(markdown.contains("- Chatbot: $500,000/year"));
        assert!(markdown.trim_end().ends_with("*Generated by AI ROI Canvas Agent | 2025-01-15*"));
    }

    #[test]
    fn pipes_in_names_do_not_break_risk_table() {
        let records = vec![UseCaseRecord::new("1", "A|B").with_risk(RiskLevel::Medium)];
        let canvas = assemble_canvas(&records, &CanvasContext::new("Acme", ""), date());
        let markdown = export_to_markdown(&canvas).unwrap();
        assert!(markdown.contains("| A\\|B Implementation Risk |"));
    }
}
