//! Console output formatter for run reports

use colored::Colorize;
use trivia_domain::{DeliveryOutcome, GenerationOutcome, PipelineReport};

/// Formats run reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run report
    pub fn format(report: &PipelineReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Trivia Generation Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Category:".cyan().bold(),
            report.category
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Requested:".cyan().bold(),
            report.requested()
        ));
        output.push_str(&format!(
            "{} {:.2}s\n",
            "Elapsed:".cyan().bold(),
            report.elapsed().num_milliseconds() as f64 / 1000.0
        ));

        // Phase 1: Generation
        output.push_str(&Self::section_header("Phase 1: Generation"));
        for (index, outcome) in report.generation.iter().enumerate() {
            output.push_str(&Self::generation_line(index, outcome));
        }

        // Phase 2: Delivery (if anything was generated)
        if !report.deliveries.is_empty() {
            output.push_str(&Self::section_header("Phase 2: Delivery"));
            for record in &report.deliveries {
                output.push_str(&Self::delivery_line(record.sequence_index, &record.outcome));
            }
        }

        output.push_str(&format!(
            "\n{} {}/{} generated, {}/{} delivered\n",
            "Summary:".bold(),
            report.generated(),
            report.requested(),
            report.delivered(),
            report.deliveries.len()
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &PipelineReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn generation_line(index: usize, outcome: &GenerationOutcome) -> String {
        match outcome {
            GenerationOutcome::Success(question) => format!(
                "  {} #{:<3} {}\n{}\n",
                "v".green(),
                index,
                question,
                Self::indent(&question.answers().join(" | "), "         ").dimmed()
            ),
            other => format!("  {} #{:<3} {}\n", "x".red(), index, other.to_string().red()),
        }
    }

    fn delivery_line(index: usize, outcome: &DeliveryOutcome) -> String {
        if outcome.is_accepted() {
            format!("  {} #{:<3} {}\n", "v".green(), index, outcome)
        } else {
            format!("  {} #{:<3} {}\n", "x".red(), index, outcome.to_string().red())
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
