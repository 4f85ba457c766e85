//! Console output for search reports.
//!
//! Renders a [`SearchReport`] as text: one formula line per match
//! ("2 × 3 × 5 = 30"), a provenance table for values that came from a file,
//! and a summary with timing and exploration counters. Colors are optional
//! so the same renderer serves terminals and plain logs.

use std::io::{self, Write};

use num_format::{Locale, ToFormattedString};
use owo_colors::Style;
use targetseek_core::{DataPoint, Mode, Solution};
use targetseek_solver::{SearchReport, TargetMatch};

/// Renders search reports as text.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    use_color: bool,
}

impl ReportRenderer {
    /// Creates a plain-text renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that colorizes headings and outcomes.
    pub fn colored() -> Self {
        Self { use_color: true }
    }

    /// Renders the whole report to a string.
    pub fn render(&self, report: &SearchReport) -> String {
        let mut out = String::new();

        if report.is_empty() {
            out.push_str(&format!(
                "{}\n",
                self.style_miss().style("No matches found")
            ));
        } else {
            out.push_str(&format!(
                "{}\n",
                self.style_hit()
                    .style(format!("Found {} match(es)", report.matches.len()))
            ));
            for matched in &report.matches {
                out.push('\n');
                out.push_str(&self.render_match(report.mode, matched));
            }
        }

        let stats = &report.statistics;
        out.push_str(&format!(
            "\nSearched {} target(s), explored {} candidate(s) in {:.1?}\n",
            stats.targets_searched,
            stats.explored.to_formatted_string(&Locale::en),
            stats.duration,
        ));
        out
    }

    /// Renders one match: target heading, formula, provenance table.
    pub fn render_match(&self, mode: Mode, matched: &TargetMatch) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            self.style_heading()
                .style(format!("Target: {}", matched.target))
        ));
        out.push_str(&format!(
            "  Solution: {}\n",
            formula(mode, &matched.solution)
        ));
        if matched
            .solution
            .points()
            .iter()
            .any(|p| p.column().is_some())
        {
            out.push_str(&provenance_table(matched.solution.points()));
        }
        out
    }

    /// Renders the report to stdout.
    pub fn print(&self, report: &SearchReport) {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{}", self.render(report));
        let _ = stdout.flush();
    }

    fn style_heading(&self) -> Style {
        if self.use_color {
            Style::new().bright_cyan().bold()
        } else {
            Style::new()
        }
    }

    fn style_hit(&self) -> Style {
        if self.use_color {
            Style::new().green().bold()
        } else {
            Style::new()
        }
    }

    fn style_miss(&self) -> Style {
        if self.use_color {
            Style::new().red().bold()
        } else {
            Style::new()
        }
    }
}

/// Builds the formula string for a solution, e.g. `2 × 3 × 5 = 30`.
///
/// The empty subset renders as its identity aggregate so the line still
/// reads as an equation.
pub fn formula(mode: Mode, solution: &Solution) -> String {
    if solution.is_empty() {
        return format!("(empty subset) = {}", solution.aggregate());
    }
    let joined = solution
        .values()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&format!(" {} ", mode.symbol()));
    format!("{joined} = {}", solution.aggregate())
}

fn provenance_table(points: &[DataPoint]) -> String {
    let mut value_width = "Value".len();
    let mut column_width = "Column".len();
    let mut cells: Vec<(String, String, String)> = Vec::new();
    for point in points {
        let value = point.value().to_string();
        let column = point.column().unwrap_or("-").to_string();
        let row = point.row().map_or_else(|| "-".to_string(), |r| r.to_string());
        value_width = value_width.max(value.len());
        column_width = column_width.max(column.len());
        cells.push((value, column, row));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  {:value_width$}  {:column_width$}  Row\n",
        "Value", "Column",
    ));
    for (value, column, row) in cells {
        out.push_str(&format!(
            "  {value:value_width$}  {column:column_width$}  {row}\n"
        ));
    }
    out
}
