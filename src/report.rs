//! Report assembly and text rendering.

use std::fmt::Write as FmtWrite;

use colored::*;

use crate::measures::{self, Measure, RawMeasures, SourceProfile};
use crate::scoring::{MarkScheme, MeasureMarks};

// Fixed width for the measure name column.
const NAME_WIDTH: usize = 30;

/// Everything computed for one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleReport {
    pub profile: SourceProfile,
    pub raw: RawMeasures,
    pub marks: MeasureMarks,
    /// Highest total the scheme that produced `marks` can award.
    pub ceiling: f64,
}

impl StyleReport {
    pub fn total(&self) -> f64 {
        self.marks.total()
    }

    pub fn is_empty(&self) -> bool {
        self.profile.total_lines == 0
    }

    /// Render the breakdown, the marks and the total out of the scheme's
    /// ceiling.
    pub fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{}", "Style Analysis Breakdown:".blue().bold());
        for (measure, value) in self.raw.iter() {
            let _ = writeln!(output, "{}", format_measure_line(measure, value));
        }

        let _ = writeln!(output, "\n{}", "Marks for each measure:".blue().bold());
        for (measure, mark) in self.marks.iter() {
            let _ = writeln!(output, "{}", format_measure_line(measure, mark));
        }

        let _ = writeln!(
            output,
            "\nOverall Style Mark: {} / {}",
            format!("{:.2}", self.total()).bright_yellow().bold(),
            self.ceiling
        );

        output
    }

    /// Counts behind the measures, for `--verbose`.
    pub fn render_profile(&self) -> String {
        let p = &self.profile;
        let mut output = String::new();
        let _ = writeln!(output, "  Total lines: {}", p.total_lines);
        let _ = writeln!(output, "  Non-blank lines: {}", p.non_blank_lines);
        let _ = writeln!(output, "  Blank lines: {}", p.blank_lines);
        let _ = writeln!(output, "  Comment lines: {}", p.comment_lines);
        let _ = writeln!(output, "  Indented lines: {}", p.indented_lines);
        let _ = writeln!(
            output,
            "  Significant characters: {} ({} embedded spaces)",
            p.significant_chars, p.embedded_spaces
        );
        let _ = writeln!(
            output,
            "  Modules: {} ({} function definitions)",
            p.modules(),
            p.function_defs
        );
        let _ = writeln!(output, "  Distinct keywords: {}", p.distinct_keywords);
        let _ = writeln!(
            output,
            "  Identifiers: {} ({} characters)",
            p.identifiers, p.identifier_chars
        );
        output
    }
}

fn format_measure_line(measure: Measure, value: f64) -> String {
    format!(
        "  {:<width$}: {:.2}",
        measure.name(),
        value,
        width = NAME_WIDTH
    )
}

/// Measure and mark a Python source text.
pub fn analyze(text: &str, scheme: &MarkScheme) -> StyleReport {
    let profile = measures::profile(text);
    let raw = RawMeasures::from(&profile);
    let marks = scheme.score(&raw);
    StyleReport {
        profile,
        raw,
        marks,
        ceiling: scheme.ceiling(),
    }
}
