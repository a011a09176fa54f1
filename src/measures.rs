//! Metric extraction: the eight raw Rees measures.

use std::fmt;

use crate::lexer::{self, Lexed};

/// The closed set of measures, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measure {
    AvgLineLength,
    CommentPercentage,
    IndentPercentage,
    BlankPercentage,
    EmbeddedSpacePercentage,
    ModuleLength,
    ReservedWordsCount,
    AvgIdentifierLength,
}

impl Measure {
    pub const ALL: [Measure; 8] = [
        Measure::AvgLineLength,
        Measure::CommentPercentage,
        Measure::IndentPercentage,
        Measure::BlankPercentage,
        Measure::EmbeddedSpacePercentage,
        Measure::ModuleLength,
        Measure::ReservedWordsCount,
        Measure::AvgIdentifierLength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Measure::AvgLineLength => "avg_line_length",
            Measure::CommentPercentage => "comment_percentage",
            Measure::IndentPercentage => "indent_percentage",
            Measure::BlankPercentage => "blank_percentage",
            Measure::EmbeddedSpacePercentage => "embedded_space_percentage",
            Measure::ModuleLength => "module_length",
            Measure::ReservedWordsCount => "reserved_words_count",
            Measure::AvgIdentifierLength => "avg_identifier_length",
        }
    }

    /// Whether the raw value is a ratio scaled to [0, 100].
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            Measure::CommentPercentage
                | Measure::IndentPercentage
                | Measure::BlankPercentage
                | Measure::EmbeddedSpacePercentage
        )
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line and token counts every measure is derived from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceProfile {
    pub total_lines: u64,
    pub non_blank_lines: u64,
    pub blank_lines: u64,
    pub comment_lines: u64,
    pub indented_lines: u64,
    /// Characters of non-blank lines after trimming both ends.
    pub significant_chars: u64,
    /// Spaces left inside those trimmed lines.
    pub embedded_spaces: u64,
    pub function_defs: u64,
    pub distinct_keywords: u64,
    pub identifiers: u64,
    pub identifier_chars: u64,
}

impl SourceProfile {
    /// Top-level code plus one module per function definition.
    pub fn modules(&self) -> u64 {
        self.function_defs + 1
    }
}

pub fn profile(text: &str) -> SourceProfile {
    let mut profile = SourceProfile::default();

    for line in lexer::split_lines(text) {
        profile.total_lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            profile.blank_lines += 1;
            continue;
        }
        profile.non_blank_lines += 1;
        if line.starts_with([' ', '\t']) {
            profile.indented_lines += 1;
        }
        profile.significant_chars += trimmed.chars().count() as u64;
        profile.embedded_spaces += trimmed.chars().filter(|&c| c == ' ').count() as u64;
    }

    let lexed = lexer::scan(text);
    apply_tokens(&mut profile, &lexed);
    profile
}

fn apply_tokens(profile: &mut SourceProfile, lexed: &Lexed) {
    let last_line = profile.total_lines as usize;
    profile.comment_lines = lexed
        .comment_lines
        .iter()
        .filter(|&&line| line <= last_line)
        .count() as u64;
    profile.function_defs = lexed.count_of("def") as u64;
    profile.distinct_keywords = lexed.keywords_used().len() as u64;
    for name in lexed.identifiers() {
        profile.identifiers += 1;
        profile.identifier_chars += name.chars().count() as u64;
    }
}

fn safe_ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn safe_percentage(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        (numerator as f64 / denominator as f64) * 100.0
    }
}

/// Raw statistics for one file, one field per [`Measure`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RawMeasures {
    pub avg_line_length: f64,
    pub comment_percentage: f64,
    pub indent_percentage: f64,
    pub blank_percentage: f64,
    pub embedded_space_percentage: f64,
    pub module_length: f64,
    pub reserved_words_count: f64,
    pub avg_identifier_length: f64,
}

impl RawMeasures {
    pub fn get(&self, measure: Measure) -> f64 {
        match measure {
            Measure::AvgLineLength => self.avg_line_length,
            Measure::CommentPercentage => self.comment_percentage,
            Measure::IndentPercentage => self.indent_percentage,
            Measure::BlankPercentage => self.blank_percentage,
            Measure::EmbeddedSpacePercentage => self.embedded_space_percentage,
            Measure::ModuleLength => self.module_length,
            Measure::ReservedWordsCount => self.reserved_words_count,
            Measure::AvgIdentifierLength => self.avg_identifier_length,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        Measure::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

impl From<&SourceProfile> for RawMeasures {
    fn from(p: &SourceProfile) -> Self {
        RawMeasures {
            avg_line_length: safe_ratio(p.significant_chars, p.non_blank_lines),
            comment_percentage: safe_percentage(p.comment_lines, p.total_lines),
            indent_percentage: safe_percentage(p.indented_lines, p.non_blank_lines),
            blank_percentage: safe_percentage(p.blank_lines, p.total_lines),
            embedded_space_percentage: safe_percentage(p.embedded_spaces, p.significant_chars),
            module_length: safe_ratio(p.non_blank_lines, p.modules()),
            reserved_words_count: p.distinct_keywords as f64,
            avg_identifier_length: safe_ratio(p.identifier_chars, p.identifiers),
        }
    }
}

/// Compute the raw measures of a Python source text.
pub fn measure(text: &str) -> RawMeasures {
    RawMeasures::from(&profile(text))
}
