//! Mark scoring: one trapezoid conversion curve per measure.

use crate::error::{StyleError, StyleResult};
use crate::measures::{Measure, RawMeasures};

/// Trapezoid conversion curve.
///
/// The mark is zero outside `[lo, hi]`, rises linearly from `lo` to `lotol`,
/// stays at `max_mark` on `[lotol, hitol]` and falls linearly back to zero at
/// `hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    max_mark: f64,
    lo: f64,
    lotol: f64,
    hitol: f64,
    hi: f64,
}

impl Curve {
    pub fn new(max_mark: f64, lo: f64, lotol: f64, hitol: f64, hi: f64) -> StyleResult<Self> {
        let params = [max_mark, lo, lotol, hitol, hi];
        if params.iter().any(|p| !p.is_finite()) {
            return Err(StyleError::invalid_curve(format!(
                "parameters must be finite, got {params:?}"
            )));
        }
        if max_mark < 0.0 {
            return Err(StyleError::invalid_curve(format!(
                "max mark must not be negative, got {max_mark}"
            )));
        }
        if !(lo <= lotol && lotol <= hitol && hitol <= hi) {
            return Err(StyleError::invalid_curve(format!(
                "expected lo <= lotol <= hitol <= hi, got {lo}, {lotol}, {hitol}, {hi}"
            )));
        }
        Ok(Self::trapezoid(max_mark, lo, lotol, hitol, hi))
    }

    const fn trapezoid(max_mark: f64, lo: f64, lotol: f64, hitol: f64, hi: f64) -> Self {
        Curve {
            max_mark,
            lo,
            lotol,
            hitol,
            hi,
        }
    }

    pub fn max_mark(&self) -> f64 {
        self.max_mark
    }

    /// The plateau where the curve awards its maximum.
    pub fn ideal_range(&self) -> (f64, f64) {
        (self.lotol, self.hitol)
    }

    /// Convert a raw value into a mark in `[0, max_mark]`. NaN scores zero.
    pub fn mark(&self, value: f64) -> f64 {
        if value.is_nan() || value < self.lo || value > self.hi {
            return 0.0;
        }
        // Equal bounds make an edge a step; the strict comparisons below
        // keep those cases away from the divisions.
        let mark = if value < self.lotol {
            self.max_mark * (value - self.lo) / (self.lotol - self.lo)
        } else if value <= self.hitol {
            self.max_mark
        } else {
            self.max_mark * (self.hi - value) / (self.hi - self.hitol)
        };
        mark.clamp(0.0, self.max_mark)
    }
}

/// The eight conversion curves used to mark a file.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkScheme {
    curves: [Curve; 8],
}

impl Default for MarkScheme {
    /// Rees' published parameters; the maxima add up to 100.
    fn default() -> Self {
        MarkScheme {
            curves: [
                Curve::trapezoid(15.0, 40.0, 50.0, 70.0, 90.0),
                Curve::trapezoid(10.0, 5.0, 10.0, 20.0, 30.0),
                Curve::trapezoid(12.0, 30.0, 40.0, 60.0, 70.0),
                Curve::trapezoid(5.0, 2.0, 5.0, 10.0, 15.0),
                Curve::trapezoid(8.0, 5.0, 7.0, 12.0, 15.0),
                Curve::trapezoid(20.0, 5.0, 10.0, 20.0, 30.0),
                Curve::trapezoid(10.0, 5.0, 8.0, 15.0, 20.0),
                Curve::trapezoid(20.0, 5.0, 7.0, 15.0, 20.0),
            ],
        }
    }
}

impl MarkScheme {
    pub fn curve(&self, measure: Measure) -> &Curve {
        &self.curves[measure as usize]
    }

    pub fn with_curve(mut self, measure: Measure, curve: Curve) -> Self {
        self.curves[measure as usize] = curve;
        self
    }

    /// Highest overall mark this scheme can award.
    pub fn ceiling(&self) -> f64 {
        self.curves.iter().map(Curve::max_mark).sum()
    }

    pub fn score(&self, raw: &RawMeasures) -> MeasureMarks {
        let mark = |measure: Measure| self.curve(measure).mark(raw.get(measure));
        MeasureMarks {
            avg_line_length: mark(Measure::AvgLineLength),
            comment_percentage: mark(Measure::CommentPercentage),
            indent_percentage: mark(Measure::IndentPercentage),
            blank_percentage: mark(Measure::BlankPercentage),
            embedded_space_percentage: mark(Measure::EmbeddedSpacePercentage),
            module_length: mark(Measure::ModuleLength),
            reserved_words_count: mark(Measure::ReservedWordsCount),
            avg_identifier_length: mark(Measure::AvgIdentifierLength),
        }
    }
}

/// Marks for one file, one field per [`Measure`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeasureMarks {
    pub avg_line_length: f64,
    pub comment_percentage: f64,
    pub indent_percentage: f64,
    pub blank_percentage: f64,
    pub embedded_space_percentage: f64,
    pub module_length: f64,
    pub reserved_words_count: f64,
    pub avg_identifier_length: f64,
}

impl MeasureMarks {
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

    /// The overall style mark.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, mark)| mark).sum()
    }
}
