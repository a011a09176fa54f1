//! Rees style marking for Python source files.
//!
//! A file is reduced to eight surface statistics (line length, comment
//! density, indentation, blank lines, embedded spacing, module length,
//! keyword variety and identifier length). Each statistic is passed through
//! its own trapezoid curve and the resulting marks are summed into an overall
//! style mark out of 100.
//!
//! No grammar is parsed: lines are split on newlines and a small lexer skips
//! strings and finds `#` comments and name tokens.

pub mod error;
pub mod lexer;
pub mod measures;
pub mod report;
pub mod scoring;

pub use error::{StyleError, StyleResult};
pub use measures::{measure, profile, Measure, RawMeasures, SourceProfile};
pub use report::{analyze, StyleReport};
pub use scoring::{Curve, MarkScheme, MeasureMarks};
