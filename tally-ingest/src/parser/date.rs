//! Date token search.
//!
//! Three formats, tried in a fixed order; the first format that matches
//! anywhere in the line wins, even if a later format would match earlier in
//! the line.

use once_cell::sync::Lazy;
use regex::Regex;

// 03/15/2024, 3-15-24. Both separators must agree.
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})",
        r"|",
        r"\d{1,2}-\d{1,2}-(?:\d{4}|\d{2})",
        r")\b"
    ))
    .expect("Failed to compile NUMERIC_RE")
});

// Jan 5, 2024 / March 21
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*",
        r"\s+\d{1,2}(?:,\s*\d{4})?\b"
    ))
    .expect("Failed to compile MONTH_DAY_RE")
});

// 5 Jan 2024
static DAY_MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b\d{1,2}\s+",
        r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*",
        r"\s+\d{4}\b"
    ))
    .expect("Failed to compile DAY_MONTH_YEAR_RE")
});

/// Recognized date layouts, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    Numeric,
    MonthDay,
    DayMonthYear,
}

impl DatePattern {
    pub const PRIORITY: [DatePattern; 3] = [
        DatePattern::Numeric,
        DatePattern::MonthDay,
        DatePattern::DayMonthYear,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            DatePattern::Numeric => &NUMERIC_RE,
            DatePattern::MonthDay => &MONTH_DAY_RE,
            DatePattern::DayMonthYear => &DAY_MONTH_YEAR_RE,
        }
    }

    /// First occurrence of this layout in `line`.
    pub fn find(self, line: &str) -> Option<&str> {
        self.regex().find(line).map(|m| m.as_str())
    }
}

/// A date found in a line, plus what is left once it is cut out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch<'a> {
    pub pattern: DatePattern,
    pub date: &'a str,
    /// Line with the first occurrence of `date` removed, trimmed
    pub residual: String,
}

pub fn extract_date(line: &str) -> Option<DateMatch<'_>> {
    let (pattern, date) = DatePattern::PRIORITY
        .iter()
        .find_map(|&p| p.find(line).map(|d| (p, d.trim())))?;

    let residual = line.replacen(date, "", 1).trim().to_string();
    Some(DateMatch {
        pattern,
        date,
        residual,
    })
}
