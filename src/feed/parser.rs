//! Parser for the placement feed.
//!
//! The feed is newline-delimited text, one placement per line:
//!
//! ```text
//! Яндекс.Директ:/ru
//! Крутая реклама:/ru/svrd,/ru/msk
//! ```
//!
//! A line must split on `:` into exactly two fields. The first field is the
//! placement name, the second a comma-separated list of location prefixes.
//! Lines that do not fit are reported as [`SkippedLine`] diagnostics and
//! parsing continues with the next line.

use std::fmt;

use crate::index::PlacementRecord;

/// Why a feed line was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Splitting on `:` produced this many fields instead of two.
    FieldCount(usize),
    /// The name field was empty after trimming.
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            SkipReason::EmptyName => write!(f, "empty placement name"),
        }
    }
}

/// A malformed feed line, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the feed.
    pub line_number: usize,
    pub raw: String,
    pub reason: SkipReason,
}

/// Records parsed from a feed plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub records: Vec<PlacementRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse feed text into placement records, in input order.
///
/// Pure function: the same text always produces the same outcome.
pub fn parse(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.skipped.push(SkippedLine {
                line_number: idx + 1,
                raw: line.to_string(),
                reason,
            }),
        }
    }

    outcome
}

fn parse_line(line: &str) -> Result<PlacementRecord, SkipReason> {
    let fields: Vec<&str> = line.split(':').collect();
    let [name, locations] = fields.as_slice() else {
        return Err(SkipReason::FieldCount(fields.len()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let locations = locations
        .trim()
        .split(',')
        .map(|token| token.trim().to_string())
        .collect();

    Ok(PlacementRecord::new(name, locations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let outcome = parse("Яндекс.Директ:/ru\nКрутая реклама:/ru/svrd");
        assert!(outcome.skipped.is_empty());
        assert_eq!(
            outcome.records,
            vec![
                PlacementRecord::new("Яндекс.Директ", vec!["/ru".into()]),
                PlacementRecord::new("Крутая реклама", vec!["/ru/svrd".into()]),
            ]
        );
    }

    #[test]
    fn test_locations_trimmed_and_kept_in_order() {
        let outcome = parse("  Ads  :  /b , /a,/b ,, \r\n");
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.name, "Ads");
        assert_eq!(record.locations, vec!["/b", "/a", "/b", "", ""]);
    }

    #[test]
    fn test_empty_location_field() {
        let outcome = parse("Degenerate:");
        assert_eq!(outcome.records[0].locations, vec![String::new()]);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let outcome = parse("Good:/a\nBadLineNoColon\nAlsoGood:/b\nToo:many:colons\n  :/c");
        let names: Vec<_> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Good", "AlsoGood"]);

        assert_eq!(
            outcome.skipped,
            vec![
                SkippedLine {
                    line_number: 2,
                    raw: "BadLineNoColon".into(),
                    reason: SkipReason::FieldCount(1),
                },
                SkippedLine {
                    line_number: 4,
                    raw: "Too:many:colons".into(),
                    reason: SkipReason::FieldCount(3),
                },
                SkippedLine {
                    line_number: 5,
                    raw: "  :/c".into(),
                    reason: SkipReason::EmptyName,
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_not_removed_by_parser() {
        let outcome = parse("X:/a\nx:/b");
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "A:/a\nnope\nB:/b,/c\n:/x\nC:";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_blank_line_reported() {
        let outcome = parse("A:/a\n\nB:/b\n");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line_number, 2);
        assert_eq!(outcome.skipped[0].reason.to_string(), "expected 2 fields, found 1");
    }
}
