use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

use thiserror::Error;

use super::model::{Dataset, Series};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure while reading a measurement log.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read.
    #[error("i/o error while reading the log")]
    Io(#[from] io::Error),

    /// A data line appeared before any `#` marker, so there is no series to
    /// append it to.
    #[error("line {line}: data before the first '#' section marker")]
    DataBeforeMarker { line: usize },

    /// A data line held fewer than the two required fields. Blank lines land
    /// here too: they have zero fields.
    #[error("line {line}: expected two numeric fields, found {found}")]
    MissingFields { line: usize, found: usize },

    /// A field did not parse as a floating-point number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Leniency knobs for the parser. The default is strict.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Treat lines with no fields at all as separators instead of rejecting
    /// them. Useful for logs that were hand-edited with blank lines between
    /// sections.
    pub skip_blank_lines: bool,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a measurement log from disk.
///
/// Format: a line whose first character is `#` starts a new series (any
/// trailing text on the marker line is ignored); every other line carries at
/// least two whitespace-separated floats, consumed as one (x, y) sample of
/// the most recently started series. Extra fields are ignored. Series that
/// end up with no samples (consecutive markers, or a trailing bare marker)
/// are dropped from the result.
pub fn parse_file(path: &Path) -> Result<Dataset, ParseError> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse a measurement log from any buffered reader, with strict defaults.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Dataset, ParseError> {
    parse_reader_with(reader, ParseOptions::default())
}

/// Parse a measurement log from any buffered reader.
///
/// Single forward pass. The series under construction is always the last
/// element of the accumulator, so section handling needs no lookahead.
pub fn parse_reader_with<R: BufRead>(
    reader: R,
    options: ParseOptions,
) -> Result<Dataset, ParseError> {
    let mut series: Vec<Series> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if line.starts_with('#') {
            series.push(Series::default());
            continue;
        }

        if options.skip_blank_lines && line.split_whitespace().next().is_none() {
            continue;
        }

        let current = series
            .last_mut()
            .ok_or(ParseError::DataBeforeMarker { line: number })?;

        let mut fields = line.split_whitespace();
        let (x, y) = match (fields.next(), fields.next()) {
            (Some(x), Some(y)) => (x, y),
            (first, _) => {
                return Err(ParseError::MissingFields {
                    line: number,
                    found: first.map_or(0, |_| 1),
                });
            }
        };

        current.push(parse_field(x, number)?, parse_field(y, number)?);
    }

    series.retain(|s| !s.is_empty());
    Ok(Dataset { series })
}

fn parse_field(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Dataset, ParseError> {
        parse_reader(input.as_bytes())
    }

    #[test]
    fn splits_sections_at_markers() {
        let dataset = parse("#\n0 1\n1 2\n#\n2 3\n3 4\n").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.series[0].x, vec![0.0, 1.0]);
        assert_eq!(dataset.series[0].y, vec![1.0, 2.0]);
        assert_eq!(dataset.series[1].x, vec![2.0, 3.0]);
        assert_eq!(dataset.series[1].y, vec![3.0, 4.0]);
    }

    #[test]
    fn marker_metadata_text_is_ignored() {
        let plain = parse("#\n0.5 10\n").unwrap();
        let annotated = parse("# 31.10.2018 16:07; rendering: cpu; time: real time\n0.5 10\n").unwrap();

        assert_eq!(plain, annotated);
    }

    #[test]
    fn empty_sections_are_dropped() {
        let dataset = parse("#\n#\n5 6\n").unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.series[0].x, vec![5.0]);
        assert_eq!(dataset.series[0].y, vec![6.0]);
    }

    #[test]
    fn trailing_bare_marker_is_dropped() {
        let dataset = parse("#\n1 1\n#\n").unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.series[0].len(), 1);
    }

    #[test]
    fn data_before_first_marker_is_rejected() {
        let err = parse("1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::DataBeforeMarker { line: 1 }));
    }

    #[test]
    fn invalid_number_names_line_and_token() {
        let err = parse("#\nabc 2\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_second_field_is_rejected_too() {
        let err = parse("#\n1 --\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "--");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_field_line_is_rejected() {
        let err = parse("#\n7\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingFields { line: 2, found: 1 }));
    }

    #[test]
    fn blank_line_is_rejected_by_default() {
        let err = parse("#\n0 1\n\n1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingFields { line: 3, found: 0 }));
    }

    #[test]
    fn blank_lines_are_separators_in_lenient_mode() {
        let options = ParseOptions {
            skip_blank_lines: true,
        };
        let dataset = parse_reader_with("#\n0 1\n\n1 2\n".as_bytes(), options).unwrap();
        let strict = parse("#\n0 1\n1 2\n").unwrap();

        assert_eq!(dataset, strict);
    }

    #[test]
    fn blank_line_before_first_marker_is_still_data() {
        let err = parse("\n# run\n1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::DataBeforeMarker { line: 1 }));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let dataset = parse("#\n1 2 trailing 99\n").unwrap();

        assert_eq!(dataset.series[0].x, vec![1.0]);
        assert_eq!(dataset.series[0].y, vec![2.0]);
    }

    #[test]
    fn tabs_separate_fields() {
        let dataset = parse("#\n1.5\t-2.5\n").unwrap();

        assert_eq!(dataset.series[0].x, vec![1.5]);
        assert_eq!(dataset.series[0].y, vec![-2.5]);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let dataset = parse("").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn every_returned_series_has_samples_in_lockstep() {
        let dataset = parse("# a\n0 1\n1 2\n#\n# b\n2 3\n").unwrap();

        for series in &dataset.series {
            assert_eq!(series.x.len(), series.y.len());
            assert!(!series.is_empty());
        }
    }

    #[test]
    fn series_keep_file_order() {
        let dataset = parse("#\n10 0\n#\n20 0\n#\n30 0\n").unwrap();

        let firsts: Vec<f64> = dataset.series.iter().map(|s| s.x[0]).collect();
        assert_eq!(firsts, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = parse_file(Path::new("/nonexistent/traceview-test.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn reads_a_log_from_disk() {
        let path = std::env::temp_dir().join("traceview-parser-roundtrip.txt");
        std::fs::write(&path, "# run 1\n0 1\n0.1 1.5\n# run 2\n0 -1\n").unwrap();

        let dataset = parse_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.series[0].y, vec![1.0, 1.5]);
        assert_eq!(dataset.series[1].x, vec![0.0]);
    }
}
