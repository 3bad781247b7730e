use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::ConvertError;
use crate::iir::{Filter, FilterSequence};

/// Pattern of an enabled peaking filter in a REW export.
///
/// Example: `Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41`
///
/// Numbers are ASCII decimals with a decimal point and at least one
/// fractional digit; only the gain may carry a leading `-`. Anything after
/// the Q value is ignored.
pub const FILTER_PATTERN: &str = concat!(
    r"^Filter [0-9]+: ON PK Fc ",
    r"(?P<freq>[0-9]+\.[0-9]+) Hz ",
    r"Gain (?P<gain>-?[0-9]+\.[0-9]+) dB ",
    r"Q (?P<q>[0-9]+\.[0-9]+)",
);

static FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FILTER_PATTERN).expect("filter pattern is a valid regex"));

/// Try to read one filter from a line
///
/// # Returns
/// * `Some(filter)` when the whole pattern matches, `None` otherwise
pub fn parse_filter_line(line: &str) -> Option<Filter> {
    let caps = FILTER_RE.captures(line)?;
    // captures are ASCII decimals, f64 parsing cannot fail on them
    let freq = caps["freq"].parse::<f64>().ok()?;
    let gain = caps["gain"].parse::<f64>().ok()?;
    let q = caps["q"].parse::<f64>().ok()?;
    Some(Filter::new(freq, gain, q))
}

/// Read all filters from a line oriented source
///
/// Lines that do not match [`FILTER_PATTERN`] are skipped. The returned
/// sequence keeps the order of the source.
pub fn parse_filters<R: BufRead>(reader: R) -> std::io::Result<FilterSequence> {
    let mut filters = FilterSequence::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_filter_line(&line) {
            Some(filter) => {
                log::trace!("line {}: band{} {}", line_num + 1, filters.len(), filter);
                filters.push(filter);
            }
            None => log::trace!("line {}: skipped", line_num + 1),
        }
    }

    Ok(filters)
}

/// Load the filters of a REW filter file
///
/// # Arguments
/// * `path` - Path to the text file exported by Room EQ Wizard
///
/// # Returns
/// * The filters in file order, possibly empty
pub fn load_filters(path: &Path) -> Result<FilterSequence, ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    parse_filters(BufReader::new(file)).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_filter_line_peak() {
        let f = parse_filter_line("Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41").unwrap();
        assert_eq!(f, Filter::new(100.0, -3.5, 1.41));
    }

    #[test]
    fn test_parse_filter_line_signs() {
        let f = parse_filter_line("Filter 3: ON PK Fc 2500.50 Hz Gain 4.25 dB Q 0.7").unwrap();
        assert_eq!(f, Filter::new(2500.5, 4.25, 0.7));
        // an explicit plus sign is not part of the exported format
        assert!(parse_filter_line("Filter 4: ON PK Fc 63.0 Hz Gain +2.0 dB Q 3.0").is_none());
    }

    #[test]
    fn test_parse_filter_line_ascii_digits_only() {
        let lines = [
            "Filter 1: ON PK Fc \u{661}\u{660}\u{660}.\u{660} Hz Gain -3.5 dB Q 1.41",
            "Filter \u{661}: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            "Filter 1: ON PK Fc 100.0 Hz Gain -\u{663}.\u{665} dB Q 1.41",
            "Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q \u{661}.\u{664}\u{661}",
        ];
        for line in lines {
            assert!(parse_filter_line(line).is_none(), "should not match: {line:?}");
        }
    }

    #[test]
    fn test_plus_gain_does_not_shift_band_indices() {
        let text = "Filter 1: ON PK Fc 63.0 Hz Gain +2.0 dB Q 3.0\n\
                    Filter 2: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41\n";
        let filters = parse_filters(Cursor::new(text)).unwrap();
        assert_eq!(filters, vec![Filter::new(100.0, -3.5, 1.41)]);
    }

    #[test]
    fn test_parse_filter_line_trailing_content() {
        let f = parse_filter_line("Filter 12: ON PK Fc 40.0 Hz Gain -6.0 dB Q 5.000 ; room mode\r")
            .unwrap();
        assert_eq!(f, Filter::new(40.0, -6.0, 5.0));
    }

    #[test]
    fn test_parse_filter_line_off_is_skipped() {
        assert!(parse_filter_line("Filter 2: OFF PK Fc 200.0 Hz Gain 1.0 dB Q 2.0").is_none());
    }

    #[test]
    fn test_parse_filter_line_rejects_other_shapes() {
        let lines = [
            "",
            "Preamp: -6.2 dB",
            "Filter Settings file",
            // no fractional part
            "Filter 1: ON PK Fc 100 Hz Gain -3.5 dB Q 1.41",
            "Filter 1: ON PK Fc 100.0 Hz Gain -3 dB Q 1.41",
            "Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1",
            "Filter 1: ON PK Fc 100. Hz Gain -3.5 dB Q 1.41",
            // other filter types
            "Filter 1: ON LS Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            "Filter 1: ON LP Fc 100.0 Hz",
            // not anchored at the start
            " Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            "# Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            // spacing differs
            "Filter  1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            "Filter 1: ON  PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
            // frequency and Q are unsigned
            "Filter 1: ON PK Fc -100.0 Hz Gain -3.5 dB Q 1.41",
            "Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q -1.41",
            // missing filter index
            "Filter : ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41",
        ];
        for line in lines {
            assert!(parse_filter_line(line).is_none(), "should not match: {line:?}");
        }
    }

    #[test]
    fn test_parse_filters_keeps_order_and_skips() {
        let text = "\
Filter Settings file

Room EQ V5.20
Filter 1: ON PK Fc 100.0 Hz Gain -3.5 dB Q 1.41
Filter 2: OFF PK Fc 200.0 Hz Gain 1.0 dB Q 2.0
Filter 3: ON PK Fc 50.0 Hz Gain 2.0 dB Q 4.0
Filter 4: ON None
Filter 9: ON PK Fc 1000.0 Hz Gain -1.0 dB Q 0.5
";
        let filters = parse_filters(Cursor::new(text)).unwrap();
        assert_eq!(
            filters,
            vec![
                Filter::new(100.0, -3.5, 1.41),
                Filter::new(50.0, 2.0, 4.0),
                Filter::new(1000.0, -1.0, 0.5),
            ]
        );
    }

    #[test]
    fn test_parse_filters_no_match_is_empty() {
        let filters = parse_filters(Cursor::new("Preamp: -2.0 dB\nnothing here\n")).unwrap();
        assert!(filters.is_empty());
        let filters = parse_filters(Cursor::new("")).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_parse_filters_keeps_duplicates_and_odd_values() {
        let text = "Filter 1: ON PK Fc 0.0 Hz Gain 0.0 dB Q 0.0\n\
                    Filter 1: ON PK Fc 0.0 Hz Gain 0.0 dB Q 0.0\n";
        let filters = parse_filters(Cursor::new(text)).unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0], filters[1]);
    }

    #[test]
    fn test_load_filters_missing_file() {
        let path = Path::new("/this/path/should/not/exist/filters.txt");
        let result = load_filters(path);
        assert!(matches!(result, Err(ConvertError::Io { ref path, .. }) if path.ends_with("filters.txt")));
    }
}
