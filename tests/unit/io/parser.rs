//! Tests for line-oriented coordinate input

#[cfg(test)]
mod tests {
    use dominotile::io::parser::{parse_line, parse_tiles};
    use dominotile::{Coordinate, TilingError};
    use std::io::Cursor;
    use std::path::Path;

    fn parse(input: &str) -> Result<Vec<Coordinate>, TilingError> {
        parse_tiles(Cursor::new(input.as_bytes()), Path::new("test input"))
    }

    // Tests plain two-number lines
    // Verified by swapping x and y in the result
    #[test]
    fn test_parse_simple_line() {
        assert_eq!(parse_line("3 17").unwrap(), Coordinate::new(3, 17));
        assert_eq!(parse_line("0 0").unwrap(), Coordinate::new(0, 0));
    }

    // Tests blanks around and between the numbers are accepted
    // Verified by splitting on spaces only
    #[test]
    fn test_parse_blanks() {
        assert_eq!(parse_line("  5\t\t6  ").unwrap(), Coordinate::new(5, 6));
        assert_eq!(parse_line("\t7 8").unwrap(), Coordinate::new(7, 8));
    }

    // Tests the full 32-bit range and the first overflowing value
    // Verified by accumulating in a wider type without checks
    #[test]
    fn test_parse_coordinate_limits() {
        assert_eq!(
            parse_line("4294967295 4294967295").unwrap(),
            Coordinate::new(u32::MAX, u32::MAX)
        );
        assert!(matches!(
            parse_line("4294967296 0"),
            Err(TilingError::CoordinateOverflow { line: 0 })
        ));
        assert!(matches!(
            parse_line("0 99999999999999999999"),
            Err(TilingError::CoordinateOverflow { .. })
        ));
    }

    // Tests leading zeros do not count towards overflow
    // Verified by rejecting numbers longer than ten digits
    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(
            parse_line("0000000000012 007").unwrap(),
            Coordinate::new(12, 7)
        );
    }

    // Tests signs, letters and punctuation are rejected
    // Verified by skipping non-digit bytes
    #[test]
    fn test_parse_invalid_characters() {
        for (line, character) in [("-1 2", '-'), ("+1 2", '+'), ("1 2a", 'a'), ("1,2", ',')] {
            match parse_line(line) {
                Err(TilingError::InvalidCharacter {
                    character: found, ..
                }) => assert_eq!(found, character, "{line}"),
                other => unreachable!("Expected InvalidCharacter for {line:?}, got {other:?}"),
            }
        }
    }

    // Tests lines with too few or too many numbers
    // Verified by accepting extra numbers
    #[test]
    fn test_parse_wrong_argument_count() {
        for (line, count) in [("", 0), ("   ", 0), ("1", 1), ("1 2 3", 3)] {
            match parse_line(line) {
                Err(TilingError::WrongArgumentCount { found, .. }) => {
                    assert_eq!(found, count, "{line:?}");
                }
                other => unreachable!("Expected WrongArgumentCount for {line:?}, got {other:?}"),
            }
        }
    }

    // Tests a whole input with and without a final line feed
    // Verified by requiring a terminating line feed
    #[test]
    fn test_parse_tiles_final_newline_optional() {
        let expected = vec![Coordinate::new(0, 0), Coordinate::new(1, 0)];
        assert_eq!(parse("0 0\n1 0\n").unwrap(), expected);
        assert_eq!(parse("0 0\n1 0").unwrap(), expected);
    }

    // Tests Windows line endings are tolerated
    // Verified by treating carriage returns as invalid characters
    #[test]
    fn test_parse_tiles_crlf() {
        assert_eq!(
            parse("2 3\r\n4 5\r\n").unwrap(),
            vec![Coordinate::new(2, 3), Coordinate::new(4, 5)]
        );
    }

    // Tests a lone carriage return ends a line on its own
    // Verified by stripping carriage returns only before line feeds
    #[test]
    fn test_parse_tiles_lone_cr() {
        assert_eq!(
            parse("1 2\r3 4\n").unwrap(),
            vec![Coordinate::new(1, 2), Coordinate::new(3, 4)]
        );
        assert_eq!(
            parse("1 2\r3 4\r5 6").unwrap(),
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(3, 4),
                Coordinate::new(5, 6)
            ]
        );
    }

    // Tests mixed terminators count one line each
    // Verified by counting line feeds only
    #[test]
    fn test_parse_tiles_mixed_terminators_line_numbers() {
        assert!(matches!(
            parse("0 0\r\n1 1\r2 2\nq 3\n"),
            Err(TilingError::InvalidCharacter {
                line: 4,
                character: 'q'
            })
        ));
        assert!(matches!(
            parse("0 0\r\r1 1\n"),
            Err(TilingError::WrongArgumentCount { line: 2, found: 0 })
        ));
    }

    // Tests empty input yields no tiles
    // Verified by treating empty input as one empty line
    #[test]
    fn test_parse_tiles_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    // Tests errors carry the 1-based line number
    // Verified by numbering lines from zero
    #[test]
    fn test_parse_tiles_line_numbers() {
        assert!(matches!(
            parse("0 0\n1 1\nx 2\n"),
            Err(TilingError::InvalidCharacter {
                line: 3,
                character: 'x'
            })
        ));
        assert!(matches!(
            parse("0 0\n\n1 1\n"),
            Err(TilingError::WrongArgumentCount { line: 2, found: 0 })
        ));
        assert!(matches!(
            parse("5000000000 1"),
            Err(TilingError::CoordinateOverflow { line: 1 })
        ));
    }

    // Tests duplicates pass the parser untouched
    // Verified by deduplicating while reading
    #[test]
    fn test_parse_tiles_keeps_duplicates() {
        assert_eq!(parse("1 1\n1 1\n").unwrap().len(), 2);
    }
}
