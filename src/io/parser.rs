//! Line-oriented coordinate input
//!
//! Each line holds one tile: two non-negative decimal integers separated by
//! spaces or tabs, with optional blanks around them. Lines end in `\n`,
//! `\r\n` or a lone `\r`; the last line may omit its terminator.

use crate::io::error::{Result, TilingError, WithContext};
use crate::spatial::Coordinate;
use num_traits::{CheckedAdd, CheckedMul};
use std::io::BufRead;
use std::path::Path;

const fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Parse one input line (without its line feed) into a coordinate
///
/// Errors carry line number 0; [`parse_tiles`] stamps the real one.
///
/// # Errors
///
/// Returns an error if:
/// - the line contains a character other than digits, spaces and tabs
/// - a number does not fit into 32 bits
/// - the line does not contain exactly two numbers
pub fn parse_line(line: &str) -> Result<Coordinate> {
    parse_bytes(line.as_bytes())
}

fn parse_bytes(line: &[u8]) -> Result<Coordinate> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let mut values = Vec::with_capacity(2);
    for word in line.split(|&byte| is_blank(byte)).filter(|word| !word.is_empty()) {
        values.push(parse_number(word)?);
    }

    match values.as_slice() {
        &[x, y] => Ok(Coordinate::new(x, y)),
        _ => Err(TilingError::WrongArgumentCount {
            line: 0,
            found: values.len(),
        }),
    }
}

fn parse_number(word: &[u8]) -> Result<u32> {
    let mut value: u32 = 0;
    for &byte in word {
        if !byte.is_ascii_digit() {
            return Err(TilingError::InvalidCharacter {
                line: 0,
                character: char::from(byte),
            });
        }
        value = CheckedMul::checked_mul(&value, &10)
            .and_then(|shifted| CheckedAdd::checked_add(&shifted, &u32::from(byte - b'0')))
            .ok_or(TilingError::CoordinateOverflow { line: 0 })?;
    }
    Ok(value)
}

/// Read every line of `reader` into tile coordinates
///
/// Duplicates are not detected here; [`TileSet::build`] rejects them.
///
/// [`TileSet::build`]: crate::spatial::TileSet::build
///
/// # Errors
///
/// Returns the first line error with its 1-based line number, or
/// [`TilingError::FileSystem`] naming `origin` if reading fails.
pub fn parse_tiles<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Coordinate>> {
    let mut coordinates = Vec::new();
    let mut line_number = 0;

    for segment in reader.split(b'\n') {
        let segment = segment.map_err(|source| TilingError::FileSystem {
            path: origin.to_path_buf(),
            operation: "read",
            source,
        })?;
        // `\r\n` ends one line, a lone `\r` ends one as well
        let content = segment.strip_suffix(b"\r").unwrap_or(&segment);
        for line in content.split(|&byte| byte == b'\r') {
            line_number += 1;
            coordinates.push(parse_bytes(line).with_line(line_number)?);
        }
    }

    log::debug!("read {} tiles from {}", coordinates.len(), origin.display());
    Ok(coordinates)
}
