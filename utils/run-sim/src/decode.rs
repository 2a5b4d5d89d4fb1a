//! Reads back the line a board's `stop_trigger` prints.
//!
//! Boards print `%g` milliseconds. Some older ports append `ms`, which is
//! accepted here as well.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// nothing but whitespace
    Empty,
    /// not a number, or more than one line
    Malformed,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => f.write_str("empty output"),
            DecodeError::Malformed => f.write_str("output is not a duration"),
        }
    }
}

/// Parse one result line into milliseconds.
pub fn parse_elapsed(line: &str) -> Result<f64, DecodeError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(DecodeError::Empty);
    }
    let number = line.strip_suffix("ms").unwrap_or(line);
    number.parse::<f64>().map_err(|_| DecodeError::Malformed)
}

/// Elapsed milliseconds of a run, or `0.0` if the run printed no result.
pub fn decode_results(stdout: &str, _stderr: &str) -> f64 {
    match parse_elapsed(stdout) {
        Ok(ms) => ms,
        Err(err) => {
            log::debug!("parsing failed ({}): {}", err, stdout);
            0.0
        }
    }
}

/// Does `line` match `^[0-9]+(\.[0-9]+)?(e[+-]?[0-9]+)?(ms)?$`?
pub fn is_canonical(line: &str) -> bool {
    let rest = line.strip_suffix("ms").unwrap_or(line);
    let (rest, exponent) = match rest.split_once('e') {
        Some((mantissa, exp)) => (mantissa, Some(exp)),
        None => (rest, None),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || !frac.map_or(true, digits) {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            digits(exp)
        }
    }
}
