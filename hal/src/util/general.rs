//! C `%g` rendering of doubles.

use core::fmt::{self, Write};

use super::FmtBuf;

/// significant digits, as `%g` without an explicit precision
const PRECISION: i32 = 6;

/// Displays an `f64` the way `printf("%g")` does.
///
/// Fixed notation is used while the decimal exponent `X` (after rounding to
/// six significant digits) satisfies `-4 <= X < 6`, scientific otherwise.
/// Trailing zeros and a dangling decimal point are removed in both forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" });
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        let mut sci = FmtBuf::<32>::new();
        write!(sci, "{:.*e}", (PRECISION - 1) as usize, v)?;
        let (mantissa, exp) = sci.as_str().split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

        if exp < -4 || exp >= PRECISION {
            f.write_str(trim_fraction(mantissa))?;
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "e{}{:02}", sign, exp.unsigned_abs())
        } else {
            let mut fixed = FmtBuf::<32>::new();
            write!(fixed, "{:.*}", (PRECISION - 1 - exp) as usize, v)?;
            f.write_str(trim_fraction(fixed.as_str()))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::General;

    fn g(v: f64) -> String {
        General(v).to_string()
    }

    #[test]
    fn fixed_range() {
        assert_eq!(g(10.0), "10");
        assert_eq!(g(10.05234), "10.0523");
        assert_eq!(g(0.5), "0.5");
        assert_eq!(g(123456.0), "123456");
        assert_eq!(g(1234.5678), "1234.57");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(0.000123456789), "0.000123457");
        assert_eq!(g(-2.5), "-2.5");
    }

    #[test]
    fn scientific_range() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(1.0e6), "1e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(1.5e-7), "1.5e-07");
        assert_eq!(g(2.0e100), "2e+100");
        assert_eq!(g(-3.25e9), "-3.25e+09");
    }

    #[test]
    fn rounding_moves_exponent() {
        // notation is picked from the exponent after rounding
        assert_eq!(g(999999.5), "1e+06");
        assert_eq!(g(9.999996), "10");
    }

    #[test]
    fn special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
    }
}
