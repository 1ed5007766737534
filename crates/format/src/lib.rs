//! Common formatting shared by the matcard crates
//!
//! Number formatting is the main concern. MCNP is relaxed about how numbers
//! are written, but output cards should still be consistent, so everything
//! that writes a fraction goes through [fraction()] or [NumFormat::sci].

// standard library
use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use matcard_format::NumFormat;
    /// let number = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((0.00125).sci(6, 1), "1.250000e-3".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // Non-finite values such as `inf` and `NaN` have no exponent
        let Some(index) = num.find('e') else {
            return num;
        };
        let exp = num.split_off(index);
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Digits after the decimal point for every written fraction
pub const FRACTION_PRECISION: usize = 6;

/// Scientific notation used for fractions, e.g. `-4.987850e-1`
///
/// ```rust
/// # use matcard_format::fraction_sci;
/// assert_eq!(fraction_sci(-0.498785), "-4.987850e-1");
/// assert_eq!(fraction_sci(1234.5), "1.234500e+3");
/// ```
pub fn fraction_sci(value: f64) -> String {
    value.sci(FRACTION_PRECISION, 1)
}

/// Readable formatting for an atom or weight fraction
///
/// - Zero is always written as `0.0`
/// - Magnitudes in `[0.0001, 1000)` are fixed with 6 decimal places
/// - Anything else falls back to [fraction_sci()]
///
/// ```rust
/// # use matcard_format::fraction;
/// assert_eq!(fraction(0.0), "0.0");
/// assert_eq!(fraction(-0.000124), "-0.000124");
/// assert_eq!(fraction(0.5), "0.500000");
/// assert_eq!(fraction(1.5e-5), "1.500000e-5");
/// assert_eq!(fraction(2500.0), "2.500000e+3");
/// ```
pub fn fraction(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }

    if (1e-4..1e3).contains(&value.abs()) {
        f!("{value:.FRACTION_PRECISION$}")
    } else {
        fraction_sci(value)
    }
}
