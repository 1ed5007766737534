// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::Result;

// matcard modules
use matcard_format::{f, fraction, fraction_sci};

// external crates
use serde::{Deserialize, Serialize};

/// Options controlling how elemental entries are expanded
///
/// The library suffix options are mutually exclusive. This is up to the
/// caller to enforce, but if both are set the override wins. With neither
/// set, expanded isotopes are written without a suffix.
///
/// Options may also be loaded from JSON, where any missing field takes the
/// default value.
///
/// ```rust
/// # use matcard_card::ConversionOptions;
/// let options = ConversionOptions::from_json_str(r#"{"round_fractions": true}"#).unwrap();
///
/// assert!(options.round_fractions);
/// assert!(!options.add_isotope_comments);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Write fixed notation for reasonable magnitudes instead of scientific
    pub round_fractions: bool,
    /// Append `$ <Symbol>-<A>` to every expanded isotope
    pub add_isotope_comments: bool,
    /// Keep the library suffix of the elemental entry
    pub preserve_library_suffix: bool,
    /// Replace the library suffix with `new_library_suffix`
    pub override_library_suffix: bool,
    /// Suffix used when overriding, with or without the leading `.`
    pub new_library_suffix: String,
}

impl ConversionOptions {
    /// Deserialise options from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read options from a JSON file
    ///
    /// The `path` takes anything that can be turned into a `Path` reference,
    /// such as a [&str], [String], [Path], etc...
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Library suffix for an isotope expanded from an entry with `source`
    ///
    /// ```rust
    /// # use matcard_card::ConversionOptions;
    /// let mut options = ConversionOptions::default();
    /// assert_eq!(options.library_for(Some("70c")), None);
    ///
    /// options.preserve_library_suffix = true;
    /// assert_eq!(options.library_for(Some("70c")), Some("70c".to_string()));
    ///
    /// options.override_library_suffix = true;
    /// options.new_library_suffix = ".80c".to_string();
    /// assert_eq!(options.library_for(Some("70c")), Some("80c".to_string()));
    /// ```
    pub fn library_for(&self, source: Option<&str>) -> Option<String> {
        if self.override_library_suffix {
            let suffix = self.new_library_suffix.trim();
            let suffix = suffix.strip_prefix('.').unwrap_or(suffix);
            (!suffix.is_empty()).then(|| suffix.to_string())
        } else if self.preserve_library_suffix {
            source.map(str::to_string)
        } else {
            None
        }
    }

    /// Fraction text for an expanded isotope
    pub fn fraction_text(&self, value: f64) -> String {
        if self.round_fractions {
            fraction(value)
        } else {
            fraction_sci(value)
        }
    }

    /// Trailing comment for an expanded isotope
    pub fn isotope_comment(&self, symbol: &str, mass_number: u16) -> String {
        if self.add_isotope_comments {
            f!("$ {symbol}-{mass_number}")
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(
            ConversionOptions::from_json_str("{}").unwrap(),
            ConversionOptions::default()
        );
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(ConversionOptions::from_json_str(r#"{"round_fractions": "yes"}"#).is_err());
    }

    #[test]
    fn empty_override_means_no_suffix() {
        let options = ConversionOptions {
            override_library_suffix: true,
            new_library_suffix: " . ".trim().to_string(),
            ..Default::default()
        };
        assert_eq!(options.library_for(Some("70c")), None);
    }

    #[test]
    fn isotope_comments() {
        let mut options = ConversionOptions::default();
        assert_eq!(options.isotope_comment("O", 16), "");

        options.add_isotope_comments = true;
        assert_eq!(options.isotope_comment("O", 16), "$ O-16");
    }
}
