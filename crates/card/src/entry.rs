// matcard modules
use matcard_abundance::{is_elemental, Isotope};
use matcard_format::f;

/// Where an expanded isotope entry came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsotopeOrigin {
    /// Symbol of the natural element that was expanded, e.g. `O`
    pub element: &'static str,
    /// Elemental ZAID of the source entry, e.g. `8000`
    pub source_zaid: u32,
    /// Fraction of the source entry before scaling
    pub original_fraction: f64,
    /// Natural abundance applied to the source fraction
    pub abundance: f64,
}

/// One ZAID/fraction pair on a material card
///
/// Entries are never modified once built. The expander replaces elemental
/// entries with new ones, so the fields are only available through
/// accessors.
///
/// ```rust
/// # use matcard_card::MaterialEntry;
/// let entry = MaterialEntry::new(8000, Some("70c".into()), -0.5, "-0.5".into(), "".into());
///
/// assert!(entry.is_elemental());
/// assert_eq!(entry.zaid_field(), "8000.70c");
/// assert_eq!(entry.fraction_text(), "-0.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEntry {
    zaid: u32,
    library: Option<String>,
    fraction: f64,
    fraction_text: String,
    comment: String,
    is_elemental: bool,
    origin: Option<IsotopeOrigin>,
    warning: Option<String>,
}

impl MaterialEntry {
    /// New entry as read from a card
    ///
    /// The `fraction_text` is written back out verbatim, and `comment`
    /// should include the leading `$` if not empty.
    pub fn new(
        zaid: u32,
        library: Option<String>,
        fraction: f64,
        fraction_text: String,
        comment: String,
    ) -> Self {
        Self {
            zaid,
            library,
            fraction,
            fraction_text,
            comment,
            is_elemental: is_elemental(zaid),
            origin: None,
            warning: None,
        }
    }

    /// New isotopic entry expanded from a natural element
    pub fn isotope(
        isotope: &Isotope,
        library: Option<String>,
        fraction: f64,
        fraction_text: String,
        comment: String,
        origin: IsotopeOrigin,
    ) -> Self {
        Self {
            zaid: isotope.zaid,
            library,
            fraction,
            fraction_text,
            comment,
            is_elemental: false,
            origin: Some(origin),
            warning: None,
        }
    }

    /// Copy of this entry with a warning attached
    pub fn with_warning(&self, warning: impl Into<String>) -> Self {
        Self {
            warning: Some(warning.into()),
            ..self.clone()
        }
    }

    /// Copy of this entry with no record of where it came from
    pub fn untagged(&self) -> Self {
        Self {
            origin: None,
            ..self.clone()
        }
    }

    /// ZZZAAA identifier
    pub fn zaid(&self) -> u32 {
        self.zaid
    }

    /// Cross section library suffix without the `.`, e.g. `70c`
    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Numerical fraction, negative for weight fractions
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Fraction exactly as it will be written
    pub fn fraction_text(&self) -> &str {
        &self.fraction_text
    }

    /// Trailing `$` comment, empty if there is none
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// True for natural element ZAIDs ending in `000`
    pub fn is_elemental(&self) -> bool {
        self.is_elemental
    }

    /// Source element details for expanded isotopes
    pub fn origin(&self) -> Option<&IsotopeOrigin> {
        self.origin.as_ref()
    }

    /// Warning attached during expansion
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// ZAID as written on the card, including any library suffix
    pub fn zaid_field(&self) -> String {
        match self.library() {
            Some(library) if !library.is_empty() => f!("{}.{}", self.zaid, library),
            _ => self.zaid.to_string(),
        }
    }
}
