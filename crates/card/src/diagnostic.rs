use matcard_abundance::atomic_number_of;

/// Non-fatal problems found while reading or expanding cards
///
/// The reader is permissive and never gives up on a card because of one bad
/// token. Anything skipped or left untouched is recorded here so callers can
/// decide what to do about it.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// ZAID token does not look like `<digits>[.<suffix>]`, pair skipped
    MalformedZaid { line: usize, token: String },

    /// Fraction token is not a number, pair skipped
    MalformedFraction { line: usize, token: String },

    /// Odd token left over at the end of a line, dropped
    UnpairedToken { line: usize, token: String },

    /// Line is not a comment, card, or continuation of an open card
    IgnoredLine { line: usize },

    /// Elemental ZAID with no natural abundance data, kept as-is
    UnknownElement { material: String, zaid: u32 },
}

impl Diagnostic {
    /// Source line, if the problem came from the reader
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedZaid { line, .. }
            | Self::MalformedFraction { line, .. }
            | Self::UnpairedToken { line, .. }
            | Self::IgnoredLine { line } => Some(*line),
            Self::UnknownElement { .. } => None,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedZaid { line, token } => {
                write!(f, "line {line}: unable to read ZAID from \"{token}\"")
            }
            Self::MalformedFraction { line, token } => {
                write!(f, "line {line}: unable to read fraction from \"{token}\"")
            }
            Self::UnpairedToken { line, token } => {
                write!(f, "line {line}: dropped unpaired token \"{token}\"")
            }
            Self::IgnoredLine { line } => {
                write!(f, "line {line}: not part of a material card")
            }
            Self::UnknownElement { material, zaid } => write!(
                f,
                "M{material}: Element Z={} not found, {zaid} left unchanged",
                atomic_number_of(*zaid)
            ),
        }
    }
}
