// crate modules
use crate::diagnostic::Diagnostic;
use crate::entry::MaterialEntry;
use crate::writer;

/// A single `M<n>` card and its continuation lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialBlock {
    /// Material number exactly as written, e.g. `"1"` for `M1`
    pub number: String,
    /// ZAID/fraction pairs in card order
    pub entries: Vec<MaterialEntry>,
    /// Comment lines found between continuation lines
    pub interspersed_comments: Vec<String>,
    /// Raw lines the card was read from
    pub source_lines: Vec<String>,
}

impl MaterialBlock {
    /// Create an empty card for material `number`
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    /// Copy of the card with every entry replaced
    pub fn with_entries(&self, entries: Vec<MaterialEntry>) -> Self {
        Self {
            number: self.number.clone(),
            entries,
            interspersed_comments: self.interspersed_comments.clone(),
            source_lines: self.source_lines.clone(),
        }
    }

    /// Number of elemental entries left on the card
    pub fn elemental_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_elemental()).count()
    }

    /// Card text, one string per output line
    ///
    /// Cards without entries produce nothing.
    pub fn card_lines(&self) -> Vec<String> {
        writer::block_lines(self)
    }
}

impl std::fmt::Display for MaterialBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.card_lines().join("\n"))
    }
}

/// Top level items of a material card listing
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Standalone comment line, kept verbatim
    Comment(String),
    /// Material card
    Material(MaterialBlock),
}

/// Ordered collection of comments and material cards
///
/// Order matches the input from top to bottom so that anything untouched by
/// the expansion is written back in the same place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Comments and materials in input order
    pub items: Vec<Item>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// True if there are no comments or materials
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the material cards only
    pub fn materials(&self) -> impl Iterator<Item = &MaterialBlock> {
        self.items.iter().filter_map(|item| match item {
            Item::Material(block) => Some(block),
            Item::Comment(_) => None,
        })
    }

    /// Iterate over standalone comment lines only
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            Item::Comment(comment) => Some(comment.as_str()),
            Item::Material(_) => None,
        })
    }

    /// Find the first card for a material number
    pub fn material(&self, number: &str) -> Option<&MaterialBlock> {
        self.materials().find(|block| block.number == number)
    }

    /// Unknown elements flagged during expansion
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.materials()
            .flat_map(|block| {
                block
                    .entries
                    .iter()
                    .filter(|entry| entry.warning().is_some())
                    .map(|entry| Diagnostic::UnknownElement {
                        material: block.number.clone(),
                        zaid: entry.zaid(),
                    })
            })
            .collect()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", writer::format_document(self))
    }
}
