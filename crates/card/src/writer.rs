//! Writing material cards back to MCNP text

// crate modules
use crate::document::{Document, Item, MaterialBlock};
use crate::entry::MaterialEntry;

// matcard modules
use matcard_format::f;

// external crates
use itertools::Itertools;

/// Minimum width of the ZAID and fraction columns
pub const FIELD_WIDTH: usize = 12;

/// Indent for continuation lines, same width as `M<n>    ` for `n < 10`
const CONTINUATION: &str = "      ";

/// Write a full document of comments and cards to text
///
/// Standalone comments are written verbatim. Each card is written with one
/// entry per line in fixed width columns, followed by any comments found
/// inside the card. Cards with no entries are skipped entirely.
///
/// The result has no leading or trailing whitespace.
///
/// ```rust
/// # use matcard_card::{format_document, parse_cards};
/// let parsed = parse_cards("c Water\nm1 1001.70c 2 8016 1");
///
/// assert_eq!(
///     format_document(&parsed.document),
///     "c Water\nM1    1001.70c                2\n      8016                    1"
/// );
/// ```
pub fn format_document(document: &Document) -> String {
    document
        .items
        .iter()
        .flat_map(|item| match item {
            Item::Comment(comment) => vec![comment.clone()],
            Item::Material(block) => block_lines(block),
        })
        .join("\n")
        .trim()
        .to_string()
}

/// Lines for a single card, empty if the card has no entries
pub(crate) fn block_lines(block: &MaterialBlock) -> Vec<String> {
    let Some((first, rest)) = block.entries.split_first() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(block.entries.len() + block.interspersed_comments.len());
    lines.push(entry_line(&f!("M{}    ", block.number), first));
    lines.extend(rest.iter().map(|entry| entry_line(CONTINUATION, entry)));
    lines.extend(block.interspersed_comments.iter().cloned());
    lines
}

/// Single `<prefix><zaid> <fraction>[    <comment>]` line
fn entry_line(prefix: &str, entry: &MaterialEntry) -> String {
    let mut line = f!(
        "{prefix}{:<width$} {:>width$}",
        entry.zaid_field(),
        entry.fraction_text(),
        width = FIELD_WIDTH
    );

    if !entry.comment().is_empty() {
        line += &f!("    {}", entry.comment());
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(zaid: u32, fraction: &str, comment: &str) -> MaterialEntry {
        MaterialEntry::new(
            zaid,
            Some("70c".into()),
            fraction.parse().unwrap(),
            fraction.into(),
            comment.into(),
        )
    }

    #[test]
    fn fixed_width_columns() {
        let mut block = MaterialBlock::new("12");
        block.entries = vec![
            entry(6000, "-0.000124", "$ Carbon"),
            entry(7000, "-0.755268", ""),
        ];

        assert_eq!(
            block_lines(&block),
            vec![
                "M12    6000.70c        -0.000124    $ Carbon",
                "      7000.70c        -0.755268",
            ]
        );
    }

    #[test]
    fn long_fields_are_not_truncated() {
        let mut block = MaterialBlock::new("1");
        block.entries = vec![MaterialEntry::new(
            92235,
            Some("extralong_lib".into()),
            1.0,
            "1.0000000000000e+00".into(),
            "".into(),
        )];

        assert_eq!(
            block_lines(&block),
            vec!["M1    92235.extralong_lib 1.0000000000000e+00"]
        );
    }

    #[test]
    fn empty_cards_are_skipped() {
        let mut block = MaterialBlock::new("2");
        block.interspersed_comments.push("c orphan".into());

        let document = Document {
            items: vec![
                Item::Comment("c first".into()),
                Item::Material(block),
                Item::Comment("c last".into()),
            ],
        };

        assert_eq!(format_document(&document), "c first\nc last");
    }

    #[test]
    fn card_comments_follow_entries() {
        let mut block = MaterialBlock::new("3");
        block.entries = vec![entry(1001, "1", ""), entry(8016, "2", "")];
        block.interspersed_comments = vec!["c between".into()];

        let lines = block_lines(&block);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "c between");
    }
}
