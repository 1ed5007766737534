//! Line by line reader for material card text

// crate modules
use crate::diagnostic::Diagnostic;
use crate::document::{Document, Item, MaterialBlock};
use crate::entry::MaterialEntry;
use crate::parsers::{data_and_comment, fraction, is_comment, is_indented, material_start, zaid};

// external crates
use log::{debug, trace, warn};

/// Best-effort result of reading material cards
///
/// Reading never fails. The `document` holds everything that could be
/// understood, and `diagnostics` lists everything that was skipped.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Structured comments and material cards
    pub document: Document,
    /// Problems found along the way, in line order
    pub diagnostics: Vec<Diagnostic>,
}

/// Read material cards from raw text
///
/// - Blank lines are dropped
/// - Comment lines (`c ...`) are kept verbatim, either as standalone items or
///   attached to the open card
/// - `M<n>` starts a new card
/// - Indented lines continue the open card
/// - Anything else is ignored
///
/// ```rust
/// # use matcard_card::parse_cards;
/// let text = "c Water\nM1  1001.70c 2\n    8016.70c 1   $ O-16";
/// let parsed = parse_cards(text);
///
/// let water = parsed.document.material("1").unwrap();
/// assert_eq!(water.entries.len(), 2);
/// assert_eq!(water.entries[1].comment(), "$ O-16");
/// assert!(parsed.diagnostics.is_empty());
/// ```
pub fn parse_cards(input: &str) -> Parsed {
    Reader::default().read(input)
}

/// Internal reader state
#[derive(Default)]
struct Reader {
    items: Vec<Item>,
    open: Option<MaterialBlock>,
    diagnostics: Vec<Diagnostic>,
}

impl Reader {
    fn read(mut self, input: &str) -> Parsed {
        for (idx, line) in input.lines().enumerate() {
            self.read_line(idx + 1, line);
        }
        self.close_block();

        debug!(
            "Read {} items with {} diagnostics",
            self.items.len(),
            self.diagnostics.len()
        );

        Parsed {
            document: Document { items: self.items },
            diagnostics: self.diagnostics,
        }
    }

    fn read_line(&mut self, number: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        if is_comment(line) {
            match self.open.as_mut() {
                Some(block) => block.interspersed_comments.push(line.to_string()),
                None => self.items.push(Item::Comment(line.to_string())),
            }
            return;
        }

        if let Ok((data, material)) = material_start(line) {
            self.close_block();
            trace!("Line {number}: new card M{material}");
            let mut block = MaterialBlock::new(material);
            block.source_lines.push(line.to_string());
            block.entries = self.read_entries(number, data);
            self.open = Some(block);
            return;
        }

        if is_indented(line) && self.open.is_some() {
            let entries = self.read_entries(number, line.trim());
            if let Some(block) = self.open.as_mut() {
                block.source_lines.push(line.to_string());
                block.entries.extend(entries);
            }
            return;
        }

        trace!("Line {number}: ignored \"{line}\"");
        self.diagnostics.push(Diagnostic::IgnoredLine { line: number });
    }

    /// Move any open card into the item list
    fn close_block(&mut self) {
        if let Some(block) = self.open.take() {
            self.items.push(Item::Material(block));
        }
    }

    /// Read all ZAID/fraction pairs from the data portion of a line
    ///
    /// A `$` comment belongs to the first pair on the line only.
    fn read_entries(&mut self, number: usize, i: &str) -> Vec<MaterialEntry> {
        let (data, comment) = data_and_comment(i);
        let tokens: Vec<&str> = data.split_whitespace().collect();
        let mut entries = Vec::with_capacity(tokens.len() / 2);

        for (idx, pair) in tokens.chunks(2).enumerate() {
            let &[zaid_token, fraction_token] = pair else {
                self.skip(Diagnostic::UnpairedToken {
                    line: number,
                    token: pair[0].to_string(),
                });
                continue;
            };

            let Ok((_, (zaid, library))) = zaid(zaid_token) else {
                self.skip(Diagnostic::MalformedZaid {
                    line: number,
                    token: zaid_token.to_string(),
                });
                continue;
            };

            let Ok((_, value)) = fraction(fraction_token) else {
                self.skip(Diagnostic::MalformedFraction {
                    line: number,
                    token: fraction_token.to_string(),
                });
                continue;
            };

            let comment = if idx == 0 { comment } else { "" };
            entries.push(MaterialEntry::new(
                zaid,
                library.map(str::to_string),
                value,
                fraction_token.to_string(),
                comment.to_string(),
            ));
        }

        entries
    }

    fn skip(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_before_and_inside_cards() {
        let text = "c header\nM1 1001 1\nc inside\n    8016 1\nc also inside";
        let parsed = parse_cards(text);

        assert_eq!(parsed.document.items.len(), 2);
        assert_eq!(parsed.document.items[0], Item::Comment("c header".into()));

        let block = parsed.document.material("1").unwrap();
        assert_eq!(block.entries.len(), 2);
        assert_eq!(block.interspersed_comments, vec!["c inside", "c also inside"]);
        assert_eq!(block.source_lines, vec!["M1 1001 1", "    8016 1"]);
    }

    #[test]
    fn new_card_closes_previous() {
        let parsed = parse_cards("M1 1001 1\nM2 2004 1\n  3007 1");
        let numbers: Vec<&str> = parsed
            .document
            .materials()
            .map(|b| b.number.as_str())
            .collect();

        assert_eq!(numbers, vec!["1", "2"]);
        assert_eq!(parsed.document.material("1").unwrap().entries.len(), 1);
        assert_eq!(parsed.document.material("2").unwrap().entries.len(), 2);
    }

    #[test]
    fn indented_card_start_is_a_new_card() {
        let parsed = parse_cards("M1 1001 1\n   M2 2004 1");
        assert_eq!(parsed.document.materials().count(), 2);
    }

    #[test]
    fn stray_lines_are_ignored() {
        let parsed = parse_cards("1 0 -1 imp:n=1\n    8016 1\n\nM1 1001 1");

        assert_eq!(parsed.document.materials().count(), 1);
        assert_eq!(
            parsed.diagnostics,
            vec![
                Diagnostic::IgnoredLine { line: 1 },
                Diagnostic::IgnoredLine { line: 2 }
            ]
        );
    }

    #[test]
    fn comment_follows_first_pair_only() {
        let parsed = parse_cards("M1 1001 1 1002 2 $ hydrogen");
        let block = parsed.document.material("1").unwrap();

        assert_eq!(block.entries[0].comment(), "$ hydrogen");
        assert_eq!(block.entries[1].comment(), "");
    }

    #[test]
    fn bad_tokens_skip_the_pair() {
        let parsed = parse_cards("M1 abc 1 1001 x 1002 0.5 2003");
        let block = parsed.document.material("1").unwrap();

        assert_eq!(block.entries.len(), 1);
        assert_eq!(block.entries[0].zaid(), 1002);
        assert_eq!(
            parsed.diagnostics,
            vec![
                Diagnostic::MalformedZaid {
                    line: 1,
                    token: "abc".into()
                },
                Diagnostic::MalformedFraction {
                    line: 1,
                    token: "x".into()
                },
                Diagnostic::UnpairedToken {
                    line: 1,
                    token: "2003".into()
                },
            ]
        );
    }

    #[test]
    fn overflowing_fraction_skips_the_pair() {
        let parsed = parse_cards("M1 8000.70c 1e999 1001.70c 2");
        let block = parsed.document.material("1").unwrap();

        assert_eq!(block.entries.len(), 1);
        assert_eq!(block.entries[0].zaid(), 1001);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::MalformedFraction {
                line: 1,
                token: "1e999".into()
            }]
        );
    }

    #[test]
    fn windows_line_endings() {
        let parsed = parse_cards("c note\r\nM1 1001.70c 1\r\n     8016.70c 2\r\n");
        let block = parsed.document.material("1").unwrap();

        assert_eq!(block.entries.len(), 2);
        assert_eq!(block.entries[1].fraction_text(), "2");
        assert!(parsed.diagnostics.is_empty());
    }
}
