//! Text-to-markup transforms used by the projection.

/// Glyph that turns a description line into a list item
pub const BULLET: char = '•';

/// A block of an experience description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionBlock {
    Paragraph(String),
    List(Vec<String>),
}

/// Split a description into paragraphs and a single bullet list.
///
/// Lines whose trimmed text starts with [`BULLET`] become list items with
/// the glyph and surrounding whitespace removed. Other non-blank lines are
/// paragraphs, blank lines are dropped. Every list item lands in the one
/// list, which sits where the first bullet line appeared.
pub fn parse_description(text: &str) -> Vec<DescriptionBlock> {
    let mut blocks = Vec::new();
    let mut list_at: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(BULLET) {
            let item = rest.trim().to_string();
            let index = *list_at.get_or_insert_with(|| {
                blocks.push(DescriptionBlock::List(Vec::new()));
                blocks.len() - 1
            });
            if let DescriptionBlock::List(items) = &mut blocks[index] {
                items.push(item);
            }
        } else if !trimmed.is_empty() {
            blocks.push(DescriptionBlock::Paragraph(line.to_string()));
        }
    }

    blocks
}

/// Comma-separated skills, trimmed, empties dropped, order and duplicates kept
pub fn tokenize_skills(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Social link without its leading `http://` or `https://`
pub fn display_link(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
