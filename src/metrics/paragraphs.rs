//! Paragraph extraction from Markdown writing.
//!
//! Only top-level paragraphs count: a paragraph nested in a block quote or a
//! list item is part of that container, not a paragraph of the document.

use comrak::arena_tree::NodeEdge;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, Options};

/// Depth at which a paragraph opens: directly below the document node.
const OPEN_DEPTH: usize = 1;

/// Depth seen when that paragraph closes: the paragraph itself is still
/// counted because the depth is decremented after the exit edge is handled.
const CLOSE_DEPTH: usize = 2;

/// Extraction state.
enum Mode {
    Searching,
    Capturing(String),
}

/// Walks enter/exit edges of the document tree and collects paragraphs.
struct ParagraphExtractor {
    mode: Mode,
    depth: usize,
    paragraphs: Vec<String>,
}

impl ParagraphExtractor {
    fn new() -> Self {
        Self {
            mode: Mode::Searching,
            depth: 0,
            paragraphs: Vec::new(),
        }
    }

    fn visit(&mut self, value: &NodeValue, entering: bool) {
        let container = is_container(value);
        // Leaves are visited once, on the way in.
        if !container && !entering {
            return;
        }
        let is_paragraph = matches!(value, NodeValue::Paragraph);

        match &mut self.mode {
            Mode::Searching => {
                if entering && is_paragraph && self.depth == OPEN_DEPTH {
                    self.mode = Mode::Capturing(String::new());
                }
            }
            Mode::Capturing(buffer) => {
                if !entering && is_paragraph && self.depth == CLOSE_DEPTH {
                    self.paragraphs.push(buffer.trim().to_string());
                    self.mode = Mode::Searching;
                } else if matches!(value, NodeValue::SoftBreak) {
                    buffer.push('\n');
                } else if let Some(text) = literal(value) {
                    buffer.push_str(text);
                }
            }
        }

        if container {
            if entering {
                self.depth += 1;
            } else {
                self.depth = self.depth.saturating_sub(1);
            }
        }
    }

    fn finish(self) -> Vec<String> {
        self.paragraphs
    }
}

/// Node kinds that hold children and so open a nesting level.
fn is_container(value: &NodeValue) -> bool {
    matches!(
        value,
        NodeValue::Document
            | NodeValue::BlockQuote
            | NodeValue::List(_)
            | NodeValue::Item(_)
            | NodeValue::Paragraph
            | NodeValue::Heading(_)
            | NodeValue::Emph
            | NodeValue::Strong
            | NodeValue::Link(_)
            | NodeValue::Image(_)
            | NodeValue::Strikethrough
            | NodeValue::Table(_)
            | NodeValue::TableRow(_)
            | NodeValue::TableCell
    )
}

/// Literal text carried by an inline node, if any.
fn literal(value: &NodeValue) -> Option<&str> {
    match value {
        NodeValue::Text(text) => Some(text.as_str()),
        NodeValue::Code(code) => Some(code.literal.as_str()),
        NodeValue::HtmlInline(html) => Some(html.as_str()),
        _ => None,
    }
}

/// Retrieve the top-level paragraphs of the writing, in document order.
///
/// Soft line breaks inside a paragraph become `\n` and each paragraph is
/// trimmed of surrounding whitespace.
pub fn get_paragraphs(content: &str) -> Vec<String> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &Options::default());

    let mut extractor = ParagraphExtractor::new();
    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => extractor.visit(&node.data.borrow().value, true),
            NodeEdge::End(node) => extractor.visit(&node.data.borrow().value, false),
        }
    }
    extractor.finish()
}

/// Count the top-level paragraphs of the writing.
pub fn count_paragraphs(content: &str) -> usize {
    get_paragraphs(content).len()
}
