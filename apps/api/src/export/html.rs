//! HTML → flat paragraph model.
//!
//! The DOCX writer needs paragraphs and styled runs, not a DOM. This walks
//! the parsed document and flattens it: headings h1-h4, paragraphs, and
//! list items become blocks; strong/b and em/i toggle run styling. Layout
//! containers (div, section, ul, header...) only contribute their children.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Block-level classification of a flattened element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading with its level, 1-4.
    Heading(u8),
    Paragraph,
    ListItem,
}

/// One styled run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// One block: a paragraph-equivalent with its runs in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub kind: BlockKind,
    pub runs: Vec<DocRun>,
}

impl DocBlock {
    /// Visible text of the block, for tests and diagnostics.
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Parses an HTML string into the flat block model, dropping blocks with no
/// visible text.
pub fn parse_html(html: &str) -> Vec<DocBlock> {
    let document = Html::parse_document(html);
    let mut blocks = Vec::new();
    walk(document.tree.root(), &mut blocks);
    blocks.retain(|b| !b.runs.is_empty());
    blocks
}

fn walk(node: NodeRef<'_, Node>, blocks: &mut Vec<DocBlock>) {
    for child in node.children() {
        match child.value() {
            Node::Element(el) => match el.name() {
                "h1" => push_block(child, BlockKind::Heading(1), blocks),
                "h2" => push_block(child, BlockKind::Heading(2), blocks),
                "h3" => push_block(child, BlockKind::Heading(3), blocks),
                "h4" => push_block(child, BlockKind::Heading(4), blocks),
                "p" => push_block(child, BlockKind::Paragraph, blocks),
                "li" => push_block(child, BlockKind::ListItem, blocks),
                // Invisible subtrees
                "head" | "script" | "style" => {}
                // Everything else is treated as a container
                _ => walk(child, blocks),
            },
            Node::Text(text) => {
                // Stray text directly inside a container becomes its own
                // paragraph so no visible content is lost.
                let collapsed = collapse_whitespace(&text.text);
                let trimmed = collapsed.trim();
                if !trimmed.is_empty() {
                    blocks.push(DocBlock {
                        kind: BlockKind::Paragraph,
                        runs: vec![DocRun {
                            text: trimmed.to_string(),
                            bold: false,
                            italic: false,
                        }],
                    });
                }
            }
            _ => {}
        }
    }
}

fn push_block(node: NodeRef<'_, Node>, kind: BlockKind, blocks: &mut Vec<DocBlock>) {
    let mut runs = Vec::new();
    collect_runs(node, false, false, &mut runs);
    trim_block_edges(&mut runs);
    blocks.push(DocBlock { kind, runs });
}

fn collect_runs(
    node: NodeRef<'_, Node>,
    bold: bool,
    italic: bool,
    runs: &mut Vec<DocRun>,
) {
    for child in node.children() {
        match child.value() {
            Node::Element(el) => match el.name() {
                "strong" | "b" => collect_runs(child, true, italic, runs),
                "em" | "i" => collect_runs(child, bold, true, runs),
                "br" => runs.push(DocRun {
                    text: " ".to_string(),
                    bold,
                    italic,
                }),
                "script" | "style" => {}
                _ => collect_runs(child, bold, italic, runs),
            },
            Node::Text(text) => {
                let collapsed = collapse_whitespace(&text.text);
                if !collapsed.is_empty() {
                    runs.push(DocRun {
                        text: collapsed,
                        bold,
                        italic,
                    });
                }
            }
            _ => {}
        }
    }
}

/// Collapses whitespace runs to single spaces, keeping single leading and
/// trailing spaces so inline boundaries ("a <b>b</b>") stay separated.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Trims leading whitespace from the first run and trailing from the last,
/// dropping runs that end up empty.
fn trim_block_edges(runs: &mut Vec<DocRun>) {
    while let Some(first) = runs.first_mut() {
        first.text = first.text.trim_start().to_string();
        if first.text.is_empty() {
            runs.remove(0);
        } else {
            break;
        }
    }
    while let Some(last) = runs.last_mut() {
        last.text = last.text.trim_end().to_string();
        if last.text.is_empty() {
            runs.pop();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs_flatten_in_order() {
        let blocks = parse_html("<h1>Title</h1><p>Body text.</p><h2>Next</h2>");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading(1));
        assert_eq!(blocks[0].text(), "Title");
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].text(), "Body text.");
        assert_eq!(blocks[2].kind, BlockKind::Heading(2));
    }

    #[test]
    fn test_list_items_become_list_blocks() {
        let blocks = parse_html("<ul><li>One</li><li>Two</li></ul>");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.kind == BlockKind::ListItem));
        assert_eq!(blocks[1].text(), "Two");
    }

    #[test]
    fn test_bold_and_italic_runs() {
        let blocks = parse_html("<p>plain <strong>bold</strong> and <em>italic</em></p>");
        assert_eq!(blocks.len(), 1);
        let runs = &blocks[0].runs;
        assert!(runs.iter().any(|r| r.text.contains("bold") && r.bold));
        assert!(runs.iter().any(|r| r.text.contains("italic") && r.italic));
        assert!(runs.iter().any(|r| r.text.contains("plain") && !r.bold && !r.italic));
    }

    #[test]
    fn test_nested_styles_combine() {
        let blocks = parse_html("<p><strong><em>both</em></strong></p>");
        let run = &blocks[0].runs[0];
        assert!(run.bold && run.italic);
        assert_eq!(run.text, "both");
    }

    #[test]
    fn test_containers_are_transparent() {
        let blocks =
            parse_html("<div class=\"x\"><section><header><h1>Deep</h1></header></section></div>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Heading(1));
        assert_eq!(blocks[0].text(), "Deep");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let blocks = parse_html("<p>  a\n   b\t c  </p>");
        assert_eq!(blocks[0].text(), "a b c");
    }

    #[test]
    fn test_inline_boundary_keeps_one_space() {
        let blocks = parse_html("<p>left <b>right</b></p>");
        assert_eq!(blocks[0].text(), "left right");
    }

    #[test]
    fn test_empty_elements_are_dropped() {
        let blocks = parse_html("<p>   </p><p>kept</p>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "kept");
    }

    #[test]
    fn test_style_and_script_content_ignored() {
        let blocks = parse_html("<style>p{color:red}</style><p>visible</p>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "visible");
    }
}
