//! Markdown conversion for assistant content
//!
//! Assistant turns are plain text that may contain markdown. Before display
//! they are parsed into a flat list of [`Block`]s. Raw HTML is kept as literal
//! text and terminal control characters are stripped, so backend content can
//! never emit escape sequences.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A displayable unit of assistant content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// `depth` is 0 for top-level items
    ListItem {
        depth: usize,
        marker: String,
        text: String,
    },
    Code {
        language: Option<String>,
        text: String,
    },
    Quote(String),
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Open {
    Paragraph,
    Heading(u8),
    Item { depth: usize, marker: String },
    Code(Option<String>),
    Quote,
}

/// Remove control characters other than newline and tab
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Parse markdown into display blocks
pub fn to_blocks(markdown: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    open: Option<Open>,
    text: String,
    /// Next number for each open list; `None` for bullet lists
    lists: Vec<Option<u64>>,
    links: Vec<String>,
}

impl BlockBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) | Event::Start(Tag::HtmlBlock) => {
                if self.open.is_none() {
                    self.open = Some(Open::Paragraph);
                }
            }
            // Paragraphs inside quotes and items stay in their container
            Event::End(TagEnd::Paragraph) => match self.open {
                Some(Open::Paragraph) => self.flush(),
                Some(Open::Quote) => self.text.push('\n'),
                Some(Open::Item { .. }) => self.text.push(' '),
                _ => {}
            },
            Event::End(TagEnd::HtmlBlock) => {
                if self.open == Some(Open::Paragraph) {
                    self.flush();
                }
            }
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush();
                self.open = Some(Open::Heading(heading_depth(level)));
            }
            Event::End(TagEnd::Heading(_)) => self.flush(),
            Event::Start(Tag::BlockQuote) => {
                self.flush();
                self.open = Some(Open::Quote);
            }
            Event::End(TagEnd::BlockQuote) => self.flush(),
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush();
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.trim().is_empty() => {
                        Some(sanitize(lang.trim()))
                    }
                    _ => None,
                };
                self.open = Some(Open::Code(language));
            }
            Event::End(TagEnd::CodeBlock) => self.flush(),
            Event::Start(Tag::List(start)) => {
                // Text of a parent item comes before its nested list
                self.flush();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{}.", next);
                        *next += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                let depth = self.lists.len().saturating_sub(1);
                self.open = Some(Open::Item { depth, marker });
            }
            Event::End(TagEnd::Item) => self.flush(),
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.links.push(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = self.links.pop() {
                    if !url.is_empty() && !self.text.ends_with(url.as_str()) {
                        self.text.push_str(&format!(" ({})", url));
                    }
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                self.ensure_open();
                self.text.push_str(&text);
            }
            Event::Code(code) => {
                self.ensure_open();
                self.text.push('`');
                self.text.push_str(&code);
                self.text.push('`');
            }
            Event::TaskListMarker(checked) => {
                self.text.push_str(if checked { "[x] " } else { "[ ] " });
            }
            Event::SoftBreak => self.text.push(' '),
            Event::HardBreak => self.text.push('\n'),
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn ensure_open(&mut self) {
        if self.open.is_none() {
            self.open = Some(Open::Paragraph);
        }
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        let Some(open) = self.open.take() else {
            return;
        };

        let block = match open {
            Open::Code(language) => Block::Code {
                language,
                text: sanitize(text.trim_end_matches('\n')),
            },
            other => {
                let text = sanitize(text.trim());
                if text.is_empty() {
                    return;
                }
                match other {
                    Open::Heading(level) => Block::Heading { level, text },
                    Open::Item { depth, marker } => Block::ListItem {
                        depth,
                        marker,
                        text,
                    },
                    Open::Quote => Block::Quote(text),
                    _ => Block::Paragraph(text),
                }
            }
        };
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
