//! Markdown for long-form content (bio, about, descriptions).
//!
//! Parsing is done by pulldown-cmark; its events are mapped onto the node
//! tree so escaping stays in `html::to_html`. Raw HTML in content is shown
//! as text, and links or images with an unsafe scheme lose their URL.
//! Content is written as indented literals, so the common indent is removed
//! first; otherwise every line would parse as an indented code block.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use crate::render::links::is_safe_link;
use crate::render::node::{Element, Node};

pub fn markdown_blocks(text: &str) -> Vec<Node> {
    let source = dedent(text);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Bottom frame collects the top-level blocks.
    let mut stack = vec![Element::new("div")];

    for event in Parser::new_ext(&source, options) {
        match event {
            Event::Start(tag) => stack.push(open(tag)),
            Event::End(_) => {
                if stack.len() < 2 {
                    continue;
                }
                if let Some(done) = stack.pop().map(close) {
                    push_child(&mut stack, done.into());
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                push_child(&mut stack, Node::Text(text.into_string()));
            }
            Event::Code(code) => {
                push_child(&mut stack, Element::new("code").text(code.into_string()).into());
            }
            Event::SoftBreak => push_child(&mut stack, Node::Text(" ".to_string())),
            Event::HardBreak => push_child(&mut stack, Element::new("br").into()),
            Event::Rule => push_child(&mut stack, Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                push_child(&mut stack, Node::Text(marker.to_string()));
            }
            _ => {}
        }
    }

    // Unbalanced events cannot come out of the parser, but fold any leftovers.
    while stack.len() > 1 {
        if let Some(done) = stack.pop().map(close) {
            push_child(&mut stack, done.into());
        }
    }
    stack.pop().map(|root| root.children).unwrap_or_default()
}

fn push_child(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn open(tag: Tag<'_>) -> Element {
    match tag {
        Tag::Paragraph => Element::new("p"),
        Tag::Heading { level, .. } => Element::new(heading_tag(level)).class("md-heading"),
        Tag::BlockQuote(..) => Element::new("blockquote"),
        Tag::CodeBlock(_) => Element::new("pre").class("md-code"),
        Tag::HtmlBlock => Element::new("div"),
        Tag::List(None) => Element::new("ul").class("md-list"),
        Tag::List(Some(start)) => {
            let list = Element::new("ol").class("md-list");
            if start == 1 {
                list
            } else {
                list.attr("start", start.to_string())
            }
        }
        Tag::Item => Element::new("li"),
        Tag::Table(_) => Element::new("table").class("md-table"),
        Tag::TableHead => Element::new("thead"),
        Tag::TableRow => Element::new("tr"),
        Tag::TableCell => Element::new("td"),
        Tag::Emphasis => Element::new("em"),
        Tag::Strong => Element::new("strong"),
        Tag::Strikethrough => Element::new("del"),
        Tag::Link {
            dest_url, title, ..
        } if is_safe_link(&dest_url) => {
            let link = Element::new("a")
                .attr("href", dest_url.into_string())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer");
            if title.is_empty() {
                link
            } else {
                link.attr("title", title.into_string())
            }
        }
        Tag::Image { dest_url, .. } if is_safe_link(&dest_url) => {
            Element::new("img").attr("src", dest_url.into_string())
        }
        // Unsafe links/images keep their text; other constructs stay inline.
        _ => Element::new("span"),
    }
}

/// Finishes an element once its children are known.
fn close(element: Element) -> Element {
    if element.tag != "img" {
        return element;
    }
    // Image children are its alt text.
    let alt = plain_text(&element.children);
    Element {
        children: Vec::new(),
        ..element
    }
    .attr("alt", alt)
}

fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => out.push_str(&plain_text(&el.children)),
            Node::Raw(_) => {}
        }
    }
    out
}

/// Section headings are `h2` and subheadings `h3`, so content headings start lower.
fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h3",
        HeadingLevel::H2 => "h4",
        HeadingLevel::H3 => "h5",
        _ => "h6",
    }
}

/// Removes the indentation shared by all non-blank lines.
fn dedent(text: &str) -> String {
    let leading = |line: &str| line.chars().take_while(|c| c.is_whitespace()).count();
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading)
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| {
            let cut = line
                .char_indices()
                .take_while(|(_, c)| c.is_whitespace())
                .take(indent)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            &line[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}
