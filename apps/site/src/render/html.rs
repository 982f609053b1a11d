//! Serializes a node tree to HTML.

use std::fmt::Write;

use crate::render::node::{Element, Node};

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Full document: doctype followed by the root element.
pub fn to_document(root: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str(&to_html(root));
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Raw(raw) => out.push_str(raw),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag);
    for (name, value) in &el.attrs {
        // Writing into a String cannot fail.
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');

    if el.is_void() {
        return;
    }

    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
