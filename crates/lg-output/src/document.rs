//! Minimal structured-document model and deterministic XML serialiser.
//!
//! Every artifact is built as an [`Element`] tree in memory and serialised
//! in one pass, so generators never touch I/O.  Output is byte-for-byte
//! reproducible: attributes keep insertion order and the header carries no
//! timestamp.

use std::fmt::Display;
use std::io::{self, Write};

/// Base URL of the simulator's XML schemas.
pub const SCHEMA_BASE: &str = "http://sumo.dlr.de/xsd/";

const INDENT: &str = "    ";

// ── Element ───────────────────────────────────────────────────────────────────

/// An XML element with ordered attributes and child elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name:     String,
    attrs:    Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Append an attribute, formatting `value` with `Display`.
    pub fn attr(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.attrs.push((key.into(), value.to_string()));
        self
    }

    /// Append an attribute only when `value` is `Some`.
    pub fn attr_opt<V: Display>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// The simulator's textual boolean (`True` / `False`).
pub fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

// ── Document ──────────────────────────────────────────────────────────────────

/// A root element plus the header written in front of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root:   Element,
    /// Schema file name under [`SCHEMA_BASE`], e.g. `nodes_file.xsd`.
    pub schema: Option<&'static str>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root, schema: None }
    }

    pub fn with_schema(root: Element, schema: &'static str) -> Self {
        Self { root, schema: Some(schema) }
    }

    /// Serialise the document to `w`.
    pub fn write_to<W: Write>(&self, w: W) -> io::Result<()> {
        let mut xw = XmlWriter::new(w);
        xw.declaration()?;
        let mut root = self.root.clone();
        if let Some(xsd) = self.schema {
            root.attrs.insert(0, ("xmlns:xsi".into(), "http://www.w3.org/2001/XMLSchema-instance".into()));
            root.attrs.insert(1, ("xsi:noNamespaceSchemaLocation".into(), format!("{SCHEMA_BASE}{xsd}")));
        }
        xw.element(&root, 0)?;
        xw.finish()
    }

    /// Serialise the document into a fresh buffer.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }
}

// ── XmlWriter ─────────────────────────────────────────────────────────────────

/// Streaming serialiser used by [`Document::write_to`].
pub struct XmlWriter<W: Write> {
    out: W,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// XML declaration and generator comment.
    pub fn declaration(&mut self) -> io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(self.out)?;
        writeln!(self.out, "<!-- generated by lotgen {} -->", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out)
    }

    /// Write `el` and its subtree at indentation `depth`.
    pub fn element(&mut self, el: &Element, depth: usize) -> io::Result<()> {
        let pad = INDENT.repeat(depth);
        write!(self.out, "{pad}<{}", el.name)?;
        for (k, v) in &el.attrs {
            write!(self.out, r#" {k}="{}""#, escape(v))?;
        }
        if el.children.is_empty() {
            return writeln!(self.out, "/>");
        }
        writeln!(self.out, ">")?;
        for child in &el.children {
            self.element(child, depth + 1)?;
        }
        writeln!(self.out, "{pad}</{}>", el.name)
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Escape the five XML special characters in an attribute value.
pub fn escape(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return std::borrow::Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    std::borrow::Cow::Owned(out)
}
