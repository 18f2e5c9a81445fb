//! Minimal XML element tree and writer.
//!
//! This is an emitter, not a parser: it exists to render the project
//! documents this crate composes, nothing more. Output conventions match
//! what the consuming IDE/build toolchain expects from generated
//! `Directory.Build.targets` files — two-space indentation, double-quoted
//! attributes, self-closing empty elements, no XML declaration.

use std::fmt;

/// One markup element: name, ordered attributes, optional text, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    // ── Consuming builder style ───────────────────────────────────────────

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.push_child(child);
        self
    }

    // ── Mutating style ────────────────────────────────────────────────────

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{pad}<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", escape_attr(value))?;
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => write!(f, " />"),
            (Some(text), true) => {
                write!(f, ">{}</{}>", escape_text(text), self.name)
            }
            (text, false) => {
                writeln!(f, ">")?;
                if let Some(text) = text {
                    writeln!(f, "{pad}  {}", escape_text(text))?;
                }
                for child in &self.children {
                    child.fmt_indented(f, depth + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{pad}</{}>", self.name)
            }
        }
    }
}

impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_self_closes() {
        assert_eq!(XmlElement::new("Project").to_string(), "<Project />");
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let el = XmlElement::new("Exec")
            .attr("Command", "dotnet tool restore")
            .attr("StandardOutputImportance", "Low");
        assert_eq!(
            el.to_string(),
            "<Exec Command=\"dotnet tool restore\" StandardOutputImportance=\"Low\" />"
        );
    }

    #[test]
    fn text_element_renders_inline() {
        let el = XmlElement::new("ToolListFile").text("$(DirectoryBuildTargetsDir)tools.txt");
        assert_eq!(
            el.to_string(),
            "<ToolListFile>$(DirectoryBuildTargetsDir)tools.txt</ToolListFile>"
        );
    }

    #[test]
    fn children_are_indented_two_spaces() {
        let el = XmlElement::new("Project")
            .child(XmlElement::new("PropertyGroup").child(XmlElement::new("Husky").text("0")));
        assert_eq!(
            el.to_string(),
            "<Project>\n  <PropertyGroup>\n    <Husky>0</Husky>\n  </PropertyGroup>\n</Project>"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = XmlElement::new("Message").attr("Text", "a < b & \"c\"");
        assert_eq!(
            el.to_string(),
            "<Message Text=\"a &lt; b &amp; &quot;c&quot;\" />"
        );
    }

    #[test]
    fn text_is_escaped() {
        let el = XmlElement::new("P").text("x < y & z");
        assert_eq!(el.to_string(), "<P>x &lt; y &amp; z</P>");
    }

    #[test]
    fn attribute_lookup() {
        let el = XmlElement::new("Target").attr("Name", "Restore");
        assert_eq!(el.attribute("Name"), Some("Restore"));
        assert_eq!(el.attribute("Condition"), None);
    }
}
