//! Minimal HTML building blocks.
//!
//! Every piece of text that reaches a [`Markup`] goes through [`escape`]; the only
//! way to inject unescaped HTML is [`Markup::raw`], which is reserved for literals.

use std::fmt;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Markup(String);

impl Markup {
    pub(crate) fn new() -> Self {
        Self(String::new())
    }

    /// Trusted markup, used as-is.
    pub(crate) fn raw(html: &'static str) -> Self {
        Self(html.to_string())
    }

    pub(crate) fn text(s: &str) -> Self {
        Self(escape(s))
    }

    pub(crate) fn push(&mut self, other: impl Into<Markup>) {
        self.0.push_str(&other.into().0);
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push(m);
        }
        out
    }
}

/// Escape text for use in element content and double-quoted attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Builder for a single element.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Markup,
}

impl Element {
    pub(crate) fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Markup::new(),
        }
    }

    pub(crate) fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub(crate) fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub(crate) fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub(crate) fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        for c in children {
            self.children.push(c);
        }
        self
    }

    pub(crate) fn text(self, s: &str) -> Self {
        self.child(Markup::text(s))
    }

    pub(crate) fn build(self) -> Markup {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return Markup(out);
        }
        out.push_str(&self.children.0);
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Markup(out)
    }
}

impl From<Element> for Markup {
    fn from(e: Element) -> Self {
        e.build()
    }
}

pub(crate) fn link(href: &str, label: &str) -> Markup {
    Element::new("a").attr("href", href).text(label).build()
}

/// A non-breaking blank, rendered wherever data is missing or zero.
pub(crate) fn placeholder() -> Markup {
    Element::new("span").child(Markup::raw("&nbsp;")).build()
}

pub(crate) fn td(content: impl Into<Markup>) -> Element {
    Element::new("td").child(content)
}

pub(crate) fn th(label: &str) -> Markup {
    Element::new("th").text(label).build()
}

pub(crate) fn tr<I, M>(cells: I) -> Markup
where
    I: IntoIterator<Item = M>,
    M: Into<Markup>,
{
    Element::new("tr").children(cells).build()
}
