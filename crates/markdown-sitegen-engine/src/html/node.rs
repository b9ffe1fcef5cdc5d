use std::borrow::Cow;

use crate::error::ConvertError;

/// Tags rendered as `<tag attrs>` with no value and no closing tag.
pub const VOID_TAGS: &[&str] = &["img"];

/// Whether `tag` is rendered without a value or closing tag.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Ordered `key="value"` attributes. Insertion order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&options.attribute(value));
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Controls how leaf values and attribute values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `<`, `>`, `&` in text and quotes in attribute values.
    ///
    /// Off by default: values are written exactly as parsed.
    pub escape_html: bool,
}

impl RenderOptions {
    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn attribute<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// A node with no children: raw text, a tagged value, or a void element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` renders the value as bare text.
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A tagged node wrapping one or more children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

/// A render-tree node.
///
/// Rendering is pure: it never mutates the tree, and rendering the same tree
/// twice yields the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    /// Bare text with no markup.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    /// A tagged leaf such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent(ParentNode {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Builder-style attribute insertion.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Parent(parent) => &parent.attributes,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf(leaf) => &mut leaf.attributes,
            Node::Parent(parent) => &mut parent.attributes,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => Some(&parent.tag),
        }
    }

    /// Renders with [`RenderOptions::default`].
    pub fn render(&self) -> Result<String, ConvertError> {
        self.render_with(&RenderOptions::default())
    }

    /// Renders the tree to markup.
    ///
    /// # Errors
    /// [`ConvertError::InvalidNode`] if a parent has an empty tag or no
    /// children, or a non-void leaf has an empty value.
    pub fn render_with(&self, options: &RenderOptions) -> Result<String, ConvertError> {
        let mut out = String::new();
        self.render_into(&mut out, options)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String, options: &RenderOptions) -> Result<(), ConvertError> {
        match self {
            Node::Leaf(leaf) => leaf.render_into(out, options),
            Node::Parent(parent) => parent.render_into(out, options),
        }
    }
}

impl LeafNode {
    fn render_into(&self, out: &mut String, options: &RenderOptions) -> Result<(), ConvertError> {
        let Some(tag) = self.tag.as_deref() else {
            if self.value.is_empty() {
                return Err(ConvertError::InvalidNode(
                    "text leaf has an empty value".to_string(),
                ));
            }
            out.push_str(&options.text(&self.value));
            return Ok(());
        };

        if is_void_tag(tag) {
            open_tag(out, tag, &self.attributes, options);
            return Ok(());
        }
        if self.value.is_empty() {
            return Err(ConvertError::InvalidNode(format!(
                "<{tag}> leaf has an empty value"
            )));
        }

        open_tag(out, tag, &self.attributes, options);
        out.push_str(&options.text(&self.value));
        close_tag(out, tag);
        Ok(())
    }
}

impl ParentNode {
    fn render_into(&self, out: &mut String, options: &RenderOptions) -> Result<(), ConvertError> {
        if self.tag.is_empty() {
            return Err(ConvertError::InvalidNode(
                "parent node has no tag".to_string(),
            ));
        }
        if self.children.is_empty() {
            return Err(ConvertError::InvalidNode(format!(
                "<{}> parent has no children",
                self.tag
            )));
        }

        open_tag(out, &self.tag, &self.attributes, options);
        for child in &self.children {
            child.render_into(out, options)?;
        }
        close_tag(out, &self.tag);
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes, options: &RenderOptions) {
    out.push('<');
    out.push_str(tag);
    attributes.render_into(out, options);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
