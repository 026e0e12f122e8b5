// ABOUTME: Intermediate element tree handed to the XML writer.
// ABOUTME: Attributes, text, child elements and sibling lists are explicit node variants.

use std::fmt::Display;

/// One node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An attribute of the enclosing element.
    Attribute(String, String),
    /// Direct text content of the enclosing element.
    Text(String),
    /// A child element.
    Element(Element),
    /// Consecutive sibling elements, written in order.
    List(Vec<Element>),
}

/// A named element and its nodes, in output order.
///
/// The `*_opt` builders push nothing for `None`, so a missing value never
/// shows up as an empty element or attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub nodes: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.nodes
            .push(Node::Attribute(name.into(), value.to_string()));
        self
    }

    pub fn attr_opt<T: Display>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn text(mut self, value: impl Display) -> Self {
        self.nodes.push(Node::Text(value.to_string()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.nodes.push(Node::Element(element));
        self
    }

    pub fn child_opt(self, element: Option<Element>) -> Self {
        match element {
            Some(element) => self.child(element),
            None => self,
        }
    }

    /// Adds `<name>value</name>`.
    pub fn leaf(self, name: impl Into<String>, value: impl Display) -> Self {
        self.child(Element::new(name).text(value))
    }

    pub fn leaf_opt<T: Display>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.leaf(name, value),
            None => self,
        }
    }

    /// Adds a run of sibling elements. An empty run adds nothing.
    pub fn list(mut self, elements: Vec<Element>) -> Self {
        if !elements.is_empty() {
            self.nodes.push(Node::List(elements));
        }
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            Node::Attribute(key, value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Concatenated text content, if any.
    pub fn text_content(&self) -> Option<String> {
        let mut out: Option<String> = None;
        for node in &self.nodes {
            if let Node::Text(text) = node {
                out.get_or_insert_with(String::new).push_str(text);
            }
        }
        out
    }

    /// Child elements in order, with lists flattened.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().flat_map(|node| match node {
            Node::Element(element) => std::slice::from_ref(element).iter(),
            Node::List(elements) => elements.iter(),
            Node::Attribute(..) | Node::Text(_) => Default::default(),
        })
    }

    /// Child elements called `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().filter(move |element| element.name == name)
    }

    /// First child element called `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children().find(|element| element.name == name)
    }
}
