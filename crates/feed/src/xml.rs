// ABOUTME: Serializes the intermediate element tree to indented XML text.
// ABOUTME: Uses quick-xml for escaping and indentation; rejects trees XML cannot express.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::FeedError;
use crate::tree::{Element, Node};

/// First line of every rendered document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;

/// Writes `root` as a complete document: the declaration line, then the
/// element tree indented by two spaces.
///
/// # Errors
/// Returns `FeedError::MalformedTree` for trees with empty names, duplicate
/// attributes or mixed text and child elements. Writer failures are passed
/// through unchanged.
pub fn write_document(root: &Element) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, root)?;
    let body = String::from_utf8(writer.into_inner())?;
    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), FeedError> {
    if element.name.is_empty() {
        return Err(FeedError::malformed("element with an empty name"));
    }

    let mut start = BytesStart::new(element.name.as_str());
    let mut seen: Vec<&str> = Vec::new();
    let mut has_children = false;

    for node in &element.nodes {
        match node {
            Node::Attribute(name, value) => {
                if name.is_empty() {
                    return Err(FeedError::malformed(format!(
                        "attribute with an empty name on <{}>",
                        element.name
                    )));
                }
                if seen.contains(&name.as_str()) {
                    return Err(FeedError::malformed(format!(
                        "duplicate attribute `{}` on <{}>",
                        name, element.name
                    )));
                }
                seen.push(name);
                start.push_attribute((name.as_str(), value.as_str()));
            }
            Node::Element(_) => has_children = true,
            Node::List(elements) => has_children |= !elements.is_empty(),
            Node::Text(_) => {}
        }
    }

    match (element.text_content(), has_children) {
        (Some(_), true) => Err(FeedError::malformed(format!(
            "<{}> mixes text with child elements",
            element.name
        ))),
        (Some(text), false) => {
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            Ok(())
        }
        (None, true) => {
            writer.write_event(Event::Start(start))?;
            for child in element.children() {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            Ok(())
        }
        (None, false) => {
            writer.write_event(Event::Empty(start))?;
            Ok(())
        }
    }
}
