// ABOUTME: RSS 2.0 document writer.
// ABOUTME: Builds an element tree from channel and item models and serializes it to XML.

pub mod document;
pub mod error;
pub mod models;
pub mod time_format;
pub mod tree;
pub mod xml;

pub use document::{FeedDocument, RSS_VERSION};
pub use error::FeedError;
pub use models::{
    Category, Channel, Cloud, CloudProtocol, Enclosure, Guid, Headline, Image, Item, PermaLink,
    Source, TextInput,
};
pub use time_format::format_rfc822;
pub use tree::{Element, Node};
pub use xml::{write_document, XML_DECLARATION};
