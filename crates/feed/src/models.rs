// ABOUTME: Rust models describing an RSS 2.0 channel and its items.
// ABOUTME: Field names serialize in camelCase so JSON descriptions mirror RSS element names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category attached to a channel or an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Category {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            domain: None,
        }
    }

    pub fn with_domain(text: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            domain: Some(domain.into()),
        }
    }
}

/// Protocol used by a cloud notification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudProtocol {
    HttpPost,
    Soap,
    XmlRpc,
}

impl CloudProtocol {
    /// The literal value written to the `protocol` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProtocol::HttpPost => "http-post",
            CloudProtocol::Soap => "soap",
            CloudProtocol::XmlRpc => "xml-rpc",
        }
    }
}

/// Registration details for the rssCloud update-notification interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cloud {
    pub domain: String,
    pub port: u16,
    pub path: String,
    pub register_procedure: String,
    pub protocol: CloudProtocol,
}

/// A GIF, JPEG or PNG image displayed with the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A text input box displayed with the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// A media object attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    /// Size in bytes.
    pub length: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Marker stating that a guid is also the item's permanent URL.
///
/// There is deliberately no "false" form: an absent marker omits the
/// attribute entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermaLink;

/// A string that uniquely identifies an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guid {
    pub text: String,
    #[serde(
        default,
        with = "perma_link_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_perma_link: Option<PermaLink>,
}

impl Guid {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_perma_link: None,
        }
    }

    pub fn perma_link(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_perma_link: Some(PermaLink),
        }
    }
}

/// JSON carries the marker as a boolean; `false` reads the same as absent.
mod perma_link_flag {
    use super::PermaLink;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<PermaLink>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(PermaLink) => s.serialize_bool(true),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PermaLink>, D::Error> {
        let flag = Option::<bool>::deserialize(d)?;
        Ok(flag.filter(|set| *set).map(|_| PermaLink))
    }
}

/// The RSS channel an item was republished from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub text: String,
}

/// Title and description of an item. At least one of the two is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Headline {
    Titled {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Described {
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl Headline {
    pub fn title(&self) -> Option<&str> {
        match self {
            Headline::Titled { title, .. } => Some(title),
            Headline::Described { title, .. } => title.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Headline::Titled { description, .. } => description.as_deref(),
            Headline::Described { description, .. } => Some(description),
        }
    }
}

/// A single entry of the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(flatten)]
    pub headline: Headline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<Enclosure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<Guid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl Item {
    /// An item with a title and nothing else.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::with_headline(Headline::Titled {
            title: title.into(),
            description: None,
        })
    }

    /// An item with a description and nothing else.
    pub fn described(description: impl Into<String>) -> Self {
        Self::with_headline(Headline::Described {
            description: description.into(),
            title: None,
        })
    }

    pub fn with_headline(headline: Headline) -> Self {
        Self {
            headline,
            link: None,
            author: None,
            categories: Vec::new(),
            comments: None,
            enclosure: None,
            guid: None,
            pub_date: None,
            source: None,
        }
    }
}

/// Everything needed to build a feed document.
///
/// Collections left out of a JSON description default to empty. Skip values
/// are kept as given; out-of-range entries are dropped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managing_editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_master: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_build_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Minutes the channel may be cached before refreshing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<TextInput>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub skip_hours: Vec<i32>,
    #[serde(default)]
    pub skip_days: Vec<i32>,
}

impl Channel {
    /// A channel with only the three required elements set.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}
