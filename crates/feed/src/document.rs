// ABOUTME: FeedDocument owns a channel's data and renders it as RSS 2.0 XML.
// ABOUTME: Maps model fields to elements, attributes and text, omitting every absent value.

use crate::error::FeedError;
use crate::models::{Category, Channel, Cloud, Image, Item, TextInput};
use crate::time_format::format_rfc822;
use crate::tree::Element;
use crate::xml::write_document;

/// RSS version written on the root element.
pub const RSS_VERSION: &str = "2.0";

/// Day names for skipDays, indexed from Sunday.
const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// An RSS document under construction.
///
/// The document owns copies of everything it renders. Items can be appended
/// or cleared after construction; everything else is fixed. Mutation takes
/// `&mut self`, so sharing a document between threads needs external
/// synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedDocument {
    channel: Channel,
    categories: Vec<Category>,
    images: Vec<Image>,
    items: Vec<Item>,
    skip_days: SkipSet,
    skip_hours: SkipSet,
}

impl FeedDocument {
    /// Takes ownership of `channel`. Skip values are deduplicated but not
    /// range-checked; out-of-range values are dropped by [`render`](Self::render).
    pub fn new(mut channel: Channel) -> Self {
        let categories = std::mem::take(&mut channel.categories);
        let images = std::mem::take(&mut channel.images);
        let items = std::mem::take(&mut channel.items);
        let skip_days = SkipSet::from_values(std::mem::take(&mut channel.skip_days));
        let skip_hours = SkipSet::from_values(std::mem::take(&mut channel.skip_hours));

        Self {
            channel,
            categories,
            images,
            items,
            skip_days,
            skip_hours,
        }
    }

    /// Appends an item after all items already held.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Drops every item. Categories, images and skip sets are untouched.
    pub fn clear_items(&mut self) {
        self.items = Vec::new();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Builds the `<rss>` element tree for the current state.
    pub fn to_tree(&self) -> Element {
        Element::new("rss")
            .attr("version", RSS_VERSION)
            .child(self.channel_element())
    }

    /// Renders the document as XML text, starting with the XML declaration.
    ///
    /// Calling this repeatedly yields identical output as long as no items
    /// were added or cleared in between.
    ///
    /// # Errors
    /// Only failures from the XML writer are returned.
    pub fn render(&self) -> Result<String, FeedError> {
        let xml = write_document(&self.to_tree())?;
        tracing::debug!(
            title = %self.channel.title,
            items = self.items.len(),
            bytes = xml.len(),
            "rendered feed"
        );
        Ok(xml)
    }

    fn channel_element(&self) -> Element {
        let channel = &self.channel;

        Element::new("channel")
            .leaf("title", &channel.title)
            .leaf("link", &channel.link)
            .leaf("description", &channel.description)
            .leaf_opt("language", channel.language.as_ref())
            .leaf_opt("copyright", channel.copyright.as_ref())
            .leaf_opt("managingEditor", channel.managing_editor.as_ref())
            .leaf_opt("webMaster", channel.web_master.as_ref())
            .leaf_opt("pubDate", channel.pub_date.as_ref().map(format_rfc822))
            .leaf_opt(
                "lastBuildDate",
                channel.last_build_date.as_ref().map(format_rfc822),
            )
            .leaf_opt("generator", channel.generator.as_ref())
            .leaf_opt("docs", channel.docs.as_ref())
            .leaf_opt("ttl", channel.ttl)
            .leaf_opt("rating", channel.rating.as_ref())
            .child_opt(channel.text_input.as_ref().map(text_input_element))
            .list(self.categories.iter().map(category_element).collect())
            .child_opt(channel.cloud.as_ref().map(cloud_element))
            .list(self.images.iter().map(image_element).collect())
            .list(self.items.iter().map(item_element).collect())
            .child_opt(self.skip_days_element())
            .child_opt(self.skip_hours_element())
    }

    fn skip_days_element(&self) -> Option<Element> {
        let days: Vec<Element> = self
            .skip_days
            .in_range(0, 6, "skip day")
            .map(|day| Element::new("day").text(DAYS[day as usize]))
            .collect();
        (!days.is_empty()).then(|| Element::new("skipDays").list(days))
    }

    fn skip_hours_element(&self) -> Option<Element> {
        let hours: Vec<Element> = self
            .skip_hours
            .in_range(0, 23, "skip hour")
            .map(|hour| Element::new("hour").text(hour))
            .collect();
        (!hours.is_empty()).then(|| Element::new("skipHours").list(hours))
    }
}

impl From<Channel> for FeedDocument {
    fn from(channel: Channel) -> Self {
        Self::new(channel)
    }
}

/// Copies `channel`, leaving the caller free to keep changing it.
impl From<&Channel> for FeedDocument {
    fn from(channel: &Channel) -> Self {
        Self::new(channel.clone())
    }
}

/// Integers kept unique in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SkipSet(Vec<i32>);

impl SkipSet {
    fn from_values(values: Vec<i32>) -> Self {
        let mut unique = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self(unique)
    }

    /// Values within `min..=max`, in set order. Others are logged and skipped.
    fn in_range<'a>(&'a self, min: i32, max: i32, what: &'static str) -> impl Iterator<Item = i32> + 'a {
        self.0.iter().copied().filter(move |value| {
            let keep = (min..=max).contains(value);
            if !keep {
                tracing::debug!(value, what, "dropping out-of-range value");
            }
            keep
        })
    }
}

fn category_element(category: &Category) -> Element {
    Element::new("category")
        .attr_opt("domain", category.domain.as_ref())
        .text(&category.text)
}

fn cloud_element(cloud: &Cloud) -> Element {
    Element::new("cloud")
        .attr("domain", &cloud.domain)
        .attr("port", cloud.port)
        .attr("path", &cloud.path)
        .attr("registerProcedure", &cloud.register_procedure)
        .attr("protocol", cloud.protocol.as_str())
}

fn image_element(image: &Image) -> Element {
    Element::new("image")
        .leaf("url", &image.url)
        .leaf("title", &image.title)
        .leaf("link", &image.link)
        .leaf_opt("width", image.width)
        .leaf_opt("height", image.height)
        .leaf_opt("description", image.description.as_ref())
}

fn text_input_element(input: &TextInput) -> Element {
    Element::new("textInput")
        .leaf("title", &input.title)
        .leaf("description", &input.description)
        .leaf("name", &input.name)
        .leaf("link", &input.link)
}

fn item_element(item: &Item) -> Element {
    let enclosure = item.enclosure.as_ref().map(|enclosure| {
        Element::new("enclosure")
            .attr("url", &enclosure.url)
            .attr("length", enclosure.length)
            .attr("type", &enclosure.mime_type)
    });
    let guid = item.guid.as_ref().map(|guid| {
        Element::new("guid")
            .attr_opt("isPermaLink", guid.is_perma_link.map(|_| "true"))
            .text(&guid.text)
    });
    let source = item.source.as_ref().map(|source| {
        Element::new("source")
            .attr("url", &source.url)
            .text(&source.text)
    });

    Element::new("item")
        .leaf_opt("title", item.headline.title())
        .leaf_opt("link", item.link.as_ref())
        .leaf_opt("description", item.headline.description())
        .leaf_opt("author", item.author.as_ref())
        .list(item.categories.iter().map(category_element).collect())
        .leaf_opt("comments", item.comments.as_ref())
        .child_opt(enclosure)
        .child_opt(guid)
        .leaf_opt("pubDate", item.pub_date.as_ref().map(format_rfc822))
        .child_opt(source)
}
