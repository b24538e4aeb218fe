use crate::constants::{XML_ENDPOINT, XML_FEED, XML_INITIAL_OFFSET, XML_PAGE_SIZE};
use crate::error::{Result, ScraperError};
use crate::feeds::{format_url, EventFeed, FieldMap};
use crate::types::RawItem;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Current feed version: an XML document whose root element's direct
/// `<item>` children are the events. Each item is flattened into a JSON
/// object of child tag name -> text content so the rest of the pipeline is
/// agnostic to the transport format.
pub struct XmlFeed;

const ITEM_TAG: &str = "item";

pub static XML_FIELDS: FieldMap = FieldMap {
    event_name: "title",
    description: "body",
    date_range: "event_date",
    fee: "fee",
    registration_url: "registration_url",
    event_cancelled: "event_cancelled",
    venue_city: "venue_city",
    venue_country: "venue_country",
    venue_street: "venue_street",
    location_name: "location_name",
    province: "province",
    postal_code: "postal_code",
    contact_name: "contact_name",
    registration_phone: "registration_phone",
    registration_email: "registration_email",
    agency: "agency",
};

impl Default for XmlFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlFeed {
    pub fn new() -> Self {
        Self
    }
}

impl EventFeed for XmlFeed {
    fn feed_name(&self) -> &'static str {
        XML_FEED
    }

    fn endpoint(&self) -> &'static str {
        XML_ENDPOINT
    }

    fn initial_offset(&self) -> u64 {
        XML_INITIAL_OFFSET
    }

    fn offset_step(&self) -> u64 {
        XML_PAGE_SIZE
    }

    fn page_url(&self, offset: u64) -> String {
        format_url(XML_ENDPOINT, offset, XML_PAGE_SIZE)
    }

    fn parse_page(&self, body: &[u8]) -> Result<Vec<RawItem>> {
        let text = std::str::from_utf8(body)
            .map_err(|e| ScraperError::Xml(format!("page is not valid UTF-8: {e}")))?;
        parse_items(text, ITEM_TAG)
    }

    fn field_map(&self) -> Option<&'static FieldMap> {
        Some(&XML_FIELDS)
    }
}

/// Flatten every direct child of the document root whose tag is `item_tag`
/// into an object of child tag -> text. Markup nested inside a field (HTML
/// in the body, say) contributes its text content; the sanitizer deals with
/// tags that arrive entity-escaped.
fn parse_items(text: &str, item_tag: &str) -> Result<Vec<RawItem>> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut items: Vec<RawItem> = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<Map<String, Value>> = None;
    let mut field: Option<String> = None;
    let mut text_buf = String::new();

    loop {
        match reader
            .read_event()
            .map_err(|e| ScraperError::Xml(e.to_string()))?
        {
            Event::Start(e) => {
                depth += 1;
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if depth == 2 && name == item_tag {
                    current = Some(Map::new());
                } else if depth == 3 && current.is_some() {
                    field = Some(name);
                    text_buf.clear();
                }
            }
            Event::Empty(e) => {
                // Self-closing child, e.g. <fee/> -> empty string.
                if depth == 2 {
                    if let Some(map) = current.as_mut() {
                        let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                        map.insert(name, Value::String(String::new()));
                    }
                }
            }
            Event::Text(t) => {
                if current.is_some() && field.is_some() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| ScraperError::Xml(e.to_string()))?;
                    text_buf.push_str(&unescaped);
                }
            }
            Event::CData(t) => {
                if current.is_some() && field.is_some() {
                    text_buf.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 3 {
                    if let (Some(map), Some(name)) = (current.as_mut(), field.take()) {
                        map.insert(name, Value::String(text_buf.trim().to_string()));
                    }
                    text_buf.clear();
                } else if depth == 2 {
                    if let Some(map) = current.take() {
                        items.push(Value::Object(map));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}
