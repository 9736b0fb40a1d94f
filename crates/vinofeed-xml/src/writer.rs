//! Serialization of feed rows into the Vivino product-list document.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <vivino-product-list>
//!   <product>
//!     <product-name>Chateau Test 2019</product-name>
//!     <price>12.50</price>
//!     <bottles size="750ml">1</bottles>
//!     <link>https://shop.example.nl/chateau-test</link>
//!     <inventory-count>200</inventory-count>
//!   </product>
//! </vivino-product-list>
//! ```

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use vinofeed_core::FeedRow;

use crate::error::FeedError;

pub const ROOT_ELEMENT: &str = "vivino-product-list";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Renders `rows` as a complete feed document.
///
/// Rows without a product name are written without a `product-name`
/// element. Text content is XML-escaped.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if an element cannot be written and
/// [`FeedError::Encoding`] if the output is not UTF-8.
pub fn render_feed(rows: &[FeedRow]) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|source| FeedError::Xml {
            element: "declaration",
            source,
        })?;

    start(&mut writer, ROOT_ELEMENT)?;
    for row in rows {
        write_product(&mut writer, row)?;
    }
    end(&mut writer, ROOT_ELEMENT)?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_product(writer: &mut XmlWriter, row: &FeedRow) -> Result<(), FeedError> {
    start(writer, "product")?;

    if let Some(name) = &row.product_name {
        text_element(writer, "product-name", name)?;
    }
    text_element(writer, "price", &row.price)?;

    let mut bottles = BytesStart::new("bottles");
    bottles.push_attribute(("size", row.bottle_size()));
    writer
        .write_event(Event::Start(bottles))
        .and_then(|()| writer.write_event(Event::Text(BytesText::new(row.bottle_count()))))
        .and_then(|()| writer.write_event(Event::End(BytesEnd::new("bottles"))))
        .map_err(|source| FeedError::Xml {
            element: "bottles",
            source,
        })?;

    text_element(writer, "link", &row.link)?;
    text_element(writer, "inventory-count", &row.inventory_count.to_string())?;

    end(writer, "product")
}

fn text_element(
    writer: &mut XmlWriter,
    element: &'static str,
    text: &str,
) -> Result<(), FeedError> {
    writer
        .write_event(Event::Start(BytesStart::new(element)))
        .and_then(|()| writer.write_event(Event::Text(BytesText::new(text))))
        .and_then(|()| writer.write_event(Event::End(BytesEnd::new(element))))
        .map_err(|source| FeedError::Xml { element, source })
}

fn start(writer: &mut XmlWriter, element: &'static str) -> Result<(), FeedError> {
    writer
        .write_event(Event::Start(BytesStart::new(element)))
        .map_err(|source| FeedError::Xml { element, source })
}

fn end(writer: &mut XmlWriter, element: &'static str) -> Result<(), FeedError> {
    writer
        .write_event(Event::End(BytesEnd::new(element)))
        .map_err(|source| FeedError::Xml { element, source })
}
