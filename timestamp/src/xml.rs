//! XML element encoding: the element's text is the Unix seconds value.
//!
//! Decoding reads the first element with the requested name and always
//! produces a UTC timestamp. There is no millisecond check on this path.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesText, Event};

use crate::error::{Result, TimestampError};
use crate::timestamp::Timestamp;

impl Timestamp {
    /// Encodes the timestamp as `<tag>unix-seconds</tag>`.
    pub fn to_xml(&self, tag: &str) -> Result<String> {
        let secs = self.unix().to_string();
        let mut writer = Writer::new(Vec::new());
        writer
            .create_element(tag)
            .write_text_content(BytesText::new(&secs))?;
        Ok(String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?)
    }

    /// Decodes the text of the first `<tag>` element in `xml` as Unix
    /// seconds.
    ///
    /// The text is the element's own character data: text (with entities
    /// resolved) and CDATA sections are joined, comments and child elements
    /// are skipped.
    pub fn from_xml(xml: &str, tag: &str) -> Result<Self> {
        let text = element_text(xml, tag)?;
        Timestamp::try_from_unix(text.parse::<i64>()?, 0)
    }
}

fn element_text(xml: &str, tag: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(start) if start.name().as_ref() == tag.as_bytes() => break,
            Event::Empty(start) if start.name().as_ref() == tag.as_bytes() => {
                return Ok(String::new());
            }
            Event::Eof => return Err(TimestampError::ElementNotFound(tag.to_string())),
            _ => {}
        }
    }

    let mut text = String::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Text(t) if depth == 0 => text.push_str(&t.unescape()?),
            Event::CData(c) if depth == 0 => text.push_str(std::str::from_utf8(&c)?),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(TimestampError::UnclosedElement(tag.to_string())),
            _ => {}
        }
    }
}
