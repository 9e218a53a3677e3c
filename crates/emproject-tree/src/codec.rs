//! Parse and serialize `CrossStudio_Project_File` documents.
//!
//! The on-disk form is a fixed DOCTYPE line followed by attribute-only
//! markup. Parsing skips the prolog (XML declaration, DOCTYPE, comments,
//! processing instructions) and ignores text content; writing re-emits
//! the DOCTYPE line and 2-space indented markup with childless elements
//! self-closed.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::element::Element;
use crate::error::TreeError;

/// The document type line Embedded Studio expects at the top of the file.
pub const DOCTYPE: &str = "<!DOCTYPE CrossStudio_Project_File>";

/// Parse a descriptor document into an element tree.
///
/// Exactly one root element is expected; attribute values are unescaped.
pub fn parse_document(input: &str) -> Result<Element, TreeError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(TreeError::MultipleRoots(name_of(&start)));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(TreeError::MultipleRoots(name_of(&start)));
                }
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    TreeError::StrayClosingTag(
                        String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    )
                })?;
                attach(&mut stack, &mut root, element);
            }
            // The schema carries all data in attributes.
            Event::Text(_) | Event::CData(_) => {}
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.pop() {
        return Err(TreeError::UnclosedElement(open.name));
    }
    root.ok_or(TreeError::NoRoot)
}

/// Serialize an element tree back to the on-disk form.
pub fn write_document(root: &Element) -> Result<String, TreeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, root)?;
    let markup = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    Ok(format!("{}\n{}\n", DOCTYPE, markup))
}

fn name_of(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, TreeError> {
    let mut element = Element::new(name_of(start));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        element.set_attr(&key, value.into_owned());
    }
    Ok(element)
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None => *root = Some(element),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), TreeError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in element.attrs() {
        start.push_attribute((key, value));
    }
    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in &element.children {
            write_element(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    }
    Ok(())
}
