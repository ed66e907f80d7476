//! Namespace-aware element tree built from a response document.
//!
//! The tree is built in a single pass over the `quick-xml` event stream. Lookups
//! only ever match elements bound to [`NAMESPACE`], so the prefix a document
//! happens to use is irrelevant and foreign elements are skipped.

use std::str::FromStr as _;

use chrono::NaiveDateTime;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use rust_decimal::Decimal;

use crate::Result;
use crate::error::Error;
use crate::xml::{DATE_TIME_FORMAT, NAMESPACE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Element {
    name: String,
    path: String,
    in_namespace: bool,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String, path: String, in_namespace: bool) -> Self {
        Self {
            name,
            path,
            in_namespace,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Parses `xml` and checks that the root is `root` in the service namespace.
    pub(crate) fn parse_document(xml: &str, root: &str) -> Result<Element> {
        let element = Self::parse(xml)?;

        if !element.in_namespace {
            return Err(Error::decode(
                &element.path,
                format!("root element is not in namespace {NAMESPACE}"),
            ));
        }
        if element.name != root {
            return Err(Error::decode(
                &element.path,
                format!("expected root element {root}"),
            ));
        }

        Ok(element)
    }

    fn parse(xml: &str) -> Result<Element> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_resolved_event()? {
                (ns, Event::Start(start)) => {
                    let element = Self::open(&stack, &start, &ns)?;
                    stack.push(element);
                }
                (ns, Event::Empty(start)) => {
                    let element = Self::open(&stack, &start, &ns)?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                (_, Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::decode("", "unbalanced end tag"))?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                (_, Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                }
                (_, Event::CData(data)) => {
                    if let Some(current) = stack.last_mut() {
                        let data = std::str::from_utf8(&data).map_err(|e| {
                            Error::decode(&current.path, format!("CDATA is not UTF-8: {e}"))
                        })?;
                        current.text.push_str(data);
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::decode(&open.path, "element is never closed"));
        }
        root.ok_or_else(|| Error::decode("", "document has no root element"))
    }

    fn open(stack: &[Element], start: &BytesStart<'_>, ns: &ResolveResult<'_>) -> Result<Element> {
        let name = std::str::from_utf8(start.local_name().into_inner())
            .map_err(|e| Error::decode("", format!("element name is not UTF-8: {e}")))?
            .to_owned();
        let in_namespace =
            matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == NAMESPACE.as_bytes());

        let path = match stack.last() {
            Some(parent) => {
                let position = parent.children.iter().filter(|c| c.name == name).count() + 1;
                format!("{}/{name}[{position}]", parent.path)
            }
            None => name.clone(),
        };

        Ok(Element::new(name, path, in_namespace))
    }

    fn close(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(Error::decode(&element.path, "multiple root elements")),
        }
        Ok(())
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// First child named `name` in the service namespace.
    pub(crate) fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.in_namespace && c.name == name)
    }

    /// All children named `name` in the service namespace, in document order.
    pub(crate) fn children<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Element> + 's {
        self.children
            .iter()
            .filter(move |c| c.in_namespace && c.name == name)
    }

    pub(crate) fn required(&self, name: &str) -> Result<&Element> {
        self.child(name).ok_or_else(|| {
            Error::decode(
                format!("{}/{name}", self.path),
                "missing required element",
            )
        })
    }

    pub(crate) fn string(&self, name: &str) -> Result<String> {
        Ok(self.required(name)?.text.clone())
    }

    pub(crate) fn optional_string(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text.clone())
    }

    pub(crate) fn integer(&self, name: &str) -> Result<u32> {
        self.required(name)?.parse_integer()
    }

    pub(crate) fn decimal(&self, name: &str) -> Result<Decimal> {
        self.required(name)?.parse_decimal()
    }

    pub(crate) fn timestamp(&self, name: &str) -> Result<NaiveDateTime> {
        self.required(name)?.parse_timestamp()
    }

    pub(crate) fn optional_timestamp(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        self.child(name).map(Element::parse_timestamp).transpose()
    }

    fn parse_integer(&self) -> Result<u32> {
        self.text.parse::<u32>().map_err(|e| {
            Error::decode(&self.path, format!("invalid integer {:?}: {e}", self.text))
        })
    }

    fn parse_decimal(&self) -> Result<Decimal> {
        Decimal::from_str(&self.text).map_err(|e| {
            Error::decode(&self.path, format!("invalid decimal {:?}: {e}", self.text))
        })
    }

    fn parse_timestamp(&self) -> Result<NaiveDateTime> {
        if !is_fixed_timestamp(self.text.as_bytes()) {
            return Err(Error::decode(
                &self.path,
                format!("invalid timestamp {:?}, expected YYYY-MM-DDTHH:MM:SS", self.text),
            ));
        }
        NaiveDateTime::parse_from_str(&self.text, DATE_TIME_FORMAT).map_err(|e| {
            Error::decode(
                &self.path,
                format!("invalid timestamp {:?}, expected YYYY-MM-DDTHH:MM:SS: {e}", self.text),
            )
        })
    }
}

/// `YYYY-MM-DDTHH:MM:SS` exactly: zero padded, unsigned, no leap second.
fn is_fixed_timestamp(text: &[u8]) -> bool {
    text.len() == 19
        && text.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b'T',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
        && text.get(17) < Some(&b'6')
}
