/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::unescape::unescape;
use std::borrow::Cow;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

pub type Depth = usize;

// in general, these errors are just for reporting what happened, there isn't
// much value in lots of different match variants

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML Parse Error")]
    InvalidXml(#[from] xmlparser::Error),

    #[error("Invalid XML Escape: {esc}")]
    InvalidEscape { esc: String },

    #[error("Error parsing XML: {0}")]
    Custom(Cow<'static, str>),
}

impl XmlError {
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlError::Custom(msg.into())
    }
}

#[derive(PartialEq, Debug)]
pub struct Name<'a> {
    pub prefix: &'a str,
    pub local: &'a str,
}

impl Name<'_> {
    /// Check if a given name matches a tag name composed of `prefix:local` or just `local`
    pub fn matches(&self, tag_name: &str) -> bool {
        match tag_name.split_once(':') {
            None => tag_name == self.local,
            Some((prefix, local)) => self.prefix == prefix && self.local == local,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Attr<'a> {
    name: Name<'a>,
    // attribute values can be escaped (eg. with double quotes, so we need a Cow
    value: Cow<'a, str>,
}

#[derive(Debug, PartialEq)]
pub struct StartEl<'a> {
    name: Name<'a>,
    attributes: Vec<Attr<'a>>,
    closed: bool,
    depth: Depth,
}

/// Xml Start Element
///
/// ```xml
/// <a:b   c="d">
///  ^^^   ^^^^^
///  name  attributes
/// ```
impl<'a> StartEl<'a> {
    pub fn depth(&self) -> Depth {
        self.depth
    }

    fn new(local: &'a str, prefix: &'a str, depth: Depth) -> Self {
        Self {
            name: Name { prefix, local },
            attributes: vec![],
            closed: false,
            depth,
        }
    }

    /// Retrieve an attribute with a given key
    ///
    /// key `prefix:local` combined as a str, joined by a `:`
    pub fn attr<'b>(&'b self, key: &'b str) -> Option<&'b str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.matches(key))
            .map(|attr| attr.value.as_ref())
    }

    /// Returns whether this `StartEl` matches a given name
    /// in `prefix:local` form.
    pub fn matches(&self, pat: &str) -> bool {
        self.name.matches(pat)
    }

    /// Local component of this element's name
    ///
    /// ```xml
    /// <foo:bar>
    ///      ^^^
    /// ```
    pub fn local(&self) -> &str {
        self.name.local
    }

    /// Prefix component of this elements name (or empty string)
    /// ```xml
    /// <foo:bar>
    ///  ^^^
    /// ```
    pub fn prefix(&self) -> &str {
        self.name.prefix
    }

    /// Returns true of `el` at `depth` is a match for this `start_el`
    fn end_el(&self, el: &ElementEnd<'_>, depth: Depth) -> bool {
        if depth != self.depth {
            return false;
        }
        match el {
            ElementEnd::Open => false,
            ElementEnd::Close(prefix, local) => {
                prefix.as_str() == self.name.prefix && local.as_str() == self.name.local
            }
            ElementEnd::Empty => false,
        }
    }
}

/// Xml Document abstraction
///
/// This document wraps a lazy tokenizer with depth tracking.
/// Constructing a document is essentially free.
///
/// The document tracks the stack of open elements. A tokenizer error, a close tag that does not
/// match the innermost open element, or the end of input while an element is still open is
/// yielded once as an error, after which the document produces no more tokens. The failure is
/// retained and reported again by [`finish`](Document::finish).
pub struct Document<'a> {
    tokenizer: Tokenizer<'a>,
    open: Vec<Name<'a>>,
    failure: Option<Cow<'static, str>>,
}

impl<'a> TryFrom<&'a [u8]> for Document<'a> {
    type Error = XmlError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        Ok(Document::new(
            std::str::from_utf8(value).map_err(|_| XmlError::custom("invalid utf-8"))?,
        ))
    }
}

impl<'inp> Document<'inp> {
    pub fn new(doc: &'inp str) -> Self {
        Document {
            tokenizer: Tokenizer::from(doc),
            open: vec![],
            failure: None,
        }
    }

    /// "Depth first" iterator
    ///
    /// Unlike [`next_tag()`](ScopedDecoder::next_tag), this method returns the next
    /// start element regardless of depth. This is useful to give a pointer into the middle
    /// of a document to start reading.
    ///
    /// ```xml
    /// <Response> <-- first call returns this:
    ///    <A> <-- next call
    ///      <Nested /> <-- next call returns this
    ///      <MoreNested>hello</MoreNested> <-- then this:
    ///    </A>
    ///    <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    pub fn next_start_element<'a>(&'a mut self) -> Option<StartEl<'inp>> {
        next_start_element(self)
    }

    /// A scoped reader for the entire document
    pub fn root_element<'a>(&'a mut self) -> Result<ScopedDecoder<'inp, 'a>, XmlError> {
        let start_el = match self.next_start_element() {
            Some(start_el) => start_el,
            None => {
                return Err(match &self.failure {
                    Some(failure) => XmlError::Custom(failure.clone()),
                    None => XmlError::custom("no root element"),
                })
            }
        };
        Ok(ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        })
    }

    /// A scoped reader for a specific tag
    ///
    /// This method is necessary for when you need to return a ScopedDecoder from a function
    /// since normally the stacked-ownership that `next_tag()` uses would prevent returning a
    /// reference to a field owned by the current function
    pub fn scoped_to<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        }
    }

    /// Reads the rest of the document and reports whether it was well formed
    ///
    /// Scoped decoders stop quietly at the first malformed token, so a caller that has read
    /// everything it needs calls this to learn whether the input was truncated, had a
    /// mismatched close tag, or carried trailing content after the root element.
    pub fn finish(mut self) -> Result<(), XmlError> {
        while let Some(tok) = self.next() {
            if let Err(e) = tok {
                return Err(match self.failure.take() {
                    Some(failure) => XmlError::Custom(failure),
                    None => e,
                });
            }
        }
        match self.failure.take() {
            Some(failure) => Err(XmlError::Custom(failure)),
            None => Ok(()),
        }
    }

    fn fail(&mut self, msg: impl Into<Cow<'static, str>>) -> XmlError {
        let msg = msg.into();
        if self.failure.is_none() {
            self.failure = Some(msg.clone());
        }
        XmlError::Custom(msg)
    }
}

/// A new-type wrapper around `Token` to prevent the wrapped third party type from showing up in
/// public API
#[derive(Debug)]
pub struct XmlToken<'inp>(Token<'inp>);

/// Depth tracking iterator
///
/// ```xml
/// <a> <- startel depth 0
///   <b> <- startel depth 1
///     <c> <- startel depth 2
///     </c> <- endel depth 2
///   </b> <- endel depth 1
/// </a> <- endel depth 0
/// ```
impl<'inp> Iterator for Document<'inp> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlError>;
    fn next(&mut self) -> Option<Result<(XmlToken<'inp>, Depth), XmlError>> {
        if self.failure.is_some() {
            return None;
        }
        let tok = match self.tokenizer.next() {
            Some(Ok(tok)) => tok,
            Some(Err(e)) => return Some(Err(self.fail(format!("invalid XML: {}", e)))),
            None if self.open.is_empty() => return None,
            None => {
                let unclosed = self.open.last().map(|name| name.local).unwrap_or_default();
                return Some(Err(self.fail(format!(
                    "unexpected end of input, <{}> was never closed",
                    unclosed
                ))));
            }
        };
        // depth bookkeeping
        match tok {
            Token::ElementEnd {
                end: ElementEnd::Close(prefix, local),
                ..
            } => match self.open.pop() {
                Some(open) if open.prefix == prefix.as_str() && open.local == local.as_str() => {}
                Some(open) => {
                    return Some(Err(self.fail(format!(
                        "mismatched close tag: expected </{}>, found </{}>",
                        open.local,
                        local.as_str()
                    ))))
                }
                None => return Some(Err(self.fail("closing tag without an opening tag"))),
            },
            Token::ElementEnd {
                end: ElementEnd::Empty,
                ..
            } => {
                if self.open.pop().is_none() {
                    return Some(Err(self.fail("closing tag without an opening tag")));
                }
            }
            Token::ElementStart { prefix, local, .. } => {
                self.open.push(Name {
                    prefix: prefix.as_str(),
                    local: local.as_str(),
                });
                // We want the startel and endel to have the same depth, but after the opener,
                // the parser will be at depth 1. Return the previous depth:
                return Some(Ok((XmlToken(tok), self.open.len() - 1)));
            }
            _ => {}
        }
        Some(Ok((XmlToken(tok), self.open.len())))
    }
}

/// XmlTag Abstraction
///
/// ScopedDecoder represents a tag-scoped view into an XML document. Methods
/// on `ScopedDecoder` return `None` when the current tag has been exhausted.
pub struct ScopedDecoder<'inp, 'a> {
    doc: &'a mut Document<'inp>,
    start_el: StartEl<'inp>,
    terminated: bool,
}

/// When a scoped decoder is dropped, its entire scope is consumed so that the
/// next read begins at the next tag at the same depth.
impl Drop for ScopedDecoder<'_, '_> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<'inp> ScopedDecoder<'inp, '_> {
    /// The start element for this scope
    pub fn start_el<'a>(&'a self) -> &'a StartEl<'inp> {
        &self.start_el
    }

    /// Returns the next top-level tag in this scope
    /// The hierarchy of tags in the scope is maintained by borrowing
    /// the parent scope while the child is alive.
    ///
    /// ```xml
    /// <Response> <-- scoped reader on this tag
    ///    <A> <-- first call to next_tag returns this
    ///      <Nested /> <-- to get inner data, call `next_tag` on the returned decoder for `A`
    ///      <MoreNested>hello</MoreNested>
    ///    </A>
    ///    <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    pub fn next_tag<'a>(&'a mut self) -> Option<ScopedDecoder<'inp, 'a>> {
        let next_tag = next_start_element(self)?;
        Some(self.nested_decoder(next_tag))
    }

    fn nested_decoder<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: self.doc,
            start_el,
            terminated: false,
        }
    }
}

impl<'inp, 'a> Iterator for ScopedDecoder<'inp, 'a> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_el.closed {
            self.terminated = true;
        }
        if self.terminated {
            return None;
        }
        let (tok, depth) = match self.doc.next() {
            Some(Ok((tok, depth))) => (tok, depth),
            other => {
                self.terminated = true;
                return other;
            }
        };

        match &tok.0 {
            Token::ElementEnd { end, .. } if self.start_el.end_el(end, depth) => {
                self.terminated = true;
                return None;
            }
            _ => {}
        }
        Some(Ok((tok, depth)))
    }
}

/// Load the next start element out of a depth-tagged token iterator
fn next_start_element<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlError>>,
) -> Option<StartEl<'inp>> {
    let mut out = StartEl::new("", "", 0);
    loop {
        match tokens.next()? {
            Ok((XmlToken(Token::ElementStart { local, prefix, .. }), depth)) => {
                out.name.local = local.as_str();
                out.name.prefix = prefix.as_str();
                out.depth = depth;
            }
            Ok((
                XmlToken(Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                }),
                _,
            )) => out.attributes.push(Attr {
                name: Name {
                    local: local.as_str(),
                    prefix: prefix.as_str(),
                },
                value: unescape(value.as_str()).ok()?,
            }),
            Ok((
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Open,
                    ..
                }),
                _,
            )) => break,
            Ok((
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Empty,
                    ..
                }),
                _,
            )) => {
                out.closed = true;
                break;
            }
            Err(_) => return None,
            _ => {}
        }
    }
    Some(out)
}

/// Returns the data element at the current position
///
/// If the current position is not a data element (and is instead a `<start-element>`) an error
/// will be returned
pub fn try_data<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlError>>,
) -> Result<Cow<'inp, str>, XmlError> {
    loop {
        match tokens.next().map(|opt| opt.map(|opt| opt.0)) {
            None => return Ok(Cow::Borrowed("")),
            Some(Ok(XmlToken(Token::Text { text }))) => return unescape(text.as_str()),
            Some(Ok(XmlToken(Token::Cdata { text, .. }))) => return Ok(Cow::Borrowed(text.as_str())),
            Some(Ok(e @ XmlToken(Token::ElementStart { .. }))) => {
                return Err(XmlError::custom(format!(
                    "looking for a data element, found: {:?}",
                    e
                )))
            }
            Some(Err(e)) => return Err(e),
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use crate::decode::{try_data, Attr, Depth, Document, Name, StartEl};
    use proptest::prelude::*;

    // test helper to create a closed startel
    fn closed<'a>(local: &'a str, prefix: &'a str, depth: Depth) -> StartEl<'a> {
        let mut s = StartEl::new(local, prefix, depth);
        s.closed = true;
        s
    }

    #[test]
    fn scoped_tokens() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().expect("valid document");
        assert_eq!(root.start_el().local(), "Response");
        assert_eq!(root.next_tag().expect("tag exists").start_el().local(), "A");
        assert!(root.next_tag().is_none());
    }

    #[test]
    fn handle_depth_properly() {
        let xml = r#"<Response><Response></Response><A/></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid document");
        assert_eq!(
            scoped.next_tag().unwrap().start_el(),
            &StartEl::new("Response", "", 1)
        );
        let closed_a = closed("A", "", 1);
        assert_eq!(scoped.next_tag().unwrap().start_el(), &closed_a);
        assert!(scoped.next_tag().is_none())
    }

    #[test]
    fn self_closing() {
        let xml = r#"<Response/>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid doc");
        assert!(scoped.start_el.closed);
        assert!(scoped.next_tag().is_none())
    }

    #[test]
    fn terminate_scope() {
        let xml = r#"<Response><Struct><A></A><Also/></Struct><More/></Response>"#;
        let mut doc = Document::new(xml);
        let mut response_iter = doc.root_element().expect("valid doc");
        let mut struct_iter = response_iter.next_tag().unwrap();
        assert_eq!(
            struct_iter.next_tag().as_ref().map(|t| t.start_el()),
            Some(&StartEl::new("A", "", 2))
        );
        // When the inner iter is dropped, it will read to the end of its scope
        // prevent accidental behavior where we didn't read a full node
        drop(struct_iter);
        assert_eq!(
            response_iter.next_tag().unwrap().start_el(),
            &closed("More", "", 1)
        );
    }

    #[test]
    fn read_data_invalid() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        try_data(&mut resp).expect_err("no data");
    }

    #[test]
    fn read_data() {
        let xml = r#"<Response>hello</Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped).unwrap(), "hello");
    }

    /// Whitespace within an element is preserved
    #[test]
    fn read_data_whitespace() {
        let xml = r#"<Response> hello </Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped).unwrap(), " hello ");
    }

    #[test]
    fn empty_element_reads_empty_data() {
        let xml = r#"<Response><Marker/></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        let mut marker = scoped.next_tag().unwrap();
        assert_eq!(try_data(&mut marker).unwrap(), "");
    }

    #[test]
    fn ignore_insignificant_whitespace() {
        let xml = r#"<Response>   <A>  </A>    </Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        let mut a = resp.next_tag().expect("should be a");
        let data = try_data(&mut a).expect("valid");
        assert_eq!(data, "  ");
    }

    #[test]
    fn read_attributes() {
        let xml = r#"<Response xsi:type="CanonicalUser">hello</Response>"#;
        let mut tokenizer = Document::new(xml);
        let root = tokenizer.root_element().unwrap();

        assert_eq!(
            root.start_el().attributes,
            vec![Attr {
                name: Name {
                    prefix: "xsi",
                    local: "type"
                },
                value: "CanonicalUser".into()
            }]
        );
        assert_eq!(root.start_el().attr("xsi:type"), Some("CanonicalUser"));
    }

    #[test]
    fn escape_data() {
        let xml = r#"<Response key="&quot;hey&quot;>">&gt;</Response>"#;
        let mut root = Document::new(xml);
        let mut root = root.root_element().unwrap();
        assert_eq!(try_data(&mut root).unwrap(), ">");
        assert_eq!(root.start_el().attr("key"), Some("\"hey\">"));
    }

    #[test]
    fn nested_self_closer() {
        let xml = r#"<XmlListsInputOutput>
                <stringList/>
                <stringSet></stringSet>
        </XmlListsInputOutput>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut string_list = root.next_tag().unwrap();
        assert_eq!(string_list.start_el(), &closed("stringList", "", 1));
        assert!(string_list.next_tag().is_none());
        drop(string_list);
        assert_eq!(
            root.next_tag().unwrap().start_el(),
            &StartEl::new("stringSet", "", 1)
        );
    }

    #[test]
    fn unbalanced_close_is_an_error() {
        let mut doc = Document::new("</Response>");
        match doc.next() {
            Some(Err(_)) => {}
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_document_finishes() {
        let mut doc = Document::new("<Response><A>1</A><B/></Response>\n");
        let mut root = doc.root_element().unwrap();
        while let Some(mut tag) = root.next_tag() {
            try_data(&mut tag).expect("data");
        }
        drop(root);
        doc.finish().expect("well formed");
    }

    #[test]
    fn truncated_document_fails_to_finish() {
        let mut doc = Document::new("<Response><A>abc");
        let mut root = doc.root_element().unwrap();
        let mut a = root.next_tag().expect("A is present");
        assert_eq!(try_data(&mut a).unwrap(), "abc");
        drop(a);
        assert!(root.next_tag().is_none());
        drop(root);
        let err = doc.finish().expect_err("input ends inside <Response>");
        assert!(err.to_string().contains("never closed"), "{}", err);
    }

    #[test]
    fn mismatched_close_tag_is_an_error() {
        let mut doc = Document::new("<Response><A>1</B></Response>");
        let mut root = doc.root_element().unwrap();
        let mut a = root.next_tag().unwrap();
        assert_eq!(try_data(&mut a).unwrap(), "1");
        drop(a);
        drop(root);
        let err = doc.finish().expect_err("</B> does not close <A>");
        assert!(err.to_string().contains("mismatched close tag"), "{}", err);
    }

    #[test]
    fn trailing_content_is_an_error() {
        let mut doc = Document::new("<Response/> <<<garbage");
        drop(doc.root_element().unwrap());
        doc.finish().expect_err("garbage after the root element");
    }

    #[test]
    fn reading_past_a_failure_yields_nothing() {
        let mut doc = Document::new("<Response><A>");
        assert!(doc.next_start_element().is_some());
        assert!(doc.next_start_element().is_some());
        assert!(matches!(doc.next(), Some(Err(_))));
        assert!(doc.next().is_none());
    }

    proptest! {
        #[test]
        fn no_panics(s: String) {
            let mut doc = Document::new(&s);
            if let Ok(mut root) = doc.root_element() {
                while let Some(mut tag) = root.next_tag() {
                    let _ = try_data(&mut tag);
                }
            };
            let _ = doc.finish();
        }
    }
}
