//! Parser for Qt Linguist `.ts` translation sources
//!
//! The document shape, as produced by the upstream tooling:
//!
//! ```text
//! <TS language="uk" version="2.1">
//!   <context>
//!     <name>AddressBookPage</name>
//!     <message>
//!       <source>Create a new address</source>
//!       <translation>...</translation>
//!     </message>
//!     <message numerus="yes">
//!       <source>%n GB of free space available</source>
//!       <translation><numerusform>...</numerusform>...</translation>
//!     </message>
//!   </context>
//! </TS>
//! ```
//!
//! Structural damage (unterminated blocks, missing required children) is a
//! [`ParseError`]. Elements and attributes outside this vocabulary are
//! skipped whole so newer files still load.

use crate::error::ParseError;
use crate::locale::Locale;
use crate::reader::{Reader, Tag};

/// A parsed `.ts` document, still in file order.
///
/// This is the raw tree; build a
/// [`TranslationCatalog`](crate::catalog::TranslationCatalog) from it for
/// lookups.
#[derive(Debug, Clone)]
pub struct TsDocument {
    /// Locale named by the root element's `language` attribute
    pub locale: Locale,
    /// Format version, when the file declares one
    pub version: Option<String>,
    pub contexts: Vec<TsContext>,
}

/// One `<context>` block: a named group of messages, usually one dialog.
#[derive(Debug, Clone)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TsMessage>,
}

/// One `<message>` entry.
#[derive(Debug, Clone)]
pub struct TsMessage {
    pub source: String,
    pub translation: Translation,
}

/// The translation payload of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// An ordinary string; empty when the message is untranslated
    Single(String),
    /// Ordered `<numerusform>` variants of a plural-bearing message
    Plural(Vec<String>),
}

impl TsMessage {
    /// Whether this message carries no usable translation.
    pub fn is_untranslated(&self) -> bool {
        match &self.translation {
            Translation::Single(text) => text.is_empty(),
            Translation::Plural(variants) => variants.iter().all(|v| v.is_empty()),
        }
    }
}

impl TsDocument {
    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}

/// Parse a `.ts` document.
pub fn parse(input: &str) -> Result<TsDocument, ParseError> {
    Parser {
        reader: Reader::new(input),
    }
    .document()
}

fn attr<'v>(attrs: &'v [(&str, String)], name: &str) -> Option<&'v str> {
    attrs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

struct Parser<'a> {
    reader: Reader<'a>,
}

impl<'a> Parser<'a> {
    fn document(&mut self) -> Result<TsDocument, ParseError> {
        let (language, version) = self.ts_open()?;
        let line = self.reader.line();
        let locale = Locale::from_code(&language)
            .map_err(|_| ParseError::InvalidLanguage {
                value: language,
                line,
            })?;

        let mut contexts = Vec::new();
        loop {
            let tag = self.child_tag("TS")?;
            match tag {
                Tag::Close { name: "TS" } => break,
                ref t @ Tag::Close { .. } => return Err(self.unexpected("</TS>", t)),
                Tag::Open {
                    name: "context", ..
                } => contexts.push(self.context()?),
                Tag::Open { name, .. } => self.skip_element(name)?,
                Tag::SelfClose { .. } => {}
            }
        }
        // anything after </TS> is not ours to validate
        Ok(TsDocument {
            locale,
            version,
            contexts,
        })
    }

    fn ts_open(&mut self) -> Result<(String, Option<String>), ParseError> {
        let tag = self.child_tag("TS")?;
        match tag {
            Tag::Open { name: "TS", attrs } => {
                let language = attr(&attrs, "language")
                    .map(str::to_string)
                    .ok_or(ParseError::MissingAttribute {
                        attribute: "language",
                        tag: "TS",
                        line: self.reader.line(),
                    })?;
                let version = attr(&attrs, "version").map(str::to_string);
                Ok((language, version))
            }
            ref t => Err(self.unexpected("<TS>", t)),
        }
    }

    fn context(&mut self) -> Result<TsContext, ParseError> {
        let mut name: Option<String> = None;
        let mut messages = Vec::new();
        loop {
            let tag = self.child_tag("context")?;
            match tag {
                Tag::Close { name: "context" } => break,
                ref t @ Tag::Close { .. } => return Err(self.unexpected("</context>", t)),
                Tag::Open { name: "name", .. } => name = Some(self.element_text("name")?),
                Tag::SelfClose { name: "name", .. } => name = Some(String::new()),
                Tag::Open {
                    name: "message",
                    attrs,
                } => {
                    let numerus = attr(&attrs, "numerus") == Some("yes");
                    messages.push(self.message(numerus)?);
                }
                Tag::SelfClose {
                    name: "message", ..
                } => {
                    return Err(ParseError::MissingElement {
                        element: "source",
                        parent: "message",
                        line: self.reader.line(),
                    })
                }
                Tag::Open { name, .. } => self.skip_element(name)?,
                Tag::SelfClose { .. } => {}
            }
        }
        let line = self.reader.line();
        let name = name.ok_or(ParseError::MissingElement {
            element: "name",
            parent: "context",
            line,
        })?;
        Ok(TsContext { name, messages })
    }

    fn message(&mut self, numerus: bool) -> Result<TsMessage, ParseError> {
        let mut source: Option<String> = None;
        let mut translation: Option<Translation> = None;
        loop {
            let tag = self.child_tag("message")?;
            match tag {
                Tag::Close { name: "message" } => break,
                ref t @ Tag::Close { .. } => return Err(self.unexpected("</message>", t)),
                Tag::Open { name: "source", .. } => {
                    source = Some(self.element_text("source")?);
                }
                Tag::SelfClose { name: "source", .. } => source = Some(String::new()),
                Tag::Open {
                    name: "translation",
                    ..
                } => translation = Some(self.translation(numerus)?),
                Tag::SelfClose {
                    name: "translation",
                    ..
                } => translation = Some(empty_translation(numerus)),
                Tag::Open { name, .. } => self.skip_element(name)?,
                Tag::SelfClose { .. } => {}
            }
        }
        let line = self.reader.line();
        let source = source.ok_or(ParseError::MissingElement {
            element: "source",
            parent: "message",
            line,
        })?;
        // a missing <translation> is an untranslated message, not an error
        let translation = translation.unwrap_or_else(|| empty_translation(numerus));
        Ok(TsMessage {
            source,
            translation,
        })
    }

    /// `<translation>` payload: plain text, or ordered `<numerusform>`
    /// variants. A numerus message written as plain text keeps that text as
    /// its sole variant; once numerusforms are present, text between them is
    /// not significant and is discarded.
    fn translation(&mut self, numerus: bool) -> Result<Translation, ParseError> {
        let mut text = String::new();
        let mut variants: Vec<String> = Vec::new();
        loop {
            text.push_str(&self.reader.read_text());
            if self.reader.is_empty() {
                return Err(ParseError::UnexpectedEof {
                    expected: "</translation>".to_string(),
                    line: self.reader.line(),
                });
            }
            let tag = self.reader.next_tag()?;
            match tag {
                Tag::Close {
                    name: "translation",
                } => break,
                ref t @ Tag::Close { .. } => return Err(self.unexpected("</translation>", t)),
                Tag::Open {
                    name: "numerusform",
                    ..
                } => variants.push(self.element_text("numerusform")?),
                Tag::SelfClose {
                    name: "numerusform",
                    ..
                } => variants.push(String::new()),
                Tag::Open { name, .. } => self.skip_element(name)?,
                Tag::SelfClose { .. } => {}
            }
        }
        if numerus && variants.is_empty() && !text.trim().is_empty() {
            Ok(Translation::Plural(vec![text]))
        } else if numerus || !variants.is_empty() {
            Ok(Translation::Plural(variants))
        } else {
            Ok(Translation::Single(text))
        }
    }

    /// Text content of a leaf element, consuming its close tag.
    fn element_text(&mut self, name: &'static str) -> Result<String, ParseError> {
        let text = self.reader.read_text();
        if self.reader.is_empty() {
            return Err(ParseError::UnexpectedEof {
                expected: format!("</{name}>"),
                line: self.reader.line(),
            });
        }
        let tag = self.reader.next_tag()?;
        match tag {
            Tag::Close { name: close } if close == name => Ok(text),
            ref t => Err(self.unexpected(&format!("</{name}>"), t)),
        }
    }

    /// Next structural tag inside an element, discarding character data
    /// between children.
    fn child_tag(&mut self, parent: &'static str) -> Result<Tag<'a>, ParseError> {
        let _ = self.reader.read_text();
        if self.reader.is_empty() {
            return Err(ParseError::UnexpectedEof {
                expected: format!("</{parent}>"),
                line: self.reader.line(),
            });
        }
        self.reader.next_tag()
    }

    /// Consume the rest of an already-opened unknown element, nested
    /// children included.
    fn skip_element(&mut self, name: &str) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            let _ = self.reader.read_text();
            if self.reader.is_empty() {
                return Err(ParseError::UnexpectedEof {
                    expected: format!("</{name}>"),
                    line: self.reader.line(),
                });
            }
            match self.reader.next_tag()? {
                Tag::Open { .. } => depth += 1,
                Tag::SelfClose { .. } => {}
                Tag::Close { .. } => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
            }
        }
    }

    fn unexpected(&self, expected: &str, found: &Tag<'_>) -> ParseError {
        let found = match found {
            Tag::Open { name, .. } => format!("<{name}>"),
            Tag::SelfClose { name, .. } => format!("<{name}/>"),
            Tag::Close { name } => format!("</{name}>"),
        };
        ParseError::Unexpected {
            expected: expected.to_string(),
            found,
            line: self.reader.line(),
        }
    }
}

fn empty_translation(numerus: bool) -> Translation {
    if numerus {
        Translation::Plural(Vec::new())
    } else {
        Translation::Single(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contexts_and_messages() {
        let doc = parse(
            r#"<TS language="uk" version="2.1">
<context>
    <name>AddressBookPage</name>
    <message>
        <source>&amp;New</source>
        <translation>&amp;Нова</translation>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        assert_eq!(doc.locale.code(), "uk");
        assert_eq!(doc.version.as_deref(), Some("2.1"));
        assert_eq!(doc.contexts.len(), 1);
        let context = &doc.contexts[0];
        assert_eq!(context.name, "AddressBookPage");
        assert_eq!(context.messages[0].source, "&New");
        assert_eq!(
            context.messages[0].translation,
            Translation::Single("&Нова".to_string())
        );
    }

    #[test]
    fn parses_numerus_forms_in_order() {
        let doc = parse(
            r#"<TS language="uk" version="2.1">
<context>
    <name>Intro</name>
    <message numerus="yes">
        <source>%n GB of free space available</source>
        <translation><numerusform>one</numerusform><numerusform>few</numerusform><numerusform>many</numerusform></translation>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        let message = &doc.contexts[0].messages[0];
        assert_eq!(
            message.translation,
            Translation::Plural(vec![
                "one".to_string(),
                "few".to_string(),
                "many".to_string()
            ])
        );
    }

    #[test]
    fn unterminated_context_is_a_parse_error() {
        let result = parse(
            r#"<TS language="uk" version="2.1">
<context>
    <name>Broken</name>
    <message>
        <source>Error</source>
        <translation>Помилка</translation>
    </message>
</TS>"#,
        );
        assert!(matches!(result, Err(ParseError::Unexpected { .. })));

        let truncated = parse(r#"<TS language="uk"><context><name>Broken</name>"#);
        assert!(matches!(
            truncated,
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn context_without_name_is_a_parse_error() {
        let result = parse(r#"<TS language="uk"><context></context></TS>"#);
        assert!(matches!(
            result,
            Err(ParseError::MissingElement {
                element: "name",
                ..
            })
        ));
    }

    #[test]
    fn missing_language_attribute_is_a_parse_error() {
        let result = parse(r#"<TS version="2.1"></TS>"#);
        assert!(matches!(
            result,
            Err(ParseError::MissingAttribute {
                attribute: "language",
                ..
            })
        ));
    }

    #[test]
    fn unknown_elements_and_attributes_are_skipped() {
        let doc = parse(
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS language="vi_VN" version="2.1" sourcelanguage="en">
<extra-metadata><nested>ignored</nested></extra-metadata>
<context encoding="utf-8">
    <name>SendCoinsDialog</name>
    <message>
        <location filename="../sendcoinsdialog.ui" line="14"/>
        <source>Send Coins</source>
        <comment>window title</comment>
        <translation>Gửi Coins</translation>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        assert_eq!(doc.locale.code(), "vi_VN");
        let message = &doc.contexts[0].messages[0];
        assert_eq!(message.source, "Send Coins");
        assert_eq!(
            message.translation,
            Translation::Single("Gửi Coins".to_string())
        );
    }

    #[test]
    fn missing_translation_means_untranslated() {
        let doc = parse(
            r#"<TS language="vi_VN">
<context>
    <name>Dialog</name>
    <message>
        <source>Pending</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Also pending</source>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        assert!(doc.contexts[0].messages.iter().all(TsMessage::is_untranslated));
    }

    #[test]
    fn numerus_message_with_plain_text_keeps_it_as_sole_variant() {
        let doc = parse(
            r#"<TS language="vi_VN">
<context>
    <name>Dialog</name>
    <message numerus="yes">
        <source>%n item(s)</source>
        <translation>%n mục</translation>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        assert_eq!(
            doc.contexts[0].messages[0].translation,
            Translation::Plural(vec!["%n mục".to_string()])
        );
    }

    #[test]
    fn numerus_attribute_alone_marks_plural() {
        let doc = parse(
            r#"<TS language="vi_VN">
<context>
    <name>Dialog</name>
    <message numerus="yes">
        <source>%n item(s)</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>"#,
        )
        .unwrap();

        assert_eq!(
            doc.contexts[0].messages[0].translation,
            Translation::Plural(Vec::new())
        );
    }
}
