//! Low-level cursor over Linguist markup
//!
//! `.ts` files use a small XML subset: nested tags with quoted attributes,
//! character data with entity references, and an optional prolog. This is a
//! hand-rolled byte cursor over that subset; it tracks line numbers so parse
//! errors can point at the offending spot.

use crate::error::ParseError;

/// A structural token: an opening, closing, or self-closing tag.
///
/// Prolog constructs (`<?..?>`, `<!DOCTYPE ..>`) and comments are consumed
/// silently by [`Reader::next_tag`] and never surface here.
#[derive(Debug)]
pub(crate) enum Tag<'a> {
    Open {
        name: &'a str,
        attrs: Vec<(&'a str, String)>,
    },
    Close {
        name: &'a str,
    },
    SelfClose {
        name: &'a str,
        attrs: Vec<(&'a str, String)>,
    },
}

pub(crate) struct Reader<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Advance past the next occurrence of `delim`.
    fn skip_past(&mut self, delim: &str) -> Result<(), ParseError> {
        match self.input[self.pos..].find(delim) {
            Some(off) => {
                let end = self.pos + off + delim.len();
                let skipped = &self.input[self.pos..end];
                self.line += skipped.bytes().filter(|&b| b == b'\n').count() as u32;
                self.pos = end;
                Ok(())
            }
            None => Err(ParseError::UnexpectedEof {
                expected: format!("'{delim}'"),
                line: self.line,
            }),
        }
    }

    /// Character data up to the next tag or end of input, entities decoded.
    pub(crate) fn read_text(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b != b'<') {
            self.bump();
        }
        decode_entities(&self.input[start..self.pos])
    }

    /// The next structural tag, skipping the prolog and comments.
    pub(crate) fn next_tag(&mut self) -> Result<Tag<'a>, ParseError> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "a tag".to_string(),
                        line: self.line,
                    })
                }
                Some(b'<') => {}
                Some(_) => {
                    return Err(ParseError::Unexpected {
                        expected: "'<'".to_string(),
                        found: self.found_here(),
                        line: self.line,
                    })
                }
            }
            if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.starts_with("<!") {
                self.skip_past(">")?;
            } else {
                return self.tag();
            }
        }
    }

    fn tag(&mut self) -> Result<Tag<'a>, ParseError> {
        self.bump(); // '<'
        if self.peek() == Some(b'/') {
            self.bump();
            let name = self.name()?;
            self.skip_whitespace();
            self.expect_byte(b'>')?;
            return Ok(Tag::Close { name });
        }

        let name = self.name()?;
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.bump();
                    return Ok(Tag::Open { name, attrs });
                }
                Some(b'/') => {
                    self.bump();
                    self.expect_byte(b'>')?;
                    return Ok(Tag::SelfClose { name, attrs });
                }
                Some(_) => attrs.push(self.attribute()?),
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: format!("end of <{name}> tag"),
                        line: self.line,
                    })
                }
            }
        }
    }

    fn attribute(&mut self) -> Result<(&'a str, String), ParseError> {
        let key = self.name()?;
        self.skip_whitespace();
        self.expect_byte(b'=')?;
        self.skip_whitespace();
        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => {
                return Err(ParseError::Unexpected {
                    expected: "a quoted attribute value".to_string(),
                    found: self.found_here(),
                    line: self.line,
                })
            }
        };
        self.bump();
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b) if b == quote => break,
                Some(_) => self.bump(),
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "closing quote".to_string(),
                        line: self.line,
                    })
                }
            }
        }
        let raw = &self.input[start..self.pos];
        self.bump(); // quote
        Ok((key, decode_entities(raw)))
    }

    fn name(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b) if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b':')
        ) {
            self.bump();
        }
        if self.pos == start {
            return Err(ParseError::Unexpected {
                expected: "a tag or attribute name".to_string(),
                found: self.found_here(),
                line: self.line,
            });
        }
        Ok(&self.input[start..self.pos])
    }

    fn expect_byte(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.peek() == Some(byte) {
            self.bump();
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                expected: format!("'{}'", byte as char),
                found: self.found_here(),
                line: self.line,
            })
        }
    }

    fn found_here(&self) -> String {
        match self.input[self.pos..].chars().next() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        }
    }
}

/// Decode XML entity references into literal characters.
///
/// `&amp;` becomes a literal `&`, which the hosting UI reads as its
/// accelerator-key marker; it is kept in the text, not stripped. Unknown
/// entities and stray ampersands pass through verbatim.
pub(crate) fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail[1..].find(';').map(|i| i + 1) {
            Some(semi) if semi > 1 && semi <= 12 => {
                match &tail[1..semi] {
                    "amp" => out.push('&'),
                    "lt" => out.push('<'),
                    "gt" => out.push('>'),
                    "quot" => out.push('"'),
                    "apos" => out.push('\''),
                    name => match decode_char_ref(name) {
                        Some(c) => out.push(c),
                        None => out.push_str(&tail[..=semi]),
                    },
                }
                rest = &tail[semi + 1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_char_ref(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let value = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(value)
}
