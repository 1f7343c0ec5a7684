use serde::{Deserialize, Serialize};

use super::range::Range;

/// A node of the token tree produced by [`scan`](crate::parsing::scan).
///
/// Every variant carries its source [`Range`]. Variants with a `tokens`
/// field are containers; which variants those are is fixed per kind, see
/// [`TokenKind::is_container`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Token {
    Document {
        range: Range,
        tokens: Vec<Token>,
    },
    Text {
        range: Range,
        text: String,
    },
    Bold {
        range: Range,
        tokens: Vec<Token>,
        was_closed: bool,
    },
    Italic {
        range: Range,
        tokens: Vec<Token>,
        was_closed: bool,
    },
    Code {
        range: Range,
        content: String,
        was_closed: bool,
    },
    Header {
        range: Range,
        tokens: Vec<Token>,
        /// 1..=6
        level: u8,
        has_after_space: bool,
    },
    Paragraph {
        range: Range,
        tokens: Vec<Token>,
    },
    NewLine {
        range: Range,
    },
    Link {
        range: Range,
        text: String,
        dest: Option<String>,
        /// Every consumed character, for rendering the fallback text.
        raw: String,
        was_closed: bool,
    },
    Image {
        range: Range,
        alt_text: String,
        url: Option<String>,
        raw: String,
        was_closed: bool,
    },
    Rule {
        range: Range,
        raw: String,
    },
    Blockquote {
        range: Range,
        tokens: Vec<Token>,
        nested_level: usize,
    },
    /// Children are always [`Token::ListItem`].
    List {
        range: Range,
        tokens: Vec<Token>,
    },
    ListItem {
        range: Range,
        marker: String,
        tokens: Vec<Token>,
    },
}

/// The tag of a [`Token`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Document,
    Text,
    Bold,
    Italic,
    Code,
    Header,
    Paragraph,
    NewLine,
    Link,
    Image,
    Rule,
    Blockquote,
    List,
    ListItem,
}

impl TokenKind {
    /// Whether tokens of this kind carry children.
    pub const fn is_container(self) -> bool {
        match self {
            TokenKind::Document
            | TokenKind::Bold
            | TokenKind::Italic
            | TokenKind::Header
            | TokenKind::Paragraph
            | TokenKind::Blockquote
            | TokenKind::List
            | TokenKind::ListItem => true,
            TokenKind::Text
            | TokenKind::Code
            | TokenKind::NewLine
            | TokenKind::Link
            | TokenKind::Image
            | TokenKind::Rule => false,
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Document { .. } => TokenKind::Document,
            Token::Text { .. } => TokenKind::Text,
            Token::Bold { .. } => TokenKind::Bold,
            Token::Italic { .. } => TokenKind::Italic,
            Token::Code { .. } => TokenKind::Code,
            Token::Header { .. } => TokenKind::Header,
            Token::Paragraph { .. } => TokenKind::Paragraph,
            Token::NewLine { .. } => TokenKind::NewLine,
            Token::Link { .. } => TokenKind::Link,
            Token::Image { .. } => TokenKind::Image,
            Token::Rule { .. } => TokenKind::Rule,
            Token::Blockquote { .. } => TokenKind::Blockquote,
            Token::List { .. } => TokenKind::List,
            Token::ListItem { .. } => TokenKind::ListItem,
        }
    }

    pub fn range(&self) -> Range {
        match self {
            Token::Document { range, .. }
            | Token::Text { range, .. }
            | Token::Bold { range, .. }
            | Token::Italic { range, .. }
            | Token::Code { range, .. }
            | Token::Header { range, .. }
            | Token::Paragraph { range, .. }
            | Token::NewLine { range }
            | Token::Link { range, .. }
            | Token::Image { range, .. }
            | Token::Rule { range, .. }
            | Token::Blockquote { range, .. }
            | Token::List { range, .. }
            | Token::ListItem { range, .. } => *range,
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// The child tokens, or `None` for leaf kinds.
    pub fn children(&self) -> Option<&[Token]> {
        match self {
            Token::Document { tokens, .. }
            | Token::Bold { tokens, .. }
            | Token::Italic { tokens, .. }
            | Token::Header { tokens, .. }
            | Token::Paragraph { tokens, .. }
            | Token::Blockquote { tokens, .. }
            | Token::List { tokens, .. }
            | Token::ListItem { tokens, .. } => Some(tokens),
            Token::Text { .. }
            | Token::Code { .. }
            | Token::NewLine { .. }
            | Token::Link { .. }
            | Token::Image { .. }
            | Token::Rule { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Token>> {
        match self {
            Token::Document { tokens, .. }
            | Token::Bold { tokens, .. }
            | Token::Italic { tokens, .. }
            | Token::Header { tokens, .. }
            | Token::Paragraph { tokens, .. }
            | Token::Blockquote { tokens, .. }
            | Token::List { tokens, .. }
            | Token::ListItem { tokens, .. } => Some(tokens),
            Token::Text { .. }
            | Token::Code { .. }
            | Token::NewLine { .. }
            | Token::Link { .. }
            | Token::Image { .. }
            | Token::Rule { .. } => None,
        }
    }

    /// Compares everything except children: kind, range and the
    /// kind-specific fields. For leaf kinds this is full equality.
    pub fn same_fields(&self, other: &Token) -> bool {
        if self.range() != other.range() {
            return false;
        }
        match (self, other) {
            (Token::Document { .. }, Token::Document { .. })
            | (Token::Paragraph { .. }, Token::Paragraph { .. })
            | (Token::NewLine { .. }, Token::NewLine { .. })
            | (Token::List { .. }, Token::List { .. }) => true,
            (Token::Text { text: a, .. }, Token::Text { text: b, .. }) => a == b,
            (Token::Bold { was_closed: a, .. }, Token::Bold { was_closed: b, .. })
            | (Token::Italic { was_closed: a, .. }, Token::Italic { was_closed: b, .. }) => a == b,
            (
                Token::Code {
                    content: a,
                    was_closed: ac,
                    ..
                },
                Token::Code {
                    content: b,
                    was_closed: bc,
                    ..
                },
            ) => a == b && ac == bc,
            (
                Token::Header {
                    level: a,
                    has_after_space: asp,
                    ..
                },
                Token::Header {
                    level: b,
                    has_after_space: bsp,
                    ..
                },
            ) => a == b && asp == bsp,
            (
                Token::Link {
                    text: at,
                    dest: ad,
                    raw: ar,
                    was_closed: ac,
                    ..
                },
                Token::Link {
                    text: bt,
                    dest: bd,
                    raw: br,
                    was_closed: bc,
                    ..
                },
            ) => at == bt && ad == bd && ar == br && ac == bc,
            (
                Token::Image {
                    alt_text: at,
                    url: au,
                    raw: ar,
                    was_closed: ac,
                    ..
                },
                Token::Image {
                    alt_text: bt,
                    url: bu,
                    raw: br,
                    was_closed: bc,
                    ..
                },
            ) => at == bt && au == bu && ar == br && ac == bc,
            (Token::Rule { raw: a, .. }, Token::Rule { raw: b, .. }) => a == b,
            (
                Token::Blockquote {
                    nested_level: a, ..
                },
                Token::Blockquote {
                    nested_level: b, ..
                },
            ) => a == b,
            (Token::ListItem { marker: a, .. }, Token::ListItem { marker: b, .. }) => a == b,
            _ => false,
        }
    }
}
