//! Token definitions for navtree source text.

use navtree_core::span::Span;

/// A lexical token of the navtree data file format.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// The `var` keyword.
    Var,
    /// The `null` keyword.
    Null,
    /// A JavaScript identifier (the document variable name).
    Identifier(&'src str),
    /// A double-quoted string literal, with escapes decoded.
    StringLiteral(String),
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `;`
    Semicolon,
    /// Non-newline whitespace.
    Whitespace,
    /// `\n`
    Newline,
    /// A `//` line comment (content without the slashes).
    LineComment(&'src str),
}

impl Token<'_> {
    /// Whether the token carries no grammar content.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::Newline | Token::LineComment(_)
        )
    }
}

/// A token paired with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}
