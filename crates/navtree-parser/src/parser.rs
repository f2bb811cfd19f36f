//! Parser for navtree source tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer)
//! into the parsed AST defined in [`parser_types`](super::parser_types). The
//! entry point is [`build_document`].

use winnow::{
    Parser as _,
    combinator::{alt, repeat},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use navtree_core::span::{Span, Spanned};

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
    tokens::{PositionedToken, Token},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
    /// Remaining token count (`eof_offset()`) at error start position
    ///
    /// Used to calculate start_offset as: `tokens.len() - start_offset_value`
    StartOffset(usize),
}

type Input<'src> = NavtreeTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type NavtreeTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    let start_remaining = input.eof_offset();

    match f(input) {
        Ok(o) => Ok(o),
        Err(ErrMode::Backtrack(mut e)) | Err(ErrMode::Cut(mut e)) => {
            e.push(Context::StartOffset(start_remaining));
            Err(ErrMode::Cut(e))
        }
        Err(e) => Err(e),
    }
}

/// Helper to create a Cut error with StartOffset context
fn cut_error_with_offset(input: &Input<'_>) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::StartOffset(input.eof_offset()));
    ErrMode::Cut(e)
}

/// Parse whitespace, newlines, and comments
fn trivia(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| token.token.is_trivia())
        .void()
        .parse_next(input)
}

/// Parse zero or more trivia tokens
fn trivia0(input: &mut Input<'_>) -> IResult<()> {
    repeat(0.., trivia).parse_next(input)
}

/// Parse one or more trivia tokens
fn trivia1(input: &mut Input<'_>) -> IResult<()> {
    repeat(1.., trivia).parse_next(input)
}

/// Parse the `var` keyword
fn var_keyword(input: &mut Input<'_>) -> IResult<Span> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Var))
        .map(|token: &PositionedToken<'_>| token.span)
        .context(Context::Label("`var` keyword"))
        .parse_next(input)
}

/// Parse the `null` keyword
fn null_keyword(input: &mut Input<'_>) -> IResult<Span> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Null))
        .map(|token: &PositionedToken<'_>| token.span)
        .context(Context::Label("`null`"))
        .parse_next(input)
}

/// Parse a single punctuation token, returning its span
fn punct(
    expected: Token<'static>,
    label: &'static str,
) -> impl FnMut(&mut Input<'_>) -> IResult<Span> {
    move |input: &mut Input<'_>| {
        any.verify(|token: &PositionedToken<'_>| token.token == expected)
            .map(|token: &PositionedToken<'_>| token.span)
            .context(Context::Label(label))
            .parse_next(input)
    }
}

/// Parse an identifier with span preservation
fn identifier<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Identifier(name) => Some(Spanned::new(name, token.span)),
        _ => None,
    })
    .context(Context::Label("identifier"))
    .parse_next(input)
}

/// Parse a string literal with span preservation
fn string_literal(input: &mut Input<'_>) -> IResult<Spanned<String>> {
    any.verify_map(|token: &PositionedToken<'_>| match &token.token {
        Token::StringLiteral(s) => Some(Spanned::new(s.clone(), token.span)),
        _ => None,
    })
    .context(Context::Label("string literal"))
    .parse_next(input)
}

/// Parse a row's target slot: a string or `null`
fn target_value(input: &mut Input<'_>) -> IResult<Spanned<Option<String>>> {
    alt((
        string_literal.map(|s| s.map(Some)),
        null_keyword.map(|span| Spanned::new(None, span)),
    ))
    .context(Context::Label("target (string or null)"))
    .parse_next(input)
}

/// Parse a row's child slot: a reference string, `null`, or a nested array
fn child_value(input: &mut Input<'_>) -> IResult<types::RawChild> {
    alt((
        string_literal.map(types::RawChild::Reference),
        null_keyword.map(|_| types::RawChild::Leaf),
        array.map(|(rows, _)| types::RawChild::Rows(rows)),
    ))
    .context(Context::Label("children (string, null, or array)"))
    .parse_next(input)
}

/// Parse one row: `[ "name", target, child ]`
///
/// Backtracks only before the opening `[`; the elements of a row array are
/// always rows, so once the bracket is consumed the row must complete.
fn row(input: &mut Input<'_>) -> IResult<types::RawRow> {
    let open = punct(Token::LBracket, "opening `[`")(input)?;

    cut_err(input, |input| {
        trivia0.parse_next(input)?;
        let name = string_literal
            .context(Context::Label("entry name string"))
            .parse_next(input)?;

        trivia0.parse_next(input)?;
        punct(Token::Comma, "`,` after entry name")(input)?;
        trivia0.parse_next(input)?;

        let target = target_value.parse_next(input)?;

        trivia0.parse_next(input)?;
        punct(Token::Comma, "`,` after entry target")(input)?;
        trivia0.parse_next(input)?;

        let child = child_value.parse_next(input)?;

        trivia0.parse_next(input)?;
        let close = punct(Token::RBracket, "closing `]` after entry")(input)?;

        Ok(types::RawRow {
            name,
            target,
            child,
            span: open.union(close),
        })
    })
}

/// Parse a bracketed, comma-separated row array
fn array(input: &mut Input<'_>) -> IResult<(Vec<types::RawRow>, Span)> {
    let open = punct(Token::LBracket, "opening `[`")(input)?;
    trivia0.parse_next(input)?;

    let mut rows = Vec::new();

    // First row is optional: `[]` is an empty array
    let checkpoint = input.checkpoint();
    match row.parse_next(input) {
        Ok(first) => {
            rows.push(first);

            // Remaining rows, each preceded by a comma
            loop {
                let before_separator = input.checkpoint();
                trivia0.parse_next(input)?;
                let comma: IResult<()> = any
                    .verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Comma))
                    .void()
                    .parse_next(input);

                if comma.is_err() {
                    input.reset(&before_separator);
                    break;
                }

                trivia0.parse_next(input)?;
                rows.push(row.parse_next(input)?);
            }
        }
        Err(ErrMode::Backtrack(_)) => input.reset(&checkpoint),
        Err(e) => return Err(e),
    }

    trivia0.parse_next(input)?;
    let close = punct(Token::RBracket, "closing `]`")(input)?;

    Ok((rows, open.union(close)))
}

/// Parse a complete document: `var <name> = [ rows ];`
fn document<'src>(input: &mut Input<'src>) -> IResult<types::RawDocument<'src>> {
    trivia0.parse_next(input)?;
    var_keyword.parse_next(input)?;

    // After `var`, commit to parsing a document
    cut_err(input, |input| {
        trivia1
            .context(Context::Label("whitespace after `var`"))
            .parse_next(input)?;

        let name = identifier
            .context(Context::Label("document name"))
            .parse_next(input)?;

        trivia0.parse_next(input)?;
        punct(Token::Equals, "`=` after document name")(input)?;
        trivia0.parse_next(input)?;

        let (rows, _) = array.parse_next(input)?;

        trivia0.parse_next(input)?;
        punct(Token::Semicolon, "`;` after closing `]`")(input)?;
        trivia0.parse_next(input)?;

        Ok(types::RawDocument { name, rows })
    })
}

/// Utility function to convert winnow errors to our diagnostic format
///
/// Extracts position information from error context (StartOffset) and
/// calculates precise error spans using the token array.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    // Extract start offset from error context if available
    let start_remaining = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().find_map(|ctx| match ctx {
            Context::StartOffset(n) => Some(*n),
            _ => None,
        }),
        _ => None,
    };

    // Calculate offsets from remaining token counts
    let end_offset = tokens.len() - current_remaining;
    let start_offset = start_remaining.map(|r| tokens.len() - r).unwrap_or(0);

    match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
            let contexts: Vec<String> = e
                .context()
                .filter_map(|ctx| match ctx {
                    Context::Label(label) => Some(format!("expected {label}")),
                    _ => None,
                })
                .collect();

            let message = if contexts.is_empty() {
                "unexpected token or end of input".to_string()
            } else {
                contexts.join(", ")
            };

            // Calculate the error span from token positions
            let error_span = if tokens.is_empty() {
                Span::default()
            } else {
                let examine_range = if start_offset < end_offset {
                    // Parser consumed tokens - examine that range
                    start_offset..end_offset
                } else if end_offset < tokens.len() {
                    if matches!(tokens[end_offset].token, Token::RBracket) {
                        // At a delimiter without consuming - examine what
                        // came before it (e.g. a missing comma before `]`)
                        0..end_offset.max(1)
                    } else {
                        // At a specific non-delimiter token
                        end_offset..end_offset + 1
                    }
                } else {
                    // EOF - examine all tokens
                    0..tokens.len()
                };

                let slice = &tokens[examine_range];
                let first = slice
                    .iter()
                    .find(|t| !t.token.is_trivia())
                    .map(|t| t.span)
                    .unwrap_or(slice[0].span);
                let last = slice
                    .iter()
                    .rev()
                    .find(|t| !t.token.is_trivia())
                    .map(|t| t.span)
                    .unwrap_or(slice[slice.len() - 1].span);
                first.union(last)
            };

            Diagnostic::error(format!("unexpected token: {message}"))
                .with_code(ErrorCode::E100)
                .with_label(error_span, "unexpected token")
                .with_help("check the row shape: `[ \"name\", target, children ]`")
        }
        ErrMode::Incomplete(_) => {
            // This should not happen as we are not supporting streaming input.
            let error_span = tokens
                .iter()
                .rev()
                .find(|t| !t.token.is_trivia())
                .map(|t| t.span)
                .unwrap_or_default();

            Diagnostic::error("incomplete input, more tokens expected")
                .with_code(ErrorCode::E101)
                .with_label(error_span, "incomplete")
                .with_help("ensure the file ends with `];`")
        }
    }
}

/// Build a document AST from tokens
pub(crate) fn build_document<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<types::RawDocument<'src>, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match document.parse_next(&mut token_slice) {
        Ok(parsed) => {
            if !token_slice.is_empty() {
                let err = cut_error_with_offset(&token_slice);
                let current_remaining = token_slice.eof_offset();
                return Err(convert_error(err, tokens, current_remaining));
            }
            Ok(parsed)
        }
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining))
        }
    }
}
