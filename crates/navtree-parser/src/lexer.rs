//! Lexical analyzer for navtree source text.
//!
//! The lexer converts source text into a stream of [`Token`]s for parsing.
//! It handles whitespace, line comments, JavaScript string literals, and the
//! handful of punctuation tokens the format uses.
//!
//! The public entry point is [`tokenize`], which keeps scanning past
//! unexpected characters and collects all diagnostics in a single pass.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, not, peek, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, none_of, one_of, take_while},
};

use navtree_core::span::Span;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    tokens::{PositionedToken, Token},
};

/// Rich diagnostic information for lexer errors.
///
/// Attached to winnow errors via `.context()` so that precise error codes,
/// labels, and spans survive to the reported [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    label: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<LexerDiagnostic>>>;

/// Parse a unicode escape in a string: `\uXXXX` with exactly 4 hex digits.
///
/// This parser handles the portion after the backslash, starting with `u`.
/// JavaScript (not Rust) syntax: no braces, fixed width. Surrogate
/// codepoints are rejected.
///
/// Takes `escape_start` (the position of the `\`) for error spans. Uses
/// `cut_err` after `u` to commit and preserve diagnostic context.
fn string_escape_unicode(input: &mut Input<'_>, escape_start: usize) -> IResult<char> {
    preceded(
        'u',
        cut_err(
            take_while(4..=4, |c: char| c.is_ascii_hexdigit())
                .context(LexerDiagnostic {
                    code: ErrorCode::E004,
                    message: "invalid unicode escape",
                    label: "escape starts here",
                    help: Some("use the JavaScript format `\\uXXXX` with exactly 4 hex digits"),
                    start: escape_start,
                })
                .verify_map(|hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
                .context(LexerDiagnostic {
                    code: ErrorCode::E005,
                    message: "invalid unicode codepoint",
                    label: "escape starts here",
                    help: Some("surrogate codepoints `\\uD800`-`\\uDFFF` cannot appear alone"),
                    start: escape_start,
                }),
        ),
    )
    .parse_next(input)
}

/// Parse an escape sequence in a string starting with backslash.
///
/// Handles the JavaScript escapes the generator can emit or that appear in
/// hand-maintained files: `\"`, `\\`, `\/`, `\n`, `\r`, `\t`, `\uXXXX`.
fn string_escape(input: &mut Input<'_>) -> IResult<char> {
    let escape_start = input.current_token_start();

    '\\'.parse_next(input)?;

    match string_escape_unicode(input, escape_start) {
        Ok(ch) => return Ok(ch),
        Err(ErrMode::Backtrack(_)) => {} // Try next alternative
        Err(e) => return Err(e),         // Propagate cut errors (E004, E005)
    }

    let escaped: IResult<char> = one_of(['"', '\\', '/', 'n', 'r', 't'])
        .map(|c| match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        })
        .parse_next(input);
    if let Ok(ch) = escaped {
        return Ok(ch);
    }

    // None matched - report an invalid escape
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        LexerDiagnostic {
            code: ErrorCode::E003,
            message: "invalid escape sequence",
            label: "escape starts here",
            help: Some("valid escapes: `\\\"`, `\\\\`, `\\/`, `\\n`, `\\r`, `\\t`, `\\uXXXX`"),
            start: escape_start,
        },
    )))
}

/// Parse a complete double-quoted string literal.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    // Regular string content (not quotes, backslashes, or newlines)
    let string_char = none_of(['"', '\\', '\n', '\r']);

    // String content: mix of regular chars and escapes
    let string_content =
        repeat(0.., alt((string_escape, string_char))).fold(String::new, |mut acc, ch| {
            acc.push(ch);
            acc
        });

    let start_pos = input.current_token_start();

    // Opening quote; absence means "not a string", so backtrack
    '"'.parse_next(input)
        .map_err(|_: ErrMode<ContextError<LexerDiagnostic>>| {
            ErrMode::Backtrack(ContextError::new())
        })?;

    // Commit after the opening quote
    cut_err(terminated(string_content, '"'))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            label: "string starts here",
            help: Some("add closing `\"`"),
            start: start_pos,
        })
        .parse_next(input)
        .map(Token::StringLiteral)
}

/// Parse a `//` line comment.
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded("//", take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse keywords with word boundary checking.
fn keyword<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        alt((literal("var"), literal("null"))),
        // Ensure the keyword is not a prefix of a longer identifier
        peek(not(one_of(|c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '$'
        }))),
    )
    .map(|keyword: &str| match keyword {
        "var" => Token::Var,
        "null" => Token::Null,
        _ => unreachable!(),
    })
    .parse_next(input)
}

/// Parse identifiers (JavaScript variable names such as `_astc_textures_8h`).
fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '$'
    })
    .verify(|s: &str| {
        s.chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
    })
    .map(Token::Identifier)
    .parse_next(input)
}

/// Parse single character tokens.
fn single_char_token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '['.value(Token::LBracket),
        ']'.value(Token::RBracket),
        ','.value(Token::Comma),
        '='.value(Token::Equals),
        ';'.value(Token::Semicolon),
    ))
    .parse_next(input)
}

/// Parse non-newline whitespace.
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse a single token of any kind.
fn token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        line_comment,
        string_literal,
        keyword,
        identifier,
        single_char_token,
        '\n'.value(Token::Newline),
        whitespace,
    ))
    .parse_next(input)
}

/// Convert a cut lexer error into a [`Diagnostic`].
///
/// The innermost context (added first) is the most specific one.
fn convert_error(err: ContextError<LexerDiagnostic>, end: usize) -> Diagnostic {
    match err.context().next() {
        Some(ctx) => {
            let span = Span::new(ctx.start..end.max(ctx.start));
            let mut diag = Diagnostic::error(ctx.message)
                .with_code(ctx.code)
                .with_label(span, ctx.label);
            if let Some(help) = ctx.help {
                diag = diag.with_help(help);
            }
            diag
        }
        None => Diagnostic::error("unexpected end of input").with_code(ErrorCode::E101),
    }
}

/// Tokenize navtree source text.
///
/// Unexpected characters are reported and skipped so that a single pass
/// surfaces every lexical problem; string-literal errors abort the scan
/// since the rest of the text cannot be framed reliably.
pub(crate) fn tokenize(source: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();
    let mut collector = DiagnosticCollector::new();

    while input.eof_offset() > 0 {
        match token.with_span().parse_next(&mut input) {
            Ok((token, range)) => tokens.push(PositionedToken {
                token,
                span: Span::new(range),
            }),
            Err(ErrMode::Backtrack(_)) => {
                let start = input.current_token_start();
                let ch = input.next_token().expect("input is not empty");
                collector.emit(
                    Diagnostic::error(format!("unexpected character `{}`", ch.escape_default()))
                        .with_code(ErrorCode::E002)
                        .with_label(Span::new(start..start + ch.len_utf8()), "not a navtree token"),
                );
            }
            Err(ErrMode::Cut(err)) => {
                collector.emit(convert_error(err, input.current_token_start()));
                break;
            }
            Err(ErrMode::Incomplete(_)) => break, // not a streaming lexer
        }
    }

    collector.finish()?;
    Ok(tokens)
}
