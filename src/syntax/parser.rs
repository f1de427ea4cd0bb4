// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for shell call expressions using nom
//
// Grammar:
//   expr    := atom args*
//   args    := '(' [expr (',' expr)*] ')'
//   atom    := integer | identifier | '(' expr ')'
//   integer := '-'? digit+

use crate::ast::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::{context, convert_error, VerboseError},
    multi::{many0, separated_list0},
    sequence::{delimited, pair},
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

// ============================================================================
// Lexer
// ============================================================================

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> ParseResult<'_, String> {
    context(
        "identifier",
        map(
            ws(recognize(pair(
                alt((alpha1, tag("_"))),
                many0(alt((alphanumeric1, tag("_")))),
            ))),
            |s: &str| s.to_string(),
        ),
    )(input)
}

fn integer(input: &str) -> ParseResult<'_, IntLit> {
    context(
        "integer",
        map_res(ws(recognize(pair(opt(char('-')), digit1))), |s: &str| {
            s.parse::<IntLit>()
        }),
    )(input)
}

// ============================================================================
// Expressions
// ============================================================================

fn expr(input: &str) -> ParseResult<'_, Expr> {
    let (input, head) = atom(input)?;
    let (input, calls) = many0(arguments)(input)?;

    Ok((
        input,
        calls
            .into_iter()
            .fold(head, |callee, args| Expr::call(callee, args)),
    ))
}

fn arguments(input: &str) -> ParseResult<'_, Vec<Expr>> {
    context(
        "argument list",
        delimited(
            ws(char('(')),
            separated_list0(ws(char(',')), expr),
            ws(char(')')),
        ),
    )(input)
}

fn atom(input: &str) -> ParseResult<'_, Expr> {
    context(
        "atom",
        alt((
            map(integer, Expr::Int),
            map(identifier, Expr::Name),
            delimited(ws(char('(')), expr, ws(char(')'))),
        )),
    )(input)
}

// ============================================================================
// Public API
// ============================================================================

/// Parse one shell line into a call expression. The whole line must be
/// consumed.
pub fn parse_line(input: &str) -> Result<Expr, String> {
    match all_consuming(expr)(input) {
        Ok((_, result)) => Ok(result),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(convert_error(input, e).trim_end().to_string())
        }
        Err(nom::Err::Incomplete(_)) => Err("incomplete input".to_string()),
    }
}
