// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery path patterns.
//!
//! A pattern is a path with placeholders in braces:
//!
//! - `{id}`: the project id.
//! - `{n}`: the 1-based image number.
//! - `{n:0W}`: the image number zero-padded to `W` digits (for example
//!   `{n:03}` gives `007`).
//!
//! A pattern must contain at least one number placeholder, otherwise every
//! gallery image would resolve to the same path.
//!
//! ```rust
//! use vitrine_catalog::pattern::expand;
//!
//! assert_eq!(expand("img/{id}/{n:03}.jpg", "dunes", 7).unwrap(), "img/dunes/007.jpg");
//! assert_eq!(expand("img/{id}-{n}.webp", "dunes", 12).unwrap(), "img/dunes-12.webp");
//! ```

use core::fmt::Write as _;

use thiserror::Error;

/// Why a pattern was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `{` at the given byte offset has no matching `}`.
    #[error("unclosed `{{` at byte {0}")]
    Unclosed(usize),
    /// A placeholder name is not `id`, `n`, or `n:0W`.
    #[error("unknown placeholder `{{{0}}}`")]
    UnknownPlaceholder(String),
    /// The pattern has no `{n}` placeholder.
    #[error("pattern has no `{{n}}` placeholder")]
    MissingIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Id,
    Index { width: usize },
}

fn tokenize(pattern: &str) -> Result<Vec<Token<'_>>, PatternError> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    let mut offset = 0;
    while let Some(open) = rest.find('{') {
        if open > 0 {
            tokens.push(Token::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or(PatternError::Unclosed(offset + open))?;
        let name = &after[..close];
        tokens.push(parse_placeholder(name)?);
        let consumed = open + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    Ok(tokens)
}

fn parse_placeholder(name: &str) -> Result<Token<'static>, PatternError> {
    match name {
        "id" => Ok(Token::Id),
        "n" => Ok(Token::Index { width: 0 }),
        _ => name
            .strip_prefix("n:0")
            .and_then(|w| w.parse::<usize>().ok())
            .filter(|w| (1..=9).contains(w))
            .map(|width| Token::Index { width })
            .ok_or_else(|| PatternError::UnknownPlaceholder(name.to_string())),
    }
}

/// Checks that `pattern` is well formed and contains a number placeholder.
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    let tokens = tokenize(pattern)?;
    if tokens.iter().any(|t| matches!(t, Token::Index { .. })) {
        Ok(())
    } else {
        Err(PatternError::MissingIndex)
    }
}

/// Expands `pattern` for image number `n` (1-based) of project `id`.
pub fn expand(pattern: &str, id: &str, n: usize) -> Result<String, PatternError> {
    let tokens = tokenize(pattern)?;
    if !tokens.iter().any(|t| matches!(t, Token::Index { .. })) {
        return Err(PatternError::MissingIndex);
    }
    let mut out = String::with_capacity(pattern.len() + id.len() + 4);
    for token in tokens {
        match token {
            Token::Literal(s) => out.push_str(s),
            Token::Id => out.push_str(id),
            Token::Index { width } => {
                // Writing into a String cannot fail.
                let _ = write!(out, "{n:0width$}");
            }
        }
    }
    Ok(out)
}
