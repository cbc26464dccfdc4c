//! Lexical analysis module for the Monkey language.
//!
//! This module turns Monkey source code into a stream of tokens. Scanning is
//! byte-oriented: only ASCII letters, digits, whitespace and the fixed
//! single-character operators are recognized, and every other byte becomes an
//! `Illegal` token so the stream always reaches `EndOfInput`.

#[allow(clippy::module_inception)]
mod lexer;
mod token;

pub use lexer::{
    format_tokens, tokenize, tokenize_checked, tokenize_with_positions, Lexer, TokenWithPosition,
};
pub use token::{classify, Span, Token, TokenKind};
