//! Monkey Language Lexer Library
//!
//! This library provides the scanning stage of the Monkey language toolchain.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{LexResult, LexerError};
pub use lexer::{classify, tokenize, Lexer, Token, TokenKind, TokenWithPosition};
