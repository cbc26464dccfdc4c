//! トークン定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// 入力文字列中のバイト範囲
pub type Span = Range<usize>;

/// Monkey言語のトークン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // 特殊トークン
    Illegal,
    EndOfInput,

    // 識別子・リテラル
    Identifier,
    IntegerLiteral,

    // 演算子
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,

    // デリミタ
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // キーワード
    Function,
    Let,
}

/// キーワードテーブル
const KEYWORDS: &[(&str, TokenKind)] = &[("fn", TokenKind::Function), ("let", TokenKind::Let)];

/// 識別子を分類する
///
/// キーワードテーブルに完全一致すればそのキーワード種別を、
/// それ以外はすべて [`TokenKind::Identifier`] を返す。
pub fn classify(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == ident)
        .map(|&(_, kind)| kind)
        .unwrap_or(TokenKind::Identifier)
}

impl TokenKind {
    /// 1バイトの記号に対応するトークン種別
    pub fn from_punctuation(ch: u8) -> Option<Self> {
        let kind = match ch {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'!' => TokenKind::Bang,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// トークン種別の正規名
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// トークン
///
/// `literal` はマッチしたソーステキストそのもの。`EndOfInput` では空文字列。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// 入力終端トークン
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "EOF"),
            kind if kind.is_keyword() => write!(f, "{}", kind),
            TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::Illegal => {
                write!(f, "{}({:?})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.literal),
        }
    }
}
