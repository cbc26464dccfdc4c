//! レキサーのメイン実装

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::token::{classify, Span, Token, TokenKind};
use crate::error::{LexResult, LexerError};

/// 入力終端を表す番兵バイト
const END_MARKER: u8 = 0;

/// 位置情報付きトークン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// Monkey言語のレキサー
///
/// 入力を左から右へ一度だけ走査する。カーソルは前進のみで、
/// 入力終端に達した後は `next_token` が毎回 `EndOfInput` を返す。
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// 現在の文字の位置
    position: usize,
    /// 次に読む位置（常に position + 1）
    read_position: usize,
    /// 現在調べている文字。終端では `END_MARKER`
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: END_MARKER,
        };
        lexer.read_char();
        lexer
    }

    /// 現在のバイトオフセット
    pub fn position(&self) -> usize {
        self.position
    }

    /// 次のトークンを取得
    pub fn next_token(&mut self) -> Token {
        self.next_token_with_position().token
    }

    /// 次のトークンをバイト範囲付きで取得
    pub fn next_token_with_position(&mut self) -> TokenWithPosition {
        self.skip_whitespace();

        let start = self.position;

        if self.at_end() {
            log::trace!("EOF @ {}", start);
            return TokenWithPosition {
                token: Token::eof(),
                span: start..start,
            };
        }

        let token = if is_letter(self.ch) {
            // read_identifier がカーソルを進めるので、ここでは read_char しない
            let literal = self.read_identifier();
            Token::new(classify(literal), literal)
        } else if is_digit(self.ch) {
            let literal = self.read_number();
            Token::new(TokenKind::IntegerLiteral, literal)
        } else {
            let kind = TokenKind::from_punctuation(self.ch).unwrap_or(TokenKind::Illegal);
            let token = Token::new(kind, char::from(self.ch));
            if kind == TokenKind::Illegal {
                log::debug!("不正なバイト 0x{:02x} @ {}", self.ch, start);
            }
            self.read_char();
            token
        };

        let span = start..self.position;
        log::trace!("{} {:?} @ {:?}", token.kind, token.literal, span);
        TokenWithPosition { token, span }
    }

    /// カーソルを1文字進める
    fn read_char(&mut self) {
        // 終端では位置を動かさない
        if self.position >= self.input.len() && self.read_position > 0 {
            self.ch = END_MARKER;
            return;
        }

        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(END_MARKER);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while !self.at_end() && is_letter(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while !self.at_end() && is_digit(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// `EndOfInput` の手前までトークンを返し、その後は常に `None`
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// ソースコードをトークン化（末尾の `EndOfInput` を含む）
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with_positions(input)
        .into_iter()
        .map(|t| t.token)
        .collect()
}

/// ソースコードを位置情報付きでトークン化（末尾の `EndOfInput` を含む）
pub fn tokenize_with_positions(input: &str) -> Vec<TokenWithPosition> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token_with_position();
        let done = token.token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

/// `Illegal` トークンをエラーとして扱うトークン化
///
/// 不正なトークンが1つでもあれば、すべての不正箇所をエラーとして返す。
pub fn tokenize_checked(input: &str) -> LexResult<Vec<TokenWithPosition>> {
    let tokens = tokenize_with_positions(input);

    let errors: Vec<LexerError> = tokens
        .iter()
        .filter(|t| t.token.kind == TokenKind::Illegal)
        .map(|t| LexerError::UnrecognizedToken {
            literal: t.token.literal.clone(),
            span: t.span.clone(),
        })
        .collect();

    if errors.is_empty() {
        Ok(tokens)
    } else {
        log::debug!("字句解析エラー {} 件", errors.len());
        Err(errors)
    }
}

/// デバッグ用：トークンストリームを文字列として出力
pub fn format_tokens(tokens: &[TokenWithPosition]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {:?} @ {:?}", t.token.kind, t.token.literal, t.span))
        .collect::<Vec<_>>()
        .join("\n")
}
